//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let starship = factory::create_starship(&db).await?;
//! let cargo = factory::create_cargo(&db).await?;
//!
//! // A loading shipment with its starship and cargo
//! let (starship, cargo, shipment) = factory::helpers::create_loading_shipment(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let starship = factory::starship::StarshipFactory::new(&db)
//!     .name("Millennium Falcon")
//!     .capacity(1000.0)
//!     .volume(500.0)
//!     .build()
//!     .await?;
//! ```

pub mod cargo;
pub mod helpers;
pub mod shipment;
pub mod starship;

pub use cargo::create_cargo;
pub use shipment::create_shipment;
pub use starship::create_starship;
