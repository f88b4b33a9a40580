//! Starship Warehouse Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the warehouse
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and factories for seeding starships, cargo and shipments.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and setup
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn loads_cargo() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_warehouse_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let starship = factory::create_starship(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
