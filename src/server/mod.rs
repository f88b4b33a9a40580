//! HTTP backend and business logic for the starship warehouse.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//! Every stock and load mutation runs inside a database transaction with the affected
//! rows locked, so concurrent requests cannot oversell cargo or overload a starship.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, OpenAPI descriptions and DTO conversion
//! - **Service Layer** (`service/`) - Business rules and transaction boundaries
//! - **Data Layer** (`data/`) - Repositories over SeaORM entities
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token guard, CORS and rate limiting
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Tracing, database connection and shutdown signal
//! - **Router** (`router`) - Route groups, rate limits and API documentation
//! - **Scheduler** (`scheduler/`) - Periodic maintenance sweep
//!
//! # Request Flow
//!
//! 1. **Router** applies CORS, tracing and the route group's rate limit
//! 2. **Controller** checks the bearer token, extracts and validates the request
//! 3. **Service** opens a transaction, locks rows and applies the business rules
//! 4. **Data** reads and writes entities and converts them to domain models
//! 5. **Controller** converts the domain model to a DTO and responds

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
