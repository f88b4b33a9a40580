//! Request-level helpers shared by controllers and parameter models.

pub mod extract;
pub mod parse;
pub mod validate;
