//! Request guards and tower layers applied by the router.

pub mod auth;
pub mod cors;
pub mod rate_limit;

#[cfg(test)]
mod test;
