//! Greeter - greeting and factorial demo
//!
//! Provides a greeting formatter and a bounded recursive factorial, plus the
//! command handling used by the `greeter` binary.

pub mod cli;
pub mod commands;
pub mod common;
pub mod factorial;
pub mod greeting;

// Re-export commonly used items for tests
pub use common::{Error, Result};
pub use factorial::{calculate_factorial, FACTORIAL_MAX_INPUT};
pub use greeting::greet;
