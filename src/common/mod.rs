//! Common utilities: configuration, errors, logging

pub mod config;
pub mod error;
pub mod logging;
pub mod paths;

pub use error::{Error, ErrorReport, Result};
