pub mod boundary;
pub mod config;
pub mod detect;
pub mod error;
pub mod git_ops;
pub mod outputs;
pub mod ui;
pub mod version;

pub use error::{RelcheckError, Result};
