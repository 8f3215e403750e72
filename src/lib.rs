pub mod config;
pub mod error;
pub mod flow;
pub mod git;
pub mod host;
pub mod template;
pub mod ui;

pub use error::{FlowMessageError, Result};
