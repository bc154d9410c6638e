pub mod canonical;
pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod fetch;
pub mod normalize;
pub mod page;
pub mod record;
pub mod registry;
pub mod sources;
pub mod telemetry;

pub use error::{PaperfeedError, Result};
