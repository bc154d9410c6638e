//! Command implementations for the paperfeed CLI

mod extract;
mod misc;
mod records;
mod sources;

pub use extract::*;
pub use misc::*;
pub use records::*;
pub use sources::*;
