mod context;
mod engine;
mod error;

pub mod checks;
pub mod providers;
pub mod traits;

#[cfg(test)]
pub mod mocks;

pub use context::PresubmitContext;
pub use engine::{CheckRun, PresubmitEngine, PresubmitReport};
pub use error::{CheckError, Result};
