// Engine library root
// Record loading, range rebasing and the session service that ties them together.

pub mod config;
pub mod data;
pub mod error;
pub mod query;
pub mod rebase;
pub mod services;

pub use error::{EngineError, ErrorKind, Notification};
pub use rebase::rebase;
