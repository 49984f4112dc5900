// Joblens Core - Domain Logic & Ports
// NO infrastructure dependencies: the job-board client and the renderers
// live in adapter crates and plug in through the port traits.

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
