pub mod config;
pub mod discover;
pub mod runner;
pub mod scenario;

pub use config::*;
pub use discover::*;
pub use runner::*;
pub use scenario::*;
