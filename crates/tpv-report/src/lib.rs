pub mod emitter;
pub mod report;
pub mod templates;

pub use emitter::*;
pub use report::*;
pub use templates::*;
