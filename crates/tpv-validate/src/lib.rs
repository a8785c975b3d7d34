pub mod engine;
pub mod exclusivity;
pub mod registry;
pub mod rule;
pub mod rules;

pub use engine::*;
pub use exclusivity::*;
pub use registry::*;
pub use rule::*;
