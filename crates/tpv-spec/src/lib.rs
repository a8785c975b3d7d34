pub mod description;

pub use description::*;
