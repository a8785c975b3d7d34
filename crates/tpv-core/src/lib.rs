pub mod annotations;
pub mod error;
pub mod model;
pub mod naming;
pub mod property;
pub mod types;
pub mod violation;

pub use annotations::*;
pub use error::*;
pub use model::*;
pub use naming::*;
pub use property::*;
pub use types::*;
pub use violation::*;
