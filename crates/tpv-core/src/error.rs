use thiserror::Error;

/// Raised when a unit description cannot be interpreted at all.
/// Rule violations are never reported through this type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedUnitError {
    #[error("unit is missing a name")]
    MissingUnitName,
    #[error("unit {unit}: member #{index} is missing a name")]
    MissingMemberName { unit: String, index: usize },
    #[error("unit {unit}: malformed annotation `{annotation}`")]
    MalformedAnnotation { unit: String, annotation: String },
    #[error("unit {unit}: unknown path sensitivity `{value}`")]
    UnknownPathSensitivity { unit: String, value: String },
}
