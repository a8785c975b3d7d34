mod accessors;
mod annotations;
mod cacheability;

pub use accessors::*;
pub use annotations::*;
pub use cacheability::*;

use crate::rule::Rule;

/// Every built-in rule, in documentation order.
pub fn builtin_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(InvalidCacheableTransformAnnotation),
        Box::new(MissingNormalization),
        Box::new(ValueNotSet),
        Box::new(TransformAbsolutePathSensitivity),
        Box::new(TransformShouldNotDeclareOutput),
        Box::new(IgnoredAnnotationsOnField),
        Box::new(IgnoredAnnotationsOnMethod),
        Box::new(MutableTypeWithSetter),
        Box::new(RedundantGetters),
        Box::new(PrivateGetterAnnotated),
        Box::new(IgnoredPropertyAnnotated),
        Box::new(ConflictingAnnotations),
    ]
}
