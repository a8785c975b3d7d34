use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    Task,
    Transform,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Field,
    #[serde(alias = "getter_method")]
    Getter,
    #[serde(alias = "setter_method")]
    Setter,
    #[serde(alias = "other_method")]
    Method,
}

impl MemberKind {
    pub fn is_method(self) -> bool {
        !matches!(self, MemberKind::Field)
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

/// How a boolean getter is spelled, if it is one.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BooleanKind {
    #[default]
    None,
    #[serde(alias = "is_prefix")]
    Is,
    #[serde(alias = "get_prefix")]
    Get,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnnotationCategory {
    Input,
    Output,
    Normalization,
    Ignoring,
    Optional,
    CacheableTask,
    CacheableTransform,
    Other,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PathSensitivity {
    Absolute,
    Relative,
    NameOnly,
    None,
}

impl PathSensitivity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Absolute => "ABSOLUTE",
            Self::Relative => "RELATIVE",
            Self::NameOnly => "NAME_ONLY",
            Self::None => "NONE",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        // accept both `ABSOLUTE` and `PathSensitivity.ABSOLUTE`
        let s = s.trim();
        let s = s.rsplit('.').next().unwrap_or(s);
        match s.to_ascii_uppercase().as_str() {
            "ABSOLUTE" => Some(Self::Absolute),
            "RELATIVE" => Some(Self::Relative),
            "NAME_ONLY" => Some(Self::NameOnly),
            "NONE" => Some(Self::None),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warning" | "warn" => Some(Self::Warning),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// One code per documented validation problem.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleCode {
    InvalidCacheableTransformAnnotation,
    MissingNormalization,
    ValueNotSet,
    TransformAbsolutePathSensitivity,
    TransformShouldNotDeclareOutput,
    IgnoredAnnotationsOnField,
    IgnoredAnnotationsOnMethod,
    MutableTypeWithSetter,
    RedundantGetters,
    PrivateGetterAnnotated,
    IgnoredPropertyAnnotated,
    ConflictingAnnotations,
}

impl RuleCode {
    pub const ALL: [RuleCode; 12] = [
        RuleCode::InvalidCacheableTransformAnnotation,
        RuleCode::MissingNormalization,
        RuleCode::ValueNotSet,
        RuleCode::TransformAbsolutePathSensitivity,
        RuleCode::TransformShouldNotDeclareOutput,
        RuleCode::IgnoredAnnotationsOnField,
        RuleCode::IgnoredAnnotationsOnMethod,
        RuleCode::MutableTypeWithSetter,
        RuleCode::RedundantGetters,
        RuleCode::PrivateGetterAnnotated,
        RuleCode::IgnoredPropertyAnnotated,
        RuleCode::ConflictingAnnotations,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RuleCode::InvalidCacheableTransformAnnotation => "INVALID_CACHEABLE_TRANSFORM_ANNOTATION",
            RuleCode::MissingNormalization => "MISSING_NORMALIZATION",
            RuleCode::ValueNotSet => "VALUE_NOT_SET",
            RuleCode::TransformAbsolutePathSensitivity => "TRANSFORM_ABSOLUTE_PATH_SENSITIVITY",
            RuleCode::TransformShouldNotDeclareOutput => "TRANSFORM_SHOULD_NOT_DECLARE_OUTPUT",
            RuleCode::IgnoredAnnotationsOnField => "IGNORED_ANNOTATIONS_ON_FIELD",
            RuleCode::IgnoredAnnotationsOnMethod => "IGNORED_ANNOTATIONS_ON_METHOD",
            RuleCode::MutableTypeWithSetter => "MUTABLE_TYPE_WITH_SETTER",
            RuleCode::RedundantGetters => "REDUNDANT_GETTERS",
            RuleCode::PrivateGetterAnnotated => "PRIVATE_GETTER_ANNOTATED",
            RuleCode::IgnoredPropertyAnnotated => "IGNORED_PROPERTY_ANNOTATED",
            RuleCode::ConflictingAnnotations => "CONFLICTING_ANNOTATIONS",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim().to_ascii_uppercase().replace('-', "_");
        Self::ALL.into_iter().find(|c| c.as_str() == wanted)
    }
}

impl std::fmt::Display for RuleCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
