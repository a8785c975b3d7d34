use tpv_core::RuleCode;

/// Static text attached to a rule code. `message` may use the
/// `{unit}`, `{property}` and `{detail}` placeholders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Template {
    pub code: RuleCode,
    pub title: &'static str,
    pub message: &'static str,
    pub hint: &'static str,
    pub docs: &'static str,
}

pub const TEMPLATES: &[Template] = &[
    Template {
        code: RuleCode::InvalidCacheableTransformAnnotation,
        title: "Invalid use of @CacheableTransform",
        message: "Type '{unit}' is annotated with @CacheableTransform but is not a transform action: {detail}.",
        hint: "Remove the annotation, or use @CacheableTask to make a task cacheable.",
        docs: "invalid_use_of_cacheable_transform_annotation",
    },
    Template {
        code: RuleCode::MissingNormalization,
        title: "Missing normalization",
        message: "Type '{unit}' property '{property}' is a file input of a cacheable type: {detail}.",
        hint: "Declare how paths are compared with @PathSensitive, @Classpath or @CompileClasspath.",
        docs: "missing_normalization_annotation",
    },
    Template {
        code: RuleCode::ValueNotSet,
        title: "Value not set",
        message: "Type '{unit}' property '{property}' doesn't have a configured value: {detail}.",
        hint: "Assign a value to the property, or mark it @Optional.",
        docs: "value_not_set",
    },
    Template {
        code: RuleCode::TransformAbsolutePathSensitivity,
        title: "Absolute path sensitivity on a cacheable transform",
        message: "Type '{unit}' property '{property}' uses absolute path sensitivity: {detail}.",
        hint: "Use RELATIVE, NAME_ONLY or NONE path sensitivity, or make the transform non-cacheable.",
        docs: "cacheable_transform_cant_use_absolute_sensitivity",
    },
    Template {
        code: RuleCode::TransformShouldNotDeclareOutput,
        title: "Transform declares an output",
        message: "Type '{unit}' property '{property}' declares an output on a transform action: {detail}.",
        hint: "Remove the output annotation; transform outputs are registered through the transform outputs API.",
        docs: "artifact_transform_should_not_declare_output",
    },
    Template {
        code: RuleCode::IgnoredAnnotationsOnField,
        title: "Annotations on field are ignored",
        message: "Type '{unit}' field '{property}' has annotations that are ignored: {detail}.",
        hint: "Move the annotations to the getter of the property.",
        docs: "ignored_annotations_on_field",
    },
    Template {
        code: RuleCode::IgnoredAnnotationsOnMethod,
        title: "Annotations on method are ignored",
        message: "Type '{unit}' property '{property}' has an annotated method that is not a getter: {detail}.",
        hint: "Annotate the getter instead, or remove the annotations.",
        docs: "ignored_annotations_on_method",
    },
    Template {
        code: RuleCode::MutableTypeWithSetter,
        title: "Mutable type with setter",
        message: "Type '{unit}' property '{property}' has a mutable type and a setter: {detail}.",
        hint: "Remove the setter and configure the value in place.",
        docs: "mutable_type_with_setter",
    },
    Template {
        code: RuleCode::RedundantGetters,
        title: "Redundant getters",
        message: "Type '{unit}' property '{property}' has redundant getters: {detail}.",
        hint: "Keep a single getter; remove either the 'get' or the 'is' variant.",
        docs: "redundant_getters",
    },
    Template {
        code: RuleCode::PrivateGetterAnnotated,
        title: "Private getter is annotated",
        message: "Type '{unit}' property '{property}' is private and annotated: {detail}.",
        hint: "Make the getter public, or remove the annotations.",
        docs: "private_getter_must_not_be_annotated",
    },
    Template {
        code: RuleCode::IgnoredPropertyAnnotated,
        title: "Ignored property is annotated",
        message: "Type '{unit}' property '{property}' is ignored but annotated as input or output: {detail}.",
        hint: "Remove the input/output annotations, or stop ignoring the property.",
        docs: "ignored_property_must_not_be_annotated",
    },
    Template {
        code: RuleCode::ConflictingAnnotations,
        title: "Conflicting annotations",
        message: "Type '{unit}' property '{property}' has conflicting annotations: {detail}.",
        hint: "Keep only one of the conflicting annotations.",
        docs: "conflicting_annotations",
    },
];

pub fn template_for(code: RuleCode) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.code == code)
}

impl Template {
    /// Fill `{unit}`, `{property}` and `{detail}` in one pass; inserted
    /// values are never scanned again. Unknown placeholders stay as written.
    pub fn render(&self, unit: &str, property: Option<&str>, detail: &str) -> String {
        let mut out = String::with_capacity(self.message.len() + unit.len() + detail.len());
        let mut rest = self.message;
        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            let Some(end) = tail.find('}') else {
                rest = tail;
                break;
            };
            match &tail[1..end] {
                "unit" => out.push_str(unit),
                "property" => out.push_str(property.unwrap_or(unit)),
                "detail" => out.push_str(detail),
                _ => out.push_str(&tail[..=end]),
            }
            rest = &tail[end + 1..];
        }
        out.push_str(rest);
        out
    }
}
