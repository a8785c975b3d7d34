use serde::{Deserialize, Serialize};

use crate::{error::MalformedUnitError, types::*};

struct CatalogEntry {
    name: &'static str,
    categories: &'static [AnnotationCategory],
    file_input: bool,
}

const fn entry(name: &'static str, categories: &'static [AnnotationCategory], file_input: bool) -> CatalogEntry {
    CatalogEntry { name, categories, file_input }
}

use crate::types::AnnotationCategory as C;

/// Known annotation names. Anything not listed resolves to `Other`.
const CATALOG: &[CatalogEntry] = &[
    entry("Input", &[C::Input], false),
    entry("Nested", &[C::Input], false),
    entry("InputFile", &[C::Input], true),
    entry("InputFiles", &[C::Input], true),
    entry("InputDirectory", &[C::Input], true),
    entry("Classpath", &[C::Input, C::Normalization], true),
    entry("CompileClasspath", &[C::Input, C::Normalization], true),
    entry("OutputFile", &[C::Output], false),
    entry("OutputFiles", &[C::Output], false),
    entry("OutputDirectory", &[C::Output], false),
    entry("OutputDirectories", &[C::Output], false),
    entry("LocalState", &[C::Output], false),
    entry("Destroys", &[C::Output], false),
    entry("PathSensitive", &[C::Normalization], false),
    entry("ReplacedBy", &[C::Ignoring], false),
    entry("Internal", &[C::Ignoring], false),
    entry("Optional", &[C::Optional], false),
    entry("CacheableTask", &[C::CacheableTask], false),
    entry("CacheableTransform", &[C::CacheableTransform], false),
];

fn lookup(name: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|e| e.name == name)
}

/// Names of every annotation the catalog knows about, in catalog order.
pub fn known_annotations() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|e| e.name)
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct AnnotationRef {
    pub name: String,
    pub categories: Vec<AnnotationCategory>,
    #[serde(default)]
    pub argument: Option<String>,
    #[serde(default)]
    pub path_sensitivity: Option<PathSensitivity>,
}

impl AnnotationRef {
    /// Resolve a bare annotation name against the catalog.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        let categories = match lookup(&name) {
            Some(e) => e.categories.to_vec(),
            None => vec![AnnotationCategory::Other],
        };
        // PathSensitive with no explicit value defaults to ABSOLUTE
        let path_sensitivity = (name == "PathSensitive").then_some(PathSensitivity::Absolute);
        Self { name, categories, argument: None, path_sensitivity }
    }

    pub fn path_sensitive(sensitivity: PathSensitivity) -> Self {
        let mut a = Self::named("PathSensitive");
        a.path_sensitivity = Some(sensitivity);
        a.argument = Some(sensitivity.as_str().to_string());
        a
    }

    /// Parse the textual form used in unit descriptions, e.g. `@InputFiles`,
    /// `PathSensitive(RELATIVE)` or `org.example.Custom`.
    pub fn parse(raw: &str, unit: &str) -> Result<Self, MalformedUnitError> {
        let malformed = || MalformedUnitError::MalformedAnnotation {
            unit: unit.to_string(),
            annotation: raw.to_string(),
        };

        let text = raw.trim();
        let text = text.strip_prefix('@').unwrap_or(text);

        let (qualified, argument) = match text.find('(') {
            Some(open) => {
                let inner = text[open + 1..].strip_suffix(')').ok_or_else(malformed)?;
                let inner = inner.trim();
                (&text[..open], (!inner.is_empty()).then(|| inner.to_string()))
            }
            None => (text, None),
        };

        let qualified = qualified.trim();
        let valid = !qualified.is_empty()
            && qualified.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
            && !qualified.ends_with('.');
        if !valid {
            return Err(malformed());
        }
        let simple = qualified.rsplit('.').next().unwrap_or(qualified);

        let mut annotation = Self::named(simple);
        if annotation.name == "PathSensitive" {
            if let Some(value) = &argument {
                let sensitivity = PathSensitivity::parse(value).ok_or_else(|| MalformedUnitError::UnknownPathSensitivity {
                    unit: unit.to_string(),
                    value: value.clone(),
                })?;
                annotation.path_sensitivity = Some(sensitivity);
            }
        }
        annotation.argument = argument;
        Ok(annotation)
    }

    pub fn has(&self, category: AnnotationCategory) -> bool {
        self.categories.contains(&category)
    }

    pub fn is_input(&self) -> bool {
        self.has(AnnotationCategory::Input)
    }

    pub fn is_output(&self) -> bool {
        self.has(AnnotationCategory::Output)
    }

    pub fn is_input_or_output(&self) -> bool {
        self.is_input() || self.is_output()
    }

    /// File or file-collection inputs, the ones that need a normalization strategy.
    pub fn is_file_input(&self) -> bool {
        lookup(&self.name).map(|e| e.file_input).unwrap_or(false)
    }
}

impl std::fmt::Display for AnnotationRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.argument {
            Some(arg) => write!(f, "@{}({})", self.name, arg),
            None => write!(f, "@{}", self.name),
        }
    }
}
