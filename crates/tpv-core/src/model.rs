use serde::{Deserialize, Serialize};

use crate::{annotations::AnnotationRef, types::*};

/// A task or transform-action type, as handed to the engine by the
/// type-introspection layer. The engine never mutates it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Unit {
    pub name: String,
    pub kind: UnitKind,
    pub cacheable: bool,
    pub annotations: Vec<AnnotationRef>,
    pub members: Vec<Member>,
}

impl Unit {
    pub fn new(name: impl Into<String>, kind: UnitKind) -> Self {
        Self { name: name.into(), kind, cacheable: false, annotations: vec![], members: vec![] }
    }

    pub fn cacheable(mut self, cacheable: bool) -> Self {
        self.cacheable = cacheable;
        self
    }

    pub fn annotated(mut self, annotation: AnnotationRef) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn has_annotation(&self, category: AnnotationCategory) -> bool {
        self.annotations.iter().any(|a| a.has(category))
    }

    /// Cacheability implied by the unit-level annotations alone.
    pub fn implied_cacheable(kind: UnitKind, annotations: &[AnnotationRef]) -> bool {
        let wanted = match kind {
            UnitKind::Task => AnnotationCategory::CacheableTask,
            UnitKind::Transform => AnnotationCategory::CacheableTransform,
        };
        annotations.iter().any(|a| a.has(wanted))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub kind: MemberKind,
    pub visibility: Visibility,
    pub returns_mutable_type: bool,
    pub boolean_kind: BooleanKind,
    pub annotations: Vec<AnnotationRef>,
    /// Signal from the configuration-check stage. `None` means it was not run.
    pub has_value: Option<bool>,
}

impl Member {
    pub fn new(name: impl Into<String>, kind: MemberKind) -> Self {
        Self {
            name: name.into(),
            kind,
            visibility: Visibility::Public,
            returns_mutable_type: false,
            boolean_kind: BooleanKind::None,
            annotations: vec![],
            has_value: None,
        }
    }

    pub fn field(name: impl Into<String>) -> Self {
        Self::new(name, MemberKind::Field)
    }

    pub fn getter(name: impl Into<String>) -> Self {
        Self::new(name, MemberKind::Getter)
    }

    pub fn setter(name: impl Into<String>) -> Self {
        Self::new(name, MemberKind::Setter)
    }

    pub fn method(name: impl Into<String>) -> Self {
        Self::new(name, MemberKind::Method)
    }

    pub fn private(mut self) -> Self {
        self.visibility = Visibility::Private;
        self
    }

    pub fn mutable(mut self, mutable: bool) -> Self {
        self.returns_mutable_type = mutable;
        self
    }

    pub fn boolean(mut self, kind: BooleanKind) -> Self {
        self.boolean_kind = kind;
        self
    }

    pub fn annotated(mut self, annotation: AnnotationRef) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_value(mut self, has_value: bool) -> Self {
        self.has_value = Some(has_value);
        self
    }

    pub fn is_getter(&self) -> bool {
        self.kind == MemberKind::Getter
    }

    pub fn has_input_or_output(&self) -> bool {
        self.annotations.iter().any(AnnotationRef::is_input_or_output)
    }
}
