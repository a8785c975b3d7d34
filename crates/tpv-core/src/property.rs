use serde::Serialize;
use tracing::trace;

use crate::{
    annotations::AnnotationRef,
    error::MalformedUnitError,
    model::{Member, Unit},
    naming::PropertyNaming,
    types::*,
};

/// All members that share one logical property name.
///
/// `getter` is the first getter seen; any further getters land in
/// `redundant_getters` instead of being merged away.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct PropertyModel {
    pub name: String,
    pub getter: Option<Member>,
    pub redundant_getters: Vec<Member>,
    pub setter: Option<Member>,
    pub field: Option<Member>,
    pub other_methods: Vec<Member>,
    pub annotations: Vec<AnnotationRef>,
}

impl PropertyModel {
    pub fn has_redundant_getters(&self) -> bool {
        !self.redundant_getters.is_empty()
    }

    pub fn getters(&self) -> impl Iterator<Item = &Member> {
        self.getter.iter().chain(self.redundant_getters.iter())
    }

    pub fn has(&self, category: AnnotationCategory) -> bool {
        self.annotations.iter().any(|a| a.has(category))
    }

    pub fn input_or_output_annotations(&self) -> impl Iterator<Item = &AnnotationRef> {
        self.annotations.iter().filter(|a| a.is_input_or_output())
    }

    pub fn has_input_or_output(&self) -> bool {
        self.input_or_output_annotations().next().is_some()
    }

    /// External configuration signal, taken from the getter first.
    pub fn has_value(&self) -> Option<bool> {
        self.getters()
            .chain(self.field.iter())
            .find_map(|m| m.has_value)
    }

    fn resolve_annotations(&mut self) {
        let mut resolved: Vec<AnnotationRef> = Vec::new();
        let from_field = self.getter.is_some().then_some(self.field.as_ref()).flatten();
        for member in self.getters().chain(from_field) {
            for a in &member.annotations {
                if !resolved.contains(a) {
                    resolved.push(a.clone());
                }
            }
        }
        self.annotations = resolved;
    }
}

/// Group a unit's members into property models, in first-seen order.
pub fn build_properties(unit: &Unit, naming: &dyn PropertyNaming) -> Result<Vec<PropertyModel>, MalformedUnitError> {
    if unit.name.trim().is_empty() {
        return Err(MalformedUnitError::MissingUnitName);
    }

    let mut properties: Vec<PropertyModel> = Vec::new();
    for (index, member) in unit.members.iter().enumerate() {
        if member.name.trim().is_empty() {
            return Err(MalformedUnitError::MissingMemberName { unit: unit.name.clone(), index });
        }

        let name = naming.logical_name(member);
        let slot = match properties.iter().position(|p| p.name == name) {
            Some(i) => i,
            None => {
                properties.push(PropertyModel { name: name.clone(), ..Default::default() });
                properties.len() - 1
            }
        };
        let property = &mut properties[slot];

        match member.kind {
            MemberKind::Getter if property.getter.is_none() => property.getter = Some(member.clone()),
            MemberKind::Getter => property.redundant_getters.push(member.clone()),
            // overloaded setters collapse onto the first one
            MemberKind::Setter if property.setter.is_none() => property.setter = Some(member.clone()),
            MemberKind::Setter => {}
            MemberKind::Field if property.field.is_none() => property.field = Some(member.clone()),
            MemberKind::Field => {}
            MemberKind::Method => property.other_methods.push(member.clone()),
        }
    }

    for property in &mut properties {
        property.resolve_annotations();
    }
    trace!(unit = %unit.name, properties = properties.len(), "built property models");
    Ok(properties)
}
