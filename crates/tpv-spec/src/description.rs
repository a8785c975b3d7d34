use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tpv_core::{AnnotationRef, BooleanKind, MalformedUnitError, Member, MemberKind, Unit, UnitKind, Visibility};

/// On-disk form of a unit, as written by the type-introspection layer.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnitDescription {
    // defaulted so a missing name is reported as a malformed unit, not a parse error
    #[serde(default)]
    pub name: String,
    pub kind: UnitKind,
    #[serde(default)]
    pub cacheable: Option<bool>,
    #[serde(default)]
    pub annotations: Vec<String>,
    #[serde(default)]
    pub members: Vec<MemberDescription>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemberDescription {
    #[serde(default)]
    pub name: String,
    pub kind: MemberKind,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub mutable_type: bool,
    #[serde(default)]
    pub boolean_kind: BooleanKind,
    #[serde(default)]
    pub annotations: Vec<String>,
    #[serde(default)]
    pub has_value: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct UnitsFile {
    units: Vec<UnitDescription>,
}

/// Read a YAML or JSON file holding either one unit or `units: [...]`.
pub fn load_units(path: &Path) -> Result<Vec<Unit>> {
    let s = std::fs::read_to_string(path).with_context(|| format!("read unit description: {}", path.display()))?;
    let is_json = path.extension().and_then(|e| e.to_str()) == Some("json");
    parse_units(&s, is_json).with_context(|| format!("load {}", path.display()))
}

pub fn parse_units(text: &str, is_json: bool) -> Result<Vec<Unit>> {
    let value: serde_json::Value = if is_json {
        serde_json::from_str(text).with_context(|| "parse unit description json")?
    } else {
        serde_yaml::from_str(text).with_context(|| "parse unit description yaml")?
    };

    let descriptions = if value.get("units").is_some() {
        serde_json::from_value::<UnitsFile>(value).with_context(|| "invalid units list")?.units
    } else {
        vec![serde_json::from_value::<UnitDescription>(value).with_context(|| "invalid unit description")?]
    };

    let units = descriptions
        .iter()
        .map(compile_unit)
        .collect::<Result<Vec<_>, MalformedUnitError>>()?;
    Ok(units)
}

/// Turn a description into the engine's `Unit`, resolving annotation text
/// through the catalog and deriving `cacheable` when it is not given.
pub fn compile_unit(desc: &UnitDescription) -> Result<Unit, MalformedUnitError> {
    let name = desc.name.trim();
    if name.is_empty() {
        return Err(MalformedUnitError::MissingUnitName);
    }

    let annotations = parse_annotations(&desc.annotations, name)?;
    let cacheable = desc
        .cacheable
        .unwrap_or_else(|| Unit::implied_cacheable(desc.kind, &annotations));

    let members = desc
        .members
        .iter()
        .enumerate()
        .map(|(index, m)| compile_member(m, name, index))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Unit {
        name: name.to_string(),
        kind: desc.kind,
        cacheable,
        annotations,
        members,
    })
}

fn compile_member(desc: &MemberDescription, unit: &str, index: usize) -> Result<Member, MalformedUnitError> {
    let name = desc.name.trim();
    if name.is_empty() {
        return Err(MalformedUnitError::MissingMemberName { unit: unit.to_string(), index });
    }
    Ok(Member {
        name: name.to_string(),
        kind: desc.kind,
        visibility: desc.visibility,
        returns_mutable_type: desc.mutable_type,
        boolean_kind: desc.boolean_kind,
        annotations: parse_annotations(&desc.annotations, unit)?,
        has_value: desc.has_value,
    })
}

fn parse_annotations(raw: &[String], unit: &str) -> Result<Vec<AnnotationRef>, MalformedUnitError> {
    raw.iter().map(|a| AnnotationRef::parse(a, unit)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tpv_core::PathSensitivity;

    const COMPILE_TASK: &str = r#"
name: org.example.CompileTask
kind: task
annotations: ["@CacheableTask"]
members:
  - name: getSource
    kind: getter
    annotations: [InputFiles, "PathSensitive(RELATIVE)"]
    has_value: true
  - name: setSource
    kind: setter
  - name: outputDir
    kind: field
    visibility: private
    annotations: ["@OutputDirectory"]
"#;

    #[test]
    fn parses_single_yaml_unit() {
        let units = parse_units(COMPILE_TASK, false).unwrap();
        assert_eq!(units.len(), 1);
        let u = &units[0];
        assert_eq!(u.name, "org.example.CompileTask");
        assert!(u.cacheable, "cacheable derived from @CacheableTask");
        assert_eq!(u.members.len(), 3);
        assert_eq!(u.members[0].annotations[1].path_sensitivity, Some(PathSensitivity::Relative));
        assert_eq!(u.members[0].has_value, Some(true));
        assert_eq!(u.members[2].visibility, Visibility::Private);
    }

    #[test]
    fn explicit_cacheable_wins() {
        let text = "name: T\nkind: task\ncacheable: false\nannotations: [CacheableTask]\n";
        assert!(!parse_units(text, false).unwrap()[0].cacheable);
    }

    #[test]
    fn parses_units_list_from_json() {
        let text = r#"{"units": [
            {"name": "A", "kind": "transform", "annotations": ["CacheableTransform"]},
            {"name": "B", "kind": "task", "members": [{"name": "isOn", "kind": "getter", "boolean_kind": "is"}]}
        ]}"#;
        let units = parse_units(text, true).unwrap();
        assert_eq!(units.len(), 2);
        assert!(units[0].cacheable);
        assert_eq!(units[1].members[0].boolean_kind, BooleanKind::Is);
    }

    #[test]
    fn missing_names_are_malformed_units() {
        let err = parse_units("kind: task\n", false).unwrap_err();
        assert_eq!(err.downcast_ref::<MalformedUnitError>(), Some(&MalformedUnitError::MissingUnitName));

        let err = parse_units("name: T\nkind: task\nmembers:\n  - kind: field\n", false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MalformedUnitError>(),
            Some(MalformedUnitError::MissingMemberName { index: 0, .. })
        ));
    }

    #[test]
    fn bad_annotation_and_unknown_fields_are_rejected() {
        let err = parse_units("name: T\nkind: task\nannotations: [\"Input(\"]\n", false).unwrap_err();
        assert!(err.downcast_ref::<MalformedUnitError>().is_some());

        assert!(parse_units("name: T\nkind: task\ncolour: red\n", false).is_err());
        assert!(parse_units("name: T\nkind: widget\n", false).is_err());
    }
}
