use crate::{model::Member, types::*};

/// Maps a member to the logical property it belongs to.
///
/// Any `Fn(&Member) -> String` closure also works, which is how tests and
/// callers with unusual conventions plug in their own scheme.
pub trait PropertyNaming: Send + Sync {
    fn logical_name(&self, member: &Member) -> String;
}

impl<F> PropertyNaming for F
where
    F: Fn(&Member) -> String + Send + Sync,
{
    fn logical_name(&self, member: &Member) -> String {
        self(member)
    }
}

/// Prefix based accessor naming (`getFoo`, `isFoo`, `setFoo` -> `foo`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BeanNaming {
    pub getter_prefixes: Vec<String>,
    pub boolean_getter_prefixes: Vec<String>,
    pub setter_prefixes: Vec<String>,
}

impl Default for BeanNaming {
    fn default() -> Self {
        Self {
            getter_prefixes: vec!["get".to_string()],
            boolean_getter_prefixes: vec!["is".to_string()],
            setter_prefixes: vec!["set".to_string()],
        }
    }
}

impl PropertyNaming for BeanNaming {
    fn logical_name(&self, member: &Member) -> String {
        let prefixes: Vec<&String> = match member.kind {
            MemberKind::Getter if member.boolean_kind == BooleanKind::Is => {
                self.boolean_getter_prefixes.iter().chain(&self.getter_prefixes).collect()
            }
            MemberKind::Getter => self.getter_prefixes.iter().chain(&self.boolean_getter_prefixes).collect(),
            MemberKind::Setter => self.setter_prefixes.iter().collect(),
            MemberKind::Field | MemberKind::Method => return member.name.clone(),
        };

        prefixes
            .into_iter()
            .find_map(|p| strip_accessor_prefix(&member.name, p))
            .map(decapitalize)
            .unwrap_or_else(|| member.name.clone())
    }
}

/// `getFoo` -> `Foo`, but `getaway` stays unmatched.
fn strip_accessor_prefix<'a>(name: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = name.strip_prefix(prefix)?;
    rest.chars().next().filter(|c| c.is_uppercase()).map(|_| rest)
}

/// Lower-case the first letter unless the name starts with an acronym
/// (`URL` stays `URL`, `Source` becomes `source`).
pub fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    if chars.next().is_some_and(char::is_uppercase) && first.is_uppercase() {
        return name.to_string();
    }
    first.to_lowercase().chain(name.chars().skip(1)).collect()
}
