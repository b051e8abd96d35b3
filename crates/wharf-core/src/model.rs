use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque token a provider hands out to re-address one of its projects.
///
/// Only the provider that produced it knows how many values it holds and
/// what they mean.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ProjectIdentifier {
    values: Vec<String>,
}

impl ProjectIdentifier {
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl fmt::Display for ProjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.values.join(":"))
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct WharfProject {
    pub name: String,
    /// `/`-joined path of the namespaces containing the project.
    pub group_name: String,
    pub description: String,
    pub git_url: String,
    pub remote_project_id: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct WharfBranch {
    pub name: String,
}

/// Splits `value` at the first `delimiter`, returning `(value, "")` when it
/// does not occur.
pub fn split_once_char(value: &str, delimiter: char) -> (&str, &str) {
    value.split_once(delimiter).unwrap_or((value, ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_once_char_keeps_remainder() {
        assert_eq!(split_once_char("a/b/c", '/'), ("a", "b/c"));
    }

    #[test]
    fn split_once_char_without_delimiter() {
        assert_eq!(split_once_char("a", '/'), ("a", ""));
        assert_eq!(split_once_char("", '/'), ("", ""));
    }

    #[test]
    fn split_once_char_edges() {
        assert_eq!(split_once_char("/b", '/'), ("", "b"));
        assert_eq!(split_once_char("a/", '/'), ("a", ""));
    }

    #[test]
    fn project_identifier_display_joins_values() {
        let id = ProjectIdentifier::new(vec!["org".into(), "R1".into()]);
        assert_eq!(id.to_string(), "org:R1");
        assert_eq!(id.values(), ["org".to_string(), "R1".to_string()]);
    }

    #[test]
    fn wharf_project_serializes_snake_case() {
        let project = WharfProject {
            name: "repo".into(),
            group_name: "org/proj".into(),
            description: "d".into(),
            git_url: "git@host:repo.git".into(),
            remote_project_id: "R1".into(),
        };
        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["group_name"], "org/proj");
        assert_eq!(value["remote_project_id"], "R1");
    }
}
