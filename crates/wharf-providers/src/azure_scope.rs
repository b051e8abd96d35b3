use wharf_core::error::IdentifierError;
use wharf_core::model::{ProjectIdentifier, WharfProject, split_once_char};

pub const PROVIDER_NAME: &str = "azure-devops";
pub(crate) const API_VERSION: &str = "5.0";
pub(crate) const REF_BRANCHES_FILTER: &str = "heads/";
const REF_BRANCHES_PREFIX: &str = "refs/heads/";

/// Typed view of an Azure DevOps [`ProjectIdentifier`]: the organization
/// plus the id Azure DevOps assigned to the repository.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AzureProjectRef {
    pub organization: String,
    pub remote_project_id: String,
}

impl AzureProjectRef {
    /// The organization is the first segment of the group name; the
    /// provider project segment is not needed to address the repository.
    pub fn from_project(project: &WharfProject) -> Self {
        let (organization, _) = parse_group_name(&project.group_name);
        Self {
            organization: organization.to_string(),
            remote_project_id: project.remote_project_id.clone(),
        }
    }

    pub fn into_identifier(self) -> ProjectIdentifier {
        ProjectIdentifier::new(vec![self.organization, self.remote_project_id])
    }
}

impl TryFrom<&ProjectIdentifier> for AzureProjectRef {
    type Error = IdentifierError;

    fn try_from(identifier: &ProjectIdentifier) -> Result<Self, Self::Error> {
        let [organization, remote_project_id] = identifier.values() else {
            return Err(IdentifierError::WrongArity {
                provider: PROVIDER_NAME,
                expected: 2,
                found: identifier.values().len(),
            });
        };
        for (index, value) in [organization, remote_project_id].into_iter().enumerate() {
            if value.is_empty() {
                return Err(IdentifierError::EmptyValue {
                    provider: PROVIDER_NAME,
                    index,
                });
            }
        }
        Ok(Self {
            organization: organization.clone(),
            remote_project_id: remote_project_id.clone(),
        })
    }
}

/// Splits `organization/project` on the first `/`; anything after it
/// belongs to the project segment.
pub fn parse_group_name(group_name: &str) -> (&str, &str) {
    split_once_char(group_name, '/')
}

pub(crate) fn items_path(project: &AzureProjectRef) -> [&str; 6] {
    [
        project.organization.as_str(),
        "_apis",
        "git",
        "repositories",
        project.remote_project_id.as_str(),
        "items",
    ]
}

pub(crate) fn refs_path(project: &AzureProjectRef) -> [&str; 6] {
    [
        project.organization.as_str(),
        "_apis",
        "git",
        "repositories",
        project.remote_project_id.as_str(),
        "refs",
    ]
}

/// An empty `project` is kept as an empty segment rather than dropped.
pub(crate) fn repository_path<'a>(
    organization: &'a str,
    project: &'a str,
    repository: &'a str,
) -> [&'a str; 6] {
    [organization, project, "_apis", "git", "repositories", repository]
}

/// `None` when nothing but slashes is left, which would address the
/// repository root instead of a file.
pub(crate) fn scope_path(file_name: &str) -> Option<String> {
    let trimmed = file_name.trim_start_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    Some(format!("/{trimmed}"))
}

pub(crate) fn branch_name(ref_name: &str) -> &str {
    ref_name
        .strip_prefix(REF_BRANCHES_PREFIX)
        .unwrap_or(ref_name)
}
