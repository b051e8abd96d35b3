use crate::azure_models::{RefsResponse, RepositoryItem};
use crate::azure_scope::{
    API_VERSION, AzureProjectRef, PROVIDER_NAME, REF_BRANCHES_FILTER, branch_name, items_path,
    parse_group_name, refs_path, repository_path, scope_path,
};
use crate::http::ApiClient;
use anyhow::Context;
use tracing::debug;
use wharf_core::config::ProviderConfig;
use wharf_core::model::{ProjectIdentifier, WharfBranch, WharfProject};
use wharf_core::provider::{ProviderFuture, RemoteProvider};

pub struct AzureDevOpsProvider {
    client: ApiClient,
}

impl AzureDevOpsProvider {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            client: ApiClient::new(config),
        }
    }

    pub async fn fetch_file(
        &self,
        identifier: &ProjectIdentifier,
        file_name: &str,
    ) -> anyhow::Result<Vec<u8>> {
        let project = AzureProjectRef::try_from(identifier)?;
        let Some(scope) = scope_path(file_name) else {
            anyhow::bail!(
                "empty file name requested for project with remote id {:?} in organization {}",
                project.remote_project_id,
                project.organization
            );
        };
        let path = items_path(&project);
        debug!(org = %project.organization, scope_path = %scope, "fetching Azure DevOps file");
        self.client
            .get_bytes(&path, &[("scopePath", scope.as_str())])
            .await
            .with_context(|| {
                format!(
                    "failed getting file {scope} for project with remote id {:?} in organization {}",
                    project.remote_project_id, project.organization
                )
            })
    }

    pub async fn fetch_branches(
        &self,
        identifier: &ProjectIdentifier,
    ) -> anyhow::Result<Vec<WharfBranch>> {
        let project = AzureProjectRef::try_from(identifier)?;
        let path = refs_path(&project);
        let refs: RefsResponse = self
            .client
            .get_json(
                &path,
                &[("api-version", API_VERSION), ("filter", REF_BRANCHES_FILTER)],
            )
            .await
            .with_context(|| {
                format!(
                    "failed getting branches for project with remote id {:?} in organization {}",
                    project.remote_project_id, project.organization
                )
            })?;
        debug!(org = %project.organization, count = refs.count, "listed Azure DevOps branches");

        Ok(refs
            .value
            .into_iter()
            .map(|item| WharfBranch {
                name: branch_name(&item.name).to_string(),
            })
            .collect())
    }

    pub async fn fetch_project_by_group_and_project_name(
        &self,
        group_name: &str,
        project_name: &str,
    ) -> anyhow::Result<WharfProject> {
        let (org, proj) = parse_group_name(group_name);
        let path = repository_path(org, proj, project_name);
        debug!(org, project = proj, repo = project_name, "fetching Azure DevOps repository");
        let repo: RepositoryItem = self
            .client
            .get_json(&path, &[("api-version", API_VERSION)])
            .await
            .with_context(|| format!("failed getting project named {proj} in {group_name}"))?;

        Ok(WharfProject {
            name: repo.name,
            group_name: format!("{org}/{}", repo.project.name),
            description: repo.project.description,
            git_url: repo.ssh_url,
            remote_project_id: repo.id,
        })
    }

    pub fn wharf_project_to_identifier(&self, project: &WharfProject) -> ProjectIdentifier {
        AzureProjectRef::from_project(project).into_identifier()
    }
}

impl RemoteProvider for AzureDevOpsProvider {
    fn kind(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn fetch_file<'a>(
        &'a self,
        identifier: &'a ProjectIdentifier,
        file_name: &'a str,
    ) -> ProviderFuture<'a, Vec<u8>> {
        Box::pin(AzureDevOpsProvider::fetch_file(self, identifier, file_name))
    }

    fn fetch_branches<'a>(
        &'a self,
        identifier: &'a ProjectIdentifier,
    ) -> ProviderFuture<'a, Vec<WharfBranch>> {
        Box::pin(AzureDevOpsProvider::fetch_branches(self, identifier))
    }

    fn fetch_project_by_group_and_project_name<'a>(
        &'a self,
        group_name: &'a str,
        project_name: &'a str,
    ) -> ProviderFuture<'a, WharfProject> {
        Box::pin(AzureDevOpsProvider::fetch_project_by_group_and_project_name(
            self,
            group_name,
            project_name,
        ))
    }

    fn wharf_project_to_identifier(&self, project: &WharfProject) -> ProjectIdentifier {
        AzureDevOpsProvider::wharf_project_to_identifier(self, project)
    }
}
