use crate::model::{ProjectIdentifier, WharfBranch, WharfProject};
use std::future::Future;
use std::pin::Pin;

pub type ProviderFuture<'a, T> = Pin<Box<dyn Future<Output = anyhow::Result<T>> + 'a>>;

/// Build definition file looked up in every project.
pub const WHARF_CI_FILE: &str = ".wharf-ci.yml";

/// Contract every remote provider adapter implements for the platform.
pub trait RemoteProvider {
    fn kind(&self) -> &'static str;

    /// Raw contents of `file_name` on the project's default branch.
    fn fetch_file<'a>(
        &'a self,
        identifier: &'a ProjectIdentifier,
        file_name: &'a str,
    ) -> ProviderFuture<'a, Vec<u8>>;

    fn fetch_branches<'a>(
        &'a self,
        identifier: &'a ProjectIdentifier,
    ) -> ProviderFuture<'a, Vec<WharfBranch>>;

    fn fetch_project_by_group_and_project_name<'a>(
        &'a self,
        group_name: &'a str,
        project_name: &'a str,
    ) -> ProviderFuture<'a, WharfProject>;

    /// Re-derives the identifier for a project previously returned by
    /// [`RemoteProvider::fetch_project_by_group_and_project_name`].
    fn wharf_project_to_identifier(&self, project: &WharfProject) -> ProjectIdentifier;

    fn fetch_ci_file<'a>(&'a self, identifier: &'a ProjectIdentifier) -> ProviderFuture<'a, Vec<u8>> {
        self.fetch_file(identifier, WHARF_CI_FILE)
    }
}
