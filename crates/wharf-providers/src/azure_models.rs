use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RepositoryItem {
    pub(crate) id: String,
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) ssh_url: String,
    pub(crate) project: ProjectItem,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectItem {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) description: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RefsResponse {
    pub(crate) value: Vec<RefItem>,
    #[serde(default)]
    pub(crate) count: usize,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RefItem {
    pub(crate) name: String,
}
