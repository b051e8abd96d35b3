pub mod auth;
pub mod azure_devops;
mod azure_models;
pub mod azure_scope;
pub mod http;

pub use azure_devops::AzureDevOpsProvider;
