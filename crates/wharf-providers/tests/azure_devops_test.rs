use httpmock::prelude::*;
use serde_json::json;
use wharf_core::config::ProviderConfig;
use wharf_core::error::IdentifierError;
use wharf_core::model::{ProjectIdentifier, WharfProject};
use wharf_core::provider::{RemoteProvider, WHARF_CI_FILE};
use wharf_providers::AzureDevOpsProvider;

fn provider_for(server: &MockServer) -> AzureDevOpsProvider {
    AzureDevOpsProvider::new(ProviderConfig::new("pat", &server.base_url()))
}

fn identifier(org: &str, id: &str) -> ProjectIdentifier {
    ProjectIdentifier::new(vec![org.to_string(), id.to_string()])
}

#[tokio::test]
async fn fetch_project_builds_wharf_project_from_repository() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/org/proj/_apis/git/repositories/repo")
                .query_param("api-version", "5.0")
                .header("authorization", "Basic OnBhdA==");
            then.status(200).json_body(json!({
                "id": "R1",
                "name": "repo",
                "sshUrl": "git@host:repo.git",
                "project": { "name": "proj", "description": "d" }
            }));
        })
        .await;

    let project = provider_for(&server)
        .fetch_project_by_group_and_project_name("org/proj", "repo")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(
        project,
        WharfProject {
            name: "repo".into(),
            group_name: "org/proj".into(),
            description: "d".into(),
            git_url: "git@host:repo.git".into(),
            remote_project_id: "R1".into(),
        }
    );
}

#[tokio::test]
async fn fetch_project_normalizes_group_to_provider_project_name() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/org/alias/_apis/git/repositories/repo");
            then.status(200).json_body(json!({
                "id": "R2",
                "name": "repo",
                "sshUrl": "git@host:repo.git",
                "project": { "name": "Canonical" }
            }));
        })
        .await;

    let provider = provider_for(&server);
    let project = provider
        .fetch_project_by_group_and_project_name("org/alias", "repo")
        .await
        .unwrap();

    assert_eq!(project.group_name, "org/Canonical");
    assert_eq!(project.description, "");
    let id = provider.wharf_project_to_identifier(&project);
    assert_eq!(id, identifier("org", "R2"));
}

#[tokio::test]
async fn fetch_project_round_trips_to_identifier() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/org/proj/_apis/git/repositories/repo");
            then.status(200).json_body(json!({
                "id": "R1",
                "name": "repo",
                "sshUrl": "git@host:repo.git",
                "project": { "name": "proj", "description": "d" }
            }));
        })
        .await;

    let provider: Box<dyn RemoteProvider> = Box::new(provider_for(&server));
    let project = provider
        .fetch_project_by_group_and_project_name("org/proj", "repo")
        .await
        .unwrap();
    let id = provider.wharf_project_to_identifier(&project);

    assert_eq!(id.values()[0], "org");
    assert_eq!(id.values()[1], "R1");
}

#[tokio::test]
async fn fetch_project_failure_names_project_and_group() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/org/proj/_apis/git/repositories/missing");
            then.status(404);
        })
        .await;

    let err = provider_for(&server)
        .fetch_project_by_group_and_project_name("org/proj", "missing")
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("proj"), "{message}");
    assert!(message.contains("org/proj"), "{message}");
    let status = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<reqwest::Error>())
        .and_then(|cause| cause.status());
    assert_eq!(status, Some(reqwest::StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn fetch_project_rejects_malformed_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/org/proj/_apis/git/repositories/repo");
            then.status(200).body("not json");
        })
        .await;

    let err = provider_for(&server)
        .fetch_project_by_group_and_project_name("org/proj", "repo")
        .await
        .unwrap_err();

    assert!(err.to_string().contains("org/proj"));
    assert!(
        err.chain()
            .any(|cause| cause.downcast_ref::<serde_json::Error>().is_some())
    );
}

#[tokio::test]
async fn fetch_project_with_group_lacking_slash_uses_empty_project_segment() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/org//_apis/git/repositories/repo")
                .query_param("api-version", "5.0");
            then.status(404);
        })
        .await;

    let err = provider_for(&server)
        .fetch_project_by_group_and_project_name("org", "repo")
        .await
        .unwrap_err();

    mock.assert_async().await;
    let message = err.to_string();
    assert_eq!(message, "failed getting project named  in org");
}

#[tokio::test]
async fn fetch_branches_strips_prefix_once_per_ref() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/org/_apis/git/repositories/R1/refs")
                .query_param("api-version", "5.0")
                .query_param("filter", "heads/");
            then.status(200).json_body(json!({
                "value": [
                    { "name": "refs/heads/main", "objectId": "a1", "url": "u1" },
                    { "name": "refs/heads/dev", "objectId": "b2", "url": "u2" }
                ],
                "count": 2
            }));
        })
        .await;

    let branches = provider_for(&server)
        .fetch_branches(&identifier("org", "R1"))
        .await
        .unwrap();

    mock.assert_async().await;
    let names: Vec<&str> = branches.iter().map(|branch| branch.name.as_str()).collect();
    assert_eq!(names, ["main", "dev"]);
    assert_eq!(branches.len(), 2);
}

#[tokio::test]
async fn fetch_branches_failure_names_remote_id_and_org() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/org/_apis/git/repositories/R1/refs");
            then.status(401);
        })
        .await;

    let err = provider_for(&server)
        .fetch_branches(&identifier("org", "R1"))
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("\"R1\""), "{message}");
    assert!(message.contains("organization org"), "{message}");
}

#[tokio::test]
async fn fetch_branches_rejects_malformed_identifier_without_request() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(200);
        })
        .await;

    let err = provider_for(&server)
        .fetch_branches(&ProjectIdentifier::new(vec!["org".into()]))
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<IdentifierError>(),
        Some(IdentifierError::WrongArity { found: 1, .. })
    ));
    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn fetch_file_uses_requested_file_name() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/org/_apis/git/repositories/R1/items")
                .query_param("scopePath", "/build/pipeline.yml");
            then.status(200).body("stages: []\n");
        })
        .await;

    let bytes = provider_for(&server)
        .fetch_file(&identifier("org", "R1"), "build/pipeline.yml")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(bytes, b"stages: []\n");
}

#[tokio::test]
async fn fetch_file_rejects_empty_file_name_without_request() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/org/_apis/git/repositories/R1/items")
                .query_param("scopePath", "/");
            then.status(200)
                .json_body(json!({ "objectId": "root", "isFolder": true }));
        })
        .await;

    let provider = provider_for(&server);
    for file_name in ["", "/", "//"] {
        let err = provider
            .fetch_file(&identifier("org", "R1"), file_name)
            .await
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("empty file name"), "{message}");
        assert!(message.contains("\"R1\""), "{message}");
        assert!(message.contains("organization org"), "{message}");
    }
    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn fetch_ci_file_requests_wharf_ci_yml() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/org/_apis/git/repositories/R1/items")
                .query_param("scopePath", format!("/{WHARF_CI_FILE}").as_str());
            then.status(200).body("inputs: []\n");
        })
        .await;

    let provider = provider_for(&server);
    let bytes = RemoteProvider::fetch_ci_file(&provider, &identifier("org", "R1"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(bytes, b"inputs: []\n");
}

#[tokio::test]
async fn fetch_file_failure_is_not_silent() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/org/_apis/git/repositories/R1/items");
            then.status(404);
        })
        .await;

    let err = provider_for(&server)
        .fetch_file(&identifier("org", "R1"), WHARF_CI_FILE)
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("R1"), "{message}");
    assert!(message.contains("org"), "{message}");
}
