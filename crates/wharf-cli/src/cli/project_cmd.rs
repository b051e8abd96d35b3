use super::*;

pub(super) async fn handle_project(args: ProjectArgs, host: &str) -> anyhow::Result<()> {
    let provider = build_provider(host)?;
    let selector = &args.selector;
    let project = provider
        .fetch_project_by_group_and_project_name(&selector.group, &selector.project)
        .await
        .or_else(|err| map_provider_error(&selector.group, err))?;
    let identifier = provider.wharf_project_to_identifier(&project);

    if args.json {
        let payload = serde_json::json!({
            "project": project,
            "identifier": identifier,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).context("serialize project")?
        );
        return Ok(());
    }

    println!("Name: {}", project.name);
    println!("Group: {}", project.group_name);
    if !project.description.is_empty() {
        println!("Description: {}", project.description);
    }
    println!("Git URL: {}", project.git_url);
    println!("Remote ID: {}", project.remote_project_id);
    println!("Identifier: {identifier}");
    Ok(())
}

pub(super) async fn handle_branches(args: BranchesArgs, host: &str) -> anyhow::Result<()> {
    let provider = build_provider(host)?;
    let identifier = resolve_identifier(&provider, &args.selector).await?;
    let branches = provider
        .fetch_branches(&identifier)
        .await
        .or_else(|err| map_provider_error(&args.selector.group, err))?;
    for branch in branches {
        println!("{}", branch.name);
    }
    Ok(())
}

pub(super) async fn handle_file(args: FileArgs, host: &str) -> anyhow::Result<()> {
    let provider = build_provider(host)?;
    let identifier = resolve_identifier(&provider, &args.selector).await?;
    let bytes = provider
        .fetch_file(&identifier, &args.file)
        .await
        .or_else(|err| map_provider_error(&args.selector.group, err))?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(&bytes).context("write file to stdout")?;
    stdout.flush().context("flush stdout")?;
    Ok(())
}

async fn resolve_identifier(
    provider: &dyn RemoteProvider,
    selector: &ProjectSelector,
) -> anyhow::Result<ProjectIdentifier> {
    let project = provider
        .fetch_project_by_group_and_project_name(&selector.group, &selector.project)
        .await
        .or_else(|err| map_provider_error(&selector.group, err))?;
    Ok(provider.wharf_project_to_identifier(&project))
}
