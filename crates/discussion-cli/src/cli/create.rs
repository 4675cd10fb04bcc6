//! `gh-discussion create`: interactive Discussion creation.

use anyhow::{Context, Result};
use console::style;
use tracing::debug;

use discussion_core::service::DiscussionService;
use discussion_infra::credentials::resolve_token;
use discussion_infra::github::GitHubClient;
use discussion_infra::repo_context::resolve_repository;
use discussion_types::discussion::{CreateOutcome, NewDiscussion};

use crate::cli::prompt::TerminalPrompter;

const DRY_RUN_BANNER: &str = "🧪🧪🧪🧪🧪🧪🧪🧪";

const BODY_RULE: &str = "----------------------------------------";

/// Resolve the repository and token, then walk the user through the form.
pub async fn create_discussion(repo: Option<String>, dry_run: bool) -> Result<()> {
    if dry_run {
        println!("{DRY_RUN_BANNER}");
        println!("Running in dry run mode - will not create the discussion via the API");
        println!("To actually submit to the API, rerun without `--dry-run`");
        println!("{DRY_RUN_BANNER}");
    }

    let repo = resolve_repository(repo.as_deref()).await?;
    repo.ensure_supported()?;
    debug!(host = %repo.host, repo = %repo, dry_run, "Resolved target repository");

    println!(
        "Looking for Discussion category forms in {}",
        style(&repo).cyan()
    );

    let token = resolve_token().await?;
    let client = GitHubClient::new(&token)?;
    let service = DiscussionService::new(client.clone(), client.clone(), client);

    let mut prompter = TerminalPrompter::new();
    let outcome = service
        .create(&repo, &mut prompter, dry_run)
        .await
        .context("failed to create a Discussion")?;

    match outcome {
        CreateOutcome::DryRun(discussion) => print!("{}", render_dry_run(&discussion)),
        CreateOutcome::Created { url, .. } => {
            println!("{} Successfully created {url}", style("✓").green().bold());
        }
    }

    Ok(())
}

/// What would have been submitted, framed by the dry-run banner.
fn render_dry_run(discussion: &NewDiscussion) -> String {
    format!(
        "{DRY_RUN_BANNER}\n\
         Running in dry run mode - will not create the discussion via the API\n\
         Would attempt to create a discussion with repositoryID={:?} categoryID={:?} len(body)={} title={:?} with body:\n\
         {BODY_RULE}\n{}\n{BODY_RULE}\n\
         To actually submit to the API, rerun without `--dry-run`\n\
         {DRY_RUN_BANNER}\n",
        discussion.repository_id,
        discussion.category_id,
        discussion.body.len(),
        discussion.title,
        discussion.body,
    )
}
