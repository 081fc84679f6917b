//! Run gating conditions
//!
//! Boolean gates evaluated before any check runs. A tripped gate skips the
//! whole pipeline: runs outside the allowed owners, runs triggered by bot
//! accounts, and draft pull requests are not worth checking.

use crate::adapters::github::RepoSource;
use crate::domain::{EventContext, EventKind, Result};

/// Whether the repository owner may run checks
///
/// An empty allow-list means every owner is allowed; otherwise the owner must
/// be listed.
pub fn owner_allowed(owner: &str, allowed_owners: &[String]) -> bool {
    allowed_owners.is_empty() || allowed_owners.iter().any(|o| o == owner)
}

/// Whether a user name belongs to a known bot account
pub fn is_bot(user: &str, bot_users: &[String]) -> bool {
    bot_users.iter().any(|b| b == user)
}

/// Whether the triggering event was authored by a bot
///
/// Pull requests look at the PR author's login. Pushes look at the head
/// commit and accept either the resolved account login or the name recorded
/// in the commit metadata; an author the host could not resolve is treated
/// as human.
pub async fn triggered_by_bot(
    source: &dyn RepoSource,
    event: &EventContext,
    bot_users: &[String],
) -> Result<bool> {
    match &event.kind {
        EventKind::PullRequest => {
            let pr = source.get_pull_request(event.pull_request_number()?).await?;
            Ok(pr
                .author
                .map(|login| is_bot(&login, bot_users))
                .unwrap_or(false))
        }
        EventKind::Push => {
            let commit = source.get_commit(event.head_sha()?).await?;
            let by_login = commit
                .author_login
                .map(|login| is_bot(&login, bot_users))
                .unwrap_or(false);
            let by_name = commit
                .author_name
                .map(|name| is_bot(&name, bot_users))
                .unwrap_or(false);
            Ok(by_login || by_name)
        }
        EventKind::Other(_) => Ok(false),
    }
}

/// Whether the event is a draft pull request
pub async fn is_draft_pull_request(
    source: &dyn RepoSource,
    event: &EventContext,
) -> Result<bool> {
    if event.kind != EventKind::PullRequest {
        return Ok(false);
    }

    let pr = source.get_pull_request(event.pull_request_number()?).await?;
    Ok(pr.draft)
}
