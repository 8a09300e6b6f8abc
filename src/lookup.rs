//! Lookups over the admin API
//!
//! Read-only queries built on the list and retrieve operations: find by
//! email, and single retrieves that answer `None` instead of a NotFound error.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, warn};

use crate::admin::{
    AdminClient, Invite, InviteStatus, Project, ProjectApiKey, ProjectServiceAccount,
    ProjectUser, User,
};
use crate::error::Result;

fn none_on_not_found<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// All invites for an exact email, optionally narrowed to one status
pub async fn invites_by_email(
    client: &AdminClient,
    email: &str,
    status: Option<InviteStatus>,
) -> Result<Vec<Invite>> {
    let invites: Vec<Invite> = client
        .list_invites()
        .await?
        .into_iter()
        .filter(|invite| invite.email == email)
        .filter(|invite| status.map_or(true, |s| invite.status == s))
        .collect();
    debug!("Found {} invite(s) for {}", invites.len(), email);
    Ok(invites)
}

/// First organization user with exactly this email
pub async fn user_by_email(client: &AdminClient, email: &str) -> Result<Option<User>> {
    let users = client.list_users().await?;
    Ok(users.into_iter().find(|user| user.email == email))
}

/// Result of resolving several emails at once
#[derive(Debug, Default)]
pub struct UsersByEmails {
    /// Users keyed by email
    pub found: BTreeMap<String, User>,
    /// Requested emails with no matching user, sorted
    pub missing: Vec<String>,
}

/// Resolve a set of emails to users with a single listing
pub async fn users_by_emails(client: &AdminClient, emails: &[String]) -> Result<UsersByEmails> {
    let mut wanted: BTreeSet<&str> = emails.iter().map(String::as_str).collect();
    let mut result = UsersByEmails::default();

    for user in client.list_users().await? {
        if wanted.remove(user.email.as_str()) {
            result.found.insert(user.email.clone(), user);
        }
    }

    result.missing = wanted.into_iter().map(str::to_string).collect();
    if !result.missing.is_empty() {
        warn!(
            "The following emails were not found: {}",
            result.missing.join(", ")
        );
    }
    Ok(result)
}

pub async fn find_invite(client: &AdminClient, invite_id: &str) -> Result<Option<Invite>> {
    none_on_not_found(client.retrieve_invite(invite_id).await)
}

pub async fn find_project(client: &AdminClient, project_id: &str) -> Result<Option<Project>> {
    none_on_not_found(client.retrieve_project(project_id).await)
}

pub async fn find_project_api_key(
    client: &AdminClient,
    project_id: &str,
    key_id: &str,
) -> Result<Option<ProjectApiKey>> {
    none_on_not_found(client.retrieve_project_api_key(project_id, key_id).await)
}

pub async fn find_service_account(
    client: &AdminClient,
    project_id: &str,
    account_id: &str,
) -> Result<Option<ProjectServiceAccount>> {
    none_on_not_found(client.retrieve_service_account(project_id, account_id).await)
}

pub async fn find_project_user(
    client: &AdminClient,
    project_id: &str,
    user_id: &str,
) -> Result<Option<ProjectUser>> {
    none_on_not_found(client.retrieve_project_user(project_id, user_id).await)
}

pub async fn find_user(client: &AdminClient, user_id: &str) -> Result<Option<User>> {
    none_on_not_found(client.retrieve_user(user_id).await)
}
