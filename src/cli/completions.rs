//! Shell completions for the OneAuth console
//!
//! Static scripts come from `oneauth completion <shell>`. Dynamic TAB
//! completion of user and organization IDs queries the API at completion
//! time, using `ONEAUTH_CONFIG` (or the default config) and `ONEAUTH_API_URL`.

use std::io;
use std::time::Duration;

use clap::CommandFactory;
use clap_complete::engine::{ArgValueCandidates, CompletionCandidate};
use clap_complete::{Shell, generate};

use crate::cli::Cli;
use crate::client::models::Record;
use crate::client::{ListParams, OneAuthClient, OrgApi, UserApi};
use crate::config::Config;
use crate::output::formatters::truncate;

/// Maximum number of completion candidates to return
const MAX_COMPLETIONS: usize = 25;

/// Timeout for completion API calls.
const COMPLETION_TIMEOUT: Duration = Duration::from_secs(5);

/// Write a static completion script for `shell` to stdout.
pub fn run(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

/// Create a blocking runtime for completion API calls.
///
/// Completers are called synchronously by the shell, so we need
/// a runtime to execute async API calls.
fn blocking_runtime() -> Option<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .ok()
}

/// Build a client for completions.
///
/// Returns None if the config is unreadable. Completions should never break
/// the shell, so all errors are silent.
fn completion_client() -> Option<OneAuthClient> {
    let config_path = std::env::var("ONEAUTH_CONFIG").ok();
    let config = Config::load_or_default(config_path.as_deref()).ok()?;
    let override_url = std::env::var("ONEAUTH_API_URL").ok();
    OneAuthClient::new(&config.api_url(override_url.as_deref()), COMPLETION_TIMEOUT).ok()
}

/// Turn records into candidates: `{id}` with help `{name}`.
fn candidates<R: Record>(records: &[R]) -> Vec<CompletionCandidate> {
    records
        .iter()
        .take(MAX_COMPLETIONS)
        .map(|record| {
            let help = record.field("name").unwrap_or("--");
            CompletionCandidate::new(record.id().to_string()).help(Some(truncate(help, 40).into()))
        })
        .collect()
}

/// Complete user IDs with names as help.
///
/// Note: clap_complete handles prefix filtering - we return all candidates.
pub fn complete_user_ids() -> Vec<CompletionCandidate> {
    let (Some(client), Some(rt)) = (completion_client(), blocking_runtime()) else {
        return vec![];
    };

    let params = ListParams::new().page_size(MAX_COMPLETIONS);
    let result = rt.block_on(async {
        tokio::time::timeout(COMPLETION_TIMEOUT, client.list_users(&params)).await
    });

    match result {
        Ok(Ok(page)) => candidates(&page.data),
        _ => vec![],
    }
}

/// Complete organization IDs with names as help.
pub fn complete_org_ids() -> Vec<CompletionCandidate> {
    let (Some(client), Some(rt)) = (completion_client(), blocking_runtime()) else {
        return vec![];
    };

    let params = ListParams::new().page_size(MAX_COMPLETIONS);
    let result = rt.block_on(async {
        tokio::time::timeout(COMPLETION_TIMEOUT, client.list_orgs(&params)).await
    });

    match result {
        Ok(Ok(page)) => candidates(&page.data),
        _ => vec![],
    }
}

/// Create completion candidates for user IDs.
pub fn user_id_candidates() -> ArgValueCandidates {
    ArgValueCandidates::new(complete_user_ids)
}

/// Create completion candidates for organization IDs.
pub fn org_id_candidates() -> ArgValueCandidates {
    ArgValueCandidates::new(complete_org_ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::GlobalOrg;

    #[test]
    fn test_candidates_use_id_and_name() {
        let orgs: Vec<GlobalOrg> = (1..=30)
            .map(|i| GlobalOrg {
                id: format!("o-{}", i),
                name: (i % 2 == 0).then(|| format!("Org {}", i)),
                hrms_org_id: None,
                propeak_org_id: None,
                skillzengine_org_id: None,
            })
            .collect();

        let result = candidates(&orgs);

        assert_eq!(result.len(), MAX_COMPLETIONS);
        assert_eq!(result[0].get_value().to_string_lossy(), "o-1");
        assert_eq!(
            result[0].get_help().map(|h| h.to_string()).as_deref(),
            Some("--")
        );
        assert_eq!(
            result[1].get_help().map(|h| h.to_string()).as_deref(),
            Some("Org 2")
        );
    }
}
