//! Cursor-driven pagination over repository listings.

use std::collections::HashSet;

use serde_json::json;
use tracing::debug;

use ghpin_core::{Repo, RepoOrderField, Result};

use crate::decode::decode_repo;
use crate::transport::GraphqlTransport;

/// Fetch every page of a repository listing, deduplicating by URL.
///
/// The dedup set is seeded from `excluded_urls`, letting a caller skip
/// repositories already surfaced by another listing (typically pins).
/// Result order is first-seen order across pages; no sorting is applied.
///
/// A fresh variables value is built per request; pagination state is
/// local to this call, so concurrent listings never share cursors.
///
/// Termination: a page reporting `hasNextPage: false` ends the loop, and
/// a missing or null `pageInfo` is treated the same way — the source does
/// not guarantee the field is present, and looping on its absence would
/// never terminate. The same applies to `hasNextPage: true` with a null
/// `endCursor`.
///
/// Any transport failure aborts the whole operation; no partial results
/// are returned.
pub(crate) async fn paginate_repos(
    transport: &GraphqlTransport,
    query: &str,
    list_field: &str,
    login: &str,
    num: u32,
    order: RepoOrderField,
    excluded_urls: &[String],
) -> Result<Vec<Repo>> {
    let mut seen: HashSet<String> = excluded_urls.iter().cloned().collect();
    let mut repos = Vec::new();
    let mut after: Option<String> = None;
    let mut pages = 0u32;

    loop {
        let variables = json!({
            "login": login,
            "num": num,
            "after": after,
            "field": order.as_str(),
        });

        let body = transport.send(query, variables).await?;
        let listing = &body["data"]["user"][list_field];
        pages += 1;

        for node in listing["nodes"].as_array().into_iter().flatten() {
            if node.is_null() {
                continue;
            }
            let repo = decode_repo(node)?;
            let key = repo.identity_key().to_string();
            if seen.contains(&key) {
                continue;
            }
            seen.insert(key);
            repos.push(repo);
        }

        let page_info = &listing["pageInfo"];
        if page_info["hasNextPage"].as_bool() != Some(true) {
            break;
        }
        // hasNextPage without a cursor would re-request the first page
        // forever; treat it as the last page.
        match page_info["endCursor"].as_str() {
            Some(cursor) => after = Some(cursor.to_string()),
            None => break,
        }
    }

    debug!(list_field, pages, count = repos.len(), "pagination complete");
    Ok(repos)
}
