//! Inventory rendering.
//!
//! Turns a finished [`Discovery`] into a human summary or a JSON
//! document on stdout. Rendering is the end of the line here; shipping
//! results anywhere is a concern for downstream tooling.

use std::collections::BTreeSet;

use console::style;
use serde_json::json;

use crate::discovery::{Discovery, DiscoveryResult, SourceTag};

/// Render a finished discovery as a human-readable summary.
pub fn render_human(discovery: &Discovery, quiet: bool) -> String {
    let mut out = String::new();

    if !quiet {
        for record in &discovery.inventory {
            match record {
                DiscoveryResult::Identified(r) => {
                    out.push_str(&format!(
                        "{} {}: {} {} [{}]\n",
                        style("ok").green(),
                        r.home,
                        r.vendor,
                        r.version,
                        source_names(&r.tags).join(", "),
                    ));
                }
                DiscoveryResult::Broken(r) => {
                    out.push_str(&format!(
                        "{} {}: {} [{}]\n",
                        style("!!").red(),
                        r.path,
                        r.error,
                        source_names(&r.tags).join(", "),
                    ));
                }
            }
        }
    }

    let identified = discovery
        .inventory
        .iter()
        .filter(|r| r.is_identified())
        .count();
    let broken = discovery.inventory.len() - identified;
    out.push_str(&format!(
        "{} identified, {} broken ({} candidates)\n",
        identified,
        broken,
        discovery.inventory.len()
    ));
    out
}

/// Render a finished discovery as a JSON document for downstream
/// tooling.
pub fn render_json(discovery: &Discovery) -> String {
    let runtimes: Vec<serde_json::Value> = discovery
        .inventory
        .iter()
        .map(|record| match record {
            DiscoveryResult::Identified(r) => json!({
                "valid": true,
                "home": r.home,
                "version": r.version,
                "vendor": r.vendor,
                "sources": source_names(&r.tags),
            }),
            DiscoveryResult::Broken(r) => json!({
                "valid": false,
                "path": r.path,
                "error": r.error.to_string(),
                "sources": source_names(&r.tags),
            }),
        })
        .collect();

    let errors: Vec<serde_json::Value> = discovery
        .errors
        .iter()
        .map(|failure| {
            json!({
                "path": failure.path,
                "detail": failure.detail,
            })
        })
        .collect();

    let doc = json!({
        "runtimes": runtimes,
        "errors": errors,
    });
    serde_json::to_string_pretty(&doc).unwrap_or_else(|_| "{}".to_string())
}

fn source_names(tags: &BTreeSet<SourceTag>) -> Vec<&'static str> {
    tags.iter().map(|tag| tag.as_str()).collect()
}
