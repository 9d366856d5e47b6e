//! Discovery pipeline: collect, dedup, fan out probes, join.

use tokio::task::JoinHandle;

use super::collector;
use super::dedup::dedup;
use super::probe::{self, ProbeContext, ProbeError};
use super::types::{
    BrokenRecord, Candidate, Discovery, DiscoveryResult, IdentityRecord, ProbeFailure,
    RuntimeIdentity,
};

/// Run the full discovery pipeline against the process environment.
pub async fn discover(ctx: &ProbeContext) -> Discovery {
    discover_candidates(dedup(collector::collect()), ctx).await
}

/// Probe a prepared candidate list and aggregate the outcomes.
///
/// One task per candidate, unbounded fan-out; the join loop below is
/// the single synchronization barrier in the system. Probes know
/// nothing about grouping, so the merged tag set is reattached here
/// after each join. A task that dies instead of returning an outcome
/// becomes a broken record like any other failure.
pub async fn discover_candidates(candidates: Vec<Candidate>, ctx: &ProbeContext) -> Discovery {
    type ProbeHandle = JoinHandle<Result<RuntimeIdentity, ProbeError>>;

    let handles: Vec<(Candidate, ProbeHandle)> = candidates
        .into_iter()
        .map(|candidate| {
            let root = candidate.path.clone();
            let ctx = ctx.clone();
            let handle = tokio::spawn(async move { probe::probe(&root, &ctx).await });
            (candidate, handle)
        })
        .collect();

    let mut inventory = Vec::with_capacity(handles.len());
    let mut errors = Vec::new();

    for (candidate, handle) in handles {
        let outcome = match handle.await {
            Ok(outcome) => outcome,
            Err(join_error) => Err(ProbeError::TaskFailed {
                detail: join_error.to_string(),
            }),
        };

        let record = match outcome {
            Ok(identity) => {
                let vendor = identity.vendor_or_unknown().to_string();
                DiscoveryResult::Identified(IdentityRecord {
                    home: identity.home,
                    version: identity.version,
                    vendor,
                    tags: candidate.tags,
                })
            }
            Err(error) => {
                tracing::warn!(path = %candidate.path, %error, "candidate failed probing");
                if error.has_captured_cause() {
                    errors.push(ProbeFailure {
                        path: candidate.path.clone(),
                        detail: error.to_string(),
                    });
                }
                DiscoveryResult::Broken(BrokenRecord {
                    path: candidate.path,
                    error,
                    tags: candidate.tags,
                })
            }
        };
        inventory.push(record);
    }

    let identified = inventory.iter().filter(|r| r.is_identified()).count();
    tracing::info!(
        total = inventory.len(),
        identified,
        broken = inventory.len() - identified,
        "discovery complete"
    );

    Discovery { inventory, errors }
}
