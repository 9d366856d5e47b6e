//! Runtime discovery and probing engine.
//!
//! The pipeline: the collector reads hint sources (the override
//! variable, `JAVA_HOME`, filtered `PATH` entries), the deduplicator
//! groups hints by canonical path and merges their provenance, and each
//! unique candidate is probed concurrently by executing its launcher
//! against the bundled identity payload. Failures are isolated per
//! candidate; one broken installation never suppresses the rest.

pub mod aggregate;
pub mod collector;
pub mod dedup;
pub mod normalize;
pub mod probe;
pub mod types;

pub use aggregate::{discover, discover_candidates};
pub use collector::{collect, collect_with_env};
pub use dedup::dedup;
pub use normalize::normalize;
pub use probe::{extract_identity, locate_launcher, ProbeContext, ProbeError};
pub use types::{
    BrokenRecord, Candidate, Discovery, DiscoveryResult, IdentityRecord, ProbeFailure, RawHint,
    RuntimeIdentity, SourceTag,
};
