//! Shared data types for runtime discovery.

use std::collections::BTreeSet;

use serde::Deserialize;

use super::probe::ProbeError;

/// Origin of a single discovery hint.
///
/// One candidate can accumulate several tags when multiple hint sources
/// point at the same installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SourceTag {
    /// Explicit override variable (`JDK_SCOUT_JDK`).
    Override,
    /// Standard `JAVA_HOME` variable.
    Home,
    /// First matching `PATH` entry.
    PathPrimary,
    /// Any other matching `PATH` entry.
    Path,
}

impl SourceTag {
    /// Stable string form used in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            SourceTag::Override => "override",
            SourceTag::Home => "home",
            SourceTag::PathPrimary => "path-primary",
            SourceTag::Path => "path",
        }
    }
}

/// A raw hint emitted by the collector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawHint {
    /// The path exactly as the hint source supplied it.
    pub path: String,
    /// The source that produced it.
    pub tag: SourceTag,
}

impl RawHint {
    /// Create a new raw hint.
    pub fn new(path: impl Into<String>, tag: SourceTag) -> Self {
        Self {
            path: path.into(),
            tag,
        }
    }
}

/// A unique installation candidate after deduplication.
///
/// `path` is the first-seen raw form for its canonical group; `tags` is
/// the union of every hint that mapped into the group.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Representative path, kept in its original raw form.
    pub path: String,
    /// Merged provenance for the whole group.
    pub tags: BTreeSet<SourceTag>,
}

/// Identity payload reported by a probed installation.
///
/// This is the wire format the identity payload prints. `vendor` is
/// optional and unknown extra fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeIdentity {
    /// Home path as reported by the installation itself.
    pub home: String,
    /// Full version string.
    pub version: String,
    /// Vendor name, when the payload knows it.
    pub vendor: Option<String>,
}

impl RuntimeIdentity {
    /// Vendor string, defaulting to "Unknown" when the payload omits it.
    pub fn vendor_or_unknown(&self) -> &str {
        self.vendor.as_deref().unwrap_or("Unknown")
    }
}

/// A successfully identified installation.
#[derive(Debug, Clone)]
pub struct IdentityRecord {
    /// Home path reported by the installation itself. May legitimately
    /// differ from the alias that led to it.
    pub home: String,
    /// Full version string.
    pub version: String,
    /// Vendor name ("Unknown" when the payload omitted it).
    pub vendor: String,
    /// Merged provenance of the candidate.
    pub tags: BTreeSet<SourceTag>,
}

/// A candidate that failed probing.
#[derive(Debug)]
pub struct BrokenRecord {
    /// The original representative path, never a probed or derived form.
    pub path: String,
    /// What went wrong.
    pub error: ProbeError,
    /// Merged provenance of the candidate.
    pub tags: BTreeSet<SourceTag>,
}

/// Outcome of probing one candidate.
#[derive(Debug)]
pub enum DiscoveryResult {
    /// The candidate identified itself.
    Identified(IdentityRecord),
    /// The candidate failed somewhere between launcher lookup and
    /// payload decoding.
    Broken(BrokenRecord),
}

impl DiscoveryResult {
    /// Whether this record is a successful identification.
    pub fn is_identified(&self) -> bool {
        matches!(self, DiscoveryResult::Identified(_))
    }
}

/// A reportable probe failure: the original path plus a rendered detail.
#[derive(Debug, Clone)]
pub struct ProbeFailure {
    /// The original representative path of the failed candidate.
    pub path: String,
    /// Human-readable failure detail.
    pub detail: String,
}

/// The finished survey.
#[derive(Debug)]
pub struct Discovery {
    /// One record per unique candidate, in completion order. Not
    /// guaranteed deterministic; sort explicitly if you need order.
    pub inventory: Vec<DiscoveryResult>,
    /// Failure pairs for broken records whose error carried a captured
    /// cause. A missing launcher is not reported here.
    pub errors: Vec<ProbeFailure>,
}
