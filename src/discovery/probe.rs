//! Candidate probing by execution.
//!
//! Each unique candidate is validated by running its own launcher
//! against the bundled identity payload and decoding the JSON object
//! the payload prints. Every failure mode comes back as a
//! [`ProbeError`] value; nothing in this module propagates past the
//! probe boundary or aborts sibling probes.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tokio::process::Command;
use tokio::time::timeout;

use super::types::RuntimeIdentity;

/// Payload jar expected next to the host binary.
pub const PAYLOAD_NAME: &str = "identity-probe.jar";

#[cfg(windows)]
const LAUNCHER: &str = "java.exe";
#[cfg(not(windows))]
const LAUNCHER: &str = "java";

/// Why a candidate failed probing.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// No launcher at any known sub-path under the candidate root.
    #[error("no java launcher under {path}")]
    ExecutableNotFound { path: String },

    /// The launcher could not be spawned.
    #[error("failed to spawn {}: {}", .launcher.display(), .source)]
    SpawnFailed {
        launcher: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The probe exceeded its deadline and was killed.
    #[error("probe did not finish within {limit:?}")]
    TimedOut { limit: Duration },

    /// The probe exited without printing anything.
    #[error("probe produced no output")]
    OutputEmpty,

    /// The probe output held no decodable identity object.
    #[error("probe output unparseable: {detail}")]
    OutputUnparseable { detail: String },

    /// The probe task itself died before producing an outcome.
    #[error("probe task failed: {detail}")]
    TaskFailed { detail: String },
}

impl ProbeError {
    /// Whether this failure carried a captured cause worth surfacing in
    /// the derived error list. A missing launcher is an expected state
    /// of many hint paths, not a captured fault.
    pub fn has_captured_cause(&self) -> bool {
        !matches!(self, ProbeError::ExecutableNotFound { .. })
    }
}

/// Everything a probe needs besides the candidate itself.
///
/// The host's own path is resolved exactly once at process start and
/// injected here; probes never re-resolve it.
#[derive(Debug, Clone)]
pub struct ProbeContext {
    payload: PathBuf,
    limit: Duration,
}

impl ProbeContext {
    /// Build a context from the resolved current-process path and the
    /// per-probe deadline.
    pub fn new(self_path: &Path, limit: Duration) -> Self {
        let payload = self_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(PAYLOAD_NAME);
        Self { payload, limit }
    }

    /// Location of the identity payload next to the host binary.
    pub fn payload(&self) -> &Path {
        &self.payload
    }

    /// Per-probe deadline.
    pub fn limit(&self) -> Duration {
        self.limit
    }
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not
/// permission bits.
#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}

/// Locate the java launcher under a candidate root.
///
/// `bin/java` is checked before a root-level `java`; the first existing
/// executable match wins.
pub fn locate_launcher(root: &Path) -> Option<PathBuf> {
    let candidates = [root.join("bin").join(LAUNCHER), root.join(LAUNCHER)];
    candidates
        .into_iter()
        .find(|p| p.is_file() && is_executable(p))
}

/// Probe a single candidate root.
///
/// Runs the candidate's launcher against the identity payload and
/// decodes what it prints. The child handle is configured to be killed
/// on drop, so the process is released on every exit path, including
/// timeout.
pub async fn probe(root: &str, ctx: &ProbeContext) -> Result<RuntimeIdentity, ProbeError> {
    let launcher =
        locate_launcher(Path::new(root)).ok_or_else(|| ProbeError::ExecutableNotFound {
            path: root.to_string(),
        })?;

    tracing::debug!(launcher = %launcher.display(), "spawning identity probe");

    let child = Command::new(&launcher)
        .arg("-jar")
        .arg(ctx.payload())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| ProbeError::SpawnFailed {
            launcher: launcher.clone(),
            source,
        })?;

    let output = match timeout(ctx.limit(), child.wait_with_output()).await {
        Ok(Ok(output)) => output,
        Ok(Err(source)) => return Err(ProbeError::SpawnFailed { launcher, source }),
        Err(_) => return Err(ProbeError::TimedOut { limit: ctx.limit() }),
    };

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));

    extract_identity(&text)
}

/// Pull the identity object out of combined probe output.
///
/// Launchers are chatty: `JAVA_OPTS` echoes, agent banners and
/// deprecation warnings can all precede the payload. Everything before
/// the first `{` is ignored, trailing text after the object is
/// tolerated, and unknown fields inside it are skipped.
pub fn extract_identity(text: &str) -> Result<RuntimeIdentity, ProbeError> {
    if text.trim().is_empty() {
        return Err(ProbeError::OutputEmpty);
    }

    let start = text.find('{').ok_or_else(|| ProbeError::OutputUnparseable {
        detail: "no '{' marker in output".to_string(),
    })?;

    let mut de = serde_json::Deserializer::from_str(&text[start..]);
    RuntimeIdentity::deserialize(&mut de).map_err(|e| ProbeError::OutputUnparseable {
        detail: e.to_string(),
    })
}
