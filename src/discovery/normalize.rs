//! Canonical path form for candidate grouping.

/// Normalize a path string for deduplication.
///
/// Folds `\` separators to `/`, strips one trailing separator, strips a
/// trailing `bin` segment case-insensitively, then strips the separator
/// that segment leaves behind. Idempotent.
///
/// The canonical form is used only for grouping; the raw string is
/// always kept for error reporting.
pub fn normalize(path: &str) -> String {
    let mut p = path.replace('\\', "/");
    if p.ends_with('/') {
        p.truncate(p.len() - 1);
    }

    let lowered = p.to_ascii_lowercase();
    if lowered == "bin" {
        p.clear();
    } else if lowered.ends_with("/bin") {
        p.truncate(p.len() - 4);
    }

    if p.ends_with('/') {
        p.truncate(p.len() - 1);
    }
    p
}
