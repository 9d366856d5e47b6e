//! Candidate deduplication by canonical path.

use std::collections::{BTreeSet, HashMap};

use super::normalize::normalize;
use super::types::{Candidate, RawHint};

/// Group raw hints into unique candidates.
///
/// Hints whose canonical forms match collapse into one candidate whose
/// tag set is the union of every contributing tag. The representative
/// path is the first-seen raw form, which keeps broken-record messages
/// stable across runs given identical hints. Group insertion order is
/// preserved.
pub fn dedup(hints: Vec<RawHint>) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for hint in hints {
        let canonical = normalize(&hint.path);
        match index.get(&canonical) {
            Some(&slot) => {
                candidates[slot].tags.insert(hint.tag);
            }
            None => {
                index.insert(canonical, candidates.len());
                let mut tags = BTreeSet::new();
                tags.insert(hint.tag);
                candidates.push(Candidate {
                    path: hint.path,
                    tags,
                });
            }
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::types::SourceTag;

    #[test]
    fn aliases_collapse_into_one_candidate() {
        let hints = vec![
            RawHint::new("/usr/lib/jvm/jdk17", SourceTag::Home),
            RawHint::new("/usr/lib/jvm/jdk17/bin", SourceTag::Path),
        ];
        let candidates = dedup(hints);
        assert_eq!(candidates.len(), 1);
        let tags: Vec<SourceTag> = candidates[0].tags.iter().copied().collect();
        assert_eq!(tags, vec![SourceTag::Home, SourceTag::Path]);
    }

    #[test]
    fn representative_is_first_seen_raw_form() {
        let hints = vec![
            RawHint::new("/usr/lib/jvm/jdk17/bin/", SourceTag::PathPrimary),
            RawHint::new("/usr/lib/jvm/jdk17", SourceTag::Home),
        ];
        let candidates = dedup(hints);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].path, "/usr/lib/jvm/jdk17/bin/");
    }

    #[test]
    fn duplicate_tags_are_flattened() {
        let hints = vec![
            RawHint::new("/opt/jdk/bin", SourceTag::Path),
            RawHint::new("/opt/jdk", SourceTag::Path),
        ];
        let candidates = dedup(hints);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].tags.len(), 1);
    }

    #[test]
    fn distinct_paths_stay_distinct_in_order() {
        let hints = vec![
            RawHint::new("/opt/jdk21", SourceTag::Override),
            RawHint::new("/opt/jdk17", SourceTag::Home),
            RawHint::new("/opt/jre8", SourceTag::PathPrimary),
        ];
        let candidates = dedup(hints);
        let paths: Vec<&str> = candidates.iter().map(|c| c.path.as_str()).collect();
        assert_eq!(paths, vec!["/opt/jdk21", "/opt/jdk17", "/opt/jre8"]);
    }

    #[test]
    fn no_hints_means_no_candidates() {
        assert!(dedup(Vec::new()).is_empty());
    }

    #[test]
    fn separator_style_does_not_split_groups() {
        let hints = vec![
            RawHint::new("C:\\Java\\jdk17\\BIN\\", SourceTag::Home),
            RawHint::new("C:/Java/jdk17", SourceTag::Path),
        ];
        let candidates = dedup(hints);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].path, "C:\\Java\\jdk17\\BIN\\");
        assert_eq!(candidates[0].tags.len(), 2);
    }
}
