//! Section matching
//!
//! Finds the existing section a requested name (e.g. "Git Aliases") should be
//! merged into. Names are compared after normalisation, then by their *core*
//! (the name without a trailing descriptor such as "aliases"):
//!
//! | Rule | Score |
//! |------|-------|
//! | normalised names equal | 100 |
//! | cores equal | 90 |
//! | one core prefixes the other, both at least 3 chars | 50 |
//!
//! Plain substring containment never matches, so "Git" stays away from
//! "Digital".

use crate::model::SectionMarker;
use crate::parser::MarkerDetector;
use crate::utils::strings::split_lines_preserve_trailing;

pub const SCORE_EXACT: u32 = 100;
pub const SCORE_CORE: u32 = 90;
pub const SCORE_PREFIX: u32 = 50;

/// Shortest core allowed to take part in prefix matching
pub const MIN_PREFIX_LEN: usize = 3;

/// Normalised names that carry no meaning on their own
const GENERIC_NAMES: [&str; 7] = [
    "section",
    "sections",
    "config",
    "configuration",
    "settings",
    "stuff",
    "misc",
];

/// Descriptor suffixes stripped to obtain a core name, longest first so
/// "aliases" wins over "alias"
const CORE_SUFFIXES: [&str; 8] = [
    "configuration",
    "shortcuts",
    "commands",
    "settings",
    "aliases",
    "config",
    "stuff",
    "alias",
];

/// Best existing section for a requested name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMatch {
    pub marker: SectionMarker,
    pub score: u32,
    /// Last line belonging to the section body (1-indexed); new content goes
    /// right after it
    pub end_line: usize,
    /// The marker that bounds the section, `None` at end of file
    pub boundary: Option<SectionMarker>,
}

/// Lowercase, fold `&` to `and`, keep only alphanumerics. Generic words
/// collapse to the empty string.
pub fn normalize_name(name: &str) -> String {
    let normalized: String = name
        .to_lowercase()
        .replace('&', "and")
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect();
    if GENERIC_NAMES.contains(&normalized.as_str()) {
        String::new()
    } else {
        normalized
    }
}

/// Strip one known descriptor suffix from a normalised name
pub fn core_name(normalized: &str) -> &str {
    CORE_SUFFIXES
        .iter()
        .find_map(|suffix| normalized.strip_suffix(suffix))
        .unwrap_or(normalized)
}

/// Score a candidate section name against the requested one
pub fn score_names(target: &str, candidate: &str) -> u32 {
    let target = normalize_name(target);
    let candidate = normalize_name(candidate);
    if target.is_empty() || candidate.is_empty() {
        return 0;
    }
    if target == candidate {
        return SCORE_EXACT;
    }

    let target_core = core_name(&target);
    let candidate_core = core_name(&candidate);
    if target_core.is_empty() || candidate_core.is_empty() {
        return 0;
    }
    if target_core == candidate_core {
        return SCORE_CORE;
    }
    if target_core.chars().count() >= MIN_PREFIX_LEN
        && candidate_core.chars().count() >= MIN_PREFIX_LEN
        && (target_core.starts_with(candidate_core) || candidate_core.starts_with(target_core))
    {
        return SCORE_PREFIX;
    }
    0
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SectionMatcher {
    detector: MarkerDetector,
}

impl SectionMatcher {
    pub fn new(detector: MarkerDetector) -> Self {
        Self { detector }
    }

    /// Find the best section for `target`, or `None` when nothing scores.
    ///
    /// Ties go to the section that appears first.
    pub fn find(&self, text: &str, target: &str) -> Option<SectionMatch> {
        let boundaries = self.detector.boundary_markers(text);

        let mut best: Option<(usize, u32)> = None;
        for (i, marker) in boundaries.iter().enumerate() {
            if !marker.kind.is_addressable() {
                continue;
            }
            let score = score_names(target, &marker.name);
            log::debug!(
                "section candidate '{}' (line {}) scored {} for '{}'",
                marker.name,
                marker.line_number,
                score,
                target
            );
            if score > 0 && best.map_or(true, |(_, s)| score > s) {
                best = Some((i, score));
            }
        }

        let (index, score) = best?;
        let marker = boundaries[index].clone();
        let boundary = boundaries.get(index + 1).cloned();
        let end_line = match &boundary {
            Some(next) => next.line_number - 1,
            None => split_lines_preserve_trailing(text).len(),
        };

        Some(SectionMatch {
            marker,
            score,
            end_line,
            boundary,
        })
    }
}
