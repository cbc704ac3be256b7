//! Heading style detection and templates

use std::collections::HashMap;

use crate::model::{MarkerKind, SectionMarker, StyleFamily};

/// The heading convention a document already uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectedStyle {
    pub family: StyleFamily,
    /// Whether new sections get a closing marker
    pub paired: bool,
}

impl DetectedStyle {
    pub fn new(family: StyleFamily, paired: bool) -> Self {
        Self { family, paired }
    }

    /// Custom sections are always closed; dashed ones only when the document
    /// already closes its dashed sections.
    pub fn fallback(family: StyleFamily) -> Self {
        Self::new(family, family == StyleFamily::Custom)
    }

    pub fn header(&self, name: &str) -> String {
        match self.family {
            StyleFamily::Dashed => format!("# --- {} --- #", name),
            StyleFamily::Bracketed => format!("# [ {} ]", name),
            StyleFamily::Hash => format!("# # {}", name),
            StyleFamily::Labeled => format!("# section: {}", name),
            StyleFamily::Custom => format!("# @start {}", name),
        }
    }

    pub fn footer(&self, name: &str) -> Option<String> {
        if !self.paired {
            return None;
        }
        match self.family {
            StyleFamily::Dashed => Some(format!("# --- End {} --- #", name)),
            StyleFamily::Custom => Some(format!("# @end {}", name)),
            _ => None,
        }
    }
}

/// Pick the most frequent heading family among start markers.
///
/// Ties resolve in [`StyleFamily::ALL`] order; a document without headings
/// gets `default`.
pub fn detect_style(markers: &[SectionMarker], default: StyleFamily) -> DetectedStyle {
    let mut counts: HashMap<StyleFamily, usize> = HashMap::new();
    for marker in markers.iter().filter(|m| m.kind.is_addressable()) {
        if let Some(family) = marker.kind.style() {
            *counts.entry(family).or_insert(0) += 1;
        }
    }

    let mut best: Option<(StyleFamily, usize)> = None;
    for family in StyleFamily::ALL {
        let count = counts.get(&family).copied().unwrap_or(0);
        if count > 0 && best.map_or(true, |(_, c)| count > c) {
            best = Some((family, count));
        }
    }

    match best {
        Some((StyleFamily::Dashed, _)) => {
            let paired = markers.iter().any(|m| m.kind == MarkerKind::DashedEnd);
            DetectedStyle::new(StyleFamily::Dashed, paired)
        }
        Some((family, _)) => DetectedStyle::fallback(family),
        None => DetectedStyle::fallback(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::MarkerDetector;

    fn detect(text: &str) -> DetectedStyle {
        detect_style(&MarkerDetector::default().detect(text), StyleFamily::Dashed)
    }

    #[test]
    fn test_dominant_dashed() {
        let text = "\
# --- Git --- #
# --- Docker --- #
# --- Node --- #
# [ Python ]
";
        let style = detect(text);
        assert_eq!(style.family, StyleFamily::Dashed);
        assert!(!style.paired);
    }

    #[test]
    fn test_dominant_bracketed() {
        let style = detect("# [ A ]\n# [ B ]\n# --- C --- #\n");
        assert_eq!(style.family, StyleFamily::Bracketed);
    }

    #[test]
    fn test_no_markers_uses_default() {
        assert_eq!(detect("alias a='b'\n"), DetectedStyle::new(StyleFamily::Dashed, false));
        assert_eq!(
            detect_style(&[], StyleFamily::Custom),
            DetectedStyle::new(StyleFamily::Custom, true)
        );
    }

    #[test]
    fn test_end_markers_do_not_inflate_counts() {
        let text = "\
# --- A --- #
# --- End A --- #
# # B
# # C
";
        let style = detect(text);
        assert_eq!(style.family, StyleFamily::Hash);
    }

    #[test]
    fn test_paired_dashed() {
        let style = detect("# --- A --- #\nalias a='b'\n# --- End A --- #\n");
        assert!(style.paired);
        assert_eq!(style.footer("Git").unwrap(), "# --- End Git --- #");
    }

    #[test]
    fn test_templates_round_trip_through_detector() {
        let detector = MarkerDetector::default();
        for family in StyleFamily::ALL {
            let style = DetectedStyle::new(family, true);
            let header = style.header("Git Aliases");
            let marker = detector.detect_line(&header, 1).unwrap();
            assert_eq!(marker.kind.style(), Some(family), "{}", header);
            assert_eq!(marker.name, "Git Aliases");
            if let Some(footer) = style.footer("Git Aliases") {
                assert!(detector.detect_line(&footer, 2).unwrap().kind.is_section_end());
            }
        }
    }
}
