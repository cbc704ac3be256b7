//! Logical section segmentation
//!
//! Each addressable heading opens a section that runs to the line before the
//! next heading. When that next heading is a closing marker (`End` / `@end`)
//! the closing line belongs to the section it closes. Text outside any
//! heading becomes an [`UNLABELED`] section, so the returned sections cover
//! every line of the document exactly once.

use crate::model::{LogicalSection, ParserConfig, SectionMarker, UNLABELED};
use crate::utils::strings::split_lines_preserve_trailing;

use super::markers::MarkerDetector;
use super::registry::PatternRegistry;

#[derive(Debug, Clone, Copy, Default)]
pub struct Segmenter {
    registry: PatternRegistry,
    detector: MarkerDetector,
}

impl Segmenter {
    pub fn new(registry: PatternRegistry, detector: MarkerDetector) -> Self {
        Self { registry, detector }
    }

    pub fn from_config(config: &ParserConfig) -> Self {
        Self::new(
            PatternRegistry::from_config(config),
            MarkerDetector::from_config(config),
        )
    }

    /// Split a document into contiguous logical sections
    pub fn segment(&self, text: &str) -> Vec<LogicalSection> {
        let lines = split_lines_preserve_trailing(text);
        let markers = self.detector.boundary_markers(text);
        self.segment_lines(&lines, &markers)
    }

    fn segment_lines(&self, lines: &[&str], markers: &[SectionMarker]) -> Vec<LogicalSection> {
        let total = lines.len();
        let mut sections = Vec::new();
        let mut cursor = 1;
        let mut i = 0;

        while i < markers.len() {
            let marker = &markers[i];
            // Stray closing markers stay inside the surrounding unlabeled text
            if !marker.kind.is_addressable() {
                i += 1;
                continue;
            }

            if marker.line_number > cursor {
                sections.push(self.build(UNLABELED, lines, cursor, marker.line_number - 1, None));
            }

            let (end_line, content_end, consumed) = match markers.get(i + 1) {
                Some(next) if next.kind.is_section_end() => {
                    (next.line_number, next.line_number - 1, 2)
                }
                Some(next) => (next.line_number - 1, next.line_number - 1, 1),
                None => (total, total, 1),
            };

            sections.push(self.build(
                &marker.name,
                lines,
                marker.line_number,
                end_line,
                Some((marker.line_number + 1, content_end)),
            ));
            cursor = end_line + 1;
            i += consumed;
        }

        if cursor <= total {
            sections.push(self.build(UNLABELED, lines, cursor, total, None));
        }

        sections
    }

    /// `content_range` defaults to the whole `start..=end` span
    fn build(
        &self,
        label: &str,
        lines: &[&str],
        start: usize,
        end: usize,
        content_range: Option<(usize, usize)>,
    ) -> LogicalSection {
        let (from, to) = content_range.unwrap_or((start, end));
        let content = if from <= to {
            lines[from - 1..to].join("\n")
        } else {
            String::new()
        };
        let counts = self.registry.count_entries(&content);
        LogicalSection {
            label: label.to_string(),
            start_line: start,
            end_line: end,
            content,
            counts,
        }
    }
}
