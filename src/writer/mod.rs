//! Section writer
//!
//! Computes the document text that results from merging new entries into a
//! named section. [`SectionWriter::plan`] is pure: it never touches storage
//! or history, which is the engine's job.

mod style;

pub use style::{detect_style, DetectedStyle};

use crate::error::{Error, Result};
use crate::matcher::{SectionMatch, SectionMatcher};
use crate::model::{NewEntry, WriterConfig};
use crate::parser::patterns::{ALIAS_NAME_RE, EXPORT_NAME_RE};
use crate::parser::MarkerDetector;
use crate::utils::strings::{
    escape_double_quoted, escape_single_quoted, is_blank, line_ending,
    split_lines_preserve_trailing,
};

/// Where entries ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Existing,
    New,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Placement::Existing => write!(f, "existing"),
            Placement::New => write!(f, "new"),
        }
    }
}

/// A computed, not yet committed, edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    pub content: String,
    pub placement: Placement,
    /// Name of the section written to (the matched heading's own name when
    /// appending)
    pub section_name: String,
    /// History description, e.g. `Add 3 aliases to 'Git'`
    pub description: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct SectionWriter {
    detector: MarkerDetector,
    matcher: SectionMatcher,
    config: WriterConfig,
}

impl Default for SectionWriter {
    fn default() -> Self {
        Self::new(MarkerDetector::default(), WriterConfig::default())
    }
}

impl SectionWriter {
    pub fn new(detector: MarkerDetector, config: WriterConfig) -> Self {
        Self {
            detector,
            matcher: SectionMatcher::new(detector),
            config,
        }
    }

    /// Heading style new sections in `content` would use
    pub fn detect_style(&self, content: &str) -> DetectedStyle {
        detect_style(&self.detector.detect(content), self.config.default_style)
    }

    /// Compute the merged document without committing it
    pub fn plan(
        &self,
        content: &str,
        section_name: &str,
        entries: &[NewEntry],
        attribution: Option<&str>,
    ) -> Result<Splice> {
        let section_name = section_name.trim();
        validate(section_name, entries)?;

        let rendered: Vec<String> = entries.iter().map(render_entry).collect();
        let summary = describe_entries(entries);
        let attribution_line = self.attribution_line(&summary, attribution);
        let lines = split_lines_preserve_trailing(content);
        let newline = line_ending(content);

        match self.matcher.find(content, section_name) {
            Some(found) => {
                log::debug!(
                    "appending to '{}' (score {}, body ends at line {})",
                    found.marker.name,
                    found.score,
                    found.end_line
                );
                let new_content =
                    append_to_section(&lines, &found, &attribution_line, &rendered, newline);
                let name = found.marker.name;
                Ok(Splice {
                    content: new_content,
                    placement: Placement::Existing,
                    description: format!("Add {} to '{}'", summary, name),
                    message: format!("Added {} to existing section '{}'", summary, name),
                    section_name: name,
                })
            }
            None => {
                let style = self.detect_style(content);
                log::debug!("creating section '{}' in {} style", section_name, style.family);
                self.check_header(&style, section_name)?;
                let new_content = create_section(
                    &lines,
                    &style,
                    section_name,
                    &attribution_line,
                    &rendered,
                    newline,
                );
                Ok(Splice {
                    content: new_content,
                    placement: Placement::New,
                    description: format!("Add {} to '{}'", summary, section_name),
                    message: format!("Created section '{}' with {}", section_name, summary),
                    section_name: section_name.to_string(),
                })
            }
        }
    }

    /// A new section is only useful if its heading is read back as a start
    /// marker with the same name; otherwise later adds could never find it.
    fn check_header(&self, style: &DetectedStyle, section_name: &str) -> Result<()> {
        let header = style.header(section_name);
        match self.detector.detect_line(&header, 1) {
            Some(marker) if marker.kind.is_addressable() && marker.name == section_name => Ok(()),
            _ => Err(Error::InvalidEntry(format!(
                "section name {:?} cannot be written as a {} heading",
                section_name, style.family
            ))),
        }
    }

    fn attribution_line(&self, summary: &str, attribution: Option<&str>) -> String {
        match attribution.map(str::trim).filter(|a| !a.is_empty()) {
            Some(source) => format!(
                "# {} {} from {}",
                self.config.attribution_prefix, summary, source
            ),
            None => format!("# {} {}", self.config.attribution_prefix, summary),
        }
    }
}

fn validate(section_name: &str, entries: &[NewEntry]) -> Result<()> {
    if section_name.is_empty() || section_name.contains('\n') {
        return Err(Error::InvalidEntry(format!(
            "section name must be a single non-empty line: {:?}",
            section_name
        )));
    }
    if entries.is_empty() {
        return Err(Error::InvalidEntry("no entries to add".to_string()));
    }
    for entry in entries {
        let (name_ok, value) = match entry {
            NewEntry::Alias { name, command } => (ALIAS_NAME_RE.is_match(name), command),
            NewEntry::Export { name, value } => (EXPORT_NAME_RE.is_match(name), value),
        };
        if !name_ok {
            return Err(Error::InvalidEntry(format!(
                "invalid {} name: {:?}",
                entry.kind(),
                entry.name()
            )));
        }
        if value.contains('\n') {
            return Err(Error::InvalidEntry(format!(
                "{} '{}' spans multiple lines",
                entry.kind(),
                entry.name()
            )));
        }
    }
    Ok(())
}

/// Render one entry as a shell line.
///
/// Alias bodies are single-quoted; export values are double-quoted so
/// `$VAR` references keep expanding.
pub fn render_entry(entry: &NewEntry) -> String {
    match entry {
        NewEntry::Alias { name, command } => {
            format!("alias {}='{}'", name, escape_single_quoted(command))
        }
        NewEntry::Export { name, value } => {
            format!("export {}=\"{}\"", name, escape_double_quoted(value))
        }
    }
}

/// `3 aliases`, `1 export`, `2 aliases and 1 export`
pub fn describe_entries(entries: &[NewEntry]) -> String {
    let aliases = entries
        .iter()
        .filter(|e| matches!(e, NewEntry::Alias { .. }))
        .count();
    let exports = entries.len() - aliases;

    let plural = |n: usize, one: &str, many: &str| {
        format!("{} {}", n, if n == 1 { one } else { many })
    };
    match (aliases, exports) {
        (a, 0) => plural(a, "alias", "aliases"),
        (0, e) => plural(e, "export", "exports"),
        (a, e) => format!(
            "{} and {}",
            plural(a, "alias", "aliases"),
            plural(e, "export", "exports")
        ),
    }
}

fn append_to_section(
    lines: &[&str],
    found: &SectionMatch,
    attribution_line: &str,
    rendered: &[String],
    newline: &str,
) -> String {
    let heading = found.marker.line_number;

    // Insert after the last non-blank body line so the gap before the next
    // heading stays where it was
    let mut insert_at = found.end_line;
    while insert_at > heading && is_blank(lines[insert_at - 1]) {
        insert_at -= 1;
    }

    let mut block: Vec<String> = Vec::with_capacity(rendered.len() + 3);
    if insert_at > heading && !is_blank(lines[insert_at - 1]) {
        block.push(String::new());
    }
    block.push(attribution_line.to_string());
    block.extend(rendered.iter().cloned());

    let next_is_start_heading = found
        .boundary
        .as_ref()
        .is_some_and(|b| !b.kind.is_section_end());
    if insert_at == found.end_line && next_is_start_heading {
        block.push(String::new());
    }

    let mut out: Vec<String> = Vec::with_capacity(lines.len() + block.len());
    out.extend(lines[..insert_at].iter().map(|l| l.to_string()));
    out.extend(block);
    out.extend(lines[insert_at..].iter().map(|l| l.to_string()));
    join_document(&out, newline)
}

fn create_section(
    lines: &[&str],
    style: &DetectedStyle,
    section_name: &str,
    attribution_line: &str,
    rendered: &[String],
    newline: &str,
) -> String {
    let mut out: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
    if out.last().is_some_and(|l| !is_blank(l)) {
        out.push(String::new());
    }
    out.push(style.header(section_name));
    out.push(attribution_line.to_string());
    out.extend(rendered.iter().cloned());
    if let Some(footer) = style.footer(section_name) {
        out.push(footer);
    }
    join_document(&out, newline)
}

/// Join lines with `newline`, dropping the `\r` that CRLF lines carry after
/// splitting on `\n`
fn join_document(lines: &[String], newline: &str) -> String {
    let mut text = String::new();
    for line in lines {
        let line = if newline == "\r\n" {
            line.strip_suffix('\r').unwrap_or(line.as_str())
        } else {
            line.as_str()
        };
        text.push_str(line);
        text.push_str(newline);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::PatternRegistry;

    fn git_entries() -> Vec<NewEntry> {
        vec![
            NewEntry::alias("gs", "git status"),
            NewEntry::alias("gp", "git push"),
        ]
    }

    #[test]
    fn test_append_into_core_match() {
        let doc = "# --- Git --- #\nalias g='git'\n";
        let splice = SectionWriter::default()
            .plan(doc, "Git Aliases", &git_entries(), Some("catalog"))
            .unwrap();
        assert_eq!(splice.placement, Placement::Existing);
        assert_eq!(splice.section_name, "Git");
        assert_eq!(splice.description, "Add 2 aliases to 'Git'");
        assert_eq!(
            splice.content,
            "\
# --- Git --- #
alias g='git'

# Added 2 aliases from catalog
alias gs='git status'
alias gp='git push'
"
        );
    }

    #[test]
    fn test_append_before_next_heading_keeps_gap() {
        let doc = "# [ Git ]\nalias g='git'\n\n# [ Docker ]\nalias d='docker'\n";
        let splice = SectionWriter::default()
            .plan(doc, "git", &[NewEntry::alias("gs", "git status")], None)
            .unwrap();
        assert_eq!(
            splice.content,
            "\
# [ Git ]
alias g='git'

# Added 1 alias
alias gs='git status'

# [ Docker ]
alias d='docker'
"
        );
    }

    #[test]
    fn test_append_without_gap_adds_one() {
        let doc = "# # Git\nalias g='git'\n# # Docker\n";
        let splice = SectionWriter::default()
            .plan(doc, "Git", &[NewEntry::alias("gs", "git status")], None)
            .unwrap();
        assert_eq!(
            splice.content,
            "# # Git\nalias g='git'\n\n# Added 1 alias\nalias gs='git status'\n\n# # Docker\n"
        );
    }

    #[test]
    fn test_append_inside_paired_section() {
        let doc = "# @start Git\nalias g='git'\n# @end Git\n";
        let splice = SectionWriter::default()
            .plan(doc, "Git", &[NewEntry::alias("gs", "git status")], None)
            .unwrap();
        assert_eq!(
            splice.content,
            "# @start Git\nalias g='git'\n\n# Added 1 alias\nalias gs='git status'\n# @end Git\n"
        );
    }

    #[test]
    fn test_append_into_empty_section() {
        let doc = "# section: Git\n";
        let splice = SectionWriter::default()
            .plan(doc, "Git", &[NewEntry::alias("g", "git")], None)
            .unwrap();
        assert_eq!(splice.content, "# section: Git\n# Added 1 alias\nalias g='git'\n");
    }

    #[test]
    fn test_create_in_dominant_style() {
        let doc = "# [ Git ]\nalias g='git'\n# [ Docker ]\nalias d='docker'\n";
        let splice = SectionWriter::default()
            .plan(doc, "Node", &[NewEntry::export("NODE_ENV", "dev")], None)
            .unwrap();
        assert_eq!(splice.placement, Placement::New);
        assert_eq!(splice.message, "Created section 'Node' with 1 export");
        assert!(splice.content.ends_with(
            "alias d='docker'\n\n# [ Node ]\n# Added 1 export\nexport NODE_ENV=\"dev\"\n"
        ));
    }

    #[test]
    fn test_create_in_empty_document_defaults_to_dashed() {
        let splice = SectionWriter::default()
            .plan("", "Git", &[NewEntry::alias("g", "git")], None)
            .unwrap();
        assert_eq!(splice.content, "# --- Git --- #\n# Added 1 alias\nalias g='git'\n");
    }

    #[test]
    fn test_create_with_footer_when_document_pairs() {
        let doc = "# --- A --- #\nalias a='a'\n# --- End A --- #\n";
        let splice = SectionWriter::default()
            .plan(doc, "Git", &[NewEntry::alias("g", "git")], None)
            .unwrap();
        assert!(splice
            .content
            .ends_with("\n\n# --- Git --- #\n# Added 1 alias\nalias g='git'\n# --- End Git --- #\n"));
    }

    #[test]
    fn test_create_does_not_double_blank() {
        let doc = "alias a='b'\n\n";
        let splice = SectionWriter::default()
            .plan(doc, "Git", &[NewEntry::alias("g", "git")], None)
            .unwrap();
        assert_eq!(
            splice.content,
            "alias a='b'\n\n# --- Git --- #\n# Added 1 alias\nalias g='git'\n"
        );
    }

    #[test]
    fn test_rejects_name_read_back_as_end_marker() {
        let writer = SectionWriter::default();
        let err = writer
            .plan("alias a='b'\n", "End Game", &[NewEntry::alias("g", "git")], None)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidEntry(_)));
    }

    #[test]
    fn test_rejects_name_without_detectable_heading() {
        let writer = SectionWriter::default();
        for name in ["!!!", "---"] {
            let err = writer
                .plan("", name, &[NewEntry::alias("g", "git")], None)
                .unwrap_err();
            assert!(matches!(err, Error::InvalidEntry(_)), "{}", name);
        }
    }

    #[test]
    fn test_created_section_is_found_again() {
        let writer = SectionWriter::default();
        let entries = [NewEntry::alias("g", "git")];
        let first = writer.plan("alias a='b'\n", "Endpoints", &entries, None).unwrap();
        assert_eq!(first.placement, Placement::New);
        let second = writer.plan(&first.content, "Endpoints", &entries, None).unwrap();
        assert_eq!(second.placement, Placement::Existing);
    }

    #[test]
    fn test_append_keeps_crlf_line_endings() {
        let doc = "# [ Git ]\r\nalias g='git'\r\n\r\n# [ Docker ]\r\n";
        let splice = SectionWriter::default()
            .plan(doc, "Git", &[NewEntry::alias("gs", "git status")], None)
            .unwrap();
        assert_eq!(
            splice.content,
            "# [ Git ]\r\nalias g='git'\r\n\r\n# Added 1 alias\r\nalias gs='git status'\r\n\r\n# [ Docker ]\r\n"
        );
    }

    #[test]
    fn test_create_keeps_crlf_line_endings() {
        let splice = SectionWriter::default()
            .plan("alias a='b'\r\n", "Git", &[NewEntry::alias("g", "git")], None)
            .unwrap();
        assert_eq!(
            splice.content,
            "alias a='b'\r\n\r\n# --- Git --- #\r\n# Added 1 alias\r\nalias g='git'\r\n"
        );
        assert!(!splice.content.replace("\r\n", "").contains('\n'));
    }

    #[test]
    fn test_render_escapes_quotes() {
        assert_eq!(
            render_entry(&NewEntry::alias("hi", "echo 'hello'")),
            r"alias hi='echo '\''hello'\'''"
        );
        assert_eq!(
            render_entry(&NewEntry::export("MSG", r#"say "hi" to $USER"#)),
            r#"export MSG="say \"hi\" to $USER""#
        );
    }

    #[test]
    fn test_rendered_entries_parse_back() {
        let registry = PatternRegistry::default();
        let entries = vec![
            NewEntry::alias("hi", "echo 'hello' \"there\""),
            NewEntry::export("WIN", r"C:\tools"),
        ];
        let text: String = entries.iter().map(|e| render_entry(e) + "\n").collect();
        assert_eq!(
            registry.aliases(&text),
            vec![("hi".to_string(), "echo 'hello' \"there\"".to_string())]
        );
        assert_eq!(
            registry.exports(&text),
            vec![("WIN".to_string(), r"C:\tools".to_string())]
        );
    }

    #[test]
    fn test_validation() {
        let writer = SectionWriter::default();
        assert!(matches!(
            writer.plan("", "Git", &[], None),
            Err(Error::InvalidEntry(_))
        ));
        assert!(matches!(
            writer.plan("", "  ", &git_entries(), None),
            Err(Error::InvalidEntry(_))
        ));
        assert!(matches!(
            writer.plan("", "Git", &[NewEntry::alias("bad name", "x")], None),
            Err(Error::InvalidEntry(_))
        ));
        assert!(matches!(
            writer.plan("", "Env", &[NewEntry::export("1X", "x")], None),
            Err(Error::InvalidEntry(_))
        ));
        assert!(matches!(
            writer.plan("", "Git", &[NewEntry::alias("g", "a\nb")], None),
            Err(Error::InvalidEntry(_))
        ));
    }

    #[test]
    fn test_describe_entries() {
        assert_eq!(describe_entries(&[NewEntry::alias("a", "b")]), "1 alias");
        assert_eq!(
            describe_entries(&[
                NewEntry::alias("a", "b"),
                NewEntry::alias("c", "d"),
                NewEntry::export("E", "f"),
            ]),
            "2 aliases and 1 export"
        );
    }

    #[test]
    fn test_attribution_prefix_from_config() {
        let config = WriterConfig {
            attribution_prefix: "Imported".to_string(),
            ..WriterConfig::default()
        };
        let writer = SectionWriter::new(MarkerDetector::default(), config);
        let splice = writer
            .plan("", "Git", &[NewEntry::alias("g", "git")], Some("  "))
            .unwrap();
        assert!(splice.content.contains("# Imported 1 alias\n"));
    }
}
