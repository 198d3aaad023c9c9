//! Line-oriented markup rendering.
//!
//! [`render`] interprets a stored report document one line at a time and
//! maps every line to exactly one [`BlockElement`]. Classification is
//! line-local: no rule looks across lines, so there is no renderer state
//! beyond the current line. Multi-line constructs cannot be represented;
//! document producers keep every logical unit on a single line.
//!
//! Precedence is encoded as an ordered rule table ([`LINE_RULES`]) evaluated
//! top to bottom, first match wins, with a plain-paragraph catch-all. This
//! grammar is a compatibility surface: reports persisted by older composer
//! versions must keep rendering, so rules are only ever appended after the
//! existing ones, never reordered.

use serde::{Deserialize, Serialize};

/// One run of inline text inside a mixed paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "text")]
pub enum InlineRun {
    Plain(String),
    Bold(String),
}

/// One renderable unit produced from one line of report text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum BlockElement {
    Heading1 { text: String },
    Heading2 { text: String },
    Heading3 { text: String },
    /// A whole line wrapped in `**`, delimiters stripped.
    BoldParagraph { text: String },
    /// A line mixing plain and bold runs, in original order.
    MixedParagraph { runs: Vec<InlineRun> },
    /// A single `- ` bullet line. Consecutive items are not grouped into a
    /// list container here; that is a presentation concern.
    ListItem { text: String },
    /// A bare `---` line.
    Rule,
    /// A line that is empty or whitespace only.
    LineBreak,
    /// Any line no other rule claimed, verbatim.
    Paragraph { text: String },
}

/// One classification rule: returns the element when the line matches.
type LineRule = fn(&str) -> Option<BlockElement>;

/// Ordered classification rules, most specific first. [`classify_line`]
/// falls through to [`BlockElement::Paragraph`] when none match.
const LINE_RULES: &[LineRule] = &[
    heading1,
    heading2,
    heading3,
    bold_paragraph,
    mixed_paragraph,
    list_item,
    horizontal_rule,
    line_break,
];

/// Render a report document into its ordered block elements.
///
/// Total and idempotent: every input line maps to exactly one element, so
/// the element count always equals the line count and rendering never
/// fails or drops content.
pub fn render(document: &str) -> Vec<BlockElement> {
    document.lines().map(classify_line).collect()
}

/// Classify a single line against the ordered rule table.
pub fn classify_line(line: &str) -> BlockElement {
    for rule in LINE_RULES {
        if let Some(element) = rule(line) {
            return element;
        }
    }
    BlockElement::Paragraph {
        text: line.to_string(),
    }
}

fn heading1(line: &str) -> Option<BlockElement> {
    line.strip_prefix("# ").map(|rest| BlockElement::Heading1 {
        text: rest.to_string(),
    })
}

fn heading2(line: &str) -> Option<BlockElement> {
    line.strip_prefix("## ").map(|rest| BlockElement::Heading2 {
        text: rest.to_string(),
    })
}

fn heading3(line: &str) -> Option<BlockElement> {
    line.strip_prefix("### ").map(|rest| BlockElement::Heading3 {
        text: rest.to_string(),
    })
}

fn bold_paragraph(line: &str) -> Option<BlockElement> {
    // The starting and ending delimiters must be distinct pairs, so a bare
    // `**` or `***` is not a bold paragraph.
    if line.len() >= 4 && line.starts_with("**") && line.ends_with("**") {
        Some(BlockElement::BoldParagraph {
            text: line[2..line.len() - 2].to_string(),
        })
    } else {
        None
    }
}

fn mixed_paragraph(line: &str) -> Option<BlockElement> {
    if !line.contains("**") {
        return None;
    }
    // Fields at even split positions are plain, odd positions bold. An odd
    // number of `**` occurrences leaves an unmatched trailing bold run;
    // that is defined behavior, not an error. Empty fields (leading,
    // trailing, or doubled delimiters) contribute no run.
    let runs = line
        .split("**")
        .enumerate()
        .filter(|(_, field)| !field.is_empty())
        .map(|(position, field)| {
            if position % 2 == 0 {
                InlineRun::Plain(field.to_string())
            } else {
                InlineRun::Bold(field.to_string())
            }
        })
        .collect();
    Some(BlockElement::MixedParagraph { runs })
}

fn list_item(line: &str) -> Option<BlockElement> {
    line.strip_prefix("- ").map(|rest| BlockElement::ListItem {
        text: rest.to_string(),
    })
}

fn horizontal_rule(line: &str) -> Option<BlockElement> {
    (line == "---").then_some(BlockElement::Rule)
}

fn line_break(line: &str) -> Option<BlockElement> {
    line.trim().is_empty().then_some(BlockElement::LineBreak)
}
