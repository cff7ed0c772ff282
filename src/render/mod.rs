//! README rendering
//!
//! [`render`] is a pure function: the same [`AnswerRecord`] always produces
//! byte-identical output, and no input can make it fail. Section order comes
//! from [`SECTIONS`], which is independent of the question table so that a new
//! field touches both tables explicitly.
//!
//! Every section header is always emitted. Empty answers render as
//! [`NOT_PROVIDED`] instead of dropping the section.

pub mod template;

pub use template::{render_with_template, TemplateContext};

use crate::answers::AnswerRecord;

/// Placeholder for answers the operator left empty
pub const NOT_PROVIDED: &str = "_Not provided._";

/// Heading used when no title was given
pub const UNTITLED: &str = "Untitled Project";

/// Body sections that follow the title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Description,
    Contents,
    Installation,
    Usage,
    License,
    Contributing,
    Tests,
    Questions,
}

/// One `##` section of the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub heading: &'static str,
    /// Listed in the table of contents
    pub in_contents: bool,
}

impl Section {
    /// Markdown anchor for the heading
    pub fn anchor(&self) -> String {
        self.heading.to_lowercase().replace(' ', "-")
    }
}

/// Document layout, in output order
pub const SECTIONS: &[Section] = &[
    Section {
        id: SectionId::Description,
        heading: "Description",
        in_contents: false,
    },
    Section {
        id: SectionId::Contents,
        heading: "Table of Contents",
        in_contents: false,
    },
    Section {
        id: SectionId::Installation,
        heading: "Installation",
        in_contents: true,
    },
    Section {
        id: SectionId::Usage,
        heading: "Usage",
        in_contents: true,
    },
    Section {
        id: SectionId::License,
        heading: "License",
        in_contents: true,
    },
    Section {
        id: SectionId::Contributing,
        heading: "Contributing",
        in_contents: true,
    },
    Section {
        id: SectionId::Tests,
        heading: "Tests",
        in_contents: true,
    },
    Section {
        id: SectionId::Questions,
        heading: "Questions",
        in_contents: true,
    },
];

/// Render an answer record into README markdown
pub fn render(record: &AnswerRecord) -> String {
    let mut blocks: Vec<String> = Vec::with_capacity(SECTIONS.len() * 2 + 2);

    let title = single_line(&record.title);
    blocks.push(format!("# {}", or_default(&title, UNTITLED)));

    if let Some(badge) = record.license.badge() {
        blocks.push(badge.to_string());
    }

    for section in SECTIONS {
        blocks.push(format!("## {}", section.heading));
        blocks.push(render_section(section.id, record));
    }

    let mut output = blocks.join("\n\n");
    output.push('\n');
    output
}

/// Headings emitted by [`render`], in order, regardless of the answers
pub fn headings() -> impl Iterator<Item = &'static str> {
    SECTIONS.iter().map(|s| s.heading)
}

fn render_section(id: SectionId, record: &AnswerRecord) -> String {
    match id {
        SectionId::Description => text(&record.description),
        SectionId::Contents => render_contents(),
        SectionId::Installation => text(&record.installation),
        SectionId::Usage => text(&record.usage),
        SectionId::License => record.license.notice(),
        SectionId::Contributing => text(&record.contributing),
        SectionId::Tests => text(&record.tests),
        SectionId::Questions => render_contact(record),
    }
}

fn render_contents() -> String {
    SECTIONS
        .iter()
        .filter(|s| s.in_contents)
        .map(|s| format!("- [{}](#{})", s.heading, s.anchor()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_contact(record: &AnswerRecord) -> String {
    let github = single_line(&record.github);
    let github_line = if github.is_empty() {
        format!("- GitHub: {}", NOT_PROVIDED)
    } else {
        format!("- GitHub: [{github}](https://github.com/{github})")
    };

    let email = single_line(&record.email);
    let email_line = if email.is_empty() {
        format!("- Email: {}", NOT_PROVIDED)
    } else {
        format!("- Email: [{email}](mailto:{email})")
    };

    format!(
        "For questions about this project, reach out:\n\n{}\n{}",
        github_line, email_line
    )
}

fn text(value: &str) -> String {
    escape_headings(or_default(value, NOT_PROVIDED))
}

/// Collapse every run of whitespace, newlines included, to one space
fn single_line(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Escape `#` at the start of body lines so answers cannot add headings
fn escape_headings(value: &str) -> String {
    value
        .lines()
        .map(|line| {
            let indent = line.len() - line.trim_start().len();
            if line[indent..].starts_with('#') {
                format!("{}\\{}", &line[..indent], &line[indent..])
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}
