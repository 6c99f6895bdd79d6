use super::{classify, split_sections, Classification, LinePosition, Section};

/// How bullet lines are drawn
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum BulletPolicy {
    /// Replace the leading `-` with a `•` glyph
    #[default]
    Glyph,
    /// Keep the `-` as written
    Dash,
}

impl BulletPolicy {
    /// The text drawn for a bullet line. Either way the line is indented by
    /// its paragraph style, not by padding it with spaces.
    pub fn render(&self, line: &str) -> String {
        let line = line.trim();
        match self {
            BulletPolicy::Glyph => {
                let item = line.strip_prefix('-').unwrap_or(line).trim_start();
                format!("• {item}")
            }
            BulletPolicy::Dash => line.to_string(),
        }
    }
}

/// One entry of a [Story]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoryItem {
    /// A line of text, ready to draw, and the role it plays
    Line {
        text: String,
        classification: Classification,
        position: LinePosition,
    },
    /// The end of a section
    SectionBreak,
}

/// The résumé as an ordered sequence of classified lines and section
/// boundaries. Text is stored as plain text; escaping for a particular
/// renderer is the renderer's business.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Story {
    pub items: Vec<StoryItem>,
}

impl Story {
    /// Every line with its classification, skipping section breaks
    pub fn lines(&self) -> impl Iterator<Item = (&str, Classification)> {
        self.items.iter().filter_map(|item| match item {
            StoryItem::Line {
                text,
                classification,
                ..
            } => Some((text.as_str(), *classification)),
            StoryItem::SectionBreak => None,
        })
    }
}

/// Classify every non-blank line of every section, in order, closing each
/// section with a break
pub fn assemble(sections: &[Section], bullets: BulletPolicy) -> Story {
    let mut items: Vec<StoryItem> = Vec::new();
    let mut ordinal = 0usize;

    for section in sections {
        for (line_index, line) in section.non_blank_lines() {
            let position = LinePosition {
                section: section.index,
                line: line_index,
                ordinal,
            };
            ordinal += 1;

            let classification = classify(line, position);
            let text = match classification {
                Classification::Bullet => bullets.render(line),
                _ => line.trim().to_string(),
            };
            items.push(StoryItem::Line {
                text,
                classification,
                position,
            });
        }
        items.push(StoryItem::SectionBreak);
    }

    log::debug!(
        "assembled {} lines from {} sections",
        ordinal,
        sections.len()
    );
    Story { items }
}

/// Split and assemble `text` in one go
pub fn story_from_text(text: &str, bullets: BulletPolicy) -> Story {
    assemble(&split_sections(text), bullets)
}
