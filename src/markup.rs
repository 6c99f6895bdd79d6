//! A tiny inline markup for paragraph text.
//!
//! Paragraphs handed to the layout layer may contain `<b>…</b>` and
//! `<i>…</i>` spans, `<br/>` line breaks, and the entities `&amp;`, `&lt;`,
//! `&gt;`, `&quot;`, `&apos;`, `&#NNN;` and `&#xHH;`. Anything else that
//! looks like markup is rejected, so literal text must go through [escape]
//! first.
//!
//! ```
//! use resume_pdf::markup::{escape, parse};
//!
//! let runs = parse(&format!("<b>Skills:</b> {}", escape("R&D <fast>"))).unwrap();
//! assert_eq!(runs[0].text, "Skills:");
//! assert!(runs[0].bold);
//! assert_eq!(runs[1].text, " R&D <fast>");
//! ```

use thiserror::Error;

/// Text that shares one combination of weight and slant
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
}

/// Where and why a paragraph failed to parse. Offsets are in bytes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarkupError {
    #[error("bare '&' at byte {0}, write '&amp;' instead")]
    BareAmpersand(usize),

    #[error("unknown entity '&{name};' at byte {offset}")]
    UnknownEntity { name: String, offset: usize },

    #[error("unknown tag '<{name}>' at byte {offset}")]
    UnknownTag { name: String, offset: usize },

    #[error("unexpected '{ch}' at byte {offset}")]
    StrayBracket { ch: char, offset: usize },

    #[error("closing tag '</{name}>' at byte {offset} has no matching open tag")]
    UnbalancedClose { name: String, offset: usize },

    #[error("tag '<{0}>' is never closed")]
    Unclosed(String),
}

#[derive(Debug, Copy, Clone, PartialEq)]
enum Tag {
    Bold,
    Italic,
}

impl Tag {
    fn from_name(name: &str) -> Option<Tag> {
        match name {
            "b" | "strong" => Some(Tag::Bold),
            "i" | "em" => Some(Tag::Italic),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Tag::Bold => "b",
            Tag::Italic => "i",
        }
    }
}

/// Escape the characters that carry meaning in paragraph markup so that
/// `text` renders literally
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Parse paragraph markup into runs. Adjacent text with the same styling is
/// merged into one run; `<br/>` becomes a `'\n'` inside the run text.
pub fn parse(markup: &str) -> Result<Vec<Run>, MarkupError> {
    let mut runs: Vec<Run> = Vec::new();
    let mut open: Vec<Tag> = Vec::new();
    let mut current = Run::default();

    let mut i = 0;
    while let Some(ch) = markup[i..].chars().next() {
        match ch {
            '<' => {
                let close = markup[i..]
                    .find('>')
                    .map(|j| i + j)
                    .ok_or(MarkupError::StrayBracket { ch: '<', offset: i })?;
                let tag = markup[i + 1..close].trim();

                if matches!(tag, "br" | "br/" | "br /") {
                    current.text.push('\n');
                } else if let Some(name) = tag.strip_prefix('/') {
                    let name = name.trim();
                    let position = Tag::from_name(name)
                        .and_then(|t| open.iter().rposition(|o| *o == t))
                        .ok_or_else(|| MarkupError::UnbalancedClose {
                            name: name.to_string(),
                            offset: i,
                        })?;
                    flush(&mut runs, &mut current);
                    open.remove(position);
                } else {
                    let t = Tag::from_name(tag).ok_or_else(|| MarkupError::UnknownTag {
                        name: tag.to_string(),
                        offset: i,
                    })?;
                    flush(&mut runs, &mut current);
                    open.push(t);
                }

                current.bold = open.contains(&Tag::Bold);
                current.italic = open.contains(&Tag::Italic);
                i = close + 1;
            }
            '>' => return Err(MarkupError::StrayBracket { ch, offset: i }),
            '&' => {
                // entity names are short; anything longer is a bare ampersand
                let end = markup[i..]
                    .char_indices()
                    .take(12)
                    .find(|&(_, c)| c == ';')
                    .map(|(j, _)| i + j)
                    .ok_or(MarkupError::BareAmpersand(i))?;
                let name = &markup[i + 1..end];
                let decoded = decode_entity(name).ok_or_else(|| MarkupError::UnknownEntity {
                    name: name.to_string(),
                    offset: i,
                })?;
                current.text.push(decoded);
                i = end + 1;
            }
            _ => {
                current.text.push(ch);
                i += ch.len_utf8();
            }
        }
    }

    if let Some(unclosed) = open.first() {
        return Err(MarkupError::Unclosed(unclosed.name().to_string()));
    }
    flush(&mut runs, &mut current);

    Ok(runs)
}

fn flush(runs: &mut Vec<Run>, current: &mut Run) {
    if current.text.is_empty() {
        return;
    }
    let run = Run {
        text: std::mem::take(&mut current.text),
        bold: current.bold,
        italic: current.italic,
    };
    match runs.last_mut() {
        Some(last) if last.bold == run.bold && last.italic == run.italic => {
            last.text.push_str(&run.text)
        }
        _ => runs.push(run),
    }
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{A0}'),
        _ => {
            let numeric = name.strip_prefix('#')?;
            let code = match numeric.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => numeric.parse::<u32>().ok()?,
            };
            char::from_u32(code)
        }
    }
}
