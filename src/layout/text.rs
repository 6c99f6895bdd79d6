use crate::document::FontSet;
use crate::font::Font;
use crate::markup::Run;
use crate::units::Pt;
use id_arena::{Arena, Id};

/// Calculates the vertical offset from the top of a line to the font's baseline.
///
/// In PDF, text coordinates specify the baseline position. This returns the
/// negative ascent, which can be added to a y-coordinate to place text whose
/// tallest glyphs touch that coordinate.
pub fn baseline_offset(font: &Font, size: Pt) -> Pt {
    Pt(0.) - font.ascent(size)
}

/// Text in a single face, as it will be drawn on one line
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    pub text: String,
    pub font: Id<Font>,
    pub width: Pt,
}

/// One wrapped line of a paragraph
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    pub segments: Vec<LineSegment>,
    pub width: Pt,
}

impl Line {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The line's text with styling removed
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    fn push(&mut self, text: &str, font: Id<Font>, width: Pt) {
        match self.segments.last_mut() {
            Some(last) if last.font == font => {
                last.text.push_str(text);
                last.width += width;
            }
            _ => self.segments.push(LineSegment {
                text: text.to_string(),
                font,
                width,
            }),
        }
        self.width += width;
    }

    fn last_font(&self) -> Option<Id<Font>> {
        self.segments.last().map(|s| s.font)
    }
}

/// Pieces of a single word, which may change face part-way through
type Word = Vec<(String, Id<Font>)>;

enum Token {
    Word(Word),
    Break,
}

/// Split runs into words, collapsing runs of whitespace. Word boundaries
/// only happen at whitespace, so `<b>foo</b>bar` stays one word.
fn tokenize(runs: &[Run], fonts: &FontSet, bold: bool) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut word: Word = Vec::new();

    let end_word = |word: &mut Word, tokens: &mut Vec<Token>| {
        if !word.is_empty() {
            tokens.push(Token::Word(std::mem::take(word)));
        }
    };

    for run in runs {
        let font = fonts.select(bold || run.bold, run.italic);
        let text = run.text.replace("\r\n", "\n").replace('\r', "\n");
        let mut piece = String::new();
        for ch in text.chars() {
            if ch.is_whitespace() {
                if !piece.is_empty() {
                    word.push((std::mem::take(&mut piece), font));
                }
                end_word(&mut word, &mut tokens);
                if ch == '\n' {
                    tokens.push(Token::Break);
                }
            } else {
                piece.push(ch);
            }
        }
        if !piece.is_empty() {
            word.push((piece, font));
        }
    }
    end_word(&mut word, &mut tokens);

    tokens
}

/// Wrap styled runs into lines no wider than `max_width`.
///
/// Lines break at whitespace; runs of spaces and tabs collapse into a single
/// space and a `'\n'` forces a break. A word that is wider than a whole line
/// on its own is broken between characters so that text never overflows the
/// bounding box.
pub fn wrap_runs(
    fonts: &Arena<Font>,
    font_set: &FontSet,
    runs: &[Run],
    bold: bool,
    size: Pt,
    max_width: Pt,
) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();
    let mut line = Line::default();

    let measure = |text: &str, font: Id<Font>| fonts[font].width_of_text(text, size);

    for token in tokenize(runs, font_set, bold) {
        let word = match token {
            Token::Break => {
                lines.push(std::mem::take(&mut line));
                continue;
            }
            Token::Word(word) => word,
        };

        let word_width: Pt = word.iter().map(|(text, font)| measure(text, *font)).sum();
        if let Some(space_font) = line.last_font() {
            let space = measure(" ", space_font);
            if line.width + space + word_width <= max_width {
                line.push(" ", space_font, space);
                for (text, font) in word.iter() {
                    line.push(text, *font, measure(text, *font));
                }
                continue;
            }
            lines.push(std::mem::take(&mut line));
        }

        if word_width <= max_width {
            for (text, font) in word.iter() {
                line.push(text, *font, measure(text, *font));
            }
            continue;
        }

        // no room even on an empty line, break the word between characters
        for (text, font) in word.iter() {
            for ch in text.chars() {
                let mut buf = [0u8; 4];
                let ch = ch.encode_utf8(&mut buf);
                let advance = measure(ch, *font);
                if !line.is_empty() && line.width + advance > max_width {
                    lines.push(std::mem::take(&mut line));
                }
                line.push(ch, *font, advance);
            }
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::font::FontFamily;

    fn setup() -> (Document, FontSet) {
        let mut doc = Document::default();
        let fonts = doc.font_set(FontFamily::Courier);
        (doc, fonts)
    }

    fn plain(text: &str) -> Vec<Run> {
        vec![Run {
            text: text.to_string(),
            ..Default::default()
        }]
    }

    #[test]
    fn short_text_fits_on_one_line() {
        let (doc, fonts) = setup();
        let lines = wrap_runs(
            &doc.fonts,
            &fonts,
            &plain("Built widgets"),
            false,
            Pt(10.0),
            Pt(500.0),
        );
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text(), "Built widgets");
        // courier is 6pt per character at 10pt
        assert_eq!(lines[0].width, Pt(78.0));
    }

    #[test]
    fn wraps_at_whitespace() {
        let (doc, fonts) = setup();
        // 10 characters per line
        let lines = wrap_runs(
            &doc.fonts,
            &fonts,
            &plain("aaaa bbbb cccc"),
            false,
            Pt(10.0),
            Pt(60.0),
        );
        let text: Vec<String> = lines.iter().map(Line::text).collect();
        assert_eq!(text, vec!["aaaa bbbb", "cccc"]);
        assert!(lines.iter().all(|l| l.width <= Pt(60.0)));
    }

    #[test]
    fn collapses_whitespace_and_honours_breaks() {
        let (doc, fonts) = setup();
        let lines = wrap_runs(
            &doc.fonts,
            &fonts,
            &plain("  a \t  b\nc  "),
            false,
            Pt(10.0),
            Pt(500.0),
        );
        let text: Vec<String> = lines.iter().map(Line::text).collect();
        assert_eq!(text, vec!["a b", "c"]);
    }

    #[test]
    fn breaks_overlong_words_between_characters() {
        let (doc, fonts) = setup();
        let lines = wrap_runs(
            &doc.fonts,
            &fonts,
            &plain("abcdefghij"),
            false,
            Pt(10.0),
            Pt(24.0),
        );
        let text: Vec<String> = lines.iter().map(Line::text).collect();
        assert_eq!(text, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn keeps_faces_as_separate_segments() {
        let (doc, fonts) = setup();
        let runs = vec![
            Run {
                text: "Rust".into(),
                bold: true,
                italic: false,
            },
            Run {
                text: " engineer".into(),
                ..Default::default()
            },
        ];
        let lines = wrap_runs(&doc.fonts, &fonts, &runs, false, Pt(10.0), Pt(500.0));
        assert_eq!(lines.len(), 1);
        let segments = &lines[0].segments;
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].font, fonts.bold);
        assert_eq!(segments[0].text, "Rust ");
        assert_eq!(segments[1].font, fonts.regular);
        assert_eq!(segments[1].text, "engineer");
    }

    #[test]
    fn bold_paragraphs_use_bold_faces() {
        let (doc, fonts) = setup();
        let lines = wrap_runs(
            &doc.fonts,
            &fonts,
            &plain("EXPERIENCE"),
            true,
            Pt(12.0),
            Pt(500.0),
        );
        assert_eq!(lines[0].segments[0].font, fonts.bold);
    }

    #[test]
    fn empty_runs_produce_no_lines() {
        let (doc, fonts) = setup();
        assert!(wrap_runs(&doc.fonts, &fonts, &[], false, Pt(10.0), Pt(100.0)).is_empty());
    }
}
