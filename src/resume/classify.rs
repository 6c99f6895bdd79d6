use std::fmt;

/// The role a line plays in the résumé, which decides how it is styled
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Classification {
    /// The candidate's name, the first line of the first section
    Name,
    /// A section heading such as `EXPERIENCE`
    Header,
    /// Ordinary text
    Body,
    /// Body text introduced by a `-` marker
    Bullet,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Classification::Name => "Name",
            Classification::Header => "Header",
            Classification::Body => "Body",
            Classification::Bullet => "Bullet",
        };
        f.write_str(name)
    }
}

/// Where a line sits in the document. Positions are counted, never
/// recovered by searching for the line's text, so repeated lines are told
/// apart.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LinePosition {
    /// Index of the section within the document
    pub section: usize,
    /// Index of the line within its section
    pub line: usize,
    /// How many lines with text come before this one in the whole document
    pub ordinal: usize,
}

/// A line is a header when it has at least one cased letter and none of its
/// letters are lowercase. Digits and punctuation don't count either way.
pub fn is_header(line: &str) -> bool {
    let mut cased = false;
    for ch in line.chars() {
        if ch.is_lowercase() {
            return false;
        }
        cased |= ch.is_uppercase();
    }
    cased
}

/// A line is a bullet when it starts with a `-`. Indented dashes are body
/// text.
pub fn is_bullet(line: &str) -> bool {
    line.starts_with('-')
}

/// Decide the role of a non-blank line. The first line of the first section
/// is always the name, even when written in capitals; otherwise capitals make
/// a header, a leading dash makes a bullet, and anything else is body text.
/// A document that opens with blank lines has no name.
pub fn classify(line: &str, position: LinePosition) -> Classification {
    if position.section == 0 && position.ordinal == 0 {
        Classification::Name
    } else if is_header(line) {
        Classification::Header
    } else if is_bullet(line) {
        Classification::Bullet
    } else {
        Classification::Body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(ordinal: usize) -> LinePosition {
        LinePosition {
            section: 0,
            line: ordinal,
            ordinal,
        }
    }

    #[test]
    fn header_detection_follows_letter_case() {
        assert!(is_header("EXPERIENCE"));
        assert!(is_header("WORK HISTORY (2019-2024):"));
        assert!(!is_header("Experience"));
        assert!(!is_header("2019 - 2024"));
        assert!(!is_header("---"));
        assert!(!is_header(""));
    }

    #[test]
    fn first_line_is_the_name() {
        assert_eq!(classify("JANE DOE", at(0)), Classification::Name);
        assert_eq!(classify("Jane Doe", at(0)), Classification::Name);
        assert_eq!(classify("JANE DOE", at(5)), Classification::Header);
    }

    #[test]
    fn only_the_first_section_holds_the_name() {
        let later = LinePosition {
            section: 1,
            line: 0,
            ordinal: 0,
        };
        assert_eq!(classify("Jane Doe", later), Classification::Body);
        assert_eq!(classify("JANE DOE", later), Classification::Header);
    }

    #[test]
    fn dashes_make_bullets_unless_shouted() {
        assert_eq!(classify("- Built widgets", at(3)), Classification::Bullet);
        assert_eq!(classify("  - Indented", at(3)), Classification::Body);
        assert_eq!(classify("- AWS", at(3)), Classification::Header);
        assert_eq!(classify("Built - widgets", at(3)), Classification::Body);
    }

    #[test]
    fn lowercase_lines_are_never_headers() {
        for line in ["software engineer", "- rust, go", "jane@example.com"] {
            for ordinal in 1..4 {
                assert_ne!(classify(line, at(ordinal)), Classification::Header);
            }
        }
    }
}
