//! WinAnsiEncoding and the Adobe font metrics of the standard Type 1 faces.
//!
//! Widths are in 1/1000 em and cover printable ASCII (0x20..=0x7E); index
//! is `code - 0x20`. The oblique faces share the widths of their upright
//! counterparts and Courier is monospaced, so three tables are enough.

/// Helvetica / Helvetica-Oblique
pub(crate) const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // 0x20
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0x30
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // 0x40
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 0x50
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // 0x60
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 0x70
];

/// Helvetica-Bold / Helvetica-BoldOblique
pub(crate) const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // 0x20
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // 0x30
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // 0x40
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 0x50
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // 0x60
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // 0x70
];

/// Every Courier face
pub(crate) const COURIER: [u16; 95] = [600; 95];

/// Map a character onto its single-byte WinAnsiEncoding code, if it has one
pub(crate) fn encode(ch: char) -> Option<u8> {
    match ch {
        ' '..='~' => Some(ch as u8),
        '\u{A0}'..='\u{FF}' => Some(ch as u32 as u8),
        '€' => Some(0x80),
        '‘' => Some(0x91),
        '’' => Some(0x92),
        '“' => Some(0x93),
        '”' => Some(0x94),
        '•' => Some(0x95),
        '–' => Some(0x96),
        '—' => Some(0x97),
        '…' => Some(0x85),
        _ => None,
    }
}

/// Width of a WinAnsi code point in 1/1000 em, looked up in `table`. Codes
/// outside printable ASCII use the width of the closest-looking ASCII glyph
/// so measured lines stay close to what a viewer draws.
pub(crate) fn width(table: &[u16; 95], code: u8) -> u16 {
    let ascii = |ch: u8| table[(ch - 0x20) as usize];
    match code {
        0x20..=0x7E => ascii(code),
        // bullet
        0x95 if table == &COURIER => 600,
        0x95 => 350,
        // quotes map onto the ASCII apostrophe and double quote
        0x91 | 0x92 => ascii(b'\''),
        0x93 | 0x94 => ascii(b'"'),
        // en dash is figure-width, em dash a full em
        0x96 => ascii(b'0'),
        0x97 if table == &COURIER => 600,
        0x97 => 1000,
        0x85 if table == &COURIER => 600,
        0x85 => 1000,
        // non-breaking space
        0xA0 => ascii(b' '),
        _ => ascii(b'o'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_encodes_to_itself() {
        assert_eq!(encode('A'), Some(b'A'));
        assert_eq!(encode(' '), Some(b' '));
        assert_eq!(encode('~'), Some(b'~'));
    }

    #[test]
    fn typographic_punctuation_uses_the_windows_block() {
        assert_eq!(encode('•'), Some(0x95));
        assert_eq!(encode('—'), Some(0x97));
        assert_eq!(encode('é'), Some(0xE9));
        assert_eq!(encode('\u{4E2D}'), None);
    }

    #[test]
    fn widths_match_the_afm_files() {
        assert_eq!(width(&HELVETICA, b'W'), 944);
        assert_eq!(width(&HELVETICA, b'i'), 222);
        assert_eq!(width(&HELVETICA_BOLD, b'i'), 278);
        assert_eq!(width(&HELVETICA, 0x95), 350);
        assert_eq!(width(&COURIER, 0x95), 600);
    }
}
