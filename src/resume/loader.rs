use crate::ConvertError;
use std::path::Path;

/// UTF-8 punctuation that was decoded as Windows-1252 somewhere upstream,
/// paired with the ASCII it stands for
const MOJIBAKE: &[(&str, &str)] = &[
    ("\u{e2}\u{20ac}\u{a2}", "-"),
    ("\u{e2}\u{20ac}\u{153}", "\""),
    ("\u{e2}\u{20ac}\u{9d}", "\""),
    ("\u{e2}\u{20ac}\u{2122}", "'"),
    ("\u{e2}\u{20ac}\u{2dc}", "'"),
    ("\u{e2}\u{20ac}\u{201c}", "-"),
    ("\u{e2}\u{20ac}\u{201d}", "-"),
    ("\u{e2}\u{20ac}\u{a6}", "..."),
    ("\u{c2}\u{a0}", " "),
];

/// Read the résumé at `path` as UTF-8 text. A leading byte order mark is
/// dropped and line endings are normalised to `\n`.
pub fn load_text<P: AsRef<Path>>(path: P) -> Result<String, ConvertError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {} bytes from {}", text.len(), path.display());
    Ok(normalize_newlines(text.strip_prefix('\u{FEFF}').unwrap_or(&text)))
}

pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Repair common encoding damage and reduce the text to printable 7-bit
/// ASCII plus newlines and tabs.
///
/// Mis-decoded sequences (`â€™` and friends) and their intact Unicode
/// counterparts are mapped onto ASCII first, so that a bullet glyph becomes
/// a `-` marker and curly quotes become straight ones. Any character still
/// outside the printable range afterwards is removed.
pub fn clean_text(text: &str) -> String {
    let mut cleaned = normalize_newlines(text);
    for (broken, fixed) in MOJIBAKE {
        cleaned = cleaned.replace(broken, fixed);
    }

    let mut ascii = String::with_capacity(cleaned.len());
    let mut dropped = 0usize;
    for ch in cleaned.chars() {
        match ch {
            '\n' | '\t' | ' '..='~' => ascii.push(ch),
            '•' | '‣' | '◦' | '▪' | '–' | '—' | '‐' | '‑' => ascii.push('-'),
            '‘' | '’' | '‚' | '′' => ascii.push('\''),
            '“' | '”' | '„' | '″' => ascii.push('"'),
            '…' => ascii.push_str("..."),
            '\u{A0}' => ascii.push(' '),
            _ => dropped += 1,
        }
    }
    if dropped > 0 {
        log::debug!("cleanup removed {dropped} non-ASCII characters");
    }

    ascii
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn repairs_mis_decoded_punctuation() {
        assert_eq!(clean_text("â€¢ Led the team"), "- Led the team");
        assert_eq!(
            clean_text("Jane Doeâ€™s â€œbestâ€\u{9d} work"),
            "Jane Doe's \"best\" work"
        );
        assert_eq!(clean_text("2019 \u{e2}\u{20ac}\u{201c} 2021"), "2019 - 2021");
    }

    #[test]
    fn maps_intact_unicode_punctuation() {
        assert_eq!(clean_text("• Shipped “v2” — on time…"), "- Shipped \"v2\" - on time...");
    }

    #[test]
    fn strips_everything_else_outside_printable_ascii() {
        assert_eq!(clean_text("Caf\u{e9} \u{1F680}Rust\u{7}"), "Caf Rust");
        assert_eq!(clean_text("a\r\nb\tc"), "a\nb\tc");
    }

    #[test]
    fn missing_files_are_read_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_text(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, ConvertError::Read { .. }));
    }

    #[test]
    fn invalid_utf8_is_a_decode_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[b'J', 0xff, 0xfe, b'D']).unwrap();
        let err = load_text(file.path()).unwrap_err();
        assert!(matches!(err, ConvertError::Decode { .. }));
    }

    #[test]
    fn drops_byte_order_mark_and_carriage_returns() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all("\u{FEFF}JANE DOE\r\n\r\nSKILLS".as_bytes()).unwrap();
        assert_eq!(load_text(file.path()).unwrap(), "JANE DOE\n\nSKILLS");
    }
}
