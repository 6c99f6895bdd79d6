use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use id_arena::Id;
use pdf_writer::{Name, Pdf};

mod winansi;

/// The font families every PDF viewer is required to provide. Using them
/// means nothing has to be embedded, which keeps a one-page résumé to a
/// few kilobytes.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FontFamily {
    #[default]
    Helvetica,
    Courier,
}

/// One of the standard Type 1 faces
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
}

impl StandardFont {
    /// Pick the face of `family` with the given weight and slant
    pub fn select(family: FontFamily, bold: bool, italic: bool) -> StandardFont {
        use StandardFont::*;
        match (family, bold, italic) {
            (FontFamily::Helvetica, false, false) => Helvetica,
            (FontFamily::Helvetica, true, false) => HelveticaBold,
            (FontFamily::Helvetica, false, true) => HelveticaOblique,
            (FontFamily::Helvetica, true, true) => HelveticaBoldOblique,
            (FontFamily::Courier, false, false) => Courier,
            (FontFamily::Courier, true, false) => CourierBold,
            (FontFamily::Courier, false, true) => CourierOblique,
            (FontFamily::Courier, true, true) => CourierBoldOblique,
        }
    }

    /// The PostScript name written as the font's `BaseFont`
    pub fn base_font(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaOblique => "Helvetica-Oblique",
            StandardFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
            StandardFont::Courier => "Courier",
            StandardFont::CourierBold => "Courier-Bold",
            StandardFont::CourierOblique => "Courier-Oblique",
            StandardFont::CourierBoldOblique => "Courier-BoldOblique",
        }
    }

    fn widths(&self) -> &'static [u16; 95] {
        match self {
            StandardFont::Helvetica | StandardFont::HelveticaOblique => &winansi::HELVETICA,
            StandardFont::HelveticaBold | StandardFont::HelveticaBoldOblique => {
                &winansi::HELVETICA_BOLD
            }
            _ => &winansi::COURIER,
        }
    }

    /// (ascender, descender) in 1/1000 em, from the AFM headers
    fn vertical_metrics(&self) -> (i16, i16) {
        match self {
            StandardFont::Helvetica
            | StandardFont::HelveticaBold
            | StandardFont::HelveticaOblique
            | StandardFont::HelveticaBoldOblique => (718, -207),
            _ => (629, -157),
        }
    }
}

/// A font registered with a [Document](crate::Document). Fonts are stored
/// "globally" within the document and referred to from spans by their arena id.
#[derive(Debug, Clone)]
pub struct Font {
    pub face: StandardFont,
}

impl Font {
    pub fn new(face: StandardFont) -> Font {
        Font { face }
    }

    /// The PostScript name of the face
    pub fn name(&self) -> &'static str {
        self.face.base_font()
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Pt) -> Pt {
        size * (self.face.vertical_metrics().0 as f32 / 1000.0)
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is negative
    pub fn descent(&self, size: Pt) -> Pt {
        size * (self.face.vertical_metrics().1 as f32 / 1000.0)
    }

    /// The default distance between two baselines of this font at the given size
    pub fn line_height(&self, size: Pt) -> Pt {
        self.ascent(size) - self.descent(size)
    }

    /// The WinAnsi code used to draw `ch`, falling back to `?` for characters
    /// the standard encoding cannot express
    pub fn code(&self, ch: char) -> u8 {
        winansi::encode(ch).unwrap_or(b'?')
    }

    /// Whether `ch` can be drawn without substitution
    pub fn has_glyph(&self, ch: char) -> bool {
        winansi::encode(ch).is_some()
    }

    /// Horizontal advance of a single character
    pub fn advance(&self, ch: char, size: Pt) -> Pt {
        let units = winansi::width(self.face.widths(), self.code(ch));
        size * (units as f32 / 1000.0)
    }

    /// Calculate the width of a string of text at the given size
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        text.chars().map(|ch| self.advance(ch, size)).sum()
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<Font>, writer: &mut Pdf) {
        let font_id = refs.gen(RefType::Font(id.index()));
        let mut font = writer.type1_font(font_id);
        font.base_font(Name(self.name().as_bytes()));
        font.encoding_predefined(Name(b"WinAnsiEncoding"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_faces_by_weight_and_slant() {
        assert_eq!(
            StandardFont::select(FontFamily::Helvetica, true, false).base_font(),
            "Helvetica-Bold"
        );
        assert_eq!(
            StandardFont::select(FontFamily::Courier, true, true).base_font(),
            "Courier-BoldOblique"
        );
    }

    #[test]
    fn measures_text_with_afm_widths() {
        let font = Font::new(StandardFont::Helvetica);
        // H = 722, i = 222
        let width = font.width_of_text("Hi", Pt(10.0));
        assert!((width.0 - 9.44).abs() < 0.001);

        let courier = Font::new(StandardFont::Courier);
        assert_eq!(courier.width_of_text("abc", Pt(10.0)), Pt(18.0));
    }

    #[test]
    fn bold_is_wider_than_regular() {
        let regular = Font::new(StandardFont::Helvetica);
        let bold = Font::new(StandardFont::HelveticaBold);
        let text = "Experience";
        assert!(bold.width_of_text(text, Pt(12.0)) > regular.width_of_text(text, Pt(12.0)));
    }

    #[test]
    fn vertical_metrics_scale_with_size() {
        let font = Font::new(StandardFont::Helvetica);
        assert!((font.ascent(Pt(10.0)).0 - 7.18).abs() < 0.001);
        assert!((font.descent(Pt(10.0)).0 + 2.07).abs() < 0.001);
        assert!((font.line_height(Pt(10.0)).0 - 9.25).abs() < 0.001);
    }

    #[test]
    fn unencodable_characters_fall_back_to_question_mark() {
        let font = Font::new(StandardFont::Helvetica);
        assert_eq!(font.code('\u{1F600}'), b'?');
        assert!(!font.has_glyph('\u{1F600}'));
        assert!(font.has_glyph('•'));
    }
}
