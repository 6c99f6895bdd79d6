use super::Classification;
use crate::font::FontFamily;
use crate::layout::ParagraphStyle;
use crate::units::Pt;

/// The paragraph style for each [Classification], plus the gap left after
/// every section. Looking a style up is a plain table access; the
/// classification logic never touches style data.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    pub name: ParagraphStyle,
    pub header: ParagraphStyle,
    pub body: ParagraphStyle,
    pub bullet: ParagraphStyle,
    pub section_spacing: Pt,
}

impl Default for StyleSheet {
    fn default() -> Self {
        StyleSheet::new(FontFamily::Helvetica)
    }
}

impl StyleSheet {
    pub fn new(family: FontFamily) -> StyleSheet {
        let body = ParagraphStyle::new("Body", Pt(10.0))
            .font_family(family)
            .space_after(Pt(6.0));
        StyleSheet {
            name: ParagraphStyle::new("Name", Pt(16.0))
                .font_family(family)
                .bold()
                .space_after(Pt(12.0)),
            header: ParagraphStyle::new("Header", Pt(12.0))
                .font_family(family)
                .bold()
                .space_before(Pt(12.0))
                .space_after(Pt(12.0)),
            bullet: ParagraphStyle {
                name: "Bullet".to_string(),
                ..body.clone()
            }
            .left_indent(Pt(18.0)),
            body,
            section_spacing: Pt(12.0),
        }
    }

    /// Switch every style over to another font family
    pub fn with_family(mut self, family: FontFamily) -> StyleSheet {
        for style in [
            &mut self.name,
            &mut self.header,
            &mut self.body,
            &mut self.bullet,
        ] {
            style.font_family = family;
        }
        self
    }

    pub fn get(&self, classification: Classification) -> &ParagraphStyle {
        match classification {
            Classification::Name => &self.name,
            Classification::Header => &self.header,
            Classification::Body => &self.body,
            Classification::Bullet => &self.bullet,
        }
    }
}
