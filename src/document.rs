use crate::{
    font::{Font, FontFamily, StandardFont},
    info::Info,
    outline::Outline,
    page::Page,
    refs::{ObjectReferences, RefType},
    PDFError,
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Pdf, Ref};
use std::collections::HashMap;
use std::io::Write;

/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    pub fonts: Arena<Font>,
    pub outline: Outline,
    /// Whether page content streams are Flate-compressed
    pub compress: bool,
    /// Families registered through [Document::font_set]
    pub font_sets: HashMap<FontFamily, FontSet>,
}

impl Default for Document {
    fn default() -> Self {
        Document {
            info: None,
            pages: Arena::new(),
            page_order: Vec::new(),
            fonts: Arena::new(),
            outline: Outline::default(),
            compress: true,
            font_sets: HashMap::new(),
        }
    }
}

/// The four faces of one family, registered with a document
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FontSet {
    pub regular: Id<Font>,
    pub bold: Id<Font>,
    pub italic: Id<Font>,
    pub bold_italic: Id<Font>,
}

impl FontSet {
    pub fn select(&self, bold: bool, italic: bool) -> Id<Font> {
        match (bold, italic) {
            (false, false) => self.regular,
            (true, false) => self.bold,
            (false, true) => self.italic,
            (true, true) => self.bold_italic,
        }
    }
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its id
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    /// The pages in document order
    pub fn ordered_pages(&self) -> impl Iterator<Item = &Page> {
        self.page_order.iter().map(|&id| &self.pages[id])
    }

    /// Add a font to the document structure. The returned id is how spans
    /// refer to the font.
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        self.fonts.alloc(font)
    }

    /// The four faces of `family`, registering them with the document the
    /// first time the family is asked for
    pub fn font_set(&mut self, family: FontFamily) -> FontSet {
        if let Some(set) = self.font_sets.get(&family) {
            return *set;
        }
        let mut face = |bold, italic| {
            self.add_font(Font::new(StandardFont::select(family, bold, italic)))
        };
        let set = FontSet {
            regular: face(false, false),
            bold: face(true, false),
            italic: face(false, true),
            bold_italic: face(true, true),
        };
        self.font_sets.insert(family, set);
        set
    }

    /// Add a bookmark in the document outline pointing at a spot on the page
    /// with the given index
    pub fn add_bookmark<S: ToString>(&mut self, title: S, page_index: usize, top: f32) {
        self.outline.add_bookmark(title.to_string(), page_index, top);
    }

    /// Write the entire document to the writer. The whole file is assembled
    /// in memory first, then written out with a single call.
    ///
    /// A document without pages still needs a page tree with at least one leaf
    /// for most viewers to open it, so an empty page is written in that case.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), PDFError> {
        let Document {
            info,
            mut pages,
            mut page_order,
            fonts,
            outline,
            compress,
            ..
        } = self;

        if page_order.is_empty() {
            let blank = pages.alloc(Page::new(crate::pagesize::LETTER, None));
            page_order.push(blank);
        }

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        let page_refs: Vec<Ref> = (0..page_order.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for (id, font) in fonts.iter() {
            font.write(&mut refs, id, &mut writer);
        }

        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages.get(*id).ok_or(PDFError::PageMissing)?;
            page.write(&mut refs, page_index, &fonts, compress, &mut writer)?;
        }

        let outlines_id = if outline.is_empty() {
            None
        } else {
            outline.write(&mut refs, &mut writer)?;
            refs.get(RefType::Outlines)
        };

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        if let Some(outlines_id) = outlines_id {
            catalog.outlines(outlines_id);
        }
        catalog.finish();

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Margins;
    use crate::pagesize;
    use crate::units::Pt;

    fn count_pages(pdf: &[u8]) -> usize {
        let text = String::from_utf8_lossy(pdf);
        text.matches("/Type /Page").count() - text.matches("/Type /Pages").count()
    }

    #[test]
    fn empty_document_still_has_a_page() {
        let mut out = Vec::new();
        Document::default().write(&mut out).unwrap();
        assert!(out.starts_with(b"%PDF-"));
        assert_eq!(count_pages(&out), 1);
    }

    #[test]
    fn writes_every_page_in_order() {
        let mut doc = Document::default();
        let first = doc.font_set(FontFamily::Helvetica);
        assert_eq!(doc.font_set(FontFamily::Helvetica), first);
        assert_eq!(doc.fonts.len(), 4);
        for _ in 0..3 {
            doc.add_page(Page::new(pagesize::LETTER, Some(Margins::all(Pt(72.0)))));
        }
        let mut out = Vec::new();
        doc.write(&mut out).unwrap();
        assert_eq!(count_pages(&out), 3);
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("/BaseFont /Helvetica-Bold"));
        assert!(text.contains("/Encoding /WinAnsiEncoding"));
    }

    #[test]
    fn bookmarks_produce_an_outline() {
        let mut doc = Document::default();
        doc.add_page(Page::new(pagesize::LETTER, None));
        doc.add_bookmark("EXPERIENCE", 0, 700.0);
        let mut out = Vec::new();
        doc.write(&mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("/Outlines"));
        assert!(text.contains("/Title"));
        assert!(text.contains("/FitH"));
    }
}
