use crate::colour::{colours, Colour};
use crate::document::Document;
use crate::font::FontFamily;
use crate::layout::{baseline_offset, wrap_runs, Margins};
use crate::markup::{self, MarkupError, Run};
use crate::page::{Page, SpanFont, SpanLayout};
use crate::pagesize::PageSize;
use crate::units::Pt;

/// How a paragraph is set: face, size, and the space around it
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphStyle {
    pub name: String,
    pub font_family: FontFamily,
    pub font_size: Pt,
    /// Distance between consecutive baselines
    pub leading: Pt,
    pub space_before: Pt,
    pub space_after: Pt,
    pub left_indent: Pt,
    pub bold: bool,
    pub colour: Colour,
}

impl ParagraphStyle {
    /// A regular, black style with a leading of 1.2 times the font size and
    /// no extra spacing
    pub fn new<S: ToString>(name: S, font_size: Pt) -> ParagraphStyle {
        ParagraphStyle {
            name: name.to_string(),
            font_family: FontFamily::default(),
            font_size,
            leading: font_size * 1.2,
            space_before: Pt(0.0),
            space_after: Pt(0.0),
            left_indent: Pt(0.0),
            bold: false,
            colour: colours::BLACK,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn space_before(mut self, space: Pt) -> Self {
        self.space_before = space;
        self
    }

    pub fn space_after(mut self, space: Pt) -> Self {
        self.space_after = space;
        self
    }

    pub fn left_indent(mut self, indent: Pt) -> Self {
        self.left_indent = indent;
        self
    }

    pub fn font_family(mut self, family: FontFamily) -> Self {
        self.font_family = family;
        self
    }

    pub fn colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }
}

/// A block of styled text that wraps to the width of the page
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub runs: Vec<Run>,
    pub style: ParagraphStyle,
    /// When set, an outline entry with this title points at the paragraph
    pub bookmark: Option<String>,
}

impl Paragraph {
    /// Parse `text` as paragraph [markup](crate::markup)
    pub fn from_markup(text: &str, style: ParagraphStyle) -> Result<Paragraph, MarkupError> {
        Ok(Paragraph {
            runs: markup::parse(text)?,
            style,
            bookmark: None,
        })
    }

    pub fn with_bookmark<S: ToString>(mut self, title: S) -> Self {
        self.bookmark = Some(title.to_string());
        self
    }

    /// The paragraph's text with all styling removed
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// Anything that can be placed in the vertical flow of a page
#[derive(Debug, Clone, PartialEq)]
pub enum Flowable {
    Paragraph(Paragraph),
    /// Fixed vertical space
    Spacer(Pt),
}

/// Page geometry shared by every page of a flowed document
#[derive(Debug, Clone, PartialEq)]
pub struct PageTemplate {
    pub size: PageSize,
    pub margins: Margins,
}

/// Tracks the page currently being filled while flowing a story
struct Cursor {
    page: Page,
    y: Pt,
    at_top: bool,
}

impl PageTemplate {
    pub fn new(size: PageSize, margins: Margins) -> PageTemplate {
        PageTemplate { size, margins }
    }

    fn fresh(&self) -> Cursor {
        let page = Page::new(self.size, Some(self.margins));
        Cursor {
            y: page.content_box.y2,
            page,
            at_top: true,
        }
    }

    /// Flow `story` top to bottom through as many pages as it needs, adding
    /// them to `document`. Space before a paragraph is dropped at the top of
    /// a page, as are spacers and any spacer that does not fit; paragraphs
    /// that do not fit are split between lines. At least one page is always added, even for an empty story.
    ///
    /// Returns the number of pages added.
    pub fn build(&self, document: &mut Document, story: Vec<Flowable>) -> usize {
        let first_page = document.page_order.len();
        let mut cursor = self.fresh();

        for flowable in story {
            match flowable {
                Flowable::Spacer(height) => {
                    if cursor.at_top {
                        continue;
                    }
                    if cursor.y - height < cursor.page.content_box.y1 {
                        // no room left; the next paragraph opens a new page
                        cursor.y = cursor.page.content_box.y1;
                    } else {
                        cursor.y -= height;
                    }
                }
                Flowable::Paragraph(paragraph) => {
                    self.place_paragraph(document, &mut cursor, paragraph);
                }
            }
        }

        document.add_page(cursor.page);
        document.page_order.len() - first_page
    }

    fn place_paragraph(
        &self,
        document: &mut Document,
        cursor: &mut Cursor,
        paragraph: Paragraph,
    ) {
        let Paragraph {
            runs,
            style,
            mut bookmark,
        } = paragraph;

        let fonts = document.font_set(style.font_family);
        let max_width = cursor.page.content_box.width() - style.left_indent;
        let lines = wrap_runs(
            &document.fonts,
            &fonts,
            &runs,
            style.bold,
            style.font_size,
            max_width,
        );
        if lines.is_empty() {
            return;
        }

        if !cursor.at_top {
            cursor.y -= style.space_before;
        }

        let ascent = -baseline_offset(
            &document.fonts[fonts.select(style.bold, false)],
            style.font_size,
        );

        for line in lines {
            if !cursor.at_top && cursor.y - style.leading < cursor.page.content_box.y1 {
                let full = std::mem::replace(cursor, self.fresh());
                document.add_page(full.page);
            }

            if let Some(title) = bookmark.take() {
                let page_index = document.page_order.len();
                document.add_bookmark(title, page_index, *cursor.y);
            }

            let baseline = cursor.y - ascent;
            let mut x = cursor.page.content_box.x1 + style.left_indent;
            for segment in line.segments {
                let width = segment.width;
                cursor.page.add_span(SpanLayout {
                    text: segment.text,
                    font: SpanFont {
                        id: segment.font,
                        size: style.font_size,
                    },
                    colour: style.colour,
                    coords: (x, baseline),
                });
                x += width;
            }

            cursor.y -= style.leading;
            cursor.at_top = false;
        }

        cursor.y -= style.space_after;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize;

    fn setup() -> (Document, PageTemplate) {
        let template = PageTemplate::new(pagesize::LETTER, Margins::all(Pt(72.0)));
        (Document::default(), template)
    }

    fn paragraph(text: &str, style: &ParagraphStyle) -> Flowable {
        Flowable::Paragraph(Paragraph::from_markup(text, style.clone()).unwrap())
    }

    #[test]
    fn empty_story_yields_one_blank_page() {
        let (mut doc, template) = setup();
        assert_eq!(template.build(&mut doc, Vec::new()), 1);
        assert!(doc.ordered_pages().all(|p| p.contents.is_empty()));
    }

    #[test]
    fn first_paragraph_sits_at_the_top_margin() {
        let (mut doc, template) = setup();
        let style = ParagraphStyle::new("Body", Pt(10.0)).space_before(Pt(50.0));
        template.build(&mut doc, vec![paragraph("Hello", &style)]);

        let page = doc.ordered_pages().next().unwrap();
        let span = &page.contents[0];
        assert_eq!(span.coords.0, Pt(72.0));
        // top of content box minus Helvetica's ascent at 10pt
        assert!((span.coords.1 .0 - (720.0 - 7.18)).abs() < 0.01);
    }

    #[test]
    fn spacing_and_indent_are_applied() {
        let (mut doc, template) = setup();
        let body = ParagraphStyle::new("Body", Pt(10.0)).space_after(Pt(6.0));
        let bullet = body.clone().left_indent(Pt(18.0));
        template.build(
            &mut doc,
            vec![
                paragraph("one", &body),
                Flowable::Spacer(Pt(12.0)),
                paragraph("two", &bullet),
            ],
        );

        let page = doc.ordered_pages().next().unwrap();
        let (first, second) = (&page.contents[0], &page.contents[1]);
        assert_eq!(second.coords.0, Pt(72.0 + 18.0));
        // leading 12 + space after 6 + spacer 12
        assert!((first.coords.1 .0 - second.coords.1 .0 - 30.0).abs() < 0.01);
    }

    #[test]
    fn long_stories_flow_onto_more_pages() {
        let (mut doc, template) = setup();
        let style = ParagraphStyle::new("Body", Pt(10.0)).space_after(Pt(6.0));
        let story: Vec<Flowable> = (0..120)
            .map(|i| paragraph(&format!("line {i}"), &style))
            .collect();
        let pages = template.build(&mut doc, story);
        assert!(pages > 1);

        for page in doc.ordered_pages() {
            for span in page.contents.iter() {
                assert!(span.coords.1 >= page.content_box.y1);
            }
        }
        let total: usize = doc.ordered_pages().map(|p| p.contents.len()).sum();
        assert_eq!(total, 120);
    }

    #[test]
    fn spacers_are_dropped_at_the_top_of_a_page() {
        let (mut doc, template) = setup();
        let style = ParagraphStyle::new("Body", Pt(10.0));
        template.build(
            &mut doc,
            vec![Flowable::Spacer(Pt(100.0)), paragraph("first", &style)],
        );
        let page = doc.ordered_pages().next().unwrap();
        assert!((page.contents[0].coords.1 .0 - (720.0 - 7.18)).abs() < 0.01);
    }

    #[test]
    fn spacers_that_do_not_fit_are_dropped() {
        let (mut doc, template) = setup();
        let style = ParagraphStyle {
            leading: Pt(12.0),
            ..ParagraphStyle::new("Body", Pt(10.0))
        };
        // 53 lines of 12pt leave 12pt of the 648pt frame
        let mut story: Vec<Flowable> = (0..53)
            .map(|i| paragraph(&format!("line {i}"), &style))
            .collect();
        story.push(Flowable::Spacer(Pt(20.0)));
        assert_eq!(template.build(&mut doc, story), 1);

        let mut story: Vec<Flowable> = (0..53)
            .map(|i| paragraph(&format!("line {i}"), &style))
            .collect();
        story.push(Flowable::Spacer(Pt(20.0)));
        story.push(paragraph("next", &style));
        let mut doc = Document::default();
        assert_eq!(template.build(&mut doc, story), 2);
        let second = doc.ordered_pages().nth(1).unwrap();
        assert_eq!(second.contents.len(), 1);
        assert!((second.contents[0].coords.1 .0 - (720.0 - 7.18)).abs() < 0.01);
    }

    #[test]
    fn spans_carry_the_style_colour() {
        let (mut doc, template) = setup();
        let navy = Colour::new_rgb_bytes(0, 0, 128);
        let style = ParagraphStyle::new("Body", Pt(10.0)).colour(navy);
        template.build(&mut doc, vec![paragraph("Hello", &style)]);
        let page = doc.ordered_pages().next().unwrap();
        assert_eq!(page.contents[0].colour, navy);
    }

    #[test]
    fn bookmarks_point_at_the_page_they_land_on() {
        let (mut doc, template) = setup();
        let style = ParagraphStyle::new("Body", Pt(10.0));
        let mut story: Vec<Flowable> = (0..80).map(|_| paragraph("filler", &style)).collect();
        story.push(Flowable::Paragraph(
            Paragraph::from_markup("SKILLS", style.clone())
                .unwrap()
                .with_bookmark("SKILLS"),
        ));
        template.build(&mut doc, story);

        let entry = &doc.outline.entries[0];
        assert_eq!(entry.title, "SKILLS");
        assert_eq!(entry.page_index, 1);
    }
}
