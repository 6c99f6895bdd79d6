//! Binds a résumé [Story] to the layout layer: each line becomes a styled
//! paragraph and each section break a spacer.

use crate::layout::{Flowable, PageTemplate, Paragraph};
use crate::markup::escape;
use crate::resume::{Classification, Story, StoryItem, StyleSheet};
use crate::{ConvertOptions, Document, Font, PDFError, StandardFont};

/// Lay `story` out on pages according to `options`, ready to be written
pub fn render_story(story: &Story, options: &ConvertOptions) -> Result<Document, PDFError> {
    let flowables = flowables(story, &options.styles, options.bookmarks)?;
    warn_unencodable(story);

    let mut document = Document {
        compress: options.compress,
        ..Document::default()
    };
    document.set_info(options.info.clone());

    let template = PageTemplate::new(options.page_size, options.margins);
    let pages = template.build(&mut document, flowables);
    log::debug!("laid out {} paragraphs on {pages} page(s)", story.lines().count());

    Ok(document)
}

/// Turn the story into layout flowables. Line text is escaped on the way in,
/// so characters like `&` and `<` are drawn literally.
pub fn flowables(
    story: &Story,
    styles: &StyleSheet,
    bookmarks: bool,
) -> Result<Vec<Flowable>, PDFError> {
    story
        .items
        .iter()
        .map(|item| match item {
            StoryItem::Line {
                text,
                classification,
                ..
            } => {
                let style = styles.get(*classification).clone();
                let paragraph = Paragraph::from_markup(&escape(text), style)?;
                Ok(Flowable::Paragraph(
                    if bookmarks && *classification == Classification::Header {
                        paragraph.with_bookmark(text)
                    } else {
                        paragraph
                    },
                ))
            }
            StoryItem::SectionBreak => Ok(Flowable::Spacer(styles.section_spacing)),
        })
        .collect()
}

fn warn_unencodable(story: &Story) {
    // every standard face shares one encoding
    let font = Font::new(StandardFont::Helvetica);
    let missing: usize = story
        .lines()
        .map(|(text, _)| text.chars().filter(|&ch| !font.has_glyph(ch)).count())
        .sum();
    if missing > 0 {
        log::warn!("{missing} character(s) have no glyph in the standard fonts, drawing '?'");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::{story_from_text, BulletPolicy};
    use crate::units::Pt;

    fn render(text: &str) -> Document {
        let story = story_from_text(text, BulletPolicy::Glyph);
        render_story(&story, &ConvertOptions::default()).unwrap()
    }

    #[test]
    fn special_characters_render_literally() {
        let doc = render("Jane\n\nR&D <lead> & more >");
        let text: Vec<&str> = doc.ordered_pages().flat_map(|p| p.text()).collect();
        assert!(text.contains(&"R&D <lead> & more >"));
    }

    #[test]
    fn sections_become_spacers() {
        let story = story_from_text(
            "JANE DOE\n\nEXPERIENCE\n- Built widgets",
            BulletPolicy::Glyph,
        );
        let flowables = flowables(&story, &StyleSheet::default(), false).unwrap();
        assert_eq!(flowables.len(), 5);
        assert_eq!(flowables[1], Flowable::Spacer(Pt(12.0)));
        assert_eq!(flowables[4], Flowable::Spacer(Pt(12.0)));
        match &flowables[0] {
            Flowable::Paragraph(p) => {
                assert_eq!(p.style.name, "Name");
                assert_eq!(p.plain_text(), "JANE DOE");
            }
            other => panic!("expected a paragraph, got {other:?}"),
        }
    }

    #[test]
    fn closing_section_break_never_adds_a_blank_page() {
        // the last line ends less than one section spacer above the margin
        let mut text = String::from("Jane\n\n");
        for i in 0..33 {
            text.push_str(&format!("line {i}\n"));
        }
        let doc = render(&text);
        let spans: Vec<usize> = doc.ordered_pages().map(|p| p.contents.len()).collect();
        assert_eq!(spans, vec![34]);
    }

    #[test]
    fn headers_are_bookmarked() {
        let doc = render("Jane Doe\n\nEXPERIENCE\nthings\n\nSKILLS\nmore");
        let titles: Vec<&str> = doc
            .outline
            .entries
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["EXPERIENCE", "SKILLS"]);
    }

    #[test]
    fn styles_reach_the_page() {
        let doc = render("JANE DOE\n\nEXPERIENCE\n- Built widgets");
        let page = doc.ordered_pages().next().unwrap();
        let sizes: Vec<f32> = page.contents.iter().map(|s| s.font.size.0).collect();
        assert_eq!(sizes, vec![16.0, 12.0, 10.0]);

        let name_font = &doc.fonts[page.contents[0].font.id];
        assert_eq!(name_font.name(), "Helvetica-Bold");
        let bullet = &page.contents[2];
        assert_eq!(bullet.text, "• Built widgets");
        assert_eq!(bullet.coords.0, Pt(72.0 + 18.0));
    }
}
