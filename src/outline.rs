use crate::refs::{ObjectReferences, RefType};
use crate::PDFError;
use pdf_writer::{Finish, Pdf, TextStr};

/// The flat list of bookmarks shown in a viewer's sidebar
#[derive(Default, Debug, Clone)]
pub struct Outline {
    pub entries: Vec<OutlineEntry>,
}

/// A bookmark jumping to a position on a page
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineEntry {
    /// 0-based index of the target page within the document's page order
    pub page_index: usize,
    /// Distance from the bottom of the page that the viewer scrolls to
    pub top: f32,
    pub title: String,
}

impl Outline {
    pub fn add_bookmark(&mut self, title: String, page_index: usize, top: f32) {
        self.entries.push(OutlineEntry {
            page_index,
            top,
            title,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        writer: &mut Pdf,
    ) -> Result<(), PDFError> {
        let outlines_id = refs.gen(RefType::Outlines);
        let item_ids: Vec<_> = (0..self.entries.len())
            .map(|i| refs.gen(RefType::OutlineEntry(i)))
            .collect();

        let mut outline = writer.outline(outlines_id);
        if let (Some(first), Some(last)) = (item_ids.first(), item_ids.last()) {
            outline.first(*first);
            outline.last(*last);
            outline.count(item_ids.len() as i32);
        }
        outline.finish();

        for (i, entry) in self.entries.iter().enumerate() {
            let page_id = refs
                .get(RefType::Page(entry.page_index))
                .ok_or(PDFError::PageMissing)?;
            let mut item = writer.outline_item(item_ids[i]);
            item.parent(outlines_id);
            item.title(TextStr(entry.title.as_str()));
            if i > 0 {
                item.prev(item_ids[i - 1]);
            }
            if let Some(next) = item_ids.get(i + 1) {
                item.next(*next);
            }
            item.dest().page(page_id).fit_horizontal(entry.top);
            item.finish();
        }

        Ok(())
    }
}
