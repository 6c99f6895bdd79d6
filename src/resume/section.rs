/// A blank-line delimited block of the résumé, trimmed of surrounding
/// whitespace. `index` is the block's position within the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub index: usize,
    pub lines: Vec<String>,
}

impl Section {
    /// Lines that carry text, paired with their index within the section
    pub fn non_blank_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| (i, line.as_str()))
    }
}

/// Split text into sections at every blank line (two consecutive line
/// breaks). Every separator produces a section, so runs of blank lines yield
/// empty sections; they keep their slot but contain no text.
pub fn split_sections(text: &str) -> Vec<Section> {
    text.split("\n\n")
        .enumerate()
        .map(|(index, block)| Section {
            index,
            lines: block.trim().split('\n').map(str::to_string).collect(),
        })
        .collect()
}
