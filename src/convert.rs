use crate::font::FontFamily;
use crate::info::Info;
use crate::layout::Margins;
use crate::pagesize::{self, PageSize};
use crate::render::render_story;
use crate::resume::{
    clean_text, load_text, normalize_newlines, story_from_text, BulletPolicy, StyleSheet,
};
use crate::units::Pt;
use crate::ConvertError;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Everything that can be tuned about a conversion
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub page_size: PageSize,
    pub margins: Margins,
    pub styles: StyleSheet,
    pub bullets: BulletPolicy,
    /// Repair mis-encoded punctuation and drop non-ASCII characters
    pub cleanup: bool,
    /// Add an outline entry for every section header
    pub bookmarks: bool,
    /// Flate-compress page content
    pub compress: bool,
    pub info: Info,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            page_size: pagesize::LETTER,
            margins: Margins::all(Pt(72.0)),
            styles: StyleSheet::default(),
            bullets: BulletPolicy::default(),
            cleanup: true,
            bookmarks: true,
            compress: true,
            info: Info::default(),
        }
    }
}

impl ConvertOptions {
    pub fn new() -> ConvertOptions {
        ConvertOptions::default()
    }

    pub fn with_page_size(mut self, size: PageSize) -> Self {
        self.page_size = size;
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn with_font_family(mut self, family: FontFamily) -> Self {
        self.styles = self.styles.with_family(family);
        self
    }

    pub fn with_styles(mut self, styles: StyleSheet) -> Self {
        self.styles = styles;
        self
    }

    pub fn with_bullets(mut self, bullets: BulletPolicy) -> Self {
        self.bullets = bullets;
        self
    }

    pub fn with_cleanup(mut self, cleanup: bool) -> Self {
        self.cleanup = cleanup;
        self
    }

    pub fn with_bookmarks(mut self, bookmarks: bool) -> Self {
        self.bookmarks = bookmarks;
        self
    }

    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn with_info(mut self, info: Info) -> Self {
        self.info = info;
        self
    }
}

/// What a finished conversion produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertReport {
    pub paragraphs: usize,
    pub pages: usize,
    pub bytes: usize,
}

/// Render résumé text straight to PDF bytes
pub fn convert_str(text: &str, options: &ConvertOptions) -> Result<Vec<u8>, ConvertError> {
    render_text(text, options).map(|(pdf, _)| pdf)
}

fn render_text(
    text: &str,
    options: &ConvertOptions,
) -> Result<(Vec<u8>, ConvertReport), ConvertError> {
    let text = if options.cleanup {
        clean_text(text)
    } else {
        normalize_newlines(text)
    };

    let story = story_from_text(&text, options.bullets);
    let document = render_story(&story, options)?;
    let paragraphs = story.lines().count();
    let pages = document.page_order.len();

    let mut pdf: Vec<u8> = Vec::new();
    document.write(&mut pdf)?;

    let report = ConvertReport {
        paragraphs,
        pages,
        bytes: pdf.len(),
    };
    Ok((pdf, report))
}

/// Convert the résumé at `input` into a PDF at `output`, replacing any file
/// already there. An output that names the input itself is refused.
pub fn convert_file<I: AsRef<Path>, O: AsRef<Path>>(
    input: I,
    output: O,
    options: &ConvertOptions,
) -> Result<ConvertReport, ConvertError> {
    let (input, output) = (input.as_ref(), output.as_ref());
    if same_file(input, output) {
        return Err(ConvertError::OutputIsInput {
            path: input.to_path_buf(),
        });
    }
    let text = load_text(input)?;
    let (pdf, report) = render_text(&text, options)?;

    std::fs::write(output, &pdf).map_err(|source| ConvertError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    log::info!(
        "wrote {} ({} paragraphs, {} page(s), {} bytes)",
        output.display(),
        report.paragraphs,
        report.pages,
        report.bytes
    );
    Ok(report)
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Output paths that more than one job writes to, in first-seen order
pub fn duplicate_outputs(jobs: &[(PathBuf, PathBuf)]) -> Vec<&Path> {
    let mut seen: HashSet<&Path> = HashSet::new();
    let mut duplicates: Vec<&Path> = Vec::new();
    for (_, output) in jobs {
        if !seen.insert(output.as_path()) && !duplicates.contains(&output.as_path()) {
            duplicates.push(output.as_path());
        }
    }
    duplicates
}

/// Convert several résumés one after another. Each job succeeds or fails on
/// its own; a failure is logged and the remaining jobs still run. Jobs that
/// share an output path are warned about, and the last one wins.
pub fn convert_batch(
    jobs: &[(PathBuf, PathBuf)],
    options: &ConvertOptions,
) -> Vec<Result<ConvertReport, ConvertError>> {
    for output in duplicate_outputs(jobs) {
        log::warn!(
            "{} is the output of several inputs, only the last conversion is kept",
            output.display()
        );
    }

    jobs.iter()
        .map(|(input, output)| {
            let result = convert_file(input, output, options);
            if let Err(e) = &result {
                match std::error::Error::source(e) {
                    Some(cause) => log::error!("{}: {e}: {cause}", input.display()),
                    None => log::error!("{}: {e}", input.display()),
                }
            }
            result
        })
        .collect()
}

/// The default output path for `input`: the same path with a `.pdf` extension
pub fn default_output_path<P: AsRef<Path>>(input: P) -> PathBuf {
    input.as_ref().with_extension("pdf")
}
