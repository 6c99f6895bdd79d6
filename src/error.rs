use crate::markup::MarkupError;
use std::path::PathBuf;
use thiserror::Error;

/// All errors that the layout and PDF writing layer can generate
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// Paragraph text was not well-formed markup
    Markup(#[from] MarkupError),

    #[error("page referenced before it was added to the document")]
    /// A page id or index did not resolve to a page in the document
    PageMissing,
}

/// Everything that can abort the conversion of a single résumé
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("failed to read {}", path.display())]
    /// The input file does not exist or could not be read
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8 text", path.display())]
    /// The input bytes could not be decoded as text
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("{} would be overwritten by its own conversion", path.display())]
    /// The output path names the input file
    OutputIsInput { path: PathBuf },

    #[error("failed to render PDF")]
    /// The layout or PDF writing layer rejected the content
    Render(#[from] PDFError),

    #[error("failed to write {}", path.display())]
    /// The output path could not be written
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
