//! Convert PowerPoint (`.pptx`) presentations into a Markdown outline.
//!
//! The package is read with [`PptxContainer`], which yields a [`Presentation`] made of
//! [`Slide`]s and their [`Shape`]s. [`Presentation::convert_to_md`] renders headings,
//! body text, tables and placeholder notes for pictures and charts.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let report = pptx2md::convert(Path::new("deck.pptx"), None);
//! println!("{}", report.message);
//! ```

mod config;
mod constants;
mod container;
mod convert;
mod parse_rels;
mod parse_xml;
mod presentation;
mod slide;
mod types;

use std::path::PathBuf;

pub use config::{ConverterConfig, ConverterConfigBuilder};
pub use constants::{CHART_PLACEHOLDER, DEFAULT_TITLE, IMAGE_PLACEHOLDER};
pub use container::{PptxContainer, SlideIterator};
pub use convert::{
    convert, convert_with_config, default_output_path, try_convert, ConversionReport,
};
pub use parse_rels::resolve_target;
pub use parse_xml::format_timestamp;
pub use presentation::Presentation;
pub use slide::{render_table, Slide};
pub use types::*;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File {} not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("Part {0} is missing from the package")]
    MissingPart(String),

    #[error("Parse error: {0}")]
    ParseError(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
