use crate::config::ConverterConfig;
use crate::{Error, PptxContainer, Result};
use log::{error, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of a single conversion, as reported to the caller.
///
/// `message` is a human-readable status line suitable for printing as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub success: bool,
    pub message: String,
    pub output_path: Option<PathBuf>,
}

/// Path the Markdown file is written to when no explicit output is given:
/// the input path with its extension replaced by `md`.
///
/// ```
/// use std::path::{Path, PathBuf};
/// use pptx2md::default_output_path;
///
/// assert_eq!(default_output_path(Path::new("talks/deck.pptx")), PathBuf::from("talks/deck.md"));
/// ```
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("md")
}

/// Converts `input` to Markdown and writes the result to `output`.
///
/// The Markdown document is assembled completely before the output file is created,
/// so a failed load never leaves a file behind. Returns the path written.
///
/// # Errors
///
/// [`Error::FileNotFound`] if `input` does not exist, otherwise any load, parse or
/// write error.
pub fn try_convert(
    input: &Path,
    output: Option<&Path>,
    config: &ConverterConfig,
) -> Result<PathBuf> {
    if !input.exists() {
        return Err(Error::FileNotFound(input.to_path_buf()));
    }

    let mut container = PptxContainer::open(input)?;
    let presentation = container.load_presentation()?;
    let markdown = presentation.convert_to_md(config);

    let output_path = output.map(Path::to_path_buf).unwrap_or_else(|| default_output_path(input));
    fs::write(&output_path, markdown)?;

    info!(
        "wrote {} slides from {} to {}",
        presentation.slides.len(),
        input.display(),
        output_path.display()
    );

    Ok(output_path)
}

/// Converts a presentation with the default [`ConverterConfig`] and reports the outcome.
///
/// Never returns an error or panics on bad input: a missing file or a presentation
/// that can't be loaded is turned into a failed [`ConversionReport`].
pub fn convert(input: &Path, output: Option<&Path>) -> ConversionReport {
    convert_with_config(input, output, &ConverterConfig::default())
}

pub fn convert_with_config(
    input: &Path,
    output: Option<&Path>,
    config: &ConverterConfig,
) -> ConversionReport {
    match try_convert(input, output, config) {
        Ok(output_path) => ConversionReport {
            success: true,
            message: format!(
                "Successfully converted {} to {}",
                input.display(),
                output_path.display()
            ),
            output_path: Some(output_path),
        },
        Err(e) => {
            error!("conversion of {} failed: {}", input.display(), e);
            let message = match e {
                Error::FileNotFound(path) => format!("Error: File {} not found", path.display()),
                other => format!("Error converting presentation: {}", other),
            };
            ConversionReport { success: false, message, output_path: None }
        }
    }
}
