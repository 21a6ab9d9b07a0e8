use crate::constants::DEFAULT_TITLE;

/// Configuration options for the Markdown conversion.
///
/// Use [`ConverterConfig::builder()`] to create a configuration instance.
/// This allows you to customize only the desired fields while falling back to sensible
/// defaults for the rest.
///
/// # Configuration Options
///
/// | Parameter | Type | Default | Description |
/// |-----------|------|---------|-------------|
/// | `default_title` | `String` | `"Presentation"` | Top-level heading used when the document has no title |
/// | `include_metadata` | `bool` | `true` | Whether author and timestamp lines are written |
/// | `include_tables` | `bool` | `true` | Whether table contents are written |
/// | `include_placeholders` | `bool` | `true` | Whether image and chart placeholder lines are written |
///
/// # Example
///
/// ```
/// use pptx2md::ConverterConfig;
///
/// let config = ConverterConfig::builder()
///     .include_metadata(false)
///     .build();
///
/// assert_eq!(config.default_title, "Presentation");
/// assert!(!config.include_metadata);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    pub default_title: String,
    pub include_metadata: bool,
    pub include_tables: bool,
    pub include_placeholders: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            default_title: DEFAULT_TITLE.to_string(),
            include_metadata: true,
            include_tables: true,
            include_placeholders: true,
        }
    }
}

impl ConverterConfig {
    pub fn builder() -> ConverterConfigBuilder {
        ConverterConfigBuilder::default()
    }
}

/// Builder for [`ConverterConfig`].
///
/// Allows setting individual configuration fields while falling back to defaults for any
/// unspecified values
#[derive(Debug, Default)]
pub struct ConverterConfigBuilder {
    default_title: Option<String>,
    include_metadata: Option<bool>,
    include_tables: Option<bool>,
    include_placeholders: Option<bool>,
}

impl ConverterConfigBuilder {
    /// Sets the heading used for presentations without a title.
    pub fn default_title(mut self, value: impl Into<String>) -> Self {
        self.default_title = Some(value.into());
        self
    }

    pub fn include_metadata(mut self, value: bool) -> Self {
        self.include_metadata = Some(value);
        self
    }

    pub fn include_tables(mut self, value: bool) -> Self {
        self.include_tables = Some(value);
        self
    }

    /// Sets whether pictures and charts leave a placeholder line in the output.
    pub fn include_placeholders(mut self, value: bool) -> Self {
        self.include_placeholders = Some(value);
        self
    }

    /// Builds the final [`ConverterConfig`] instance, applying default values for any fields
    /// that were not set.
    pub fn build(self) -> ConverterConfig {
        let defaults = ConverterConfig::default();
        ConverterConfig {
            default_title: self.default_title.unwrap_or(defaults.default_title),
            include_metadata: self.include_metadata.unwrap_or(defaults.include_metadata),
            include_tables: self.include_tables.unwrap_or(defaults.include_tables),
            include_placeholders: self
                .include_placeholders
                .unwrap_or(defaults.include_placeholders),
        }
    }
}
