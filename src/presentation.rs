use crate::config::ConverterConfig;
use crate::{CoreProperties, Slide};

/// A fully loaded presentation: document metadata plus its slides in presentation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Presentation {
    pub properties: CoreProperties,
    pub slides: Vec<Slide>,
}

impl Presentation {
    pub fn new(properties: CoreProperties, slides: Vec<Slide>) -> Self {
        Self { properties, slides }
    }

    /// Renders the whole presentation as one Markdown document.
    ///
    /// The document starts with a `#` heading carrying the title (or
    /// [`ConverterConfig::default_title`]), followed by any present metadata fields and a
    /// `---` rule, then one section per slide numbered from 1.
    pub fn convert_to_md(&self, config: &ConverterConfig) -> String {
        let mut md = String::new();

        let title = self.properties.title.as_deref().unwrap_or(&config.default_title);
        md.push_str(&format!("# {}\n", title));

        if config.include_metadata {
            let fields = [
                ("Author", &self.properties.author),
                ("Created", &self.properties.created),
                ("Modified", &self.properties.modified),
            ];
            for (label, value) in fields {
                if let Some(value) = value {
                    md.push_str(&format!("**{}:** {}\n", label, value));
                }
            }
        }

        md.push_str("\n---\n");

        for (idx, slide) in self.slides.iter().enumerate() {
            md.push_str(&slide.convert_to_md(idx + 1, config));
        }

        md
    }
}
