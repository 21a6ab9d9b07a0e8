use crate::config::ConverterConfig;
use crate::constants::{CHART_PLACEHOLDER, IMAGE_PLACEHOLDER};
use crate::parse_xml;
use crate::{Result, Shape, TableElement};

/// A single parsed slide: the top-level shapes of its shape tree, in tree order.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub rel_path: String,
    pub slide_number: u32,
    pub shapes: Vec<Shape>,
}

impl Slide {
    pub fn new(rel_path: String, shapes: Vec<Shape>) -> Self {
        let slide_number = Self::extract_slide_number(&rel_path).unwrap_or(0);
        Self { rel_path, slide_number, shapes }
    }

    pub fn parse(xml: &[u8], rel_path: String) -> Result<Slide> {
        let shapes = parse_xml::parse_slide_xml(xml)?;
        Ok(Self::new(rel_path, shapes))
    }

    /// Reads the number out of a slide part name such as `ppt/slides/slide12.xml`.
    pub fn extract_slide_number(path: &str) -> Option<u32> {
        path
            .split('/')
            .last()
            .and_then(|filename| {
                filename
                    .strip_prefix("slide")
                    .and_then(|s| s.strip_suffix(".xml"))
            })
            .and_then(|num_str| num_str.parse::<u32>().ok())
    }

    /// Returns the shape used as the slide title: the first text shape whose text is
    /// not blank. Shape order decides, not position on the slide.
    pub fn title(&self) -> Option<&Shape> {
        self.text_shapes().next()
    }

    /// Text-bearing shapes with non-blank text, in shape order.
    fn text_shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes
            .iter()
            .filter(|shape| shape.has_text() && !shape.text().trim().is_empty())
    }

    /// Renders the slide as a Markdown section.
    ///
    /// `position` is the 1-based place of the slide in the presentation and is used
    /// for the `## Slide {n}` heading. The section always ends with a `---` rule.
    pub fn convert_to_md(&self, position: usize, config: &ConverterConfig) -> String {
        let mut slide_txt = String::new();
        slide_txt.push_str(&format!("\n## Slide {}\n", position));

        let mut title: Option<String> = None;
        for shape in self.text_shapes() {
            let text = shape.text();
            let text = text.trim();
            if title.is_none() {
                slide_txt.push_str(&format!("### {}\n", text));
                title = Some(text.to_string());
            } else if title.as_deref() != Some(text) {
                slide_txt.push_str(text);
                slide_txt.push('\n');
            }
        }

        for shape in &self.shapes {
            if config.include_tables {
                if let Some(table_txt) = shape.table_element().and_then(render_table) {
                    slide_txt.push_str(&format!("\n**Table:**\n```\n{}\n```\n", table_txt));
                }
            }

            if config.include_placeholders {
                if shape.is_picture() {
                    slide_txt.push_str(&format!("\n{}\n", IMAGE_PLACEHOLDER));
                }
                if shape.has_chart() {
                    slide_txt.push_str(&format!("\n{}\n", CHART_PLACEHOLDER));
                }
            }
        }

        slide_txt.push_str("\n---\n");
        slide_txt
    }
}

/// Renders table rows as pipe-separated lines.
///
/// Cells are stripped and blank cells are dropped; rows left without any cell are
/// skipped. Returns `None` when no row survives.
pub fn render_table(table: &TableElement) -> Option<String> {
    let lines: Vec<String> = table
        .rows
        .iter()
        .map(|row| {
            row.cells
                .iter()
                .map(|cell| cell.text.trim())
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}
