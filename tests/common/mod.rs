#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const NAMESPACES: &str = r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#;

/// Assembles a minimal but well-formed pptx package for tests.
#[derive(Debug, Default)]
pub struct PptxBuilder {
    title: Option<String>,
    author: Option<String>,
    created: Option<String>,
    modified: Option<String>,
    slides: Vec<String>,
}

impl PptxBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, value: &str) -> Self {
        self.title = Some(value.to_string());
        self
    }

    pub fn author(mut self, value: &str) -> Self {
        self.author = Some(value.to_string());
        self
    }

    pub fn created(mut self, value: &str) -> Self {
        self.created = Some(value.to_string());
        self
    }

    pub fn modified(mut self, value: &str) -> Self {
        self.modified = Some(value.to_string());
        self
    }

    /// Adds a slide whose shape tree holds the given shape elements, in order.
    pub fn slide(mut self, shapes: &[String]) -> Self {
        self.slides.push(shapes.concat());
        self
    }

    pub fn write_to(&self, path: &Path) {
        let file = File::create(path).expect("create pptx file");
        let mut writer = ZipWriter::new(file);
        let options = SimpleFileOptions::default();

        let mut add = |name: &str, content: String| {
            writer.start_file(name, options).expect("start zip entry");
            writer.write_all(content.as_bytes()).expect("write zip entry");
        };

        add(
            "_rels/.rels",
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/></Relationships>"#
                .to_string(),
        );
        add("docProps/core.xml", self.core_xml());

        let slide_ids: String = (0..self.slides.len())
            .map(|i| format!(r#"<p:sldId id="{}" r:id="rId{}"/>"#, 256 + i, i + 1))
            .collect();
        add(
            "ppt/presentation.xml",
            format!(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation {NAMESPACES}><p:sldIdLst>{slide_ids}</p:sldIdLst><p:sldSz cx="9144000" cy="6858000"/></p:presentation>"#),
        );

        let slide_rels: String = (0..self.slides.len())
            .map(|i| {
                format!(
                    r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide{}.xml"/>"#,
                    i + 1,
                    i + 1
                )
            })
            .collect();
        add(
            "ppt/_rels/presentation.xml.rels",
            format!(r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{slide_rels}</Relationships>"#),
        );

        for (i, shapes) in self.slides.iter().enumerate() {
            add(
                &format!("ppt/slides/slide{}.xml", i + 1),
                format!(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld {NAMESPACES}><p:cSld><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/>{shapes}</p:spTree></p:cSld></p:sld>"#),
            );
        }

        writer.finish().expect("finish zip archive");
    }

    fn core_xml(&self) -> String {
        let mut fields = String::new();
        if let Some(title) = &self.title {
            fields.push_str(&format!("<dc:title>{}</dc:title>", title));
        }
        if let Some(author) = &self.author {
            fields.push_str(&format!("<dc:creator>{}</dc:creator>", author));
        }
        if let Some(created) = &self.created {
            fields.push_str(&format!(
                r#"<dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>"#,
                created
            ));
        }
        if let Some(modified) = &self.modified {
            fields.push_str(&format!(
                r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{}</dcterms:modified>"#,
                modified
            ));
        }
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">{fields}</cp:coreProperties>"#
        )
    }
}

/// A `<p:sp>` text box, one `<a:p>` per line of `text`.
pub fn text_shape(text: &str) -> String {
    let paragraphs: String = text
        .split('\n')
        .map(|line| format!("<a:p><a:r><a:t>{}</a:t></a:r></a:p>", line))
        .collect();
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="TextBox"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr><p:spPr/><p:txBody><a:bodyPr/><a:lstStyle/>{paragraphs}</p:txBody></p:sp>"#
    )
}

/// A `<p:graphicFrame>` holding a table with the given cell texts.
pub fn table_shape(rows: &[&[&str]]) -> String {
    let rows: String = rows
        .iter()
        .map(|cells| {
            let cells: String = cells
                .iter()
                .map(|cell| {
                    format!(
                        concat!(
                            "<a:tc><a:txBody><a:bodyPr/><a:p><a:r><a:t>{}</a:t></a:r></a:p>",
                            "</a:txBody><a:tcPr/></a:tc>"
                        ),
                        cell
                    )
                })
                .collect();
            format!(r#"<a:tr h="370840">{cells}</a:tr>"#)
        })
        .collect();
    format!(
        r#"<p:graphicFrame><p:nvGraphicFramePr><p:cNvPr id="3" name="Table"/><p:cNvGraphicFramePr/><p:nvPr/></p:nvGraphicFramePr><p:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/></p:xfrm><a:graphic><a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/table"><a:tbl>{rows}</a:tbl></a:graphicData></a:graphic></p:graphicFrame>"#
    )
}

pub fn picture_shape() -> String {
    concat!(
        r#"<p:pic><p:nvPicPr><p:cNvPr id="4" name="Picture"/><p:cNvPicPr/><p:nvPr/></p:nvPicPr>"#,
        r#"<p:blipFill><a:blip r:embed="rId9"/></p:blipFill><p:spPr/></p:pic>"#,
    )
    .to_string()
}

/// A `<p:pic>` sitting in a layout picture placeholder.
pub fn placeholder_picture_shape() -> String {
    concat!(
        r#"<p:pic><p:nvPicPr><p:cNvPr id="6" name="Picture Placeholder"/><p:cNvPicPr/>"#,
        r#"<p:nvPr><p:ph type="pic" idx="1"/></p:nvPr></p:nvPicPr>"#,
        r#"<p:blipFill><a:blip r:embed="rId10"/></p:blipFill><p:spPr/></p:pic>"#,
    )
    .to_string()
}

/// A `<p:pic>` acting as the poster frame of an embedded video.
pub fn video_shape() -> String {
    concat!(
        r#"<p:pic><p:nvPicPr><p:cNvPr id="7" name="Video"/><p:cNvPicPr/>"#,
        r#"<p:nvPr><a:videoFile r:link="rId11"/></p:nvPr></p:nvPicPr>"#,
        r#"<p:blipFill><a:blip r:embed="rId12"/></p:blipFill><p:spPr/></p:pic>"#,
    )
    .to_string()
}

pub fn chart_shape() -> String {
    concat!(
        r#"<p:graphicFrame><p:nvGraphicFramePr><p:cNvPr id="5" name="Chart"/>"#,
        r#"<p:cNvGraphicFramePr/><p:nvPr/></p:nvGraphicFramePr>"#,
        r#"<p:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/></p:xfrm><a:graphic>"#,
        r#"<a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/chart">"#,
        r#"<c:chart xmlns:c="http://schemas.openxmlformats.org/drawingml/2006/chart" r:id="rId8"/>"#,
        r#"</a:graphicData></a:graphic></p:graphicFrame>"#,
    )
    .to_string()
}

pub fn normalize_test_string(input: &str) -> String {
    input
        .trim_start_matches('\u{feff}') // remove BOM
        .replace("\r\n", "\n") // normalize line breaks
}
