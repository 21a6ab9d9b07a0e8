use crate::constants::{
    A_NAMESPACE, CHART_URI, DCTERMS_NAMESPACE, DC_NAMESPACE, P_NAMESPACE, RELS_NAMESPACE, TABLE_URI,
};
use crate::types::{
    CoreProperties, Graphic, Shape, ShapeKind, TableCell, TableElement, TableRow, TextFrame,
};
use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use roxmltree::{Document, Node};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses raw XML slide data from a PowerPoint (pptx) file into its top-level shapes.
///
/// Only the direct children of the slide's shape tree (`<p:cSld>/<p:spTree>`) become
/// shapes. Group shapes are kept as [`ShapeKind::Group`] without descending into them,
/// and non-visual tree properties (`<p:nvGrpSpPr>`, `<p:grpSpPr>`) are skipped.
///
/// # Errors
///
/// Parsing fails if:
/// - The provided XML data isn't valid UTF-8.
/// - The XML is malformed or missing the `<p:cSld>` or `<p:spTree>` elements.
pub fn parse_slide_xml(xml_data: &[u8]) -> Result<Vec<Shape>> {
    let xml_str = std::str::from_utf8(xml_data)?;
    let doc = Document::parse(xml_str)?;
    let root = doc.root_element();

    let c_sld = root
        .children()
        .find(|n| is_p(n, "cSld"))
        .ok_or(Error::ParseError("no <p:cSld> element in slide"))?;

    let sp_tree = c_sld
        .children()
        .find(|n| is_p(n, "spTree"))
        .ok_or(Error::ParseError("no <p:spTree> element in slide"))?;

    let mut shapes = Vec::new();
    for child_node in sp_tree.children().filter(|n| n.is_element()) {
        let kind = match child_node.tag_name().name() {
            "nvGrpSpPr" | "grpSpPr" | "extLst" => continue,
            _ if child_node.tag_name().namespace() != Some(P_NAMESPACE) => ShapeKind::Unknown,
            "sp" => ShapeKind::AutoShape,
            "pic" => picture_kind(&child_node),
            "graphicFrame" => ShapeKind::GraphicFrame,
            "grpSp" => ShapeKind::Group,
            "cxnSp" => ShapeKind::Connector,
            _ => ShapeKind::Unknown,
        };
        shapes.push(parse_shape(&child_node, kind));
    }

    Ok(shapes)
}

fn parse_shape(node: &Node, kind: ShapeKind) -> Shape {
    let mut shape = Shape::new(kind);
    shape.name = parse_shape_name(node).unwrap_or_default();

    match kind {
        ShapeKind::AutoShape => {
            shape.text_frame = node
                .children()
                .find(|n| is_p(n, "txBody"))
                .map(|tx_body| parse_text_frame(&tx_body));
        }
        ShapeKind::GraphicFrame => {
            shape.graphic = Some(parse_graphic_frame(node));
        }
        _ => {}
    }

    shape
}

/// Distinguishes plain pictures from placeholder pictures and media clips.
///
/// Only plain pictures count as images; a `<p:ph>` under `<p:nvPicPr>/<p:nvPr>` marks a
/// placeholder, an `<a:videoFile>` or `<a:audioFile>` there marks a media clip.
fn picture_kind(pic_node: &Node) -> ShapeKind {
    let nv_pr = pic_node
        .children()
        .find(|n| is_p(n, "nvPicPr"))
        .and_then(|nv_pic_pr| nv_pic_pr.children().find(|n| is_p(n, "nvPr")));

    let Some(nv_pr) = nv_pr else {
        return ShapeKind::Picture;
    };

    if nv_pr.children().any(|n| is_p(&n, "ph")) {
        ShapeKind::PlaceholderPicture
    } else if nv_pr.children().any(|n| is_a(&n, "videoFile") || is_a(&n, "audioFile")) {
        ShapeKind::Media
    } else {
        ShapeKind::Picture
    }
}

/// Reads the `name` attribute of the shape's `<p:cNvPr>` element.
fn parse_shape_name(node: &Node) -> Option<String> {
    node.descendants()
        .find(|n| is_p(n, "cNvPr"))
        .and_then(|n| n.attribute("name"))
        .map(str::to_string)
}

fn parse_graphic_frame(node: &Node) -> Graphic {
    let Some(graphic_data) = node.descendants().find(|n| is_a(n, "graphicData")) else {
        return Graphic::Other;
    };

    match graphic_data.attribute("uri") {
        Some(TABLE_URI) => graphic_data
            .children()
            .find(|n| is_a(n, "tbl"))
            .map(|tbl| Graphic::Table(parse_table(&tbl)))
            .unwrap_or(Graphic::Other),
        Some(CHART_URI) => Graphic::Chart,
        _ => Graphic::Other,
    }
}

/// Parses a table node (`<a:tbl>`) into rows (`<a:tr>`) of cells (`<a:tc>`).
fn parse_table(tbl_node: &Node) -> TableElement {
    let rows = tbl_node
        .children()
        .filter(|n| is_a(n, "tr"))
        .map(|tr_node| TableRow {
            cells: tr_node
                .children()
                .filter(|n| is_a(n, "tc"))
                .map(|tc_node| parse_table_cell(&tc_node))
                .collect(),
        })
        .collect();

    TableElement { rows }
}

fn parse_table_cell(tc_node: &Node) -> TableCell {
    let text = tc_node
        .children()
        .find(|n| is_a(n, "txBody"))
        .map(|tx_body| parse_text_frame(&tx_body).text())
        .unwrap_or_default();

    TableCell { text }
}

/// Collects the paragraphs (`<a:p>`) of a text body.
fn parse_text_frame(tx_body_node: &Node) -> TextFrame {
    let paragraphs = tx_body_node
        .children()
        .filter(|n| is_a(n, "p"))
        .map(|p_node| parse_paragraph(&p_node))
        .collect();

    TextFrame { paragraphs }
}

/// Concatenates the text of runs (`<a:r>`) and fields (`<a:fld>`) of a paragraph.
/// Soft line breaks (`<a:br>`) become `\n`.
fn parse_paragraph(p_node: &Node) -> String {
    let mut text = String::new();

    for child in p_node.children().filter(|n| n.is_element()) {
        if is_a(&child, "r") || is_a(&child, "fld") {
            if let Some(t) = child.children().find(|n| is_a(n, "t")).and_then(|t| t.text()) {
                text.push_str(t);
            }
        } else if is_a(&child, "br") {
            text.push('\n');
        }
    }

    text
}

/// Parses `ppt/presentation.xml` and returns the relationship ids of the slide id
/// list (`<p:sldIdLst>`) in presentation order.
///
/// Returns `None` when the presentation has no slide id list at all, and an empty
/// list when it is present but holds no slides.
pub fn parse_slide_id_list(xml_data: &[u8]) -> Result<Option<Vec<String>>> {
    let xml_str = std::str::from_utf8(xml_data)?;
    let doc = Document::parse(xml_str)?;
    let root = doc.root_element();

    let ids = root
        .children()
        .find(|n| is_p(n, "sldIdLst"))
        .map(|list| {
            list.children()
                .filter(|n| is_p(n, "sldId"))
                .filter_map(|n| n.attribute((RELS_NAMESPACE, "id")))
                .map(str::to_string)
                .collect()
        });

    Ok(ids)
}

/// Parses the core properties part (`docProps/core.xml`).
///
/// Title and author come from `dc:title` and `dc:creator`. Created and modified
/// timestamps come from `dcterms:created` and `dcterms:modified` and are rendered as
/// `YYYY-MM-DD HH:MM:SS` in UTC when they are valid W3CDTF dates.
pub fn parse_core_properties(xml_data: &[u8]) -> Result<CoreProperties> {
    let xml_str = std::str::from_utf8(xml_data)?;
    let doc = Document::parse(xml_str)?;
    let root = doc.root_element();

    let mut properties = CoreProperties::default();
    for node in root.children().filter(|n| n.is_element()) {
        let value = node
            .text()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string);

        match (node.tag_name().namespace(), node.tag_name().name()) {
            (Some(DC_NAMESPACE), "title") => properties.title = value,
            (Some(DC_NAMESPACE), "creator") => properties.author = value,
            (Some(DCTERMS_NAMESPACE), "created") => {
                properties.created = value.map(|v| format_timestamp(&v))
            }
            (Some(DCTERMS_NAMESPACE), "modified") => {
                properties.modified = value.map(|v| format_timestamp(&v))
            }
            _ => {}
        }
    }

    Ok(properties)
}

/// Normalizes a W3CDTF timestamp to `YYYY-MM-DD HH:MM:SS` (UTC).
/// Values that don't parse are returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.naive_utc().format(TIMESTAMP_FORMAT).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return dt.format(TIMESTAMP_FORMAT).to_string();
    }
    if let Some(dt) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return dt.format(TIMESTAMP_FORMAT).to_string();
    }
    raw.to_string()
}

fn is_p(node: &Node, name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == name
        && node.tag_name().namespace() == Some(P_NAMESPACE)
}

fn is_a(node: &Node, name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == name
        && node.tag_name().namespace() == Some(A_NAMESPACE)
}
