/// Document-level metadata read from the core properties part (`docProps/core.xml`).
///
/// Every field is optional; empty values in the package are stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoreProperties {
    pub title: Option<String>,
    pub author: Option<String>,
    pub created: Option<String>,
    pub modified: Option<String>,
}

/// The kind of element a shape was parsed from in the slide's shape tree (`<p:spTree>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// `<p:sp>`
    AutoShape,
    /// `<p:pic>` holding a plain picture
    Picture,
    /// `<p:pic>` filling a layout placeholder (`<p:nvPr><p:ph/>`)
    PlaceholderPicture,
    /// `<p:pic>` that is the poster frame of a video or audio clip
    Media,
    /// `<p:graphicFrame>`, holding a table, chart or other graphic
    GraphicFrame,
    /// `<p:grpSp>`
    Group,
    /// `<p:cxnSp>`
    Connector,
    Unknown,
}

/// Content carried by a graphic frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Graphic {
    Table(TableElement),
    Chart,
    Other,
}

/// A single positioned element on a slide.
///
/// A shape exposes four independent capability queries, [`Shape::has_text`],
/// [`Shape::has_table`], [`Shape::has_chart`] and [`Shape::is_picture`]. Rendering
/// asks each of them separately, so a shape matching more than one is emitted once
/// per matching branch.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub name: String,
    pub text_frame: Option<TextFrame>,
    pub graphic: Option<Graphic>,
}

impl Shape {
    pub fn new(kind: ShapeKind) -> Self {
        Self { kind, name: String::new(), text_frame: None, graphic: None }
    }

    /// Convenience constructor for a text shape with one paragraph per line of `text`.
    pub fn text_box(text: &str) -> Self {
        Self {
            text_frame: Some(TextFrame::from_text(text)),
            ..Self::new(ShapeKind::AutoShape)
        }
    }

    pub fn picture() -> Self {
        Self::new(ShapeKind::Picture)
    }

    pub fn table(table: TableElement) -> Self {
        Self {
            graphic: Some(Graphic::Table(table)),
            ..Self::new(ShapeKind::GraphicFrame)
        }
    }

    pub fn chart() -> Self {
        Self {
            graphic: Some(Graphic::Chart),
            ..Self::new(ShapeKind::GraphicFrame)
        }
    }

    pub fn has_text(&self) -> bool {
        self.text_frame.is_some()
    }

    pub fn has_table(&self) -> bool {
        matches!(self.graphic, Some(Graphic::Table(_)))
    }

    pub fn has_chart(&self) -> bool {
        matches!(self.graphic, Some(Graphic::Chart))
    }

    /// True only for plain pictures; placeholder pictures and media clips don't count.
    pub fn is_picture(&self) -> bool {
        self.kind == ShapeKind::Picture
    }

    /// Full text of the shape's text frame, or an empty string if it has none.
    pub fn text(&self) -> String {
        self.text_frame.as_ref().map(TextFrame::text).unwrap_or_default()
    }

    pub fn table_element(&self) -> Option<&TableElement> {
        match &self.graphic {
            Some(Graphic::Table(table)) => Some(table),
            _ => None,
        }
    }
}

/// The text-holding part of a shape (`<p:txBody>`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFrame {
    pub paragraphs: Vec<String>,
}

impl TextFrame {
    pub fn from_text(text: &str) -> Self {
        Self { paragraphs: text.split('\n').map(str::to_string).collect() }
    }

    /// Paragraphs joined by newlines.
    pub fn text(&self) -> String {
        self.paragraphs.join("\n")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableElement {
    pub rows: Vec<TableRow>,
}

impl TableElement {
    /// Builds a table from plain cell strings, mostly useful in tests.
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let rows = rows
            .into_iter()
            .map(|cells| TableRow {
                cells: cells
                    .into_iter()
                    .map(|text| TableCell { text: text.into() })
                    .collect(),
            })
            .collect();
        Self { rows }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableCell {
    pub text: String,
}

/// A single `<Relationship>` entry of an OPC `.rels` part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub id: String,
    pub rel_type: String,
    pub target: String,
}
