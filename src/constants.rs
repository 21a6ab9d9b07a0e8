pub const P_NAMESPACE: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
pub const A_NAMESPACE: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
pub const RELS_NAMESPACE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

pub const DC_NAMESPACE: &str = "http://purl.org/dc/elements/1.1/";
pub const DCTERMS_NAMESPACE: &str = "http://purl.org/dc/terms/";

pub const TABLE_URI: &str = "http://schemas.openxmlformats.org/drawingml/2006/table";
pub const CHART_URI: &str = "http://schemas.openxmlformats.org/drawingml/2006/chart";

pub const SLIDE_REL_TYPE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
pub const CORE_PROPERTIES_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";

pub const PACKAGE_RELS_PATH: &str = "_rels/.rels";
pub const PRESENTATION_PATH: &str = "ppt/presentation.xml";
pub const PRESENTATION_RELS_PATH: &str = "ppt/_rels/presentation.xml.rels";
pub const DEFAULT_CORE_PROPERTIES_PATH: &str = "docProps/core.xml";

pub const DEFAULT_TITLE: &str = "Presentation";
pub const IMAGE_PLACEHOLDER: &str = "*[Image included in original presentation]*";
pub const CHART_PLACEHOLDER: &str = "*[Chart included in original presentation]*";
