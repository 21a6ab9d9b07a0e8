use super::{Error, Result, Slide};
use crate::constants::{
    CORE_PROPERTIES_REL_TYPE, DEFAULT_CORE_PROPERTIES_PATH, PACKAGE_RELS_PATH, PRESENTATION_PATH,
    PRESENTATION_RELS_PATH, SLIDE_REL_TYPE,
};
use crate::parse_rels::{parse_rels, resolve_target};
use crate::parse_xml::{parse_core_properties, parse_slide_id_list};
use crate::{CoreProperties, Presentation};
use log::{debug, warn};
use std::{
    collections::HashMap,
    fs::File,
    io::{Read, Seek},
    path::Path,
};
use zip::result::ZipError;
use zip::ZipArchive;

/// Holds the internal representation of a loaded PowerPoint (pptx) container.
///
/// `PptxContainer` resolves the slide order once when the archive is opened and then
/// reads and parses slide parts on demand, so a presentation can either be streamed
/// slide by slide ([`PptxContainer::iter_slides`]) or loaded at once
/// ([`PptxContainer::load_presentation`]).
pub struct PptxContainer<R: Read + Seek = File> {
    archive: ZipArchive<R>,
    pub slide_paths: Vec<String>,
    pub slide_count: u32,
}

impl PptxContainer<File> {
    /// Opens a PowerPoint pptx file and initializes a `PptxContainer`.
    ///
    /// # Errors
    ///
    /// Errors are returned on file access problems, when the file is not a zip archive,
    /// or when `ppt/presentation.xml` is missing or malformed.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }
}

impl<R: Read + Seek> PptxContainer<R> {
    /// Initializes a container from any seekable reader holding a pptx package.
    pub fn from_reader(reader: R) -> Result<Self> {
        let mut archive = ZipArchive::new(reader)?;
        let slide_paths = resolve_slide_paths(&mut archive)?;
        let slide_count = slide_paths.len() as u32;

        debug!("found {} slides in package", slide_count);

        Ok(Self { archive, slide_paths, slide_count })
    }

    /// Loads the core properties (title, author, timestamps) of the package.
    ///
    /// The part is located through the package relationships, falling back to
    /// `docProps/core.xml`. A package without core properties, or with an unreadable
    /// core properties part, yields empty metadata.
    pub fn core_properties(&mut self) -> Result<CoreProperties> {
        let core_path = self
            .read_file_from_archive(PACKAGE_RELS_PATH)
            .ok()
            .and_then(|data| parse_rels(&data).ok())
            .and_then(|rels| {
                rels.into_iter()
                    .find(|rel| rel.rel_type == CORE_PROPERTIES_REL_TYPE)
                    .map(|rel| resolve_target("", &rel.target))
            })
            .unwrap_or_else(|| DEFAULT_CORE_PROPERTIES_PATH.to_string());

        let data = match self.read_file_from_archive(&core_path) {
            Ok(data) => data,
            Err(Error::MissingPart(_)) => {
                debug!("no core properties part at {}", core_path);
                return Ok(CoreProperties::default());
            }
            Err(e) => return Err(e),
        };

        match parse_core_properties(&data) {
            Ok(properties) => Ok(properties),
            Err(e) => {
                warn!("ignoring unreadable core properties part {}: {}", core_path, e);
                Ok(CoreProperties::default())
            }
        }
    }

    /// Parses every slide in presentation order.
    pub fn parse_all(&mut self) -> Result<Vec<Slide>> {
        let slide_paths = self.slide_paths.clone();
        let mut slides = Vec::with_capacity(slide_paths.len());

        for path in &slide_paths {
            slides.push(self.load_slide(path)?);
        }

        Ok(slides)
    }

    /// Loads metadata and all slides into a [`Presentation`].
    pub fn load_presentation(&mut self) -> Result<Presentation> {
        let properties = self.core_properties()?;
        let slides = self.parse_all()?;
        Ok(Presentation::new(properties, slides))
    }

    pub fn iter_slides(&mut self) -> SlideIterator<'_, R> {
        SlideIterator::new(self)
    }

    /// Loads and parses a slide by its part name, e.g. `ppt/slides/slide1.xml`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingPart`] if the part is not in the archive, or a parse
    /// error if its XML is malformed.
    pub fn load_slide(&mut self, slide_path: &str) -> Result<Slide> {
        let slide_data = self.read_file_from_archive(slide_path)?;
        debug!("parsing {} ({} bytes)", slide_path, slide_data.len());
        Slide::parse(&slide_data, slide_path.to_string())
    }

    /// Reads a file from the PPTX archive by its internal path.
    pub fn read_file_from_archive(&mut self, path: &str) -> Result<Vec<u8>> {
        read_part(&mut self.archive, path)
    }
}

fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, path: &str) -> Result<Vec<u8>> {
    let mut file = match archive.by_name(path) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => return Err(Error::MissingPart(path.to_string())),
        Err(e) => return Err(e.into()),
    };
    let mut content = Vec::new();
    file.read_to_end(&mut content)?;
    Ok(content)
}

/// Determines the slide part names in presentation order.
///
/// The order comes from the slide id list in `ppt/presentation.xml`, resolved through
/// `ppt/_rels/presentation.xml.rels`; a listed id without a slide relationship is an
/// error. Only when the presentation has no slide id list at all is every
/// `ppt/slides/slideN.xml` part used, sorted by `N`.
fn resolve_slide_paths<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<Vec<String>> {
    let presentation_xml = read_part(archive, PRESENTATION_PATH)?;
    let Some(slide_ids) = parse_slide_id_list(&presentation_xml)? else {
        let mut slide_paths: Vec<String> = archive
            .file_names()
            .filter(|name| name.starts_with("ppt/slides/slide") && name.ends_with(".xml"))
            .map(str::to_string)
            .collect();
        slide_paths.sort_by_key(|name| (Slide::extract_slide_number(name), name.clone()));

        debug!("no slide id list, using {} slide parts by name", slide_paths.len());
        return Ok(slide_paths);
    };

    let targets: HashMap<String, String> = match read_part(archive, PRESENTATION_RELS_PATH) {
        Ok(data) => parse_rels(&data)?
            .into_iter()
            .filter(|rel| rel.rel_type == SLIDE_REL_TYPE)
            .map(|rel| (rel.id, resolve_target("ppt", &rel.target)))
            .collect(),
        Err(Error::MissingPart(_)) => HashMap::new(),
        Err(e) => return Err(e),
    };

    slide_ids
        .iter()
        .map(|id| {
            targets.get(id).cloned().ok_or_else(|| {
                Error::MissingPart(format!("{} relationship {}", PRESENTATION_RELS_PATH, id))
            })
        })
        .collect()
}

/// An iterator for streaming slides from a PPTX file.
///
/// This iterator allows processing slides one by one, which is more
/// memory-efficient than loading all slides at once. It iterates through
/// all slides in the presentation in order.
pub struct SlideIterator<'a, R: Read + Seek> {
    container: &'a mut PptxContainer<R>,
    current_paths: Vec<String>,
    current_index: usize,
}

impl<'a, R: Read + Seek> SlideIterator<'a, R> {
    fn new(container: &'a mut PptxContainer<R>) -> Self {
        let current_paths = container.slide_paths.clone();
        Self {
            container,
            current_paths,
            current_index: 0,
        }
    }
}

impl<R: Read + Seek> Iterator for SlideIterator<'_, R> {
    type Item = Result<Slide>;

    fn next(&mut self) -> Option<Self::Item> {
        let slide_path = self.current_paths.get(self.current_index)?;
        self.current_index += 1;
        Some(self.container.load_slide(slide_path))
    }
}
