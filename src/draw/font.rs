//! Font resolution and typography roles.
//!
//! Fonts are acquired from an ordered candidate list: the first candidate that
//! exists and loads wins. When every candidate fails (or the list is empty) the
//! built-in Cairo font is used instead, so resolution never fails.

use log::{debug, warn};
use pango::prelude::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Cairo's internal font family, available without any font files installed.
pub(crate) const BUILTIN_FAMILY: &str = "@cairo:";

/// Leading bytes of the font formats we accept (TrueType, OpenType CFF,
/// Apple TrueType, TrueType collection).
const FONT_SIGNATURES: [[u8; 4]; 4] = [*b"\x00\x01\x00\x00", *b"OTTO", *b"true", *b"ttcf"];

/// A font source to try, in priority order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FontCandidate {
    /// Family name as known to Pango (e.g., "DejaVu Sans")
    pub family: String,

    /// Optional font file that must exist and be a valid font for this
    /// candidate to be accepted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl FontCandidate {
    pub fn new(family: impl Into<String>, path: Option<&str>) -> Self {
        Self {
            family: family.into(),
            path: path.map(PathBuf::from),
        }
    }
}

/// Platform font candidates tried when the config does not list any.
pub fn default_candidates() -> Vec<FontCandidate> {
    vec![
        FontCandidate::new(
            "SF Pro Text",
            Some("/System/Library/Fonts/Supplemental/SF Pro Text.ttf"),
        ),
        FontCandidate::new(
            "Arial Unicode MS",
            Some("/System/Library/Fonts/Supplemental/Arial Unicode.ttf"),
        ),
        FontCandidate::new("Arial", Some("/Library/Fonts/Arial.ttf")),
        FontCandidate::new(
            "DejaVu Sans",
            Some("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
        ),
        FontCandidate::new(
            "Liberation Sans",
            Some("/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf"),
        ),
    ]
}

/// Why a single font candidate was rejected.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("font file {0} does not exist")]
    Missing(PathBuf),

    #[error("failed to read font file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} is not a TrueType/OpenType font")]
    UnsupportedFormat(PathBuf),

    #[error("font family '{0}' is not available")]
    UnknownFamily(String),
}

/// A resolved font face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontFace {
    /// A scalable system font rendered through Pango
    Family(String),
    /// Cairo's built-in font; degraded typography but always available
    Builtin,
}

/// Checks a single candidate: the file (if given) must be a readable font and
/// the family must be known to Pango.
pub fn load_candidate(candidate: &FontCandidate) -> Result<FontFace, FontError> {
    if let Some(path) = &candidate.path {
        check_font_file(path)?;
    }
    if !family_available(&candidate.family) {
        return Err(FontError::UnknownFamily(candidate.family.clone()));
    }
    Ok(FontFace::Family(candidate.family.clone()))
}

fn check_font_file(path: &Path) -> Result<(), FontError> {
    if !path.exists() {
        return Err(FontError::Missing(path.to_path_buf()));
    }
    let unreadable = |source| FontError::Unreadable {
        path: path.to_path_buf(),
        source,
    };
    let mut header = [0u8; 4];
    File::open(path)
        .and_then(|mut file| file.read_exact(&mut header))
        .map_err(unreadable)?;
    if FONT_SIGNATURES.contains(&header) {
        Ok(())
    } else {
        Err(FontError::UnsupportedFormat(path.to_path_buf()))
    }
}

fn family_available(family: &str) -> bool {
    let font_map = pangocairo::FontMap::default();
    font_map
        .list_families()
        .iter()
        .any(|f| f.name().as_str().eq_ignore_ascii_case(family))
}

/// Resolves the first loadable candidate using the system font lookup.
pub fn resolve_face(candidates: &[FontCandidate]) -> FontFace {
    resolve_face_with(candidates, load_candidate)
}

/// Resolves the first candidate accepted by `load`, falling back to
/// [`FontFace::Builtin`] when none is.
pub fn resolve_face_with<F>(candidates: &[FontCandidate], mut load: F) -> FontFace
where
    F: FnMut(&FontCandidate) -> Result<FontFace, FontError>,
{
    candidates
        .iter()
        .find_map(|candidate| match load(candidate) {
            Ok(face) => {
                debug!("Using font '{}'", candidate.family);
                Some(face)
            }
            Err(err) => {
                debug!("Skipping font candidate '{}': {}", candidate.family, err);
                None
            }
        })
        .unwrap_or_else(|| {
            warn!("No font candidate could be loaded, using the built-in font");
            FontFace::Builtin
        })
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

/// A face at a concrete pixel size and weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub face: FontFace,
    pub weight: FontWeight,
    /// Size in pixels
    pub size: f64,
}

impl Font {
    pub fn new(face: FontFace, weight: FontWeight, size: f64) -> Self {
        Self { face, weight, size }
    }

    /// Builds the Pango description for this font, or `None` for the built-in
    /// face, which Pango does not render.
    ///
    /// Family, weight and size are set field by field so that family names
    /// ending in style words ("Arial Black", "Noto Sans Light") stay intact.
    pub fn pango_description(&self) -> Option<pango::FontDescription> {
        let FontFace::Family(family) = &self.face else {
            return None;
        };
        let mut desc = pango::FontDescription::new();
        desc.set_family(family);
        desc.set_weight(match self.weight {
            FontWeight::Bold => pango::Weight::Bold,
            FontWeight::Normal => pango::Weight::Normal,
        });
        desc.set_absolute_size(self.size.round() * f64::from(pango::SCALE));
        Some(desc)
    }
}

/// Formats as a Pango description string, "Family, [Bold ]<size>px".
impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size.round() as i32;
        match &self.face {
            FontFace::Family(family) if self.weight == FontWeight::Bold => {
                write!(f, "{family}, Bold {size}px")
            }
            FontFace::Family(family) => write!(f, "{family}, {size}px"),
            FontFace::Builtin => write!(f, "built-in {size}px"),
        }
    }
}

/// Typographic role of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontRole {
    /// Diagram title
    Title,
    /// Panel and section headings
    Heading,
    #[default]
    Body,
    /// Subtitles, legends and secondary lines
    Caption,
}

/// Pixel sizes for each role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizes {
    pub title: f64,
    pub heading: f64,
    pub body: f64,
    pub caption: f64,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            title: 58.0,
            heading: 28.0,
            body: 24.0,
            caption: 20.0,
        }
    }
}

/// The fonts used for each [`FontRole`], all sharing one resolved face.
#[derive(Debug, Clone)]
pub struct Typography {
    title: Font,
    heading: Font,
    body: Font,
    caption: Font,
}

impl Typography {
    pub fn new(face: FontFace, sizes: FontSizes) -> Self {
        Self {
            title: Font::new(face.clone(), FontWeight::Bold, sizes.title),
            heading: Font::new(face.clone(), FontWeight::Bold, sizes.heading),
            body: Font::new(face.clone(), FontWeight::Normal, sizes.body),
            caption: Font::new(face, FontWeight::Normal, sizes.caption),
        }
    }

    /// Resolves `candidates` and builds the role fonts from the result.
    pub fn resolve(candidates: &[FontCandidate], sizes: FontSizes) -> Self {
        let typography = Self::new(resolve_face(candidates), sizes);
        debug!(
            "Typography: title {}, heading {}, body {}, caption {}",
            typography.title, typography.heading, typography.body, typography.caption
        );
        typography
    }

    pub fn font(&self, role: FontRole) -> &Font {
        match role {
            FontRole::Title => &self.title,
            FontRole::Heading => &self.heading,
            FontRole::Body => &self.body,
            FontRole::Caption => &self.caption,
        }
    }
}
