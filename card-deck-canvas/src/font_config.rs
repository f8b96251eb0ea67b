//! Font fallback chains and their resolution against a font database.

use cosmic_text::Weight;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

/// Bold sans face compiled into the crate so that there is always a fallback.
const BUILT_IN_BOLD: &[u8] = include_bytes!("../fonts/dejavu-sans/DejaVuSans-Bold.ttf");

/// Family name of [`BUILT_IN_BOLD`].
pub const BUILT_IN_FAMILY: &str = "DejaVu Sans";

/// Glyph class of a piece of text, which selects the primary typeface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontClass {
    /// Digits and plain words.
    Text,
    /// Pictographic symbols and emoji.
    Symbol,
}

/// One step of a font fallback chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontCandidate {
    /// A font file, looked up by name in each search directory in order.
    File(String),
    /// A family already present in the font database.
    Family { name: String, weight: Weight },
}

impl FontCandidate {
    pub fn file(name: impl Into<String>) -> Self {
        FontCandidate::File(name.into())
    }

    pub fn family(name: impl Into<String>) -> Self {
        FontCandidate::Family {
            name: name.into(),
            weight: Weight::NORMAL,
        }
    }

    pub fn bold_family(name: impl Into<String>) -> Self {
        FontCandidate::Family {
            name: name.into(),
            weight: Weight::BOLD,
        }
    }
}

/// Font configuration for card text.
///
/// Each [`FontClass`] has a primary chain; when every candidate in it fails,
/// the shared fallback chain is tried, and when that fails too the generic
/// sans-serif face of the database is used.
#[derive(Clone, Debug)]
pub struct FontConfig {
    /// Candidates for [`FontClass::Text`], in priority order.
    pub text: Vec<FontCandidate>,
    /// Candidates for [`FontClass::Symbol`], in priority order.
    pub symbol: Vec<FontCandidate>,
    /// Candidates tried after the class chain, in priority order.
    pub fallback: Vec<FontCandidate>,
    /// Directories searched for [`FontCandidate::File`] names, in order.
    pub search_dirs: Vec<PathBuf>,
    /// Whether to load system fonts (default: true).
    pub load_system_fonts: bool,
    /// Custom font data to register before resolution.
    pub custom_fonts: Vec<Arc<Vec<u8>>>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            text: vec![
                FontCandidate::file("ArialBold.ttf"),
                FontCandidate::bold_family("Arial"),
                FontCandidate::bold_family("Liberation Sans"),
                FontCandidate::bold_family("DejaVu Sans"),
            ],
            symbol: vec![
                FontCandidate::file("seguiemj.ttf"),
                FontCandidate::family("Segoe UI Emoji"),
                FontCandidate::family("Noto Emoji"),
                FontCandidate::family("Symbola"),
                // Bitmap-only faces yield no outlines; keep them last
                FontCandidate::family("Noto Color Emoji"),
                FontCandidate::family("Apple Color Emoji"),
            ],
            fallback: vec![
                FontCandidate::file("arial.ttf"),
                FontCandidate::family("Arial"),
                FontCandidate::family("Helvetica"),
                FontCandidate::family("Liberation Sans"),
                FontCandidate::family("DejaVu Sans"),
            ],
            search_dirs: default_search_dirs(),
            load_system_fonts: true,
            custom_fonts: Vec::new(),
        }
    }
}

/// Working directory first, then well-known system font directories.
fn default_search_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![PathBuf::from(".")];
    if cfg!(target_os = "windows") {
        dirs.push(PathBuf::from(r"C:\Windows\Fonts"));
    } else if cfg!(target_os = "macos") {
        dirs.push(PathBuf::from("/Library/Fonts"));
        dirs.push(PathBuf::from("/System/Library/Fonts"));
    } else {
        dirs.push(PathBuf::from("/usr/share/fonts/truetype/msttcorefonts"));
        dirs.push(PathBuf::from("/usr/share/fonts/TTF"));
    }
    dirs
}

impl FontConfig {
    /// Resolve both font classes against a freshly built database.
    ///
    /// This performs the filesystem work (system font scan, file candidates)
    /// once; the result is reused for every card.
    pub fn resolve(&self) -> ResolvedFonts {
        ResolvedFonts::new(self)
    }

    fn chain(&self, class: FontClass) -> impl Iterator<Item = &FontCandidate> {
        let primary = match class {
            FontClass::Text => &self.text,
            FontClass::Symbol => &self.symbol,
        };
        primary.iter().chain(self.fallback.iter())
    }
}

/// Where a resolved font came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontOrigin {
    /// Loaded from this file.
    File(PathBuf),
    /// Found in the database by family name.
    Family,
    /// Nothing in the chain matched; the face compiled into the crate is used.
    BuiltIn,
}

/// A usable font handle: a family present in the database plus weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFont {
    pub family: String,
    pub weight: Weight,
    pub origin: FontOrigin,
}

impl ResolvedFont {
    fn built_in() -> Self {
        Self {
            family: BUILT_IN_FAMILY.to_string(),
            weight: Weight::BOLD,
            origin: FontOrigin::BuiltIn,
        }
    }
}

/// A [`FontConfig`] resolved into a font database and one font per class.
#[derive(Clone)]
pub struct ResolvedFonts {
    pub(crate) fontdb: fontdb::Database,
    text: ResolvedFont,
    symbol: ResolvedFont,
}

impl ResolvedFonts {
    pub fn new(config: &FontConfig) -> Self {
        let mut db = fontdb::Database::new();
        if config.load_system_fonts {
            db.load_system_fonts();
        }
        for data in &config.custom_fonts {
            db.load_font_data(Vec::from(data.as_slice()));
        }
        db.load_font_data(Vec::from(BUILT_IN_BOLD));
        apply_generic_sans_serif(&mut db, &config.fallback);

        let text = resolve_chain(&mut db, config, FontClass::Text);
        let symbol = resolve_chain(&mut db, config, FontClass::Symbol);
        log::info!("Text font: {:?}; symbol font: {:?}", text, symbol);

        Self {
            fontdb: db,
            text,
            symbol,
        }
    }

    pub fn font(&self, class: FontClass) -> &ResolvedFont {
        match class {
            FontClass::Text => &self.text,
            FontClass::Symbol => &self.symbol,
        }
    }

    /// Number of faces in the underlying database.
    pub fn face_count(&self) -> usize {
        self.fontdb.len()
    }
}

/// Try each candidate of the class chain in order; the first success wins.
fn resolve_chain(db: &mut fontdb::Database, config: &FontConfig, class: FontClass) -> ResolvedFont {
    config
        .chain(class)
        .find_map(|candidate| {
            let resolved = try_candidate(db, config, candidate);
            if resolved.is_none() {
                log::debug!("Font candidate {:?} unavailable for {:?}", candidate, class);
            }
            resolved
        })
        .unwrap_or_else(ResolvedFont::built_in)
}

fn try_candidate(
    db: &mut fontdb::Database,
    config: &FontConfig,
    candidate: &FontCandidate,
) -> Option<ResolvedFont> {
    match candidate {
        FontCandidate::File(name) => config.search_dirs.iter().find_map(|dir| {
            let path = dir.join(name);
            let data = std::fs::read(&path).ok()?;
            let ids = db.load_font_source(fontdb::Source::Binary(Arc::new(data)));
            let face = ids.iter().find_map(|id| db.face(*id))?;
            let family = face.families.first()?.0.clone();
            Some(ResolvedFont {
                family,
                weight: face.weight,
                origin: FontOrigin::File(path),
            })
        }),
        FontCandidate::Family { name, weight } => db
            .faces()
            .any(|face| face.families.iter().any(|(fam, _)| fam == name))
            .then(|| ResolvedFont {
                family: name.clone(),
                weight: *weight,
                origin: FontOrigin::Family,
            }),
    }
}

/// Point the generic sans-serif family at the first available fallback family,
/// or at the built-in face when none is installed.
fn apply_generic_sans_serif(db: &mut fontdb::Database, fallback: &[FontCandidate]) {
    let available: HashSet<String> = db
        .faces()
        .flat_map(|face| {
            face.families
                .iter()
                .map(|(fam, _lang)| fam.clone())
                .collect::<Vec<_>>()
        })
        .collect();

    let family = fallback
        .iter()
        .find_map(|candidate| match candidate {
            FontCandidate::Family { name, .. } if available.contains(name) => Some(name.as_str()),
            _ => None,
        })
        .unwrap_or(BUILT_IN_FAMILY);
    db.set_sans_serif_family(family);
}
