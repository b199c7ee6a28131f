use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use anyhow::Context;

use crate::foundation::error::{FigError, FigResult};

/// Family looked up first when no font file is given.
pub const DEFAULT_FONT_FAMILY: &str = "Times New Roman";

/// Where a text label gets its font from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FontSource {
    /// System default: [`DEFAULT_FONT_FAMILY`], then any serif face, then any face at all.
    #[default]
    Default,
    /// A TrueType/OpenType file on disk.
    Path(PathBuf),
}

impl From<Option<PathBuf>> for FontSource {
    fn from(p: Option<PathBuf>) -> Self {
        match p {
            Some(p) => Self::Path(p),
            None => Self::Default,
        }
    }
}

/// Raw font bytes plus the face index inside them.
#[derive(Clone)]
pub struct LoadedFont {
    /// Font file contents.
    pub bytes: Arc<Vec<u8>>,
    /// Face index within a collection; 0 for single-face files.
    pub index: u32,
}

impl std::fmt::Debug for LoadedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedFont")
            .field("bytes_len", &self.bytes.len())
            .field("index", &self.index)
            .finish()
    }
}

/// Resolve and load a font.
///
/// Missing files are [`FigError::ResourceNotFound`]; files that do not parse as a font
/// are [`FigError::Decode`].
pub fn load_font(source: &FontSource) -> FigResult<LoadedFont> {
    match source {
        FontSource::Path(p) => load_font_file(p),
        FontSource::Default => default_font(),
    }
}

fn load_font_file(path: &Path) -> FigResult<LoadedFont> {
    if !path.is_file() {
        return Err(FigError::resource_not_found(format!(
            "font '{}' does not exist",
            path.display()
        )));
    }
    let bytes =
        std::fs::read(path).with_context(|| format!("read font bytes '{}'", path.display()))?;

    let mut db = usvg::fontdb::Database::new();
    db.load_font_data(bytes.clone());
    if db.faces().next().is_none() {
        return Err(FigError::decode(format!(
            "'{}' contains no usable font faces",
            path.display()
        )));
    }

    Ok(LoadedFont {
        bytes: Arc::new(bytes),
        index: 0,
    })
}

fn default_font() -> FigResult<LoadedFont> {
    static DEFAULT: OnceLock<Result<LoadedFont, String>> = OnceLock::new();
    DEFAULT
        .get_or_init(query_system_default)
        .clone()
        .map_err(FigError::resource_not_found)
}

fn query_system_default() -> Result<LoadedFont, String> {
    use usvg::fontdb::{Family, Query, Stretch, Style, Weight};

    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();

    let families = [Family::Name(DEFAULT_FONT_FAMILY), Family::Serif];
    let query = Query {
        families: &families,
        weight: Weight::NORMAL,
        stretch: Stretch::Normal,
        style: Style::Normal,
    };
    let id = db
        .query(&query)
        .or_else(|| db.faces().next().map(|f| f.id))
        .ok_or_else(|| "no system fonts available for the default font".to_owned())?;

    let font = db
        .with_face_data(id, |data, index| LoadedFont {
            bytes: Arc::new(data.to_vec()),
            index,
        })
        .ok_or_else(|| "default font face data is unavailable".to_owned())?;
    tracing::debug!(
        bytes = font.bytes.len(),
        index = font.index,
        "resolved default font"
    );
    Ok(font)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

/// Stateful helper for building Parley text layouts from raw font bytes.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Construct a new layout engine with fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Shape and lay out a single unwrapped line of text.
    pub fn layout_line(
        &mut self,
        text: &str,
        font: &LoadedFont,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> FigResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(FigError::validation("font size must be finite and > 0"));
        }

        let families = self.font_ctx.collection.register_fonts(
            parley::fontique::Blob::from(font.bytes.as_ref().clone()),
            None,
        );
        // Shape with the same face that gets drawn; collections hold several.
        let (family_id, face) = families
            .iter()
            .find_map(|(id, faces)| {
                faces
                    .iter()
                    .find(|info| info.index() == font.index)
                    .map(|info| (*id, info.clone()))
            })
            .ok_or_else(|| {
                FigError::decode(format!("font data has no face with index {}", font.index))
            })?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| FigError::decode("registered font family has no name"))?
            .to_string();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontWeight(face.weight()));
        builder.push_default(parley::style::StyleProperty::FontStyle(face.style()));
        builder.push_default(parley::style::StyleProperty::FontWidth(face.width()));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

/// Width and height of a laid-out text block in pixels.
///
/// Width is the widest line advance; height sums ascent, descent and leading per line.
/// This is the layout box, which is larger than the inked glyphs.
pub fn measure_layout(layout: &parley::Layout<TextBrushRgba8>) -> (f32, f32) {
    let mut w = 0.0f32;
    let mut h = 0.0f32;
    for line in layout.lines() {
        let m = line.metrics();
        w = w.max(m.advance);
        h += m.ascent + m.descent + m.leading;
    }
    (w, h)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/font.rs"]
mod tests;
