use std::path::PathBuf;
use std::str::FromStr;

use image::RgbaImage;

use crate::assets::font::{
    FontSource, LoadedFont, TextBrushRgba8, TextLayoutEngine, load_font, measure_layout,
};
use crate::component::Component;
use crate::foundation::core::{Margin, Rgba8, Size};
use crate::foundation::error::{FigError, FigResult};

/// Horizontal placement of text inside its label; vertical placement is always centered.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum TextAlign {
    /// Flush left.
    Left,
    /// Centered.
    #[default]
    Center,
    /// Flush right.
    Right,
}

impl TextAlign {
    /// Lowercase name as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }

    /// Top-left draw origin for a `text_w` x `text_h` block inside `container`.
    ///
    /// Halving floors toward negative infinity, so text wider than its label overhangs
    /// evenly on both sides.
    pub fn origin(self, container: Size, text_w: i64, text_h: i64) -> (i64, i64) {
        let w = i64::from(container.width);
        let h = i64::from(container.height);
        let y = (h - text_h).div_euclid(2);
        let x = match self {
            Self::Left => 0,
            Self::Center => (w - text_w).div_euclid(2),
            Self::Right => w - text_w,
        };
        (x, y)
    }
}

impl FromStr for TextAlign {
    type Err = FigError;

    fn from_str(s: &str) -> FigResult<Self> {
        match s {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            other => Err(FigError::invalid_alignment(format!(
                "unknown alignment \"{other}\" (expected left, center or right)"
            ))),
        }
    }
}

impl TryFrom<String> for TextAlign {
    type Error = FigError;

    fn try_from(s: String) -> FigResult<Self> {
        s.parse()
    }
}

impl From<TextAlign> for String {
    fn from(a: TextAlign) -> Self {
        a.as_str().to_owned()
    }
}

impl std::fmt::Display for TextAlign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_side() -> u32 {
    16
}

fn default_font_size() -> f32 {
    24.0
}

/// Construction parameters for a [`TextLabel`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextLabelConfig {
    /// Label width in pixels.
    #[serde(default = "default_side")]
    pub width: u32,
    /// Label height in pixels.
    #[serde(default = "default_side")]
    pub height: u32,
    /// Outer spacing `[up, down, left, right]`.
    #[serde(default)]
    pub margin: Margin,
    /// The string to draw.
    #[serde(default)]
    pub text: String,
    /// Font file; the system default font when absent.
    #[serde(default)]
    pub font: Option<PathBuf>,
    /// Font size in pixels.
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    /// Horizontal alignment.
    #[serde(default)]
    pub text_align: TextAlign,
    /// Fill behind the text.
    #[serde(default)]
    pub background: Rgba8,
}

impl Default for TextLabelConfig {
    fn default() -> Self {
        Self {
            width: default_side(),
            height: default_side(),
            margin: Margin::default(),
            text: String::new(),
            font: None,
            font_size: default_font_size(),
            text_align: TextAlign::default(),
            background: Rgba8::WHITE,
        }
    }
}

const TEXT_BRUSH: TextBrushRgba8 = TextBrushRgba8 {
    r: 0,
    g: 0,
    b: 0,
    a: 255,
};

/// A component that draws one line of black text on a solid background.
#[derive(Clone, Debug)]
pub struct TextLabel {
    size: Size,
    margin: Margin,
    text: String,
    font: LoadedFont,
    font_size: f32,
    align: TextAlign,
    background: Rgba8,
}

impl TextLabel {
    /// Validate `config` and load its font.
    pub fn new(config: TextLabelConfig) -> FigResult<Self> {
        let size = Size::non_empty(config.width, config.height)?;
        if !config.font_size.is_finite() || config.font_size <= 0.0 {
            return Err(FigError::validation(format!(
                "font size must be finite and > 0 (got {})",
                config.font_size
            )));
        }
        let font = load_font(&FontSource::from(config.font))?;
        Ok(Self {
            size,
            margin: config.margin,
            text: config.text,
            font,
            font_size: config.font_size,
            align: config.text_align,
            background: config.background,
        })
    }

    /// The label text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Configured alignment.
    pub fn align(&self) -> TextAlign {
        self.align
    }
}

impl Component for TextLabel {
    fn size(&self) -> Size {
        self.size
    }

    fn margin(&self) -> Margin {
        self.margin
    }

    #[tracing::instrument(skip(self), fields(text = %self.text, align = %self.align))]
    fn render(&self) -> FigResult<RgbaImage> {
        let mut engine = TextLayoutEngine::new();
        let layout = engine.layout_line(&self.text, &self.font, self.font_size, TEXT_BRUSH)?;
        let font_data = font_data(&self.font);

        let Some(ink) = measure_ink(&layout, &font_data)? else {
            return Ok(RgbaImage::from_pixel(
                self.size.width,
                self.size.height,
                self.background.to_pixel(),
            ));
        };
        let (x, y) = self.align.origin(self.size, ink.width(), ink.height());
        tracing::debug!(?ink, x, y, "aligned text ink");

        let w = to_u16(i64::from(self.size.width), "text label width")?;
        let h = to_u16(i64::from(self.size.height), "text label height")?;
        let mut data = draw_layout(
            &layout,
            &font_data,
            (w, h),
            (x - ink.left, y - ink.top),
            Some(self.background),
        );
        unpremultiply_rgba8_in_place(&mut data);
        RgbaImage::from_raw(self.size.width, self.size.height, data)
            .ok_or_else(|| FigError::validation("text buffer length does not match label size"))
    }
}

/// Inclusive pixel bounds of drawn glyphs, relative to the layout origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct InkBounds {
    left: i64,
    top: i64,
    right: i64,
    bottom: i64,
}

impl InkBounds {
    fn width(&self) -> i64 {
        self.right - self.left + 1
    }

    fn height(&self) -> i64 {
        self.bottom - self.top + 1
    }
}

fn font_data(font: &LoadedFont) -> vello_cpu::peniko::FontData {
    vello_cpu::peniko::FontData::new(
        vello_cpu::peniko::Blob::from(font.bytes.as_ref().clone()),
        font.index,
    )
}

fn to_u16(v: i64, what: &str) -> FigResult<u16> {
    u16::try_from(v).map_err(|_| FigError::validation(format!("{what} {v} exceeds u16")))
}

/// Rasterize `layout` onto a transparent scratch pixmap and scan its coverage.
///
/// `None` when nothing is inked (empty or whitespace-only text).
fn measure_ink(
    layout: &parley::Layout<TextBrushRgba8>,
    font_data: &vello_cpu::peniko::FontData,
) -> FigResult<Option<InkBounds>> {
    let (advance, line_h) = measure_layout(layout);
    // Glyphs may overshoot the layout box by their bearings.
    let pad = line_h.ceil() as i64 + 1;
    let w = to_u16(advance.ceil() as i64 + 2 * pad, "text scratch width")?;
    let h = to_u16(line_h.ceil() as i64 + 2 * pad, "text scratch height")?;
    let data = draw_layout(layout, font_data, (w, h), (pad, pad), None);

    let stride = usize::from(w);
    let mut ink: Option<InkBounds> = None;
    for (i, px) in data.chunks_exact(4).enumerate() {
        if px[3] == 0 {
            continue;
        }
        let x = (i % stride) as i64 - pad;
        let y = (i / stride) as i64 - pad;
        ink = Some(match ink {
            None => InkBounds {
                left: x,
                top: y,
                right: x,
                bottom: y,
            },
            Some(b) => InkBounds {
                left: b.left.min(x),
                top: b.top.min(y),
                right: b.right.max(x),
                bottom: b.bottom.max(y),
            },
        });
    }
    Ok(ink)
}

/// Draw glyph runs translated by `origin`, optionally over a solid fill.
///
/// Returns premultiplied RGBA8 bytes.
fn draw_layout(
    layout: &parley::Layout<TextBrushRgba8>,
    font_data: &vello_cpu::peniko::FontData,
    (w, h): (u16, u16),
    origin: (i64, i64),
    background: Option<Rgba8>,
) -> Vec<u8> {
    let mut ctx = vello_cpu::RenderContext::new(w, h);
    if let Some(bg) = background {
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(bg.r, bg.g, bg.b, bg.a));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(w),
            f64::from(h),
        ));
    }

    ctx.set_transform(vello_cpu::kurbo::Affine::translate((
        origin.0 as f64,
        origin.1 as f64,
    )));
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let brush = run.style().brush;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                brush.r, brush.g, brush.b, brush.a,
            ));
            let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(font_data)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
    ctx.flush();

    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.render_to_pixmap(&mut pixmap);
    pixmap.data_as_u8_slice().to_vec()
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/component/text_label.rs"]
mod tests;
