use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;

use crate::canvas::Canvas;
use crate::component::SharedComponent;
use crate::component::image_box::{ImageBox, ImageBoxConfig};
use crate::component::text_label::{TextLabel, TextLabelConfig};
use crate::foundation::core::Rgba8;
use crate::foundation::error::{FigError, FigResult};

/// A component definition inside a figure file.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentSpec {
    /// An [`ImageBox`].
    Image(ImageBoxConfig),
    /// A [`TextLabel`].
    Text(TextLabelConfig),
}

/// One placement inside a figure file.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlacementSpec {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Name of an entry in [`FigureSpec::components`].
    pub component: String,
    /// Counter-clockwise rotation in degrees.
    #[serde(default)]
    pub rotation: f64,
}

/// Serializable description of a whole canvas.
///
/// ```json
/// {
///   "background": "#ffffff",
///   "components": {
///     "sample": { "image": { "width": 128, "height": 128, "image": "a.png" } },
///     "title": { "text": { "width": 128, "height": 32, "text": "DDPM" } }
///   },
///   "placements": [
///     { "x": 0, "y": 0, "component": "sample" },
///     { "x": 0, "y": 129, "component": "title" }
///   ]
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FigureSpec {
    /// Canvas background.
    #[serde(default)]
    pub background: Rgba8,
    /// Named components; each is built once and may be placed many times.
    #[serde(default)]
    pub components: BTreeMap<String, ComponentSpec>,
    /// Placements in paint order.
    #[serde(default)]
    pub placements: Vec<PlacementSpec>,
}

impl FigureSpec {
    /// Parse a figure from JSON text.
    pub fn from_json_str(s: &str) -> FigResult<Self> {
        serde_json::from_str(s).map_err(|e| FigError::serde(format!("figure json: {e}")))
    }

    /// Read and parse a figure file.
    pub fn from_path(path: &Path) -> FigResult<Self> {
        if !path.is_file() {
            return Err(FigError::resource_not_found(format!(
                "figure '{}' does not exist",
                path.display()
            )));
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read figure '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Serialize back to pretty JSON.
    pub fn to_json_string(&self) -> FigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| FigError::serde(e.to_string()))
    }

    /// Build every component and place them on a new canvas.
    ///
    /// Relative image and font paths resolve against `base_dir`.
    pub fn build(&self, base_dir: &Path) -> FigResult<Canvas> {
        let mut built = BTreeMap::<&str, SharedComponent>::new();
        for (name, spec) in &self.components {
            let component: SharedComponent = match spec {
                ComponentSpec::Image(cfg) => {
                    let mut cfg = cfg.clone();
                    cfg.image = cfg.image.map(|p| resolve(base_dir, p));
                    Arc::new(ImageBox::new(cfg)?)
                }
                ComponentSpec::Text(cfg) => {
                    let mut cfg = cfg.clone();
                    cfg.font = cfg.font.map(|p| resolve(base_dir, p));
                    Arc::new(TextLabel::new(cfg)?)
                }
            };
            built.insert(name.as_str(), component);
        }

        let mut canvas = Canvas::new().with_background(self.background);
        for p in &self.placements {
            let component = built.get(p.component.as_str()).ok_or_else(|| {
                FigError::configuration(format!(
                    "placement references unknown component \"{}\"",
                    p.component
                ))
            })?;
            canvas.add_component(p.x, p.y, Arc::clone(component), p.rotation)?;
        }
        Ok(canvas)
    }
}

fn resolve(base_dir: &Path, p: PathBuf) -> PathBuf {
    if p.is_absolute() {
        p
    } else {
        base_dir.join(p)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/figure.rs"]
mod tests;
