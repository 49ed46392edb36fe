//! Vector serialization of a finished [`QrCode`]

use std::fmt::Write;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use simple_xml_builder::XMLElement;

use crate::models::{ECLevel, MaskSelection, QrCode};
use crate::render::color::Palette;

const DEFAULT_DIMENSION: u64 = 160;

/// How dark modules are turned into path commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "bool")]
pub enum PathRendering {
    /// Horizontal runs of dark modules merged into one rectangle
    #[default]
    Compact,
    /// One unit square per dark module
    Verbose,
}

impl From<bool> for PathRendering {
    /// `true` selects verbose output, matching the `vrb` flag
    fn from(verbose: bool) -> Self {
        if verbose {
            PathRendering::Verbose
        } else {
            PathRendering::Compact
        }
    }
}

/// Options for [`crate::qr_svg`].
///
/// Deserializes from camelCase JSON; the short keys `ecl`, `ecb`, `mtx`, `dim`,
/// `pad`, `pal` and `vrb` are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QrOptions {
    /// Requested level; `"auto"` and unrecognised values fall back to M
    #[serde(
        alias = "ecl",
        alias = "errorCorrectionLevel",
        deserialize_with = "level_or_default"
    )]
    pub error_correction: ECLevel,
    /// Raise the EC level while the chosen version still fits
    #[serde(alias = "ecb", alias = "boostEcc", deserialize_with = "flag")]
    pub boost_error_correction: bool,
    /// `-1` (auto) or `0..=7` in JSON
    #[serde(alias = "mtx")]
    pub mask: MaskSelection,
    /// Rendered side length before padding; the sign is ignored and 0 means the default
    #[serde(alias = "dim")]
    pub dimension: i64,
    /// Margin on every side; the sign is ignored
    #[serde(alias = "pad")]
    pub padding: i64,
    /// Foreground then optional background, `#rgb` / `#rrggbb`
    #[serde(alias = "pal")]
    pub palette: Vec<String>,
    /// Compact runs or one square per module
    #[serde(alias = "vrb", alias = "verbose")]
    pub rendering: PathRendering,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            error_correction: ECLevel::M,
            boost_error_correction: true,
            mask: MaskSelection::Auto,
            dimension: DEFAULT_DIMENSION as i64,
            padding: 0,
            palette: Vec::new(),
            rendering: PathRendering::Compact,
        }
    }
}

impl QrOptions {
    /// Side length of the drawn symbol
    pub fn dimension(&self) -> u64 {
        match self.dimension.unsigned_abs() {
            0 => DEFAULT_DIMENSION,
            dim => dim,
        }
    }

    /// Margin on every side of the symbol
    pub fn padding(&self) -> u64 {
        self.padding.unsigned_abs()
    }

    /// Width and height of the whole document, `dimension + 2 * padding`,
    /// saturating at `u64::MAX`
    pub fn total_size(&self) -> u64 {
        self.padding()
            .saturating_mul(2)
            .saturating_add(self.dimension())
    }
}

/// Accept `true`/`false` as well as the numeric `0`/`1` used by older payloads
fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Number(i64),
    }
    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => value,
        Flag::Number(value) => value != 0,
    })
}

/// Any level letter, case-insensitive; everything else, `"auto"` included, is M
fn level_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ECLevel, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Level {
        Text(String),
        Other(IgnoredAny),
    }
    Ok(match Level::deserialize(deserializer)? {
        Level::Text(text) => text.parse().unwrap_or(ECLevel::M),
        Level::Other(_) => ECLevel::M,
    })
}

/// Build the `<svg>` element for a symbol
pub fn qr_svg_element(code: &QrCode, options: &QrOptions) -> XMLElement {
    let palette = Palette::from_entries(&options.palette);
    let total = options.total_size().to_string();
    let padding = options.padding();
    let scale = options.dimension() as f64 / code.size() as f64;

    let mut root = XMLElement::new("svg");
    root.add_attribute("xmlns", "http://www.w3.org/2000/svg");
    root.add_attribute("version", "1.1");
    root.add_attribute("viewBox", &format!("0 0 {total} {total}"));
    root.add_attribute("width", &total);
    root.add_attribute("height", &total);
    root.add_attribute("fill", &palette.foreground);
    root.add_attribute("shape-rendering", "crispEdges");

    if let Some(background) = &palette.background {
        let mut rect = XMLElement::new("rect");
        rect.add_attribute("x", "0");
        rect.add_attribute("y", "0");
        rect.add_attribute("width", &total);
        rect.add_attribute("height", &total);
        rect.add_attribute("fill", background);
        root.add_child(rect);
    }

    let mut path = XMLElement::new("path");
    path.add_attribute(
        "transform",
        &format!("matrix({scale},0,0,{scale},{padding},{padding})"),
    );
    path.add_attribute("d", &path_data(code, options.rendering));
    root.add_child(path);

    root
}

/// Path commands in module units, rows emitted bottom to top
pub fn path_data(code: &QrCode, rendering: PathRendering) -> String {
    let size = code.size();
    let mut d = String::new();
    for y in (0..size).rev() {
        let mut x = 0;
        while x < size {
            if !code.is_dark(x, y) {
                x += 1;
                continue;
            }
            match rendering {
                PathRendering::Verbose => {
                    let _ = write!(d, "M{x},{y}h1v1h-1z");
                    x += 1;
                }
                PathRendering::Compact => {
                    let start = x;
                    while x < size && code.is_dark(x, y) {
                        x += 1;
                    }
                    let run = x - start;
                    let _ = write!(d, "M{start},{y}h{run}v1h-{run}z");
                }
            }
        }
    }
    d
}
