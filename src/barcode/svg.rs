//! Vector serialization of Code 128B symbols

use serde::Deserialize;
use simple_xml_builder::XMLElement;

use crate::barcode::code128::encode_pattern;
use crate::error::BarcodeError;

/// Options for [`crate::barcode_svg`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BarcodeOptions {
    /// Document height, caption included
    pub height: u32,
    /// Draw the value as a caption under the bars
    pub include_text: bool,
    /// Blank margin left and right of the bars
    pub quiet_zone: u32,
    /// Height taken from the bars for the caption
    pub text_offset: u32,
    /// Caption font size
    pub font_size: u32,
    /// Width of one module
    pub bar_width: u32,
    /// Caption font family
    pub font_family: String,
    /// Bar and caption fill
    pub color: String,
}

impl Default for BarcodeOptions {
    fn default() -> Self {
        Self {
            height: 40,
            include_text: false,
            quiet_zone: 10,
            text_offset: 25,
            font_size: 11,
            bar_width: 1,
            font_family: "monospace".to_string(),
            color: "#000000".to_string(),
        }
    }
}

/// Build the `<svg>` element for `value`: one `<rect>` per bar module and an
/// optional centred caption
pub fn barcode_svg_element(
    value: &str,
    options: &BarcodeOptions,
) -> Result<XMLElement, BarcodeError> {
    let bits = encode_pattern(value)?;
    let bar_width = options.bar_width as usize;
    let quiet_zone = options.quiet_zone as usize;
    let total_width = bits.len() * bar_width + 2 * quiet_zone;
    let bar_height = if options.include_text {
        options.height.saturating_sub(options.text_offset)
    } else {
        options.height
    };

    let mut root = XMLElement::new("svg");
    root.add_attribute("xmlns", "http://www.w3.org/2000/svg");
    root.add_attribute("width", &total_width.to_string());
    root.add_attribute("height", &options.height.to_string());
    root.add_attribute("viewBox", &format!("0 0 {} {}", total_width, options.height));

    let bar_width_str = bar_width.to_string();
    let bar_height_str = bar_height.to_string();
    for (i, _) in bits.char_indices().filter(|&(_, c)| c == '1') {
        let mut rect = XMLElement::new("rect");
        rect.add_attribute("x", &(quiet_zone + i * bar_width).to_string());
        rect.add_attribute("y", "0");
        rect.add_attribute("width", &bar_width_str);
        rect.add_attribute("height", &bar_height_str);
        rect.add_attribute("fill", &options.color);
        root.add_child(rect);
    }

    if options.include_text {
        let text_y = f64::from(options.height) - f64::from(options.text_offset) / 4.0;
        let mut text = XMLElement::new("text");
        text.add_attribute("x", &(total_width as f64 / 2.0).to_string());
        text.add_attribute("y", &text_y.to_string());
        text.add_attribute("text-anchor", "middle");
        text.add_attribute("dominant-baseline", "middle");
        text.add_attribute("font-family", &options.font_family);
        text.add_attribute("font-size", &options.font_size.to_string());
        text.add_attribute("fill", &options.color);
        text.add_text(value);
        root.add_child(text);
    }

    Ok(root)
}
