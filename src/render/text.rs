//! Terminal rendering of a [`QrCode`], two characters per module

use crate::models::QrCode;

/// Light modules around the symbol
const QUIET_ZONE: usize = 4;

/// Dark modules as `##`, light as two spaces, with a four-module quiet zone
pub fn to_text(code: &QrCode) -> String {
    let size = code.size();
    let span = size + 2 * QUIET_ZONE;
    let mut out = String::with_capacity(span * (span * 2 + 1));
    for y in 0..span {
        for x in 0..span {
            let dark = x >= QUIET_ZONE
                && y >= QUIET_ZONE
                && code.is_dark(x - QUIET_ZONE, y - QUIET_ZONE);
            out.push_str(if dark { "##" } else { "  " });
        }
        out.push('\n');
    }
    out
}
