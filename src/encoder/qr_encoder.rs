use crate::encoder::codewords::add_ecc_and_interleave;
use crate::encoder::matrix_builder::MatrixBuilder;
use crate::encoder::planner::{assemble_data_codewords, plan};
use crate::encoder::segment::{Segment, classify};
use crate::error::QrError;
use crate::models::{ECLevel, MaskSelection, QrCode, Version};

/// QR Code encoder
///
/// ```
/// use rust_qr_svg::{ECLevel, QrEncoder};
///
/// let code = QrEncoder::new()
///     .error_correction(ECLevel::Q)
///     .encode_text("HELLO WORLD")
///     .unwrap();
/// assert_eq!(code.size(), 21);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct QrEncoder {
    ec_level: ECLevel,
    boost_ecl: bool,
    mask: MaskSelection,
    min_version: Version,
    max_version: Version,
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self {
            ec_level: ECLevel::M,
            boost_ecl: false,
            mask: MaskSelection::Auto,
            min_version: Version::MIN,
            max_version: Version::MAX,
        }
    }
}

impl QrEncoder {
    /// Encoder with level M, no boost, automatic mask, versions 1-40
    pub fn new() -> Self {
        Self::default()
    }

    /// Requested error correction level
    pub fn error_correction(mut self, ec_level: ECLevel) -> Self {
        self.ec_level = ec_level;
        self
    }

    /// Raise the EC level as far as H while the chosen version still fits
    pub fn boost_error_correction(mut self, boost: bool) -> Self {
        self.boost_ecl = boost;
        self
    }

    /// Fixed mask or automatic selection
    pub fn mask(mut self, mask: MaskSelection) -> Self {
        self.mask = mask;
        self
    }

    /// Restrict the versions the planner may pick
    pub fn version_range(mut self, min: Version, max: Version) -> Self {
        self.min_version = min;
        self.max_version = max;
        self
    }

    /// Encode text as a single numeric, alphanumeric or byte segment
    pub fn encode_text(&self, text: &str) -> Result<QrCode, QrError> {
        self.encode_segments(&classify(text))
    }

    /// Encode pre-built segments
    pub fn encode_segments(&self, segments: &[Segment]) -> Result<QrCode, QrError> {
        let planned = plan(
            segments,
            self.ec_level,
            self.boost_ecl,
            self.min_version,
            self.max_version,
        )?;
        let data = assemble_data_codewords(segments, &planned);
        let codewords = add_ecc_and_interleave(&data, planned.version, planned.ec_level);

        let mut builder = MatrixBuilder::new(planned.version);
        builder.draw_function_patterns(planned.ec_level);
        builder.place_codewords(&codewords);
        Ok(builder.finish(planned.ec_level, self.mask))
    }
}
