//! Integration tests for QR and Code 128B encoding regression testing
//!
//! These tests pin complete symbols and the parameters chosen for known
//! messages, so any change in planning, error correction, placement or mask
//! scoring shows up as a failure here.

use rust_qr_svg::{
    BarcodeError, BarcodeOptions, ECLevel, MaskPattern, MaskSelection, QrCode, QrEncoder,
    QrError, QrOptions, Version, barcode::code128, barcode_svg, qr_svg,
};

/// "HELLO WORLD", version 1-Q, mask 0
const HELLO_WORLD_1Q: [&str; 21] = [
    "#######.##....#######",
    "#.....#.#..#..#.....#",
    "#.###.#.#..##.#.###.#",
    "#.###.#.#.....#.###.#",
    "#.###.#.#.#...#.###.#",
    "#.....#...#...#.....#",
    "#######.#.#.#.#######",
    "........#............",
    ".##.#.##....#.#.#####",
    ".#......####....#...#",
    "..##.###.##...#.##...",
    ".##.##.#..##.#.#.###.",
    "#...#.#.#.###.###.#.#",
    "........##.#..#...#.#",
    "#######.#.#....#.##..",
    "#.....#..#.##.##.#...",
    "#.###.#.#.#...#######",
    "#.###.#..#.#.#.#...#.",
    "#.###.#.#..#.###.#..#",
    "#.....#.#.####...#.##",
    "#######....#.###....#",
];

fn rows(code: &QrCode) -> Vec<String> {
    (0..code.size())
        .map(|y| {
            (0..code.size())
                .map(|x| if code.is_dark(x, y) { '#' } else { '.' })
                .collect()
        })
        .collect()
}

fn has_finder_at(code: &QrCode, ox: usize, oy: usize) -> bool {
    (0..7usize).all(|dy| {
        (0..7usize).all(|dx| {
            // Dark outer ring, light ring, dark 3x3 core
            let dist = dx.abs_diff(3).max(dy.abs_diff(3));
            code.is_dark(ox + dx, oy + dy) == (dist != 2)
        })
    })
}

#[test]
fn test_hello_world_quartile_auto_mask() {
    let code = QrEncoder::new()
        .error_correction(ECLevel::Q)
        .encode_text("HELLO WORLD")
        .unwrap();

    assert_eq!(code.version, Version::MIN);
    assert_eq!(code.size(), 21);
    assert_eq!(code.error_correction, ECLevel::Q);
    assert_eq!(code.mask_pattern, MaskPattern::Pattern0);
    assert_eq!(rows(&code), HELLO_WORLD_1Q);
}

#[test]
fn test_hello_world_explicit_mask_is_structurally_valid() {
    let code = QrEncoder::new()
        .error_correction(ECLevel::Q)
        .mask(MaskSelection::Fixed(MaskPattern::Pattern0))
        .encode_text("HELLO WORLD")
        .unwrap();
    assert_eq!(code.size(), 21);
    assert!(has_finder_at(&code, 0, 0));
    assert!(has_finder_at(&code, 14, 0));
    assert!(has_finder_at(&code, 0, 14));

    for mask in MaskPattern::ALL {
        let code = QrEncoder::new()
            .error_correction(ECLevel::Q)
            .mask(MaskSelection::Fixed(mask))
            .encode_text("HELLO WORLD")
            .unwrap();
        assert!(has_finder_at(&code, 0, 0), "mask {mask:?}");
        assert!(has_finder_at(&code, 14, 0), "mask {mask:?}");
        assert!(has_finder_at(&code, 0, 14), "mask {mask:?}");
        assert!(code.is_dark(8, 13), "dark module, mask {mask:?}");
    }
}

#[test]
fn test_known_parameter_choices() {
    let digits = "0123456789".repeat(30);
    let filler = "x".repeat(500);
    let cases = [
        (
            "https://github.com/rust-lang/rust",
            ECLevel::M,
            3,
            ECLevel::M,
            MaskPattern::Pattern0,
        ),
        (digits.as_str(), ECLevel::L, 6, ECLevel::L, MaskPattern::Pattern5),
        (filler.as_str(), ECLevel::H, 24, ECLevel::H, MaskPattern::Pattern0),
    ];

    for (text, requested, version, level, mask) in cases {
        let code = QrEncoder::new()
            .error_correction(requested)
            .boost_error_correction(true)
            .encode_text(text)
            .unwrap();
        assert_eq!(code.version.number(), version, "{text:.20}");
        assert_eq!(code.error_correction, level, "{text:.20}");
        assert_eq!(code.mask_pattern, mask, "{text:.20}");
    }
}

#[test]
fn test_version_info_present_from_version_7() {
    // 0x07C94 for version 7, least significant bit at (size-11, 0)
    let code = QrEncoder::new()
        .version_range(Version::new(7).unwrap(), Version::MAX)
        .encode_text("v7")
        .unwrap();
    assert_eq!(code.size(), 45);
    let bits = 0x07C94u32;
    for i in 0..18 {
        let dark = (bits >> i) & 1 == 1;
        assert_eq!(code.is_dark(34 + i % 3, i / 3), dark, "bit {i}");
        assert_eq!(code.is_dark(i / 3, 34 + i % 3), dark, "bit {i}");
    }
}

#[test]
fn test_every_version_encodes() {
    for n in 1..=40 {
        let version = Version::new(n).unwrap();
        let code = QrEncoder::new()
            .version_range(version, version)
            .encode_text("every version")
            .unwrap();
        assert_eq!(code.version, version);
        let far = code.size() - 7;
        assert!(has_finder_at(&code, 0, 0), "version {n}");
        assert!(has_finder_at(&code, far, 0), "version {n}");
        assert!(has_finder_at(&code, 0, far), "version {n}");
    }
}

#[test]
fn test_versions_36_and_39_alignment_grid() {
    let cases = [
        (36, [6, 24, 50, 76, 102, 128, 154]),
        (39, [6, 26, 54, 82, 110, 138, 166]),
    ];
    for (n, centres) in cases {
        let version = Version::new(n).unwrap();
        for level in ECLevel::ALL {
            let code = QrEncoder::new()
                .error_correction(level)
                .version_range(version, version)
                .encode_text("HELLO WORLD")
                .unwrap();
            assert_eq!(code.size(), centres[6] + 7);
            // Innermost centre: dark core inside a light ring
            let (cx, cy) = (centres[1], centres[1]);
            assert!(code.is_dark(cx, cy), "version {n} {level}");
            assert!(!code.is_dark(cx + 1, cy), "version {n} {level}");
            assert!(!code.is_dark(cx, cy - 1), "version {n} {level}");
            assert!(code.is_dark(cx + 2, cy + 2), "version {n} {level}");
            let (cx, cy) = (centres[6], centres[6]);
            assert!(code.is_dark(cx, cy), "version {n} {level}");
            assert!(!code.is_dark(cx - 1, cy + 1), "version {n} {level}");
        }
    }
}

#[test]
fn test_largest_payload() {
    // 2953 bytes is the byte-mode limit of 40-L
    let text = "a".repeat(2953);
    let code = QrEncoder::new()
        .error_correction(ECLevel::L)
        .encode_text(&text)
        .unwrap();
    assert_eq!(code.size(), 177);

    let err = QrEncoder::new()
        .error_correction(ECLevel::L)
        .encode_text(&"a".repeat(2954))
        .unwrap_err();
    assert_eq!(
        err,
        QrError::DataTooLong {
            max_version: 40,
            ec_level: ECLevel::L
        }
    );
}

#[test]
fn test_auto_mask_is_deterministic() {
    let options = QrOptions::default();
    let first = qr_svg("determinism check", &options).unwrap();
    let second = qr_svg("determinism check", &options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_svg_view_box() {
    let options = QrOptions {
        dimension: 256,
        padding: 16,
        ..QrOptions::default()
    };
    let svg = qr_svg("view box", &options).unwrap();
    assert!(svg.contains(r#"viewBox="0 0 288 288""#));
}

#[test]
fn test_verbose_output_is_longer() {
    let compact = qr_svg("compact vs verbose", &QrOptions::default()).unwrap();
    let verbose = qr_svg(
        "compact vs verbose",
        &QrOptions {
            rendering: rust_qr_svg::PathRendering::Verbose,
            ..QrOptions::default()
        },
    )
    .unwrap();
    assert!(verbose.len() > compact.len());
}

#[test]
fn test_barcode_digits() {
    let bits = code128::encode_pattern("12345").unwrap();
    assert!(bits.starts_with("11010010000"));
    assert!(bits.ends_with("1100011101011"));
    assert_eq!(bits.len(), 11 + 11 * 5 + 11 + 13);
}

#[test]
fn test_barcode_checksum_pin() {
    let values = code128::symbol_values("TEST").unwrap();
    assert_eq!(code128::checksum(&values), 76);
}

#[test]
fn test_barcode_rejects_non_ascii() {
    let err = barcode_svg("caf\u{e9}", &BarcodeOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        BarcodeError::UnsupportedCharacter {
            character: '\u{e9}',
            position: 3
        }
    ));
}

#[test]
fn test_barcode_document_size() {
    let options = BarcodeOptions {
        height: 50,
        bar_width: 2,
        quiet_zone: 4,
        ..BarcodeOptions::default()
    };
    let svg = barcode_svg("12345", &options).unwrap();
    // 90 modules * 2 + 2 * 4
    assert!(svg.contains(r#"viewBox="0 0 188 50""#));
}
