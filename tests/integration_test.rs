//! Integration tests for vanadis
//!
//! These tests drive palettes from disk through the colormap operations and
//! out to rendered colorbars.

mod common;

use common::assertions::{assert_approx_eq, assert_array_approx_eq, assert_valid_axis};
use common::fixtures::{write_palette, GRAY_PEAK, PRECIP};
use pretty_assertions::assert_eq;

use vanadis::colormaps::{
    adapt_to_internal, get_builtin, parse_palette, save_colorbar, ExternalColormap,
    LinearSegmentedColormap, ListedColormap, SliceSpec,
};
use vanadis::{Breakpoint, BreakpointTable, Channel, Colormap, ColormapError};

#[test]
fn test_parse_palette_file_named_after_stem() {
    let (_dir, path) = write_palette("gray_peak.pal", GRAY_PEAK);
    let cmap = parse_palette(&path).unwrap();

    assert_eq!(cmap.name(), "gray_peak");
    assert_eq!(cmap.len().unwrap(), 3);
    for channel in Channel::ALL {
        assert_eq!(cmap.table().positions(channel), vec![0.0, 0.5, 1.0]);
        assert_eq!(
            cmap.table().colors(channel),
            vec![(0.0, 0.0), (1.0, 1.0), (0.0, 0.0)]
        );
    }
}

#[test]
fn test_parse_precipitation_palette() {
    let (_dir, path) = write_palette("precip.pal", PRECIP);
    let cmap = parse_palette(&path).unwrap();
    let table = cmap.table();

    assert_eq!(
        table.positions(Channel::Red),
        vec![0.0, 0.1, 0.25, 0.5, 1.0]
    );
    // Opening transition starts flat on its primary color
    assert_eq!(table.green()[1].colors(), (120.0 / 255.0, 120.0 / 255.0));
    // Subsequent transitions arrive on the previous transit color
    assert_eq!(table.green()[2].colors(), (200.0 / 255.0, 1.0));
    assert_eq!(table.blue()[3].colors(), (0.0, 0.0));
    assert_eq!(table.green()[3].colors(), (1.0, 128.0 / 255.0));
    // Final flat stop
    assert_eq!(table.red()[4].colors(), (128.0 / 255.0, 128.0 / 255.0));
}

#[test]
fn test_missing_palette_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = parse_palette(dir.path().join("nope.pal")).unwrap_err();
    assert!(matches!(err, ColormapError::Io(_)));
}

#[test]
fn test_malformed_palette_aborts() {
    let (_dir, path) = write_palette("bad.pal", "color: 0 0 0 0\ncolor: 50 1 2\ncolor: 100 0 0 0\n");
    let err = parse_palette(&path).unwrap_err();
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn test_concat_palette_with_builtin() {
    let (_dir, path) = write_palette("gray_peak.pal", GRAY_PEAK);
    let palette = parse_palette(&path).unwrap();
    let seismic: ExternalColormap = get_builtin("seismic").unwrap().into();

    let merged = (&palette + &seismic).unwrap();
    assert_eq!(merged.name(), "gray_peakseismic");

    // 3 palette breakpoints followed by 2 * 15 - 1 seismic ones
    let positions = merged.table().positions(Channel::Blue);
    assert_eq!(positions.len(), 32);
    assert_valid_axis(&positions);
    assert_approx_eq(positions[2], 3.0 / 32.0, None);
    assert_approx_eq(positions[3], 3.0 / 32.0, None);

    // Palette colors come first, unchanged
    assert_eq!(
        merged.table().colors(Channel::Red)[..3].to_vec(),
        palette.table().colors(Channel::Red)
    );
}

#[test]
fn test_reversed_operand_concat() {
    let (_dir, path) = write_palette("gray_peak.pal", GRAY_PEAK);
    let palette = parse_palette(&path).unwrap();
    let gray: ExternalColormap = get_builtin("grayscale").unwrap().into();

    let merged = (&gray + &palette).unwrap();
    assert_eq!(merged.name(), "grayscalegray_peak");
    assert_eq!(merged.table().positions(Channel::Red).len(), 6);
    assert_eq!(merged.table().red()[0], Breakpoint::flat(0.0, 0.0));
}

#[test]
fn test_repeated_concat_then_uniform() {
    let (_dir, path) = write_palette("gray_peak.pal", GRAY_PEAK);
    let palette = parse_palette(&path).unwrap();

    let mut cmap = palette.clone();
    for _ in 0..3 {
        cmap = cmap.concat(&palette).unwrap();
    }
    let uniform = cmap.set_uniform().unwrap();
    let positions = uniform.table().positions(Channel::Green);

    assert_eq!(positions.len(), 12);
    let expected: Vec<f64> = (0..12).map(|i| i as f64 / 11.0).collect();
    assert_array_approx_eq(&positions, &expected, None);
    assert_eq!(
        uniform.table().colors(Channel::Green),
        cmap.table().colors(Channel::Green)
    );
    assert_eq!(
        uniform.set_uniform().unwrap().table(),
        uniform.table()
    );
}

#[test]
fn test_slice_then_render() {
    let (dir, path) = write_palette("precip.pal", PRECIP);
    let cmap = parse_palette(&path).unwrap();

    let head = cmap.slice(..3).unwrap();
    assert_eq!(head.name(), "precip_seg");
    assert_array_approx_eq(
        &head.table().positions(Channel::Red),
        &[0.0, 0.4, 1.0],
        None,
    );

    let tail = cmap.slice(SliceSpec::parse("-2:").unwrap()).unwrap();
    assert_eq!(tail.table().positions(Channel::Red), vec![0.0, 1.0]);

    let png = dir.path().join("head.png");
    let lut = head.lookup_table().unwrap();
    save_colorbar(&lut, &png, 64, 8).unwrap();

    let img = image::open(&png).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (64, 8));
    // Leftmost column is the first stop: white
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
}

#[test]
fn test_listed_import_export_round_trip() {
    let colors = vec![
        [0.1, 0.2, 0.3],
        [0.9, 0.1, 0.0],
        [0.4, 0.4, 0.4],
        [0.0, 1.0, 0.5],
    ];
    let listed = ListedColormap::new("four", colors.clone());
    let cmap = adapt_to_internal(&listed.into()).unwrap();
    assert_eq!(cmap.len().unwrap(), 7);

    // Re-export and sample at the color centers
    let exported = cmap.to_external();
    let again = adapt_to_internal(&exported.into()).unwrap();
    let lut = again.lookup_table().unwrap();
    for (i, color) in colors.iter().enumerate() {
        let center = (i as f64 + 0.5) / colors.len() as f64;
        assert_array_approx_eq(&lut.at(center), color, Some(1e-9));
    }
}

#[test]
fn test_external_colormap_with_jumps_survives_concat() {
    let curve = vec![
        Breakpoint::flat(0.0, 0.0),
        Breakpoint::new(0.5, 0.2, 0.8),
        Breakpoint::flat(1.0, 1.0),
    ];
    let jumpy = LinearSegmentedColormap {
        name: "jumpy".to_string(),
        segment_data: BreakpointTable::from_list(curve.clone(), curve.clone(), curve),
        n: 128,
        gamma: 1.0,
    };
    let base = Colormap::new(
        "base",
        BreakpointTable::from_list(
            vec![Breakpoint::flat(0.0, 1.0), Breakpoint::flat(1.0, 0.0)],
            vec![Breakpoint::flat(0.0, 1.0), Breakpoint::flat(1.0, 0.0)],
            vec![Breakpoint::flat(0.0, 1.0), Breakpoint::flat(1.0, 0.0)],
        ),
    )
    .unwrap();

    let merged = base.concat_external(&jumpy.into()).unwrap();
    assert_eq!(merged.table().red()[3].colors(), (0.2, 0.8));
    assert_approx_eq(merged.table().red()[3].position, 0.7, Some(1e-12));
}

#[test]
fn test_json_table_round_trip() {
    let (_dir, path) = write_palette("precip.pal", PRECIP);
    let cmap = parse_palette(&path).unwrap();

    let json = serde_json::to_string_pretty(cmap.table()).unwrap();
    let table: BreakpointTable = serde_json::from_str(&json).unwrap();
    assert_eq!(&table, cmap.table());
}
