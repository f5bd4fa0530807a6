//! Built-in discrete colormaps.
//!
//! These are listed colormaps meant to be imported and combined with
//! palettes, e.g. `builtin:coolwarm` on the command line.

use crate::colormaps::external::ListedColormap;
use crate::error::{ColormapError, Result};

/// Names accepted by [`get_builtin`]
pub const BUILTIN_NAMES: &[&str] = &["coolwarm", "rdbu", "seismic", "grayscale"];

/// Blue to white to red, good for temperature anomalies
const COOLWARM: &[[u8; 3]] = &[
    [59, 76, 192],
    [68, 90, 204],
    [77, 104, 215],
    [87, 117, 225],
    [98, 130, 234],
    [108, 142, 241],
    [119, 154, 247],
    [130, 165, 251],
    [141, 176, 254],
    [152, 185, 255],
    [163, 194, 255],
    [174, 201, 253],
    [184, 208, 249],
    [194, 213, 244],
    [204, 217, 238],
    [213, 219, 230],
    [221, 221, 221],
    [229, 216, 209],
    [236, 211, 197],
    [241, 204, 185],
    [245, 196, 173],
    [247, 187, 160],
    [247, 177, 148],
    [247, 166, 135],
    [244, 154, 123],
    [241, 141, 111],
    [236, 127, 99],
    [229, 112, 88],
    [222, 96, 77],
    [213, 80, 66],
    [203, 62, 56],
    [192, 40, 47],
];

/// Dark blue through white to dark red
const SEISMIC: &[[u8; 3]] = &[
    [0, 0, 127],
    [0, 0, 191],
    [0, 63, 255],
    [0, 127, 255],
    [0, 191, 255],
    [127, 223, 255],
    [191, 239, 255],
    [255, 255, 255],
    [255, 239, 191],
    [255, 223, 127],
    [255, 191, 0],
    [255, 127, 0],
    [255, 63, 0],
    [191, 0, 0],
    [127, 0, 0],
];

const GRAYSCALE: &[[u8; 3]] = &[[0, 0, 0], [255, 255, 255]];

/// Look up a built-in listed colormap by name (case-insensitive)
pub fn get_builtin(name: &str) -> Result<ListedColormap> {
    let key = name.to_lowercase();
    match key.as_str() {
        "coolwarm" => Ok(ListedColormap::from_rgb8(key, COOLWARM)),
        "rdbu" => {
            // Red to blue is coolwarm read backwards
            let reversed: Vec<[u8; 3]> = COOLWARM.iter().rev().copied().collect();
            Ok(ListedColormap::from_rgb8(key, &reversed))
        }
        "seismic" => Ok(ListedColormap::from_rgb8(key, SEISMIC)),
        "grayscale" => Ok(ListedColormap::from_rgb8(key, GRAYSCALE)),
        _ => Err(ColormapError::InvalidParameter {
            param: "colormap".to_string(),
            message: format!(
                "Unknown colormap: {} (available: {})",
                name,
                BUILTIN_NAMES.join(", ")
            ),
        }),
    }
}
