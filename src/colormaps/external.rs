//! External colormap shapes and the adapter into breakpoint tables.
//!
//! Two foreign shapes convert losslessly or near-losslessly: a continuous
//! linear-segmented colormap exposing its raw table, and a discrete listed
//! colormap exposing `N` solid colors. Anything that only offers a sampling
//! function is rejected.

use std::fmt;
use tracing::debug;

use crate::colormaps::colormap::{ColorSampler, Colormap};
use crate::colormaps::normalize::{linspace, normalize};
use crate::colormaps::segment::BreakpointTable;
use crate::error::{ColormapError, Result};

/// Offset separating the two breakpoints generated for each listed color
pub const COLOR_SPACING: f64 = 1e-4;

/// A continuous piecewise-linear colormap, as consumed by renderers
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSegmentedColormap {
    pub name: String,
    pub segment_data: BreakpointTable,
    pub n: usize,
    pub gamma: f64,
}

/// A discrete colormap made of `N` solid RGB colors with components in [0, 1]
#[derive(Debug, Clone, PartialEq)]
pub struct ListedColormap {
    pub name: String,
    pub colors: Vec<[f64; 3]>,
}

impl ListedColormap {
    pub fn new(name: impl Into<String>, colors: Vec<[f64; 3]>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }

    /// Build from 8-bit RGB triplets
    pub fn from_rgb8(name: impl Into<String>, colors: &[[u8; 3]]) -> Self {
        let colors = colors
            .iter()
            .map(|c| {
                [
                    c[0] as f64 / 255.0,
                    c[1] as f64 / 255.0,
                    c[2] as f64 / 255.0,
                ]
            })
            .collect();
        Self::new(name, colors)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// A colormap coming from outside this crate
pub enum ExternalColormap {
    LinearSegmented(LinearSegmentedColormap),
    Listed(ListedColormap),
    /// Only evaluable, no breakpoints to recover
    Sampled(Box<dyn ColorSampler>),
}

impl ExternalColormap {
    /// Short description of the shape, used in error messages
    pub fn kind(&self) -> String {
        match self {
            ExternalColormap::LinearSegmented(c) => format!("linear-segmented colormap '{}'", c.name),
            ExternalColormap::Listed(c) => format!("listed colormap '{}'", c.name),
            ExternalColormap::Sampled(s) => format!("sampled colormap '{}'", s.name()),
        }
    }
}

impl fmt::Debug for ExternalColormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExternalColormap::LinearSegmented(c) => f.debug_tuple("LinearSegmented").field(c).finish(),
            ExternalColormap::Listed(c) => f.debug_tuple("Listed").field(c).finish(),
            ExternalColormap::Sampled(s) => f.debug_tuple("Sampled").field(&s.name()).finish(),
        }
    }
}

impl From<LinearSegmentedColormap> for ExternalColormap {
    fn from(cmap: LinearSegmentedColormap) -> Self {
        ExternalColormap::LinearSegmented(cmap)
    }
}

impl From<ListedColormap> for ExternalColormap {
    fn from(cmap: ListedColormap) -> Self {
        ExternalColormap::Listed(cmap)
    }
}

/// Convert an external colormap into this crate's representation
pub fn adapt_to_internal(external: &ExternalColormap) -> Result<Colormap> {
    match external {
        ExternalColormap::LinearSegmented(cmap) => Colormap::with_parameters(
            cmap.name.clone(),
            cmap.segment_data.clone(),
            cmap.n,
            cmap.gamma,
        ),
        ExternalColormap::Listed(cmap) => from_listed(cmap),
        ExternalColormap::Sampled(_) => Err(ColormapError::UnsupportedOperand {
            kind: external.kind(),
        }),
    }
}

/// Turn `N` solid colors into `2N - 1` breakpoints.
///
/// Every color sits on two breakpoints `COLOR_SPACING` apart at its evenly
/// spaced stop; the leading duplicate is dropped so the first color lands
/// on position 0.
fn from_listed(cmap: &ListedColormap) -> Result<Colormap> {
    let n = cmap.colors.len();
    if n < 2 {
        return Err(ColormapError::DegenerateRange {
            message: format!(
                "listed colormap '{}' needs at least two colors, got {}",
                cmap.name, n
            ),
        });
    }

    let raw: Vec<f64> = linspace(0.0, 1.0, n)
        .into_iter()
        .flat_map(|p| [p - COLOR_SPACING, p])
        .skip(1)
        .collect();
    let positions = normalize(&raw)?;

    let pairs = |component: usize| -> Vec<(f64, f64)> {
        cmap.colors
            .iter()
            .flat_map(|c| [(c[component], c[component]); 2])
            .skip(1)
            .collect()
    };
    let (red, green, blue) = (pairs(0), pairs(1), pairs(2));

    let table = BreakpointTable::from_shared_positions(&positions, [&red, &green, &blue])?;
    debug!(
        operation = "import_listed",
        colormap = %cmap.name,
        colors = n,
        breakpoints = positions.len(),
        "Converted listed colormap"
    );
    Colormap::with_parameters(cmap.name.clone(), table, n, 1.0)
}

impl Colormap {
    /// Export as a continuous colormap for downstream rendering
    pub fn to_external(&self) -> LinearSegmentedColormap {
        LinearSegmentedColormap {
            name: self.name().to_string(),
            segment_data: self.table().clone(),
            n: self.resolution(),
            gamma: self.gamma(),
        }
    }
}
