//! The `Colormap` record and the operations defined on it.
//!
//! A colormap owns one [`BreakpointTable`] plus its rendering parameters.
//! Slicing, concatenation and re-spacing never modify an operand: each
//! builds a fresh table and returns a new colormap.

use std::ops::{Add, Range, RangeFrom, RangeFull, RangeTo};
use tracing::debug;

use crate::colormaps::external::{adapt_to_internal, ExternalColormap};
use crate::colormaps::lut::{check_parameters, LookupTable};
use crate::colormaps::normalize::{concat_positions, linspace, normalize};
use crate::colormaps::segment::{Breakpoint, BreakpointTable, Channel};
use crate::error::{ColormapError, Result};

/// Default number of lookup-table samples
pub const DEFAULT_RESOLUTION: usize = 256;

/// Default gamma exponent
pub const DEFAULT_GAMMA: f64 = 1.0;

/// Anything that maps a normalized value to an RGBA color
pub trait ColorSampler: Send + Sync {
    /// Map a normalized value (0.0 to 1.0) to an RGBA color
    fn map_normalized(&self, value: f64) -> [u8; 4];

    /// Get the name of this colormap
    fn name(&self) -> &str;
}

/// Python-style slice over breakpoint indices: `[start:stop:step]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SliceSpec {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}

impl SliceSpec {
    pub fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Self { start, stop, step }
    }

    /// The whole range, `[:]`
    pub fn full() -> Self {
        Self::default()
    }

    /// Parse `start:stop[:step]` where every part may be empty
    pub fn parse(expr: &str) -> Result<Self> {
        let parts: Vec<&str> = expr.split(':').collect();
        if parts.len() < 2 || parts.len() > 3 {
            return Err(ColormapError::InvalidParameter {
                param: "slice".to_string(),
                message: format!("expected 'start:stop[:step]', got '{}'", expr),
            });
        }

        let parse_part = |part: &str| -> Result<Option<isize>> {
            let part = part.trim();
            if part.is_empty() {
                return Ok(None);
            }
            part.parse::<isize>()
                .map(Some)
                .map_err(|_| ColormapError::InvalidParameter {
                    param: "slice".to_string(),
                    message: format!("invalid index '{}' in '{}'", part, expr),
                })
        };

        Ok(Self {
            start: parse_part(parts[0])?,
            stop: parse_part(parts[1])?,
            step: match parts.get(2) {
                Some(part) => parse_part(part)?,
                None => None,
            },
        })
    }

    /// Resolve the slice against a sequence of `len` items.
    ///
    /// Negative indices count from the end and out-of-range bounds are
    /// clamped, as in Python.
    pub fn indices(&self, len: usize) -> Result<Vec<usize>> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(ColormapError::InvalidParameter {
                param: "slice".to_string(),
                message: "slice step cannot be zero".to_string(),
            });
        }

        let len = len as isize;
        let resolve = |bound: isize, low: isize, high: isize| -> isize {
            let bound = if bound < 0 { bound + len } else { bound };
            bound.clamp(low, high)
        };

        let mut selected = Vec::new();
        if step > 0 {
            let start = self.start.map_or(0, |s| resolve(s, 0, len));
            let stop = self.stop.map_or(len, |s| resolve(s, 0, len));
            let mut i = start;
            while i < stop {
                selected.push(i as usize);
                i = match i.checked_add(step) {
                    Some(next) => next,
                    None => break,
                };
            }
        } else {
            let start = self.start.map_or(len - 1, |s| resolve(s, -1, len - 1));
            let stop = self.stop.map_or(-1, |s| resolve(s, -1, len - 1));
            let mut i = start;
            while i > stop {
                selected.push(i as usize);
                i = match i.checked_add(step) {
                    Some(next) => next,
                    None => break,
                };
            }
        }
        Ok(selected)
    }

    fn is_reversed(&self) -> bool {
        self.step.unwrap_or(1) < 0
    }
}

impl From<RangeFull> for SliceSpec {
    fn from(_: RangeFull) -> Self {
        Self::full()
    }
}

impl From<Range<isize>> for SliceSpec {
    fn from(range: Range<isize>) -> Self {
        Self::new(Some(range.start), Some(range.end), None)
    }
}

impl From<RangeFrom<isize>> for SliceSpec {
    fn from(range: RangeFrom<isize>) -> Self {
        Self::new(Some(range.start), None, None)
    }
}

impl From<RangeTo<isize>> for SliceSpec {
    fn from(range: RangeTo<isize>) -> Self {
        Self::new(None, Some(range.end), None)
    }
}

/// A named piecewise-linear colormap
#[derive(Debug, Clone, PartialEq)]
pub struct Colormap {
    name: String,
    table: BreakpointTable,
    resolution: usize,
    gamma: f64,
}

impl Colormap {
    /// Create a colormap from an explicit table with default parameters
    pub fn new(name: impl Into<String>, table: BreakpointTable) -> Result<Self> {
        Self::with_parameters(name, table, DEFAULT_RESOLUTION, DEFAULT_GAMMA)
    }

    /// Create a colormap with explicit resolution and gamma
    pub fn with_parameters(
        name: impl Into<String>,
        table: BreakpointTable,
        resolution: usize,
        gamma: f64,
    ) -> Result<Self> {
        check_parameters(resolution, gamma)?;
        table.validate()?;
        Ok(Self {
            name: name.into(),
            table,
            resolution,
            gamma,
        })
    }

    /// Convert an external colormap into a new colormap
    pub fn from_external(external: &ExternalColormap) -> Result<Self> {
        adapt_to_internal(external)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table(&self) -> &BreakpointTable {
        &self.table
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Common breakpoint count of the three channels
    pub fn len(&self) -> Result<usize> {
        self.table.len()
    }

    /// A copy with different rendering parameters
    pub fn reparameterized(&self, resolution: usize, gamma: f64) -> Result<Self> {
        Self::with_parameters(self.name.clone(), self.table.clone(), resolution, gamma)
    }

    /// Extract the breakpoints selected by `spec` and renormalize their positions.
    ///
    /// All three channels are selected identically, so their breakpoint
    /// counts must agree. A negative step reverses the colormap.
    pub fn slice(&self, spec: impl Into<SliceSpec>) -> Result<Self> {
        let spec = spec.into();
        let indices = spec.indices(self.table.len()?)?;
        let reversed = spec.is_reversed();

        let mut curves: [Vec<Breakpoint>; 3] = Default::default();
        for channel in Channel::ALL {
            let curve = self.table.channel(channel);
            let selected: Vec<Breakpoint> = indices.iter().map(|&i| curve[i]).collect();
            let raw: Vec<f64> = selected.iter().map(|b| b.position).collect();
            let positions = normalize(&raw)?;

            curves[channel.index()] = selected
                .iter()
                .zip(positions)
                .map(|(b, p)| {
                    if reversed {
                        Breakpoint::new(1.0 - p, b.value_out, b.value_in)
                    } else {
                        Breakpoint::new(p, b.value_in, b.value_out)
                    }
                })
                .collect();
        }

        let [red, green, blue] = curves;
        let name = format!("{}_seg", self.name);
        debug!(
            operation = "slice",
            source = %self.name,
            breakpoints = indices.len(),
            reversed = reversed,
            "Sliced colormap"
        );
        Self::with_parameters(
            name,
            BreakpointTable::from_list(red, green, blue),
            self.resolution,
            self.gamma,
        )
    }

    /// Merge `self` and `other` end-to-end, `self` first.
    ///
    /// Positions are compressed in proportion to each operand's breakpoint
    /// count; color pairs are carried over unchanged.
    pub fn concat(&self, other: &Colormap) -> Result<Self> {
        let mut positions: [Vec<f64>; 3] = Default::default();
        let mut colors: [Vec<(f64, f64)>; 3] = Default::default();

        for channel in Channel::ALL {
            let idx = channel.index();
            positions[idx] = concat_positions(
                &self.table.positions(channel),
                &other.table.positions(channel),
            )?;
            colors[idx] = self.table.colors(channel);
            colors[idx].extend(other.table.colors(channel));
        }

        let table = BreakpointTable::from_value_color(
            [&positions[0], &positions[1], &positions[2]],
            [&colors[0], &colors[1], &colors[2]],
        )?;
        let name = format!("{}{}", self.name, other.name);
        debug!(
            operation = "concat",
            left = %self.name,
            right = %other.name,
            "Concatenated colormaps"
        );
        Self::with_parameters(name, table, self.resolution, self.gamma)
    }

    /// `self + external`; the operand must be adaptable to a breakpoint table
    pub fn concat_external(&self, other: &ExternalColormap) -> Result<Self> {
        let other = adapt_to_internal(other)?;
        self.concat(&other)
    }

    /// `external + self`, the reversed-operand form of concatenation
    pub fn prepend_external(&self, other: &ExternalColormap) -> Result<Self> {
        let other = adapt_to_internal(other)?;
        other.concat(self)
    }

    /// Overwrite every breakpoint position with the normalized `values`.
    ///
    /// The same sequence is used for all three channels and colors are kept.
    pub fn set_value(&self, values: &[f64]) -> Result<Self> {
        let positions = normalize(values)?;
        let table = self.table.with_positions(&positions)?;
        Self::with_parameters(self.name.clone(), table, self.resolution, self.gamma)
    }

    /// Spread the breakpoints evenly over [0, 1], keeping their colors
    pub fn set_uniform(&self) -> Result<Self> {
        let count = self.table.len()?;
        debug!(
            operation = "set_uniform",
            colormap = %self.name,
            breakpoints = count,
            "Re-spacing breakpoints"
        );
        self.set_value(&linspace(0.0, 1.0, count))
    }

    /// Sample the colormap into its lookup table
    pub fn lookup_table(&self) -> Result<LookupTable> {
        LookupTable::build(&self.name, &self.table, self.resolution, self.gamma)
    }
}

impl Add for &Colormap {
    type Output = Result<Colormap>;

    fn add(self, other: &Colormap) -> Self::Output {
        self.concat(other)
    }
}

impl Add<&ExternalColormap> for &Colormap {
    type Output = Result<Colormap>;

    fn add(self, other: &ExternalColormap) -> Self::Output {
        self.concat_external(other)
    }
}

impl Add<&Colormap> for &ExternalColormap {
    type Output = Result<Colormap>;

    fn add(self, other: &Colormap) -> Self::Output {
        other.prepend_external(self)
    }
}
