//! Evaluation of a breakpoint table into a discrete lookup table.
//!
//! The sampling follows the usual linear-segmented colormap convention:
//! `N` samples at `linspace(0, 1, N) ^ gamma`, the first taking the first
//! breakpoint's outgoing value and the last the final breakpoint's incoming
//! value. Interior samples interpolate from the outgoing value of the
//! breakpoint on their left to the incoming value of the one on their right.

use crate::colormaps::colormap::ColorSampler;
use crate::colormaps::normalize::linspace;
use crate::colormaps::segment::{Breakpoint, BreakpointTable, Channel};
use crate::error::{ColormapError, Result};

/// `N` sampled RGB colors of a colormap
#[derive(Debug, Clone, PartialEq)]
pub struct LookupTable {
    name: String,
    entries: Vec<[f64; 3]>,
}

impl LookupTable {
    /// Sample `table` at `resolution` points with the given gamma exponent
    pub fn build(
        name: &str,
        table: &BreakpointTable,
        resolution: usize,
        gamma: f64,
    ) -> Result<Self> {
        check_parameters(resolution, gamma)?;
        table.validate()?;

        let xind: Vec<f64> = linspace(0.0, 1.0, resolution)
            .into_iter()
            .map(|x| x.powf(gamma))
            .collect();

        let mut entries = vec![[0.0; 3]; resolution];
        for channel in Channel::ALL {
            let samples = sample_curve(table.channel(channel), &xind);
            for (entry, value) in entries.iter_mut().zip(samples) {
                entry[channel.index()] = value;
            }
        }

        Ok(Self {
            name: name.to_string(),
            entries,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[[f64; 3]] {
        &self.entries
    }

    /// Color at a normalized position; out-of-range positions are clamped
    pub fn at(&self, position: f64) -> [f64; 3] {
        let n = self.entries.len();
        let x = if position.is_nan() {
            0.0
        } else {
            position.clamp(0.0, 1.0)
        };
        let index = ((x * n as f64) as usize).min(n - 1);
        self.entries[index]
    }

    /// Export the sampled colors as an evenly spaced `colorgrad` gradient
    pub fn to_gradient(&self) -> Result<colorgrad::Gradient> {
        let colors: Vec<colorgrad::Color> = self
            .entries
            .iter()
            .map(|c| colorgrad::Color::new(c[0], c[1], c[2], 1.0))
            .collect();

        colorgrad::CustomGradient::new()
            .colors(&colors)
            .build()
            .map_err(|e| ColormapError::Export {
                message: format!("cannot build gradient for {}: {}", self.name, e),
            })
    }
}

impl ColorSampler for LookupTable {
    fn map_normalized(&self, value: f64) -> [u8; 4] {
        let rgb = self.at(value);
        [to_u8(rgb[0]), to_u8(rgb[1]), to_u8(rgb[2]), 255]
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Validate the rendering parameters shared by colormaps and lookup tables
pub(crate) fn check_parameters(resolution: usize, gamma: f64) -> Result<()> {
    if resolution == 0 {
        return Err(ColormapError::InvalidParameter {
            param: "resolution".to_string(),
            message: "resolution must be at least 1".to_string(),
        });
    }
    if !gamma.is_finite() || gamma <= 0.0 {
        return Err(ColormapError::InvalidParameter {
            param: "gamma".to_string(),
            message: format!("gamma must be a finite positive number, got {}", gamma),
        });
    }
    Ok(())
}

fn sample_curve(curve: &[Breakpoint], xind: &[f64]) -> Vec<f64> {
    let n = xind.len();
    let (first, last) = (curve[0], curve[curve.len() - 1]);

    // Single-sample tables take the value at x = 1
    if n == 1 {
        return vec![last.value_in.clamp(0.0, 1.0)];
    }

    let mut lut = Vec::with_capacity(n);
    lut.push(first.value_out);

    for &x in &xind[1..n - 1] {
        // First breakpoint at or past x; the curve starts at 0.0 < x
        let ind = curve
            .partition_point(|b| b.position < x)
            .clamp(1, curve.len() - 1);
        let (left, right) = (curve[ind - 1], curve[ind]);
        let distance = (x - left.position) / (right.position - left.position);
        lut.push(distance * (right.value_in - left.value_out) + left.value_out);
    }

    lut.push(last.value_in);
    lut.into_iter().map(|v| v.clamp(0.0, 1.0)).collect()
}

fn to_u8(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
