//! Breakpoint tables: the data model behind every colormap.
//!
//! A table holds one ordered curve of [`Breakpoint`]s per color channel.
//! Each breakpoint carries the value approached from below its position and
//! the value departing above it, so a curve can jump at a single position.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ColormapError, Result};

/// One entry of a channel curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    /// Position on the normalized [0, 1] axis
    pub position: f64,
    /// Channel value approached just below `position`
    pub value_in: f64,
    /// Channel value departing just above `position`
    pub value_out: f64,
}

impl Breakpoint {
    pub const fn new(position: f64, value_in: f64, value_out: f64) -> Self {
        Self {
            position,
            value_in,
            value_out,
        }
    }

    /// A breakpoint without a jump
    pub const fn flat(position: f64, value: f64) -> Self {
        Self::new(position, value, value)
    }

    /// The `(value_in, value_out)` pair
    pub fn colors(&self) -> (f64, f64) {
        (self.value_in, self.value_out)
    }
}

/// Color channels of a breakpoint table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in table order
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn name(&self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }

    /// Index into an `[r, g, b]` triple
    pub fn index(&self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Three channel curves keyed by channel.
///
/// The table is a plain value: cloning it deep-copies every curve, and all
/// operations in this crate build new tables instead of editing shared ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakpointTable {
    red: Vec<Breakpoint>,
    green: Vec<Breakpoint>,
    blue: Vec<Breakpoint>,
}

impl BreakpointTable {
    /// Wrap three raw channel curves without any transformation
    pub fn from_list(red: Vec<Breakpoint>, green: Vec<Breakpoint>, blue: Vec<Breakpoint>) -> Self {
        Self { red, green, blue }
    }

    /// Build a table by pairing per-channel positions with `(value_in, value_out)` pairs.
    ///
    /// Positions and colors of a channel must have the same length.
    pub fn from_value_color(
        positions: [&[f64]; 3],
        colors: [&[(f64, f64)]; 3],
    ) -> Result<Self> {
        let mut curves: [Vec<Breakpoint>; 3] = Default::default();

        for channel in Channel::ALL {
            let idx = channel.index();
            let (pos, col) = (positions[idx], colors[idx]);
            if pos.len() != col.len() {
                return Err(ColormapError::StructuralMismatch {
                    message: format!(
                        "{} channel has {} positions but {} color pairs",
                        channel,
                        pos.len(),
                        col.len()
                    ),
                });
            }
            curves[idx] = pos
                .iter()
                .zip(col)
                .map(|(&p, &(value_in, value_out))| Breakpoint::new(p, value_in, value_out))
                .collect();
        }

        let [red, green, blue] = curves;
        Ok(Self::from_list(red, green, blue))
    }

    /// Build a table where all three channels share the same positions
    pub fn from_shared_positions(positions: &[f64], colors: [&[(f64, f64)]; 3]) -> Result<Self> {
        Self::from_value_color([positions, positions, positions], colors)
    }

    pub fn red(&self) -> &[Breakpoint] {
        &self.red
    }

    pub fn green(&self) -> &[Breakpoint] {
        &self.green
    }

    pub fn blue(&self) -> &[Breakpoint] {
        &self.blue
    }

    /// The curve of one channel
    pub fn channel(&self, channel: Channel) -> &[Breakpoint] {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    /// Positions of one channel's breakpoints
    pub fn positions(&self, channel: Channel) -> Vec<f64> {
        self.channel(channel).iter().map(|b| b.position).collect()
    }

    /// `(value_in, value_out)` pairs of one channel's breakpoints
    pub fn colors(&self, channel: Channel) -> Vec<(f64, f64)> {
        self.channel(channel).iter().map(Breakpoint::colors).collect()
    }

    /// Common breakpoint count of the three channels.
    ///
    /// Fails with [`ColormapError::StructuralMismatch`] when the counts differ.
    pub fn len(&self) -> Result<usize> {
        let (r, g, b) = (self.red.len(), self.green.len(), self.blue.len());
        if r == g && g == b {
            Ok(r)
        } else {
            Err(ColormapError::StructuralMismatch {
                message: format!(
                    "number of breakpoints for each channel should be the same \
                     (red: {}, green: {}, blue: {})",
                    r, g, b
                ),
            })
        }
    }

    /// Whether every channel curve is empty
    pub fn is_empty(&self) -> bool {
        self.red.is_empty() && self.green.is_empty() && self.blue.is_empty()
    }

    /// Replace every position with `positions[i]`, keeping colors.
    ///
    /// The same sequence is applied to all three channels.
    pub fn with_positions(&self, positions: &[f64]) -> Result<Self> {
        let len = self.len()?;
        if positions.len() != len {
            return Err(ColormapError::StructuralMismatch {
                message: format!(
                    "{} positions given for {} breakpoints per channel",
                    positions.len(),
                    len
                ),
            });
        }

        let respace = |curve: &[Breakpoint]| -> Vec<Breakpoint> {
            curve
                .iter()
                .zip(positions)
                .map(|(b, &p)| Breakpoint::new(p, b.value_in, b.value_out))
                .collect()
        };

        Ok(Self::from_list(
            respace(&self.red),
            respace(&self.green),
            respace(&self.blue),
        ))
    }

    /// Check the channel curve invariants.
    ///
    /// Every curve must be non-empty, start at 0.0, end at 1.0, be
    /// non-decreasing in position, and carry finite values within [0, 1].
    pub fn validate(&self) -> Result<()> {
        for channel in Channel::ALL {
            validate_curve(channel, self.channel(channel))?;
        }
        Ok(())
    }
}

fn validate_curve(channel: Channel, curve: &[Breakpoint]) -> Result<()> {
    let invalid = |message: String| ColormapError::InvalidTable {
        channel: channel.name().to_string(),
        message,
    };

    let (first, last) = match (curve.first(), curve.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(invalid("curve has no breakpoints".to_string())),
    };

    if first.position != 0.0 {
        return Err(invalid(format!(
            "first position must be 0.0, got {}",
            first.position
        )));
    }
    if last.position != 1.0 {
        return Err(invalid(format!(
            "last position must be 1.0, got {}",
            last.position
        )));
    }

    for (i, pair) in curve.windows(2).enumerate() {
        if pair[1].position < pair[0].position {
            return Err(invalid(format!(
                "positions decrease at index {} ({} -> {})",
                i + 1,
                pair[0].position,
                pair[1].position
            )));
        }
    }

    for (i, b) in curve.iter().enumerate() {
        if !b.position.is_finite() {
            return Err(invalid(format!("position at index {} is not finite", i)));
        }
        for value in [b.value_in, b.value_out] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(format!(
                    "value {} at index {} is outside [0, 1]",
                    value, i
                )));
            }
        }
    }

    Ok(())
}
