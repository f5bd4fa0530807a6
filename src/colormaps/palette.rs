//! Palette file parser.
//!
//! Only lines starting with `color:` (any case) are read. Each carries a
//! position followed by either one RGB color (a flat stop) or two (a
//! transition stop, whose second color starts the next gradient span):
//!
//! ```text
//! COLOR: 0    0   0   0
//! COLOR: 25 255   0   0   0 255   0
//! COLOR: 100 255 255 255
//! ```
//!
//! Components are integers in 0..=255. Stops may appear in any order.

use std::path::Path;
use tracing::debug;

use crate::colormaps::colormap::Colormap;
use crate::colormaps::normalize::normalize;
use crate::colormaps::segment::BreakpointTable;
use crate::error::{ColormapError, Result};

const PREFIX: &str = "color:";

/// Name given to colormaps parsed from a string
pub const DEFAULT_PALETTE_NAME: &str = "palette";

type Rgb = [f64; 3];

/// One `color:` line
#[derive(Debug, Clone, PartialEq)]
struct Stop {
    position: f64,
    color: Rgb,
    transit: Option<Rgb>,
}

/// Read a palette file into a colormap named after the file stem
pub fn parse_palette(path: impl AsRef<Path>) -> Result<Colormap> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PALETTE_NAME.to_string());

    debug!(
        operation = "parse_palette",
        path = %path.display(),
        bytes = contents.len(),
        "Parsing palette file"
    );
    Colormap::new(name, parse_palette_table(&contents)?)
}

/// Parse palette text into a colormap named [`DEFAULT_PALETTE_NAME`]
pub fn parse_palette_str(contents: &str) -> Result<Colormap> {
    Colormap::new(DEFAULT_PALETTE_NAME, parse_palette_table(contents)?)
}

/// Parse palette text into a breakpoint table
pub fn parse_palette_table(contents: &str) -> Result<BreakpointTable> {
    let mut stops = contents
        .lines()
        .enumerate()
        .filter_map(|(i, line)| strip_prefix(line).map(|rest| parse_stop(i + 1, rest)))
        .collect::<Result<Vec<Stop>>>()?;

    if stops.is_empty() {
        return Err(ColormapError::EmptyPalette);
    }

    // Stable, so stops sharing a position keep their file order
    stops.sort_by(|a, b| a.position.total_cmp(&b.position));

    let pairs = walk_stops(&stops);
    let raw: Vec<f64> = stops.iter().map(|s| s.position).collect();
    let positions = normalize(&raw)?;

    let channel = |c: usize| -> Vec<(f64, f64)> {
        pairs.iter().map(|(i, o)| (i[c], o[c])).collect()
    };
    let (red, green, blue) = (channel(0), channel(1), channel(2));

    debug!(
        operation = "parse_palette",
        stops = stops.len(),
        transitions = stops.iter().filter(|s| s.transit.is_some()).count(),
        "Parsed palette"
    );
    BreakpointTable::from_shared_positions(&positions, [&red, &green, &blue])
}

/// Derive the (incoming, outgoing) color of every sorted stop.
///
/// `last_color` carries the transit color of the latest transition and
/// `transit` records whether that transition is still open. A flat stop
/// right before the final one also opens a transition, using its own
/// color as transit color.
fn walk_stops(stops: &[Stop]) -> Vec<(Rgb, Rgb)> {
    let count = stops.len();
    let mut pairs = Vec::with_capacity(count);
    let mut last_color: Option<Rgb> = None;
    let mut transit = false;

    for (idx, stop) in stops.iter().enumerate() {
        let pre_final = count - idx == 2;

        if last_color.is_none() && stop.transit.is_none() {
            pairs.push((stop.color, stop.color));
            last_color = Some(stop.color);
        } else if stop.transit.is_some() || pre_final {
            let incoming = match (transit, last_color) {
                (true, Some(previous)) => previous,
                _ => stop.color,
            };
            pairs.push((incoming, stop.color));
            last_color = Some(stop.transit.unwrap_or(stop.color));
            transit = true;
        } else {
            pairs.push((stop.color, stop.color));
            last_color = Some(stop.color);
            transit = false;
        }
    }

    pairs
}

fn strip_prefix(line: &str) -> Option<&str> {
    let head = line.get(..PREFIX.len())?;
    if head.eq_ignore_ascii_case(PREFIX) {
        Some(&line[PREFIX.len()..])
    } else {
        None
    }
}

fn parse_stop(line: usize, rest: &str) -> Result<Stop> {
    let error = |message: String| ColormapError::PaletteParse { line, message };

    let tokens: Vec<&str> = rest.split_whitespace().collect();
    if tokens.len() != 4 && tokens.len() != 7 {
        return Err(error(format!(
            "expected 4 or 7 fields after 'color:', found {}",
            tokens.len()
        )));
    }

    let position = tokens[0]
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .ok_or_else(|| error(format!("invalid position '{}'", tokens[0])))?;

    let parse_color = |fields: &[&str]| -> Result<Rgb> {
        let mut rgb = [0.0; 3];
        for (slot, field) in rgb.iter_mut().zip(fields) {
            let value = field
                .parse::<u8>()
                .map_err(|_| error(format!("invalid color component '{}'", field)))?;
            *slot = value as f64 / 255.0;
        }
        Ok(rgb)
    };

    let color = parse_color(&tokens[1..4])?;
    let transit = if tokens.len() == 7 {
        Some(parse_color(&tokens[4..7])?)
    } else {
        None
    };

    Ok(Stop {
        position,
        color,
        transit,
    })
}
