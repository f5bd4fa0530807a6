//! Position normalization utilities.
//!
//! Breakpoint positions always live on [0, 1]. These helpers rescale
//! arbitrary ordered position sequences onto that axis and lay two
//! sequences end-to-end when colormaps are concatenated.

use crate::error::{ColormapError, Result};

/// Rescale a sequence so its minimum maps to 0.0 and its maximum to 1.0.
///
/// Order and length are preserved. An empty or constant sequence has no
/// range to rescale and yields [`ColormapError::DegenerateRange`].
pub fn normalize(values: &[f64]) -> Result<Vec<f64>> {
    if values.is_empty() {
        return Err(ColormapError::DegenerateRange {
            message: "cannot normalize an empty sequence".to_string(),
        });
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if values.iter().any(|v| !v.is_finite()) || max <= min {
        return Err(ColormapError::DegenerateRange {
            message: format!(
                "sequence of {} values spans [{}, {}], nothing to rescale",
                values.len(),
                min,
                max
            ),
        });
    }

    let spread = max - min;
    if spread.is_finite() {
        return Ok(values.iter().map(|v| (v - min) / spread).collect());
    }

    // Finite bounds whose difference overflows: rescale by the largest magnitude first
    let scale = max.abs().max(min.abs());
    let (low, high) = (min / scale, max / scale);
    Ok(values
        .iter()
        .map(|v| (v / scale - low) / (high - low))
        .collect())
}

/// Lay two position sequences end-to-end on [0, 1].
///
/// Each sequence is stretched over a span equal to its own length, the
/// second is offset by the length of the first, and the combined sequence
/// is normalized. The first sequence ends up on `[0, m/(m+n)]` and the
/// second on `[m/(m+n), 1]`.
pub fn concat_positions(first: &[f64], second: &[f64]) -> Result<Vec<f64>> {
    let len_first = first.len() as f64;
    let len_second = second.len() as f64;

    let mut merged: Vec<f64> = normalize(first)?
        .into_iter()
        .map(|v| v * len_first)
        .collect();
    merged.extend(
        normalize(second)?
            .into_iter()
            .map(|v| v * len_second + len_first),
    );

    normalize(&merged)
}

/// `count` evenly spaced values from `start` to `stop` inclusive
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    // Pin the last sample so rounding never leaves it short of `stop`
                    if i == count - 1 {
                        stop
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}
