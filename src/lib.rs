//! # vanadis
//!
//! Build and manipulate piecewise-linear colormaps.
//!
//! A colormap is three independent channel curves over the normalized
//! position axis [0, 1], each an ordered list of breakpoints that may jump
//! at a single position. This library keeps those curves consistent while
//! colormaps are combined and reshaped.
//!
//! ## Key Features
//!
//! - **Explicit construction**: build a colormap straight from a breakpoint table
//! - **Import**: adapt continuous (linear-segmented) and discrete (listed) colormaps
//! - **Concatenation and slicing**: merge colormaps end-to-end, extract sub-ranges
//! - **Uniform re-spacing**: spread breakpoints evenly while keeping their colors
//! - **Palette files**: ingest `color:` line palettes with transition stops
//!
//! ## Example
//!
//! ```
//! use vanadis::colormaps::{get_builtin, parse_palette_str, ExternalColormap};
//!
//! let palette = parse_palette_str("color: 0 0 0 0\ncolor: 100 255 255 255\n")?;
//! let coolwarm: ExternalColormap = get_builtin("coolwarm")?.into();
//! let merged = palette.concat_external(&coolwarm)?.set_uniform()?;
//! assert_eq!(merged.name(), "palettecoolwarm");
//! # Ok::<(), vanadis::ColormapError>(())
//! ```

pub mod colormaps;
pub mod config;
pub mod error;
pub mod logging;

pub use colormaps::{Breakpoint, BreakpointTable, Channel, Colormap};
pub use config::Config;
pub use error::{ColormapError, Result};
pub use logging::{
    init_tracing, log_colormap_stats, log_error, log_operation_end, log_operation_start,
    log_timed_operation,
};
