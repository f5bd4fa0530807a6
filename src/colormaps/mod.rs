//! Piecewise-linear colormaps built from breakpoint tables.
//!
//! This module holds the data model, the operations on colormaps, the
//! adapters to and from external colormap shapes, and the palette parser.

pub mod builtin;
pub mod colormap;
pub mod external;
pub mod lut;
pub mod normalize;
pub mod palette;
pub mod render;
pub mod segment;

pub use builtin::{get_builtin, BUILTIN_NAMES};
pub use colormap::{ColorSampler, Colormap, SliceSpec, DEFAULT_GAMMA, DEFAULT_RESOLUTION};
pub use external::{
    adapt_to_internal, ExternalColormap, LinearSegmentedColormap, ListedColormap, COLOR_SPACING,
};
pub use lut::LookupTable;
pub use normalize::{concat_positions, linspace, normalize};
pub use palette::{parse_palette, parse_palette_str, parse_palette_table};
pub use render::{render_colorbar, save_colorbar};
pub use segment::{Breakpoint, BreakpointTable, Channel};
