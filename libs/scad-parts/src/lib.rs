//! # SCAD Parts
//!
//! Parametric printable parts built on [`scad_tree`]: washers, pegboard
//! hardware, keystone jack panels, cups and a handful of one-off fixtures
//! such as strut shims and hole gauges.
//!
//! ## Example
//!
//! ```rust,no_run
//! use scad_parts::{save_as_scad, washer, WasherParams};
//!
//! let part = washer(&WasherParams::small()).unwrap();
//! // Written under $SCAD_DIRECTORY, or the working directory
//! save_as_scad(&part, "washer_small").unwrap();
//! ```

pub mod catalog;
pub mod error;
pub mod layout;
pub mod output;
pub mod parts;

// Re-export public API
pub use catalog::Part;
pub use error::{PartError, PartResult};
pub use layout::{centered_grid, centered_spacing};
pub use output::{save_as_scad, OutputDir};
pub use parts::{
    add_keystones, back_panel, battery_cup, coffee_cover, cup, front_panel, hole_samples,
    index_card_holder, keystone, keystone_hole, linch_pin_peg, peaked_button, peg_holder,
    side_panel, slot_peg_with_catch, solid_peg, toothpaste_key, unistrut_shim, washer,
    ButtonParams, CardHolderParams, CupParams, HoleSampleParams, JackPanelParams,
    KeystoneParams, PegHolderParams, PegParams, ToothpasteKeyParams, UnistrutShimParams,
    WasherParams,
};
