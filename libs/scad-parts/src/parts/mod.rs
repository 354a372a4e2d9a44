//! # Part Recipes
//!
//! Each recipe takes a parameter struct (with `Default` values matching the
//! first printed batch) and returns a finished geometry tree in millimeters.

pub mod button;
pub mod card_holder;
pub mod cup;
pub mod hole_samples;
pub mod jack_panel;
pub mod keystone;
pub mod pegs;
pub mod toothpaste_key;
pub mod unistrut_shim;
pub mod washer;

pub use button::{peaked_button, ButtonParams};
pub use card_holder::{index_card_holder, CardHolderParams};
pub use cup::{battery_cup, coffee_cover, cup, CupParams};
pub use hole_samples::{hole_samples, HoleSampleParams};
pub use jack_panel::{back_panel, front_panel, side_panel, JackPanelParams};
pub use keystone::{add_keystones, keystone, keystone_hole, KeystoneParams};
pub use pegs::{linch_pin_peg, peg_holder, slot_peg_with_catch, solid_peg, PegHolderParams, PegParams};
pub use toothpaste_key::{toothpaste_key, ToothpasteKeyParams};
pub use unistrut_shim::{unistrut_shim, UnistrutShimParams};
pub use washer::{washer, WasherParams};
