//! # Part Catalog
//!
//! Every printable part with its default parameters and output file name.

use clap::ValueEnum;
use scad_tree::GeometryNode;
use scad_units::mm;

use crate::error::PartResult;
use crate::parts::{
    back_panel, battery_cup, coffee_cover, front_panel, hole_samples, index_card_holder,
    keystone, linch_pin_peg, peaked_button, peg_holder, side_panel, slot_peg_with_catch,
    toothpaste_key, unistrut_shim, washer, ButtonParams, CardHolderParams, HoleSampleParams,
    JackPanelParams, KeystoneParams, PegHolderParams, PegParams, ToothpasteKeyParams,
    UnistrutShimParams, WasherParams,
};

/// Named part the command line can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Part {
    Washer,
    WasherSmall,
    SlotPegHolder,
    LinchPinPegHolder,
    FatCardHolder,
    ThinCardHolder,
    Keystone,
    JackPanelFront,
    JackPanelBack,
    JackPanelSide,
    BatteryCup,
    CoffeeCover,
    HoleSamples,
    ToothpasteKey,
    ButtonPeaked,
    #[value(name = "unistrut-shim-1-16")]
    UnistrutShim1_16,
    #[value(name = "unistrut-shim-2-16")]
    UnistrutShim2_16,
    #[value(name = "unistrut-shim-4-16")]
    UnistrutShim4_16,
}

impl Part {
    pub const ALL: [Part; 18] = [
        Part::Washer,
        Part::WasherSmall,
        Part::SlotPegHolder,
        Part::LinchPinPegHolder,
        Part::FatCardHolder,
        Part::ThinCardHolder,
        Part::Keystone,
        Part::JackPanelFront,
        Part::JackPanelBack,
        Part::JackPanelSide,
        Part::BatteryCup,
        Part::CoffeeCover,
        Part::HoleSamples,
        Part::ToothpasteKey,
        Part::ButtonPeaked,
        Part::UnistrutShim1_16,
        Part::UnistrutShim2_16,
        Part::UnistrutShim4_16,
    ];

    /// Default output file name, extension included.
    pub fn file_name(self) -> &'static str {
        match self {
            Part::Washer => "washer.scad",
            Part::WasherSmall => "washer_small.scad",
            Part::SlotPegHolder => "slot_peg_holder.scad",
            Part::LinchPinPegHolder => "linch_pin_peg_holder.scad",
            Part::FatCardHolder => "fat_card_holder.scad",
            Part::ThinCardHolder => "thin_card_holder.scad",
            Part::Keystone => "keystone.scad",
            Part::JackPanelFront => "jack_panel_front.scad",
            Part::JackPanelBack => "jack_panel_back.scad",
            Part::JackPanelSide => "jack_panel_side.scad",
            Part::BatteryCup => "battery_cup.scad",
            Part::CoffeeCover => "coffee_cover.scad",
            Part::HoleSamples => "hole_samples.scad",
            Part::ToothpasteKey => "toothpaste_key.scad",
            Part::ButtonPeaked => "button_peaked.scad",
            Part::UnistrutShim1_16 => "unistrut_shim_1_16.scad",
            Part::UnistrutShim2_16 => "unistrut_shim_2_16.scad",
            Part::UnistrutShim4_16 => "unistrut_shim_4_16.scad",
        }
    }

    pub fn build(self) -> PartResult<GeometryNode> {
        match self {
            Part::Washer => washer(&WasherParams::default()),
            Part::WasherSmall => washer(&WasherParams::small()),
            Part::SlotPegHolder => {
                let peg = slot_peg_with_catch(&PegParams::default(), None, None)?;
                peg_holder(peg, &PegHolderParams::default())
            }
            Part::LinchPinPegHolder => {
                let peg = linch_pin_peg(&PegParams::default(), None)?;
                peg_holder(peg, &PegHolderParams::default())
            }
            Part::FatCardHolder => index_card_holder(&CardHolderParams::fat()),
            Part::ThinCardHolder => index_card_holder(&CardHolderParams::thin()),
            Part::Keystone => keystone(&KeystoneParams::default()),
            Part::JackPanelFront => front_panel(&JackPanelParams::default()),
            Part::JackPanelBack => back_panel(&JackPanelParams::default()),
            Part::JackPanelSide => side_panel(&JackPanelParams::default()),
            Part::BatteryCup => battery_cup(),
            Part::CoffeeCover => coffee_cover(mm(95.0).to_mm()),
            Part::HoleSamples => hole_samples(&HoleSampleParams::default()),
            Part::ToothpasteKey => toothpaste_key(&ToothpasteKeyParams::default()),
            Part::ButtonPeaked => peaked_button(&ButtonParams::default()),
            Part::UnistrutShim1_16 => unistrut_shim(&UnistrutShimParams::sixteenth()),
            Part::UnistrutShim2_16 => unistrut_shim(&UnistrutShimParams::eighth()),
            Part::UnistrutShim4_16 => unistrut_shim(&UnistrutShimParams::quarter()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_file_names_are_unique() {
        let names: HashSet<_> = Part::ALL.iter().map(|p| p.file_name()).collect();
        assert_eq!(names.len(), Part::ALL.len());
    }

    #[test]
    fn test_value_names_are_kebab_case() {
        let value = Part::JackPanelFront.to_possible_value().unwrap();
        assert_eq!(value.get_name(), "jack-panel-front");
        assert_eq!(Part::from_str("fat-card-holder", false).unwrap(), Part::FatCardHolder);
    }

    #[test]
    fn test_shim_value_names() {
        assert_eq!(
            Part::from_str("unistrut-shim-1-16", false).unwrap(),
            Part::UnistrutShim1_16
        );
    }

    #[test]
    fn test_value_variants_cover_all() {
        assert_eq!(Part::value_variants(), &Part::ALL);
    }
}
