//! Layout module for tracking UI component regions
//!
//! `LayoutRegions` records where components were drawn on the last frame and
//! `region_at()` resolves a mouse position to the component under it.

mod layout_hit_test;
mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};

#[cfg(test)]
#[path = "layout/layout_hit_test_tests.rs"]
mod layout_hit_test_tests;
