//! Density decade crossings of thornado collapse runs
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod decades;
mod error;

#[doc(inline)]
pub use decades::{
    Decade, DecadeHit, DensityDecades, Peak, DEFAULT_SUMMARY_FILE, DENSITY_DECADES,
};

#[doc(inline)]
pub use error::{Error, Result};
