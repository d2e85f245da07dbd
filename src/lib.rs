//! `thornado-tools` is a semi-modular toolkit for post-processing thornado
//! simulation snapshots
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use thornado_utils as utils;

#[cfg(feature = "fields")]
#[cfg_attr(docsrs, doc(cfg(feature = "fields")))]
#[doc(inline)]
pub use thornado_fields as fields;

#[cfg(feature = "average")]
#[cfg_attr(docsrs, doc(cfg(feature = "average")))]
#[doc(inline)]
pub use thornado_average as average;

#[cfg(feature = "decades")]
#[cfg_attr(docsrs, doc(cfg(feature = "decades")))]
#[doc(inline)]
pub use thornado_decades as decades;
