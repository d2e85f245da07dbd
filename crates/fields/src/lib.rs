//! Field catalogs read from thornado HDF5 snapshots
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod catalog;
mod coordinates;
mod derived;
mod error;
mod grid;
mod options;
mod snapshots;
mod units;

pub mod reader;

// inline the reader-facing types for a nice public API
#[doc(inline)]
pub use reader::{read_fields, SnapshotReader};

#[doc(inline)]
pub use options::ReadOptions;

#[doc(inline)]
pub use snapshots::{fluid_path, geometry_path, SnapshotSelection, INDEX_WIDTH};

#[doc(inline)]
pub use coordinates::CoordinateSystem;

#[doc(inline)]
pub use units::UnitTable;

#[doc(inline)]
pub use grid::SpatialGrid;

#[doc(inline)]
pub use catalog::{
    AuxiliaryFields, ConservedFields, DiagnosticFields, Field, Field1, Field4, FieldCatalog,
    GeometryFields, PrimitiveFields, AXIS_NAMES, FIELD_NAMES,
};

#[doc(inline)]
pub use derived::{
    lorentz_factor, lorentz_factor_scalar, polytropic_constant, polytropic_constant_scalar,
    specific_enthalpy, squared_velocity, DerivedFields, C_CM, C_KM,
};

#[doc(inline)]
pub use error::{Error, Result};
