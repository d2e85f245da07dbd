//! Read thornado HDF5 snapshot containers
//!
//! Each snapshot of a thornado run is written as a pair of HDF5 containers,
//! named from a common path prefix and a zero-padded index:
//!
//! ```text
//! Output/YahilCollapse_FluidFields_000100.h5
//! Output/YahilCollapse_GeometryFields_000100.h5
//! ```
//!
//! The [SnapshotReader] collects any number of these into a single
//! [FieldCatalog], with the derived quantities computed as each snapshot is
//! loaded.
//!
//! For the common case [read_fields()] is all that is needed:
//!
//! ```rust, no_run
//! # use thornado_fields::{read_fields, CoordinateSystem};
//! let catalog = read_fields(
//!     "Output/YahilCollapse",
//!     &[0, 100, 200],
//!     CoordinateSystem::Spherical,
//!     true,
//! )
//! .unwrap();
//!
//! println!("{catalog}");
//! ```

pub mod schema;
mod snapshot;

#[doc(inline)]
pub use snapshot::SnapshotReader;

// crate modules
use crate::catalog::FieldCatalog;
use crate::coordinates::CoordinateSystem;
use crate::error::Result;

/// Read a list of snapshots with the geometry fields included
///
/// Convenience wrapper around [SnapshotReader]. Use the reader directly to
/// skip the geometry containers or silence the progress bar.
pub fn read_fields(
    path_prefix: &str,
    snapshots: &[u32],
    coordinates: CoordinateSystem,
    physical_units: bool,
) -> Result<FieldCatalog> {
    let mut reader = SnapshotReader::new(path_prefix);
    reader.set_snapshots(snapshots);
    reader.set_coordinate_system(coordinates);
    reader.use_physical_units(physical_units);
    reader.read()
}
