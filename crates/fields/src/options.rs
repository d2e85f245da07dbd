//! Parameter block for a snapshot read
//!
//! Every analysis of a thornado run starts from the same handful of settings.
//! These can be kept in a JSON file next to the output:
//!
//! ```json
//! {
//!     "path_prefix": "Output/YahilCollapse",
//!     "snapshots": { "first": 0, "last": 625, "every": 25 },
//!     "coordinate_system": "spherical"
//! }
//! ```

// crate modules
use crate::catalog::FieldCatalog;
use crate::coordinates::CoordinateSystem;
use crate::error::Result;
use crate::reader::SnapshotReader;
use crate::snapshots::SnapshotSelection;

// standard library
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

// external crates
use log::debug;
use serde::{Deserialize, Serialize};

/// Settings for reading a series of snapshots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadOptions {
    /// Everything before `_FluidFields_######.h5`
    pub path_prefix: String,
    /// Snapshot indices to read
    pub snapshots: SnapshotSelection,
    /// Coordinate system of the mesh
    #[serde(default)]
    pub coordinate_system: CoordinateSystem,
    /// Attach physical unit labels
    #[serde(default = "enabled")]
    pub physical_units: bool,
    /// Read the geometry containers
    #[serde(default = "enabled")]
    pub geometry_fields: bool,
    /// Do not print the progress indicator
    #[serde(default)]
    pub disable_progress: bool,
}

fn enabled() -> bool {
    true
}

impl ReadOptions {
    /// Defaults for everything but the prefix and the snapshot range
    pub fn new(path_prefix: impl Into<String>, snapshots: SnapshotSelection) -> Self {
        Self {
            path_prefix: path_prefix.into(),
            snapshots,
            coordinate_system: CoordinateSystem::default(),
            physical_units: enabled(),
            geometry_fields: enabled(),
            disable_progress: false,
        }
    }

    /// Load options from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading read options from {}", path.display());
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parse options from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialise options to a pretty JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read the selected snapshots
    pub fn read(&self) -> Result<FieldCatalog> {
        SnapshotReader::from_options(self)?.read()
    }
}
