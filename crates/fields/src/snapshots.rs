//! Snapshot selection and container naming

// crate modules
use crate::error::{Error, Result};

// thornado-tools modules
use thornado_utils::f;

// standard library
use std::path::PathBuf;

// external crates
use serde::{Deserialize, Serialize};

/// Number of digits in the zero-padded snapshot index of a file name
pub const INDEX_WIDTH: usize = 6;

/// Inclusive range of snapshot indices with a stride
///
/// Equivalent to the `SnapshotRange` and `plotEvery` pair that every analysis
/// script carries in its parameter block.
///
/// ```rust
/// # use thornado_fields::SnapshotSelection;
/// let selection = SnapshotSelection::new(0, 10).every(4);
/// assert_eq!(selection.indices().unwrap(), vec![0, 4, 8]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotSelection {
    /// First snapshot index
    pub first: u32,
    /// Last snapshot index, included
    pub last: u32,
    /// Only use every n-th snapshot
    #[serde(default = "default_stride")]
    pub every: u32,
}

fn default_stride() -> u32 {
    1
}

impl SnapshotSelection {
    /// Every snapshot from `first` to `last` inclusive
    pub fn new(first: u32, last: u32) -> Self {
        Self {
            first,
            last,
            every: default_stride(),
        }
    }

    /// Set the stride
    pub fn every(mut self, every: u32) -> Self {
        self.every = every;
        self
    }

    /// Expand to the list of snapshot indices
    ///
    /// Fails for a zero stride or a range that runs backwards.
    pub fn indices(&self) -> Result<Vec<u32>> {
        if self.every == 0 || self.last < self.first {
            return Err(Error::InvalidSelection {
                first: self.first,
                last: self.last,
                every: self.every,
            });
        }

        Ok((self.first..=self.last)
            .step_by(self.every as usize)
            .collect())
    }
}

/// Path to the fluid fields container of a snapshot
///
/// ```rust
/// # use thornado_fields::fluid_path;
/// let path = fluid_path("Output/YahilCollapse", 42);
/// assert_eq!(path.to_str(), Some("Output/YahilCollapse_FluidFields_000042.h5"));
/// ```
pub fn fluid_path(path_prefix: &str, index: u32) -> PathBuf {
    container_path(path_prefix, "FluidFields", index)
}

/// Path to the geometry fields container of a snapshot
///
/// ```rust
/// # use thornado_fields::geometry_path;
/// let path = geometry_path("Output/YahilCollapse", 1100);
/// assert_eq!(path.to_str(), Some("Output/YahilCollapse_GeometryFields_001100.h5"));
/// ```
pub fn geometry_path(path_prefix: &str, index: u32) -> PathBuf {
    container_path(path_prefix, "GeometryFields", index)
}

fn container_path(path_prefix: &str, kind: &str, index: u32) -> PathBuf {
    PathBuf::from(f!(
        "{path_prefix}_{kind}_{index:0>width$}.h5",
        width = INDEX_WIDTH
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_range() {
        let selection = SnapshotSelection::new(3, 6);
        assert_eq!(selection.indices().unwrap(), vec![3, 4, 5, 6]);
    }

    #[test]
    fn single_snapshot() {
        let selection = SnapshotSelection::new(7, 7).every(5);
        assert_eq!(selection.indices().unwrap(), vec![7]);
    }

    #[test]
    fn stride_keeps_first() {
        let selection = SnapshotSelection::new(0, 625).every(100);
        assert_eq!(
            selection.indices().unwrap(),
            vec![0, 100, 200, 300, 400, 500, 600]
        );
    }

    #[test]
    fn invalid_selections() {
        assert!(SnapshotSelection::new(0, 10).every(0).indices().is_err());
        assert!(SnapshotSelection::new(10, 0).indices().is_err());
    }

    #[test]
    fn wide_indices_are_not_truncated() {
        let path = fluid_path("run", 1234567);
        assert_eq!(path.to_str(), Some("run_FluidFields_1234567.h5"));
    }
}
