//! Coordinate systems used by thornado meshes

// crate modules
use crate::error::{Error, Result};

// external crates
use serde::{Deserialize, Serialize};

/// Coordinate system of the computational mesh, i.e. `Cartesian`, `Spherical`
///
/// Determines which of the X1, X2, X3 axes are lengths and which are angles,
/// and therefore the display units of every axis-dependent quantity.
///
/// Tags are parsed case-insensitively, so both the `'SPHERICAL'` used by the
/// native scripts and the `'spherical'` used by the AMReX scripts work.
///
/// ```rust
/// # use thornado_fields::CoordinateSystem;
/// let coordinates: CoordinateSystem = "SPHERICAL".parse().unwrap();
/// assert_eq!(coordinates, CoordinateSystem::Spherical);
/// assert!("polar".parse::<CoordinateSystem>().is_err());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum CoordinateSystem {
    /// (x, y, z) with every axis a length
    #[default]
    Cartesian,
    /// (R, z, phi) with an angular X3
    Cylindrical,
    /// (r, theta, phi) with angular X2 and X3
    Spherical,
}

impl CoordinateSystem {
    /// Tag as written by thornado, i.e. 'CARTESIAN', 'SPHERICAL'
    pub fn tag(&self) -> &str {
        match self {
            CoordinateSystem::Cartesian => "CARTESIAN",
            CoordinateSystem::Cylindrical => "CYLINDRICAL",
            CoordinateSystem::Spherical => "SPHERICAL",
        }
    }

    /// Whether the given axis (1, 2, or 3) is an angle
    ///
    /// ```rust
    /// # use thornado_fields::CoordinateSystem;
    /// assert!(!CoordinateSystem::Spherical.is_angular(1));
    /// assert!(CoordinateSystem::Spherical.is_angular(2));
    /// assert!(CoordinateSystem::Cylindrical.is_angular(3));
    /// ```
    pub fn is_angular(&self, axis: usize) -> bool {
        match self {
            CoordinateSystem::Cartesian => false,
            CoordinateSystem::Cylindrical => axis == 3,
            CoordinateSystem::Spherical => axis == 2 || axis == 3,
        }
    }
}

impl std::str::FromStr for CoordinateSystem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cartesian" => Ok(CoordinateSystem::Cartesian),
            "cylindrical" => Ok(CoordinateSystem::Cylindrical),
            "spherical" => Ok(CoordinateSystem::Spherical),
            _ => Err(Error::UnknownCoordinateSystem(s.to_string())),
        }
    }
}

impl TryFrom<String> for CoordinateSystem {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl std::fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}
