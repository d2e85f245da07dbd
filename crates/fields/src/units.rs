//! Display units for every physical quantity in a snapshot

// crate modules
use crate::coordinates::CoordinateSystem;
use crate::error::Result;

/// Display unit labels for each category of physical quantity
///
/// Units are labels only. No conversion factor is attached, and the data are
/// whatever thornado wrote to file. Consumers are responsible for any scaling.
///
/// With physical units enabled, the axis-dependent entries follow the role of
/// each axis in the [CoordinateSystem]. Angular axes get `rad`, angular rates
/// get `rad/s`, and the matching metric and scale factor entries pick up the
/// length dimensions that the angle drops.
///
/// ```rust
/// # use thornado_fields::{CoordinateSystem, UnitTable};
/// let units = UnitTable::new(CoordinateSystem::Spherical, true);
/// assert_eq!(units.position, ["km", "rad", "rad"]);
/// assert_eq!(units.velocity, ["km/s", "rad/s", "rad/s"]);
/// assert_eq!(units.sqrt_gm, "km**2");
///
/// // Every entry is empty for code units
/// let units = UnitTable::new(CoordinateSystem::Spherical, false);
/// assert_eq!(units.position, ["", "", ""]);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UnitTable {
    /// Simulation time
    pub time: &'static str,
    /// Baryon mass density, conserved and comoving
    pub mass_density: &'static str,
    /// Conserved energy and internal energy densities
    pub energy_density: &'static str,
    /// Electron number densities
    pub number_density: &'static str,
    /// Fluid pressure
    pub pressure: &'static str,
    /// Polytropic constant K = p / rho^Gamma
    pub polytropic_constant: &'static str,
    /// Coordinates X1, X2, X3
    pub position: [&'static str; 3],
    /// Conserved momentum density components
    pub momentum_density: [&'static str; 3],
    /// Three-velocity components
    pub velocity: [&'static str; 3],
    /// Spatial metric diagonal (11, 22, 33)
    pub metric: [&'static str; 3],
    /// Spatial scale factors (1, 2, 3)
    pub scale_factor: [&'static str; 3],
    /// Square root of the spatial metric determinant
    pub sqrt_gm: &'static str,
}

impl UnitTable {
    /// Build the table for a coordinate system
    ///
    /// All entries are empty strings when `physical_units` is false.
    pub fn new(coordinates: CoordinateSystem, physical_units: bool) -> Self {
        if !physical_units {
            return Self::default();
        }

        let common = Self {
            time: "ms",
            mass_density: "g/cm**3",
            energy_density: "erg/cm**3",
            number_density: "1/cm**3",
            pressure: "erg/cm**3",
            polytropic_constant: "erg/cm**3/(g/cm**3)**Gamma",
            ..Default::default()
        };

        match coordinates {
            CoordinateSystem::Cartesian => Self {
                position: ["km", "km", "km"],
                momentum_density: ["g/cm**2/s", "g/cm**2/s", "g/cm**2/s"],
                velocity: ["km/s", "km/s", "km/s"],
                metric: ["", "", ""],
                scale_factor: ["", "", ""],
                sqrt_gm: "",
                ..common
            },
            CoordinateSystem::Cylindrical => Self {
                position: ["km", "km", "rad"],
                momentum_density: ["g/cm**2/s", "g/cm**2/s", "g/cm/s"],
                velocity: ["km/s", "km/s", "rad/s"],
                metric: ["", "", "km**2"],
                scale_factor: ["", "", "km"],
                sqrt_gm: "km",
                ..common
            },
            CoordinateSystem::Spherical => Self {
                position: ["km", "rad", "rad"],
                momentum_density: ["g/cm**2/s", "g/cm/s", "g/cm/s"],
                velocity: ["km/s", "rad/s", "rad/s"],
                metric: ["", "km**2", "km**2"],
                scale_factor: ["", "km", "km"],
                sqrt_gm: "km**2",
                ..common
            },
        }
    }

    /// Build the table from a coordinate system tag such as 'SPHERICAL'
    ///
    /// An unrecognised tag is an error rather than an empty table.
    ///
    /// ```rust
    /// # use thornado_fields::UnitTable;
    /// assert!(UnitTable::from_tag("CYLINDRICAL", true).is_ok());
    /// assert!(UnitTable::from_tag("POLAR", true).is_err());
    /// ```
    pub fn from_tag(tag: &str, physical_units: bool) -> Result<Self> {
        Ok(Self::new(tag.parse()?, physical_units))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cartesian_units() {
        let units = UnitTable::new(CoordinateSystem::Cartesian, true);
        assert_eq!(units.time, "ms");
        assert_eq!(units.mass_density, "g/cm**3");
        assert_eq!(units.pressure, "erg/cm**3");
        assert_eq!(units.polytropic_constant, "erg/cm**3/(g/cm**3)**Gamma");
        assert_eq!(units.position, ["km", "km", "km"]);
        assert_eq!(units.momentum_density, ["g/cm**2/s"; 3]);
        assert_eq!(units.velocity, ["km/s"; 3]);
        assert_eq!(units.metric, [""; 3]);
        assert_eq!(units.scale_factor, [""; 3]);
        assert_eq!(units.sqrt_gm, "");
    }

    #[test]
    fn cylindrical_units() {
        let units = UnitTable::new(CoordinateSystem::Cylindrical, true);
        assert_eq!(units.position, ["km", "km", "rad"]);
        assert_eq!(units.momentum_density, ["g/cm**2/s", "g/cm**2/s", "g/cm/s"]);
        assert_eq!(units.velocity, ["km/s", "km/s", "rad/s"]);
        assert_eq!(units.metric, ["", "", "km**2"]);
        assert_eq!(units.scale_factor, ["", "", "km"]);
        assert_eq!(units.sqrt_gm, "km");
    }

    #[test]
    fn spherical_units() {
        let units = UnitTable::new(CoordinateSystem::Spherical, true);
        assert_eq!(units.position, ["km", "rad", "rad"]);
        assert_eq!(units.momentum_density, ["g/cm**2/s", "g/cm/s", "g/cm/s"]);
        assert_eq!(units.velocity, ["km/s", "rad/s", "rad/s"]);
        assert_eq!(units.metric, ["", "km**2", "km**2"]);
        assert_eq!(units.scale_factor, ["", "km", "km"]);
        assert_eq!(units.sqrt_gm, "km**2");
    }

    #[test]
    fn code_units_are_empty() {
        for coordinates in [
            CoordinateSystem::Cartesian,
            CoordinateSystem::Cylindrical,
            CoordinateSystem::Spherical,
        ] {
            assert_eq!(UnitTable::new(coordinates, false), UnitTable::default());
        }
    }

    #[test]
    fn angular_axes_match_units() {
        for coordinates in [
            CoordinateSystem::Cartesian,
            CoordinateSystem::Cylindrical,
            CoordinateSystem::Spherical,
        ] {
            let units = UnitTable::new(coordinates, true);
            for axis in 1..=3 {
                let expected = if coordinates.is_angular(axis) { "rad" } else { "km" };
                assert_eq!(units.position[axis - 1], expected);
            }
        }
    }

    #[test]
    fn unknown_tag() {
        assert!(UnitTable::from_tag("spherical", true).is_ok());
        assert!(UnitTable::from_tag("Toroidal", false).is_err());
    }
}
