//! Typed collection of every field read from a series of snapshots

// crate modules
use crate::derived::DerivedFields;
use crate::error::{Error, Result};
use crate::grid::SpatialGrid;
use crate::units::UnitTable;

// thornado-tools modules
use thornado_utils::{f, SliceExt, ValueExt};

// external crates
use ndarray::{Array, Array1, Array4, Axis, Dimension, Ix1, Ix4};

/// A physical quantity with its display unit
///
/// The unit is a label only, see [UnitTable].
#[derive(Debug, Clone, PartialEq)]
pub struct Field<D: Dimension> {
    /// Display unit, empty for dimensionless or code units
    pub unit: &'static str,
    /// Values, indexed `[snapshot, X3, X2, X1]` for volume fields
    pub data: Array<f64, D>,
}

/// One value per snapshot, or one value per grid point along an axis
pub type Field1 = Field<Ix1>;

/// Volume field for every snapshot, shaped `(snapshots, nX3, nX2, nX1)`
pub type Field4 = Field<Ix4>;

impl<D: Dimension> Field<D> {
    /// Wrap existing data with a unit
    pub fn new(unit: &'static str, data: Array<f64, D>) -> Self {
        Self { unit, data }
    }

    /// Minimum and maximum of the data
    ///
    /// `None` if the field is empty or contains non-finite values, the same
    /// conditions that make a colour scale or axis limit meaningless.
    pub fn range(&self) -> Option<(f64, f64)> {
        let values = self.data.as_slice_memory_order()?;
        Some((values.try_min().ok()?, values.try_max().ok()?))
    }
}

impl Field4 {
    /// Zero-initialised volume field for `snapshots` snapshots of `grid`
    pub fn zeros(unit: &'static str, snapshots: usize, grid: &SpatialGrid) -> Self {
        let (n3, n2, n1) = grid.shape();
        Self::new(unit, Array4::zeros((snapshots, n3, n2, n1)))
    }
}

/// Primitive fluid variables
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveFields {
    /// Comoving baryon density (PF_D)
    pub baryon_density: Field4,
    /// Three-velocity components (PF_V1, PF_V2, PF_V3)
    pub velocity: [Field4; 3],
    /// Internal energy density (PF_E)
    pub internal_energy_density: Field4,
    /// Comoving electron density (PF_Ne)
    pub electron_density: Field4,
}

/// Conserved fluid variables
#[derive(Debug, Clone, PartialEq)]
pub struct ConservedFields {
    /// Conserved baryon density (CF_D)
    pub baryon_density: Field4,
    /// Conserved momentum density components (CF_S1, CF_S2, CF_S3)
    pub momentum_density: [Field4; 3],
    /// Conserved energy density (CF_E)
    pub energy_density: Field4,
    /// Conserved electron density (CF_Ne)
    pub electron_density: Field4,
}

/// Equation of state and other auxiliary fluid variables
#[derive(Debug, Clone, PartialEq)]
pub struct AuxiliaryFields {
    /// Pressure (AF_P)
    pub pressure: Field4,
    /// Sound speed (AF_Cs)
    pub sound_speed: Field4,
    /// Ratio of specific heats (AF_Gm)
    pub gamma: Field4,
    /// Electron fraction (AF_Ye)
    pub electron_fraction: Field4,
}

/// Troubled-cell and shock detector output
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticFields {
    /// Troubled-cell indicator (DF_TCI)
    pub troubled_cell_indicator: Field4,
    /// Shock detector per direction (DF_Sh_X1, DF_Sh_X2, DF_Sh_X3)
    pub shock: [Field4; 3],
}

/// Spacetime metric quantities from the geometry containers
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryFields {
    /// Conformal factor (GF_Psi)
    pub conformal_factor: Field4,
    /// Lapse function (GF_Alpha)
    pub lapse: Field4,
    /// Newtonian potential (GF_Phi_N)
    pub newtonian_potential: Field4,
    /// Shift vector components (GF_Beta_1, GF_Beta_2, GF_Beta_3)
    pub shift: [Field4; 3],
    /// Spatial metric diagonal (GF_Gm_11, GF_Gm_22, GF_Gm_33)
    pub metric: [Field4; 3],
    /// Spatial scale factors (GF_h_1, GF_h_2, GF_h_3)
    pub scale_factor: [Field4; 3],
    /// Square root of the spatial metric determinant (GF_SqrtGm)
    pub sqrt_gm: Field4,
}

/// Every field read for a series of snapshots
///
/// A typed record of all quantities in the thornado output. Fields are grouped
/// the way they are stored in the snapshot containers, and every volume field
/// shares the same `(snapshots, nX3, nX2, nX1)` shape.
///
/// The geometry fields are only present when the geometry containers were
/// read, and the Lorentz factor depends on them.
///
/// For configuration-driven code the legacy short names (`"PF_D"`,
/// `"GF_SqrtGm"`, etc...) are available through [FieldCatalog::field()].
#[derive(Debug, Clone, PartialEq)]
pub struct FieldCatalog {
    /// Snapshot indices in the order they were read
    pub snapshots: Vec<u32>,
    /// Units used for every field
    pub units: UnitTable,
    /// Simulation time of each snapshot
    pub time: Field1,
    /// Node and cell-centre coordinates, taken from the first snapshot
    pub grid: SpatialGrid,
    /// Primitive variables
    pub primitive: PrimitiveFields,
    /// Conserved variables
    pub conserved: ConservedFields,
    /// Auxiliary variables
    pub auxiliary: AuxiliaryFields,
    /// Diagnostic variables
    pub diagnostic: DiagnosticFields,
    /// Geometry variables, if requested
    pub geometry: Option<GeometryFields>,
    /// Quantities derived from the above
    pub derived: DerivedFields,
}

/// Legacy short names of every volume field, in catalog order
pub const FIELD_NAMES: [&str; 36] = [
    "CF_D",
    "CF_S1",
    "CF_S2",
    "CF_S3",
    "CF_E",
    "CF_Ne",
    "PF_D",
    "PF_V1",
    "PF_V2",
    "PF_V3",
    "PF_E",
    "PF_Ne",
    "AF_P",
    "AF_Cs",
    "AF_Gm",
    "AF_Ye",
    "GF_Psi",
    "GF_Alpha",
    "GF_Phi_N",
    "GF_Beta_1",
    "GF_Beta_2",
    "GF_Beta_3",
    "GF_Gm_11",
    "GF_Gm_22",
    "GF_Gm_33",
    "GF_h_1",
    "GF_h_2",
    "GF_h_3",
    "GF_SqrtGm",
    "DF_TCI",
    "DF_Sh_X1",
    "DF_Sh_X2",
    "DF_Sh_X3",
    "LorentzFactor",
    "SpecificEnthalpy",
    "PolytropicConstant",
];

/// Legacy short names of the time and coordinate axes
pub const AXIS_NAMES: [&str; 7] = ["Time", "X1", "X2", "X3", "X1_C", "X2_C", "X3_C"];

impl FieldCatalog {
    /// Zero-initialised catalog for a series of snapshots on `grid`
    ///
    /// Every field is allocated up front with the units from `units`. The
    /// geometry fields and the Lorentz factor are only allocated when
    /// `with_geometry` is set.
    pub fn zeros(
        snapshots: Vec<u32>,
        grid: SpatialGrid,
        units: UnitTable,
        with_geometry: bool,
    ) -> Self {
        let n = snapshots.len();
        let zeros = |unit: &'static str| Field4::zeros(unit, n, &grid);
        let zeros3 = |unit: [&'static str; 3]| unit.map(zeros);

        let primitive = PrimitiveFields {
            baryon_density: zeros(units.mass_density),
            velocity: zeros3(units.velocity),
            internal_energy_density: zeros(units.energy_density),
            electron_density: zeros(units.number_density),
        };

        let conserved = ConservedFields {
            baryon_density: zeros(units.mass_density),
            momentum_density: zeros3(units.momentum_density),
            energy_density: zeros(units.energy_density),
            electron_density: zeros(units.number_density),
        };

        let auxiliary = AuxiliaryFields {
            pressure: zeros(units.pressure),
            sound_speed: zeros(units.velocity[0]),
            gamma: zeros(""),
            electron_fraction: zeros(""),
        };

        let diagnostic = DiagnosticFields {
            troubled_cell_indicator: zeros(""),
            shock: zeros3([""; 3]),
        };

        let geometry = with_geometry.then(|| GeometryFields {
            conformal_factor: zeros(""),
            lapse: zeros(""),
            newtonian_potential: zeros(""),
            shift: zeros3(units.velocity),
            metric: zeros3(units.metric),
            scale_factor: zeros3(units.scale_factor),
            sqrt_gm: zeros(units.sqrt_gm),
        });

        let derived = DerivedFields {
            lorentz_factor: with_geometry.then(|| zeros("")),
            specific_enthalpy: zeros(""),
            polytropic_constant: zeros(units.polytropic_constant),
        };

        Self {
            snapshots,
            units,
            time: Field1::new(units.time, Array1::zeros(n)),
            primitive,
            conserved,
            auxiliary,
            diagnostic,
            geometry,
            derived,
            grid,
        }
    }

    /// Number of snapshots in the catalog
    pub fn number_of_snapshots(&self) -> usize {
        self.snapshots.len()
    }

    /// Look up a volume field by its legacy short name
    ///
    /// Fails with [Error::UnknownField] for a name not in [FIELD_NAMES], and
    /// with [Error::FieldNotLoaded] for geometry-dependent fields when the
    /// geometry containers were not read.
    pub fn field(&self, name: &str) -> Result<&Field4> {
        let field = match name {
            "CF_D" => Some(&self.conserved.baryon_density),
            "CF_S1" => Some(&self.conserved.momentum_density[0]),
            "CF_S2" => Some(&self.conserved.momentum_density[1]),
            "CF_S3" => Some(&self.conserved.momentum_density[2]),
            "CF_E" => Some(&self.conserved.energy_density),
            "CF_Ne" => Some(&self.conserved.electron_density),
            "PF_D" => Some(&self.primitive.baryon_density),
            "PF_V1" => Some(&self.primitive.velocity[0]),
            "PF_V2" => Some(&self.primitive.velocity[1]),
            "PF_V3" => Some(&self.primitive.velocity[2]),
            "PF_E" => Some(&self.primitive.internal_energy_density),
            "PF_Ne" => Some(&self.primitive.electron_density),
            "AF_P" => Some(&self.auxiliary.pressure),
            "AF_Cs" => Some(&self.auxiliary.sound_speed),
            "AF_Gm" => Some(&self.auxiliary.gamma),
            "AF_Ye" => Some(&self.auxiliary.electron_fraction),
            "GF_Psi" => self.geometry.as_ref().map(|g| &g.conformal_factor),
            "GF_Alpha" => self.geometry.as_ref().map(|g| &g.lapse),
            "GF_Phi_N" => self.geometry.as_ref().map(|g| &g.newtonian_potential),
            "GF_Beta_1" => self.geometry.as_ref().map(|g| &g.shift[0]),
            "GF_Beta_2" => self.geometry.as_ref().map(|g| &g.shift[1]),
            "GF_Beta_3" => self.geometry.as_ref().map(|g| &g.shift[2]),
            "GF_Gm_11" => self.geometry.as_ref().map(|g| &g.metric[0]),
            "GF_Gm_22" => self.geometry.as_ref().map(|g| &g.metric[1]),
            "GF_Gm_33" => self.geometry.as_ref().map(|g| &g.metric[2]),
            "GF_h_1" => self.geometry.as_ref().map(|g| &g.scale_factor[0]),
            "GF_h_2" => self.geometry.as_ref().map(|g| &g.scale_factor[1]),
            "GF_h_3" => self.geometry.as_ref().map(|g| &g.scale_factor[2]),
            "GF_SqrtGm" => self.geometry.as_ref().map(|g| &g.sqrt_gm),
            "DF_TCI" => Some(&self.diagnostic.troubled_cell_indicator),
            "DF_Sh_X1" => Some(&self.diagnostic.shock[0]),
            "DF_Sh_X2" => Some(&self.diagnostic.shock[1]),
            "DF_Sh_X3" => Some(&self.diagnostic.shock[2]),
            "LorentzFactor" => self.derived.lorentz_factor.as_ref(),
            "SpecificEnthalpy" => Some(&self.derived.specific_enthalpy),
            "PolytropicConstant" => Some(&self.derived.polytropic_constant),
            _ => return Err(Error::UnknownField(name.to_string())),
        };

        field.ok_or_else(|| Error::FieldNotLoaded(name.to_string()))
    }

    /// Look up the time or a coordinate axis by its legacy short name
    ///
    /// The 1D companion of [FieldCatalog::field()] for the names in
    /// [AXIS_NAMES].
    pub fn axis(&self, name: &str) -> Result<&Field1> {
        match name {
            "Time" => Ok(&self.time),
            "X1" => Ok(&self.grid.x1),
            "X2" => Ok(&self.grid.x2),
            "X3" => Ok(&self.grid.x3),
            "X1_C" => Ok(&self.grid.x1_c),
            "X2_C" => Ok(&self.grid.x2_c),
            "X3_C" => Ok(&self.grid.x3_c),
            _ => Err(Error::UnknownField(name.to_string())),
        }
    }

    /// Values of a volume field at a single spatial index for every snapshot
    ///
    /// Index order is `(iX3, iX2, iX1)`. For example, the central density of a
    /// spherically symmetric run is `catalog.trace("PF_D", (0, 0, 0))`.
    pub fn trace(&self, name: &str, index: (usize, usize, usize)) -> Result<Array1<f64>> {
        let field = self.field(name)?;
        let (i3, i2, i1) = index;
        let shape = field.data.shape();
        if i3 >= shape[1] || i2 >= shape[2] || i1 >= shape[3] {
            return Err(Error::IndexOutOfBounds {
                index: vec![i3, i2, i1],
                shape: shape[1..].to_vec(),
            });
        }
        Ok(field
            .data
            .index_axis(Axis(3), i1)
            .index_axis(Axis(2), i2)
            .index_axis(Axis(1), i3)
            .to_owned())
    }
}

impl std::fmt::Display for FieldCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let (n3, n2, n1) = self.grid.shape();
        writeln!(f, "FieldCatalog {{")?;
        writeln!(f, "    snapshots: {}", self.number_of_snapshots())?;
        writeln!(f, "    grid: {n3}x{n2}x{n1} ({} nodes per cell)", self.grid.nodes_per_cell())?;
        for name in FIELD_NAMES {
            // skipped fields simply do not appear in the summary
            let Ok(field) = self.field(name) else {
                continue;
            };
            let range = match field.range() {
                Some((lo, hi)) => f!("{} - {}", lo.sci(3, 2), hi.sci(3, 2)),
                None => "undefined".to_string(),
            };
            writeln!(f, "    {name:<18} [{:^26}] {range}", field.unit)?;
        }
        write!(f, "}}")
    }
}
