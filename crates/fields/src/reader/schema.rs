//! Fixed group and dataset names of the thornado HDF5 containers
//!
//! ```text
//! <prefix>_FluidFields_######.h5
//!     Time
//!     Spatial Grid/{X1, X2, X3, X1_C, X2_C, X3_C}
//!     Fluid Fields/Primitive/...
//!     Fluid Fields/Conserved/...
//!     Fluid Fields/Auxiliary/...
//!     Fluid Fields/Diagnostic/...
//!
//! <prefix>_GeometryFields_######.h5
//!     Geometry Fields/...
//! ```

pub const TIME: &str = "Time";

pub const SPATIAL_GRID: &str = "Spatial Grid";
pub const X1: &str = "X1";
pub const X2: &str = "X2";
pub const X3: &str = "X3";
pub const X1_C: &str = "X1_C";
pub const X2_C: &str = "X2_C";
pub const X3_C: &str = "X3_C";

pub const FLUID_FIELDS: &str = "Fluid Fields";
pub const PRIMITIVE: &str = "Primitive";
pub const CONSERVED: &str = "Conserved";
pub const AUXILIARY: &str = "Auxiliary";
pub const DIAGNOSTIC: &str = "Diagnostic";
pub const GEOMETRY_FIELDS: &str = "Geometry Fields";

// Fluid Fields/Primitive
pub const PF_D: &str = "Comoving Baryon Density";
pub const PF_V: [&str; 3] = [
    "Three-Velocity (1)",
    "Three-Velocity (2)",
    "Three-Velocity (3)",
];
pub const PF_E: &str = "Internal Energy Density";
pub const PF_NE: &str = "Comoving Electron Density";

// Fluid Fields/Conserved
pub const CF_D: &str = "Conserved Baryon Density";
pub const CF_S: [&str; 3] = [
    "Conserved Momentum Density (1)",
    "Conserved Momentum Density (2)",
    "Conserved Momentum Density (3)",
];
pub const CF_E: &str = "Conserved Energy Density";
pub const CF_NE: &str = "Conserved Electron Density";

// Fluid Fields/Auxiliary
pub const AF_P: &str = "Pressure";
pub const AF_CS: &str = "Sound Speed";
pub const AF_GM: &str = "Ratio of Specific Heats (Gamma)";
pub const AF_YE: &str = "Electron Fraction";

// Fluid Fields/Diagnostic
pub const DF_TCI: &str = "TCI";
pub const DF_SH: [&str; 3] = ["Shock (X1)", "Shock (X2)", "Shock (X3)"];

// Geometry Fields
pub const GF_PSI: &str = "Conformal Factor";
pub const GF_ALPHA: &str = "Lapse Function";
pub const GF_PHI_N: &str = "Newtonian Potential";
pub const GF_BETA: [&str; 3] = ["Shift Vector (1)", "Shift Vector (2)", "Shift Vector (3)"];
pub const GF_GM: [&str; 3] = [
    "Spatial Metric Component (11)",
    "Spatial Metric Component (22)",
    "Spatial Metric Component (33)",
];
pub const GF_H: [&str; 3] = [
    "Spatial Scale Factor (1)",
    "Spatial Scale Factor (2)",
    "Spatial Scale Factor (3)",
];
pub const GF_SQRT_GM: &str = "Sqrt Spatial Metric Determinant";
