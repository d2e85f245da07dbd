//! Derived quantities computed from the primitive and auxiliary fields
//!
//! All operations are elementwise and generic over the array dimension, so the
//! per-snapshot path used while reading and a recompute over a full catalog
//! produce bit-identical results.

// crate modules
use crate::catalog::{AuxiliaryFields, Field4, FieldCatalog, GeometryFields, PrimitiveFields};
use crate::units::UnitTable;

// external crates
use log::warn;
use ndarray::{Array, ArrayView, Dimension, Zip};

/// Speed of light (cm/s)
pub const C_CM: f64 = 2.99792458e10;

/// Speed of light (km/s)
pub const C_KM: f64 = 2.99792458e5;

/// Quantities derived from the raw snapshot fields
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedFields {
    /// Lorentz factor W, only available with the spatial metric
    pub lorentz_factor: Option<Field4>,
    /// Specific enthalpy h, in units of c^2
    pub specific_enthalpy: Field4,
    /// Polytropic constant K = p / rho^Gamma
    pub polytropic_constant: Field4,
}

impl DerivedFields {
    /// Compute every derived field over whole arrays
    ///
    /// Used to recompute the derived fields of a catalog, for example after
    /// modifying the primitive data.
    pub fn compute(
        primitive: &PrimitiveFields,
        auxiliary: &AuxiliaryFields,
        geometry: Option<&GeometryFields>,
        units: &UnitTable,
    ) -> Self {
        let lorentz_factor = geometry.map(|geometry| {
            let beta_sq = squared_velocity(
                [
                    geometry.metric[0].data.view(),
                    geometry.metric[1].data.view(),
                    geometry.metric[2].data.view(),
                ],
                [
                    primitive.velocity[0].data.view(),
                    primitive.velocity[1].data.view(),
                    primitive.velocity[2].data.view(),
                ],
            );
            Field4::new("", lorentz_factor(beta_sq.view()))
        });

        let specific_enthalpy = Field4::new(
            "",
            specific_enthalpy(
                primitive.internal_energy_density.data.view(),
                auxiliary.pressure.data.view(),
                primitive.baryon_density.data.view(),
            ),
        );

        let polytropic_constant = Field4::new(
            units.polytropic_constant,
            polytropic_constant(
                auxiliary.pressure.data.view(),
                primitive.baryon_density.data.view(),
                auxiliary.gamma.data.view(),
            ),
        );

        Self {
            lorentz_factor,
            specific_enthalpy,
            polytropic_constant,
        }
    }

    /// Recompute the derived fields from the raw fields of a catalog
    pub fn recompute(catalog: &FieldCatalog) -> Self {
        Self::compute(
            &catalog.primitive,
            &catalog.auxiliary,
            catalog.geometry.as_ref(),
            &catalog.units,
        )
    }
}

/// Squared three-velocity normalised to the speed of light
///
/// `(g11 v1^2 + g22 v2^2 + g33 v3^2) / c^2`, with velocities in km/s.
pub fn squared_velocity<D: Dimension>(
    metric: [ArrayView<f64, D>; 3],
    velocity: [ArrayView<f64, D>; 3],
) -> Array<f64, D> {
    let [g11, g22, g33] = metric;
    let [v1, v2, v3] = velocity;

    (&g11 * &v1.mapv(|v| v * v) + &g22 * &v2.mapv(|v| v * v) + &g33 * &v3.mapv(|v| v * v))
        / (C_KM * C_KM)
}

/// Lorentz factor from the squared normalised velocity
///
/// Superluminal values are not guarded against. A squared velocity of 1 gives
/// infinity, and anything above gives NaN, which is logged but passed through.
pub fn lorentz_factor<D: Dimension>(beta_sq: ArrayView<f64, D>) -> Array<f64, D> {
    let w = beta_sq.mapv(lorentz_factor_scalar);

    let undefined = w.iter().filter(|v| !v.is_finite()).count();
    if undefined > 0 {
        warn!("Lorentz factor undefined for {undefined} nodes with v >= c");
    }
    w
}

/// Lorentz factor for a single squared normalised velocity
///
/// ```rust
/// # use thornado_fields::lorentz_factor_scalar;
/// assert_eq!(lorentz_factor_scalar(0.0), 1.0);
/// assert_eq!(lorentz_factor_scalar(1.0), f64::INFINITY);
/// assert!(lorentz_factor_scalar(1.5).is_nan());
/// ```
pub fn lorentz_factor_scalar(beta_sq: f64) -> f64 {
    1.0 / (1.0 - beta_sq).sqrt()
}

/// Specific enthalpy in units of c^2
///
/// `(c^2 + (e + p) / rho) / c^2` with c in cm/s.
pub fn specific_enthalpy<D: Dimension>(
    internal_energy: ArrayView<f64, D>,
    pressure: ArrayView<f64, D>,
    density: ArrayView<f64, D>,
) -> Array<f64, D> {
    Zip::from(&internal_energy)
        .and(&pressure)
        .and(&density)
        .map_collect(|&e, &p, &rho| (C_CM * C_CM + (e + p) / rho) / (C_CM * C_CM))
}

/// Polytropic constant `p / rho^Gamma`
pub fn polytropic_constant<D: Dimension>(
    pressure: ArrayView<f64, D>,
    density: ArrayView<f64, D>,
    gamma: ArrayView<f64, D>,
) -> Array<f64, D> {
    Zip::from(&pressure)
        .and(&density)
        .and(&gamma)
        .map_collect(|&p, &rho, &gm| polytropic_constant_scalar(p, rho, gm))
}

/// Polytropic constant for a single state
///
/// ```rust
/// # use thornado_fields::polytropic_constant_scalar;
/// let k = polytropic_constant_scalar(6.0e27, 7.0e9, 1.30);
/// assert_eq!(k, 6.0e27 / 7.0e9_f64.powf(1.30));
/// ```
pub fn polytropic_constant_scalar(pressure: f64, density: f64, gamma: f64) -> f64 {
    pressure / density.powf(gamma)
}
