// crate modules
use crate::error::{Error, Result};
use crate::quadrature::Quadrature;
use crate::table::CellAverageTable;

// thornado-tools modules
use thornado_fields::{polytropic_constant_scalar, Field1, Field4, FieldCatalog};
use thornado_utils::SliceExt;

// standard library
use std::path::Path;

// external crates
use log::{info, warn};
use ndarray::{Array1, Array2, Axis};

/// Name of the derived field averaged from the cell averages of its inputs
const POLYTROPIC_CONSTANT: &str = "PolytropicConstant";

/// Volume-weighted average of a nodal field over each cell
///
/// Nodes are grouped into consecutive cells of `quadrature.nodes()` values,
/// and each cell average is
///
/// ```text
/// sum(w * u * sqrt_gm) / sum(w * sqrt_gm)
/// ```
///
/// A cell with zero volume gives a non-finite average, which is logged.
///
/// ```rust
/// # use thornado_average::{cell_average, Quadrature};
/// let quadrature = Quadrature::new(2).unwrap();
/// let averages = cell_average(&[1.0, 3.0, 5.0, 5.0], &[1.0; 4], &quadrature).unwrap();
/// assert_eq!(averages, vec![2.0, 5.0]);
/// ```
pub fn cell_average(field: &[f64], sqrt_gm: &[f64], quadrature: &Quadrature) -> Result<Vec<f64>> {
    let nodes = quadrature.nodes();

    if sqrt_gm.len() != field.len() {
        return Err(Error::LengthMismatch {
            name: "sqrt_gm".to_string(),
            expected: field.len(),
            found: sqrt_gm.len(),
        });
    }

    if field.len() % nodes != 0 {
        return Err(Error::LengthMismatch {
            name: "nodal field".to_string(),
            expected: (field.len() / nodes + 1) * nodes,
            found: field.len(),
        });
    }

    let averages: Vec<f64> = field
        .chunks_exact(nodes)
        .zip(sqrt_gm.chunks_exact(nodes))
        .map(|(u, g)| {
            let mut total = 0.0;
            let mut volume = 0.0;
            for ((w, u), g) in quadrature.weights().iter().zip(u).zip(g) {
                total += w * u * g;
                volume += w * g;
            }
            total / volume
        })
        .collect();

    let undefined = averages.count_non_finite();
    if undefined > 0 {
        warn!("{undefined} cell averages are undefined, check for zero-volume cells");
    }

    Ok(averages)
}

/// Polytropic constant from cell-averaged pressure, density, and gamma
///
/// The average of a nodal `K = p / rho^Gamma` is not the same as `K` of the
/// averaged state, so the latter is built from three separate averages.
pub fn polytropic_cell_average(
    pressure: &[f64],
    density: &[f64],
    gamma: &[f64],
    sqrt_gm: &[f64],
    quadrature: &Quadrature,
) -> Result<Vec<f64>> {
    let p = cell_average(pressure, sqrt_gm, quadrature)?;
    let rho = cell_average(density, sqrt_gm, quadrature)?;
    let gm = cell_average(gamma, sqrt_gm, quadrature)?;

    Ok(p.iter()
        .zip(&rho)
        .zip(&gm)
        .map(|((&p, &rho), &gm)| polytropic_constant_scalar(p, rho, gm))
        .collect())
}

/// Cell averages of a field along X1 for every snapshot in a catalog
///
/// Only the first X3 and X2 index is used, as for the radial profiles of a
/// spherically symmetric run. The volume weighting comes from `GF_SqrtGm`, so
/// the geometry fields must have been read.
///
/// The special case `"PolytropicConstant"` is computed from the cell averages
/// of `AF_P`, `PF_D`, and `AF_Gm`, see [polytropic_cell_average()].
#[derive(Debug, Clone, PartialEq)]
pub struct CellAverages {
    /// Legacy short name of the averaged field, i.e. `PF_D`
    pub field: String,
    /// Display unit of the averaged field
    pub unit: &'static str,
    /// Cell-centre coordinates along X1
    pub cell_centres: Field1,
    /// Simulation time of each snapshot
    pub time: Field1,
    /// Averages shaped `(snapshots, cells)`
    pub data: Array2<f64>,
}

impl CellAverages {
    /// Compute the cell averages of field `name` for every snapshot
    pub fn from_catalog(catalog: &FieldCatalog, name: &str) -> Result<Self> {
        let quadrature = Quadrature::new(catalog.grid.nodes_per_cell())?;
        let sqrt_gm = catalog.field("GF_SqrtGm")?;
        let unit = catalog.field(name)?.unit;

        let n_snapshots = catalog.number_of_snapshots();
        let n_cells = catalog.grid.number_of_cells();
        info!("Computing cell averages of {name} ({n_snapshots} snapshots, {n_cells} cells)");

        let radial = |field: &str, i: usize| -> Result<Vec<f64>> {
            Ok(radial_profile(catalog.field(field)?, i))
        };

        let mut data = Array2::zeros((n_snapshots, n_cells));
        for i in 0..n_snapshots {
            let g = radial_profile(sqrt_gm, i);
            let averages = match name {
                POLYTROPIC_CONSTANT => polytropic_cell_average(
                    &radial("AF_P", i)?,
                    &radial("PF_D", i)?,
                    &radial("AF_Gm", i)?,
                    &g,
                    &quadrature,
                )?,
                _ => cell_average(&radial(name, i)?, &g, &quadrature)?,
            };

            if averages.len() != n_cells {
                return Err(Error::LengthMismatch {
                    name: "X1_C".to_string(),
                    expected: averages.len(),
                    found: n_cells,
                });
            }
            data.row_mut(i).assign(&Array1::from(averages));
        }

        Ok(Self {
            field: name.to_string(),
            unit,
            cell_centres: catalog.grid.x1_c.clone(),
            time: catalog.time.clone(),
            data,
        })
    }

    /// Number of cells along X1
    pub fn number_of_cells(&self) -> usize {
        self.data.ncols()
    }

    /// Number of snapshots
    pub fn number_of_snapshots(&self) -> usize {
        self.data.nrows()
    }

    /// Convert to the plain table written to disk
    pub fn to_table(&self) -> Result<CellAverageTable> {
        CellAverageTable::new(
            self.cell_centres.data.clone(),
            self.time.data.clone(),
            self.data.clone(),
        )
    }

    /// Write the averages as a text table, see [CellAverageTable]
    pub fn write_table<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.to_table()?.write(path)
    }
}

/// Values along X1 at the first X3 and X2 index of snapshot `i`
fn radial_profile(field: &Field4, i: usize) -> Vec<f64> {
    field
        .data
        .index_axis(Axis(0), i)
        .index_axis(Axis(0), 0)
        .index_axis(Axis(0), 0)
        .to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    fn constant_field(#[case] nodes: usize) {
        let quadrature = Quadrature::new(nodes).unwrap();
        let field = vec![4.2e11; 4 * nodes];
        let sqrt_gm: Vec<f64> = (0..4 * nodes).map(|i| (i as f64 + 1.0).powi(2)).collect();

        let averages = cell_average(&field, &sqrt_gm, &quadrature).unwrap();
        assert_eq!(averages.len(), 4);
        for average in averages {
            assert!((average / 4.2e11 - 1.0).abs() < 1.0e-14);
        }
    }

    #[test]
    fn volume_weighting() {
        // second node carries all the volume
        let quadrature = Quadrature::new(2).unwrap();
        let averages = cell_average(&[1.0, 3.0], &[0.0, 2.0], &quadrature).unwrap();
        assert_eq!(averages, vec![3.0]);
    }

    #[test]
    fn gauss_weights_applied() {
        let quadrature = Quadrature::new(3).unwrap();
        let averages = cell_average(&[0.0, 18.0, 0.0], &[1.0; 3], &quadrature).unwrap();
        assert!((averages[0] - 8.0).abs() < 1.0e-14);
    }

    #[test]
    fn zero_volume_is_undefined() {
        let quadrature = Quadrature::new(1).unwrap();
        let averages = cell_average(&[1.0, 2.0], &[1.0, 0.0], &quadrature).unwrap();
        assert_eq!(averages[0], 1.0);
        assert!(averages[1].is_nan());
    }

    #[test]
    fn length_mismatch() {
        let quadrature = Quadrature::new(3).unwrap();
        assert!(matches!(
            cell_average(&[1.0; 6], &[1.0; 5], &quadrature),
            Err(Error::LengthMismatch { .. })
        ));
        assert!(matches!(
            cell_average(&[1.0; 5], &[1.0; 5], &quadrature),
            Err(Error::LengthMismatch { expected: 6, found: 5, .. })
        ));
    }

    #[test]
    fn radial_profile_first_row() {
        let data = ndarray::Array4::from_shape_fn((2, 1, 2, 3), |(i, _, j, k)| {
            (100 * i + 10 * j + k) as f64
        });
        let field = Field4::new("", data);
        assert_eq!(radial_profile(&field, 0), vec![0.0, 1.0, 2.0]);
        assert_eq!(radial_profile(&field, 1), vec![100.0, 101.0, 102.0]);
    }

    #[test]
    fn polytropic_from_averages() {
        let quadrature = Quadrature::new(2).unwrap();
        let p = [1.0e27, 3.0e27];
        let rho = [1.0e9, 3.0e9];
        let gm = [1.3, 1.3];
        let g = [1.0, 1.0];

        let k = polytropic_cell_average(&p, &rho, &gm, &g, &quadrature).unwrap();
        let expected = polytropic_constant_scalar(2.0e27, 2.0e9, 1.3);
        assert!((k[0] / expected - 1.0).abs() < 1.0e-14);

        // not the average of the nodal values
        let nodal = 0.5
            * (polytropic_constant_scalar(p[0], rho[0], gm[0])
                + polytropic_constant_scalar(p[1], rho[1], gm[1]));
        assert!((k[0] / nodal - 1.0).abs() > 1.0e-6);
    }
}
