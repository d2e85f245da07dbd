//! Integration tests for density decades of a field catalog

use ndarray::Array1;
use rstest::{fixture, rstest};
use thornado_decades::{DensityDecades, Error, DEFAULT_SUMMARY_FILE};
use thornado_fields::{CoordinateSystem, Field1, FieldCatalog, SpatialGrid, UnitTable};

fn grid(n1: usize) -> SpatialGrid {
    let axis = |n: usize| Field1::new("km", Array1::linspace(1.0, 2.0, n));
    SpatialGrid {
        x1: axis(n1),
        x2: axis(1),
        x3: axis(1),
        x1_c: axis(n1),
        x2_c: axis(1),
        x3_c: axis(1),
    }
}

/// Collapse reaching 10^14.5 g/cm^3 at the centre, then bouncing
#[fixture]
fn collapse() -> FieldCatalog {
    let central = [2.0e9, 3.0e10, 5.0e11, 2.0e12, 4.0e13, 3.0e14, 2.5e14];
    let units = UnitTable::new(CoordinateSystem::Spherical, true);
    let snapshots = (0..central.len() as u32).map(|i| 100 * i).collect();
    let mut catalog = FieldCatalog::zeros(snapshots, grid(4), units, false);

    for (i, rho) in central.into_iter().enumerate() {
        catalog.time.data[i] = 0.5 * i as f64;
        catalog.primitive.baryon_density.data[[i, 0, 0, 0]] = rho;
        // off-centre nodes never matter
        catalog.primitive.baryon_density.data[[i, 0, 0, 3]] = 1.0e16;
    }
    catalog
}

#[rstest]
fn central_density_only(collapse: FieldCatalog) {
    let decades = DensityDecades::from_catalog(&collapse).unwrap();
    assert_eq!(
        decades.positions(),
        vec![Some(1), Some(2), Some(3), Some(4), Some(5), None]
    );
    assert_eq!(decades.times()[4], Some(2.5));
    assert_eq!(decades.peak.value, 3.0e14);
    assert_eq!(decades.peak.position, 5);
    assert!(!decades.all_found());
}

#[rstest]
fn summary_file(collapse: FieldCatalog) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_SUMMARY_FILE);

    let decades = DensityDecades::from_catalog(&collapse).unwrap();
    let summary = decades.write_summary(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(summary, text);
    assert_eq!(
        text,
        "[1 2 3 4 5 none]\n\
         MaxDensity: 3.000e+14 g/cm^3\n      \
         tMax: 2.500e+00 ms\n    \
         indMax: 5"
    );
}

#[rstest]
fn json_record(collapse: FieldCatalog) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("densityDecades.json");

    let decades = DensityDecades::from_catalog(&collapse).unwrap();
    decades.write_json(&path).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["decades"].as_array().map(Vec::len), Some(6));
    assert_eq!(value["decades"][0]["hit"]["position"], 1);
    assert!(value["decades"][5]["hit"].is_null());
    assert_eq!(value["peak"]["position"], 5);
}

#[test]
fn empty_grid() {
    let units = UnitTable::new(CoordinateSystem::Spherical, true);
    let catalog = FieldCatalog::zeros(vec![0], grid(0), units, false);
    assert!(matches!(
        DensityDecades::from_catalog(&catalog),
        Err(Error::FieldsError(_))
    ));
}

#[test]
fn no_snapshots() {
    let units = UnitTable::new(CoordinateSystem::Spherical, true);
    let catalog = FieldCatalog::zeros(Vec::new(), grid(2), units, false);
    assert!(matches!(
        DensityDecades::from_catalog(&catalog),
        Err(Error::EmptySeries)
    ));
}
