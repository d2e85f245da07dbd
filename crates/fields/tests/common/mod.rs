//! Synthetic thornado containers for integration tests

#![allow(dead_code)]

use hdf5::Group;
use ndarray::{Array1, Array3};
use std::path::Path;
use thornado_fields::reader::schema;
use thornado_fields::{fluid_path, geometry_path};

/// Nodes along X1
pub const NX1: usize = 6;

/// Cells along X1
pub const NX1_C: usize = 2;

/// Velocity of every node in km/s
pub const V1: f64 = 0.1 * thornado_fields::C_KM;

/// Adiabatic index of every node
pub const GAMMA: f64 = 4.0 / 3.0;

/// Baryon density of each node for a snapshot
pub fn density(index: u32) -> Array1<f64> {
    Array1::from_iter((0..NX1).map(|i| 1.0e10 * (index as f64 + 1.0) / (i as f64 + 1.0)))
}

/// Pressure of each node for a snapshot
pub fn pressure(index: u32) -> Array1<f64> {
    density(index).mapv(|rho| 1.0e15 * rho.powf(GAMMA))
}

/// Radial node positions in km
pub fn x1() -> Array1<f64> {
    Array1::from_iter((0..NX1).map(|i| 10.0 * (i as f64 + 0.5)))
}

fn volume(values: &Array1<f64>) -> Array3<f64> {
    values.clone().into_shape_with_order((1, 1, NX1)).unwrap()
}

fn constant(value: f64) -> Array3<f64> {
    Array3::from_elem((1, 1, NX1), value)
}

fn write(group: &Group, name: &str, data: &Array3<f64>) {
    group.new_dataset_builder().with_data(data).create(name).unwrap();
}

fn write_1d(group: &Group, name: &str, data: &Array1<f64>) {
    group.new_dataset_builder().with_data(data).create(name).unwrap();
}

/// Write the fluid container for a snapshot
pub fn write_fluid(prefix: &str, index: u32) {
    let file = hdf5::File::create(fluid_path(prefix, index)).unwrap();

    // time in ms, one element
    write_1d(&file, schema::TIME, &Array1::from(vec![index as f64 * 0.5]));

    let grid = file.create_group(schema::SPATIAL_GRID).unwrap();
    let centres = Array1::from(vec![15.0, 45.0]);
    write_1d(&grid, schema::X1, &x1());
    write_1d(&grid, schema::X2, &Array1::from(vec![0.5]));
    write_1d(&grid, schema::X3, &Array1::from(vec![0.5]));
    write_1d(&grid, schema::X1_C, &centres);
    write_1d(&grid, schema::X2_C, &Array1::from(vec![0.5]));
    write_1d(&grid, schema::X3_C, &Array1::from(vec![0.5]));

    let ff = file.create_group(schema::FLUID_FIELDS).unwrap();
    let rho = volume(&density(index));
    let p = volume(&pressure(index));

    let pf = ff.create_group(schema::PRIMITIVE).unwrap();
    write(&pf, schema::PF_D, &rho);
    write(&pf, schema::PF_V[0], &constant(V1));
    write(&pf, schema::PF_V[1], &constant(0.0));
    write(&pf, schema::PF_V[2], &constant(0.0));
    write(&pf, schema::PF_E, &(&p * 3.0));
    write(&pf, schema::PF_NE, &(&rho * 0.5));

    let cf = ff.create_group(schema::CONSERVED).unwrap();
    write(&cf, schema::CF_D, &rho);
    for name in schema::CF_S {
        write(&cf, name, &constant(1.0));
    }
    write(&cf, schema::CF_E, &constant(2.0));
    write(&cf, schema::CF_NE, &constant(3.0));

    let af = ff.create_group(schema::AUXILIARY).unwrap();
    write(&af, schema::AF_P, &p);
    write(&af, schema::AF_CS, &constant(1.0e4));
    write(&af, schema::AF_GM, &constant(GAMMA));
    write(&af, schema::AF_YE, &constant(0.5));

    let df = ff.create_group(schema::DIAGNOSTIC).unwrap();
    write(&df, schema::DF_TCI, &constant(0.0));
    for name in schema::DF_SH {
        write(&df, name, &constant(0.0));
    }
}

/// Write the geometry container for a snapshot, with a flat metric
pub fn write_geometry(prefix: &str, index: u32) {
    let file = hdf5::File::create(geometry_path(prefix, index)).unwrap();
    let gf = file.create_group(schema::GEOMETRY_FIELDS).unwrap();

    write(&gf, schema::GF_PSI, &constant(1.0));
    write(&gf, schema::GF_ALPHA, &constant(1.0));
    write(&gf, schema::GF_PHI_N, &constant(-1.0e18));
    for name in schema::GF_BETA {
        write(&gf, name, &constant(0.0));
    }
    for name in schema::GF_GM {
        write(&gf, name, &constant(1.0));
    }
    for name in schema::GF_H {
        write(&gf, name, &constant(1.0));
    }
    write(&gf, schema::GF_SQRT_GM, &constant(1.0));
}

/// Write both containers for every snapshot, returning the path prefix
pub fn write_series(dir: &Path, indices: &[u32]) -> String {
    let prefix = dir.join("Collapse").display().to_string();
    for &index in indices {
        write_fluid(&prefix, index);
        write_geometry(&prefix, index);
    }
    prefix
}
