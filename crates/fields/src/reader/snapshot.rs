// crate modules
use crate::catalog::{Field1, Field4, FieldCatalog, GeometryFields};
use crate::coordinates::CoordinateSystem;
use crate::derived;
use crate::error::{Error, Result};
use crate::grid::SpatialGrid;
use crate::options::ReadOptions;
use crate::reader::schema;
use crate::snapshots::{fluid_path, geometry_path};
use crate::units::UnitTable;

// standard library
use std::path::Path;

// external crates
use hdf5::Group;
use kdam::{Bar, BarBuilder, BarExt};
use log::{debug, info};
use ndarray::{Array3, ArrayView3, Axis, Ix3};

/// Reader for a series of thornado HDF5 snapshots
///
/// Every requested snapshot is read into a single [FieldCatalog], with all
/// volume fields held in memory at once.
///
/// The reader operates in three stages:
///
/// - Read the spatial grid from the first fluid container
/// - Allocate every field for the full series
/// - Fill each snapshot in turn, computing the derived fields as it goes
///
/// Notes:
///
/// - The grid is assumed static and is only read once
/// - Geometry containers are read by default, as the Lorentz factor and cell
///   averages depend on them
/// - Any missing container, group, or dataset is an error
///
/// Minimal Example:
/// ```rust, no_run
/// # use thornado_fields::{reader::SnapshotReader, CoordinateSystem};
/// let mut reader = SnapshotReader::new("Output/YahilCollapse");
/// reader.set_snapshots(&[0, 100, 200]);
/// reader.set_coordinate_system(CoordinateSystem::Spherical);
/// let catalog = reader.read().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct SnapshotReader {
    /// Everything before `_FluidFields_######.h5`
    path_prefix: String,
    /// Snapshot indices to read, in order
    snapshots: Vec<u32>,
    /// Coordinate system of the mesh, for units
    coordinates: CoordinateSystem,
    /// Attach physical unit labels?
    physical_units: bool,
    /// Read the geometry containers?
    geometry_fields: bool,
    /// Disable progress bar?
    disable_progress: bool,
}

impl Default for SnapshotReader {
    fn default() -> Self {
        Self {
            path_prefix: String::new(),
            snapshots: Vec::new(),
            coordinates: CoordinateSystem::Cartesian,
            physical_units: true,
            geometry_fields: true,
            disable_progress: false,
        }
    }
}

// ! ------------------------------------------------------------------------
// !                                Public API
// ! ------------------------------------------------------------------------

impl SnapshotReader {
    /// New reader for the containers starting with `path_prefix`
    pub fn new(path_prefix: impl Into<String>) -> Self {
        Self {
            path_prefix: path_prefix.into(),
            ..Default::default()
        }
    }

    /// Build a reader from a parameter block
    pub fn from_options(options: &ReadOptions) -> Result<Self> {
        Ok(Self {
            path_prefix: options.path_prefix.clone(),
            snapshots: options.snapshots.indices()?,
            coordinates: options.coordinate_system,
            physical_units: options.physical_units,
            geometry_fields: options.geometry_fields,
            disable_progress: options.disable_progress,
        })
    }

    /// Setter for the snapshot indices to read
    pub fn set_snapshots(&mut self, snapshots: &[u32]) {
        self.snapshots = snapshots.to_vec();
    }

    /// Setter for the coordinate system used for units
    pub fn set_coordinate_system(&mut self, coordinates: CoordinateSystem) {
        self.coordinates = coordinates;
    }

    /// Attach physical unit labels (default) or leave them empty
    pub fn use_physical_units(&mut self, physical_units: bool) {
        self.physical_units = physical_units;
    }

    /// Read the geometry containers (default) or skip them
    pub fn use_geometry_fields(&mut self, geometry_fields: bool) {
        self.geometry_fields = geometry_fields;
    }

    /// Do not print the progress indicator
    pub fn disable_progress(&mut self) {
        self.disable_progress = true;
    }

    /// Read every requested snapshot into a [FieldCatalog]
    pub fn read(&self) -> Result<FieldCatalog> {
        let first = *self.snapshots.first().ok_or(Error::NoSnapshots)?;
        let units = UnitTable::new(self.coordinates, self.physical_units);

        info!(
            "Reading {} snapshots of \"{}\" ({})",
            self.snapshots.len(),
            self.path_prefix,
            self.coordinates
        );

        let path = fluid_path(&self.path_prefix, first);
        let grid = read_grid(&open_container(&path)?, &path, &units)?;
        let mut catalog =
            FieldCatalog::zeros(self.snapshots.clone(), grid, units, self.geometry_fields);

        let mut progress_bar = self.init_progress_bar()?;

        for (i, &index) in self.snapshots.iter().enumerate() {
            if let Some(geometry) = catalog.geometry.as_mut() {
                self.load_geometry(geometry, i, index)?;
            }
            self.load_fluid(&mut catalog, i, index)?;
            compute_derived(&mut catalog, i);
            progress_bar.update(1)?;
        }

        // need an extra line for clean spacing if the progress bar is printed
        if !self.disable_progress {
            eprintln!()
        };

        Ok(catalog)
    }
}

// ! ------------------------------------------------------------------------
// !                          Per-snapshot loading
// ! ------------------------------------------------------------------------

impl SnapshotReader {
    /// Fill slot `i` of the geometry fields from snapshot `index`
    fn load_geometry(&self, geometry: &mut GeometryFields, i: usize, index: u32) -> Result<()> {
        let path = geometry_path(&self.path_prefix, index);
        let file = open_container(&path)?;
        let gf = group(&file, schema::GEOMETRY_FIELDS, &path)?;

        load(&mut geometry.conformal_factor, i, &gf, schema::GF_PSI, &path)?;
        load(&mut geometry.lapse, i, &gf, schema::GF_ALPHA, &path)?;
        load(&mut geometry.newtonian_potential, i, &gf, schema::GF_PHI_N, &path)?;
        load_each(&mut geometry.shift, i, &gf, schema::GF_BETA, &path)?;
        load_each(&mut geometry.metric, i, &gf, schema::GF_GM, &path)?;
        load_each(&mut geometry.scale_factor, i, &gf, schema::GF_H, &path)?;
        load(&mut geometry.sqrt_gm, i, &gf, schema::GF_SQRT_GM, &path)
    }

    /// Fill slot `i` of the fluid fields and time from snapshot `index`
    fn load_fluid(&self, catalog: &mut FieldCatalog, i: usize, index: u32) -> Result<()> {
        let path = fluid_path(&self.path_prefix, index);
        let file = open_container(&path)?;
        let ff = group(&file, schema::FLUID_FIELDS, &path)?;

        let cf = group(&ff, schema::CONSERVED, &path)?;
        let conserved = &mut catalog.conserved;
        load(&mut conserved.baryon_density, i, &cf, schema::CF_D, &path)?;
        load_each(&mut conserved.momentum_density, i, &cf, schema::CF_S, &path)?;
        load(&mut conserved.energy_density, i, &cf, schema::CF_E, &path)?;
        load(&mut conserved.electron_density, i, &cf, schema::CF_NE, &path)?;

        let pf = group(&ff, schema::PRIMITIVE, &path)?;
        let primitive = &mut catalog.primitive;
        load(&mut primitive.baryon_density, i, &pf, schema::PF_D, &path)?;
        load_each(&mut primitive.velocity, i, &pf, schema::PF_V, &path)?;
        load(&mut primitive.internal_energy_density, i, &pf, schema::PF_E, &path)?;
        load(&mut primitive.electron_density, i, &pf, schema::PF_NE, &path)?;

        let af = group(&ff, schema::AUXILIARY, &path)?;
        let auxiliary = &mut catalog.auxiliary;
        load(&mut auxiliary.pressure, i, &af, schema::AF_P, &path)?;
        load(&mut auxiliary.sound_speed, i, &af, schema::AF_CS, &path)?;
        load(&mut auxiliary.gamma, i, &af, schema::AF_GM, &path)?;
        load(&mut auxiliary.electron_fraction, i, &af, schema::AF_YE, &path)?;

        let df = group(&ff, schema::DIAGNOSTIC, &path)?;
        let diagnostic = &mut catalog.diagnostic;
        load(&mut diagnostic.troubled_cell_indicator, i, &df, schema::DF_TCI, &path)?;
        load_each(&mut diagnostic.shock, i, &df, schema::DF_SH, &path)?;

        catalog.time.data[i] = read_time(&file, &path)?;
        Ok(())
    }

    /// Initialise the progress bar, if wanted
    fn init_progress_bar(&self) -> Result<Bar> {
        BarBuilder::default()
            .total(self.snapshots.len())
            .disable(self.disable_progress)
            .bar_format("Generating data: {count}/{total} [{rate:.2} snapshots/s]   ")
            .build()
            .map_err(Error::ProgressBar)
    }
}

// ! ------------------------------------------------------------------------
// !                            HDF5 helpers
// ! ------------------------------------------------------------------------

/// Open a container, with a clear error if the file does not exist
fn open_container(path: &Path) -> Result<hdf5::File> {
    if !path.is_file() {
        return Err(Error::MissingContainer(path.display().to_string()));
    }
    debug!("Opening {}", path.display());
    Ok(hdf5::File::open(path)?)
}

/// Descend into a named group
fn group(parent: &Group, name: &str, path: &Path) -> Result<Group> {
    parent.group(name).map_err(|source| Error::MissingDataset {
        file: path.display().to_string(),
        name: name.to_string(),
        source,
    })
}

/// Open a named dataset
fn dataset(parent: &Group, name: &str, path: &Path) -> Result<hdf5::Dataset> {
    parent.dataset(name).map_err(|source| Error::MissingDataset {
        file: path.display().to_string(),
        name: name.to_string(),
        source,
    })
}

/// Read the spatial grid with units for each axis
fn read_grid(file: &Group, path: &Path, units: &UnitTable) -> Result<SpatialGrid> {
    let grid = group(file, schema::SPATIAL_GRID, path)?;
    let axis = |name: &str, unit: &'static str| -> Result<Field1> {
        let data = dataset(&grid, name, path)?.read_1d::<f64>()?;
        Ok(Field1::new(unit, data))
    };

    let [u1, u2, u3] = units.position;
    Ok(SpatialGrid {
        x1: axis(schema::X1, u1)?,
        x2: axis(schema::X2, u2)?,
        x3: axis(schema::X3, u3)?,
        x1_c: axis(schema::X1_C, u1)?,
        x2_c: axis(schema::X2_C, u2)?,
        x3_c: axis(schema::X3_C, u3)?,
    })
}

/// Read the simulation time, stored as the first element of a dataset
fn read_time(file: &Group, path: &Path) -> Result<f64> {
    dataset(file, schema::TIME, path)?
        .read_raw::<f64>()?
        .first()
        .copied()
        .ok_or_else(|| Error::EmptyDataset {
            name: schema::TIME.to_string(),
        })
}

/// Read a volume dataset, checking it matches the `(nX3, nX2, nX1)` grid
fn read_volume(parent: &Group, name: &str, expected: [usize; 3], path: &Path) -> Result<Array3<f64>> {
    let dataset = dataset(parent, name, path)?;
    let found = dataset.shape();
    if found != expected {
        return Err(Error::UnexpectedShape {
            name: name.to_string(),
            expected: expected.to_vec(),
            found,
        });
    }
    debug!("  {name} {found:?}");
    Ok(dataset.read::<f64, Ix3>()?)
}

/// Copy a volume dataset into slot `i` of a field
fn load(field: &mut Field4, i: usize, parent: &Group, name: &str, path: &Path) -> Result<()> {
    let (_, n3, n2, n1) = field.data.dim();
    let volume = read_volume(parent, name, [n3, n2, n1], path)?;
    field.data.index_axis_mut(Axis(0), i).assign(&volume);
    Ok(())
}

/// Copy the three components of a vector quantity into slot `i`
fn load_each(
    fields: &mut [Field4; 3],
    i: usize,
    parent: &Group,
    names: [&str; 3],
    path: &Path,
) -> Result<()> {
    for (field, name) in fields.iter_mut().zip(names) {
        load(field, i, parent, name, path)?;
    }
    Ok(())
}

// ! ------------------------------------------------------------------------
// !                          Derived fields per snapshot
// ! ------------------------------------------------------------------------

/// View of slot `i` of a volume field
fn at(field: &Field4, i: usize) -> ArrayView3<'_, f64> {
    field.data.index_axis(Axis(0), i)
}

/// Compute the derived fields for slot `i` from the freshly loaded data
fn compute_derived(catalog: &mut FieldCatalog, i: usize) {
    let primitive = &catalog.primitive;
    let auxiliary = &catalog.auxiliary;

    let lorentz_factor = catalog.geometry.as_ref().map(|geometry| {
        let beta_sq = derived::squared_velocity(
            [
                at(&geometry.metric[0], i),
                at(&geometry.metric[1], i),
                at(&geometry.metric[2], i),
            ],
            [
                at(&primitive.velocity[0], i),
                at(&primitive.velocity[1], i),
                at(&primitive.velocity[2], i),
            ],
        );
        derived::lorentz_factor(beta_sq.view())
    });

    let specific_enthalpy = derived::specific_enthalpy(
        at(&primitive.internal_energy_density, i),
        at(&auxiliary.pressure, i),
        at(&primitive.baryon_density, i),
    );

    let polytropic_constant = derived::polytropic_constant(
        at(&auxiliary.pressure, i),
        at(&primitive.baryon_density, i),
        at(&auxiliary.gamma, i),
    );

    let output = &mut catalog.derived;
    if let (Some(field), Some(w)) = (output.lorentz_factor.as_mut(), lorentz_factor) {
        field.data.index_axis_mut(Axis(0), i).assign(&w);
    }
    output
        .specific_enthalpy
        .data
        .index_axis_mut(Axis(0), i)
        .assign(&specific_enthalpy);
    output
        .polytropic_constant
        .data
        .index_axis_mut(Axis(0), i)
        .assign(&polytropic_constant);
}
