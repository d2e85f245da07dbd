// crate modules
use crate::error::{Error, Result};

// thornado-tools modules
use thornado_fields::FieldCatalog;
use thornado_utils::{f, OptionExt, ValueExt};

// standard library
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// external crates
use log::{debug, info};
use serde::Serialize;

/// Density thresholds in g/cm^3, `1e10` to `1e15`
pub const DENSITY_DECADES: [f64; 6] = [1.0e10, 1.0e11, 1.0e12, 1.0e13, 1.0e14, 1.0e15];

/// Conventional name of the summary file
pub const DEFAULT_SUMMARY_FILE: &str = "densityDecades.txt";

/// First point in the series where the density exceeded a threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DecadeHit {
    /// Position in the scanned series, not the snapshot index
    pub position: usize,
    /// Time at that position
    pub time: f64,
}

/// A density threshold and when it was first exceeded, if ever
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Decade {
    /// Threshold density
    pub threshold: f64,
    /// First crossing, `None` if never exceeded
    pub hit: Option<DecadeHit>,
}

/// Running maximum of the density series
///
/// Starts at zero density, time, and position, and only moves on a strictly
/// greater value. A series that never exceeds zero keeps the initial peak.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct Peak {
    /// Maximum density
    pub value: f64,
    /// Time of the maximum
    pub time: f64,
    /// Position of the maximum in the scanned series
    pub position: usize,
}

/// First crossings of each density decade in a time series
///
/// Scans a series of (typically central) densities in order. For every
/// threshold in [DENSITY_DECADES] the first point with a density strictly
/// above it is recorded, along with the peak density.
///
/// ```rust
/// # use thornado_decades::DensityDecades;
/// let density = [5.0e9, 2.0e10, 3.0e11, 2.5e11];
/// let time = [0.0, 1.0, 2.0, 3.0];
///
/// let decades = DensityDecades::scan(&density, &time).unwrap();
/// assert_eq!(decades.positions(), vec![Some(1), Some(2), None, None, None, None]);
/// assert_eq!(decades.peak.position, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensityDecades {
    /// Every threshold, in ascending order
    pub decades: Vec<Decade>,
    /// Peak density over the series
    pub peak: Peak,
}

impl DensityDecades {
    /// Scan a density series against its times
    ///
    /// Fails for an empty series or when the lengths differ.
    pub fn scan(density: &[f64], time: &[f64]) -> Result<Self> {
        if density.is_empty() {
            return Err(Error::EmptySeries);
        }

        if density.len() != time.len() {
            return Err(Error::LengthMismatch {
                density: density.len(),
                time: time.len(),
            });
        }

        let mut decades: Vec<Decade> = DENSITY_DECADES
            .iter()
            .map(|&threshold| Decade {
                threshold,
                hit: None,
            })
            .collect();
        let mut peak = Peak::default();

        for (position, (&value, &time)) in density.iter().zip(time).enumerate() {
            if value > peak.value {
                peak = Peak {
                    value,
                    time,
                    position,
                };
            }

            for decade in decades.iter_mut().filter(|d| d.hit.is_none()) {
                if value > decade.threshold {
                    decade.hit = Some(DecadeHit { position, time });
                }
            }
        }

        debug!(
            "Found {}/{} density decades in {} points",
            decades.iter().filter(|d| d.hit.is_some()).count(),
            decades.len(),
            density.len()
        );

        Ok(Self { decades, peak })
    }

    /// Scan the central density `PF_D[:, 0, 0, 0]` of a catalog
    pub fn from_catalog(catalog: &FieldCatalog) -> Result<Self> {
        let density = catalog.trace("PF_D", (0, 0, 0))?;
        let time = catalog.time.data.to_vec();
        Self::scan(&density.to_vec(), &time)
    }

    /// Position of the first crossing of each threshold
    pub fn positions(&self) -> Vec<Option<usize>> {
        self.decades
            .iter()
            .map(|d| d.hit.map(|hit| hit.position))
            .collect()
    }

    /// Time of the first crossing of each threshold
    pub fn times(&self) -> Vec<Option<f64>> {
        self.decades.iter().map(|d| d.hit.map(|hit| hit.time)).collect()
    }

    /// Whether every threshold was exceeded
    pub fn all_found(&self) -> bool {
        self.decades.iter().all(|d| d.hit.is_some())
    }

    /// Text summary of the crossings and the peak
    pub fn summary(&self) -> String {
        let positions: Vec<String> = self.positions().iter().map(|p| p.display()).collect();

        let mut s = f!("[{}]\n", positions.join(" "));
        s += &f!("MaxDensity: {} g/cm^3\n", self.peak.value.sci(3, 2));
        s += &f!("      tMax: {} ms\n", self.peak.time.sci(3, 2));
        s += &f!("    indMax: {}", self.peak.position);
        s
    }

    /// Write the text summary to a file, i.e. [DEFAULT_SUMMARY_FILE]
    ///
    /// The summary is also logged at `info` level, which only reaches the
    /// console if the caller installed a logger. It is returned so that it
    /// can be printed directly otherwise.
    pub fn write_summary<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let path = path.as_ref();
        let summary = self.summary();
        info!("Density decades\n{summary}");

        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(summary.as_bytes())?;
        writer.flush()?;
        debug!("Wrote {}", path.display());
        Ok(summary)
    }

    /// Write the full record to a JSON file
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path.as_ref())?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}

impl std::fmt::Display for DensityDecades {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.summary())
    }
}
