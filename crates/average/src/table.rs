//! Plain-text tables of cell averages
//!
//! The layout is a single 2D array with the cell centres along the first row
//! and the time along the first column:
//!
//! ```text
//! # data[0,1:]  = XC [km]
//! # data[1:,0]  = Time [ms]
//! # data[1:,1:] = uK
//! nan       xc_0      xc_1      ...
//! t_0       u_00      u_01      ...
//! t_1       u_10      u_11      ...
//! ```
//!
//! Values are written with 18 significant decimals so that a table can be read
//! back without loss.

// crate modules
use crate::error::{Error, Result};

// thornado-tools modules
use thornado_utils::{f, ValueExt};

// standard library
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

// external crates
use log::{debug, info};
use ndarray::{Array1, Array2};

/// Header lines written ahead of the data, without the comment marker
const HEADER: [&str; 3] = [
    "data[0,1:]  = XC [km]",
    "data[1:,0]  = Time [ms]",
    "data[1:,1:] = uK",
];

/// Conventional file name for a table, i.e. `YahilCollapse_native_PF_D.dat`
///
/// ```rust
/// # use thornado_average::table_file_name;
/// assert_eq!(table_file_name("YahilCollapse", "PF_D"), "YahilCollapse_native_PF_D.dat");
/// ```
pub fn table_file_name(problem: &str, field: &str) -> String {
    f!("{problem}_native_{field}.dat")
}

/// Write a table to a text file, see [CellAverageTable::write()]
pub fn write_table<P: AsRef<Path>>(table: &CellAverageTable, path: P) -> Result<()> {
    table.write(path)
}

/// Read a table from a text file, see [CellAverageTable::read()]
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<CellAverageTable> {
    CellAverageTable::read(path)
}

/// Cell averages with their cell centres and times
#[derive(Debug, Clone, PartialEq)]
pub struct CellAverageTable {
    /// Cell-centre coordinates along X1
    pub cell_centres: Array1<f64>,
    /// Simulation time of each row
    pub time: Array1<f64>,
    /// Averages shaped `(time, cells)`
    pub data: Array2<f64>,
}

impl CellAverageTable {
    /// Assemble a table, checking the data matches both axes
    pub fn new(cell_centres: Array1<f64>, time: Array1<f64>, data: Array2<f64>) -> Result<Self> {
        if data.nrows() != time.len() {
            return Err(Error::LengthMismatch {
                name: "time".to_string(),
                expected: data.nrows(),
                found: time.len(),
            });
        }

        if data.ncols() != cell_centres.len() {
            return Err(Error::LengthMismatch {
                name: "cell centres".to_string(),
                expected: data.ncols(),
                found: cell_centres.len(),
            });
        }

        Ok(Self {
            cell_centres,
            time,
            data,
        })
    }

    /// Write the table to a text file
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);

        for line in HEADER {
            writeln!(writer, "# {line}")?;
        }

        write!(writer, "{}", f64::NAN.sci(18, 2))?;
        for x in &self.cell_centres {
            write!(writer, " {}", x.sci(18, 2))?;
        }
        writeln!(writer)?;

        for (t, row) in self.time.iter().zip(self.data.rows()) {
            write!(writer, "{}", t.sci(18, 2))?;
            for value in row {
                write!(writer, " {}", value.sci(18, 2))?;
            }
            writeln!(writer)?;
        }

        writer.flush()?;
        info!("Wrote cell averages to {}", path.display());
        Ok(())
    }

    /// Read a table back from a text file
    ///
    /// Lines starting with `#` and blank lines are skipped. The first value of
    /// the first data row is a placeholder and is ignored.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading cell averages from {}", path.display());
        let reader = BufReader::new(File::open(path)?);

        let mut columns: Option<usize> = None;
        let mut cell_centres = Vec::new();
        let mut time = Vec::new();
        let mut values = Vec::new();

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let row = parse_row(line, i + 1)?;
            match columns {
                None => {
                    columns = Some(row.len());
                    cell_centres.extend_from_slice(&row[1..]);
                }
                Some(expected) if expected != row.len() => {
                    return Err(Error::RaggedTable {
                        line: i + 1,
                        expected,
                        found: row.len(),
                    });
                }
                Some(_) => {
                    time.push(row[0]);
                    values.extend_from_slice(&row[1..]);
                }
            }
        }

        if columns.is_none() {
            return Err(Error::EmptyTable);
        }

        let data = Array2::from_shape_vec((time.len(), cell_centres.len()), values)?;
        Self::new(Array1::from(cell_centres), Array1::from(time), data)
    }
}

/// Parse every whitespace separated value on a line
fn parse_row(line: &str, line_number: usize) -> Result<Vec<f64>> {
    line.split_whitespace()
        .map(|value| {
            value.parse::<f64>().map_err(|_| Error::ParseError {
                line: line_number,
                value: value.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, arr2};

    fn table() -> CellAverageTable {
        CellAverageTable::new(
            arr1(&[1.5e1, 4.5e1]),
            arr1(&[0.0, 2.5e2]),
            arr2(&[[1.0e10, 2.0e9], [3.3e14, -1.0 / 3.0]]),
        )
        .unwrap()
    }

    #[test]
    fn layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.dat");
        table().write(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "# data[0,1:]  = XC [km]");
        assert_eq!(lines[1], "# data[1:,0]  = Time [ms]");
        assert_eq!(lines[2], "# data[1:,1:] = uK");
        assert_eq!(
            lines[3],
            "nan 1.500000000000000000e+01 4.500000000000000000e+01"
        );
        assert!(lines[4].starts_with("0.000000000000000000e+00 1.000000000000000000e+10"));
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn lossless_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.dat");
        write_table(&table(), &path).unwrap();
        assert_eq!(read_table(&path).unwrap(), table());
    }

    #[test]
    fn mismatched_axes() {
        let result = CellAverageTable::new(arr1(&[1.0]), arr1(&[0.0]), arr2(&[[1.0, 2.0]]));
        assert!(matches!(result, Err(Error::LengthMismatch { .. })));
    }

    #[test]
    fn ragged_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ragged.dat");
        std::fs::write(&path, "# header\nnan 1.0 2.0\n0.0 1.0\n").unwrap();
        assert!(matches!(
            CellAverageTable::read(&path),
            Err(Error::RaggedTable { line: 3, expected: 3, found: 2 })
        ));
    }

    #[test]
    fn bad_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.dat");
        std::fs::write(&path, "nan 1.0\n0.0 one\n").unwrap();
        assert!(matches!(
            CellAverageTable::read(&path),
            Err(Error::ParseError { line: 2, .. })
        ));
    }

    #[test]
    fn empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.dat");
        std::fs::write(&path, "# only a header\n").unwrap();
        assert!(matches!(CellAverageTable::read(&path), Err(Error::EmptyTable)));
    }
}
