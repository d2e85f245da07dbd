//! Cell averages of nodal thornado fields
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod average;
mod compare;
mod error;
mod quadrature;

pub mod table;

#[doc(inline)]
pub use average::{cell_average, polytropic_cell_average, CellAverages};

#[doc(inline)]
pub use compare::{relative_difference, relative_difference_scalar, RELATIVE_DIFFERENCE_FLOOR};

#[doc(inline)]
pub use quadrature::Quadrature;

#[doc(inline)]
pub use table::{read_table, table_file_name, write_table, CellAverageTable};

#[doc(inline)]
pub use error::{Error, Result};
