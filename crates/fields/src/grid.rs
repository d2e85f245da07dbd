//! Spatial grid shared by every snapshot in a read

// crate modules
use crate::catalog::Field1;

/// Node and cell-centre coordinates along each axis
///
/// thornado stores several quadrature nodes per cell, so the node arrays
/// (`X1`, `X2`, `X3`) are longer than the cell-centre arrays (`X1_C`, ...)
/// by a factor of the number of nodes per cell.
///
/// The grid is assumed static across a time series and is only read from
/// the first snapshot of a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialGrid {
    /// Node coordinates in X1
    pub x1: Field1,
    /// Node coordinates in X2
    pub x2: Field1,
    /// Node coordinates in X3
    pub x3: Field1,
    /// Cell-centre coordinates in X1
    pub x1_c: Field1,
    /// Cell-centre coordinates in X2
    pub x2_c: Field1,
    /// Cell-centre coordinates in X3
    pub x3_c: Field1,
}

impl SpatialGrid {
    /// Extent of a single snapshot volume as `(nX3, nX2, nX1)` nodes
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.x3.data.len(), self.x2.data.len(), self.x1.data.len())
    }

    /// Number of cells along X1
    pub fn number_of_cells(&self) -> usize {
        self.x1_c.data.len()
    }

    /// Number of nodes per cell along X1
    ///
    /// Integer ratio of node to cell-centre counts, zero for an empty grid.
    pub fn nodes_per_cell(&self) -> usize {
        match self.number_of_cells() {
            0 => 0,
            n => self.x1.data.len() / n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    fn field(n: usize) -> Field1 {
        Field1::new("km", Array1::linspace(0.0, 1.0, n))
    }

    #[test]
    fn node_ratio() {
        let grid = SpatialGrid {
            x1: field(24),
            x2: field(1),
            x3: field(1),
            x1_c: field(8),
            x2_c: field(1),
            x3_c: field(1),
        };

        assert_eq!(grid.shape(), (1, 1, 24));
        assert_eq!(grid.number_of_cells(), 8);
        assert_eq!(grid.nodes_per_cell(), 3);
    }

    #[test]
    fn empty_grid() {
        let grid = SpatialGrid {
            x1: field(0),
            x2: field(0),
            x3: field(0),
            x1_c: field(0),
            x2_c: field(0),
            x3_c: field(0),
        };
        assert_eq!(grid.nodes_per_cell(), 0);
    }
}
