// crate modules
use crate::error::{Error, Result};

/// Gauss-Legendre weights on the unit reference interval
///
/// Weights are normalised to sum to one, matching the nodal layout of the
/// thornado elements. Only one to three nodes per cell are supported.
///
/// ```rust
/// # use thornado_average::Quadrature;
/// let quadrature = Quadrature::new(3).unwrap();
/// assert_eq!(quadrature.weights(), &[5.0 / 18.0, 8.0 / 18.0, 5.0 / 18.0]);
/// assert!(Quadrature::new(4).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Quadrature {
    weights: Vec<f64>,
}

impl Quadrature {
    /// Weights for `nodes` nodes per cell
    pub fn new(nodes: usize) -> Result<Self> {
        let weights = match nodes {
            1 => vec![1.0],
            2 => vec![0.5, 0.5],
            3 => vec![5.0 / 18.0, 8.0 / 18.0, 5.0 / 18.0],
            n => return Err(Error::UnsupportedNodeCount(n)),
        };
        Ok(Self { weights })
    }

    /// Number of nodes per cell
    pub fn nodes(&self) -> usize {
        self.weights.len()
    }

    /// Weight of each node
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    fn weights_sum_to_one(#[case] nodes: usize) {
        let quadrature = Quadrature::new(nodes).unwrap();
        assert_eq!(quadrature.nodes(), nodes);
        let total: f64 = quadrature.weights().iter().sum();
        assert!((total - 1.0).abs() < 1.0e-15);
    }

    #[rstest]
    #[case(0)]
    #[case(4)]
    #[case(5)]
    fn unsupported(#[case] nodes: usize) {
        assert!(matches!(
            Quadrature::new(nodes),
            Err(Error::UnsupportedNodeCount(n)) if n == nodes
        ));
    }
}
