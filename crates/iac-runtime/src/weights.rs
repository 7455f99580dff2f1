//! Dense symmetric weight matrix
//!
//! Every connection in an IAC network is bidirectional, so the matrix only
//! exposes symmetric writes. The diagonal is kept at zero.

use crate::error::*;
use core::ops::Index;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Square, symmetric, zero-diagonal connection matrix stored row-major
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix {
    data: Vec<f64>,
    size: usize,
}

impl WeightMatrix {
    /// Create a `size x size` matrix with every weight at zero
    pub fn zeros(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Weight between nodes `i` and `j`, `None` when out of range
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.size || j >= self.size {
            return None;
        }
        Some(self.data[i * self.size + j])
    }

    /// Row `i` as a slice
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.size;
        &self.data[start..start + self.size]
    }

    /// Set `W[i][j]` and `W[j][i]` to `weight`, overwriting any previous value
    pub fn set_symmetric(&mut self, i: usize, j: usize, weight: f64) -> Result<()> {
        if i >= self.size || j >= self.size {
            return Err(IacError::invalid_parameter(
                "node index",
                format!("({}, {})", i, j),
                format!("< {}", self.size),
            ));
        }
        if i == j {
            return Err(IacError::self_connection(format!("node {}", i)));
        }
        self.data[i * self.size + j] = weight;
        self.data[j * self.size + i] = weight;
        Ok(())
    }

    /// Upper-triangle edges `(i, j, weight)` with `i < j` and a non-zero weight
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.size).flat_map(move |i| {
            ((i + 1)..self.size).filter_map(move |j| {
                let w = self.data[i * self.size + j];
                (w != 0.0).then_some((i, j, w))
            })
        })
    }

    /// True when `W[i][j] == W[j][i]` for every pair
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| ((i + 1)..self.size).all(|j| self[(i, j)] == self[(j, i)]))
    }

    /// True when every diagonal entry is zero
    pub fn has_zero_diagonal(&self) -> bool {
        (0..self.size).all(|i| self[(i, i)] == 0.0)
    }

    /// Net input from rectified activations: `out = W · max(a, 0)`.
    ///
    /// Each row is summed in column order, with or without the `parallel`
    /// feature, so both paths produce identical bits.
    pub fn multiply_rectified(&self, activations: &[f64], out: &mut [f64]) -> Result<()> {
        if activations.len() != self.size || out.len() != self.size {
            return Err(IacError::invalid_parameter(
                "activation vector length",
                format!("{} (output {})", activations.len(), out.len()),
                format!("{}", self.size),
            ));
        }

        #[cfg(feature = "parallel")]
        out.par_iter_mut()
            .enumerate()
            .for_each(|(i, net)| *net = rectified_dot(self.row(i), activations));

        #[cfg(not(feature = "parallel"))]
        out.iter_mut()
            .enumerate()
            .for_each(|(i, net)| *net = rectified_dot(self.row(i), activations));

        Ok(())
    }
}

#[inline]
fn rectified_dot(row: &[f64], activations: &[f64]) -> f64 {
    row.iter()
        .zip(activations)
        .fold(0.0, |acc, (w, a)| acc + w * a.max(0.0))
}

impl Index<(usize, usize)> for WeightMatrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.size + col]
    }
}
