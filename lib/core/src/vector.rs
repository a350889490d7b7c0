use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sparse weight vector indexed by vocabulary term id.
///
/// Entries are kept sorted by index with no duplicates, so dot products are a
/// single merge pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SparseVector {
    indices: Vec<u32>,
    values: Vec<f64>,
}

impl SparseVector {
    /// Build from (index, weight) pairs. Duplicate indices are summed, zero weights dropped.
    #[must_use]
    pub fn from_pairs(mut pairs: Vec<(u32, f64)>) -> Self {
        pairs.sort_unstable_by_key(|&(idx, _)| idx);

        let mut indices: Vec<u32> = Vec::with_capacity(pairs.len());
        let mut values: Vec<f64> = Vec::with_capacity(pairs.len());
        for (idx, value) in pairs {
            match indices.last() {
                Some(&last) if last == idx => {
                    if let Some(v) = values.last_mut() {
                        *v += value;
                    }
                }
                _ => {
                    indices.push(idx);
                    values.push(value);
                }
            }
        }

        let mut vector = Self { indices, values };
        vector.prune_zeros();
        vector
    }

    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    fn prune_zeros(&mut self) {
        if self.values.iter().all(|v| *v != 0.0) {
            return;
        }
        let (indices, values) = self
            .indices
            .iter()
            .zip(self.values.iter())
            .filter(|(_, v)| **v != 0.0)
            .map(|(i, v)| (*i, *v))
            .unzip();
        self.indices = indices;
        self.values = values;
    }

    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, index: u32) -> f64 {
        self.indices
            .binary_search(&index)
            .map(|pos| self.values[pos])
            .unwrap_or(0.0)
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Scale to unit Euclidean length; the zero vector stays zero
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            let inv_norm = 1.0 / norm;
            for v in &mut self.values {
                *v *= inv_norm;
            }
        }
    }

    /// Dot product over the shared indices
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.indices.len() && j < other.indices.len() {
            match self.indices[i].cmp(&other.indices[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    sum += self.values[i] * other.values[j];
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_sorts_and_merges() {
        let v = SparseVector::from_pairs(vec![(3, 1.0), (1, 2.0), (3, 0.5), (7, 0.0)]);
        assert_eq!(v.indices(), &[1, 3]);
        assert_eq!(v.values(), &[2.0, 1.5]);
        assert_eq!(v.get(7), 0.0);
    }

    #[test]
    fn test_dot_over_shared_indices() {
        let v1 = SparseVector::from_pairs(vec![(0, 1.0), (2, 2.0), (5, 1.0)]);
        let v2 = SparseVector::from_pairs(vec![(2, 3.0), (4, 7.0), (5, 0.5)]);
        assert!((v1.dot(&v2) - 6.5).abs() < 1e-12);

        let v3 = SparseVector::from_pairs(vec![(1, 1.0)]);
        assert_eq!(v1.dot(&v3), 0.0);
    }

    #[test]
    fn test_zero_vector_dot_is_zero_not_nan() {
        let zero = SparseVector::zero();
        let mut v = SparseVector::from_pairs(vec![(0, 1.0)]);
        v.normalize();
        assert_eq!(zero.dot(&v), 0.0);
        assert_eq!(zero.dot(&zero), 0.0);
    }

    #[test]
    fn test_normalize() {
        let mut v = SparseVector::from_pairs(vec![(0, 3.0), (5, 4.0)]);
        v.normalize();
        assert!((v.norm() - 1.0).abs() < 1e-12);
        assert!((v.get(0) - 0.6).abs() < 1e-12);

        let mut zero = SparseVector::zero();
        zero.normalize();
        assert!(zero.is_zero());
    }
}
