//! Dense distance matrix.

use serde::{Deserialize, Serialize};

/// A dense n×n distance matrix over location IDs, stored in row-major order.
///
/// Location 0 is the depot; destination IDs index the remaining rows and
/// columns. Distances may be asymmetric.
///
/// # Examples
///
/// ```
/// use fuel_dispatch::distance::DistanceMatrix;
///
/// // depot at 0 km, stations at 12 km and 30 km along the same road
/// let dm = DistanceMatrix::from_positions(&[0.0, 12.0, 30.0]);
/// assert_eq!(dm.get(0, 2), 30.0);
/// assert_eq!(dm.get(2, 1), 18.0);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Builds the matrix for locations on a line, `d(i, j) = |x_i - x_j|`.
    pub fn from_positions(positions: &[f64]) -> Self {
        let n = positions.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = (positions[i] - positions[j]).abs();
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from square rows.
    ///
    /// Returns `None` if any row length differs from the number of rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return None;
        }
        Some(Self {
            data: rows.into_iter().flatten().collect(),
            size,
        })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Returns the distance, or `None` if either location is unknown.
    pub fn try_get(&self, from: usize, to: usize) -> Option<f64> {
        if from < self.size && to < self.size {
            Some(self.get(from, to))
        } else {
            None
        }
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `location` has a row and column in this matrix.
    pub fn contains(&self, location: usize) -> bool {
        location < self.size
    }

    /// Returns the first entry that is negative or not finite, as
    /// `(from, to, value)`.
    pub fn find_invalid(&self) -> Option<(usize, usize, f64)> {
        self.data
            .iter()
            .position(|d| !(d.is_finite() && *d >= 0.0))
            .map(|k| (k / self.size, k % self.size, self.data[k]))
    }

    /// Copies the matrix out as rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        if self.size == 0 {
            return Vec::new();
        }
        self.data.chunks(self.size).map(<[f64]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<f64>>> for DistanceMatrix {
    type Error = String;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        let n = rows.len();
        Self::from_rows(rows).ok_or_else(|| format!("distance matrix must be {n}x{n}"))
    }
}

impl From<DistanceMatrix> for Vec<Vec<f64>> {
    fn from(dm: DistanceMatrix) -> Self {
        dm.to_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_positions() {
        let dm = DistanceMatrix::from_positions(&[0.0, 3.0, 8.0]);
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 3.0).abs() < 1e-10);
        assert!((dm.get(1, 2) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 0)).abs() < 1e-10);
        assert_eq!(dm.get(2, 0), dm.get(0, 2));
        assert_eq!(dm.find_invalid(), None);
    }

    #[test]
    fn test_find_invalid() {
        let dm = DistanceMatrix::from_rows(vec![vec![0.0, 4.0], vec![-1.0, 0.0]]).expect("valid");
        assert_eq!(dm.find_invalid(), Some((1, 0, -1.0)));

        let dm = DistanceMatrix::from_positions(&[0.0, f64::NAN]);
        let (from, to, value) = dm.find_invalid().expect("NaN entry");
        assert_eq!((from, to), (0, 1));
        assert!(value.is_nan());

        let dm = DistanceMatrix::from_positions(&[0.0, f64::INFINITY]);
        assert!(dm.find_invalid().is_some());
    }

    #[test]
    fn test_from_rows() {
        let dm = DistanceMatrix::from_rows(vec![vec![0.0, 4.0], vec![6.0, 0.0]]).expect("valid");
        assert_eq!(dm.get(1, 0), 6.0);
        assert_eq!(dm.get(0, 1), 4.0);
        assert!(DistanceMatrix::from_rows(vec![vec![0.0, 4.0], vec![6.0]]).is_none());
    }

    #[test]
    fn test_try_get_out_of_range() {
        let dm = DistanceMatrix::new(2);
        assert_eq!(dm.try_get(1, 1), Some(0.0));
        assert_eq!(dm.try_get(2, 0), None);
        assert!(!dm.contains(5));
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42.0);
        assert_eq!(dm.get(0, 1), 42.0);
        assert_eq!(dm.get(1, 0), 0.0);
    }

    #[test]
    fn test_serde_rows() {
        let dm = DistanceMatrix::from_positions(&[0.0, 2.0]);
        let json = serde_json::to_string(&dm).unwrap();
        assert_eq!(json, "[[0.0,2.0],[2.0,0.0]]");
        let back: DistanceMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dm);
        assert!(serde_json::from_str::<DistanceMatrix>("[[0.0,1.0]]").is_err());
    }
}
