//! The 0/1 decision matrix read back from a solver.

/// Decision values of an assignment model, vehicles by destinations.
///
/// Values are stored as `f64` because MILP backends report them that way;
/// a value above 0.5 counts as selected.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl Plan {
    /// Builds a plan with the given `(row, col)` pairs set to 1.
    ///
    /// # Panics
    ///
    /// Panics if a pair is out of bounds.
    pub fn from_pairs(rows: usize, cols: usize, pairs: &[(usize, usize)]) -> Self {
        let mut values = vec![0.0; rows * cols];
        for &(r, c) in pairs {
            assert!(r < rows && c < cols, "pair ({r}, {c}) out of bounds");
            values[r * cols + c] = 1.0;
        }
        Self { rows, cols, values }
    }

    /// Wraps raw decision values in row-major order.
    ///
    /// Returns `None` if the length doesn't match `rows * cols`.
    pub fn from_values(rows: usize, cols: usize, values: Vec<f64>) -> Option<Self> {
        if values.len() != rows * cols {
            return None;
        }
        Some(Self { rows, cols, values })
    }

    /// Decision value, or `None` out of bounds.
    pub fn value(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.values[row * self.cols + col])
        } else {
            None
        }
    }

    /// Returns `true` if the pair is selected.
    pub fn is_selected(&self, row: usize, col: usize) -> bool {
        self.value(row, col).is_some_and(|x| x > 0.5)
    }

    /// Selected `(row, col)` pairs in row-major order.
    pub fn selected(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for r in 0..self.rows {
            for c in 0..self.cols {
                if self.is_selected(r, c) {
                    out.push((r, c));
                }
            }
        }
        out
    }

    /// Row sums (destinations per vehicle).
    pub fn row_sums(&self) -> Vec<usize> {
        (0..self.rows)
            .map(|r| (0..self.cols).filter(|&c| self.is_selected(r, c)).count())
            .collect()
    }

    /// Column sums (vehicles per destination).
    pub fn col_sums(&self) -> Vec<usize> {
        (0..self.cols)
            .map(|c| (0..self.rows).filter(|&r| self.is_selected(r, c)).count())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs() {
        let plan = Plan::from_pairs(2, 3, &[(0, 2), (1, 0)]);
        assert_eq!(plan.value(0, 2), Some(1.0));
        assert_eq!(plan.value(0, 0), Some(0.0));
        assert_eq!(plan.value(2, 0), None);
        assert_eq!(plan.selected(), vec![(0, 2), (1, 0)]);
        assert_eq!(plan.row_sums(), vec![1, 1]);
        assert_eq!(plan.col_sums(), vec![1, 0, 1]);
    }

    #[test]
    fn test_from_values_threshold() {
        let plan = Plan::from_values(1, 2, vec![0.9999, 1e-7]).unwrap();
        assert!(plan.is_selected(0, 0));
        assert!(!plan.is_selected(0, 1));
        assert!(Plan::from_values(2, 2, vec![0.0]).is_none());
    }
}
