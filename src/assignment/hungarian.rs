//! Hungarian (Kuhn-Munkres) solver for the assignment model.
//!
//! Shortest augmenting path with row/column potentials, O(n²m) for an n×m
//! matrix with n ≤ m. A wider-than-tall model is transposed first.
//!
//! # Reference
//!
//! Kuhn, H. W. (1955). "The Hungarian method for the assignment problem",
//! *Naval Research Logistics Quarterly* 2, 83-97.

use crate::error::Result;
use crate::models::SolveMethod;

use super::{AssignmentModel, AssignmentSolver, Plan};

/// Exact assignment solver, no external dependencies.
///
/// # Examples
///
/// ```
/// use fuel_dispatch::models::PairTable;
/// use fuel_dispatch::assignment::{AssignmentModel, AssignmentSolver, Hungarian};
///
/// let mut t = PairTable::new(vec![0, 1], vec![1, 2]);
/// t.set(0, 0, 4.0);
/// t.set(0, 1, 3.0);
/// t.set(1, 0, 3.0);
/// t.set(1, 1, 1.0);
/// let model = AssignmentModel::new("stage-1", t).unwrap();
///
/// let plan = Hungarian.solve(&model).unwrap();
/// // 3 + 3 beats 4 + 1
/// assert_eq!(plan.selected(), vec![(0, 1), (1, 0)]);
/// assert_eq!(model.objective(&plan), 6.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Hungarian;

impl AssignmentSolver for Hungarian {
    fn method(&self) -> SolveMethod {
        SolveMethod::Hungarian
    }

    fn solve(&self, model: &AssignmentModel) -> Result<Plan> {
        let t = model.coefficients();
        let rows = t.num_rows();
        let cols = t.num_cols();

        // Minimize the negated coefficients; the short side indexes the rows.
        let transposed = rows > cols;
        let (n, m) = if transposed { (cols, rows) } else { (rows, cols) };
        let cost: Vec<Vec<f64>> = (0..n)
            .map(|i| {
                (0..m)
                    .map(|j| if transposed { -t.get(j, i) } else { -t.get(i, j) })
                    .collect()
            })
            .collect();

        let matched = min_cost_assignment(&cost);
        let pairs: Vec<(usize, usize)> = matched
            .into_iter()
            .enumerate()
            .map(|(i, j)| if transposed { (j, i) } else { (i, j) })
            .collect();

        Ok(Plan::from_pairs(rows, cols, &pairs))
    }
}

/// Assigns every row of an n×m cost matrix (n ≤ m) to a distinct column at
/// minimum total cost. Returns the column of each row.
fn min_cost_assignment(cost: &[Vec<f64>]) -> Vec<usize> {
    let n = cost.len();
    if n == 0 {
        return Vec::new();
    }
    let m = cost[0].len();

    // 1-based; column 0 is a virtual start column.
    let mut u = vec![0.0; n + 1];
    let mut v = vec![0.0; m + 1];
    let mut owner = vec![0usize; m + 1];
    let mut way = vec![0usize; m + 1];

    for i in 1..=n {
        owner[0] = i;
        let mut j0 = 0;
        let mut min_slack = vec![f64::INFINITY; m + 1];
        let mut used = vec![false; m + 1];

        loop {
            used[j0] = true;
            let i0 = owner[j0];
            let mut delta = f64::INFINITY;
            let mut j1 = 0;
            for j in 1..=m {
                if used[j] {
                    continue;
                }
                let slack = cost[i0 - 1][j - 1] - u[i0] - v[j];
                if slack < min_slack[j] {
                    min_slack[j] = slack;
                    way[j] = j0;
                }
                if min_slack[j] < delta {
                    delta = min_slack[j];
                    j1 = j;
                }
            }
            for j in 0..=m {
                if used[j] {
                    u[owner[j]] += delta;
                    v[j] -= delta;
                } else {
                    min_slack[j] -= delta;
                }
            }
            j0 = j1;
            if owner[j0] == 0 {
                break;
            }
        }

        // Flip the augmenting path.
        loop {
            let j1 = way[j0];
            owner[j0] = owner[j1];
            j0 = j1;
            if j0 == 0 {
                break;
            }
        }
    }

    let mut column_of = vec![0; n];
    for j in 1..=m {
        if owner[j] != 0 {
            column_of[owner[j] - 1] = j - 1;
        }
    }
    column_of
}
