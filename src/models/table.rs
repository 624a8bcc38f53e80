//! Vehicle × destination value table.

use serde::Serialize;

/// A dense table with one row per vehicle and one column per destination.
///
/// Used for delivery quantities and traffic indicators. Rows and columns
/// keep the order of the ID slices given at construction.
///
/// # Examples
///
/// ```
/// use fuel_dispatch::models::PairTable;
///
/// let mut t = PairTable::new(vec![7, 9], vec![1, 2, 3]);
/// t.set(1, 2, 4.5);
/// assert_eq!(t.value(9, 3), Some(4.5));
/// assert_eq!(t.value(7, 3), Some(0.0));
/// assert_eq!(t.value(8, 3), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairTable {
    vehicle_ids: Vec<usize>,
    destination_ids: Vec<usize>,
    values: Vec<f64>,
}

impl PairTable {
    /// Creates a zero-filled table.
    pub fn new(vehicle_ids: Vec<usize>, destination_ids: Vec<usize>) -> Self {
        let len = vehicle_ids.len() * destination_ids.len();
        Self {
            vehicle_ids,
            destination_ids,
            values: vec![0.0; len],
        }
    }

    /// Number of vehicle rows.
    pub fn num_rows(&self) -> usize {
        self.vehicle_ids.len()
    }

    /// Number of destination columns.
    pub fn num_cols(&self) -> usize {
        self.destination_ids.len()
    }

    /// Vehicle IDs in row order.
    pub fn vehicle_ids(&self) -> &[usize] {
        &self.vehicle_ids
    }

    /// Destination IDs in column order.
    pub fn destination_ids(&self) -> &[usize] {
        &self.destination_ids
    }

    /// Value at row `row`, column `col`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.num_cols() + col]
    }

    /// Sets the value at row `row`, column `col`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        let cols = self.num_cols();
        self.values[row * cols + col] = value;
    }

    /// Looks a value up by vehicle and destination ID.
    pub fn value(&self, vehicle_id: usize, destination_id: usize) -> Option<f64> {
        let row = self.row_of(vehicle_id)?;
        let col = self.col_of(destination_id)?;
        Some(self.get(row, col))
    }

    /// Row index of a vehicle ID.
    pub fn row_of(&self, vehicle_id: usize) -> Option<usize> {
        self.vehicle_ids.iter().position(|&id| id == vehicle_id)
    }

    /// Column index of a destination ID.
    pub fn col_of(&self, destination_id: usize) -> Option<usize> {
        self.destination_ids.iter().position(|&id| id == destination_id)
    }

    /// Iterates `(vehicle_id, destination_id, value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let cols = self.num_cols();
        self.values.iter().enumerate().map(move |(k, &v)| {
            (self.vehicle_ids[k / cols], self.destination_ids[k % cols], v)
        })
    }
}
