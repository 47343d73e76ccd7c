use noether_core::errors::AlgebraError;
use noether_poly::Polynomial;
use tracing::trace;

/// Relation matrix under elimination: one row per relation, one column per
/// surviving generator.
#[derive(Debug, Clone)]
pub(crate) struct Presentation {
    rows: Vec<Vec<Polynomial>>,
    columns: usize,
}

impl Presentation {
    pub(crate) fn new(rows: Vec<Vec<Polynomial>>, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Rewrites every row with `map`, dropping rows that become zero.
    pub(crate) fn map_rows<F>(&mut self, mut map: F) -> Result<(), AlgebraError>
    where
        F: FnMut(&[Polynomial]) -> Result<Vec<Polynomial>, AlgebraError>,
    {
        for row in &mut self.rows {
            *row = map(row)?;
        }
        self.rows.retain(|row| row.iter().any(|entry| !entry.is_zero()));
        Ok(())
    }

    /// Eliminates generators while some entry satisfies `is_pivot`.
    ///
    /// A pivot `f` at `(r, c)` clears column `c` from every other row with
    /// `row_k <- f * row_k - a_k * row_r`, after which row `r` and column `c`
    /// are dropped. `after_step` runs on the shrunken matrix. Returns the
    /// number of surviving generators.
    pub(crate) fn eliminate<P, S>(
        mut self,
        mut is_pivot: P,
        mut after_step: S,
    ) -> Result<usize, AlgebraError>
    where
        P: FnMut(&Polynomial) -> bool,
        S: FnMut(&mut Presentation) -> Result<(), AlgebraError>,
    {
        while let Some((row, col)) = self.find_pivot(&mut is_pivot) {
            self.pivot_on(row, col);
            after_step(&mut self)?;
        }
        Ok(self.columns)
    }

    /// Elimination without a post-step hook, which cannot fail.
    pub(crate) fn eliminate_plain<P>(mut self, mut is_pivot: P) -> usize
    where
        P: FnMut(&Polynomial) -> bool,
    {
        while let Some((row, col)) = self.find_pivot(&mut is_pivot) {
            self.pivot_on(row, col);
        }
        self.columns
    }

    fn pivot_on(&mut self, row: usize, col: usize) {
        let pivot_row = self.rows.remove(row);
        let pivot = pivot_row[col].clone();
        for other in &mut self.rows {
            let factor = other[col].clone();
            if factor.is_zero() {
                continue;
            }
            for (entry, pivot_entry) in other.iter_mut().zip(&pivot_row) {
                *entry = pivot.mul(entry).sub(&factor.mul(pivot_entry));
            }
        }
        for other in &mut self.rows {
            other.remove(col);
        }
        self.rows.retain(|row| row.iter().any(|entry| !entry.is_zero()));
        self.columns -= 1;
        trace!(row, col, remaining = self.columns, "eliminated generator");
    }

    fn find_pivot<P>(&self, is_pivot: &mut P) -> Option<(usize, usize)>
    where
        P: FnMut(&Polynomial) -> bool,
    {
        self.rows.iter().enumerate().find_map(|(r, row)| {
            row.iter()
                .position(|entry| is_pivot(entry))
                .map(|c| (r, c))
        })
    }
}
