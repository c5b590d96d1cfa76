use polars::prelude::{col, lit, when, DataType, Expr, NULL};

/// Right-closed buckets over a numeric range, labelled `1..=n`.
///
/// With bounds `[b0, b1, ..., bk]` bucket `i` covers `(b(i-1), b(i)]` and, when the bins are
/// open ended, bucket `k + 1` covers `(bk, +inf)`. Values at or below `b0` fall into no bucket.
#[derive(Debug, PartialEq, Clone)]
pub struct Bins {
    bounds: Vec<f64>,
    open_ended: bool,
}

impl Bins {
    /// Creates bins from ascending bounds. Returns `None` for fewer than one bound or for bounds
    /// that are not finite and strictly increasing.
    pub fn new(bounds: Vec<f64>, open_ended: bool) -> Option<Self> {
        let increasing = bounds.windows(2).all(|pair| pair[0] < pair[1]);
        let finite = bounds.iter().all(|bound| bound.is_finite());
        if bounds.is_empty() || !increasing || !finite || (bounds.len() == 1 && !open_ended) {
            return None;
        }
        Some(Self { bounds, open_ended })
    }

    /// Creates bins from bounds known to be finite and strictly increasing.
    pub(crate) fn from_increasing(bounds: Vec<f64>, open_ended: bool) -> Self {
        Self { bounds, open_ended }
    }

    /// Returns the number of buckets.
    pub fn len(&self) -> usize {
        self.bounds.len() - 1 + usize::from(self.open_ended)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Builds the expression mapping the numeric column `column` to bucket labels.
    ///
    /// Missing values and values outside all buckets map to a missing label.
    pub fn expr(&self, column: &str) -> Expr {
        let value = col(column).cast(DataType::Float64);
        let mut labels = lit(NULL).cast(DataType::UInt32);

        if let (true, Some(&top)) = (self.open_ended, self.bounds.last()) {
            labels = when(value.clone().gt(lit(top)))
                .then(lit(self.bounds.len() as u32))
                .otherwise(labels);
        }
        for (index, pair) in self.bounds.windows(2).enumerate().rev() {
            let bucket = value.clone().gt(lit(pair[0])).and(value.clone().lt_eq(lit(pair[1])));
            labels = when(bucket).then(lit(index as u32 + 1)).otherwise(labels);
        }
        labels
    }
}
