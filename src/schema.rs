use crate::binning::Bins;

/// Column the processors sort by and derive categories from.
pub const PRICE_COLUMN: &str = "selling_price";

/// Column added by the CSV processor to hold the bucket of [`PRICE_COLUMN`].
pub const PRICE_CATEGORY_COLUMN: &str = "price_category";

/// Delimiters tried by the CSV processor, in order of priority.
pub const CSV_DELIMITERS: [u8; 3] = [b';', b',', b'|'];

/// Names the columns a processor works on and how values are bucketed.
#[derive(Debug, PartialEq, Clone)]
pub struct Schema {
    pub sort_column: String,
    pub category_column: String,
    pub bins: Bins,
}

impl Schema {
    /// Price buckets: up to 500 000, up to 1 500 000 and everything above.
    pub fn price_bins() -> Bins {
        Bins::from_increasing(vec![0.0, 500_000.0, 1_500_000.0], true)
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self {
            sort_column: PRICE_COLUMN.to_string(),
            category_column: PRICE_CATEGORY_COLUMN.to_string(),
            bins: Self::price_bins(),
        }
    }
}
