// Top Level Constants

/// Horizon years are converted to days with a flat 365, leap days ignored.
pub const DAYS_PER_YEAR: u32 = 365;

pub const MIN_HORIZON_YEARS: u8 = 1;
pub const MAX_HORIZON_YEARS: u8 = 4;
pub const DEFAULT_HORIZON_YEARS: u8 = 1;

/// Rows shown by the "tail" previews (matches a dataframe `tail()`).
pub const TAIL_ROWS: usize = 5;

pub mod plot {
    /// Fallback y-range when a series is flat.
    pub const MIN_Y_SPAN: f64 = 1.0;
}
