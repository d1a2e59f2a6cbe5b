use serde::{Deserialize, Serialize};

/// Visible x-window of the raw chart, chosen with the range sliders.
///
/// Stored in plot units (days since 1970-01-01) so it survives restarts; a window that
/// no longer overlaps the data falls back to the full range.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeWindow {
    span: Option<(f64, f64)>,
}

impl RangeWindow {
    /// Smallest window the sliders may select, in days.
    pub const MIN_WIDTH: f64 = 1.0;

    pub fn is_full(&self) -> bool {
        self.span.is_none()
    }

    /// The window clamped to `bounds`.
    pub fn resolve(&self, bounds: (f64, f64)) -> (f64, f64) {
        let (lo, hi) = bounds;
        match self.span {
            Some((from, to)) => {
                let from = from.clamp(lo, hi);
                let to = to.clamp(lo, hi);
                if to - from < Self::MIN_WIDTH {
                    bounds
                } else {
                    (from, to)
                }
            }
            None => bounds,
        }
    }

    pub fn set(&mut self, from: f64, to: f64, bounds: (f64, f64)) {
        self.span = if from <= bounds.0 && to >= bounds.1 {
            None
        } else {
            Some((from.min(to), from.max(to)))
        };
    }

    pub fn reset(&mut self) {
        self.span = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_window_shows_everything() {
        let w = RangeWindow::default();
        assert!(w.is_full());
        assert_eq!(w.resolve((10.0, 20.0)), (10.0, 20.0));
    }

    #[test]
    fn window_is_clamped_to_new_data() {
        let mut w = RangeWindow::default();
        w.set(12.0, 30.0, (10.0, 40.0));
        assert_eq!(w.resolve((10.0, 25.0)), (12.0, 25.0));
        assert_eq!(w.resolve((50.0, 60.0)), (50.0, 60.0));
    }

    #[test]
    fn selecting_the_whole_range_clears_the_window() {
        let mut w = RangeWindow::default();
        w.set(15.0, 18.0, (10.0, 20.0));
        assert!(!w.is_full());
        w.set(10.0, 20.0, (10.0, 20.0));
        assert!(w.is_full());
        w.set(18.0, 15.0, (10.0, 20.0));
        assert_eq!(w.resolve((10.0, 20.0)), (15.0, 18.0));
        w.reset();
        assert!(w.is_full());
    }
}
