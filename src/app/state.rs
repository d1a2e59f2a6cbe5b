use serde::{Deserialize, Serialize};

use crate::domain::{Category, Horizon, Variant};
use crate::engine::ViewModel;

/// What the central panel is showing.
#[derive(Default)]
pub(crate) enum AppState {
    #[default]
    Empty,
    Ready(Box<ViewModel>),
    /// Last render failed; the message is the full error chain
    Failed(String),
}

/// User-facing control values, persisted between sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Controls {
    pub(crate) category: Category,
    pub(crate) horizon: Horizon,
}

impl Default for Controls {
    fn default() -> Self {
        Self::for_variant(Variant::default())
    }
}

impl Controls {
    pub(crate) fn for_variant(variant: Variant) -> Self {
        Self {
            category: variant.default_category(),
            horizon: Horizon::default(),
        }
    }

    /// Replaces a category the running dashboard does not track (e.g. restored from the other variant).
    pub(crate) fn sanitize(&mut self, variant: Variant) {
        if !variant.tracks(self.category) {
            self.category = variant.default_category();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_swaps_foreign_category() {
        let mut c = Controls {
            category: Category::Admissions,
            horizon: Horizon::new(3).unwrap(),
        };
        c.sanitize(Variant::ByCategory);
        assert_eq!(c.category, Category::Emergency);
        assert_eq!(c.horizon.years(), 3);

        c.category = Category::Clinic;
        c.sanitize(Variant::ByCategory);
        assert_eq!(c.category, Category::Clinic);
    }

    #[test]
    fn controls_restore_from_json() {
        let c: Controls = serde_json::from_str(r#"{"category":"Ward","horizon":2}"#).unwrap();
        assert_eq!(c.category, Category::Ward);
        assert_eq!(c.horizon.years(), 2);
        let bad: Result<Controls, _> = serde_json::from_str(r#"{"horizon":9}"#);
        assert!(bad.is_err());
    }
}
