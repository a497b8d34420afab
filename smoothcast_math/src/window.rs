//! Percentage based window selection

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A validated `[start, end]` percentage window over a sequence.
///
/// `PercentageWindow::new(25.0, 90.0)` ignores the first quarter and the last
/// tenth of the sequence it is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWindow")]
pub struct PercentageWindow {
    start: f64,
    end: f64,
}

/// Unchecked bounds as they appear in serialized form
#[derive(Deserialize)]
struct RawWindow {
    start: f64,
    end: f64,
}

impl TryFrom<RawWindow> for PercentageWindow {
    type Error = MathError;

    fn try_from(raw: RawWindow) -> Result<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl PercentageWindow {
    /// Create a window, rejecting bounds outside `[0, 100]` or `start > end`.
    pub fn new(start: f64, end: f64) -> Result<Self> {
        if !(0.0..=100.0).contains(&start) {
            return Err(MathError::InvalidInput(format!(
                "Start percentage must be in [0.0, 100.0], got {}",
                start
            )));
        }
        if !(0.0..=100.0).contains(&end) {
            return Err(MathError::InvalidInput(format!(
                "End percentage must be in [0.0, 100.0], got {}",
                end
            )));
        }
        if start > end {
            return Err(MathError::InvalidInput(format!(
                "Start percentage ({}) must not exceed end percentage ({})",
                start, end
            )));
        }

        Ok(Self { start, end })
    }

    /// The whole sequence
    pub fn full() -> Self {
        Self {
            start: 0.0,
            end: 100.0,
        }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    /// Positional range covered by this window in a sequence of `len` items.
    ///
    /// Both bounds are scaled by `len` and truncated towards zero.
    pub fn range(&self, len: usize) -> Range<usize> {
        let scale = |pct: f64| ((pct * len as f64) / 100.0).floor() as usize;
        let start = scale(self.start).min(len);
        let end = scale(self.end).min(len);
        start.min(end)..end
    }

    /// Borrow the part of `items` covered by this window.
    pub fn select<'a, U>(&self, items: &'a [U]) -> &'a [U] {
        &items[self.range(items.len())]
    }
}

impl Default for PercentageWindow {
    fn default() -> Self {
        Self::full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 100.0, 10, 0..10)]
    #[case(25.0, 90.0, 10, 2..9)]
    #[case(50.0, 50.0, 10, 5..5)]
    #[case(0.0, 100.0, 0, 0..0)]
    #[case(33.0, 66.0, 3, 0..1)]
    fn test_range(
        #[case] start: f64,
        #[case] end: f64,
        #[case] len: usize,
        #[case] expected: Range<usize>,
    ) {
        let window = PercentageWindow::new(start, end).unwrap();
        assert_eq!(window.range(len), expected);
    }

    #[rstest]
    #[case(-0.1, 50.0)]
    #[case(110.0, 100.0)]
    #[case(0.0, 100.5)]
    #[case(60.0, 40.0)]
    #[case(f64::NAN, 50.0)]
    fn test_invalid_bounds(#[case] start: f64, #[case] end: f64) {
        assert!(matches!(
            PercentageWindow::new(start, end),
            Err(MathError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_select() {
        let items = [1, 2, 3, 4];
        let window = PercentageWindow::new(50.0, 100.0).unwrap();
        assert_eq!(window.select(&items), &[3, 4]);
        assert_eq!(PercentageWindow::default().select(&items), &items);
    }

    #[test]
    fn test_deserialize_validates_bounds() {
        let window: PercentageWindow =
            serde_json::from_str(r#"{"start":40.0,"end":60.0}"#).unwrap();
        assert_eq!(window, PercentageWindow::new(40.0, 60.0).unwrap());

        let inverted = serde_json::from_str::<PercentageWindow>(r#"{"start":60.0,"end":40.0}"#);
        assert!(inverted.is_err());
        let out_of_range = serde_json::from_str::<PercentageWindow>(r#"{"start":0.0,"end":120.0}"#);
        assert!(out_of_range.is_err());
    }

    #[test]
    fn test_inverted_bounds_select_nothing() {
        let window = PercentageWindow {
            start: 60.0,
            end: 40.0,
        };
        assert_eq!(window.range(5), 2..2);
        assert!(window.select(&[1, 2, 3, 4, 5]).is_empty());
    }
}
