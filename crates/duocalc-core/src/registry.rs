//! Selection of the computation pair for a run.

use std::sync::Arc;

use tracing::debug;

use crate::computation::{Computations, CustomComputations};
use crate::demo::{DemoCase, DemoComputations};

/// Parse a demo selector argument. Anything that is not an integer is `None`.
#[must_use]
pub fn parse_selector(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

/// Build the computation pair for `selector`.
///
/// Selectors 1–6 pick a demo pair; everything else, including no selector,
/// falls back to the identity pair.
#[must_use]
pub fn create_computations(selector: Option<i32>) -> Arc<dyn Computations> {
    match selector.and_then(DemoCase::new) {
        Some(case) => {
            debug!(case = case.number(), "using demo computations");
            Arc::new(DemoComputations::new(case))
        }
        None => {
            debug!(?selector, "using identity computations");
            Arc::new(CustomComputations::identity())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_selector() {
        assert_eq!(parse_selector("4"), Some(4));
        assert_eq!(parse_selector(" 2 "), Some(2));
        assert_eq!(parse_selector("-1"), Some(-1));
    }

    #[test]
    fn parse_invalid_selector() {
        assert_eq!(parse_selector(""), None);
        assert_eq!(parse_selector("two"), None);
        assert_eq!(parse_selector("1.5"), None);
    }

    #[test]
    fn demo_selectors_pick_demo_pairs() {
        for case in 1..=6 {
            assert_eq!(create_computations(Some(case)).name(), format!("demo-{case}"));
        }
    }

    #[test]
    fn other_selectors_fall_back_to_custom() {
        for selector in [None, Some(0), Some(7), Some(-3), Some(i32::MAX)] {
            assert_eq!(create_computations(selector).name(), "custom");
        }
    }
}
