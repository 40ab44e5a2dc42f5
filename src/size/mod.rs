//! Size classification
//!
//! Maps an aggregate changed-line count onto the configured tier labels.
//! Classification is total and deterministic: tiers are checked in ascending
//! bound order and the first tier whose exclusive upper bound exceeds the
//! aggregate wins. Anything at or above the largest finite bound is the
//! unbounded XL tier, which is the only tier considered oversized.

use crate::config::Thresholds;

/// Label applied to oversized pull requests (the unbounded sentinel tier)
pub const XL_LABEL: &str = "XL";

/// Outcome of classifying one pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// The label to apply; always usable, `XL_LABEL` for oversized changes
    pub label: String,

    /// True only when no finite tier matched
    pub oversized: bool,
}

/// Classify an aggregate changed-line count against the configured tiers
pub fn classify(total: u64, thresholds: &Thresholds) -> Classification {
    for tier in thresholds.tiers() {
        if total < tier.less_than {
            return Classification {
                label: tier.label.clone(),
                oversized: false,
            };
        }
    }
    Classification {
        label: XL_LABEL.to_string(),
        oversized: true,
    }
}

/// Every label this tool owns on a pull request: the finite tier labels plus
/// the XL sentinel, so a stale XL label is removed on reclassification
pub fn managed_labels(thresholds: &Thresholds) -> Vec<String> {
    let mut labels: Vec<String> = thresholds
        .tiers()
        .iter()
        .map(|tier| tier.label.clone())
        .collect();
    labels.push(XL_LABEL.to_string());
    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_smallest_tier() {
        let c = classify(0, &Thresholds::default());
        assert_eq!(c.label, "size/xs");
        assert!(!c.oversized);
    }

    #[test]
    fn test_default_tiers() {
        let t = Thresholds::default();
        assert_eq!(classify(5, &t).label, "size/xs");
        assert_eq!(classify(42, &t).label, "size/s");
        assert_eq!(classify(250, &t).label, "size/m");
        assert_eq!(classify(999, &t).label, "size/l");
        assert!(!classify(999, &t).oversized);
    }

    #[test]
    fn test_boundary_belongs_to_next_tier() {
        let t = Thresholds::default();
        // A bound is exclusive: hitting it exactly moves you up a tier
        assert_eq!(classify(9, &t).label, "size/xs");
        assert_eq!(classify(10, &t).label, "size/s");
        assert_eq!(classify(99, &t).label, "size/s");
        assert_eq!(classify(100, &t).label, "size/m");
        assert_eq!(classify(499, &t).label, "size/m");
        assert_eq!(classify(500, &t).label, "size/l");
    }

    #[test]
    fn test_largest_bound_is_oversized() {
        let t = Thresholds::default();
        let c = classify(1000, &t);
        assert_eq!(c.label, XL_LABEL);
        assert!(c.oversized);
        assert!(classify(u64::MAX, &t).oversized);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let t = Thresholds::default();
        for total in [0, 9, 10, 500, 999, 1000, 50_000] {
            assert_eq!(classify(total, &t), classify(total, &t));
        }
    }

    #[test]
    fn test_managed_labels_include_xl() {
        let labels = managed_labels(&Thresholds::default());
        assert_eq!(
            labels,
            vec!["size/xs", "size/s", "size/m", "size/l", XL_LABEL]
        );
    }

    #[test]
    fn test_custom_tiers() {
        let mut t = Thresholds::default();
        t.xs.less_than = 1;
        t.s.less_than = 2;
        t.m.less_than = 3;
        t.l.less_than = 4;
        assert_eq!(classify(0, &t).label, "size/xs");
        assert_eq!(classify(3, &t).label, "size/l");
        assert!(classify(4, &t).oversized);
    }
}
