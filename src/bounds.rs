//! The weight-range predicate applied before any weight enters a list.

use std::fmt;

/// A range of permitted weights, with each end independently inclusive or
/// exclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
    pub lower_inclusive: bool,
    pub upper_inclusive: bool,
}

impl Bounds {
    pub fn new(lower: f64, lower_inclusive: bool, upper: f64, upper_inclusive: bool) -> Bounds {
        Bounds { lower, upper, lower_inclusive, upper_inclusive }
    }

    /// The closed range `[lower, upper]`.
    pub fn inclusive(lower: f64, upper: f64) -> Bounds {
        Bounds::new(lower, true, upper, true)
    }

    /// The open range `(lower, upper)`.
    pub fn exclusive(lower: f64, upper: f64) -> Bounds {
        Bounds::new(lower, false, upper, false)
    }

    /// The range admitting every real weight.
    pub fn all() -> Bounds {
        Bounds::inclusive(f64::NEG_INFINITY, f64::INFINITY)
    }

    /// Whether `weight` satisfies both bound tests.
    ///
    /// NaN fails both comparisons, so a NaN weight is rejected no matter
    /// how the bounds are configured.
    pub fn contains(&self, weight: f64) -> bool {
        let above = if self.lower_inclusive {
            weight >= self.lower
        } else {
            weight > self.lower
        };
        let below = if self.upper_inclusive {
            weight <= self.upper
        } else {
            weight < self.upper
        };
        above && below
    }
}

impl fmt::Display for Bounds {
    /// Interval notation: `[1, 2]`, `(0, 1]`, ...
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.lower_inclusive { '[' } else { '(' };
        let close = if self.upper_inclusive { ']' } else { ')' };
        write!(f, "{open}{}, {}{close}", self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inclusive_admits_endpoints() {
        let bounds = Bounds::inclusive(1.0, 2.0);
        assert!(bounds.contains(1.0));
        assert!(bounds.contains(1.5));
        assert!(bounds.contains(2.0));
        assert!(!bounds.contains(0.999));
        assert!(!bounds.contains(2.001));
    }

    #[test]
    fn exclusive_rejects_endpoints() {
        let bounds = Bounds::exclusive(1.0, 2.0);
        assert!(!bounds.contains(1.0));
        assert!(bounds.contains(1.5));
        assert!(!bounds.contains(2.0));
    }

    #[test]
    fn mixed_ends() {
        let bounds = Bounds::new(0.0, false, 1.0, true);
        assert!(!bounds.contains(0.0));
        assert!(bounds.contains(1.0));
    }

    #[test]
    fn nan_never_admitted() {
        assert!(!Bounds::inclusive(1.0, 2.0).contains(f64::NAN));
        assert!(!Bounds::all().contains(f64::NAN));
    }

    #[test]
    fn all_admits_infinities() {
        assert!(Bounds::all().contains(f64::NEG_INFINITY));
        assert!(Bounds::all().contains(f64::INFINITY));
        assert!(Bounds::all().contains(0.0));
    }

    #[test]
    fn display_notation() {
        assert_eq!(Bounds::inclusive(1.0, 2.0).to_string(), "[1, 2]");
        assert_eq!(Bounds::exclusive(0.0, 1.0).to_string(), "(0, 1)");
        assert_eq!(Bounds::new(0.0, false, 1.0, true).to_string(), "(0, 1]");
    }
}
