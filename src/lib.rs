//! Ballast - A sequence kept continuously sorted by per-element weight.
//!
//! Every element entering a [`list::WeightedList`] is assigned a weight by a
//! function fixed at construction. Weights must fall inside a configured
//! range, stored weights are always non-decreasing, and any mutation that
//! would break either rule is rejected without touching the list.
//!
//! # Quick Start
//!
//! ```
//! use ballast::bounds::Bounds;
//! use ballast::list::WeightedList;
//!
//! // Tasks ordered by priority, priorities confined to [0, 10].
//! let mut tasks = WeightedList::new(Bounds::inclusive(0.0, 10.0), |t: &(&str, f64)| t.1);
//!
//! assert!(tasks.push(("fix the bug", 3.0)));
//! assert!(tasks.push(("ship it", 1.0)));
//! assert!(!tasks.push(("imaginary", 99.0))); // out of bounds, dropped
//!
//! assert_eq!(tasks.get(0), Some(&("ship it", 1.0)));
//! assert_eq!(tasks.weights(), &[1.0, 3.0]);
//! ```

pub mod bounds;
pub mod cursor;
pub mod error;
pub mod list;
