//! # formkit-util: Form Utilities
//!
//! Helpers that sit next to the validators in a form handler:
//!
//! - [`merge`]: shallow union of JSON objects, later keys winning.
//! - [`interval`]: elapsed time between two `HH:MM` clock times.
//! - [`dropdown`]: option lists for `<select>`-style controls built from
//!   JSON records.

pub mod dropdown;
pub mod interval;
pub mod merge;

pub use dropdown::{DropDownList, OptionFields, SelectOption};
pub use interval::{hours_interval, hours_interval_with, HourMinute};
pub use merge::{merge_objects, merge_values};
