//! # formkit-core: Foundational Types
//!
//! The leaf crate of the formkit workspace. It defines the error hierarchy
//! every other crate reports through, plus the small set of policies that
//! alter validator behavior (leap-year rule, negative interval handling)
//! and the YAML configuration that carries them.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `formkit-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod config;
pub mod error;

pub use config::{FormkitConfig, IntervalPolicy, LeapYearRule};
pub use error::{
    json_type_name, ConfigError, FormkitError, IntervalError, MergeError, OptionError, ValidationError,
};
