//! # formkit-cli: Command-Line Interface
//!
//! Thin clap front end over `formkit-validate` and `formkit-util`.
//!
//! ## Subcommands
//!
//! - `date`, `date-gt`: `DD/MM/YYYY` validity and ordering
//! - `cpf`, `cnpj`, `tax-id`: taxpayer number validation
//! - `check-digits`: complete a 9-digit CPF or 12-digit CNPJ base
//! - `merge`, `interval`: form utilities
//! - `batch`: evaluate a JSON/YAML list of checks
//!
//! ## Exit Codes
//!
//! Handlers return `0` for a positive result, `1` for a negative result,
//! and `2` when the input could not be evaluated. Operational failures
//! (unreadable files, bad config) surface as `anyhow` errors.

use std::path::Path;

use anyhow::Result;

use formkit_core::FormkitConfig;

pub mod batch;
pub mod util;
pub mod validate;

/// Exit code for a positive result.
pub const EXIT_OK: u8 = 0;
/// Exit code for a negative result.
pub const EXIT_NEGATIVE: u8 = 1;
/// Exit code for input that could not be evaluated.
pub const EXIT_UNUSABLE: u8 = 2;

/// Load the configuration at `path`, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<FormkitConfig> {
    match path {
        Some(path) => {
            let config = FormkitConfig::load(path)?;
            tracing::debug!(path = %path.display(), ?config, "loaded configuration");
            Ok(config)
        }
        None => Ok(FormkitConfig::default()),
    }
}

/// Map a boolean outcome onto the exit code convention.
pub fn exit_code(positive: bool) -> u8 {
    if positive {
        EXIT_OK
    } else {
        EXIT_NEGATIVE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formkit_core::{IntervalPolicy, LeapYearRule};
    use std::io::Write;

    #[test]
    fn no_path_yields_defaults() {
        assert_eq!(load_config(None).unwrap(), FormkitConfig::default());
    }

    #[test]
    fn loads_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "leap_year_rule: gregorian\ninterval_policy: wrap_midnight").unwrap();
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.leap_year_rule, LeapYearRule::Gregorian);
        assert_eq!(config.interval_policy, IntervalPolicy::WrapMidnight);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(&dir.path().join("formkit.yaml"))).unwrap_err();
        assert!(format!("{err:#}").contains("not found"));
    }
}
