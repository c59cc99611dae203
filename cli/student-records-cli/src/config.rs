//! CLI configuration loaded via OrthoConfig.

use std::ffi::OsString;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::error::CliError;

/// Data file used when none is configured.
pub const DEFAULT_DATA_FILE: &str = "students.json";

/// Log filter used when neither `RUST_LOG` nor the settings supply one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Configuration values for a menu session.
///
/// Values are layered from defaults, configuration files, environment
/// variables prefixed with `STUDENT_RECORDS_` and command-line flags.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "STUDENT_RECORDS")]
pub struct CliSettings {
    /// Snapshot file loaded at startup and written on "Save and Exit".
    #[ortho_config(default = DEFAULT_DATA_FILE.to_owned())]
    pub data_file: String,
    /// Tracing filter directive applied when `RUST_LOG` is unset.
    #[ortho_config(default = DEFAULT_LOG_FILTER.to_owned())]
    pub log_filter: String,
}

impl CliSettings {
    /// Resolves settings from the given command line plus environment and
    /// configuration files.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Config`] when a source holds an invalid value or an
    /// unknown flag is supplied.
    pub fn load<I, T>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::load_from_iter(args).map_err(|err| CliError::Config {
            message: err.to_string(),
        })
    }

    /// Returns the configured data file.
    #[must_use]
    pub fn data_file(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(self.data_file.as_str())
    }

    /// Returns the configured log filter.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for CLI configuration parsing.

    use super::*;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> CliSettings {
        CliSettings::load([OsString::from("student-records")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("STUDENT_RECORDS_DATA_FILE", None::<String>),
            ("STUDENT_RECORDS_LOG_FILTER", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.data_file(), Utf8PathBuf::from(DEFAULT_DATA_FILE));
        assert_eq!(settings.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "STUDENT_RECORDS_DATA_FILE",
                Some("/tmp/records/students.json".to_owned()),
            ),
            ("STUDENT_RECORDS_LOG_FILTER", Some("debug".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.data_file(),
            Utf8PathBuf::from("/tmp/records/students.json")
        );
        assert_eq!(settings.log_filter(), "debug");
    }

    #[rstest]
    fn command_line_flags_are_respected() {
        let _guard = lock_env([
            ("STUDENT_RECORDS_DATA_FILE", None::<String>),
            ("STUDENT_RECORDS_LOG_FILTER", None::<String>),
        ]);

        let settings = CliSettings::load([
            OsString::from("student-records"),
            OsString::from("--data-file"),
            OsString::from("cli.json"),
        ])
        .expect("config should load");
        assert_eq!(settings.data_file(), Utf8PathBuf::from("cli.json"));
        assert_eq!(settings.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[rstest]
    fn unset_fields_keep_defaults_when_another_is_supplied() {
        let _guard = lock_env([
            ("STUDENT_RECORDS_DATA_FILE", None::<String>),
            ("STUDENT_RECORDS_LOG_FILTER", Some("info".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.data_file(), Utf8PathBuf::from(DEFAULT_DATA_FILE));
        assert_eq!(settings.log_filter(), "info");
    }
}
