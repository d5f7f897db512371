use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use varanno_refseq::DEFAULT_WINDOW_LENGTH;

use crate::consts::{DEFAULT_FLANK_COLUMN_OFFSET, DEFAULT_HEADER_LINES};

///
/// Tunables shared by the discovery and annotation steps, read from a TOML file.
/// Every key is optional.
///
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
#[serde(default)]
pub struct AnnotatorConfig {
    pub window_length: usize,
    pub header_lines: usize,
    pub flank_column_offset: usize,
    pub validate_frame: bool,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        AnnotatorConfig {
            window_length: DEFAULT_WINDOW_LENGTH,
            header_lines: DEFAULT_HEADER_LINES,
            flank_column_offset: DEFAULT_FLANK_COLUMN_OFFSET,
            validate_frame: true,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("window_length must be at least 1")]
    InvalidWindowLength,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

impl AnnotatorConfig {
    /// Window columns in a flank row describing an SNV: prev, one deviant per
    /// window position, next.
    pub fn snv_window_count(&self) -> usize {
        self.window_length + 2
    }

    /// Window columns in a flank row describing a deletion.
    pub fn deletion_window_count(&self) -> usize {
        self.window_length + 1
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.window_length == 0 {
            return Err(ConfigError::InvalidWindowLength);
        }
        Ok(())
    }
}

impl TryFrom<&Path> for AnnotatorConfig {
    type Error = ConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config: AnnotatorConfig = toml::from_str(&toml_str)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[rstest]
    fn test_defaults() {
        let config = AnnotatorConfig::default();
        assert_eq!(config.window_length, 14);
        assert_eq!(config.snv_window_count(), 16);
        assert_eq!(config.deletion_window_count(), 15);
        assert_eq!(config.validate_frame, true);
    }

    #[rstest]
    fn test_try_from_toml() {
        let file = write_config("window_length = 21\nvalidate_frame = false\n");
        let config = AnnotatorConfig::try_from(file.path()).unwrap();
        assert_eq!(
            config,
            AnnotatorConfig {
                window_length: 21,
                validate_frame: false,
                ..AnnotatorConfig::default()
            }
        );
    }

    #[rstest]
    fn test_empty_toml_is_default() {
        let file = write_config("");
        let config = AnnotatorConfig::try_from(file.path()).unwrap();
        assert_eq!(config, AnnotatorConfig::default());
    }

    #[rstest]
    #[case("window_length = 0\n")]
    #[case("window_length = \"fourteen\"\n")]
    #[case("not toml at all")]
    fn test_bad_config(#[case] contents: &str) {
        let file = write_config(contents);
        assert!(AnnotatorConfig::try_from(file.path()).is_err());
    }

    #[rstest]
    fn test_missing_file() {
        let result = AnnotatorConfig::try_from(Path::new("no/such/config.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
