use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {field} date '{value}': expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },

    #[error("failed to read keyword file '{path}': {message}")]
    KeywordFileReadError { path: PathBuf, message: String },

    #[error("failed to read config file '{path}': {message}")]
    ConfigFileReadError { path: PathBuf, message: String },

    #[error("failed to parse config file '{path}': {message}")]
    ConfigParseError { path: PathBuf, message: String },

    #[error("unsupported config format: {format} (expected json or yaml)")]
    UnsupportedFormat { format: String },
}

impl ConfigError {
    pub fn invalid_date(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidDate {
            field,
            value: value.into(),
        }
    }

    pub fn keyword_file_read_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::KeywordFileReadError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn config_file_read_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigFileReadError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn config_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }
}
