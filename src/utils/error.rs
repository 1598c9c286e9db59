use thiserror::Error;

#[derive(Error, Debug)]
pub enum SampleError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for '{field}' ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SampleError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            SampleError::IoError(e) => format!("Could not read the config file: {}", e),
            SampleError::TomlError(_) => "The config file is not valid TOML".to_string(),
            SampleError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SampleError::IoError(_) => "Check that the --config path exists and is readable",
            SampleError::TomlError(_) => {
                "Expected optional [counter] value = <int> and [composite] items = [<str>, ...]"
            }
            SampleError::InvalidConfigValueError { .. } => {
                "Fix the reported field and run again"
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            SampleError::IoError(_) => 3,
            SampleError::TomlError(_) | SampleError::InvalidConfigValueError { .. } => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, SampleError>;
