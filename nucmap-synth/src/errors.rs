use thiserror::Error;

use nucmap_core::ReadCollectionError;

#[derive(Error, Debug)]
pub enum SyntheticMapError {
    #[error("Invalid synthetic map configuration: {0}")]
    Configuration(String),

    #[error(
        "Missing or invalid file extension in synthetic map config file. It must be `toml`, `yaml`, `yml` or `json`"
    )]
    InvalidConfigFileType,

    #[error(transparent)]
    Interval(#[from] ReadCollectionError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SyntheticMapError>;
