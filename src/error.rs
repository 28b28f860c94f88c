use thiserror::Error;

#[derive(Error, Debug)]
pub enum KsdError {
    #[error("{0}")]
    Usage(String),

    #[error("{stderr}")]
    Kubectl { status: i32, stderr: String },

    #[error("invalid json: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("invalid yaml: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("invalid base64 in data key `{key}`: {source}")]
    Decode {
        key: String,
        source: base64::DecodeError,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KsdError>;
