use thiserror::Error;

#[derive(Error, Debug)]
pub enum QaplanError {
    #[error("test plan is missing section(s): {}", .0.join(", "))]
    MissingSections(Vec<String>),

    #[error("no input provided")]
    EmptyInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, QaplanError>;
