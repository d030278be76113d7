#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("io error: {0:?}")]
    IO(#[from] std::io::Error),

    #[error("malformed card catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed config: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("invalid config: {0}")]
    Config(String),
}
