use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClickerError {
    #[error("Unknown upgrade id '{0}'")]
    UnknownUpgrade(String),

    #[error("Unknown multiplier id '{0}'")]
    UnknownMultiplier(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type ClickerResult<T> = Result<T, ClickerError>;
