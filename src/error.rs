use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecorAiError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DecorAiError>;
