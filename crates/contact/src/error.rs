pub const INVALID_NOTICE: &str = "入力内容をご確認ください。お名前・メールアドレスの入力と、個人情報の取り扱いへの同意が必要です。";
pub const REJECTED_NOTICE: &str = "送信に失敗しました。時間をおいて再試行してください。";
pub const TRANSPORT_NOTICE: &str =
    "送信時にエラーが発生しました。通信環境をご確認のうえ、再度お試しください。";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("form endpoint rejected the submission with status {0}")]
    Rejected(reqwest::StatusCode),

    #[error("form endpoint unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Fixed text shown to the visitor. Never carries endpoint detail.
    pub fn notice(&self) -> &'static str {
        match self {
            Error::Validate(_) => INVALID_NOTICE,
            Error::Rejected(_) => REJECTED_NOTICE,
            Error::Transport(_) => TRANSPORT_NOTICE,
        }
    }
}
