use thiserror::Error;

#[derive(Error, Debug)]
pub enum AocError {
    #[error("Correct answer couldn't be found")]
    AnswerNotFound,

    #[error("cannot parse line {line:?}: {reason}")]
    Parse { line: String, reason: String },

    #[error("parts must be a subset of \"ab\", got {0:?}")]
    BadParts(String),

    #[error("no solver for day {0}")]
    UnknownDay(u8),
}

impl AocError {
    pub fn parse(line: impl Into<String>, reason: impl Into<String>) -> Self {
        AocError::Parse {line: line.into(), reason: reason.into()}
    }
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("no session token: set AOC_SESSION or write it to ~/.config/aocd/token")]
    MissingSession,

    #[error("request to puzzle server failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("puzzle server answered {status} for {url}")]
    Status { status: u16, url: String },
}
