use std::fmt;

use reqwest::blocking::Client;
use reqwest::header::COOKIE;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::ClientError;

/// What the server made of a submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect { hint: Option<String> },
    TooSoon { wait: Option<String> },
    AlreadySolved,
    Unknown,
}

impl Verdict {
    pub fn from_page(page: &str) -> Self {
        if page.contains("That's the right answer") {
            Verdict::Correct
        } else if page.contains("That's not the right answer") {
            let hint = ["too high", "too low"].into_iter().find(|h| page.contains(h));
            Verdict::Incorrect {hint: hint.map(str::to_owned)}
        } else if page.contains("You gave an answer too recently") {
            let wait = page.split_once("You have ")
                .and_then(|(_, rest)| rest.split_once(" left to wait"))
                .map(|(wait, _)| wait.to_owned());
            Verdict::TooSoon {wait}
        } else if page.contains("You don't seem to be solving the right level") {
            Verdict::AlreadySolved
        } else {
            Verdict::Unknown
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Correct => write!(f, "correct"),
            Verdict::Incorrect {hint: Some(hint)} => write!(f, "incorrect ({hint})"),
            Verdict::Incorrect {hint: None} => write!(f, "incorrect"),
            Verdict::TooSoon {wait: Some(wait)} => write!(f, "too soon, wait {wait}"),
            Verdict::TooSoon {wait: None} => write!(f, "too soon"),
            Verdict::AlreadySolved => write!(f, "already solved"),
            Verdict::Unknown => write!(f, "unrecognised response"),
        }
    }
}

/// Talks to the puzzle server on behalf of one logged-in session.
pub struct AocClient {
    http: Client,
    base_url: String,
    session: String,
}

impl AocClient {
    pub fn new(base_url: &str, session: Option<&str>) -> Result<Self, ClientError> {
        let session = session.filter(|s| !s.is_empty()).ok_or(ClientError::MissingSession)?;
        let http = Client::builder()
            .user_agent(concat!("aoc-solvings/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(AocClient {http, base_url: base_url.trim_end_matches('/').to_owned(), session: session.to_owned()})
    }

    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        Self::new(&config.base_url, config.session.as_deref())
    }

    fn day_url(&self, year: u16, day: u8) -> String {
        format!("{}/{}/day/{}", self.base_url, year, day)
    }

    pub fn fetch_input(&self, year: u16, day: u8) -> Result<String, ClientError> {
        let url = format!("{}/input", self.day_url(year, day));
        info!("fetching puzzle input from {url}");
        let resp = self.http.get(&url)
            .header(COOKIE, format!("session={}", self.session))
            .send()?;
        if !resp.status().is_success() {
            return Err(ClientError::Status {status: resp.status().as_u16(), url});
        }
        Ok(resp.text()?)
    }

    pub fn submit(&self, year: u16, day: u8, part: u8, answer: &str) -> Result<Verdict, ClientError> {
        let url = format!("{}/answer", self.day_url(year, day));
        info!("submitting {answer:?} for {year} day {day} part {part}");
        let level = part.to_string();
        let resp = self.http.post(&url)
            .header(COOKIE, format!("session={}", self.session))
            .form(&[("level", level.as_str()), ("answer", answer)])
            .send()?;
        if !resp.status().is_success() {
            return Err(ClientError::Status {status: resp.status().as_u16(), url});
        }
        let page = resp.text()?;
        debug!("submission response: {page}");
        Ok(Verdict::from_page(&page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdicts() {
        assert_eq!(Verdict::from_page("<p>That's the right answer!  You are one gold star closer"), Verdict::Correct);
        assert_eq!(
            Verdict::from_page("<p>That's not the right answer; your answer is too low."),
            Verdict::Incorrect {hint: Some("too low".to_owned())}
        );
        assert_eq!(
            Verdict::from_page("<p>You gave an answer too recently; you have to wait after submitting an answer before trying again.  You have 37s left to wait."),
            Verdict::TooSoon {wait: Some("37s".to_owned())}
        );
        assert_eq!(
            Verdict::from_page("<p>You don't seem to be solving the right level.  Did you already complete it?"),
            Verdict::AlreadySolved
        );
        assert_eq!(Verdict::from_page("<html></html>"), Verdict::Unknown);
    }

    #[test]
    fn session_required() {
        assert!(matches!(AocClient::new("http://localhost", None), Err(ClientError::MissingSession)));
        assert!(matches!(AocClient::new("http://localhost", Some("")), Err(ClientError::MissingSession)));
    }
}
