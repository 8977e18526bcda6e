//! Consumed external interfaces: the word service and the pronunciation
//! audio service.
//!
//! Both are opaque HTTP endpoints on the same backend
//! (`/api/words?category=`, `/api/categories`, `/api/audio?char=|word=`).
//! The game treats them purely as data sources; serving them is out of
//! scope here.

use crate::constants::REQUEST_TIMEOUT_SECS;
use crate::words::WordEntry;
use std::error::Error;
use std::fmt;
use std::io::Read;
use std::time::Duration;

/// Failure from either external source.
#[derive(Debug)]
pub enum SourceError {
    /// The service answered 404: no such category, clip, or word.
    NotFound,
    /// Transport, status, or decode failure.
    Request(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::NotFound => write!(f, "not found"),
            SourceError::Request(msg) => write!(f, "request failed: {}", msg),
        }
    }
}

impl Error for SourceError {}

impl From<ureq::Error> for SourceError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(404, _) => SourceError::NotFound,
            other => SourceError::Request(other.to_string()),
        }
    }
}

impl From<std::io::Error> for SourceError {
    fn from(err: std::io::Error) -> Self {
        SourceError::Request(err.to_string())
    }
}

/// Supplies category word lists.
pub trait WordSource {
    fn word_list(&self, category: &str) -> Result<Vec<WordEntry>, SourceError>;
    fn categories(&self) -> Result<Vec<String>, SourceError>;
}

/// Supplies pronunciation clips as raw audio bytes.
pub trait AudioSource {
    fn letter_clip(&self, ch: char) -> Result<Vec<u8>, SourceError>;
    fn word_clip(&self, script: &str) -> Result<Vec<u8>, SourceError>;
}

/// HTTP client for the word/audio backend.
pub struct HttpSource {
    base_url: String,
    agent: ureq::Agent,
}

impl HttpSource {
    pub fn new(base_url: &str) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent,
        }
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/api/{}", self.base_url, name)
    }

    fn fetch_bytes(&self, request: ureq::Request) -> Result<Vec<u8>, SourceError> {
        let response = request.call()?;
        let mut bytes = Vec::new();
        response.into_reader().read_to_end(&mut bytes)?;
        Ok(bytes)
    }
}

impl WordSource for HttpSource {
    fn word_list(&self, category: &str) -> Result<Vec<WordEntry>, SourceError> {
        let list: Vec<WordEntry> = self
            .agent
            .get(&self.endpoint("words"))
            .query("category", category)
            .call()?
            .into_json()?;
        Ok(list)
    }

    fn categories(&self) -> Result<Vec<String>, SourceError> {
        let list: Vec<String> = self
            .agent
            .get(&self.endpoint("categories"))
            .call()?
            .into_json()?;
        Ok(list)
    }
}

impl AudioSource for HttpSource {
    fn letter_clip(&self, ch: char) -> Result<Vec<u8>, SourceError> {
        let request = self
            .agent
            .get(&self.endpoint("audio"))
            .query("char", &ch.to_string());
        self.fetch_bytes(request)
    }

    fn word_clip(&self, script: &str) -> Result<Vec<u8>, SourceError> {
        let request = self
            .agent
            .get(&self.endpoint("audio"))
            .query("word", script);
        self.fetch_bytes(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_building() {
        let source = HttpSource::new("http://localhost:3000");
        assert_eq!(source.endpoint("words"), "http://localhost:3000/api/words");
        assert_eq!(source.endpoint("audio"), "http://localhost:3000/api/audio");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let source = HttpSource::new("http://localhost:3000/");
        assert_eq!(
            source.endpoint("categories"),
            "http://localhost:3000/api/categories"
        );
    }

    #[test]
    fn test_status_404_maps_to_not_found() {
        let response = ureq::Response::new(404, "Not Found", "no such clip").unwrap();
        let err: SourceError = ureq::Error::Status(404, response).into();
        assert!(matches!(err, SourceError::NotFound));
    }

    #[test]
    fn test_other_status_maps_to_request_error() {
        let response = ureq::Response::new(500, "Internal Server Error", "boom").unwrap();
        let err: SourceError = ureq::Error::Status(500, response).into();
        assert!(matches!(err, SourceError::Request(_)));
    }

    #[test]
    fn test_source_error_display() {
        assert_eq!(SourceError::NotFound.to_string(), "not found");
        assert_eq!(
            SourceError::Request("timeout".to_string()).to_string(),
            "request failed: timeout"
        );
    }
}
