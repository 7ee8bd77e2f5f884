//! Offline provider serving canned pages from a JSON document.
//!
//! ```json
//! {
//!   "pages": {
//!     "followers/octocat": [[{ "login": "a" }], [{ "login": "b" }]],
//!     "branches/octocat/hello": [[{ "name": "main" }]]
//!   },
//!   "failures": {
//!     "stargazers/octocat/hello#1": { "status": 403, "body": { "message": "API rate limit exceeded" } }
//!   }
//! }
//! ```
//!
//! Keys are `<query>/<key>`; failures add `#<page>`. Pages past the end are
//! empty.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::DataProvider;
use crate::error::TransportFailure;
use crate::model::{Branch, User};

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to read fixture file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse fixture file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
struct FixtureDocument {
    #[serde(default)]
    pages: HashMap<String, Vec<Value>>,
    #[serde(default)]
    failures: HashMap<String, FixtureFailure>,
}

#[derive(Debug, Deserialize)]
struct FixtureFailure {
    status: u16,
    #[serde(default)]
    body: Option<Value>,
}

#[derive(Debug, Default)]
pub struct FixtureProvider {
    document: FixtureDocument,
}

impl FixtureProvider {
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let content = fs::read_to_string(path).map_err(|e| FixtureError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&content).map_err(|e| FixtureError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let document: FixtureDocument = serde_json::from_str(content)?;
        tracing::debug!(
            queries = document.pages.len(),
            failures = document.failures.len(),
            "Loaded provider fixture"
        );
        Ok(Self { document })
    }

    fn page<T: DeserializeOwned>(
        &self,
        query: &str,
        key: &str,
        page: u32,
    ) -> Result<Vec<T>, TransportFailure> {
        let query_key = format!("{}/{}", query, key);

        if let Some(failure) = self.document.failures.get(&format!("{}#{}", query_key, page)) {
            let body = match &failure.body {
                Some(Value::String(raw)) => raw.clone().into_bytes(),
                Some(value) => value.to_string().into_bytes(),
                None => Vec::new(),
            };
            return Err(TransportFailure::Status {
                status: failure.status,
                body,
            });
        }

        let index = page.checked_sub(1).ok_or_else(|| {
            TransportFailure::Protocol(format!("page numbers start at 1, got {}", page))
        })? as usize;

        match self.document.pages.get(&query_key).and_then(|pages| pages.get(index)) {
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| TransportFailure::Protocol(format!("{}: {}", query_key, e))),
            None => Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl DataProvider for FixtureProvider {
    async fn user_followers(&self, username: &str, page: u32) -> Result<Vec<User>, TransportFailure> {
        self.page("followers", username, page)
    }

    async fn user_following(&self, username: &str, page: u32) -> Result<Vec<User>, TransportFailure> {
        self.page("following", username, page)
    }

    async fn watchers(&self, fullname: &str, page: u32) -> Result<Vec<User>, TransportFailure> {
        self.page("watchers", fullname, page)
    }

    async fn stargazers(&self, fullname: &str, page: u32) -> Result<Vec<User>, TransportFailure> {
        self.page("stargazers", fullname, page)
    }

    async fn contributors(&self, fullname: &str, page: u32) -> Result<Vec<User>, TransportFailure> {
        self.page("contributors", fullname, page)
    }

    async fn branches(&self, fullname: &str, page: u32) -> Result<Vec<Branch>, TransportFailure> {
        self.page("branches", fullname, page)
    }
}
