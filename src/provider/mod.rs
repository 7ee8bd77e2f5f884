//! The data provider seam.
//!
//! Presentation logic only depends on this trait. Transport,
//! authentication and encoding are the implementor's concern; failures
//! come back as [`TransportFailure`].

mod fixture;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::TransportFailure;
use crate::model::{Branch, User};

pub use fixture::{FixtureError, FixtureProvider};

/// Paged queries against the backing API. Pages start at 1.
#[async_trait]
pub trait DataProvider: Send + Sync {
    async fn user_followers(&self, username: &str, page: u32)
        -> Result<Vec<User>, TransportFailure>;

    async fn user_following(&self, username: &str, page: u32)
        -> Result<Vec<User>, TransportFailure>;

    async fn watchers(&self, fullname: &str, page: u32) -> Result<Vec<User>, TransportFailure>;

    async fn stargazers(&self, fullname: &str, page: u32) -> Result<Vec<User>, TransportFailure>;

    async fn contributors(&self, fullname: &str, page: u32)
        -> Result<Vec<User>, TransportFailure>;

    async fn branches(&self, fullname: &str, page: u32) -> Result<Vec<Branch>, TransportFailure>;
}

/// Provider handle injected into every screen.
pub type SharedProvider = Arc<dyn DataProvider>;
