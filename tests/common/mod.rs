//! Shared test utilities and a gated mock provider.

#![allow(dead_code, unused_imports)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use hubview::activity::BusyTracker;
use hubview::error::TransportFailure;
use hubview::model::{Branch, Commit, User};
use hubview::provider::{DataProvider, SharedProvider};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tokio::sync::{mpsc, oneshot, watch};

pub const TIMEOUT: Duration = Duration::from_secs(2);

/// One provider call waiting for the test to settle it.
///
/// Dropping a call without answering leaves it in flight forever.
pub struct PendingCall {
    pub query: &'static str,
    pub key: String,
    pub page: u32,
    reply: oneshot::Sender<Result<Value, TransportFailure>>,
}

impl std::fmt::Debug for PendingCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}#{}", self.query, self.key, self.page)
    }
}

impl PendingCall {
    pub fn respond_users(self, logins: &[&str]) {
        let users: Vec<Value> = logins.iter().map(|login| json!({ "login": login })).collect();
        let _ = self.reply.send(Ok(Value::Array(users)));
    }

    pub fn respond_branches(self, names: &[&str]) {
        let branches: Vec<Value> = names
            .iter()
            .map(|name| json!({ "name": name, "commit": { "sha": format!("{:0<40}", name) } }))
            .collect();
        let _ = self.reply.send(Ok(Value::Array(branches)));
    }

    pub fn respond_raw(self, value: Value) {
        let _ = self.reply.send(Ok(value));
    }

    pub fn fail(self, failure: TransportFailure) {
        let _ = self.reply.send(Err(failure));
    }
}

/// Provider whose calls are handed to the test instead of answered.
pub struct GatedProvider {
    calls: mpsc::UnboundedSender<PendingCall>,
}

/// Receiving end of a [`GatedProvider`].
pub struct CallQueue {
    calls: mpsc::UnboundedReceiver<PendingCall>,
}

impl CallQueue {
    /// Next call issued to the provider. Panics if none arrives in time.
    pub async fn next(&mut self) -> PendingCall {
        tokio::time::timeout(TIMEOUT, self.calls.recv())
            .await
            .expect("Timed out waiting for a provider call")
            .expect("Provider dropped")
    }

    /// Assert no call is waiting right now.
    pub fn assert_idle(&mut self) {
        if let Ok(call) = self.calls.try_recv() {
            panic!("Unexpected provider call {:?}", call);
        }
    }
}

pub fn gated_provider() -> (SharedProvider, CallQueue) {
    let (calls, rx) = mpsc::unbounded_channel();
    (Arc::new(GatedProvider { calls }), CallQueue { calls: rx })
}

impl GatedProvider {
    async fn call<T: DeserializeOwned>(
        &self,
        query: &'static str,
        key: &str,
        page: u32,
    ) -> Result<Vec<T>, TransportFailure> {
        let (reply, answer) = oneshot::channel();
        self.calls
            .send(PendingCall {
                query,
                key: key.to_string(),
                page,
                reply,
            })
            .map_err(|_| TransportFailure::Network("call queue closed".to_string()))?;

        let value = match answer.await {
            Ok(result) => result?,
            Err(_) => std::future::pending().await,
        };
        serde_json::from_value(value).map_err(|e| TransportFailure::Protocol(e.to_string()))
    }
}

#[async_trait]
impl DataProvider for GatedProvider {
    async fn user_followers(&self, username: &str, page: u32) -> Result<Vec<User>, TransportFailure> {
        self.call("followers", username, page).await
    }

    async fn user_following(&self, username: &str, page: u32) -> Result<Vec<User>, TransportFailure> {
        self.call("following", username, page).await
    }

    async fn watchers(&self, fullname: &str, page: u32) -> Result<Vec<User>, TransportFailure> {
        self.call("watchers", fullname, page).await
    }

    async fn stargazers(&self, fullname: &str, page: u32) -> Result<Vec<User>, TransportFailure> {
        self.call("stargazers", fullname, page).await
    }

    async fn contributors(&self, fullname: &str, page: u32) -> Result<Vec<User>, TransportFailure> {
        self.call("contributors", fullname, page).await
    }

    async fn branches(&self, fullname: &str, page: u32) -> Result<Vec<Branch>, TransportFailure> {
        self.call("branches", fullname, page).await
    }
}

pub fn users(logins: &[&str]) -> Vec<User> {
    logins.iter().map(|login| User::new(*login)).collect()
}

pub fn logins(users: &[User]) -> Vec<String> {
    users.iter().map(|user| user.login.clone()).collect()
}

/// Wait until `rx` holds a value matching `predicate`.
pub async fn wait_until<T, F>(rx: &mut watch::Receiver<T>, predicate: F)
where
    F: FnMut(&T) -> bool,
{
    tokio::time::timeout(TIMEOUT, rx.wait_for(predicate))
        .await
        .expect("Timed out waiting for watch value")
        .expect("Watch sender dropped");
}

/// Wait until the tracker goes idle.
pub async fn wait_idle(tracker: &BusyTracker) {
    let mut busy = tracker.subscribe();
    wait_until(&mut busy, |busy| !*busy).await;
}

/// Let spawned tasks run until nothing is left to do.
pub async fn drain() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}

/// A status failure whose body is a well-formed error document.
pub fn status_failure(status: u16, message: &str) -> TransportFailure {
    TransportFailure::Status {
        status,
        body: json!({ "message": message }).to_string().into_bytes(),
    }
}
