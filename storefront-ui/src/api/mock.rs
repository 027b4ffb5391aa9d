//! Scripted client for tests

use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::future;
use tokio::sync::oneshot;

use super::client::{url, ApiClient, ApiFuture, ApiResult, RequestFailed};

/// Client that answers from a table of scripted replies and records every
/// URL it was asked for. Unscripted paths fail with a 404.
#[derive(Default)]
pub struct MockClient {
    replies: RefCell<HashMap<String, ApiFuture>>,
    requests: RefCell<Vec<String>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `path` immediately with `body`
    pub fn reply(self, path: &str, body: Value) -> Self {
        self.script(path, Box::pin(future::ready(Ok(body))))
    }

    /// Reject `path` immediately with `message`
    pub fn reject(self, path: &str, message: &str) -> Self {
        let err = RequestFailed::new(message);
        self.script(path, Box::pin(future::ready(Err(err))))
    }

    /// Hold `path` open until the returned sender fires
    pub fn deferred(self, path: &str) -> (Self, oneshot::Sender<ApiResult<Value>>) {
        let (tx, rx) = oneshot::channel();
        let pending = Box::pin(async move {
            rx.await
                .unwrap_or_else(|_| Err(RequestFailed::new("reply dropped")))
        });
        (self.script(path, pending), tx)
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    fn script(self, path: &str, reply: ApiFuture) -> Self {
        self.replies.borrow_mut().insert(path.to_string(), reply);
        self
    }
}

impl ApiClient for MockClient {
    fn get(&self, path: &str) -> ApiFuture {
        self.requests.borrow_mut().push(url(path));

        self.replies
            .borrow_mut()
            .remove(path)
            .unwrap_or_else(|| Box::pin(future::ready(Err(RequestFailed::status(404)))))
    }
}
