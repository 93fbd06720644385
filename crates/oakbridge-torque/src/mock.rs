//! In-memory batch backend for tests.
//!
//! Plays the role of a whole set of cluster schedulers: per-job states are
//! scripted up front, each failure point can be toggled, and every
//! submission and deletion is recorded for assertions. Exported so
//! downstream crates can test against the bridge without a real scheduler.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::connection::{BatchConnection, BatchConnector};
use crate::error::{TorqueError, TorqueResult};
use crate::router::Host;

/// A recorded job submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Host the connection was opened to.
    pub host: Host,
    /// Script contents as passed to the connection.
    pub script: String,
    /// Rendered dependency argument, if any.
    pub depend: Option<String>,
}

#[derive(Default)]
struct MockState {
    states: HashMap<String, Option<String>>,
    submissions: Vec<Submission>,
    deletions: Vec<(Host, String)>,
    fail_connects: bool,
    fail_submits: bool,
    fail_queries: bool,
    fail_deletes: bool,
}

struct MockInner {
    counter: AtomicU64,
    state: Mutex<MockState>,
}

/// Scriptable mock implementing [`BatchConnector`].
///
/// Cloning shares the underlying state, so a test can keep one handle for
/// assertions while the adapter owns another.
#[derive(Clone)]
pub struct MockBatch {
    inner: Arc<MockInner>,
}

impl MockBatch {
    /// Create a mock with no known jobs and all operations succeeding.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MockInner {
                counter: AtomicU64::new(1000),
                state: Mutex::new(MockState::default()),
            }),
        }
    }

    /// Script the raw state code a job reports. `None` means the scheduler
    /// knows the job but reports no state attribute.
    pub fn set_state(&self, job_id: &str, code: Option<&str>) {
        self.lock()
            .states
            .insert(job_id.to_string(), code.map(str::to_string));
    }

    /// Make every connect fail.
    pub fn fail_connects(&self) {
        self.lock().fail_connects = true;
    }

    /// Make every submit fail.
    pub fn fail_submits(&self) {
        self.lock().fail_submits = true;
    }

    /// Make every state query fail.
    pub fn fail_queries(&self) {
        self.lock().fail_queries = true;
    }

    /// Make every delete fail.
    pub fn fail_deletes(&self) {
        self.lock().fail_deletes = true;
    }

    /// Submissions recorded so far, in order.
    pub fn submissions(&self) -> Vec<Submission> {
        self.lock().submissions.clone()
    }

    /// Deletions recorded so far, in order.
    pub fn deletions(&self) -> Vec<(Host, String)> {
        self.lock().deletions.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.inner.state.lock().unwrap()
    }
}

impl Default for MockBatch {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BatchConnector for MockBatch {
    async fn connect(&self, host: Host) -> TorqueResult<Box<dyn BatchConnection>> {
        if self.lock().fail_connects {
            return Err(TorqueError::ConnectionFailed {
                host: host.to_string(),
                message: "mock connect failure".to_string(),
            });
        }

        Ok(Box::new(MockConnection {
            host,
            inner: Arc::clone(&self.inner),
        }))
    }
}

struct MockConnection {
    host: Host,
    inner: Arc<MockInner>,
}

impl MockConnection {
    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.inner.state.lock().unwrap()
    }

    fn next_job_id(&self) -> String {
        let n = self.inner.counter.fetch_add(1, Ordering::SeqCst);
        match self.host {
            Host::Oakley => format!("{n}.oak-batch.osc.edu"),
            Host::Glenn => format!("{n}.opt-batch.osc.edu"),
            Host::Ruby => n.to_string(),
            Host::Quick => format!("{n}.quick-batch.osc.edu"),
        }
    }
}

#[async_trait]
impl BatchConnection for MockConnection {
    async fn submit(&self, script: &str, depend: Option<&str>) -> TorqueResult<String> {
        let job_id = {
            let mut state = self.lock();
            if state.fail_submits {
                return Err(TorqueError::SubmitFailed(
                    "mock submit failure".to_string(),
                ));
            }

            state.submissions.push(Submission {
                host: self.host,
                script: script.to_string(),
                depend: depend.map(str::to_string),
            });
            drop(state);

            self.next_job_id()
        };

        // Fresh submissions show up as queued until rescripted.
        self.lock().states.insert(job_id.clone(), Some("Q".to_string()));
        Ok(job_id)
    }

    async fn query_state(&self, job_id: &str) -> TorqueResult<Option<String>> {
        let state = self.lock();
        if state.fail_queries {
            return Err(TorqueError::QueryFailed("mock query failure".to_string()));
        }

        state
            .states
            .get(job_id)
            .cloned()
            .ok_or_else(|| TorqueError::JobNotFound(job_id.to_string()))
    }

    async fn delete(&self, job_id: &str) -> TorqueResult<()> {
        let mut state = self.lock();
        if state.fail_deletes {
            return Err(TorqueError::DeleteFailed(
                "mock delete failure".to_string(),
            ));
        }

        state.deletions.push((self.host, job_id.to_string()));
        state.states.remove(job_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_job_ids_follow_host() {
        let batch = MockBatch::new();

        let conn = batch.connect(Host::Oakley).await.unwrap();
        let id = conn.submit("#!/bin/bash\n", None).await.unwrap();
        assert!(id.ends_with(".oak-batch.osc.edu"));

        let conn = batch.connect(Host::Ruby).await.unwrap();
        let id = conn.submit("#!/bin/bash\n", None).await.unwrap();
        assert!(id.bytes().all(|b| b.is_ascii_digit()));
    }

    #[tokio::test]
    async fn test_mock_records_and_scripts_state() {
        let batch = MockBatch::new();
        let conn = batch.connect(Host::Glenn).await.unwrap();

        let id = conn.submit("echo hi\n", Some("afterany:1")).await.unwrap();
        assert_eq!(conn.query_state(&id).await.unwrap().as_deref(), Some("Q"));

        batch.set_state(&id, Some("R"));
        assert_eq!(conn.query_state(&id).await.unwrap().as_deref(), Some("R"));

        conn.delete(&id).await.unwrap();
        assert!(conn.query_state(&id).await.is_err());

        assert_eq!(batch.submissions().len(), 1);
        assert_eq!(batch.deletions(), vec![(Host::Glenn, id)]);
    }

    #[tokio::test]
    async fn test_mock_unknown_job_is_not_found() {
        let batch = MockBatch::new();
        let conn = batch.connect(Host::Oakley).await.unwrap();

        assert!(matches!(
            conn.query_state("999.oak-batch.osc.edu").await,
            Err(TorqueError::JobNotFound(_))
        ));
    }
}
