//! Torque job-control adapter: submit, status, delete.

use std::path::Path;

use tokio::fs;
use tracing::{debug, warn};

use oakbridge_status::Status;

use crate::connection::BatchConnector;
use crate::depend::DependencySpec;
use crate::error::TorqueResult;
use crate::router::{host_for_job_id, host_for_script};
use crate::translate::status_for_code;

/// Stateless façade over the batch-connection boundary.
///
/// Routes each operation to the backend host a job belongs to, encodes
/// dependency chains into the scheduler's wire syntax, and normalizes raw
/// state codes into [`Status`] values. Holds no state beyond the injected
/// connector; safe to share across callers.
pub struct TorqueAdapter<C> {
    connector: C,
}

impl<C: BatchConnector> TorqueAdapter<C> {
    /// Create an adapter over the given connector.
    pub fn new(connector: C) -> Self {
        Self { connector }
    }

    /// Submit a job script, optionally depending on prior jobs.
    ///
    /// Reads the script, routes to the host named by its `#PBS -q`
    /// directive, and submits with the rendered dependency argument (or
    /// none when `depends_on` renders empty). Returns the new job id.
    ///
    /// IO, connection, and submission failures propagate; a failed submit
    /// leaves nothing to clean up client-side.
    pub async fn submit(
        &self,
        script: &Path,
        depends_on: &DependencySpec,
    ) -> TorqueResult<String> {
        let contents = fs::read_to_string(script).await?;
        let host = host_for_script(&contents);
        let depend = depends_on.to_argument();

        debug!(
            "Submitting {} to {host} (depend: {:?})",
            script.display(),
            depend
        );

        let conn = self.connector.connect(host).await?;
        conn.submit(&contents, depend.as_deref()).await
    }

    /// Query the status of a job.
    ///
    /// Never fails: callers poll frequently and must not crash on transient
    /// scheduler errors. Any connect or query failure is logged and
    /// reported as [`Status::Unavailable`] — an observation the caller must
    /// not cache.
    pub async fn status(&self, job_id: &str) -> Status {
        let host = host_for_job_id(job_id);

        let conn = match self.connector.connect(host).await {
            Ok(conn) => conn,
            Err(err) => {
                warn!("Status of {job_id} unavailable: {err}");
                return Status::Unavailable;
            }
        };

        match conn.query_state(job_id).await {
            Ok(code) => status_for_code(code.as_deref()),
            Err(err) => {
                warn!("Status of {job_id} unavailable: {err}");
                Status::Unavailable
            }
        }
    }

    /// Delete a job.
    ///
    /// The outcome of the delete is not validated: the result is
    /// optimistic-only and the return value is always `true`. Known gap,
    /// kept as-is.
    pub async fn delete(&self, job_id: &str) -> bool {
        let host = host_for_job_id(job_id);

        let outcome = match self.connector.connect(host).await {
            Ok(conn) => conn.delete(job_id).await,
            Err(err) => Err(err),
        };

        if let Err(err) = outcome {
            debug!("Ignoring delete failure for {job_id}: {err}");
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockBatch;

    #[tokio::test]
    async fn test_status_translates_raw_code() {
        let batch = MockBatch::new();
        batch.set_state("100.oak-batch.osc.edu", Some("Q"));

        let adapter = TorqueAdapter::new(batch);
        assert_eq!(
            adapter.status("100.oak-batch.osc.edu").await,
            Status::Queued
        );
    }

    #[tokio::test]
    async fn test_status_absorbs_query_failure() {
        let batch = MockBatch::new();
        batch.fail_queries();

        let adapter = TorqueAdapter::new(batch);
        assert_eq!(adapter.status("12345").await, Status::Unavailable);
    }

    #[tokio::test]
    async fn test_status_absorbs_connect_failure() {
        let batch = MockBatch::new();
        batch.fail_connects();

        let adapter = TorqueAdapter::new(batch);
        assert_eq!(adapter.status("12345").await, Status::Unavailable);
    }

    #[tokio::test]
    async fn test_delete_is_optimistic() {
        let batch = MockBatch::new();
        batch.fail_deletes();

        let adapter = TorqueAdapter::new(batch);
        assert!(adapter.delete("100.oak-batch.osc.edu").await);
    }
}
