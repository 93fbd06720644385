//! The batch-connection boundary.
//!
//! All wire-level detail — qsub/qstat/qdel invocation, RPC transport,
//! authentication — lives behind these traits and is supplied by the
//! surrounding system. The bridge obtains a fresh, short-lived handle per
//! operation and imposes no pooling, caching, or retry policy of its own.

use async_trait::async_trait;

use crate::error::TorqueResult;
use crate::router::Host;

/// A handle to one backend's batch scheduler.
#[async_trait]
pub trait BatchConnection: Send + Sync {
    /// Submit a job script, optionally with a rendered `-W depend=`
    /// argument value. Returns the new job id.
    async fn submit(&self, script: &str, depend: Option<&str>) -> TorqueResult<String>;

    /// Query the raw single-letter state code of a job.
    ///
    /// `Ok(None)` means the scheduler reported the job without a state
    /// attribute, which the bridge treats as completed. Failures (no such
    /// job, transport errors) are `Err`.
    async fn query_state(&self, job_id: &str) -> TorqueResult<Option<String>>;

    /// Delete a job.
    async fn delete(&self, job_id: &str) -> TorqueResult<()>;
}

/// Opens batch connections to named backend hosts.
#[async_trait]
pub trait BatchConnector: Send + Sync {
    /// Open a connection to the given host.
    async fn connect(&self, host: Host) -> TorqueResult<Box<dyn BatchConnection>>;
}
