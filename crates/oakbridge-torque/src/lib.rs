//! Torque/PBS job-control bridge.
//!
//! Client-side façade over a set of Torque batch schedulers spread across
//! named clusters (oakley, glenn, ruby, quick). The bridge does three
//! things:
//!
//! - routes each command to the backend host a job belongs to, from the
//!   `#PBS -q` directive in a job script or markers in a job id;
//! - encodes dependency chains into the scheduler's `-W depend=` syntax;
//! - normalizes raw single-letter state codes into the
//!   [`Status`](oakbridge_status::Status) lattice, absorbing query
//!   failures as `Unavailable` so polling callers never crash on a
//!   scheduler hiccup.
//!
//! Wire-level transport is out of scope: the surrounding system supplies a
//! [`BatchConnector`] and the bridge obtains a short-lived handle per
//! operation. A scriptable [`mock::MockBatch`] backend is exported for
//! tests.
//!
//! # Example
//!
//! ```
//! use oakbridge_torque::{DependencySpec, TorqueAdapter};
//! use oakbridge_torque::mock::MockBatch;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let adapter = TorqueAdapter::new(MockBatch::new());
//!
//! let deps = DependencySpec::new().after("afterany", ["1.oak-batch.osc.edu"]);
//! assert_eq!(deps.to_argument().as_deref(), Some("afterany:1.oak-batch.osc.edu"));
//!
//! // Query failures surface as Unavailable, never as an error.
//! let status = adapter.status("12345").await;
//! assert!(!status.is_valid());
//! # }
//! ```

pub mod adapter;
pub mod connection;
pub mod depend;
pub mod error;
pub mod mock;
pub mod router;
pub mod translate;

pub use adapter::TorqueAdapter;
pub use connection::{BatchConnection, BatchConnector};
pub use depend::DependencySpec;
pub use error::{TorqueError, TorqueResult};
pub use router::{host_for_job_id, host_for_script, Host, DEFAULT_HOST};
pub use translate::status_for_code;
