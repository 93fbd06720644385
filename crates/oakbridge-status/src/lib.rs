//! Normalized batch job status lattice.
//!
//! Torque/PBS schedulers report job state as a single-character code whose
//! vocabulary varies by cluster and is only partially documented. This crate
//! defines the small closed set of normalized states the rest of the system
//! reasons about, together with the total precedence order used to merge the
//! states of related jobs (for example the sub-jobs of an array job) into a
//! single representative value.
//!
//! # Example
//!
//! ```
//! use oakbridge_status::Status;
//!
//! let a = Status::from_code("Q")?;
//! let b = Status::from_code("C")?;
//!
//! // The most active status wins.
//! assert_eq!(a.merge(b), Status::Queued);
//! assert!(a.is_active());
//! # Ok::<(), oakbridge_status::InvalidStatusCode>(())
//! ```

pub mod status;

pub use status::{InvalidStatusCode, Status};
