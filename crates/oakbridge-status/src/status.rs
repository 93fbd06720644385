//! The job status value type and its precedence lattice.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when constructing a [`Status`] from a code outside the
/// closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid status code: {0:?}")]
pub struct InvalidStatusCode(pub String);

/// Normalized, externally observable state of a batch job.
///
/// Variants are declared in precedence order, lowest first; the derived
/// `Ord` is the lattice. Merging the statuses of a group of related jobs
/// picks the maximum, so the "most active" state always surfaces.
///
/// `Unavailable` is a null-object sentinel: it arises only when a status
/// query itself fails, never from a retrieved state code. It must not be
/// cached or treated as a valid observation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Status {
    /// Status could not be determined (query failed).
    Unavailable,
    /// Job has not been submitted to any scheduler.
    NotSubmitted,
    /// Job completed after having run.
    Completed,
    /// Job failed.
    ///
    /// Constructible but never produced by code translation; reserved for
    /// callers that learn of failure out of band.
    Failed,
    /// Job is held and will not run until released.
    Held,
    /// Job is queued, eligible to run or routed.
    Queued,
    /// Job is running.
    Running,
}

impl Status {
    /// All statuses, in precedence order (lowest first).
    pub const ALL: [Status; 7] = [
        Status::Unavailable,
        Status::NotSubmitted,
        Status::Completed,
        Status::Failed,
        Status::Held,
        Status::Queued,
        Status::Running,
    ];

    /// Construct a status from its raw code.
    ///
    /// The closed set is `"U"`, `""` (not submitted), `"C"`, `"F"`, `"H"`,
    /// `"Q"`, `"R"`. Any other code is rejected — this constructor never
    /// coerces.
    pub fn from_code(code: &str) -> Result<Self, InvalidStatusCode> {
        match code {
            "U" => Ok(Status::Unavailable),
            "" => Ok(Status::NotSubmitted),
            "C" => Ok(Status::Completed),
            "F" => Ok(Status::Failed),
            "H" => Ok(Status::Held),
            "Q" => Ok(Status::Queued),
            "R" => Ok(Status::Running),
            other => Err(InvalidStatusCode(other.to_string())),
        }
    }

    /// The raw machine-readable code; empty for `NotSubmitted`.
    pub fn to_code(&self) -> &'static str {
        match self {
            Status::Unavailable => "U",
            Status::NotSubmitted => "",
            Status::Completed => "C",
            Status::Failed => "F",
            Status::Held => "H",
            Status::Queued => "Q",
            Status::Running => "R",
        }
    }

    /// Rank in the precedence order. Only meaningful for comparison; the
    /// concrete values are not a stable contract.
    pub fn precedence(&self) -> u8 {
        *self as u8
    }

    /// Merge two statuses, keeping the higher-precedence one.
    ///
    /// Commutative and idempotent; used to fold a collection of sub-job
    /// statuses into one representative value.
    pub fn merge(self, other: Status) -> Status {
        self.max(other)
    }

    /// True for every status except [`Status::Unavailable`].
    ///
    /// An unavailable status is a failed observation, not a state; it must
    /// not be cached.
    pub fn is_valid(&self) -> bool {
        !self.is_unavailable()
    }

    /// True iff the job occupies the scheduler: running, queued, or held.
    pub fn is_active(&self) -> bool {
        matches!(self, Status::Running | Status::Queued | Status::Held)
    }

    /// Check for [`Status::Unavailable`].
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Status::Unavailable)
    }

    /// Check for [`Status::NotSubmitted`].
    pub fn is_not_submitted(&self) -> bool {
        matches!(self, Status::NotSubmitted)
    }

    /// Check for [`Status::Completed`].
    pub fn is_completed(&self) -> bool {
        matches!(self, Status::Completed)
    }

    /// Check for [`Status::Failed`].
    pub fn is_failed(&self) -> bool {
        matches!(self, Status::Failed)
    }

    /// Check for [`Status::Held`].
    pub fn is_held(&self) -> bool {
        matches!(self, Status::Held)
    }

    /// Check for [`Status::Queued`].
    pub fn is_queued(&self) -> bool {
        matches!(self, Status::Queued)
    }

    /// Check for [`Status::Running`].
    pub fn is_running(&self) -> bool {
        matches!(self, Status::Running)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Unavailable => "Unavailable",
            Status::NotSubmitted => "Not Submitted",
            Status::Completed => "Completed",
            Status::Failed => "Failed",
            Status::Held => "Held",
            Status::Queued => "Queued",
            Status::Running => "Running",
        };
        write!(f, "{name}")
    }
}
