//! Translation of raw scheduler state codes into normalized statuses.

use oakbridge_status::Status;

/// Translate a raw Torque/PBS state code into a normalized [`Status`].
///
/// Torque reports single-letter codes (qstat: C, E, H, Q, R, S, T, W, ...);
/// the documented meaning varies by version and some codes are cluster
/// specific. The mapping is deliberately coarse:
///
/// - absent (or empty) and `C` mean the job finished;
/// - `Q`, `T`, and `W` all precede job start and fold into queued;
/// - `H` is held;
/// - everything else, including `S`, `E`, and codes we have never seen,
///   counts as running so an active job never disappears from view.
///
/// This function never fails and never produces [`Status::Failed`] or
/// [`Status::Unavailable`]. `Unavailable` is reserved for the caller when a
/// query itself fails; `Failed` has no translation rule at all and is only
/// reachable out of band.
pub fn status_for_code(code: Option<&str>) -> Status {
    match code.filter(|c| !c.is_empty()) {
        None | Some("C") => Status::Completed,
        Some("Q" | "T" | "W") => Status::Queued,
        Some("H") => Status::Held,
        Some(_) => Status::Running,
    }
}
