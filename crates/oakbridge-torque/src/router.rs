//! Cluster routing for job scripts and job identifiers.
//!
//! Each cluster runs its own Torque server, so every command has to target
//! the right host. The only routing information available client-side is
//! in-band: the `#PBS -q` directive inside a job script, or marker
//! substrings inside a job identifier handed back by the scheduler.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A named backend cluster running its own Torque server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Host {
    /// Oakley cluster (oak-batch). The default routing target.
    Oakley,
    /// Glenn cluster (opt-batch).
    Glenn,
    /// Ruby cluster (numeric job ids).
    Ruby,
    /// Quick-turnaround cluster.
    Quick,
}

impl Host {
    /// The host name used to open a batch connection.
    pub fn as_str(&self) -> &'static str {
        match self {
            Host::Oakley => "oakley",
            Host::Glenn => "glenn",
            Host::Ruby => "ruby",
            Host::Quick => "quick",
        }
    }
}

impl std::fmt::Display for Host {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Host used when no routing marker matches.
pub const DEFAULT_HOST: Host = Host::Oakley;

/// Queue directives checked in a job script, first match wins.
const QUEUE_MARKERS: [(&str, Host); 4] = [
    ("#PBS -q @oak-batch", Host::Oakley),
    ("#PBS -q @opt-batch", Host::Glenn),
    ("#PBS -q @ruby-batch", Host::Ruby),
    ("#PBS -q @quick-batch", Host::Quick),
];

/// Pick the backend host a job script targets, from its `#PBS -q` queue
/// directive.
///
/// Scripts are expected to declare at most one queue; when more than one
/// marker is present the checklist order above decides. Routing never
/// fails — a script with no recognizable directive goes to
/// [`DEFAULT_HOST`].
pub fn host_for_script(script: &str) -> Host {
    for (marker, host) in QUEUE_MARKERS {
        if script.contains(marker) {
            debug!("Routing script to {host} (directive {marker:?})");
            return host;
        }
    }

    debug!("Routing script to {DEFAULT_HOST} (no queue directive)");
    DEFAULT_HOST
}

/// Pick the backend host a job identifier belongs to, from marker
/// substrings in its textual form.
///
/// Ruby hands out purely numeric ids, the other clusters embed their batch
/// server name. This is a heuristic: a numeric id from a non-Ruby cluster,
/// or an id carrying two markers, routes silently to the wrong host. Known
/// fragility, kept as-is.
pub fn host_for_job_id(job_id: &str) -> Host {
    let host = if job_id.contains("oak-batch") {
        Host::Oakley
    } else if job_id.contains("opt-batch") {
        Host::Glenn
    } else if !job_id.is_empty() && job_id.bytes().all(|b| b.is_ascii_digit()) {
        Host::Ruby
    } else if job_id.contains("quick") {
        Host::Quick
    } else {
        DEFAULT_HOST
    };

    debug!("Routing job {job_id:?} to {host}");
    host
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_routing_by_directive() {
        assert_eq!(
            host_for_script("#PBS -q @oak-batch\n#PBS -l walltime=1:00:00\n"),
            Host::Oakley
        );
        assert_eq!(host_for_script("#PBS -q @opt-batch\n"), Host::Glenn);
        assert_eq!(host_for_script("#PBS -q @ruby-batch\n"), Host::Ruby);
        assert_eq!(host_for_script("#PBS -q @quick-batch\n"), Host::Quick);
    }

    #[test]
    fn test_script_routing_default() {
        assert_eq!(host_for_script("#!/bin/bash\necho hello\n"), Host::Oakley);
        assert_eq!(host_for_script(""), Host::Oakley);
    }

    #[test]
    fn test_script_routing_first_directive_wins() {
        let script = "#PBS -q @oak-batch\n#PBS -q @quick-batch\n";
        assert_eq!(host_for_script(script), Host::Oakley);
    }

    #[test]
    fn test_job_id_routing_by_marker() {
        assert_eq!(host_for_job_id("1234.oak-batch.osc.edu"), Host::Oakley);
        assert_eq!(host_for_job_id("1234.opt-batch.osc.edu"), Host::Glenn);
        assert_eq!(host_for_job_id("1234.quick-batch.osc.edu"), Host::Quick);
    }

    #[test]
    fn test_job_id_routing_numeric_is_ruby() {
        assert_eq!(host_for_job_id("12345"), Host::Ruby);
    }

    #[test]
    fn test_job_id_routing_default() {
        assert_eq!(host_for_job_id("1234.somewhere.else.edu"), Host::Oakley);
        assert_eq!(host_for_job_id(""), Host::Oakley);
    }

    #[test]
    fn test_host_names() {
        assert_eq!(Host::Oakley.as_str(), "oakley");
        assert_eq!(Host::Glenn.as_str(), "glenn");
        assert_eq!(Host::Ruby.as_str(), "ruby");
        assert_eq!(Host::Quick.as_str(), "quick");
    }
}
