//! Job dependency specifications and their qsub wire syntax.

use serde::{Deserialize, Serialize};

/// Dependencies a new job submission should wait on.
///
/// Maps dependency types (`afterany`, `afterok`, ...) to the job ids they
/// apply to, preserving insertion order. Rendered into the scheduler's
/// `-W depend=` argument as `type:id1:id2` fragments joined by commas.
///
/// Dependency-type strings are taken verbatim from the caller and
/// concatenated into the argument unvalidated. Known gap: a bad type string
/// is only diagnosed by the scheduler at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencySpec {
    entries: Vec<(String, Vec<String>)>,
}

impl DependencySpec {
    /// Create an empty spec (no dependencies).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dependency entry, builder style.
    pub fn after(
        mut self,
        dep_type: impl Into<String>,
        job_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.add(dep_type, job_ids);
        self
    }

    /// Add a dependency entry.
    pub fn add(
        &mut self,
        dep_type: impl Into<String>,
        job_ids: impl IntoIterator<Item = impl Into<String>>,
    ) {
        self.entries.push((
            dep_type.into(),
            job_ids.into_iter().map(Into::into).collect(),
        ));
    }

    /// True when no entry would render into the dependency argument.
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, ids)| ids.is_empty())
    }

    /// Render the `-W depend=` argument value.
    ///
    /// Entries with no job ids are skipped. Returns `None` when nothing
    /// renders, in which case the argument is omitted from the submission.
    pub fn to_argument(&self) -> Option<String> {
        let fragments: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, ids)| !ids.is_empty())
            .map(|(dep_type, ids)| format!("{}:{}", dep_type, ids.join(":")))
            .collect();

        if fragments.is_empty() {
            None
        } else {
            Some(fragments.join(","))
        }
    }
}
