use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tracing::info;

use super::{FixtureError, FixtureSet};

impl FixtureSet {
    /// Read a fixture bundle from a JSON file.
    ///
    /// Missing collections are empty. Ids must be unique within each
    /// collection since selection compares records by id.
    pub fn from_json_file(path: &Path) -> Result<Self, FixtureError> {
        let raw = fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let set: FixtureSet = serde_json::from_str(&raw).map_err(|source| FixtureError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        set.validate()?;
        info!(
            path = %path.display(),
            pending = set.pending_evaluations.len(),
            completed = set.completed_evaluations.len(),
            meetings = set.meetings.len(),
            todos = set.todos.len(),
            "loaded fixtures"
        );
        Ok(set)
    }

    pub fn validate(&self) -> Result<(), FixtureError> {
        ensure_unique(
            "pending evaluation",
            self.pending_evaluations.iter().map(|m| m.id),
        )?;
        ensure_unique(
            "completed evaluation",
            self.completed_evaluations.iter().map(|e| e.id()),
        )?;
        ensure_unique("meeting", self.meetings.iter().map(|m| m.id))?;
        ensure_unique("todo", self.todos.iter().map(|t| t.id))?;
        Ok(())
    }
}

fn ensure_unique(kind: &'static str, ids: impl Iterator<Item = u32>) -> Result<(), FixtureError> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(FixtureError::DuplicateId { kind, id });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_unique() {
        assert!(ensure_unique("meeting", [1, 2, 3].into_iter()).is_ok());
        let err = ensure_unique("meeting", [1, 2, 1].into_iter()).unwrap_err();
        assert!(matches!(err, FixtureError::DuplicateId { kind: "meeting", id: 1 }));
    }
}
