//! Read-only fixture sources for the dashboard views.

mod builtin;
mod json;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{AgendaItem, DashboardSummary, Evaluation, Meeting, ScheduledMeeting, Todo};

/// Source of the records the views display.
///
/// Records are handed out whole; callers clone what they keep.
pub trait FixtureProvider {
    fn pending_evaluations(&self) -> &[Meeting];
    fn completed_evaluations(&self) -> &[Evaluation];
    fn meetings(&self) -> &[ScheduledMeeting];
    fn todos(&self) -> &[Todo];
    fn agenda(&self) -> &[AgendaItem];
    fn summary(&self) -> &DashboardSummary;
}

/// The whole fixture bundle, either built in ([`FixtureSet::builtin`]) or read
/// from a JSON file ([`FixtureSet::from_json_file`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureSet {
    #[serde(default)]
    pub pending_evaluations: Vec<Meeting>,
    #[serde(default)]
    pub completed_evaluations: Vec<Evaluation>,
    #[serde(default)]
    pub meetings: Vec<ScheduledMeeting>,
    #[serde(default)]
    pub todos: Vec<Todo>,
    #[serde(default)]
    pub agenda: Vec<AgendaItem>,
    #[serde(default)]
    pub summary: DashboardSummary,
}

impl FixtureProvider for FixtureSet {
    fn pending_evaluations(&self) -> &[Meeting] {
        &self.pending_evaluations
    }

    fn completed_evaluations(&self) -> &[Evaluation] {
        &self.completed_evaluations
    }

    fn meetings(&self) -> &[ScheduledMeeting] {
        &self.meetings
    }

    fn todos(&self) -> &[Todo] {
        &self.todos
    }

    fn agenda(&self) -> &[AgendaItem] {
        &self.agenda
    }

    fn summary(&self) -> &DashboardSummary {
        &self.summary
    }
}

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixtures {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid fixture file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: u32 },
}
