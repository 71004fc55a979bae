//! Display records shown by the dashboard views.
//!
//! Nothing here is mutated after loading; views clone what they need.

pub mod meeting;
pub mod rating;
pub mod session;
pub mod todo;

pub use meeting::{
    Efficiency, Evaluation, EvaluationDetails, Meeting, ParticipantFeedback, ScheduledMeeting,
};
pub use rating::{filled_stars, rating_emoji, MAX_STARS};
pub use session::{AgendaItem, AgendaStatus, DashboardSummary, RecentMeeting};
pub use todo::{Priority, Todo, TodoStatus};
