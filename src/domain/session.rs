use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgendaStatus {
    Completed,
    Active,
    Pending,
}

/// One item of a facilitated meeting's agenda.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgendaItem {
    pub title: String,
    /// Minutes.
    pub duration: u32,
    pub status: AgendaStatus,
}

/// Headline numbers for the dashboard cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub meetings_this_month: u32,
    /// Percent.
    pub average_efficiency: u8,
    pub hours_saved: u32,
    pub satisfaction: f32,
    #[serde(default)]
    pub recent: Vec<RecentMeeting>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentMeeting {
    pub id: u32,
    pub title: String,
    pub date: NaiveDate,
    pub rating: f32,
    /// Percent.
    pub efficiency: u8,
}
