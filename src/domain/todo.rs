use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "高",
            Priority::Medium => "中",
            Priority::Low => "低",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TodoStatus {
    Pending,
    InProgress,
    Completed,
}

impl TodoStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TodoStatus::Pending => "未着手",
            TodoStatus::InProgress => "進行中",
            TodoStatus::Completed => "完了",
        }
    }
}

/// An action item raised in a meeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u32,
    pub title: String,
    pub assignee: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
    pub status: TodoStatus,
    pub meeting_title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_uses_kebab_case() {
        let status: TodoStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(status, TodoStatus::InProgress);
        assert_eq!(status.label(), "進行中");
    }
}
