use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A meeting that still waits for its evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: u32,
    pub title: String,
    pub date: NaiveDate,
    /// Attendee count.
    pub participants: u32,
    /// Free-form duration label, e.g. `60分`.
    pub duration: String,
    #[serde(default, alias = "type")]
    pub category: String,
}

/// A completed meeting annotated with ratings and feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    #[serde(flatten)]
    pub meeting: Meeting,
    pub rating: f32,
    pub efficiency: Efficiency,
    pub satisfaction: f32,
    pub time_utilization: f32,
    #[serde(default)]
    pub details: EvaluationDetails,
}

impl Evaluation {
    pub fn id(&self) -> u32 {
        self.meeting.id
    }

    pub fn title(&self) -> &str {
        &self.meeting.title
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationDetails {
    #[serde(default)]
    pub agenda: Vec<String>,
    #[serde(default)]
    pub participant_feedback: Vec<ParticipantFeedback>,
    #[serde(default)]
    pub outcomes: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantFeedback {
    pub name: String,
    pub rating: u8,
    pub comment: String,
}

/// Efficiency grade attached to an evaluation.
///
/// Serialized as the label used by the evaluation sheet; unknown labels are
/// kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Efficiency {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
    Other(String),
}

impl Efficiency {
    pub fn label(&self) -> &str {
        match self {
            Efficiency::Excellent => "優秀",
            Efficiency::Good => "良好",
            Efficiency::Fair => "普通",
            Efficiency::NeedsImprovement => "要改善",
            Efficiency::Other(label) => label,
        }
    }
}

impl From<String> for Efficiency {
    fn from(value: String) -> Self {
        match value.trim() {
            "優秀" => Efficiency::Excellent,
            "良好" => Efficiency::Good,
            "普通" => Efficiency::Fair,
            "要改善" => Efficiency::NeedsImprovement,
            _ => Efficiency::Other(value),
        }
    }
}

impl From<Efficiency> for String {
    fn from(value: Efficiency) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for Efficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A scheduled meeting as listed by Meeting Management.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledMeeting {
    pub id: u32,
    pub title: String,
    pub date: NaiveDate,
    /// Time slot label, e.g. `10:00-11:00`.
    pub time: String,
    pub organizer: String,
    /// Attendees other than the organizer.
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub agenda: Vec<String>,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "scheduled".to_string()
}

impl ScheduledMeeting {
    /// Attendee count including the organizer.
    pub fn attendee_count(&self) -> usize {
        self.participants.len() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_efficiency_labels() {
        assert_eq!(Efficiency::from("優秀".to_string()), Efficiency::Excellent);
        assert_eq!(Efficiency::from("要改善".to_string()), Efficiency::NeedsImprovement);
        assert_eq!(
            Efficiency::from("最高".to_string()),
            Efficiency::Other("最高".to_string())
        );
        assert_eq!(String::from(Efficiency::Good), "良好");
    }

    #[test]
    fn test_evaluation_reads_sheet_json() {
        let raw = r#"{
            "id": 4,
            "title": "月次レビュー",
            "date": "2025-01-10",
            "participants": 12,
            "duration": "90分",
            "rating": 4.2,
            "efficiency": "良好",
            "satisfaction": 4.1,
            "timeUtilization": 3.8,
            "details": {
                "agenda": ["KPIの確認"],
                "participantFeedback": [{"name": "田中太郎", "rating": 4, "comment": "ok"}]
            }
        }"#;
        let evaluation: Evaluation = serde_json::from_str(raw).unwrap();
        assert_eq!(evaluation.id(), 4);
        assert_eq!(evaluation.efficiency, Efficiency::Good);
        assert_eq!(evaluation.details.participant_feedback[0].rating, 4);
        assert!(evaluation.details.outcomes.is_empty());
    }

    #[test]
    fn test_attendee_count_includes_organizer() {
        let meeting = ScheduledMeeting {
            id: 2,
            title: "進捗確認".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 16).unwrap(),
            time: "14:00-15:00".to_string(),
            organizer: "佐藤花子".to_string(),
            participants: vec!["田中太郎".to_string(), "山田次郎".to_string()],
            agenda: Vec::new(),
            status: default_status(),
        };
        assert_eq!(meeting.attendee_count(), 3);
    }
}
