use chrono::NaiveDate;

use super::FixtureSet;
use crate::domain::{
    AgendaItem, AgendaStatus, DashboardSummary, Efficiency, Evaluation, EvaluationDetails, Meeting,
    ParticipantFeedback, Priority, RecentMeeting, ScheduledMeeting, Todo, TodoStatus,
};

impl FixtureSet {
    /// Sample data shipped with the binary.
    pub fn builtin() -> Self {
        Self {
            pending_evaluations: pending_evaluations(),
            completed_evaluations: completed_evaluations(),
            meetings: meetings(),
            todos: todos(),
            agenda: agenda(),
            summary: summary(),
        }
    }
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn feedback(name: &str, rating: u8, comment: &str) -> ParticipantFeedback {
    ParticipantFeedback {
        name: name.to_string(),
        rating,
        comment: comment.to_string(),
    }
}

fn pending(
    id: u32,
    title: &str,
    date: NaiveDate,
    participants: u32,
    duration: &str,
    category: &str,
) -> Meeting {
    Meeting {
        id,
        title: title.to_string(),
        date,
        participants,
        duration: duration.to_string(),
        category: category.to_string(),
    }
}

fn pending_evaluations() -> Vec<Meeting> {
    vec![
        pending(1, "週次チーム会議", day(2025, 1, 15), 5, "60分", "regular"),
        pending(2, "プロジェクト進捗確認", day(2025, 1, 15), 8, "90分", "project"),
        pending(3, "企画ブレインストーミング", day(2025, 1, 14), 6, "120分", "creative"),
    ]
}

fn completed_evaluations() -> Vec<Evaluation> {
    vec![
        Evaluation {
            meeting: pending(4, "月次レビュー", day(2025, 1, 10), 12, "90分", "regular"),
            rating: 4.2,
            efficiency: Efficiency::Good,
            satisfaction: 4.1,
            time_utilization: 3.8,
            details: EvaluationDetails {
                agenda: strings(&["前月の振り返り", "KPIの確認", "今後の方針", "リソース配分"]),
                participant_feedback: vec![
                    feedback("田中太郎", 4, "効率的に進行できました"),
                    feedback("佐藤花子", 5, "議論が活発で良かったです"),
                    feedback("山田一郎", 3, "時間がやや長く感じました"),
                ],
                outcomes: strings(&["新規プロジェクトの承認", "予算の再配分", "チーム体制の見直し"]),
                improvements: strings(&["資料の事前共有", "議論時間の管理", "アクションアイテムの明確化"]),
            },
        },
        Evaluation {
            meeting: pending(5, "四半期戦略会議", day(2025, 1, 12), 15, "120分", "project"),
            rating: 4.6,
            efficiency: Efficiency::Excellent,
            satisfaction: 4.4,
            time_utilization: 4.3,
            details: EvaluationDetails {
                agenda: strings(&["Q4振り返り", "Q1戦略立案", "競合分析", "予算計画"]),
                participant_feedback: vec![
                    feedback("鈴木次郎", 5, "戦略が明確になりました"),
                    feedback("高橋三郎", 4, "データ分析が充実していました"),
                    feedback("伊藤四郎", 5, "建設的な議論ができました"),
                ],
                outcomes: strings(&["Q1目標の設定", "新サービスの開発決定", "マーケティング戦略の策定"]),
                improvements: strings(&["プレゼン時間の短縮", "より詳細な競合分析", "リスク評価の追加"]),
            },
        },
        Evaluation {
            meeting: pending(6, "技術検討会議", day(2025, 1, 8), 7, "75分", "regular"),
            rating: 3.8,
            efficiency: Efficiency::Fair,
            satisfaction: 3.6,
            time_utilization: 3.9,
            details: EvaluationDetails {
                agenda: strings(&["新技術の導入検討", "セキュリティ強化", "パフォーマンス改善"]),
                participant_feedback: vec![
                    feedback("開発チームA", 4, "技術的な議論が深まりました"),
                    feedback("開発チームB", 3, "実装の詳細をもう少し話したい"),
                    feedback("インフラチーム", 4, "セキュリティ面で良い提案がありました"),
                ],
                outcomes: strings(&["新フレームワークの採用", "セキュリティポリシーの更新", "パフォーマンス指標の設定"]),
                improvements: strings(&["技術仕様書の事前準備", "プロトタイプの実演", "スケジュール調整"]),
            },
        },
    ]
}

fn meetings() -> Vec<ScheduledMeeting> {
    vec![
        ScheduledMeeting {
            id: 1,
            title: "システム設計レビュー".to_string(),
            date: day(2024, 1, 16),
            time: "10:00-11:00".to_string(),
            organizer: "田中太郎".to_string(),
            participants: strings(&["佐藤花子", "山田次郎", "鈴木一郎"]),
            agenda: strings(&["設計書レビュー", "セキュリティ要件確認", "次回スケジュール"]),
            status: "scheduled".to_string(),
        },
        ScheduledMeeting {
            id: 2,
            title: "プロジェクト進捗確認".to_string(),
            date: day(2024, 1, 16),
            time: "14:00-15:00".to_string(),
            organizer: "佐藤花子".to_string(),
            participants: strings(&["田中太郎", "山田次郎"]),
            agenda: strings(&["進捗報告", "課題共有", "リソース調整"]),
            status: "scheduled".to_string(),
        },
    ]
}

fn todos() -> Vec<Todo> {
    vec![
        Todo {
            id: 1,
            title: "認証方式の調査".to_string(),
            assignee: "田中太郎".to_string(),
            due_date: day(2024, 1, 20),
            priority: Priority::High,
            status: TodoStatus::Pending,
            meeting_title: "システム設計レビュー".to_string(),
        },
        Todo {
            id: 2,
            title: "UI/UXデザインの修正".to_string(),
            assignee: "佐藤花子".to_string(),
            due_date: day(2024, 1, 18),
            priority: Priority::Medium,
            status: TodoStatus::InProgress,
            meeting_title: "UI/UXレビュー".to_string(),
        },
        Todo {
            id: 3,
            title: "テストケースの作成".to_string(),
            assignee: "山田次郎".to_string(),
            due_date: day(2024, 1, 22),
            priority: Priority::Low,
            status: TodoStatus::Completed,
            meeting_title: "週次進捗会議".to_string(),
        },
    ]
}

fn agenda() -> Vec<AgendaItem> {
    let item = |title: &str, duration, status| AgendaItem {
        title: title.to_string(),
        duration,
        status,
    };
    vec![
        item("設計書レビュー", 20, AgendaStatus::Completed),
        item("セキュリティ要件確認", 15, AgendaStatus::Active),
        item("次回スケジュール", 10, AgendaStatus::Pending),
    ]
}

fn summary() -> DashboardSummary {
    let recent = |id, title: &str, date, rating, efficiency| RecentMeeting {
        id,
        title: title.to_string(),
        date,
        rating,
        efficiency,
    };
    DashboardSummary {
        meetings_this_month: 24,
        average_efficiency: 82,
        hours_saved: 15,
        satisfaction: 4.2,
        recent: vec![
            recent(1, "API設計会議", day(2024, 1, 15), 4.0, 85),
            recent(2, "UI/UXレビュー", day(2024, 1, 14), 5.0, 92),
            recent(3, "週次進捗会議", day(2024, 1, 12), 3.0, 68),
        ],
    }
}
