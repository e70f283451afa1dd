use crate::quiz::ExtendedResult;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub const PREMIUM_FEATURES: &[&str] = &[
    "Advanced Assessment (150+ questions)",
    "Detailed Performance Analytics",
    "Career Mapping & Recommendations",
    "Industry Trends & Insights",
    "Peer Comparison Analytics",
    "AI-Powered Career Guidance",
    "Priority Support",
    "Export Reports",
];

pub const UPGRADE_BENEFITS: &[&str] = &[
    "Get personalized career insights",
    "Access to detailed performance metrics",
    "Industry-specific recommendations",
    "Advanced skill assessments",
    "Market trend analysis",
    "Professional development roadmap",
];

/// A completed premium assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumQuizData {
    #[serde(flatten)]
    pub result: ExtendedResult,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressPoint {
    pub date: DateTime<Utc>,
    pub score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Stable,
    Down,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillTrend {
    pub skill: String,
    pub current: u32,
    pub market: u32,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryInsight {
    pub industry: String,
    pub demand: u32,
    /// Year-on-year growth in percent
    pub growth: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub progress_history: Vec<ProgressPoint>,
    pub skill_trends: Vec<SkillTrend>,
    pub industry_insights: Vec<IndustryInsight>,
    pub last_updated: DateTime<Utc>,
}

impl AnalyticsSnapshot {
    /// Starting analytics for a user who just upgraded
    pub fn initial(now: DateTime<Utc>) -> Self {
        let progress_history = [(30, 65), (20, 68), (10, 72), (0, 78)]
            .into_iter()
            .map(|(days_ago, score)| ProgressPoint {
                date: now - Duration::days(days_ago),
                score,
            })
            .collect();

        let skill_trends = [
            ("Analytical Thinking", 85, 78, Trend::Up),
            ("Communication", 72, 82, Trend::Up),
            ("Technical Skills", 68, 85, Trend::Up),
            ("Leadership", 75, 70, Trend::Up),
            ("Creativity", 80, 65, Trend::Stable),
        ]
        .into_iter()
        .map(|(skill, current, market, trend)| SkillTrend {
            skill: skill.to_string(),
            current,
            market,
            trend,
        })
        .collect();

        let industry_insights = [
            ("Technology", 85, 15.2),
            ("Healthcare", 78, 12.8),
            ("Finance", 72, 8.5),
            ("Education", 65, 6.2),
        ]
        .into_iter()
        .map(|(industry, demand, growth)| IndustryInsight {
            industry: industry.to_string(),
            demand,
            growth,
        })
        .collect();

        Self {
            progress_history,
            skill_trends,
            industry_insights,
            last_updated: now,
        }
    }
}

/// Everything remembered between runs about the user's premium status.
///
/// `show_premium_preview` lives only for the current run and is never written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PremiumState {
    #[serde(default)]
    pub is_premium_user: bool,
    #[serde(default)]
    pub premium_quiz_data: Option<PremiumQuizData>,
    #[serde(default)]
    pub analytics_data: Option<AnalyticsSnapshot>,
    #[serde(default)]
    pub has_completed_basic_quiz: bool,
    #[serde(skip)]
    pub show_premium_preview: bool,
}

impl PremiumState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turning premium on replaces the analytics with a fresh snapshot.
    /// Turning it off leaves existing data in place.
    pub fn set_premium_status(&mut self, status: bool, now: DateTime<Utc>) {
        self.is_premium_user = status;
        if status {
            self.analytics_data = Some(AnalyticsSnapshot::initial(now));
        }
    }

    pub fn update_premium_quiz_data(&mut self, data: Option<PremiumQuizData>) {
        self.premium_quiz_data = data;
    }

    pub fn update_analytics_data(&mut self, data: AnalyticsSnapshot) {
        self.analytics_data = Some(data);
    }

    pub fn set_show_premium_preview(&mut self, show: bool) {
        self.show_premium_preview = show;
    }

    pub fn set_has_completed_basic_quiz(&mut self, completed: bool) {
        self.has_completed_basic_quiz = completed;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn premium_features(&self) -> &'static [&'static str] {
        PREMIUM_FEATURES
    }

    pub fn upgrade_benefits(&self) -> &'static [&'static str] {
        UPGRADE_BENEFITS
    }

    /// Offer the upgrade once the basic quiz is done, unless already premium
    /// or the preview is already showing.
    pub fn should_show_premium_preview(&self) -> bool {
        self.has_completed_basic_quiz && !self.is_premium_user && !self.show_premium_preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{evaluate, premium_questions, tally, OverallScoreMode};
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn sample_quiz_data() -> PremiumQuizData {
        let questions = premium_questions();
        let scores = tally(&questions, &vec![0; questions.len()]);
        PremiumQuizData {
            result: evaluate(&scores, questions.len(), OverallScoreMode::Literal),
            completed_at: fixed_now(),
        }
    }

    #[test]
    fn test_new_state_defaults() {
        let state = PremiumState::new();
        assert!(!state.is_premium_user);
        assert!(state.premium_quiz_data.is_none());
        assert!(state.analytics_data.is_none());
        assert!(!state.has_completed_basic_quiz);
        assert!(!state.show_premium_preview);
    }

    #[test]
    fn test_activating_premium_generates_analytics() {
        let mut state = PremiumState::new();
        state.set_premium_status(true, fixed_now());

        let analytics = state.analytics_data.as_ref().unwrap();
        assert_eq!(analytics.progress_history.len(), 4);
        assert_eq!(analytics.skill_trends.len(), 5);
        assert_eq!(analytics.industry_insights.len(), 4);
        assert_eq!(analytics.last_updated, fixed_now());

        let first = &analytics.progress_history[0];
        assert_eq!(first.date, fixed_now() - Duration::days(30));
        assert_eq!(first.score, 65);
        assert_eq!(analytics.progress_history[3].date, fixed_now());
        assert_eq!(analytics.skill_trends[4].trend, Trend::Stable);
    }

    #[test]
    fn test_deactivating_premium_keeps_analytics() {
        let mut state = PremiumState::new();
        state.set_premium_status(true, fixed_now());
        state.set_premium_status(false, fixed_now());
        assert!(!state.is_premium_user);
        assert!(state.analytics_data.is_some());
    }

    #[test]
    fn test_should_show_premium_preview() {
        let mut state = PremiumState::new();
        assert!(!state.should_show_premium_preview());

        state.set_has_completed_basic_quiz(true);
        assert!(state.should_show_premium_preview());

        state.set_show_premium_preview(true);
        assert!(!state.should_show_premium_preview());

        state.set_show_premium_preview(false);
        state.set_premium_status(true, fixed_now());
        assert!(!state.should_show_premium_preview());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = PremiumState::new();
        state.set_premium_status(true, fixed_now());
        state.update_premium_quiz_data(Some(sample_quiz_data()));
        state.set_has_completed_basic_quiz(true);
        state.set_show_premium_preview(true);

        state.reset();
        assert_eq!(state, PremiumState::default());
    }

    #[test]
    fn test_preview_flag_is_not_serialized() {
        let mut state = PremiumState::new();
        state.set_show_premium_preview(true);
        let json = serde_json::to_string(&state).unwrap();
        assert!(!json.contains("show_premium_preview"));

        let loaded: PremiumState = serde_json::from_str(&json).unwrap();
        assert!(!loaded.show_premium_preview);
    }

    #[test]
    fn test_quiz_data_flattens_result() {
        let json = serde_json::to_value(sample_quiz_data()).unwrap();
        assert_eq!(json["overall_score"], 100);
        assert!(json["completed_at"].is_string());
        assert_eq!(json["career_matches"][0]["match"], 17);
    }

    #[test]
    fn test_computed_lists() {
        let state = PremiumState::new();
        assert_eq!(state.premium_features().len(), 8);
        assert_eq!(state.upgrade_benefits().len(), 6);
    }
}
