pub mod premium;
pub mod storage;
pub mod types;

pub use premium::PremiumStore;
pub use storage::{default_store_path, JsonFileStore, MemoryStore, StateStore, STORE_NAME};
pub use types::{
    AnalyticsSnapshot, IndustryInsight, PremiumQuizData, PremiumState, ProgressPoint, SkillTrend,
    Trend, PREMIUM_FEATURES, UPGRADE_BENEFITS,
};
