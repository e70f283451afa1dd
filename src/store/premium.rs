use super::storage::StateStore;
use super::types::{AnalyticsSnapshot, PremiumQuizData, PremiumState};
use anyhow::Result;
use chrono::{DateTime, Utc};

/// Premium state bound to its backing store.
///
/// Every persisted change is written through immediately. The preview flag
/// is transient, so toggling it does not touch the store.
pub struct PremiumStore<S: StateStore> {
    state: PremiumState,
    backend: S,
}

impl<S: StateStore> PremiumStore<S> {
    /// Read the stored state once
    pub fn open(backend: S) -> Result<Self> {
        let state = backend.load()?;
        Ok(Self { state, backend })
    }

    pub fn state(&self) -> &PremiumState {
        &self.state
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn set_premium_status(&mut self, status: bool, now: DateTime<Utc>) -> Result<()> {
        self.state.set_premium_status(status, now);
        self.persist()
    }

    pub fn update_premium_quiz_data(&mut self, data: Option<PremiumQuizData>) -> Result<()> {
        self.state.update_premium_quiz_data(data);
        self.persist()
    }

    pub fn update_analytics_data(&mut self, data: AnalyticsSnapshot) -> Result<()> {
        self.state.update_analytics_data(data);
        self.persist()
    }

    pub fn set_show_premium_preview(&mut self, show: bool) {
        self.state.set_show_premium_preview(show);
    }

    pub fn set_has_completed_basic_quiz(&mut self, completed: bool) -> Result<()> {
        self.state.set_has_completed_basic_quiz(completed);
        self.persist()
    }

    pub fn reset(&mut self) -> Result<()> {
        self.state.reset();
        self.persist()
    }

    fn persist(&mut self) -> Result<()> {
        self.backend.save(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_changes_are_written_through() {
        let mut store = PremiumStore::open(MemoryStore::new()).unwrap();
        store.set_has_completed_basic_quiz(true).unwrap();
        store.set_premium_status(true, Utc::now()).unwrap();
        assert_eq!(store.backend().save_count(), 2);

        let reloaded = store.backend().load().unwrap();
        assert!(reloaded.is_premium_user);
        assert!(reloaded.analytics_data.is_some());
    }

    #[test]
    fn test_preview_flag_does_not_save() {
        let mut store = PremiumStore::open(MemoryStore::new()).unwrap();
        store.set_show_premium_preview(true);
        assert!(store.state().show_premium_preview);
        assert_eq!(store.backend().save_count(), 0);
    }

    #[test]
    fn test_reset_persists_defaults() {
        let mut store = PremiumStore::open(MemoryStore::new()).unwrap();
        store.set_premium_status(true, Utc::now()).unwrap();
        store.reset().unwrap();
        assert_eq!(store.backend().load().unwrap(), PremiumState::default());
    }

    #[test]
    fn test_open_reads_existing_state() {
        let mut backend = MemoryStore::new();
        let mut state = PremiumState::new();
        state.set_has_completed_basic_quiz(true);
        backend.save(&state).unwrap();

        let store = PremiumStore::open(backend).unwrap();
        assert!(store.state().should_show_premium_preview());
    }
}
