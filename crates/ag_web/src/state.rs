use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use ag_core::GenerationModel;

pub struct AppState {
    pub model: Arc<dyn GenerationModel>,
    busy: AtomicBool,
}

impl AppState {
    pub fn new(model: Arc<dyn GenerationModel>) -> Self {
        Self {
            model,
            busy: AtomicBool::new(false),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Claim the single generation slot. `None` while another generation is outstanding.
    pub fn try_begin_generation(&self) -> Option<GenerationGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| GenerationGuard { busy: &self.busy })
    }
}

/// Releases the generation slot when dropped.
pub struct GenerationGuard<'a> {
    busy: &'a AtomicBool,
}

impl Drop for GenerationGuard<'_> {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ag_inference::models::DummyModel;

    #[test]
    fn test_single_generation_slot() {
        let state = AppState::new(Arc::new(DummyModel::new()));
        assert!(!state.is_busy());

        let guard = state.try_begin_generation();
        assert!(guard.is_some());
        assert!(state.is_busy());
        assert!(state.try_begin_generation().is_none());

        drop(guard);
        assert!(!state.is_busy());
        assert!(state.try_begin_generation().is_some());
    }
}
