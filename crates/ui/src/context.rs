use std::sync::Arc;
use std::time::Duration;

use muster_core::Roster;

pub trait UiApp: Send + Sync {
    fn roster(&self) -> Arc<Roster>;
    fn feedback_delay(&self) -> Duration;
}

#[derive(Clone)]
pub struct AppContext {
    roster: Arc<Roster>,
    feedback_delay: Duration,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            roster: app.roster(),
            feedback_delay: app.feedback_delay(),
        }
    }

    #[must_use]
    pub fn roster(&self) -> Arc<Roster> {
        Arc::clone(&self.roster)
    }

    #[must_use]
    pub fn feedback_delay(&self) -> Duration {
        self.feedback_delay
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
