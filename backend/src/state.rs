use crate::config::Config;
use calc_core::activities::ActivityRoster;
use calc_core::auth::SessionStore;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

// Application State
pub struct AppState {
    roster: RwLock<ActivityRoster>,
    sessions: RwLock<SessionStore>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(config: &Config) -> SharedState {
        Self::with_roster(ActivityRoster::seeded(), config)
    }

    pub fn with_roster(roster: ActivityRoster, config: &Config) -> SharedState {
        Arc::new(Self {
            roster: RwLock::new(roster),
            sessions: RwLock::new(SessionStore::new(&config.login_password)),
        })
    }

    // Poisoned locks are recovered, not propagated.

    pub fn roster(&self) -> RwLockReadGuard<'_, ActivityRoster> {
        self.roster.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn roster_mut(&self) -> RwLockWriteGuard<'_, ActivityRoster> {
        self.roster.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn sessions(&self) -> RwLockReadGuard<'_, SessionStore> {
        self.sessions.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn sessions_mut(&self) -> RwLockWriteGuard<'_, SessionStore> {
        self.sessions.write().unwrap_or_else(PoisonError::into_inner)
    }
}
