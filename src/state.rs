//! Application state shared by every handler and WebSocket session.
//!
//! This module owns:
//!   - the content store (quizzes, stories, riddles, proverbs, learning content, levels)
//!   - the static cultural facts
//!
//! Everything here is built once at startup and never mutated afterwards, so it is
//! shared behind a plain `Arc` without locks.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::config::{load_content_config, ContentConfig, ServerSettings};
use crate::domain::{CulturalFacts, Level, Proverb, Riddle, Story};
use crate::seeds::cultural_facts;
use crate::store::ContentStore;

pub struct AppState {
    pub store: ContentStore,
    pub culture: CulturalFacts,
    /// Level fixtures shared by every browsing session.
    pub levels: Arc<[Level]>,
}

impl AppState {
    /// Build state from settings: load the optional content bank and seed the store.
    #[instrument(level = "info", skip_all)]
    pub fn new(settings: &ServerSettings) -> Self {
        let cfg = load_content_config(settings.content_config_path.as_deref());
        Self::from_config(cfg.as_ref())
    }

    pub fn from_config(cfg: Option<&ContentConfig>) -> Self {
        let store = ContentStore::build(cfg);
        let levels: Arc<[Level]> = store.levels.all().to_vec().into();
        Self {
            store,
            culture: cultural_facts(),
            levels,
        }
    }

    #[instrument(level = "debug", skip(self), fields(%id))]
    pub fn get_story(&self, id: &str) -> Option<&Story> {
        let found = self.store.stories.get(id);
        debug!(target: "content", %id, found = found.is_some(), "story lookup");
        found
    }

    #[instrument(level = "debug", skip(self), fields(%id))]
    pub fn get_riddle(&self, id: &str) -> Option<&Riddle> {
        let found = self.store.riddles.get(id);
        debug!(target: "content", %id, found = found.is_some(), "riddle lookup");
        found
    }

    #[instrument(level = "debug", skip(self), fields(%id))]
    pub fn get_proverb(&self, id: &str) -> Option<&Proverb> {
        let found = self.store.proverbs.get(id);
        debug!(target: "content", %id, found = found.is_some(), "proverb lookup");
        found
    }

    #[instrument(level = "debug", skip(self), fields(%id))]
    pub fn get_level(&self, id: &str) -> Option<&Level> {
        self.store.levels.get(id)
    }
}
