//! Application state management
//!
//! Shared state passed to all request handlers via Axum's state extraction.
//! Built once at startup; handlers only read it.

use crate::auth::JwtService;
use crate::config::AppConfig;
use crate::repositories::KvStore;
use crate::services::coach::{CoachResponder, KeywordCoach};
use crate::services::nutrition::{FoodClassifier, MockFoodClassifier};
use crate::services::posture::{MockPostureAnalyzer, PostureAnalyzer};
use std::sync::Arc;

/// Shared application state
///
/// Every field is an `Arc` or already cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Key-value store backing every collection
    pub store: Arc<dyn KvStore>,
    /// Pre-initialized JWT service with cached keys
    pub jwt: JwtService,
    pub classifier: Arc<dyn FoodClassifier>,
    pub coach: Arc<dyn CoachResponder>,
    pub posture: Arc<dyn PostureAnalyzer>,
}

impl AppState {
    /// Create state with the shipped mock classifier, keyword coach and
    /// mock posture analyzer
    ///
    /// # Note
    /// This pre-computes JWT keys from the config secret; call it once at
    /// startup.
    pub fn new(store: Arc<dyn KvStore>, config: AppConfig) -> Self {
        let jwt = JwtService::new(
            &config.jwt.secret,
            config.jwt.access_token_expiry_secs,
            config.jwt.refresh_token_expiry_secs,
        );

        Self {
            store,
            jwt,
            classifier: Arc::new(MockFoodClassifier),
            coach: Arc::new(KeywordCoach),
            posture: Arc::new(MockPostureAnalyzer),
        }
    }

    /// Swap in a different food classifier
    pub fn with_classifier(mut self, classifier: Arc<dyn FoodClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Swap in a different coach
    pub fn with_coach(mut self, coach: Arc<dyn CoachResponder>) -> Self {
        self.coach = coach;
        self
    }

    /// Swap in a different posture analyzer
    pub fn with_posture_analyzer(mut self, posture: Arc<dyn PostureAnalyzer>) -> Self {
        self.posture = posture;
        self
    }

    #[inline]
    pub fn store(&self) -> &dyn KvStore {
        self.store.as_ref()
    }

    #[inline]
    pub fn jwt(&self) -> &JwtService {
        &self.jwt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MemoryKvStore;

    #[tokio::test]
    async fn test_jwt_service_is_precomputed() {
        let state = AppState::new(Arc::new(MemoryKvStore::new()), AppConfig::default());

        let user_id = uuid::Uuid::new_v4();
        let token = state.jwt().generate_access_token(user_id).unwrap();
        assert!(!token.is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_one_store() {
        let state = AppState::new(Arc::new(MemoryKvStore::new()), AppConfig::default());
        let cloned = state.clone();

        state
            .store()
            .set("k", serde_json::json!(1))
            .await
            .unwrap();
        assert!(cloned.store().get("k").await.unwrap().is_some());
    }
}
