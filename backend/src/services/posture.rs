//! Posture check
//!
//! [`MockPostureAnalyzer`] returns one of three canned assessments at
//! random. It does not look at the image.

use crate::error::ApiError;
use async_trait::async_trait;
use fitkro_shared::{PostureCheckRequest, PostureFeedback, PostureScore};
use rand::seq::SliceRandom;

/// Rates exercise form from a photo or video frame
#[async_trait]
pub trait PostureAnalyzer: Send + Sync {
    async fn analyze(&self, req: &PostureCheckRequest) -> anyhow::Result<PostureFeedback>;
}

pub struct MockPostureAnalyzer;

impl MockPostureAnalyzer {
    pub fn outcomes() -> Vec<PostureFeedback> {
        let feedback = |score, mistakes: &[&str]| PostureFeedback {
            score,
            mistakes: mistakes.iter().map(|m| m.to_string()).collect(),
        };
        vec![
            feedback(
                PostureScore::Good,
                &["Keep your core engaged the whole time"],
            ),
            feedback(
                PostureScore::Average,
                &[
                    "Your back is arching a little",
                    "Keep your knees behind your toes",
                ],
            ),
            feedback(
                PostureScore::NeedsImprovement,
                &[
                    "Your back is rounding",
                    "Go deeper into the movement",
                    "Steady your pace",
                ],
            ),
        ]
    }
}

#[async_trait]
impl PostureAnalyzer for MockPostureAnalyzer {
    async fn analyze(&self, _req: &PostureCheckRequest) -> anyhow::Result<PostureFeedback> {
        Self::outcomes()
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no posture outcomes configured"))
    }
}

pub struct PostureService;

impl PostureService {
    pub async fn check(
        analyzer: &dyn PostureAnalyzer,
        req: &PostureCheckRequest,
    ) -> Result<PostureFeedback, ApiError> {
        analyzer.analyze(req).await.map_err(ApiError::Internal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_a_known_outcome() {
        let outcomes = MockPostureAnalyzer::outcomes();
        let req = PostureCheckRequest {
            exercise: Some("Squats".to_string()),
            ..Default::default()
        };
        for _ in 0..20 {
            let feedback = PostureService::check(&MockPostureAnalyzer, &req).await.unwrap();
            assert!(outcomes.contains(&feedback));
            assert!(!feedback.mistakes.is_empty());
        }
    }
}
