//! Coach chat
//!
//! Replies come from a [`CoachResponder`]. The shipped [`KeywordCoach`]
//! matches keyword groups in a fixed priority order and answers with a
//! canned paragraph. Every exchange is appended to the transcript as two
//! entries: the user's message, then the reply. Nothing is written until the
//! responder has produced a reply.

use crate::error::ApiError;
use crate::repositories::{new_log_id, ChatRepository, KvStore};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use fitkro_shared::validation::validate_chat_message;
use fitkro_shared::{ChatMessage, ChatRole};
use tracing::info;
use uuid::Uuid;

/// Produces the coach's reply to one message
#[async_trait]
pub trait CoachResponder: Send + Sync {
    async fn respond(&self, message: &str) -> anyhow::Result<String>;
}

/// Topics the keyword coach recognizes, highest priority first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoachTopic {
    Nutrition,
    Training,
    Weight,
    Motivation,
}

impl CoachTopic {
    const PRIORITY: [CoachTopic; 4] = [
        CoachTopic::Nutrition,
        CoachTopic::Training,
        CoachTopic::Weight,
        CoachTopic::Motivation,
    ];

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            CoachTopic::Nutrition => &["eat", "meal", "food"],
            CoachTopic::Training => &["workout", "exercise"],
            CoachTopic::Weight => &["weight", "lose", "gain"],
            CoachTopic::Motivation => &["motivation", "tired", "give up"],
        }
    }

    fn reply(&self) -> &'static str {
        match self {
            CoachTopic::Nutrition => {
                "Build each meal around lean protein, complex carbs and some healthy fat. \
                 Grilled chicken with quinoa and greens, or salmon over brown rice, are easy \
                 places to start. Keep a water bottle nearby through the day too."
            }
            CoachTopic::Training => {
                "Aim for three or four sessions a week and mix strength work with cardio. \
                 Full Body Strength is a good first routine, and Cardio Blast works well when \
                 you want a short, high-burn session."
            }
            CoachTopic::Weight => {
                "Changes in weight come from consistency over weeks, not days. Log your meals \
                 honestly, keep your workouts regular and get seven to nine hours of sleep. \
                 Expect some ups and downs along the way."
            }
            CoachTopic::Motivation => {
                "Think back to why you started. Small steps still move you forward, and a \
                 ten-minute workout beats skipping the day. Go easy on yourself and count \
                 every win."
            }
        }
    }

    /// First topic in priority order whose keywords appear in the message
    pub fn detect(message: &str) -> Option<CoachTopic> {
        let lower = message.to_lowercase();
        Self::PRIORITY
            .into_iter()
            .find(|topic| topic.keywords().iter().any(|k| lower.contains(k)))
    }
}

const FALLBACK_REPLY: &str = "Happy to help you work towards your goals. Ask me about workouts, \
     what to eat, or how to stay on track. Showing up regularly matters more than anything else.";

/// Keyword-matching coach with canned replies
pub struct KeywordCoach;

impl KeywordCoach {
    pub fn reply_to(message: &str) -> &'static str {
        CoachTopic::detect(message)
            .map(|topic| topic.reply())
            .unwrap_or(FALLBACK_REPLY)
    }
}

#[async_trait]
impl CoachResponder for KeywordCoach {
    async fn respond(&self, message: &str) -> anyhow::Result<String> {
        Ok(Self::reply_to(message).to_string())
    }
}

pub struct CoachService;

impl CoachService {
    /// Answer a message and append both sides to the transcript
    pub async fn chat(
        store: &dyn KvStore,
        coach: &dyn CoachResponder,
        user_id: Uuid,
        message: &str,
    ) -> Result<String, ApiError> {
        validate_chat_message(message)?;

        let sent_at = Utc::now();
        let response = coach.respond(message).await.map_err(ApiError::Internal)?;

        let question = ChatMessage {
            id: new_log_id(user_id),
            role: ChatRole::User,
            message: message.to_string(),
            timestamp: sent_at,
        };
        // Keeps the reply strictly after the question when sorted by time
        let answer = ChatMessage {
            id: new_log_id(user_id),
            role: ChatRole::Assistant,
            message: response.clone(),
            timestamp: Utc::now().max(sent_at + Duration::microseconds(1)),
        };
        ChatRepository::create_exchange(store, user_id, &question, &answer)
            .await
            .map_err(ApiError::Internal)?;

        info!(%user_id, "Coach replied");
        Ok(response)
    }

    /// Transcript, oldest first
    pub async fn history(store: &dyn KvStore, user_id: Uuid) -> Result<Vec<ChatMessage>, ApiError> {
        let mut messages = ChatRepository::list(store, user_id)
            .await
            .map_err(ApiError::Internal)?;
        messages.sort_by_key(|m| m.timestamp);
        Ok(messages)
    }
}
