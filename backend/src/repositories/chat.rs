//! Coach chat transcript repository

use super::kv::{keys, Collection, KvStore};
use super::log;
use anyhow::Result;
use fitkro_shared::ChatMessage;
use tracing::warn;
use uuid::Uuid;

pub struct ChatRepository;

impl ChatRepository {
    pub async fn create(store: &dyn KvStore, user_id: Uuid, message: &ChatMessage) -> Result<()> {
        log::append(store, user_id, Collection::Chat, &message.id, message).await
    }

    /// Append a question and its reply. If the reply cannot be written the
    /// question is taken back out.
    pub async fn create_exchange(
        store: &dyn KvStore,
        user_id: Uuid,
        question: &ChatMessage,
        answer: &ChatMessage,
    ) -> Result<()> {
        Self::create(store, user_id, question).await?;
        if let Err(e) = Self::create(store, user_id, answer).await {
            let key = keys::entry(user_id, Collection::Chat, &question.id);
            if let Err(cleanup) = store.delete(&key).await {
                warn!(error = %cleanup, %key, "Failed to remove unanswered chat message");
            }
            return Err(e);
        }
        Ok(())
    }

    pub async fn list(store: &dyn KvStore, user_id: Uuid) -> Result<Vec<ChatMessage>> {
        log::list(store, user_id, Collection::Chat).await
    }
}
