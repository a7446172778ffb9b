//! Message service

use crate::db::repositories::{CrudRepository, MessageRepository};
use crate::models::Message;
use anyhow::Result;
use std::sync::Arc;
use uuid::Uuid;

pub struct MessageService {
    repo: Arc<dyn MessageRepository>,
}

impl MessageService {
    pub fn new(repo: Arc<dyn MessageRepository>) -> Self {
        Self { repo }
    }

    pub async fn find_messages(&self) -> Result<Vec<Message>> {
        self.repo.find_all().await
    }

    /// Zero or one message, as a list
    pub async fn find_message_by_id(&self, id: &str) -> Result<Vec<Message>> {
        Ok(self.repo.find_by_id(id).await?.into_iter().collect())
    }

    /// Upsert by id, assigning a random id first when none is set
    pub async fn save(&self, message: Message) -> Result<Message> {
        let message = match message.id {
            Some(_) => message,
            None => Message {
                id: Some(Uuid::new_v4().to_string()),
                ..message
            },
        };

        self.repo.save(&message).await
    }
}
