//! Support-ticket messaging.

use vendor_types::{
    Conversation, MessageDraft, MessagesResponse, SupportMessage, SupportThread, ThreadId,
    ThreadResponse, ThreadsResponse,
};

use crate::{ClientError, VendorClient};

const SUPPORT_PATH: &str = "/vendorapp/support";

/// Route of a thread's messages, with the id encoded as one path segment.
fn messages_path(thread_id: &ThreadId) -> String {
    format!(
        "{SUPPORT_PATH}/{}/messages",
        urlencoding::encode(thread_id.as_str())
    )
}

impl VendorClient {
    /// Lists the seller's support threads.
    pub async fn list_threads(&self) -> Result<Vec<SupportThread>, ClientError> {
        let resp: ThreadsResponse = self.get(SUPPORT_PATH).await?;
        Ok(resp.threads)
    }

    /// Lists the messages of a thread.
    pub async fn list_messages(
        &self,
        thread_id: &ThreadId,
    ) -> Result<Vec<SupportMessage>, ClientError> {
        let resp: MessagesResponse = self.get(&messages_path(thread_id)).await?;
        Ok(resp.messages)
    }

    /// Opens a new support thread with a first message.
    pub async fn create_thread(&self, draft: &MessageDraft) -> Result<SupportThread, ClientError> {
        let resp: ThreadResponse = self.post(SUPPORT_PATH, draft).await?;
        tracing::info!(thread_id = %resp.thread.id, "Support thread opened");
        Ok(resp.thread)
    }

    /// Posts a message to a thread.
    pub async fn send_message(
        &self,
        thread_id: &ThreadId,
        draft: &MessageDraft,
    ) -> Result<(), ClientError> {
        self.post_unit(&messages_path(thread_id), draft).await
    }

    /// Loads the active thread (first open one, else the first) with its
    /// messages. Returns `None` when the seller has no threads.
    pub async fn active_conversation(&self) -> Result<Option<Conversation>, ClientError> {
        let threads = self.list_threads().await?;
        let Some(thread) = SupportThread::pick_active(&threads).cloned() else {
            return Ok(None);
        };
        let messages = self.list_messages(&thread.id).await?;
        Ok(Some(Conversation { thread, messages }))
    }

    /// Sends a message to the active thread, refusing closed threads.
    pub async fn reply(&self, draft: &MessageDraft) -> Result<Option<ThreadId>, ClientError> {
        let threads = self.list_threads().await?;
        let Some(thread) = SupportThread::pick_active(&threads) else {
            return Ok(None);
        };
        thread.ensure_open()?;
        self.send_message(&thread.id, draft).await?;
        Ok(Some(thread.id.clone()))
    }
}
