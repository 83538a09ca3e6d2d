//! Support-ticket threads and messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a support thread, as issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThreadId(String);

impl ThreadId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ThreadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ThreadId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreadStatus {
    Open,
    Closed,
}

impl AsRef<str> for ThreadStatus {
    fn as_ref(&self) -> &str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl std::fmt::Display for ThreadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// Who wrote a support message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthorType {
    Seller,
    Admin,
}

/// A support conversation between a seller and the marketplace admins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportThread {
    pub id: ThreadId,
    pub status: ThreadStatus,
    pub seller_id: String,
    pub created_at: DateTime<Utc>,
}

impl SupportThread {
    /// Picks the thread the panel shows: the first open one, else the first.
    pub fn pick_active(threads: &[SupportThread]) -> Option<&SupportThread> {
        threads
            .iter()
            .find(|t| t.status == ThreadStatus::Open)
            .or_else(|| threads.first())
    }

    /// Only open threads accept new messages.
    pub fn accepts_messages(&self) -> bool {
        self.status == ThreadStatus::Open
    }

    /// Returns an error unless the thread accepts new messages.
    pub fn ensure_open(&self) -> Result<(), DomainError> {
        if self.accepts_messages() {
            Ok(())
        } else {
            Err(DomainError::ThreadClosed(self.id.clone()))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportMessage {
    pub id: String,
    pub body: String,
    pub author_type: AuthorType,
    pub created_at: DateTime<Utc>,
}

impl SupportMessage {
    pub fn is_from_seller(&self) -> bool {
        self.author_type == AuthorType::Seller
    }
}

/// A message body ready to be posted to a thread.
///
/// Bodies that are blank after trimming are rejected; accepted bodies are
/// sent as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDraft {
    body: String,
}

impl MessageDraft {
    pub fn new(body: impl Into<String>) -> Result<Self, DomainError> {
        let body = body.into();
        if body.trim().is_empty() {
            return Err(DomainError::EmptyMessage);
        }
        Ok(Self { body })
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thread(id: &str, status: ThreadStatus) -> SupportThread {
        SupportThread {
            id: ThreadId::new(id),
            status,
            seller_id: "sel_1".into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_pick_active_prefers_open_thread() {
        let threads = vec![
            thread("thr_1", ThreadStatus::Closed),
            thread("thr_2", ThreadStatus::Open),
            thread("thr_3", ThreadStatus::Open),
        ];
        let active = SupportThread::pick_active(&threads).unwrap();
        assert_eq!(active.id.as_str(), "thr_2");
    }

    #[test]
    fn test_pick_active_falls_back_to_first() {
        let threads = vec![
            thread("thr_1", ThreadStatus::Closed),
            thread("thr_2", ThreadStatus::Closed),
        ];
        let active = SupportThread::pick_active(&threads).unwrap();
        assert_eq!(active.id.as_str(), "thr_1");
        assert!(!active.accepts_messages());
        assert!(matches!(
            active.ensure_open(),
            Err(DomainError::ThreadClosed(_))
        ));
    }

    #[test]
    fn test_pick_active_empty() {
        assert!(SupportThread::pick_active(&[]).is_none());
    }

    #[test]
    fn test_message_draft_rejects_blank() {
        assert_eq!(MessageDraft::new("   \n"), Err(DomainError::EmptyMessage));
        assert_eq!(MessageDraft::new(""), Err(DomainError::EmptyMessage));
    }

    #[test]
    fn test_message_draft_keeps_body_untrimmed() {
        let draft = MessageDraft::new("  hola ").unwrap();
        assert_eq!(draft.body(), "  hola ");
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            serde_json::json!({ "body": "  hola " })
        );
    }

    #[test]
    fn test_thread_deserializes_backend_shape() {
        let thread: SupportThread = serde_json::from_value(serde_json::json!({
            "id": "thr_01",
            "status": "open",
            "seller_id": "sel_01",
            "created_at": "2024-05-01T12:00:00.000Z"
        }))
        .unwrap();
        assert_eq!(thread.status, ThreadStatus::Open);
        assert_eq!(thread.id.to_string(), "thr_01");
    }

    #[test]
    fn test_message_author() {
        let message: SupportMessage = serde_json::from_value(serde_json::json!({
            "id": "msg_01",
            "body": "Hola",
            "author_type": "admin",
            "created_at": "2024-05-01T12:00:00Z"
        }))
        .unwrap();
        assert!(!message.is_from_seller());
    }
}
