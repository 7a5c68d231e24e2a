use crate::error::{MarketError, MarketResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Images a shopper can stage before sending.
pub const MAX_ATTACHMENTS: usize = 5;

pub const MECHANIC_AUTO_REPLY: &str =
    "Thanks for sharing that! I can see the issue clearly. Let me recommend the best solution for you.";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sender {
    User,
    Mechanic,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    Text(String),
    Image { name: String, url: String },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub sender: Sender,
    pub body: MessageBody,
    pub sent_at: DateTime<Utc>,
    pub can_undo: bool,
}

impl Message {
    pub fn text(sender: Sender, content: impl Into<String>, sent_at: DateTime<Utc>) -> Self {
        Message {
            id: Uuid::new_v4().to_string(),
            sender,
            body: MessageBody::Text(content.into()),
            sent_at,
            can_undo: sender == Sender::User,
        }
    }

    pub fn caption(&self) -> String {
        match &self.body {
            MessageBody::Text(text) => text.clone(),
            MessageBody::Image { name, .. } => format!("Shared image: {name}"),
        }
    }

    pub fn image_url(&self) -> Option<&str> {
        match &self.body {
            MessageBody::Image { url, .. } => Some(url),
            MessageBody::Text(_) => None,
        }
    }

    pub fn is_undoable(&self) -> bool {
        self.can_undo && self.sender == Sender::User
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MechanicStatus {
    Online,
    Busy,
    Offline,
}

impl MechanicStatus {
    pub fn label(self) -> &'static str {
        match self {
            MechanicStatus::Online => "online",
            MechanicStatus::Busy => "busy",
            MechanicStatus::Offline => "offline",
        }
    }

    pub fn dot_class(self) -> &'static str {
        match self {
            MechanicStatus::Online => "status-dot online",
            MechanicStatus::Busy => "status-dot busy",
            MechanicStatus::Offline => "status-dot offline",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Mechanic {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub rating: f32,
    pub specialties: Vec<String>,
    pub status: MechanicStatus,
    pub response_time: String,
}

/// An image picked from disk but not sent yet. `url` is an object URL owned
/// by the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversation {
    messages: Vec<Message>,
    staged: Vec<Attachment>,
}

impl Conversation {
    pub fn new(messages: Vec<Message>) -> Self {
        Conversation {
            messages,
            staged: Vec::new(),
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn staged(&self) -> &[Attachment] {
        &self.staged
    }

    pub fn attachments_full(&self) -> bool {
        self.staged.len() >= MAX_ATTACHMENTS
    }

    /// Stages attachments up to the limit. Whatever did not fit is handed
    /// back so the caller can release it.
    pub fn stage(&mut self, attachments: impl IntoIterator<Item = Attachment>) -> Vec<Attachment> {
        let mut rejected = Vec::new();
        for attachment in attachments {
            if self.attachments_full() {
                rejected.push(attachment);
            } else {
                self.staged.push(attachment);
            }
        }
        rejected
    }

    pub fn unstage(&mut self, index: usize) -> Option<Attachment> {
        (index < self.staged.len()).then(|| self.staged.remove(index))
    }

    pub fn can_send(&self, draft: &str) -> bool {
        !draft.trim().is_empty() || !self.staged.is_empty()
    }

    /// Sends the draft text, then one message per staged image. Returns how
    /// many messages were appended.
    pub fn send(&mut self, draft: &str, now: DateTime<Utc>) -> MarketResult<usize> {
        if !self.can_send(draft) {
            return Err(MarketError::EmptyMessage);
        }
        let before = self.messages.len();
        if !draft.trim().is_empty() {
            self.messages.push(Message::text(Sender::User, draft, now));
        }
        for attachment in self.staged.drain(..) {
            self.messages.push(Message {
                id: Uuid::new_v4().to_string(),
                sender: Sender::User,
                body: MessageBody::Image {
                    name: attachment.name,
                    url: attachment.url,
                },
                sent_at: now,
                can_undo: true,
            });
        }
        Ok(self.messages.len() - before)
    }

    pub fn receive(&mut self, content: &str, now: DateTime<Utc>) {
        self.messages.push(Message::text(Sender::Mechanic, content, now));
    }

    /// Takes back one of the shopper's own messages.
    pub fn undo(&mut self, id: &str) -> Option<Message> {
        let index = self
            .messages
            .iter()
            .position(|message| message.id == id && message.is_undoable())?;
        Some(self.messages.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn attachment(n: usize) -> Attachment {
        Attachment {
            name: format!("photo-{n}.jpg"),
            url: format!("blob:test/{n}"),
        }
    }

    #[test]
    fn empty_draft_is_rejected() {
        let mut chat = Conversation::new(fixtures::opening_messages(Utc::now()));
        assert_eq!(chat.send("   ", Utc::now()), Err(MarketError::EmptyMessage));
        assert_eq!(chat.messages().len(), 3);
    }

    #[test]
    fn text_then_images() {
        let mut chat = Conversation::default();
        chat.stage([attachment(1), attachment(2)]);
        assert_eq!(chat.send("rotor is scored", Utc::now()), Ok(3));
        assert!(chat.staged().is_empty());

        let captions: Vec<_> = chat.messages().iter().map(Message::caption).collect();
        assert_eq!(
            captions,
            ["rotor is scored", "Shared image: photo-1.jpg", "Shared image: photo-2.jpg"]
        );
        assert!(chat.messages().iter().all(Message::is_undoable));
        assert_eq!(chat.messages()[1].image_url(), Some("blob:test/1"));
    }

    #[test]
    fn staging_stops_at_the_limit() {
        let mut chat = Conversation::default();
        let rejected = chat.stage((0..7).map(attachment));
        assert_eq!(chat.staged().len(), MAX_ATTACHMENTS);
        assert!(chat.attachments_full());
        assert_eq!(rejected.len(), 2);

        assert_eq!(chat.unstage(0).map(|a| a.name), Some("photo-0.jpg".into()));
        assert_eq!(chat.unstage(10), None);
        assert!(!chat.attachments_full());
        assert!(chat.can_send(""));
    }

    #[test]
    fn only_own_messages_can_be_undone() {
        let now = Utc::now();
        let mut chat = Conversation::new(fixtures::opening_messages(now));
        let mechanic_id = chat.messages()[0].id.clone();
        assert!(chat.undo(&mechanic_id).is_none());

        chat.send("hello", now).unwrap();
        chat.receive(MECHANIC_AUTO_REPLY, now);
        let sent = chat.messages()[3].id.clone();
        assert!(chat.undo(&sent).is_some());
        assert_eq!(chat.messages().len(), 4);
        assert_eq!(chat.messages()[3].caption(), MECHANIC_AUTO_REPLY);
    }
}
