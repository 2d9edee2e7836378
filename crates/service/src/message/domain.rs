use serde::{Deserialize, Serialize};

/// Input for posting a new message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMessageInput {
    pub posted_by: i32,
    pub message_text: String,
    pub time_posted_epoch: i64,
}

/// Input for patching the text of an existing message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMessageInput {
    pub message_text: String,
}

/// Domain message (business view)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message_id: i32,
    pub posted_by: i32,
    pub message_text: String,
    pub time_posted_epoch: i64,
}
