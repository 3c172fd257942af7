//! Chat rooms and messages for accepted matches, plus the single
//! passthrough chat-completion call. Rooms are keyed by candidate id;
//! creation is idempotent and seeds one system message.

use crate::matches::MatchedCandidate;
use crate::storage::{get_json, set_json, KeyValue, MESSAGES_KEY, ROOMS_KEY};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const SELF_SENDER: &str = "me";
pub const SYSTEM_SENDER: &str = "system";

/// Shown as the assistant turn when the endpoint fails.
pub const FALLBACK_REPLY: &str = "지금은 답장을 보낼 수 없어요. 잠시 후 다시 시도해 주세요.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Text,
    System,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub room_id: String,
    pub sender_id: String,
    pub content: String,
    pub timestamp: f64,
    pub is_read: bool,
    pub message_type: MessageType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRoom {
    pub id: String,
    pub candidate_id: u32,
    pub name: String,
    pub created_at: f64,
    pub last_message: Option<String>,
}

pub fn load_rooms(store: &dyn KeyValue) -> HashMap<String, ChatRoom> {
    get_json(store, ROOMS_KEY)
}

pub fn room_messages(store: &dyn KeyValue, room_id: &str) -> Vec<ChatMessage> {
    let all: HashMap<String, Vec<ChatMessage>> = get_json(store, MESSAGES_KEY);
    all.get(room_id).cloned().unwrap_or_default()
}

/// Look up or create the chat room for an accepted candidate. The
/// second call for the same candidate returns the existing room
/// unchanged; only the first seeds the system greeting.
pub fn get_or_create_room(
    store: &dyn KeyValue,
    matched: &MatchedCandidate,
    now_ms: f64,
) -> ChatRoom {
    let room_id = matched.id.to_string();
    let mut rooms = load_rooms(store);
    if let Some(existing) = rooms.get(&room_id) {
        return existing.clone();
    }

    let greeting = format!("{}님과 매칭되었어요. 대화를 시작해 보세요!", matched.name);
    let room = ChatRoom {
        id: room_id.clone(),
        candidate_id: matched.id,
        name: matched.name.clone(),
        created_at: now_ms,
        last_message: Some(greeting.clone()),
    };
    rooms.insert(room_id.clone(), room.clone());
    set_json(store, ROOMS_KEY, &rooms);

    let seed = ChatMessage {
        id: format!("{room_id}-0"),
        room_id: room_id.clone(),
        sender_id: SYSTEM_SENDER.to_string(),
        content: greeting,
        timestamp: now_ms,
        is_read: true,
        message_type: MessageType::System,
    };
    let mut all: HashMap<String, Vec<ChatMessage>> = get_json(store, MESSAGES_KEY);
    all.insert(room_id, vec![seed]);
    set_json(store, MESSAGES_KEY, &all);

    room
}

/// Append a message to its room and refresh the room summary.
pub fn append_message(store: &dyn KeyValue, message: ChatMessage) -> Vec<ChatMessage> {
    let mut all: HashMap<String, Vec<ChatMessage>> = get_json(store, MESSAGES_KEY);
    let messages = all.entry(message.room_id.clone()).or_default();
    messages.push(message.clone());
    let updated = messages.clone();
    set_json(store, MESSAGES_KEY, &all);

    let mut rooms = load_rooms(store);
    if let Some(room) = rooms.get_mut(&message.room_id) {
        room.last_message = Some(message.content.clone());
        set_json(store, ROOMS_KEY, &rooms);
    }
    updated
}

pub fn new_message(
    room_id: &str,
    sequence: usize,
    sender_id: &str,
    content: &str,
    now_ms: f64,
) -> ChatMessage {
    ChatMessage {
        id: format!("{room_id}-{sequence}"),
        room_id: room_id.to_string(),
        sender_id: sender_id.to_string(),
        content: content.to_string(),
        timestamp: now_ms,
        is_read: sender_id == SELF_SENDER,
        message_type: MessageType::Text,
    }
}

/// An empty-after-trim stream result means "no reply" and is dropped;
/// a real reply is kept exactly as received.
#[cfg(any(target_arch = "wasm32", test))]
fn non_empty_reply(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(any(target_arch = "wasm32", test))]
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    #[serde(rename = "roomId")]
    room_id: &'a str,
    messages: Vec<WireMessage<'a>>,
}

#[cfg(any(target_arch = "wasm32", test))]
#[derive(Debug, Serialize, PartialEq)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Project the room history onto the endpoint's role-tagged shape:
/// the user's own turns are `user`, everything else `assistant`.
#[cfg(any(target_arch = "wasm32", test))]
fn wire_history(history: &[ChatMessage]) -> Vec<WireMessage<'_>> {
    history
        .iter()
        .map(|message| WireMessage {
            role: if message.sender_id == SELF_SENDER {
                "user"
            } else {
                "assistant"
            },
            content: &message.content,
        })
        .collect()
}

#[cfg(target_arch = "wasm32")]
pub use network::request_reply;

#[cfg(target_arch = "wasm32")]
mod network {
    use super::{non_empty_reply, wire_history, ChatMessage, CompletionRequest, FALLBACK_REPLY};
    use gloo_net::http::Request;
    use js_sys::{Reflect, Uint8Array};
    use log::warn;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{ReadableStream, ReadableStreamDefaultReader, TextDecoder};

    const CHAT_ENDPOINT: &str = "/api/chat";

    /// Ask the passthrough endpoint for a reply. The streamed body is
    /// concatenated as it arrives. `None` means the reply was empty
    /// after trimming and should be dropped; any failure becomes the
    /// single fallback reply. No timeout, no retry.
    pub async fn request_reply(room_id: &str, history: &[ChatMessage]) -> Option<String> {
        match fetch_completion(room_id, history).await {
            Ok(text) => non_empty_reply(text),
            Err(err) => {
                warn!("Chat completion failed for room {room_id}: {err:?}");
                Some(FALLBACK_REPLY.to_string())
            }
        }
    }

    async fn fetch_completion(room_id: &str, history: &[ChatMessage]) -> Result<String, JsValue> {
        let payload = CompletionRequest {
            room_id,
            messages: wire_history(history),
        };
        let response = Request::post(CHAT_ENDPOINT)
            .json(&payload)
            .map_err(|err| JsValue::from_str(&err.to_string()))?
            .send()
            .await
            .map_err(|err| JsValue::from_str(&err.to_string()))?;

        if !response.ok() {
            return Err(JsValue::from_str(&format!(
                "HTTP {} from chat endpoint",
                response.status()
            )));
        }

        match response.body() {
            Some(stream) => consume_stream(stream).await,
            None => Ok(String::new()),
        }
    }

    async fn consume_stream(stream: ReadableStream) -> Result<String, JsValue> {
        let reader: ReadableStreamDefaultReader = stream.get_reader().dyn_into()?;
        let decoder = TextDecoder::new()?;
        let mut text = String::new();
        loop {
            let chunk = JsFuture::from(reader.read()).await?;
            let done = Reflect::get(&chunk, &JsValue::from_str("done"))?
                .as_bool()
                .unwrap_or(true);
            if done {
                break;
            }
            let value = Reflect::get(&chunk, &JsValue::from_str("value"))?;
            let mut bytes = Uint8Array::new(&value).to_vec();
            text.push_str(&decoder.decode_with_u8_array(&mut bytes)?);
        }
        Ok(text)
    }
}
