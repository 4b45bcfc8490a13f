// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
  Markdown,
  Html,
  MarkdownV2,
}

/// One inbound event from the `getUpdates` stream.
#[derive(Debug, Deserialize, Clone)]
pub struct Update {
  pub update_id: i64,
  pub message: Option<IncomingMessage>,
  pub callback_query: Option<CallbackQuery>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct IncomingMessage {
  pub message_id: i64,
  pub from: Option<User>,
  pub chat: Chat,
  pub text: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Chat {
  pub id: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct User {
  pub id: i64,
  pub first_name: String,
  pub username: Option<String>,
  #[serde(default)]
  pub is_bot: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CallbackQuery {
  pub id: String,
  pub from: User,
  pub message: Option<IncomingMessage>,
  pub data: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct InlineKeyboard {
  pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct InlineKeyboardButton {
  pub text: String,
  pub callback_data: String,
}

#[derive(Deserialize)]
pub(crate) struct TelegramResponse<T> {
  pub ok: bool,
  #[serde(default)]
  pub description: String,
  pub result: Option<T>,
}

#[derive(Serialize)]
pub(crate) struct Message<'a> {
  pub chat_id: i64,
  pub text: &'a str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parse_mode: Option<ParseMode>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disable_web_page_preview: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disable_notification: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_to_message_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<InlineKeyboard>,
}

#[derive(Serialize)]
pub(crate) struct EditMessage<'a> {
  pub chat_id: i64,
  pub message_id: i64,
  pub text: &'a str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parse_mode: Option<ParseMode>,
}

#[derive(Serialize)]
pub(crate) struct InputMediaPhoto {
  #[serde(rename = "type")]
  pub media_type: &'static str,
  pub media: String,
}

#[derive(Serialize)]
pub(crate) struct MediaGroup {
  pub chat_id: i64,
  pub media: Vec<InputMediaPhoto>,
}

#[derive(Serialize)]
pub(crate) struct GetUpdates {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub offset: Option<i64>,
  pub timeout: u64,
}

#[derive(Serialize)]
pub(crate) struct AnswerCallbackQuery<'a> {
  pub callback_query_id: &'a str,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn update_with_text_message_deserializes() {
    let raw = r#"{
      "update_id": 421,
      "message": {
        "message_id": 7,
        "from": {"id": 99, "is_bot": false, "first_name": "Sari", "username": "sari"},
        "chat": {"id": 99, "type": "private"},
        "text": "kucing lucu"
      }
    }"#;

    let update: Update = serde_json::from_str(raw).unwrap();
    assert_eq!(update.update_id, 421);
    let message = update.message.unwrap();
    assert_eq!(message.chat.id, 99);
    assert_eq!(message.text.as_deref(), Some("kucing lucu"));
    assert_eq!(message.from.unwrap().username.as_deref(), Some("sari"));
    assert!(update.callback_query.is_none());
  }

  #[test]
  fn update_with_callback_query_deserializes() {
    let raw = r#"{
      "update_id": 422,
      "callback_query": {
        "id": "cb-1",
        "from": {"id": 7086594019, "is_bot": false, "first_name": "Admin"},
        "message": {"message_id": 8, "chat": {"id": 99, "type": "private"}},
        "data": "admin_info_pengguna"
      }
    }"#;

    let update: Update = serde_json::from_str(raw).unwrap();
    let callback = update.callback_query.unwrap();
    assert_eq!(callback.id, "cb-1");
    assert_eq!(callback.from.id, 7086594019);
    assert_eq!(callback.data.as_deref(), Some("admin_info_pengguna"));
    assert_eq!(callback.message.unwrap().message_id, 8);
  }

  #[test]
  fn message_serialization_skips_unset_fields() {
    let message = Message {
      chat_id: 1,
      text: "halo",
      parse_mode: None,
      disable_web_page_preview: None,
      disable_notification: None,
      reply_to_message_id: None,
      reply_markup: None,
    };

    let json = serde_json::to_value(&message).unwrap();
    assert_eq!(json, serde_json::json!({"chat_id": 1, "text": "halo"}));
  }

  #[test]
  fn media_group_serializes_photo_entries() {
    let group = MediaGroup {
      chat_id: 5,
      media: vec![
        InputMediaPhoto {
          media_type: "photo",
          media: "https://example.com/a.jpg".into(),
        },
        InputMediaPhoto {
          media_type: "photo",
          media: "https://example.com/b.jpg".into(),
        },
      ],
    };

    let json = serde_json::to_value(&group).unwrap();
    assert_eq!(json["media"][0]["type"], "photo");
    assert_eq!(json["media"][1]["media"], "https://example.com/b.jpg");
  }
}
