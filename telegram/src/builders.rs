// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  client::TelegramClient,
  config::{TelegramConfig, MAX_MEDIA_GROUP_SIZE, MAX_MESSAGE_LENGTH},
  types::{
    EditMessage, InlineKeyboard, InlineKeyboardButton, InputMediaPhoto, MediaGroup, Message,
    ParseMode,
  },
};
use error::Error;

// Telegram's message limit is in characters, not bytes.
fn ensure_message_length(text: &str) -> Result<(), Error> {
  let length = text.chars().count();
  if length > MAX_MESSAGE_LENGTH {
    return Err(Error::ApiError(format!(
      "Message too long: {} characters (max {})",
      length, MAX_MESSAGE_LENGTH
    )));
  }
  Ok(())
}

#[derive(Default)]
pub struct MessageBuilder<'a> {
  pub(crate) chat_id: Option<i64>,
  pub(crate) text: Option<&'a str>,
  pub(crate) parse_mode: Option<ParseMode>,
  pub(crate) disable_preview: Option<bool>,
  pub(crate) silent: Option<bool>,
  pub(crate) reply_to: Option<i64>,
  pub(crate) buttons: Vec<Vec<(String, String)>>,
}

impl<'a> MessageBuilder<'a> {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn chat_id(mut self, id: i64) -> Self {
    self.chat_id = Some(id);
    self
  }

  pub fn text(mut self, text: &'a str) -> Self {
    self.text = Some(text);
    self
  }

  pub fn parse_mode(mut self, mode: ParseMode) -> Self {
    self.parse_mode = Some(mode);
    self
  }

  pub fn disable_preview(mut self) -> Self {
    self.disable_preview = Some(true);
    self
  }

  pub fn silent(mut self) -> Self {
    self.silent = Some(true);
    self
  }

  pub fn reply_to(mut self, message_id: i64) -> Self {
    self.reply_to = Some(message_id);
    self
  }

  /// Adds one row of inline buttons as `(label, callback data)` pairs.
  pub fn button(mut self, buttons: Vec<(impl Into<String>, impl Into<String>)>) -> Self {
    let row = buttons
      .into_iter()
      .map(|(text, data)| (text.into(), data.into()))
      .collect();
    self.buttons.push(row);
    self
  }

  pub async fn send(self, client: &TelegramClient) -> Result<(), Error> {
    let chat_id = self
      .chat_id
      .ok_or_else(|| Error::ApiError("Chat ID is required".into()))?;

    let text = self
      .text
      .ok_or_else(|| Error::ApiError("Message text is required".into()))?;

    ensure_message_length(text)?;

    let reply_markup = if !self.buttons.is_empty() {
      Some(InlineKeyboard {
        inline_keyboard: self
          .buttons
          .into_iter()
          .map(|row| {
            row
              .into_iter()
              .map(|(text, callback_data)| InlineKeyboardButton {
                text,
                callback_data,
              })
              .collect()
          })
          .collect(),
      })
    } else {
      None
    };

    let message = Message {
      chat_id,
      text,
      parse_mode: self.parse_mode,
      disable_web_page_preview: self.disable_preview,
      disable_notification: self.silent,
      reply_to_message_id: self.reply_to,
      reply_markup,
    };

    client.send_message(message).await
  }
}

#[derive(Default)]
pub struct MediaGroupBuilder {
  pub(crate) chat_id: Option<i64>,
  pub(crate) photos: Vec<String>,
}

impl MediaGroupBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn chat_id(mut self, id: i64) -> Self {
    self.chat_id = Some(id);
    self
  }

  pub fn photo(mut self, url: impl Into<String>) -> Self {
    self.photos.push(url.into());
    self
  }

  pub fn photos(mut self, urls: impl IntoIterator<Item = String>) -> Self {
    self.photos.extend(urls);
    self
  }

  pub async fn send(self, client: &TelegramClient) -> Result<(), Error> {
    let chat_id = self
      .chat_id
      .ok_or_else(|| Error::ApiError("Chat ID is required".into()))?;

    if self.photos.is_empty() {
      return Err(Error::ApiError("Media group requires at least one photo".into()));
    }

    if self.photos.len() > MAX_MEDIA_GROUP_SIZE {
      return Err(Error::ApiError(format!(
        "Media group too large: {} items (max {})",
        self.photos.len(),
        MAX_MEDIA_GROUP_SIZE
      )));
    }

    let group = MediaGroup {
      chat_id,
      media: self
        .photos
        .into_iter()
        .map(|url| InputMediaPhoto {
          media_type: "photo",
          media: url,
        })
        .collect(),
    };

    client.send_media_group(group).await
  }
}

#[derive(Default)]
pub struct EditMessageBuilder<'a> {
  pub(crate) chat_id: Option<i64>,
  pub(crate) message_id: Option<i64>,
  pub(crate) text: Option<&'a str>,
  pub(crate) parse_mode: Option<ParseMode>,
}

impl<'a> EditMessageBuilder<'a> {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn chat_id(mut self, id: i64) -> Self {
    self.chat_id = Some(id);
    self
  }

  pub fn message_id(mut self, id: i64) -> Self {
    self.message_id = Some(id);
    self
  }

  pub fn text(mut self, text: &'a str) -> Self {
    self.text = Some(text);
    self
  }

  pub fn parse_mode(mut self, mode: ParseMode) -> Self {
    self.parse_mode = Some(mode);
    self
  }

  pub async fn send(self, client: &TelegramClient) -> Result<(), Error> {
    let chat_id = self
      .chat_id
      .ok_or_else(|| Error::ApiError("Chat ID is required".into()))?;

    let message_id = self
      .message_id
      .ok_or_else(|| Error::ApiError("Message ID is required".into()))?;

    let text = self
      .text
      .ok_or_else(|| Error::ApiError("Message text is required".into()))?;

    ensure_message_length(text)?;

    let edit = EditMessage {
      chat_id,
      message_id,
      text,
      parse_mode: self.parse_mode,
    };

    client.edit_message_text(edit).await
  }
}

#[derive(Default)]
pub struct TelegramClientBuilder {
  pub(crate) config: TelegramConfig,
}

impl TelegramClientBuilder {
  pub fn token(mut self, token: impl Into<String>) -> Self {
    self.config.token = token.into();
    self
  }

  pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
    self.config.timeout = timeout;
    self
  }

  pub fn poll_timeout(mut self, timeout: std::time::Duration) -> Self {
    self.config.poll_timeout = timeout;
    self
  }

  pub fn build(self) -> Result<TelegramClient, Error> {
    if self.config.token.is_empty() {
      return Err(Error::ConfigError("Bot token cannot be empty".into()));
    }

    let client = reqwest::Client::builder()
      .timeout(self.config.timeout)
      .build()
      .map_err(Error::HttpError)?;

    Ok(TelegramClient {
      config: self.config,
      client,
    })
  }
}
