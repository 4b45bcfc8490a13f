// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  builders::{EditMessageBuilder, MediaGroupBuilder, MessageBuilder, TelegramClientBuilder},
  config::{TelegramConfig, POLL_GRACE, TELEGRAM_API_BASE},
  types::{
    AnswerCallbackQuery, EditMessage, GetUpdates, MediaGroup, Message, TelegramResponse, Update,
    User,
  },
};
use error::Error;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct TelegramClient {
  pub(crate) config: TelegramConfig,
  pub(crate) client: Client,
}

impl TelegramClient {
  pub fn builder() -> TelegramClientBuilder {
    TelegramClientBuilder::default()
  }

  pub fn message(&self) -> MessageBuilder {
    MessageBuilder::new()
  }

  pub fn media_group(&self) -> MediaGroupBuilder {
    MediaGroupBuilder::new()
  }

  pub fn edit_message(&self) -> EditMessageBuilder {
    EditMessageBuilder::new()
  }

  /// Fetches own bot identity via `getMe`.
  #[instrument(skip(self))]
  pub async fn get_me(&self) -> Result<User, Error> {
    self.call("getMe", &serde_json::json!({}), None).await
  }

  /// Long-polls `getUpdates`. Pass the last seen `update_id + 1` as the
  /// offset so already-delivered updates are confirmed and not re-sent.
  #[instrument(skip(self))]
  pub async fn get_updates(&self, offset: Option<i64>) -> Result<Vec<Update>, Error> {
    let body = GetUpdates {
      offset,
      timeout: self.config.poll_timeout.as_secs(),
    };
    let updates: Vec<Update> = self
      .call("getUpdates", &body, Some(self.config.poll_timeout + POLL_GRACE))
      .await?;
    if !updates.is_empty() {
      debug!("Received {} update(s)", updates.len());
    }
    Ok(updates)
  }

  /// Acknowledges an inline-button press so the client UI stops showing
  /// the pending state.
  #[instrument(skip(self))]
  pub async fn answer_callback_query(&self, callback_query_id: &str) -> Result<(), Error> {
    let body = AnswerCallbackQuery { callback_query_id };
    let _: serde_json::Value = self.call("answerCallbackQuery", &body, None).await?;
    Ok(())
  }

  #[instrument(skip(self, message), fields(chat_id = message.chat_id))]
  pub(crate) async fn send_message(&self, message: Message<'_>) -> Result<(), Error> {
    let _: serde_json::Value = self.call("sendMessage", &message, None).await?;
    debug!("Message sent successfully");
    Ok(())
  }

  #[instrument(skip(self, group), fields(chat_id = group.chat_id, photos = group.media.len()))]
  pub(crate) async fn send_media_group(&self, group: MediaGroup) -> Result<(), Error> {
    let _: serde_json::Value = self.call("sendMediaGroup", &group, None).await?;
    debug!("Media group sent successfully");
    Ok(())
  }

  #[instrument(skip(self, edit), fields(chat_id = edit.chat_id, message_id = edit.message_id))]
  pub(crate) async fn edit_message_text(&self, edit: EditMessage<'_>) -> Result<(), Error> {
    let _: serde_json::Value = self.call("editMessageText", &edit, None).await?;
    debug!("Message edited successfully");
    Ok(())
  }

  async fn call<B, T>(&self, method: &str, body: &B, timeout: Option<Duration>) -> Result<T, Error>
  where
    B: Serialize,
    T: DeserializeOwned,
  {
    let url = format!("{}{}/{}", TELEGRAM_API_BASE, self.config.token, method);

    let mut request = self.client.post(url).json(body);
    if let Some(timeout) = timeout {
      request = request.timeout(timeout);
    }

    let response = request.send().await.map_err(Error::HttpError)?;
    let status = response.status();

    if status.as_u16() == 429 {
      return Err(Error::RateLimitExceeded);
    }

    let telegram_response: TelegramResponse<T> =
      response.json().await.map_err(Error::HttpError)?;

    if !telegram_response.ok {
      return Err(Error::ApiError(format!(
        "{}: {}",
        status, telegram_response.description
      )));
    }

    telegram_response
      .result
      .ok_or_else(|| Error::ParseError("Response is missing the result payload".into()))
  }
}
