// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  admin::AdminAction,
  config::BotConfig,
  router::{
    admin_callback_reply, admin_menu_reply, route, search_reply, AdminCallbackReply,
    AdminMenuReply, Route, SearchReply,
  },
  texts,
};
use anyhow::Result;
use error::Error;
use std::time::Duration;
use telegram::{ParseMode, TelegramClient, Update};
use tracing::{error, info, instrument, warn};
use unsplash::{PhotoSearch, UnsplashConfig, UnsplashService};

const POLL_ERROR_DELAY: Duration = Duration::from_secs(1);

pub(crate) struct BotRunner {
  tg: TelegramClient,
  search: Box<dyn PhotoSearch>,
}

impl BotRunner {
  pub(crate) fn new(config: BotConfig) -> Result<Self> {
    Ok(Self {
      tg: TelegramClient::builder().token(config.bot_token).build()?,
      search: Box::new(UnsplashService::new(UnsplashConfig::new(
        config.unsplash_access_key,
      )?)?),
    })
  }

  /// Long-polls the update stream and dispatches each update in order.
  /// A failing handler never takes the loop down.
  #[instrument(skip(self))]
  pub(crate) async fn run(&self) -> Result<()> {
    info!("Bot is polling for updates");
    let mut offset: Option<i64> = None;

    loop {
      let updates = match self.tg.get_updates(offset).await {
        Ok(updates) => updates,
        Err(e) => {
          warn!("Failed to fetch updates: {}", e);
          tokio::time::sleep(POLL_ERROR_DELAY).await;
          continue;
        }
      };

      for update in updates {
        offset = Some(update.update_id + 1);
        if let Err(e) = self.handle_update(&update).await {
          error!("Handler failed for update {}: {}", update.update_id, e);
        }
      }
    }
  }

  async fn handle_update(&self, update: &Update) -> Result<(), Error> {
    match route(update) {
      Route::Start { chat_id } => {
        self
          .tg
          .message()
          .chat_id(chat_id)
          .text(texts::GREETING)
          .send(&self.tg)
          .await
      }
      Route::Help { chat_id } => {
        self
          .tg
          .message()
          .chat_id(chat_id)
          .text(texts::HELP)
          .send(&self.tg)
          .await
      }
      Route::EmptyQuery { chat_id } => {
        self
          .tg
          .message()
          .chat_id(chat_id)
          .text(texts::EMPTY_QUERY)
          .send(&self.tg)
          .await
      }
      Route::Search { chat_id, query } => self.handle_search(chat_id, &query).await,
      Route::AdminMenu { chat_id, user_id } => self.handle_admin_menu(chat_id, user_id).await,
      Route::AdminCallback {
        callback_id,
        user_id,
        username,
        chat_id,
        message_id,
        action,
      } => {
        self
          .handle_admin_callback(
            &callback_id,
            user_id,
            username.as_deref(),
            chat_id,
            message_id,
            action,
          )
          .await
      }
      Route::Ignore => Ok(()),
    }
  }

  async fn handle_search(&self, chat_id: i64, query: &str) -> Result<(), Error> {
    match search_reply(self.search.as_ref(), query).await {
      SearchReply::Photos { urls, confirmation } => {
        self
          .tg
          .media_group()
          .chat_id(chat_id)
          .photos(urls)
          .send(&self.tg)
          .await?;
        self
          .tg
          .message()
          .chat_id(chat_id)
          .text(&confirmation)
          .send(&self.tg)
          .await
      }
      SearchReply::NoResults(text) | SearchReply::Failed(text) => {
        self
          .tg
          .message()
          .chat_id(chat_id)
          .text(&text)
          .send(&self.tg)
          .await
      }
    }
  }

  async fn handle_admin_menu(&self, chat_id: i64, user_id: i64) -> Result<(), Error> {
    match admin_menu_reply(user_id) {
      AdminMenuReply::Denied(text) => {
        self
          .tg
          .message()
          .chat_id(chat_id)
          .text(text)
          .send(&self.tg)
          .await
      }
      AdminMenuReply::Menu => {
        self
          .tg
          .message()
          .chat_id(chat_id)
          .text(texts::ADMIN_MENU)
          .button(vec![(
            AdminAction::Info.button_label(),
            AdminAction::Info.callback_data(),
          )])
          .button(vec![(
            AdminAction::Log.button_label(),
            AdminAction::Log.callback_data(),
          )])
          .button(vec![(
            AdminAction::Broadcast.button_label(),
            AdminAction::Broadcast.callback_data(),
          )])
          .send(&self.tg)
          .await
      }
    }
  }

  async fn handle_admin_callback(
    &self,
    callback_id: &str,
    user_id: i64,
    username: Option<&str>,
    chat_id: i64,
    message_id: i64,
    action: Option<AdminAction>,
  ) -> Result<(), Error> {
    // Acknowledge first so the button stops showing its pending state,
    // then re-check the allow-list; the rendered menu is never trusted.
    self.tg.answer_callback_query(callback_id).await?;

    match admin_callback_reply(user_id, action) {
      AdminCallbackReply::Denied(text) | AdminCallbackReply::Edit(text) => {
        self
          .tg
          .edit_message()
          .chat_id(chat_id)
          .message_id(message_id)
          .text(text)
          .send(&self.tg)
          .await
      }
      AdminCallbackReply::Info => {
        let bot = self.tg.get_me().await?;
        let text = texts::admin_info(&bot, user_id, username);
        self
          .tg
          .edit_message()
          .chat_id(chat_id)
          .message_id(message_id)
          .text(&text)
          .parse_mode(ParseMode::Markdown)
          .send(&self.tg)
          .await
      }
      AdminCallbackReply::Nothing => Ok(()),
    }
  }
}
