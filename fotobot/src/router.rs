// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  admin::{is_admin, AdminAction, ADMIN_CALLBACK_PREFIX},
  texts,
};
use telegram::Update;
use tracing::warn;
use unsplash::PhotoSearch;

/// One decoded inbound update. Every update maps to exactly one route;
/// anything the bot does not handle decodes to `Ignore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Route {
  Start {
    chat_id: i64,
  },
  Help {
    chat_id: i64,
  },
  AdminMenu {
    chat_id: i64,
    user_id: i64,
  },
  Search {
    chat_id: i64,
    query: String,
  },
  EmptyQuery {
    chat_id: i64,
  },
  AdminCallback {
    callback_id: String,
    user_id: i64,
    username: Option<String>,
    chat_id: i64,
    message_id: i64,
    action: Option<AdminAction>,
  },
  Ignore,
}

pub(crate) fn route(update: &Update) -> Route {
  if let Some(message) = &update.message {
    let Some(text) = message.text.as_deref() else {
      return Route::Ignore;
    };
    let chat_id = message.chat.id;

    if let Some(command) = command_name(text) {
      return match command {
        "start" => Route::Start { chat_id },
        "help" => Route::Help { chat_id },
        "admin" => match &message.from {
          Some(from) => Route::AdminMenu {
            chat_id,
            user_id: from.id,
          },
          None => Route::Ignore,
        },
        _ => Route::Ignore,
      };
    }

    if text.trim().is_empty() {
      return Route::EmptyQuery { chat_id };
    }

    return Route::Search {
      chat_id,
      query: text.to_string(),
    };
  }

  if let Some(callback) = &update.callback_query {
    let Some(data) = callback.data.as_deref() else {
      return Route::Ignore;
    };
    if !data.starts_with(ADMIN_CALLBACK_PREFIX) {
      return Route::Ignore;
    }
    // Without the originating menu message there is nothing to edit.
    let Some(message) = &callback.message else {
      return Route::Ignore;
    };

    return Route::AdminCallback {
      callback_id: callback.id.clone(),
      user_id: callback.from.id,
      username: callback.from.username.clone(),
      chat_id: message.chat.id,
      message_id: message.message_id,
      action: AdminAction::parse(data),
    };
  }

  Route::Ignore
}

/// Extracts the command name from `/name` or `/name@botname`, ignoring
/// trailing arguments. Returns `None` for plain text.
fn command_name(text: &str) -> Option<&str> {
  let first = text.split_whitespace().next()?;
  let command = first.strip_prefix('/')?;
  if command.is_empty() {
    return None;
  }
  Some(command.split('@').next().unwrap_or(command))
}

/// Outcome of the search path, ready to send. Composition is pure so the
/// dispatch contract can be tested with a stub search client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SearchReply {
  Photos { urls: Vec<String>, confirmation: String },
  NoResults(String),
  Failed(String),
}

/// Runs exactly one search and folds every outcome into a user-facing
/// reply. Errors are consumed here; nothing propagates past this boundary.
pub(crate) async fn search_reply(search: &dyn PhotoSearch, query: &str) -> SearchReply {
  match search.search(query).await {
    Ok(urls) if !urls.is_empty() => SearchReply::Photos {
      confirmation: texts::search_confirmation(query),
      urls,
    },
    Ok(_) => SearchReply::NoResults(texts::no_results(query)),
    Err(e) => {
      warn!("Unsplash search failed for '{}': {}", query, e);
      SearchReply::Failed(texts::SEARCH_FAILED.to_string())
    }
  }
}

/// Reply to `/admin`: the button menu for allow-listed users, the denial
/// text for everyone else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AdminMenuReply {
  Menu,
  Denied(&'static str),
}

pub(crate) fn admin_menu_reply(user_id: i64) -> AdminMenuReply {
  if is_admin(user_id) {
    AdminMenuReply::Menu
  } else {
    AdminMenuReply::Denied(texts::MENU_DENIED)
  }
}

/// Outcome of an admin callback after the allow-list re-check. `Info` still
/// needs the bot identity fetched before the edit can be composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AdminCallbackReply {
  Denied(&'static str),
  Info,
  Edit(&'static str),
  Nothing,
}

pub(crate) fn admin_callback_reply(
  user_id: i64,
  action: Option<AdminAction>,
) -> AdminCallbackReply {
  if !is_admin(user_id) {
    return AdminCallbackReply::Denied(texts::CALLBACK_DENIED);
  }

  match action {
    Some(AdminAction::Info) => AdminCallbackReply::Info,
    Some(AdminAction::Log) => AdminCallbackReply::Edit(texts::LOG_PLACEHOLDER),
    Some(AdminAction::Broadcast) => AdminCallbackReply::Edit(texts::BROADCAST_PLACEHOLDER),
    None => AdminCallbackReply::Nothing,
  }
}
