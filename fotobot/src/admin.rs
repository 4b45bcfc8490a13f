// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.

/// Telegram user ids with access to the `/admin` menu. Forward a message to
/// @userinfobot to find your own id.
pub(crate) const ADMIN_IDS: &[i64] = &[7086594019];

pub(crate) const ADMIN_CALLBACK_PREFIX: &str = "admin_";

pub(crate) fn is_admin(user_id: i64) -> bool {
  ADMIN_IDS.contains(&user_id)
}

/// Closed set of admin menu actions. Callback data is decoded into this enum
/// at the transport boundary; unknown `admin_*` payloads parse to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AdminAction {
  Info,
  Log,
  Broadcast,
}

impl AdminAction {
  pub(crate) fn parse(data: &str) -> Option<Self> {
    match data {
      "admin_info_pengguna" => Some(Self::Info),
      "admin_log_bot" => Some(Self::Log),
      "admin_broadcast" => Some(Self::Broadcast),
      _ => None,
    }
  }

  pub(crate) const fn callback_data(self) -> &'static str {
    match self {
      Self::Info => "admin_info_pengguna",
      Self::Log => "admin_log_bot",
      Self::Broadcast => "admin_broadcast",
    }
  }

  pub(crate) const fn button_label(self) -> &'static str {
    match self {
      Self::Info => "Info Pengguna",
      Self::Log => "Log Bot",
      Self::Broadcast => "Broadcast Pesan",
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn allow_list_membership() {
    assert!(is_admin(7086594019));
    assert!(!is_admin(1));
    assert!(!is_admin(-7086594019));
  }

  #[test]
  fn actions_round_trip_through_callback_data() {
    for action in [AdminAction::Info, AdminAction::Log, AdminAction::Broadcast] {
      assert_eq!(AdminAction::parse(action.callback_data()), Some(action));
    }
  }

  #[test]
  fn unknown_suffix_is_not_an_action() {
    assert_eq!(AdminAction::parse("admin_restart"), None);
    assert_eq!(AdminAction::parse("admin_"), None);
    assert_eq!(AdminAction::parse(""), None);
  }
}
