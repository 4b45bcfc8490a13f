// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.

//! User-facing reply texts. The bot answers in the deployment's language
//! (Indonesian); internal errors are never surfaced here.

use telegram::User;

pub(crate) const GREETING: &str = "Halo! 👋 Saya bot pencari foto Unsplash. Kirimkan kata kunci foto yang ingin kamu cari, misalnya 'kucing lucu' atau 'pemandangan gunung'.";

pub(crate) const HELP: &str = "Untuk mencari foto, cukup ketikkan kata kunci yang kamu inginkan. Contoh: 'bunga mawar', 'sunset di pantai'.\nSaya akan mencoba mencarikan 3 foto terbaik untukmu.";

pub(crate) const EMPTY_QUERY: &str = "Mohon masukkan kata kunci untuk mencari foto.";

pub(crate) const SEARCH_FAILED: &str =
  "Maaf, terjadi kesalahan saat mencoba mengambil foto. Silakan coba lagi nanti.";

pub(crate) const ADMIN_MENU: &str = "Selamat datang di menu Admin:";

pub(crate) const MENU_DENIED: &str = "Maaf, kamu tidak memiliki akses ke menu ini.";

pub(crate) const CALLBACK_DENIED: &str = "Maaf, kamu tidak memiliki akses ke fungsi ini.";

pub(crate) const LOG_PLACEHOLDER: &str =
  "Fungsi melihat log belum diimplementasikan sepenuhnya. Cek log di dashboard Railway Anda.";

pub(crate) const BROADCAST_PLACEHOLDER: &str =
  "Fitur broadcast belum diimplementasikan. Anda bisa menambahkan logikanya di sini.";

pub(crate) fn search_confirmation(query: &str) -> String {
  format!("Ini dia 3 foto terbaik untuk '{}' dari Unsplash.", query)
}

pub(crate) fn no_results(query: &str) -> String {
  format!(
    "Maaf, tidak ada foto yang ditemukan untuk '{}'. Coba kata kunci lain.",
    query
  )
}

/// Markdown block with the bot's identity and the calling admin's identity.
pub(crate) fn admin_info(bot: &User, admin_id: i64, admin_username: Option<&str>) -> String {
  format!(
    "**Info Bot:**\nID: `{}`\nNama: `{}`\nUsername: `@{}`\n\n**Info Admin (Anda):**\nID Anda: `{}`\nUsername Anda: `@{}`",
    bot.id,
    bot.first_name,
    bot.username.as_deref().unwrap_or("-"),
    admin_id,
    admin_username.unwrap_or("-"),
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn confirmation_and_apology_name_the_query() {
    assert_eq!(
      search_confirmation("sunset"),
      "Ini dia 3 foto terbaik untuk 'sunset' dari Unsplash."
    );
    assert_eq!(
      no_results("sunset"),
      "Maaf, tidak ada foto yang ditemukan untuk 'sunset'. Coba kata kunci lain."
    );
  }

  #[test]
  fn admin_info_contains_both_identities() {
    let bot = User {
      id: 555000,
      first_name: "FotoBot".into(),
      username: Some("fotobot".into()),
      is_bot: true,
    };

    let text = admin_info(&bot, 7086594019, Some("boss"));
    assert!(text.contains("555000"));
    assert!(text.contains("7086594019"));
    assert!(text.contains("@fotobot"));
    assert!(text.contains("@boss"));
  }
}
