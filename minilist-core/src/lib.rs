//! minilist-core: domain logic for the Mini App task/notes list
//!
//! Pure code shared by the HTTP surface: Telegram `initData` identity
//! parsing and the text length rules. No I/O lives here.

pub mod telegram;
pub mod text;

pub use telegram::{parse_init_data, InitDataError, TgUser};
pub use text::{clip, NOTE_TEXT_MAX, TASK_TEXT_MAX};
