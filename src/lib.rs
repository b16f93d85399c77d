//! Polls the Yandex Practicum homework-review API for status changes and
//! relays human-readable notifications to a Telegram chat.

mod config;
mod enums;

pub mod api;
pub mod bot;
pub mod error;
pub mod poller;

pub use api::{check_response, HomeworkApi, HomeworkRecord, ReviewUpdates, StatusSource};
pub use bot::{Notifier, TelegramBot};
pub use config::Config;
pub use enums::HomeworkStatus;
pub use error::{ConfigError, Error, ResponseError, SendError, StatusError};
pub use poller::{PollData, PollOptions, Poller};
