mod poll_data;
mod poller;

pub use poll_data::PollData;
pub use poller::Poller;

use std::time::Duration;

/// Options for polling.
#[derive(Debug, Clone, Copy)]
pub struct PollOptions {
    /// Interval to poll at. Default is 600 seconds.
    pub poll_interval: Duration,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(600),
        }
    }
}
