use chrono::Utc;

/// The watermark separating already-reported homework updates from new
/// ones. Owned exclusively by the poller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollData {
    from_date: i64,
}

impl PollData {
    /// Starts the watermark at the current time, so only updates from now
    /// on are reported.
    pub fn now() -> Self {
        Self::starting_at(Utc::now().timestamp())
    }

    /// Starts the watermark at the given Unix timestamp.
    pub fn starting_at(from_date: i64) -> Self {
        Self {
            from_date,
        }
    }

    /// The timestamp to request updates from.
    pub fn from_date(&self) -> i64 {
        self.from_date
    }

    /// Advances the watermark to the server-reported date. Called only
    /// after a fully successful cycle.
    pub(crate) fn advance(&mut self, current_date: i64) {
        self.from_date = current_date;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_to_reported_date() {
        let mut poll_data = PollData::starting_at(1000);

        poll_data.advance(2000);

        assert_eq!(poll_data.from_date(), 2000);
    }
}
