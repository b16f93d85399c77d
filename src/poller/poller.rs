use super::{PollData, PollOptions};
use crate::api::{check_response, StatusSource};
use crate::bot::Notifier;
use crate::error::Error;

/// Drives the poll loop: fetch updates since the watermark, validate the
/// response, relay one notification per changed homework, advance the
/// watermark, sleep, repeat.
pub struct Poller<S, N> {
    source: S,
    notifier: N,
    poll_data: PollData,
    options: PollOptions,
}

impl<S, N> Poller<S, N>
where
    S: StatusSource,
    N: Notifier,
{
    pub fn new(
        source: S,
        notifier: N,
        poll_data: PollData,
        options: PollOptions,
    ) -> Self {
        Self {
            source,
            notifier,
            poll_data,
            options,
        }
    }

    /// Polls forever. There is no graceful exit; terminate the process to
    /// stop polling.
    pub async fn run(mut self) {
        loop {
            self.run_cycle().await;
            tokio::time::sleep(self.options.poll_interval).await;
        }
    }

    /// Performs one cycle and dispatches its outcome. Every cycle error is
    /// absorbed here: it is logged and relayed to the chat, and if that
    /// delivery fails too the failure is logged only. Nothing escapes to
    /// terminate the loop.
    pub async fn run_cycle(&mut self) {
        if let Err(error) = self.poll_once().await {
            tracing::error!("Poll cycle failed: {error}");

            let message = format!("Сбой в работе программы: {error}");

            if let Err(send_error) = self.notifier.send_message(&message).await {
                tracing::error!("Failed to deliver the failure notification: {send_error}");
            }
        }
    }

    /// One fetch-validate-notify pass. The watermark advances only when
    /// the whole pass succeeded, so a failed cycle is retried from the
    /// same date.
    async fn poll_once(&mut self) -> Result<(), Error> {
        let response = self.source.homework_statuses(self.poll_data.from_date()).await?;
        let updates = check_response(&response)?;

        if updates.homeworks.is_empty() {
            tracing::debug!("No changes in homework statuses");
        } else {
            for homework in &updates.homeworks {
                let message = homework.notification_message()?;

                self.notifier.send_message(&message).await?;
            }
        }

        self.poll_data.advance(updates.current_date);

        Ok(())
    }
}
