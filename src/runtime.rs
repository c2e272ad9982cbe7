//! Async drivers for the terminal front end
//!
//! The state machines only know deadlines. These helpers sleep until the next
//! one on a [`Timer`] and feed the current time back in.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::assistant::{ChatMessage, ChatSession};
use crate::clock::{Clock, ManualClock, SystemClock};
use crate::upload::{CreditAssessor, StatusChange, UploadPipeline};

/// A clock that can wait
#[async_trait]
pub trait Timer: Clock + Sync {
    async fn sleep_until(&self, deadline: DateTime<Utc>);
}

#[async_trait]
impl Timer for SystemClock {
    async fn sleep_until(&self, deadline: DateTime<Utc>) {
        let wait = (deadline - self.now()).to_std().unwrap_or_default();
        tokio::time::sleep(wait).await;
    }
}

/// Jumps straight to the deadline
#[async_trait]
impl Timer for ManualClock {
    async fn sleep_until(&self, deadline: DateTime<Utc>) {
        self.advance_to(deadline);
        tokio::task::yield_now().await;
    }
}

/// Run the pipeline until every document has settled
pub async fn drive_uploads<A, T, F>(pipeline: &mut UploadPipeline<A>, timer: &T, mut on_change: F)
where
    A: CreditAssessor,
    T: Timer,
    F: FnMut(&StatusChange),
{
    while let Some(due) = pipeline.next_due() {
        timer.sleep_until(due).await;
        for change in pipeline.advance(timer.now()) {
            on_change(&change);
        }
    }
}

/// Wait for the pending reply, if any
pub async fn await_reply<T: Timer>(session: &mut ChatSession, timer: &T) -> Option<ChatMessage> {
    let due = session.next_due()?;
    timer.sleep_until(due).await;
    session.advance(timer.now()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::Topic;
    use crate::config::SimulationConfig;
    use crate::upload::{Assessment, DocumentStatus, FileMeta, FixedAssessor};

    #[tokio::test]
    async fn test_drive_uploads_to_completion() {
        let clock = ManualClock::at_epoch();
        let mut pipeline = UploadPipeline::new(
            FixedAssessor(Assessment::Verified { credits: 640 }),
            &SimulationConfig::default(),
        );
        pipeline.select_files(
            [
                FileMeta::new("a.pdf", 100, "application/pdf"),
                FileMeta::new("b.png", 100, "image/png"),
            ],
            clock.now(),
        );

        let mut seen = Vec::new();
        drive_uploads(&mut pipeline, &clock, |change| seen.push(change.id)).await;

        assert_eq!(seen.len(), 2);
        assert!(pipeline.is_settled());
        assert!(pipeline
            .documents()
            .iter()
            .all(|d| d.status == DocumentStatus::Verified { credits: 640 }));
        assert_eq!(clock.now().timestamp_millis(), 3000);
    }

    #[tokio::test]
    async fn test_await_reply() {
        let clock = ManualClock::at_epoch();
        let mut chat = ChatSession::new(&SimulationConfig::default(), clock.now());
        assert!(await_reply(&mut chat, &clock).await.is_none());

        chat.send("What's the market price?", clock.now()).unwrap();
        let reply = await_reply(&mut chat, &clock).await.unwrap();
        assert_eq!(reply.topic, Some(Topic::Market));
        assert_eq!(clock.now().timestamp_millis(), 1500);
    }

    #[tokio::test]
    async fn test_system_clock_sleeps_past_deadline() {
        let clock = SystemClock;
        let deadline = clock.now() + chrono::Duration::milliseconds(20);
        clock.sleep_until(deadline).await;
        assert!(clock.now() >= deadline);
    }
}
