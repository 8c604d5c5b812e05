//! Update delivery: the [`UpdateSource`] contract and the bounded queue
//! backing the webhook (push) variant.
//!
//! Both ingestion variants satisfy one interface: produce the next
//! [`InboundEvent`] or signal that the sequence ended. The queue decouples the
//! HTTP receiver from the single-threaded dispatch loop: producers enqueue
//! without blocking (shedding on overflow), the consumer blocks on dequeue.

use crate::types::InboundEvent;
use async_trait::async_trait;
use tokio::sync::mpsc;

/// Ordered sequence of inbound events. `None` means the sequence ended and
/// the dispatch loop should stop.
#[async_trait]
pub trait UpdateSource: Send {
    async fn next_event(&mut self) -> Option<InboundEvent>;
}

/// Producer half of the bounded event queue. Cheap to clone; shared with the
/// webhook handler.
#[derive(Clone)]
pub struct UpdateQueue {
    tx: mpsc::Sender<InboundEvent>,
}

/// Consumer half of the bounded event queue; owned by the dispatch loop.
pub struct UpdateStream {
    rx: mpsc::Receiver<InboundEvent>,
}

impl UpdateQueue {
    /// Creates a queue holding at most `capacity` pending events.
    pub fn bounded(capacity: usize) -> (UpdateQueue, UpdateStream) {
        let (tx, rx) = mpsc::channel(capacity);
        (UpdateQueue { tx }, UpdateStream { rx })
    }

    /// Non-blocking enqueue. On overflow (or a dropped consumer) the event is
    /// returned to the caller, which logs and sheds it; the HTTP response to
    /// the platform must not wait for queue space.
    pub fn try_push(&self, event: InboundEvent) -> Result<(), InboundEvent> {
        self.tx.try_send(event).map_err(|e| match e {
            mpsc::error::TrySendError::Full(ev) => ev,
            mpsc::error::TrySendError::Closed(ev) => ev,
        })
    }
}

#[async_trait]
impl UpdateSource for UpdateStream {
    async fn next_event(&mut self) -> Option<InboundEvent> {
        self.rx.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Chat, User};

    fn event(n: i64) -> InboundEvent {
        InboundEvent {
            chat: Chat { id: n },
            user: User {
                id: n,
                username: None,
                first_name: None,
                last_name: None,
            },
            text: format!("event {n}"),
            command: None,
        }
    }

    #[tokio::test]
    async fn test_events_come_out_in_push_order() {
        let (queue, mut stream) = UpdateQueue::bounded(10);
        for n in 0..5 {
            queue.try_push(event(n)).unwrap();
        }
        for n in 0..5 {
            let got = stream.next_event().await.unwrap();
            assert_eq!(got.chat.id, n);
        }
    }

    #[tokio::test]
    async fn test_full_queue_rejects_without_blocking() {
        let (queue, _stream) = UpdateQueue::bounded(2);
        queue.try_push(event(1)).unwrap();
        queue.try_push(event(2)).unwrap();
        let rejected = queue.try_push(event(3)).unwrap_err();
        assert_eq!(rejected.chat.id, 3);
    }

    #[tokio::test]
    async fn test_rejected_event_frees_no_slot() {
        let (queue, mut stream) = UpdateQueue::bounded(1);
        queue.try_push(event(1)).unwrap();
        assert!(queue.try_push(event(2)).is_err());
        // Consuming the only pending event makes room again.
        assert_eq!(stream.next_event().await.unwrap().chat.id, 1);
        queue.try_push(event(3)).unwrap();
    }

    #[tokio::test]
    async fn test_stream_ends_when_all_producers_drop() {
        let (queue, mut stream) = UpdateQueue::bounded(1);
        queue.try_push(event(1)).unwrap();
        drop(queue);
        assert_eq!(stream.next_event().await.unwrap().chat.id, 1);
        assert!(stream.next_event().await.is_none());
    }
}
