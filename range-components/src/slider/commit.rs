use range_shard::LogicDomain;
use range_ui::CallbackWith;
use tokio::sync::mpsc;
use tracing::{debug, trace, warn};

use super::{GestureId, SliderError};

/// One value on its way to the logic domain.
#[derive(Debug, Clone, PartialEq)]
pub struct Commit {
    /// The drag that produced the value.
    pub gesture: GestureId,
    /// The clamped, quantized value.
    pub value: f32,
    /// Consumer sink current at dispatch time.
    pub sink: CallbackWith<f32>,
}

/// Sending half of the rendering-to-logic channel.
///
/// Dispatching never waits: commits are queued and delivered in dispatch
/// order by the [`CommitStream`] running on the logic domain. There is no
/// acknowledgment; the consumer's state update comes back as the slider's
/// `value` argument.
///
/// A bridge created with [`spawn`](Self::spawn) keeps its logic domain alive,
/// so an owned runtime is not shut down while a control can still commit to it.
#[derive(Debug, Clone)]
pub struct CommitBridge {
    tx: mpsc::UnboundedSender<Commit>,
    domain: Option<LogicDomain>,
}

/// Receiving half of the rendering-to-logic channel.
#[derive(Debug)]
pub struct CommitStream {
    rx: mpsc::UnboundedReceiver<Commit>,
}

impl CommitBridge {
    /// Creates a connected bridge and stream.
    pub fn channel() -> (Self, CommitStream) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx, domain: None }, CommitStream { rx })
    }

    /// Creates a bridge whose stream is drained on `domain`.
    pub fn spawn(domain: &LogicDomain) -> Self {
        let (mut bridge, stream) = Self::channel();
        domain.spawn(stream.run());
        bridge.domain = Some(domain.clone());
        bridge
    }

    /// The logic domain this bridge delivers on, if it was spawned onto one.
    pub fn domain(&self) -> Option<&LogicDomain> {
        self.domain.as_ref()
    }

    /// Queues `value` for delivery to `sink`.
    ///
    /// If the logic domain has shut down, the value is dropped and a warning
    /// is logged.
    pub fn dispatch(&self, gesture: GestureId, value: f32, sink: &CallbackWith<f32>) {
        if let Err(err) = self.try_dispatch(gesture, value, sink) {
            warn!(gesture = gesture.0, value, "dropping slider commit: {err}");
        }
    }

    /// Queues `value` for delivery to `sink`, reporting a closed logic domain.
    pub fn try_dispatch(
        &self,
        gesture: GestureId,
        value: f32,
        sink: &CallbackWith<f32>,
    ) -> Result<(), SliderError> {
        self.tx
            .send(Commit {
                gesture,
                value,
                sink: sink.clone(),
            })
            .map_err(|_| SliderError::LogicDomainClosed)?;
        trace!(gesture = gesture.0, value, "slider commit queued");
        Ok(())
    }

    /// Whether the receiving side is gone.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl CommitStream {
    /// Waits for the next commit. `None` once every bridge is dropped and the
    /// queue is drained.
    pub async fn next(&mut self) -> Option<Commit> {
        self.rx.recv().await
    }

    /// Takes the next queued commit without waiting.
    pub fn try_next(&mut self) -> Option<Commit> {
        self.rx.try_recv().ok()
    }

    /// Delivers every commit to its sink, in order, until the bridge closes.
    pub async fn run(mut self) {
        while let Some(commit) = self.next().await {
            trace!(
                gesture = commit.gesture.0,
                value = commit.value,
                "slider commit delivered"
            );
            commit.sink.call(commit.value);
        }
        debug!("slider commit stream closed");
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use parking_lot::Mutex;

    use super::*;

    fn recorder() -> (Arc<Mutex<Vec<f32>>>, CallbackWith<f32>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = {
            let seen = Arc::clone(&seen);
            CallbackWith::new(move |value| seen.lock().push(value))
        };
        (seen, sink)
    }

    #[test]
    fn commits_queue_without_a_consumer() {
        let (bridge, mut stream) = CommitBridge::channel();
        let (_, sink) = recorder();
        for value in [1.0, 2.0, 3.0] {
            bridge.dispatch(GestureId(0), value, &sink);
        }
        let queued: Vec<f32> = std::iter::from_fn(|| stream.try_next())
            .map(|commit| commit.value)
            .collect();
        assert_eq!(queued, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn closed_stream_reports_error() {
        let (bridge, stream) = CommitBridge::channel();
        drop(stream);
        assert!(bridge.is_closed());
        let (_, sink) = recorder();
        assert!(matches!(
            bridge.try_dispatch(GestureId(0), 1.0, &sink),
            Err(SliderError::LogicDomainClosed)
        ));
        // Fire-and-forget path swallows the error.
        bridge.dispatch(GestureId(0), 1.0, &sink);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn slow_consumer_receives_values_in_order() {
        let (seen, _) = recorder();
        let slow_sink = {
            let seen = Arc::clone(&seen);
            CallbackWith::new(move |value| {
                std::thread::sleep(Duration::from_millis(2));
                seen.lock().push(value);
            })
        };

        let (bridge, stream) = CommitBridge::channel();
        let consumer = tokio::spawn(stream.run());

        let expected: Vec<f32> = (0..50).map(|i| i as f32).collect();
        for value in &expected {
            bridge.dispatch(GestureId(0), *value, &slow_sink);
        }
        drop(bridge);
        consumer.await.unwrap();

        assert_eq!(*seen.lock(), expected);
    }

    #[tokio::test]
    async fn each_commit_uses_the_sink_it_was_sent_with() {
        let (first_seen, first) = recorder();
        let (second_seen, second) = recorder();
        let (bridge, stream) = CommitBridge::channel();

        bridge.dispatch(GestureId(0), 1.0, &first);
        bridge.dispatch(GestureId(0), 2.0, &second);
        drop(bridge);
        stream.run().await;

        assert_eq!(*first_seen.lock(), vec![1.0]);
        assert_eq!(*second_seen.lock(), vec![2.0]);
    }

    #[test]
    fn spawned_bridge_drains_on_logic_domain() {
        let domain =
            LogicDomain::new(range_shard::LogicDomainConfig::default()).unwrap();
        let (seen, sink) = recorder();
        let bridge = CommitBridge::spawn(&domain);
        bridge.dispatch(GestureId(0), 4.0, &sink);
        bridge.dispatch(GestureId(0), 5.0, &sink);

        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while seen.lock().len() < 2 && std::time::Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(1));
        }
        assert_eq!(*seen.lock(), vec![4.0, 5.0]);
    }

    #[test]
    fn bridge_outlives_dropped_domain_handle() {
        let bridge = {
            let domain = LogicDomain::new(range_shard::LogicDomainConfig::default()).unwrap();
            CommitBridge::spawn(&domain)
        };
        assert!(bridge.domain().is_some_and(LogicDomain::is_owned));
        std::thread::sleep(Duration::from_millis(200));
        assert!(!bridge.is_closed());

        let (tx, rx) = std::sync::mpsc::channel();
        let sink = CallbackWith::new(move |value: f32| {
            let _ = tx.send(value);
        });
        bridge.try_dispatch(GestureId(0), 50.0, &sink).unwrap();
        assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok(50.0));
    }
}
