//! Completion signals.
//!
//! There is no transport connection behind a captured response, so "the peer
//! went away" is replaced by "the response cycle finished". Each subscriber
//! gets its own one-shot channel; firing never blocks and never waits on a
//! slow subscriber.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

/// How the response cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseEvent {
    /// The capture was finalized into a structured response.
    Finalized,
    /// The capture was dropped without being finalized.
    Abandoned,
}

/// Read-only, one-shot completion signal.
///
/// Await it, or poll it without blocking through [`CloseNotify::try_event`].
#[derive(Debug)]
pub struct CloseNotify {
    rx: oneshot::Receiver<()>,
    /// Event already observed; oneshot receivers can only yield once.
    seen: Option<CloseEvent>,
}

impl CloseNotify {
    fn new(rx: oneshot::Receiver<()>) -> Self {
        Self { rx, seen: None }
    }

    /// Non-blocking check. `None` while the response is still being produced.
    pub fn try_event(&mut self) -> Option<CloseEvent> {
        if self.seen.is_none() {
            self.seen = match self.rx.try_recv() {
                Ok(()) => Some(CloseEvent::Finalized),
                Err(TryRecvError::Closed) => Some(CloseEvent::Abandoned),
                Err(TryRecvError::Empty) => None,
            };
        }
        self.seen
    }

    /// True once the response cycle is over, however it ended.
    pub fn is_closed(&mut self) -> bool {
        self.try_event().is_some()
    }
}

impl Future for CloseNotify {
    type Output = CloseEvent;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        if let Some(event) = this.seen {
            return Poll::Ready(event);
        }
        let event = match Pin::new(&mut this.rx).poll(cx) {
            Poll::Ready(Ok(())) => CloseEvent::Finalized,
            Poll::Ready(Err(_)) => CloseEvent::Abandoned,
            Poll::Pending => return Poll::Pending,
        };
        this.seen = Some(event);
        Poll::Ready(event)
    }
}

/// Registered completion signals of one response.
#[derive(Debug, Default)]
pub struct Observers {
    senders: Vec<oneshot::Sender<()>>,
}

impl Observers {
    /// Register a new independent signal.
    pub fn subscribe(&mut self) -> CloseNotify {
        let (tx, rx) = oneshot::channel();
        self.senders.push(tx);
        CloseNotify::new(rx)
    }

    /// Fire and release every registered signal.
    ///
    /// Signals fired here cannot fire again; a later call only reaches
    /// signals subscribed after this one.
    pub fn notify_all(&mut self) {
        for tx in self.senders.drain(..) {
            // A subscriber that dropped its signal is not an error.
            let _ = tx.send(());
        }
    }

    /// Number of signals registered and not yet fired.
    pub fn len(&self) -> usize {
        self.senders.len()
    }

    /// True when no signal is waiting to be fired.
    pub fn is_empty(&self) -> bool {
        self.senders.is_empty()
    }
}
