use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::stream::Stream;

use crate::error::Result;

pub use invox_runtime::StoreEvent;

pub struct WatchBuilder {
    inner: Arc<invox_runtime::Invox>,
    owner: String,
}

impl WatchBuilder {
    pub(crate) fn new(inner: Arc<invox_runtime::Invox>, owner: String) -> Self {
        Self { inner, owner }
    }

    pub fn start(self) -> Result<LiveStream> {
        let subscription = self
            .inner
            .watch()
            .subscribe(&self.owner)
            .map_err(crate::error::Error::Internal)?;

        // Bridge the blocking receiver into an async channel. The
        // subscription is moved into the task and dropped (cancelling the
        // watch) once the stream side goes away.
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();

        tokio::task::spawn_blocking(move || {
            while let Ok(event) = subscription.receiver().recv() {
                if tx.send(event).is_err() {
                    break; // Receiver dropped
                }
            }
        });

        Ok(LiveStream { receiver: rx })
    }
}

pub struct LiveStream {
    receiver: tokio::sync::mpsc::UnboundedReceiver<StoreEvent>,
}

impl LiveStream {
    /// Poll for the next event (non-blocking).
    ///
    /// Returns `None` if no event is available immediately.
    pub fn try_next(&mut self) -> Option<StoreEvent> {
        self.receiver.try_recv().ok()
    }
}

impl Stream for LiveStream {
    type Item = StoreEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.receiver.poll_recv(cx)
    }
}
