//! Dashboard handler.
//!
//! Owns the subscription lifecycle and the mutation worker threads; the
//! renderer thread owns the view state. The two sides talk over channels:
//! `TuiEvent` carries snapshots and settle results down, `RendererSignal`
//! carries user intent back up.

use crate::presentation::renderers::tui::{RenderContext, RendererSignal, TuiEvent, TuiRenderer};
use anyhow::Result;
use invox_runtime::{Invox, StoreEvent, Subscription};
use invox_types::InvoiceDraft;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

const POLL_TIMEOUT: Duration = Duration::from_millis(100);
const SESSION_CHECK_INTERVAL: Duration = Duration::from_secs(1);

/// Run the live dashboard. Returns the id of the invoice the user opened,
/// if any, so the caller can navigate to it.
pub fn handle(invox: &Invox, user_flag: Option<String>) -> Result<Option<String>> {
    let (event_tx, event_rx) = mpsc::channel(); // Handler -> Renderer
    let (signal_tx, signal_rx) = mpsc::channel(); // Renderer -> Handler

    let ctx = RenderContext {
        origin: invox.config().origin.clone(),
        currency: invox.config().currency_table(),
    };

    let renderer_handle = thread::spawn(move || TuiRenderer::new(ctx, signal_tx).run(event_rx));

    let result = run_handler(invox, user_flag, event_tx, signal_rx);

    if let Err(e) = renderer_handle.join() {
        eprintln!("TUI thread panicked: {:?}", e);
    }

    result
}

fn run_handler(
    invox: &Invox,
    user_flag: Option<String>,
    tx: Sender<TuiEvent>,
    signal_rx: Receiver<RendererSignal>,
) -> Result<Option<String>> {
    let watch = invox.watch();
    let session = invox.session();
    let ops = invox.invoices();

    // With --user the identity is pinned; otherwise the signed-in session
    // file is followed and may change while the dashboard is open.
    let follow_session = user_flag.is_none();
    let mut identity: Option<String> = match user_flag {
        Some(user) => Some(user),
        None => session.current().unwrap_or(None),
    };

    // Errors past this point must reach the renderer instead of being
    // returned: the renderer thread only shuts down on Quit keys or a
    // Fatal event, and join() waits for it.
    let mut subscription: Option<Subscription> = None;
    match &identity {
        Some(user) => match watch.subscribe(user) {
            Ok(sub) => {
                subscription = Some(sub);
                let _ = tx.send(TuiEvent::Attached(user.clone()));
            }
            Err(e) => {
                let _ = tx.send(TuiEvent::Fatal(format!("Failed to subscribe: {}", e)));
                return Ok(None);
            }
        },
        None => {
            let _ = tx.send(TuiEvent::SignedOut);
        }
    }

    let mut last_session_check = Instant::now();

    loop {
        match signal_rx.try_recv() {
            Ok(RendererSignal::Quit) => return Ok(None),
            Ok(RendererSignal::Open(id)) => return Ok(Some(id)),
            Ok(RendererSignal::CreateRequested) => {
                spawn_create(&ops, &identity, &tx)?;
            }
            Ok(RendererSignal::DeleteConfirmed(id)) => {
                spawn_delete(&ops, id, &tx)?;
            }
            Err(mpsc::TryRecvError::Disconnected) => return Ok(None),
            Err(mpsc::TryRecvError::Empty) => {}
        }

        // Follow the signed-in session: an identity change releases the old
        // subscription before the new one starts, so results from two
        // queries never mix.
        if follow_session && last_session_check.elapsed() >= SESSION_CHECK_INTERVAL {
            last_session_check = Instant::now();
            let current = session.current().unwrap_or(None);

            if current != identity {
                subscription = None;

                match &current {
                    Some(user) => match watch.subscribe(user) {
                        Ok(sub) => {
                            subscription = Some(sub);
                            let _ = tx.send(TuiEvent::SwitchedUser(user.clone()));
                        }
                        Err(e) => {
                            let _ = tx.send(TuiEvent::Status(format!(
                                "Failed to subscribe for {}: {}",
                                user, e
                            )));
                        }
                    },
                    None => {
                        let _ = tx.send(TuiEvent::SignedOut);
                    }
                }
                identity = current;
            }
        }

        if let Some(sub) = &subscription {
            match sub.receiver().recv_timeout(POLL_TIMEOUT) {
                Ok(StoreEvent::Snapshot(invoices)) => {
                    let _ = tx.send(TuiEvent::Snapshot(invoices));
                }
                Ok(StoreEvent::Error(msg)) => {
                    if msg.starts_with("FATAL:") {
                        let _ = tx.send(TuiEvent::Fatal(msg));
                        return Ok(None);
                    }
                    // Non-fatal subscription errors leave the list as-is.
                    let _ = tx.send(TuiEvent::Status(msg));
                }
                Err(mpsc::RecvTimeoutError::Timeout) => {}
                Err(mpsc::RecvTimeoutError::Disconnected) => {
                    subscription = None;
                    let _ = tx.send(TuiEvent::Status(
                        "Subscription ended unexpectedly".to_string(),
                    ));
                }
            }
        } else {
            thread::sleep(POLL_TIMEOUT);
        }
    }
}

/// The create operation is opaque to the view state: run it off-thread and
/// report the settle over the event channel. The busy flag was set by the
/// renderer before the signal was sent.
fn spawn_create(
    ops: &invox_runtime::InvoiceOps,
    identity: &Option<String>,
    tx: &Sender<TuiEvent>,
) -> Result<()> {
    let Some(owner) = identity.clone() else {
        let _ = tx.send(TuiEvent::CreateSettled(Some("not signed in".to_string())));
        return Ok(());
    };

    let ops = ops.clone();
    let tx = tx.clone();
    thread::Builder::new()
        .name("invox-create".to_string())
        .spawn(move || {
            let result = ops.create(InvoiceDraft::for_owner(owner));
            let _ = tx.send(TuiEvent::CreateSettled(result.err().map(|e| e.to_string())));
        })?;
    Ok(())
}

fn spawn_delete(ops: &invox_runtime::InvoiceOps, id: String, tx: &Sender<TuiEvent>) -> Result<()> {
    let ops = ops.clone();
    let tx = tx.clone();
    thread::Builder::new()
        .name("invox-delete".to_string())
        .spawn(move || {
            let error = ops.delete(&id).err().map(|e| e.to_string());
            let _ = tx.send(TuiEvent::DeleteSettled { id, error });
        })?;
    Ok(())
}
