pub(crate) mod app;
mod components;
mod tui_event;
mod ui;

pub(crate) use app::{AppState, DeviceClass};
pub(crate) use tui_event::{RendererSignal, TuiEvent};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use invox_types::{CurrencyTable, share_link};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, Instant};

/// Rough width of a terminal cell in CSS pixels, used to map terminal
/// columns onto the dashboard's viewport breakpoint.
const CELL_WIDTH_PX: u32 = 8;

fn approx_viewport_px(cols: u16) -> u32 {
    cols as u32 * CELL_WIDTH_PX
}

/// Render-time context the dashboard derives display state from.
pub(crate) struct RenderContext {
    pub origin: String,
    pub currency: CurrencyTable,
}

pub(crate) struct TuiRenderer {
    ctx: RenderContext,
    signal_tx: Sender<RendererSignal>,
}

impl TuiRenderer {
    pub fn new(ctx: RenderContext, signal_tx: Sender<RendererSignal>) -> Self {
        Self { ctx, signal_tx }
    }

    pub fn run(self, rx: Receiver<TuiEvent>) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let size = terminal.size()?;
        let mut app = AppState::new(DeviceClass::from_viewport_width(approx_viewport_px(
            size.width,
        )));
        let mut should_quit = false;

        let tick_rate = Duration::from_millis(250);

        while !should_quit {
            terminal.draw(|f| ui::draw(f, &app, &self.ctx))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key, &mut app) {
                            should_quit = true;
                        }
                    }
                    Event::Resize(cols, _) => {
                        app.set_viewport_width(approx_viewport_px(cols));
                    }
                    _ => {}
                }
            }

            while let Ok(tui_event) = rx.try_recv() {
                match tui_event {
                    TuiEvent::Attached(user) => app.attached(user),
                    TuiEvent::SwitchedUser(user) => app.switched_user(user, Instant::now()),
                    TuiEvent::SignedOut => app.signed_out(),
                    TuiEvent::Snapshot(invoices) => app.apply_snapshot(invoices),
                    TuiEvent::CreateSettled(error) => app.create_settled(error),
                    TuiEvent::DeleteSettled { id, error } => {
                        app.delete_settled(&id, error, Instant::now());
                    }
                    TuiEvent::Status(msg) => app.status = Some(msg),
                    TuiEvent::Fatal(msg) => {
                        app.status = Some(msg);
                        should_quit = true;
                    }
                }
            }

            app.on_tick(Instant::now());
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Returns true when the renderer should shut down.
    fn handle_key(&self, key: KeyEvent, app: &mut AppState) -> bool {
        // Modal has its own keymap while a delete confirmation is pending.
        if app.pending_delete.is_some() {
            match key.code {
                KeyCode::Char('y') | KeyCode::Enter => {
                    if let Some(id) = app.confirm_delete() {
                        let _ = self.signal_tx.send(RendererSignal::DeleteConfirmed(id));
                    }
                }
                KeyCode::Esc | KeyCode::Char('n') => app.cancel_delete(),
                _ => {}
            }
            return false;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                let _ = self.signal_tx.send(RendererSignal::Quit);
                return true;
            }
            KeyCode::Down | KeyCode::Char('j') => app.select_next(),
            KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
            KeyCode::Char('n') => {
                if app.user.is_some() && app.begin_create() {
                    let _ = self.signal_tx.send(RendererSignal::CreateRequested);
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = app.selected_invoice().map(|inv| inv.id.clone()) {
                    app.request_delete(id);
                }
            }
            KeyCode::Char('c') => {
                let link = app
                    .selected_invoice()
                    .map(|inv| share_link(&self.ctx.origin, &inv.id));
                if let Some(link) = link {
                    copy_to_clipboard(&link);
                    app.note_copied(Instant::now());
                }
            }
            KeyCode::Char('m') => {
                if app.has_more() {
                    app.load_more();
                }
            }
            KeyCode::Enter => {
                if let Some(id) = app.selected_invoice().map(|inv| inv.id.clone()) {
                    let _ = self.signal_tx.send(RendererSignal::Open(id));
                    return true;
                }
            }
            _ => {}
        }

        false
    }
}

fn copy_to_clipboard(text: &str) {
    // The copy affordance has no error surface; a failed write only costs
    // the copy itself.
    if let Ok(mut clipboard) = arboard::Clipboard::new() {
        let _ = clipboard.set_text(text.to_string());
    }
}
