use invox_types::Invoice;
use std::time::{Duration, Instant};

/// How long a transient toast stays visible.
pub(crate) const TOAST_TTL: Duration = Duration::from_millis(2000);

/// Viewport widths below this are treated as narrow.
const NARROW_BREAKPOINT: u32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DeviceClass {
    Narrow,
    Wide,
}

impl DeviceClass {
    pub fn from_viewport_width(width: u32) -> Self {
        if width < NARROW_BREAKPOINT {
            DeviceClass::Narrow
        } else {
            DeviceClass::Wide
        }
    }

    /// Records revealed before the first "load more".
    pub fn initial_reveal(self) -> usize {
        match self {
            DeviceClass::Narrow => 10,
            DeviceClass::Wide => 15,
        }
    }

    /// Records added per "load more".
    pub fn increment(self) -> usize {
        self.initial_reveal()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Toast {
    SignedIn,
    Copied,
    Deleted,
}

/// Three independent one-shot flags, each with its own expiry deadline.
/// Re-triggering an active toast restarts only that toast's timer.
#[derive(Debug, Default)]
pub(crate) struct Toasts {
    signed_in: Option<Instant>,
    copied: Option<Instant>,
    deleted: Option<Instant>,
}

impl Toasts {
    pub fn set(&mut self, toast: Toast, now: Instant) {
        *self.slot(toast) = Some(now + TOAST_TTL);
    }

    pub fn is_active(&self, toast: Toast) -> bool {
        match toast {
            Toast::SignedIn => self.signed_in.is_some(),
            Toast::Copied => self.copied.is_some(),
            Toast::Deleted => self.deleted.is_some(),
        }
    }

    /// Clear every toast whose deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        for slot in [&mut self.signed_in, &mut self.copied, &mut self.deleted] {
            if slot.is_some_and(|deadline| deadline <= now) {
                *slot = None;
            }
        }
    }

    fn slot(&mut self, toast: Toast) -> &mut Option<Instant> {
        match toast {
            Toast::SignedIn => &mut self.signed_in,
            Toast::Copied => &mut self.copied,
            Toast::Deleted => &mut self.deleted,
        }
    }
}

/// Dashboard view state.
///
/// Owns the local mirror of the subscribed invoice collection and every
/// piece of UI-derived state: the reveal window, the pending-delete
/// confirmation, the create busy flag, and the transient toasts. Snapshots
/// replace the list wholesale; nothing here re-sorts or merges.
pub(crate) struct AppState {
    pub user: Option<String>,
    pub invoices: Vec<Invoice>,
    pub loading: bool,
    pub device: DeviceClass,
    pub reveal_count: usize,
    pub selected: usize,
    pub pending_delete: Option<String>,
    pub deleting: bool,
    pub creating: bool,
    pub toasts: Toasts,
    pub status: Option<String>,
}

impl AppState {
    pub fn new(device: DeviceClass) -> Self {
        Self {
            user: None,
            invoices: Vec::new(),
            loading: true,
            device,
            reveal_count: device.initial_reveal(),
            selected: 0,
            pending_delete: None,
            deleting: false,
            creating: false,
            toasts: Toasts::default(),
            status: None,
        }
    }

    // --- subscription lifecycle ---

    /// First attach for an identity. No toast.
    pub fn attached(&mut self, user: String) {
        self.user = Some(user);
        self.invoices.clear();
        self.loading = true;
        self.selected = 0;
    }

    /// Identity changed to a different signed-in user after the first
    /// attach. Re-arms loading and announces the sign-in.
    pub fn switched_user(&mut self, user: String, now: Instant) {
        self.attached(user);
        self.toasts.set(Toast::SignedIn, now);
    }

    pub fn signed_out(&mut self) {
        self.user = None;
        self.invoices.clear();
        self.loading = false;
        self.selected = 0;
        self.pending_delete = None;
        self.deleting = false;
    }

    /// Replace the held list with a snapshot. Clears the initial-loading
    /// flag; ordering is taken as delivered.
    pub fn apply_snapshot(&mut self, invoices: Vec<Invoice>) {
        self.invoices = invoices;
        self.loading = false;
        self.clamp_selection();
    }

    // --- derived display state ---

    pub fn is_empty(&self) -> bool {
        !self.loading && self.invoices.is_empty()
    }

    /// The revealed head of the store-ordered list.
    pub fn visible(&self) -> &[Invoice] {
        let n = self.reveal_count.min(self.invoices.len());
        &self.invoices[..n]
    }

    pub fn has_more(&self) -> bool {
        self.invoices.len() > self.reveal_count
    }

    pub fn selected_invoice(&self) -> Option<&Invoice> {
        self.visible().get(self.selected)
    }

    // --- pagination window ---

    pub fn load_more(&mut self) {
        self.reveal_count += self.device.increment();
    }

    /// Re-detect the device class on resize. The reveal count was
    /// established at construction and is never shrunk here; only the
    /// increment basis changes.
    pub fn set_viewport_width(&mut self, width: u32) {
        self.device = DeviceClass::from_viewport_width(width);
    }

    // --- selection ---

    pub fn select_next(&mut self) {
        let count = self.visible().len();
        if count > 0 && self.selected + 1 < count {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let count = self.visible().len();
        if count == 0 {
            self.selected = 0;
        } else if self.selected >= count {
            self.selected = count - 1;
        }
    }

    // --- deletion ---

    /// Arm the confirmation modal. A request while another is pending
    /// replaces the pending id; nothing is queued.
    pub fn request_delete(&mut self, id: String) {
        if self.deleting {
            return;
        }
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        if self.deleting {
            return;
        }
        self.pending_delete = None;
    }

    /// Confirm the pending delete. Returns the id the handler should
    /// delete; the modal stays up in its "deleting" form until settle.
    pub fn confirm_delete(&mut self) -> Option<String> {
        let id = self.pending_delete.clone()?;
        self.deleting = true;
        Some(id)
    }

    /// Delete settled. On success the record is removed optimistically
    /// (the next snapshot confirms); on failure the list is left untouched
    /// and the error becomes a status line. Either way the pending state
    /// is cleared.
    pub fn delete_settled(&mut self, id: &str, error: Option<String>, now: Instant) {
        match error {
            None => {
                self.invoices.retain(|invoice| invoice.id != id);
                self.toasts.set(Toast::Deleted, now);
            }
            Some(msg) => {
                self.status = Some(format!("Delete failed: {}", msg));
            }
        }
        self.pending_delete = None;
        self.deleting = false;
        self.clamp_selection();
    }

    // --- creation ---

    /// Mark the create affordance busy. Returns false if one is already
    /// in flight.
    pub fn begin_create(&mut self) -> bool {
        if self.creating {
            return false;
        }
        self.creating = true;
        true
    }

    /// Create settled; the busy flag clears unconditionally. Failure is a
    /// status line only, since error reporting belongs to the create
    /// operation's owner.
    pub fn create_settled(&mut self, error: Option<String>) {
        self.creating = false;
        if let Some(msg) = error {
            self.status = Some(format!("Create failed: {}", msg));
        }
    }

    // --- toasts & ticking ---

    pub fn note_copied(&mut self, now: Instant) {
        self.toasts.set(Toast::Copied, now);
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.toasts.tick(now);
    }
}
