use invox_types::Invoice;

/// Handler → renderer updates.
#[derive(Debug, Clone)]
pub(crate) enum TuiEvent {
    /// Initial attach for an identity; no toast.
    Attached(String),
    /// Identity changed to a different signed-in user.
    SwitchedUser(String),
    SignedOut,
    /// Full snapshot of the subscribed collection.
    Snapshot(Vec<Invoice>),
    /// Create operation settled; `Some` carries the error message.
    CreateSettled(Option<String>),
    /// Delete-by-id settled.
    DeleteSettled { id: String, error: Option<String> },
    Status(String),
    Fatal(String),
}

/// Renderer → handler requests.
#[derive(Debug, Clone)]
pub(crate) enum RendererSignal {
    Quit,
    CreateRequested,
    DeleteConfirmed(String),
    /// Navigate to an invoice: the dashboard closes and hands the id back
    /// to the caller.
    Open(String),
}
