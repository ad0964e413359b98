use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the data directory and default config
    Init,

    /// Sign in as a user (identity is an opaque string)
    Login { user: String },

    /// Sign out
    Logout,

    /// Print the signed-in user
    Whoami,

    /// Create a new invoice
    New {
        /// Owner; defaults to the signed-in user
        #[arg(long)]
        user: Option<String>,

        #[arg(long)]
        project: Option<String>,

        #[arg(long)]
        client: Option<String>,

        #[arg(long, default_value_t = 0.0)]
        total: f64,

        #[arg(long)]
        currency: Option<String>,
    },

    /// List invoices, newest first
    List {
        /// Owner; defaults to the signed-in user
        #[arg(long)]
        user: Option<String>,

        #[arg(long, default_value_t = 50)]
        limit: usize,
    },

    /// Show one invoice
    Show { invoice_id: String },

    /// Delete an invoice (asks for confirmation unless --yes)
    Delete {
        invoice_id: String,

        #[arg(long)]
        yes: bool,
    },

    /// Mark an invoice as paid
    Paid { invoice_id: String },

    /// Print the shareable link for an invoice
    Link { invoice_id: String },

    /// Export invoices to CSV
    Export {
        /// Owner; defaults to the signed-in user
        #[arg(long)]
        user: Option<String>,

        /// Output file; stdout when omitted
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Live dashboard (TUI)
    Dashboard {
        /// Watch this user instead of following the signed-in session
        #[arg(long)]
        user: Option<String>,
    },
}
