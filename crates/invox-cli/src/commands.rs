use super::args::{Cli, Commands};
use super::handlers;
use anyhow::Result;
use invox_runtime::{Invox, resolve_data_dir};
use std::path::PathBuf;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;

    let Some(command) = cli.command else {
        show_guidance(&data_dir);
        return Ok(());
    };

    match command {
        Commands::Init => handlers::init::handle(&data_dir),

        Commands::Login { user } => {
            let invox = Invox::open(data_dir)?;
            handlers::session::login(&invox, &user)
        }
        Commands::Logout => {
            let invox = Invox::open(data_dir)?;
            handlers::session::logout(&invox)
        }
        Commands::Whoami => {
            let invox = Invox::open(data_dir)?;
            handlers::session::whoami(&invox)
        }

        Commands::New {
            user,
            project,
            client,
            total,
            currency,
        } => {
            let invox = Invox::open(data_dir)?;
            handlers::new::handle(&invox, user, project, client, total, currency)
        }

        Commands::List { user, limit } => {
            let invox = Invox::open(data_dir)?;
            handlers::list::handle(&invox, user, limit, cli.format)
        }

        Commands::Show { invoice_id } => {
            let invox = Invox::open(data_dir)?;
            handlers::show::handle(&invox, &invoice_id, cli.format)
        }

        Commands::Delete { invoice_id, yes } => {
            let invox = Invox::open(data_dir)?;
            handlers::delete::handle(&invox, &invoice_id, yes)
        }

        Commands::Paid { invoice_id } => {
            let invox = Invox::open(data_dir)?;
            handlers::paid::handle(&invox, &invoice_id)
        }

        Commands::Link { invoice_id } => {
            let invox = Invox::open(data_dir)?;
            handlers::link::handle(&invox, &invoice_id)
        }

        Commands::Export { user, output } => {
            let invox = Invox::open(data_dir)?;
            handlers::export::handle(&invox, user, output)
        }

        Commands::Dashboard { user } => {
            let invox = Invox::open(data_dir)?;
            if let Some(selected) = handlers::dashboard::handle(&invox, user)? {
                handlers::show::handle(&invox, &selected, cli.format)?;
            }
            Ok(())
        }
    }
}

/// Resolve the acting owner: explicit flag first, then the signed-in user.
pub(crate) fn resolve_owner(invox: &Invox, flag: Option<String>) -> Result<String> {
    if let Some(user) = flag {
        return Ok(user);
    }
    invox
        .session()
        .current()?
        .ok_or_else(|| anyhow::anyhow!("not signed in; run `invox login <user>` or pass --user"))
}

fn show_guidance(data_dir: &PathBuf) {
    let config_exists = data_dir.join("config.toml").exists();

    println!("invox - Local-first invoice tracker\n");

    if !config_exists {
        println!("Get started:");
        println!("  invox init\n");
        println!("The init command will:");
        println!("  1. Create the data directory");
        println!("  2. Write a default config (share-link origin, currency symbols)");
        println!("  3. Set up the invoice store\n");
    } else {
        println!("Quick commands:");
        println!("  invox login <user>                # Sign in");
        println!("  invox new --project <title>       # Create an invoice");
        println!("  invox list                        # List your invoices");
        println!("  invox dashboard                   # Watch them live\n");
    }

    println!("For more commands:");
    println!("  invox --help");
}
