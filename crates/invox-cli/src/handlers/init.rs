use anyhow::Result;
use invox_runtime::Invox;
use std::path::Path;

pub fn handle(data_dir: &Path) -> Result<()> {
    println!("Initializing invox in {}\n", data_dir.display());

    let existed = data_dir.join("config.toml").exists();
    let invox = Invox::open(data_dir.to_path_buf())?;

    if existed {
        println!("✓ Config already present: {}", data_dir.join("config.toml").display());
    } else {
        println!("✓ Wrote default config: {}", data_dir.join("config.toml").display());
    }
    println!("✓ Invoice store ready:  {}\n", invox.config().store_root_in(data_dir).display());

    println!("Next steps:");
    println!("  invox login <user>                # Sign in");
    println!("  invox new --project <title>       # Create an invoice");
    println!("  invox dashboard                   # Watch your invoices live");

    Ok(())
}
