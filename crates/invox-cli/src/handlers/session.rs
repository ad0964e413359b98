use anyhow::Result;
use invox_runtime::Invox;

pub fn login(invox: &Invox, user: &str) -> Result<()> {
    if user.is_empty() {
        anyhow::bail!("user must not be empty");
    }
    invox.session().login(user)?;
    println!("Signed in as {}", user);
    Ok(())
}

pub fn logout(invox: &Invox) -> Result<()> {
    invox.session().logout()?;
    println!("Signed out");
    Ok(())
}

pub fn whoami(invox: &Invox) -> Result<()> {
    match invox.session().current()? {
        Some(user) => println!("{}", user),
        None => println!("not signed in"),
    }
    Ok(())
}
