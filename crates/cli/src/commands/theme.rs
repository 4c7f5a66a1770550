//! Theme commands.

use pomelo_storefront::services::Theme;
use pomelo_storefront::{Result, Storefront};

pub fn show(storefront: &Storefront) -> Result<()> {
    println!("{}", storefront.theme.current());
    Ok(())
}

pub fn set(storefront: &mut Storefront, theme: Theme) -> Result<()> {
    storefront.theme.set(theme)?;
    println!("Theme set to {theme}.");
    Ok(())
}

pub fn toggle(storefront: &mut Storefront) -> Result<()> {
    let theme = storefront.theme.toggle()?;
    println!("Theme set to {theme}.");
    Ok(())
}
