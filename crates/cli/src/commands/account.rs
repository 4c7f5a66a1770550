//! Account and session commands.

use secrecy::SecretString;

use pomelo_storefront::{Result, Storefront};

pub async fn login(storefront: &mut Storefront, email: &str, password: String) -> Result<()> {
    let password = SecretString::from(password);
    let user = storefront.login(email, &password).await?;
    println!("Welcome back, {}!", user.name);
    if user.role.is_admin() {
        println!("You have admin access.");
    }
    Ok(())
}

pub async fn signup(
    storefront: &mut Storefront,
    email: &str,
    password: String,
    name: &str,
) -> Result<()> {
    let password = SecretString::from(password);
    let user = storefront.auth.signup(email, &password, name).await?;
    println!("Account created. Welcome, {}!", user.name);
    Ok(())
}

pub fn logout(storefront: &mut Storefront) -> Result<()> {
    if !storefront.auth.is_authenticated() {
        println!("Not logged in.");
        return Ok(());
    }
    storefront.auth.logout()?;
    println!("Logged out.");
    Ok(())
}

pub fn whoami(storefront: &Storefront) -> Result<()> {
    match storefront.auth.current_user() {
        Some(user) => {
            println!("{} <{}>", user.name, user.email);
            println!("Role: {:?}", user.role);
            println!("Member since: {}", user.created_at.format("%B %e, %Y"));
            if let Some(avatar) = &user.avatar {
                println!("Avatar: {avatar}");
            }
        }
        None => println!("Not logged in."),
    }
    Ok(())
}
