//! Login, signup, and session persistence flows.

use secrecy::SecretString;

use pomelo_core::Role;
use pomelo_storefront::{AppError, Storefront, StorefrontConfig};

use pomelo_integration_tests::TestContext;

fn password() -> SecretString {
    SecretString::from("irrelevant-by-design")
}

#[tokio::test]
async fn test_known_account_login_survives_refresh() {
    let ctx = TestContext::new();
    {
        let mut storefront = ctx.open();
        let user = storefront
            .login("jane@example.com", &password())
            .await
            .unwrap();
        assert_eq!(user.name, "Jane Porter");
    }

    let reloaded = ctx.open();
    assert!(reloaded.auth.is_authenticated());
    assert_eq!(
        reloaded.auth.current_user().unwrap().email.as_str(),
        "jane@example.com"
    );
}

#[tokio::test]
async fn test_unknown_email_synthesizes_customer_account() {
    let ctx = TestContext::new();
    let mut storefront = ctx.open();

    let user = storefront
        .login("casual.browser@mail.net", &password())
        .await
        .unwrap();

    assert_eq!(user.name, "casual.browser");
    assert_eq!(user.role, Role::Customer);
    assert!(!storefront.auth.is_admin());
}

#[tokio::test]
async fn test_admin_login_grants_admin_flag() {
    let ctx = TestContext::new();
    let mut storefront = ctx.open();

    storefront
        .login("admin@example.com", &password())
        .await
        .unwrap();
    assert!(storefront.auth.is_admin());
}

#[tokio::test]
async fn test_hardened_mode_rejects_unknown_accounts() {
    let ctx = TestContext::new();
    let config = StorefrontConfig {
        demo_auth: false,
        ..ctx.config().clone()
    };
    let mut storefront = Storefront::open(&config).unwrap();

    let result = storefront.login("stranger@example.com", &password()).await;
    assert!(matches!(result, Err(AppError::Auth(_))));
    assert!(!storefront.auth.is_authenticated());

    // The generic user-facing message leaks nothing about why
    let message = result.unwrap_err().user_message();
    assert_eq!(message, "Invalid credentials");
}

#[tokio::test]
async fn test_signup_then_refresh_keeps_account() {
    let ctx = TestContext::new();
    {
        let mut storefront = ctx.open();
        let user = storefront
            .auth
            .signup("sam@example.com", &password(), "Sam")
            .await
            .unwrap();
        assert!(user.avatar.is_some());
    }

    let reloaded = ctx.open();
    assert_eq!(reloaded.auth.current_user().unwrap().name, "Sam");
}

#[tokio::test]
async fn test_logout_removes_stored_record() {
    let ctx = TestContext::new();
    let mut storefront = ctx.open();
    storefront
        .login("jane@example.com", &password())
        .await
        .unwrap();
    assert!(ctx.read_raw("user").is_some());

    storefront.auth.logout().unwrap();

    // The key is removed outright, not overwritten with an empty marker
    assert!(ctx.read_raw("user").is_none());
    let reloaded = ctx.open();
    assert!(!reloaded.auth.is_authenticated());
}

#[tokio::test]
async fn test_corrupt_user_record_degrades_to_anonymous() {
    let ctx = TestContext::new();
    {
        let mut storefront = ctx.open();
        storefront
            .login("jane@example.com", &password())
            .await
            .unwrap();
    }

    ctx.write_raw("user", "not even json");

    let reloaded = ctx.open();
    assert!(!reloaded.auth.is_authenticated());
}

#[tokio::test]
async fn test_cart_outlives_logout() {
    // Logging out clears the account, not the cart
    let ctx = TestContext::new();
    let mut storefront = ctx.open();
    let tote = storefront
        .catalog()
        .product(&pomelo_core::ProductId::new("p-tote"))
        .unwrap()
        .clone();

    storefront
        .login("jane@example.com", &password())
        .await
        .unwrap();
    storefront.cart.add(&tote, 1).unwrap();
    storefront.auth.logout().unwrap();

    assert_eq!(storefront.cart.item_count(), 1);
    let reloaded = ctx.open();
    assert_eq!(reloaded.cart.item_count(), 1);
}
