//! Authentication service tests over a mocked credential store.

use std::sync::Arc;

use uuid::Uuid;

use ledger_api::domain::{Password, User};
use ledger_api::errors::AppError;
use ledger_api::infra::MockUserRepository;
use ledger_api::services::{AuthService, Authenticator, TokenCodec, TokenError};

const JWT_SECRET: &[u8] = b"test-signing-secret-32-bytes-long!!";

fn codec() -> TokenCodec {
    TokenCodec::new(JWT_SECRET, 24)
}

fn account(id: Uuid, email: &str, password: &str) -> User {
    User::new(
        id,
        "Test User".to_string(),
        email.to_string(),
        Password::new(password).unwrap().into_string(),
    )
}

#[tokio::test]
async fn login_with_unknown_email_is_unauthorized() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email().returning(|_| Ok(None));

    let auth = Authenticator::new(Arc::new(repo), codec());
    let result = auth
        .login("nobody@x.com".to_string(), "whatever".to_string())
        .await;

    assert!(matches!(result, Err(AppError::Unauthorized)));
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let user = account(Uuid::new_v4(), "someone@x.com", "right-password");

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email()
        .returning(move |_| Ok(Some(user.clone())));

    let auth = Authenticator::new(Arc::new(repo), codec());
    let result = auth
        .login("someone@x.com".to_string(), "wrong-password".to_string())
        .await;

    // Same kind as the unknown-email case: callers cannot tell them apart.
    assert!(matches!(result, Err(AppError::Unauthorized)));
}

#[tokio::test]
async fn login_issues_a_token_for_the_account_subject() {
    let user_id = Uuid::new_v4();
    let user = account(user_id, "someone@x.com", "right-password");

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email()
        .returning(move |_| Ok(Some(user.clone())));

    let auth = Authenticator::new(Arc::new(repo), codec());
    let response = auth
        .login("someone@x.com".to_string(), "right-password".to_string())
        .await
        .unwrap();

    let claims = auth.verify_token(&response.token).unwrap();
    assert_eq!(claims.sub, user_id.to_string());
}

#[tokio::test]
async fn verify_rejects_tokens_from_a_different_key() {
    let repo = MockUserRepository::new();
    let auth = Authenticator::new(Arc::new(repo), codec());

    let foreign = TokenCodec::new(b"some-other-signing-key-32-bytes!!!!", 24);
    let token = foreign.issue(&Uuid::new_v4().to_string()).unwrap();

    let result = auth.verify_token(&token);
    assert!(matches!(
        result,
        Err(AppError::Token(TokenError::BadSignature))
    ));
}

#[tokio::test]
async fn logout_acknowledges_without_revoking() {
    let repo = MockUserRepository::new();
    let auth = Authenticator::new(Arc::new(repo), codec());

    let subject = Uuid::new_v4();
    let token = codec().issue(&subject.to_string()).unwrap();

    auth.logout(subject).await.unwrap();

    // No revocation store: the token still verifies after logout.
    assert!(auth.verify_token(&token).is_ok());
}
