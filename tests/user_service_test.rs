//! User service unit tests over a mocked repository.

use std::sync::Arc;

use mockall::predicate::eq;
use uuid::Uuid;

use ledger_api::domain::{Password, User};
use ledger_api::errors::AppError;
use ledger_api::infra::MockUserRepository;
use ledger_api::services::{UserManager, UserService};

fn test_user(id: Uuid, email: &str) -> User {
    User::new(
        id,
        "Test User".to_string(),
        email.to_string(),
        "$argon2id$placeholder".to_string(),
    )
}

#[tokio::test]
async fn get_user_returns_active_user() {
    let user_id = Uuid::new_v4();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .with(eq(user_id))
        .returning(|id| Ok(Some(test_user(id, "test@example.com"))));

    let service = UserManager::new(Arc::new(repo));
    let user = service.get_user(user_id).await.unwrap();
    assert_eq!(user.id, user_id);
}

#[tokio::test]
async fn get_user_maps_absent_row_to_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let service = UserManager::new(Arc::new(repo));
    let result = service.get_user(Uuid::new_v4()).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn create_user_stores_a_verifiable_hash_not_the_plaintext() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email_with_deleted()
        .returning(|_| Ok(None));
    repo.expect_create().returning(|name, email, hash| {
        Ok(User::new(Uuid::new_v4(), name, email, hash))
    });

    let service = UserManager::new(Arc::new(repo));
    let user = service
        .create_user(
            "Test User".to_string(),
            "test@example.com".to_string(),
            "plaintext-password".to_string(),
        )
        .await
        .unwrap();

    assert_ne!(user.password_hash, "plaintext-password");
    let stored = Password::from_hash(user.password_hash);
    assert!(stored.verify("plaintext-password"));
    assert!(!stored.verify("other-password"));
}

#[tokio::test]
async fn create_user_conflicts_on_taken_email() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email_with_deleted()
        .returning(|email| Ok(Some(test_user(Uuid::new_v4(), email))));

    let service = UserManager::new(Arc::new(repo));
    let result = service
        .create_user(
            "Test User".to_string(),
            "taken@example.com".to_string(),
            "password123".to_string(),
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn create_user_conflicts_on_soft_deleted_email() {
    // A deleted account's email stays reserved.
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email_with_deleted().returning(|email| {
        let mut user = test_user(Uuid::new_v4(), email);
        user.soft_delete();
        Ok(Some(user))
    });

    let service = UserManager::new(Arc::new(repo));
    let result = service
        .create_user(
            "Test User".to_string(),
            "ghost@example.com".to_string(),
            "password123".to_string(),
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn create_user_rejects_short_password() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email_with_deleted()
        .returning(|_| Ok(None));

    let service = UserManager::new(Arc::new(repo));
    let result = service
        .create_user(
            "Test User".to_string(),
            "test@example.com".to_string(),
            "short".to_string(),
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

#[tokio::test]
async fn update_user_conflicts_when_email_belongs_to_another_user() {
    let user_id = Uuid::new_v4();
    let other_id = Uuid::new_v4();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email_with_deleted()
        .returning(move |email| Ok(Some(test_user(other_id, email))));

    let service = UserManager::new(Arc::new(repo));
    let result = service
        .update_user(
            user_id,
            None,
            Some("other@example.com".to_string()),
            None,
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn update_user_allows_keeping_own_email() {
    let user_id = Uuid::new_v4();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email_with_deleted()
        .returning(move |email| Ok(Some(test_user(user_id, email))));
    repo.expect_update()
        .returning(|id, name, email, _| {
            let mut user = test_user(id, email.as_deref().unwrap_or("same@example.com"));
            if let Some(name) = name {
                user.name = name;
            }
            Ok(user)
        });

    let service = UserManager::new(Arc::new(repo));
    let user = service
        .update_user(
            user_id,
            Some("Renamed".to_string()),
            Some("same@example.com".to_string()),
            None,
        )
        .await
        .unwrap();

    assert_eq!(user.name, "Renamed");
}

#[tokio::test]
async fn update_user_rehashes_a_new_password() {
    let user_id = Uuid::new_v4();

    let mut repo = MockUserRepository::new();
    repo.expect_update()
        .withf(|_, _, _, password_hash| {
            // The repository receives a hash that verifies, never plaintext.
            match password_hash {
                Some(hash) => {
                    hash != "new-password-123"
                        && Password::from_hash(hash.clone()).verify("new-password-123")
                }
                None => false,
            }
        })
        .returning(|id, _, _, hash| {
            let mut user = test_user(id, "test@example.com");
            user.password_hash = hash.unwrap();
            Ok(user)
        });

    let service = UserManager::new(Arc::new(repo));
    let result = service
        .update_user(user_id, None, None, Some("new-password-123".to_string()))
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn update_missing_user_is_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_update()
        .returning(|_, _, _, _| Err(AppError::not_found("user")));

    let service = UserManager::new(Arc::new(repo));
    let result = service
        .update_user(Uuid::new_v4(), Some("Name".to_string()), None, None)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn delete_passes_not_found_through() {
    let mut repo = MockUserRepository::new();
    repo.expect_delete()
        .returning(|_| Err(AppError::not_found("user")));

    let service = UserManager::new(Arc::new(repo));
    let result = service.delete_user(Uuid::new_v4()).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}
