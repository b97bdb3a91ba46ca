mod common;

use common::TestEnv;
use school_portal::entity::role::RoleName;
use school_portal::error::{token_error::TokenError, user_error::UserError, ApiError};

#[tokio::test]
async fn register_then_login_returns_same_user() {
    let env = TestEnv::new().await;

    let registered = env.auth.register("new@school.test", "password123").await.unwrap();
    let logged_in = env.auth.login("new@school.test", "password123").await.unwrap();

    assert_eq!(registered.user.id, logged_in.user.id);
    assert_eq!(logged_in.user.role, RoleName::Student);
}

#[tokio::test]
async fn email_is_normalized_at_every_boundary() {
    let env = TestEnv::new().await;

    env.auth.register("Alice@Example.com", "password123").await.unwrap();
    assert!(env.store.stored_user("alice@example.com").is_some());

    let session = env.auth.login("ALICE@example.com", "password123").await.unwrap();
    assert_eq!(session.user.email, "alice@example.com");
}

#[tokio::test]
async fn duplicate_registration_is_rejected() {
    let env = TestEnv::new().await;

    env.auth.register("dup@school.test", "password123").await.unwrap();
    let err = env.auth.register("DUP@school.test", "password456").await.unwrap_err();
    assert!(matches!(err, ApiError::User(UserError::AlreadyExists)));
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let env = TestEnv::new().await;
    env.auth.register("known@school.test", "password123").await.unwrap();
    env.auth.register("asleep@school.test", "password123").await.unwrap();
    env.store.set_active("asleep@school.test", false);

    let wrong_password = env.auth.login("known@school.test", "nope-nope-nope").await.unwrap_err();
    let unknown_email = env.auth.login("ghost@school.test", "password123").await.unwrap_err();
    let inactive = env.auth.login("asleep@school.test", "password123").await.unwrap_err();

    for err in [&wrong_password, &unknown_email, &inactive] {
        assert!(matches!(err, ApiError::User(UserError::InvalidCredentials)));
        assert_eq!(err.to_string(), "Invalid credentials");
    }
}

#[tokio::test]
async fn refresh_rotates_and_replay_fails() {
    let env = TestEnv::new().await;
    let session = env.auth.register("rotate@school.test", "password123").await.unwrap();

    let rotated = env.auth.refresh(&session.refresh_token).await.unwrap();
    assert_eq!(rotated.user.id, session.user.id);
    assert_ne!(rotated.refresh_token, session.refresh_token);

    // the presented token was consumed by the first redemption
    let replay = env.auth.refresh(&session.refresh_token).await.unwrap_err();
    assert!(matches!(replay, ApiError::Token(TokenError::InvalidRefreshToken)));
    assert_eq!(replay.to_string(), "Invalid refresh token");

    // exactly one live row: the rotated token
    assert_eq!(env.store.live_token_count(), 1);
    env.auth.refresh(&rotated.refresh_token).await.unwrap();
}

#[tokio::test]
async fn logout_consumes_the_token() {
    let env = TestEnv::new().await;
    let session = env.auth.register("leaver@school.test", "password123").await.unwrap();

    env.auth.logout(&session.refresh_token).await.unwrap();

    let refresh_after = env.auth.refresh(&session.refresh_token).await.unwrap_err();
    assert!(matches!(refresh_after, ApiError::Token(TokenError::InvalidRefreshToken)));

    // logout is single-use too
    let logout_again = env.auth.logout(&session.refresh_token).await.unwrap_err();
    assert!(matches!(logout_again, ApiError::Token(TokenError::InvalidRefreshToken)));
}

#[tokio::test]
async fn expired_refresh_token_is_rejected_without_revocation() {
    let env = TestEnv::new().await;
    let session = env.auth.register("slow@school.test", "password123").await.unwrap();

    env.store.expire_all_tokens();

    let err = env.auth.refresh(&session.refresh_token).await.unwrap_err();
    assert!(matches!(err, ApiError::Token(TokenError::InvalidRefreshToken)));
}

#[tokio::test]
async fn deactivation_blocks_refresh_immediately() {
    let env = TestEnv::new().await;
    let session = env.auth.register("blocked@school.test", "password123").await.unwrap();

    env.store.set_active("blocked@school.test", false);

    let err = env.auth.refresh(&session.refresh_token).await.unwrap_err();
    assert!(matches!(err, ApiError::User(UserError::Inactive)));

    // the token was not consumed; reactivating restores the session
    env.store.set_active("blocked@school.test", true);
    env.auth.refresh(&session.refresh_token).await.unwrap();
}

#[tokio::test]
async fn concurrent_sessions_coexist() {
    let env = TestEnv::new().await;
    env.auth.register("multi@school.test", "password123").await.unwrap();

    let laptop = env.auth.login("multi@school.test", "password123").await.unwrap();
    let phone = env.auth.login("multi@school.test", "password123").await.unwrap();

    // refreshing one session leaves the other intact
    env.auth.refresh(&laptop.refresh_token).await.unwrap();
    env.auth.refresh(&phone.refresh_token).await.unwrap();
}

#[tokio::test]
async fn get_user_by_id_reports_missing_rows() {
    let env = TestEnv::new().await;
    let session = env.auth.register("whoami@school.test", "password123").await.unwrap();

    let me = env.auth.get_user_by_id(session.user.id).await.unwrap();
    assert_eq!(me.email, "whoami@school.test");

    let err = env.auth.get_user_by_id(9999).await.unwrap_err();
    assert!(matches!(err, ApiError::User(UserError::UnknownUser)));
    assert_eq!(err.to_string(), "User not found");
}

#[tokio::test]
async fn registration_publishes_user_created_event() {
    let env = TestEnv::new().await;
    let mut rx = env.events.subscribe();

    let session = env.auth.register("observed@school.test", "password123").await.unwrap();

    let event = rx.recv().await.unwrap();
    assert_eq!(event.id, session.user.id);
    assert_eq!(event.email, "observed@school.test");
    assert_eq!(event.role, RoleName::Student);
}
