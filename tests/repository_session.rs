mod common;

use chrono::{Duration, Utc};
use job_board::domain::repositories::SessionRepository;
use job_board::infrastructure::persistence::PgSessionRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_create_and_find(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "s@example.com", "candidate").await;
    let repo = PgSessionRepository::new(Arc::new(pool));

    let session = repo
        .create(user_id, "digest", Utc::now() + Duration::hours(1))
        .await
        .unwrap();
    assert_eq!(session.user_id, user_id);

    let (found, user) = repo.find_with_user("digest").await.unwrap().unwrap();
    assert_eq!(found.id, session.id);
    assert_eq!(user.email, "s@example.com");
}

#[sqlx::test]
async fn test_unknown_digest(pool: PgPool) {
    let repo = PgSessionRepository::new(Arc::new(pool));

    assert!(repo.find_with_user("missing").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_expire_makes_session_expired(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "s@example.com", "candidate").await;
    let repo = PgSessionRepository::new(Arc::new(pool));
    repo.create(user_id, "digest", Utc::now() + Duration::hours(1))
        .await
        .unwrap();

    assert!(repo.expire("digest").await.unwrap());
    // Already expired: nothing left to expire.
    assert!(!repo.expire("digest").await.unwrap());

    let (session, _) = repo.find_with_user("digest").await.unwrap().unwrap();
    assert!(session.is_expired());
}

#[sqlx::test]
async fn test_expire_all_for_user(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "s@example.com", "candidate").await;
    let other_id = common::create_test_user(&pool, "o@example.com", "candidate").await;
    let repo = PgSessionRepository::new(Arc::new(pool));
    let later = Utc::now() + Duration::hours(1);

    repo.create(user_id, "a", later).await.unwrap();
    repo.create(user_id, "b", later).await.unwrap();
    repo.create(other_id, "c", later).await.unwrap();

    assert_eq!(repo.expire_all_for_user(user_id).await.unwrap(), 2);

    let (other, _) = repo.find_with_user("c").await.unwrap().unwrap();
    assert!(!other.is_expired());
}

#[sqlx::test]
async fn test_expire_others_keeps_current_session(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "s@example.com", "candidate").await;
    let other_id = common::create_test_user(&pool, "o@example.com", "candidate").await;
    let repo = PgSessionRepository::new(Arc::new(pool));
    let later = Utc::now() + Duration::hours(1);

    repo.create(user_id, "current", later).await.unwrap();
    repo.create(user_id, "laptop", later).await.unwrap();
    repo.create(other_id, "foreign", later).await.unwrap();

    assert_eq!(
        repo.expire_others_for_user(user_id, "current").await.unwrap(),
        1
    );

    let (current, _) = repo.find_with_user("current").await.unwrap().unwrap();
    let (laptop, _) = repo.find_with_user("laptop").await.unwrap().unwrap();
    let (foreign, _) = repo.find_with_user("foreign").await.unwrap().unwrap();
    assert!(!current.is_expired());
    assert!(laptop.is_expired());
    assert!(!foreign.is_expired());
}

#[sqlx::test]
async fn test_purge_expired(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "s@example.com", "candidate").await;
    let repo = PgSessionRepository::new(Arc::new(pool));

    repo.create(user_id, "old", Utc::now() - Duration::hours(1))
        .await
        .unwrap();
    repo.create(user_id, "live", Utc::now() + Duration::hours(1))
        .await
        .unwrap();

    assert_eq!(repo.purge_expired().await.unwrap(), 1);
    assert!(repo.find_with_user("old").await.unwrap().is_none());
    assert!(repo.find_with_user("live").await.unwrap().is_some());
}
