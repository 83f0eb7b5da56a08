mod common;

use job_board::domain::repositories::FavoriteRepository;
use job_board::error::AppError;
use job_board::infrastructure::persistence::PgFavoriteRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_add_list_remove(pool: PgPool) {
    let employer = common::create_test_user(&pool, "hr@example.com", "employer").await;
    let user = common::create_test_user(&pool, "dev@example.com", "candidate").await;
    let first = common::create_test_vacancy(&pool, employer, "First").await;
    let second = common::create_test_vacancy(&pool, employer, "Second").await;
    let repo = PgFavoriteRepository::new(Arc::new(pool));

    repo.add(user, first).await.unwrap();
    repo.add(user, second).await.unwrap();

    let list = repo.list(user).await.unwrap();
    let ids: Vec<i64> = list.iter().map(|f| f.vacancy.id).collect();
    assert_eq!(ids, vec![second, first]);
    assert_eq!(list[0].vacancy.employer_name, "Name of hr@example.com");

    assert!(repo.remove(user, first).await.unwrap());
    assert!(!repo.remove(user, first).await.unwrap());
    assert_eq!(repo.list(user).await.unwrap().len(), 1);
}

#[sqlx::test]
async fn test_duplicate_favorite_is_conflict(pool: PgPool) {
    let employer = common::create_test_user(&pool, "hr@example.com", "employer").await;
    let user = common::create_test_user(&pool, "dev@example.com", "candidate").await;
    let vacancy = common::create_test_vacancy(&pool, employer, "Job").await;
    let repo = PgFavoriteRepository::new(Arc::new(pool));

    repo.add(user, vacancy).await.unwrap();
    let err = repo.add(user, vacancy).await.unwrap_err();

    assert!(matches!(err, AppError::Conflict { .. }));
}

#[sqlx::test]
async fn test_favorites_are_per_user(pool: PgPool) {
    let employer = common::create_test_user(&pool, "hr@example.com", "employer").await;
    let alice = common::create_test_user(&pool, "alice@example.com", "candidate").await;
    let bob = common::create_test_user(&pool, "bob@example.com", "candidate").await;
    let vacancy = common::create_test_vacancy(&pool, employer, "Job").await;
    let repo = PgFavoriteRepository::new(Arc::new(pool));

    repo.add(alice, vacancy).await.unwrap();

    assert!(repo.list(bob).await.unwrap().is_empty());
    assert!(!repo.remove(bob, vacancy).await.unwrap());
}
