//! Postgres repository integration tests
//!
//! These tests need a live database with the `users` table (unique
//! constraints on `email` and `username`). Run them explicitly:
//!
//! ```text
//! DATABASE_URL=postgresql://... cargo test -- --ignored
//! ```

use sqlx::PgPool;
use uuid::Uuid;

use sparkx_pos_api::auth::password::hash_password;
use sparkx_pos_api::domain::repositories::{User, UserRepository};
use sparkx_pos_api::domain::user::{Email, Role};
use sparkx_pos_api::infrastructure::repositories::PostgresUserRepository;

async fn setup_test_db() -> PgPool {
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

    PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test database")
}

fn test_user(tag: &str) -> User {
    User {
        id: Uuid::new_v4(),
        name: format!("Repo Test {}", tag),
        email: Email::new(format!("repo-{}@test.com", tag)).unwrap(),
        username: format!("repo_{}", tag),
        password_hash: hash_password("repo-test-password").unwrap(),
        role: Role::SalesOperator,
    }
}

async fn cleanup_user(pool: &PgPool, id: Uuid) {
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .expect("Failed to cleanup test user");
}

#[tokio::test]
#[ignore = "requires a live Postgres via DATABASE_URL"]
async fn create_and_find_round_trip() {
    let pool = setup_test_db().await;
    let repo = PostgresUserRepository::new(pool.clone());

    let user = test_user("roundtrip");
    let created = repo.create(user.clone()).await.expect("create succeeds");
    assert_eq!(created.id, user.id);

    let by_email = repo
        .find_by_email(&user.email)
        .await
        .expect("lookup succeeds")
        .expect("user found by email");
    assert_eq!(by_email.id, user.id);
    assert_eq!(by_email.username, user.username);
    assert_eq!(by_email.role, Role::SalesOperator);

    let by_username = repo
        .find_by_username(&user.username)
        .await
        .expect("lookup succeeds")
        .expect("user found by username");
    assert_eq!(by_username.id, user.id);
    assert_eq!(by_username.password_hash, user.password_hash);

    cleanup_user(&pool, user.id).await;
}

#[tokio::test]
#[ignore = "requires a live Postgres via DATABASE_URL"]
async fn find_all_includes_created_user() {
    let pool = setup_test_db().await;
    let repo = PostgresUserRepository::new(pool.clone());

    let user = test_user("findall");
    repo.create(user.clone()).await.expect("create succeeds");

    let all = repo.find_all().await.expect("list succeeds");
    assert!(all.iter().any(|u| u.id == user.id));

    cleanup_user(&pool, user.id).await;
}

#[tokio::test]
#[ignore = "requires a live Postgres via DATABASE_URL"]
async fn unique_constraints_reject_duplicates() {
    let pool = setup_test_db().await;
    let repo = PostgresUserRepository::new(pool.clone());

    let user = test_user("unique");
    repo.create(user.clone()).await.expect("create succeeds");

    // Same email, fresh id and username: the store must refuse the write.
    let mut same_email = test_user("unique_other");
    same_email.email = user.email.clone();
    let err = repo
        .create(same_email)
        .await
        .expect_err("duplicate email rejected");
    assert!(err.contains("duplicate") || err.contains("unique"), "{}", err);

    // Same username, fresh email.
    let mut same_username = test_user("unique_other2");
    same_username.username = user.username.clone();
    let err = repo
        .create(same_username)
        .await
        .expect_err("duplicate username rejected");
    assert!(err.contains("duplicate") || err.contains("unique"), "{}", err);

    cleanup_user(&pool, user.id).await;
}
