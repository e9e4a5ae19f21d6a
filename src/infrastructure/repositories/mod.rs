// Repository implementations (data access layer)

pub mod postgres_user_repository;

pub use postgres_user_repository::PostgresUserRepository;
