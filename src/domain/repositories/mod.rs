// Repository interfaces for the domain aggregates

pub mod user_repository;

pub use user_repository::{User, UserRepository};
