//! SparkX POS user and authentication API
//!
//! Exposes user registration, user listing, login, and logout over HTTP.
//! Password hashing, token signing, and query execution are delegated to
//! bcrypt, jsonwebtoken, and sqlx respectively.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
