//! # Postbook Core
//!
//! The domain layer of Postbook: the `Post` entity, its invariants, the
//! storage port and the record store service built on top of it.
//! This crate has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use domain::{NewPost, Post, PostId};
pub use error::{DomainError, RepoError};
pub use service::PostService;
