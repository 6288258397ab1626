//! # Blog Core
//!
//! The domain layer of the blog service.
//! This crate contains the post model, validation and pagination rules, and
//! the repository port - pure business logic with zero infrastructure
//! dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::DomainError;
