//! Core types and trait definitions for the birthday bot.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! The store, the chat platform client and the webhook server all depend on
//! it; it depends on nothing proprietary.

pub mod chat;
pub mod command;
pub mod date;
pub mod error;
pub mod store;
pub mod subscription;
pub mod user;

pub use error::{Error, Result};
