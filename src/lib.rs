//! Library crate for user-roster.
//!
//! This crate exposes the building blocks of the TUI:
//! - User records and the `UserApi` port with its HTTP adapter (`api`)
//! - The shared banner store (`banner`)
//! - The repository client that runs CRUD calls and reports outcomes (`repository`)
//! - View-models that turn input into intents (`views`)
//! - Application state and event loop (`app`)
//! - UI rendering (`ui`)
//! - Configuration and error types (`config`, `error`)
//!
//! It is used by the `user-roster` binary and by tests.
#![doc = include_str!("../README.md")]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod api;
pub mod app;
pub mod banner;
pub mod config;
pub mod error;
pub mod repository;
pub mod ui;
pub mod views;

// Re-export commonly used items at the crate root for convenience
pub use api::{NewUser, User, UserApi, UserId};
pub use banner::{Banner, BannerStore, Severity};
pub use error::{ApiError, ApiResult};
pub use repository::UserRepository;
