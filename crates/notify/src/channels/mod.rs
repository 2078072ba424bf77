//! Notification channel implementations.

pub mod teams;

pub use teams::TeamsChannel;
