//! View-state containers for the dealflow workflow admin.
//!
//! Each container owns its slice of state, mutates it synchronously from a
//! user-interaction callback and reports the outcome through a [`Notifier`].
//! Presentation layers bind to the getters and call the operations; nothing
//! here renders.
//!
//! [`Notifier`]: notifications::Notifier

pub mod board;
pub mod crud;
pub mod expansion;
pub mod filter;
pub mod format;
pub mod notifications;
pub mod selection;
pub mod tree;

use df_core::entity::DomainError;
use df_core::repository::StoreError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("{kind} not found: `{id}`")]
    NotFound { kind: &'static str, id: String },
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}
