//! Error types for the floor order core
//!
//! The taxonomy is deliberately narrow: the only failure the ticket board
//! surfaces is a duplicate ticket id, which points at a broken id-generation
//! contract upstream. Every other invalid operation is a silent no-op whose
//! effect (or lack of it) is reported through the return value.

use thiserror::Error;

/// Ticket board errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("duplicate ticket id: {0}")]
    DuplicateTicketId(String),
}

pub type BoardResult<T> = Result<T, BoardError>;

/// Errors from the external data-source boundary
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    #[error("data source unavailable: {0}")]
    Unavailable(String),
}

pub type LoadResult<T> = Result<T, LoadError>;
