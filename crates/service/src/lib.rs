//! Service layer providing the glossary operations on top of `models`.
//! - Owns the request-level error taxonomy (validation, not found, conflict).
//! - Scopes every write to its own transaction, rolled back on failure.

pub mod errors;
pub mod pagination;
pub mod term_service;
#[cfg(test)]
pub mod test_support;
