//! Domains module containing business logic organized by bounded contexts.
//!
//! - **store**: access to the backing document store
//! - **tools**: the tool catalog and dispatcher built on top of the store

pub mod store;
pub mod tools;
