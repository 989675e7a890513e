//! Core business logic - framework-agnostic operations over the datastore.
//!
//! Handlers in [`crate::api`] translate HTTP requests into calls to these functions;
//! nothing in here knows about HTTP.

/// Admin id check for mutating routes
pub mod admin;
/// Case catalog listing and bulk upsert
pub mod case;
/// Standalone item listing and catalog seeding
pub mod item;
/// Aggregate user statistics
pub mod stats;
/// User touch, save, balance and listing
pub mod user;

pub use admin::AdminPolicy;
