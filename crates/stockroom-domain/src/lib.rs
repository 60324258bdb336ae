//! Domain types shared across all Stockroom services.
//!
//! Pure value types with no framework dependencies. Storage code maps them
//! to and from its own column representations.

pub mod defaults;
pub mod role;
