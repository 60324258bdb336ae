//! sea-orm entities owned by the inventory service.

pub mod groups;
pub mod labels;
pub mod locations;
