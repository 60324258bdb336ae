//! sea-orm entities owned by the auth service.

pub mod auth_roles;
pub mod auth_tokens;
pub mod users;
