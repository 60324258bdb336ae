pub mod revoke;
pub mod role;
pub mod token;
