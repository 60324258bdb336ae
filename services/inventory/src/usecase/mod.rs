pub mod group;
pub mod seed;
