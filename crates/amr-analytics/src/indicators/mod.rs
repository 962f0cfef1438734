pub mod community;
pub mod usage;
