pub mod capability;
pub mod condition;
