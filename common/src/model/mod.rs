pub mod farm;
pub mod identity;
