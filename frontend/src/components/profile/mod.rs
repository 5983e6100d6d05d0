pub mod farms;
