pub mod profile_farms;
