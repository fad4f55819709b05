pub mod clients;
pub mod collections;
pub mod conventions;
pub mod not_found;
pub mod videos;
