pub mod network;
pub mod soap;
