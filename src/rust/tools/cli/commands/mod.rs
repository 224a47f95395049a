pub mod deps;
pub mod ips;
