pub mod client;
pub mod oid;

pub use client::{RawValue, SnmpClient, SnmpVersion};
pub use oid::parse_oid;
