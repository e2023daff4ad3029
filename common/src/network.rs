pub mod address;
pub mod range;

pub use address::{Address, AddressFamily, Octets, is_valid_address, trim_control};
pub use range::{RangeDescriptor, is_valid_range};
