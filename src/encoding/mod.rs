pub mod bits;
pub mod checksum;
pub mod tlv;

pub use bits::{from_groups, to_groups};
pub use tlv::{TlvField, TlvSequence, TlvType};
