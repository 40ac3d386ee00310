//! Byte-level primitives shared by the codec crates. Nothing in here knows
//! anything about image formats.

mod be;
pub use be::{pack_be32, unpack_be32, Be32};

mod bytes;
pub use bytes::{concat, extract, partition};
