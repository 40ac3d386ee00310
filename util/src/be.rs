use bytemuck::{Pod, Zeroable};

/// A `u32` held in big-endian byte order, the way wire formats store it.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct Be32(u32);

impl std::fmt::Debug for Be32 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} (be)", self.get())
    }
}

impl Be32 {
    pub fn get(self) -> u32 {
        u32::from_be(self.0)
    }
}

impl From<u32> for Be32 {
    fn from(x: u32) -> Self {
        Be32(x.to_be())
    }
}

/// Big-endian wire bytes of `x`.
pub fn pack_be32(x: u32) -> [u8; 4] {
    bytemuck::cast(Be32::from(x))
}

/// Read a big-endian `u32` from exactly four bytes.
pub fn unpack_be32(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 4 {return None}
    Some(bytemuck::pod_read_unaligned::<Be32>(bytes).get())
}
