use pixmap::Rgba;

pub const CACHE_SLOTS: usize = 64;

/// Cache slot for `p`: `(r*3 + g*5 + b*7 + a*11) mod 64` over unsigned
/// wrapping bytes. Collisions overwrite, last writer wins.
pub fn hash(p: Rgba) -> u8 {
    let [r, g, b, a] = p.0;
    let r = r.wrapping_mul(3);
    let g = g.wrapping_mul(5);
    let b = b.wrapping_mul(7);
    let a = a.wrapping_mul(11);
    0x3f & r.wrapping_add(g).wrapping_add(b).wrapping_add(a)
}

/// Rolling codec state: the previous pixel, the 64-slot color cache, and a
/// pending run length. Encoder and decoder each start from a fresh copy and
/// mutate it in lock-step; nothing survives across calls.
pub struct State {
    pub(crate) prev: Rgba,
    pub(crate) cache: [Rgba; CACHE_SLOTS],
    pub(crate) written: u64,
    pub(crate) run: usize,
}

impl State {
    pub fn new() -> Self {
        State {
            prev: Rgba::BLACK,
            cache: [Rgba::TRANSPARENT; CACHE_SLOTS],
            written: 0,
            run: 0,
        }
    }

    pub fn lookup(&self, slot: u8) -> Rgba {
        self.cache[(slot & 0x3f) as usize]
    }

    /// Write `p` into its own slot. The slot index is always `hash(p)`, so
    /// the cache invariant holds by construction.
    pub fn store(&mut self, p: Rgba) {
        let slot = hash(p);
        self.cache[slot as usize] = p;
        self.written |= 1 << slot;
    }

    /// The slot that would replay `p`, if `p` has been stored since the
    /// start of the pass. A virgin slot never matches, even though it
    /// starts out holding the zero pixel `p` might equal.
    pub fn cached(&self, p: Rgba) -> Option<u8> {
        let slot = hash(p);
        (self.written & 1 << slot != 0 && self.cache[slot as usize] == p)
            .then_some(slot)
    }
}

impl Default for State {
    fn default() -> Self { Self::new() }
}
