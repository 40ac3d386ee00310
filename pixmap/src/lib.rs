//! Decoded-image interchange types: a 4-channel `Rgba` pixel and a
//! contiguous row-major `Pixmap` grid.

use bytemuck::{Pod, Zeroable};

/// A 4-channel pixel. Channel bytes wrap modulo 256 under the codec's
/// delta arithmetic.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba([0x00, 0x00, 0x00, 0x00]);
    pub const BLACK:       Rgba = Rgba([0x00, 0x00, 0x00, 0xff]);
    pub const WHITE:       Rgba = Rgba([0xff, 0xff, 0xff, 0xff]);

    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Rgba {
        Rgba([r, g, b, a])
    }

    pub fn alpha(self) -> u8 {
        self.0[3]
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(rgba: [u8; 4]) -> Self { Rgba(rgba) }
}

/// Contiguous row-major pixel grid. Every pixel carries 4 channels no
/// matter how many the source had.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pixmap {
    pixels: Vec<Rgba>,
    wide: u32,
    high: u32,
}

impl Pixmap {
    pub fn new(wide: u32, high: u32, fill: Rgba) -> Self {
        let len = wide as usize * high as usize;
        Pixmap{pixels: vec![fill; len], wide, high}
    }

    pub fn new_from_fn(wide: u32, high: u32, mut f: impl FnMut([u32; 2]) -> Rgba) -> Self {
        let mut pm = Self::new(wide, high, Rgba::TRANSPARENT);
        for (x, y) in iter_2d(0..wide, 0..high) {
            pm.put([x, y], f([x, y]));
        }
        pm
    }

    pub fn from_pixels(pixels: Vec<Rgba>, wide: u32, high: u32) -> Option<Self> {
        (pixels.len() == wide as usize * high as usize)
            .then(|| Pixmap{pixels, wide, high})
    }

    /// Build from raw interleaved channel bytes, 3 or 4 channels per pixel.
    /// A 3-channel source gains an opaque alpha.
    pub fn from_channel_bytes(bytes: &[u8], wide: u32, high: u32, channels: usize) -> Option<Self> {
        let count = wide as usize * high as usize;
        if !(channels == 3 || channels == 4) {return None}
        if bytes.len() != count.checked_mul(channels)? {return None}

        let pixels = bytes.chunks_exact(channels)
            .map(|px| Rgba([px[0], px[1], px[2], px.get(3).copied().unwrap_or(0xff)]))
            .collect();
        Self::from_pixels(pixels, wide, high)
    }

    pub fn wide(&self) -> u32 { self.wide }
    pub fn high(&self) -> u32 { self.high }

    fn index(&self, [x, y]: [u32; 2]) -> Option<usize> {
        (x < self.wide && y < self.high)
            .then(|| self.wide as usize * y as usize + x as usize)
    }

    pub fn get(&self, at: impl Into<[u32; 2]>) -> Option<Rgba> {
        let index = self.index(at.into())?;
        Some(self.pixels[index])
    }

    pub fn put(&mut self, at: impl Into<[u32; 2]>, p: impl Into<Rgba>) {
        let index = self.index(at.into()).unwrap();
        self.pixels[index] = p.into();
    }

    /// The grid in row-major scan order.
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<Rgba> {
        self.pixels
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Rgba]> {
        self.pixels.chunks_exact(self.wide.max(1) as usize)
    }
}

pub fn iter_2d<Xs, Ys> (xs: Xs, ys: Ys)
    -> impl Iterator<Item = (Xs::Item, Ys::Item)>
where
    Xs: Iterator + Clone,
    Xs::Item: 'static,
    Ys: Iterator,
    Ys::Item: Clone + 'static,
{
    ys.flat_map(move |y| xs.clone().map(move |x| (x, y.clone())))
}
