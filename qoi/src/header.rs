use {
    crate::error::Error,
    util::{pack_be32, unpack_be32},
};

pub const MAGIC: [u8; 4] = *b"qoif";
pub const HEADER_LEN: usize = 14;

/// Channel count of the source image. This is wire metadata only: decoded
/// pixels always carry 4 channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Channels {
    Rgb  = 3,
    Rgba = 4,
}

impl Channels {
    pub fn try_new(raw: u8) -> Option<Channels> {
        match raw {
            3 => Some(Channels::Rgb),
            4 => Some(Channels::Rgba),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ColorSpace {
    /// sRGB color channels with linear alpha.
    Srgb   = 0,
    /// All channels linear.
    Linear = 1,
}

impl ColorSpace {
    pub fn try_new(raw: u8) -> Option<ColorSpace> {
        match raw {
            0 => Some(ColorSpace::Srgb),
            1 => Some(ColorSpace::Linear),
            _ => None,
        }
    }
}

/// The 14-byte file header: magic, then height and width as big-endian
/// 32-bit words, then the channel count and color space bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub wide: u32,
    pub high: u32,
    pub channels: Channels,
    pub color_space: ColorSpace,
}

impl Header {
    /// Build a header from the raw metadata bytes an image source hands
    /// over alongside its pixels.
    pub fn new(wide: u32, high: u32, channels: u8, color_space: u8) -> Result<Header, Error> {
        let (Some(channels), Some(color_space)) =
            (Channels::try_new(channels), ColorSpace::try_new(color_space))
        else {
            return Err(Error::InvalidHeaderInput{channels, color_space});
        };
        Ok(Header{wide, high, channels, color_space})
    }

    pub fn pixel_count(&self) -> usize {
        self.wide as usize * self.high as usize
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut buf = [0u8; HEADER_LEN];
        buf[ 0.. 4].copy_from_slice(&MAGIC);
        buf[ 4.. 8].copy_from_slice(&pack_be32(self.high));
        buf[ 8..12].copy_from_slice(&pack_be32(self.wide));
        buf[12] = self.channels as u8;
        buf[13] = self.color_space as u8;
        buf
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Header, Error> {
        if bytes.len() != HEADER_LEN {
            return Err(Error::MalformedHeader("wrong length"));
        }
        if bytes[0..4] != MAGIC {
            return Err(Error::MalformedHeader("wrong magic (not 'qoif')"));
        }
        let high = unpack_be32(&bytes[4.. 8])
            .ok_or(Error::MalformedHeader("wrong length"))?;
        let wide = unpack_be32(&bytes[8..12])
            .ok_or(Error::MalformedHeader("wrong length"))?;
        let channels = Channels::try_new(bytes[12])
            .ok_or(Error::MalformedHeader("bad channel count"))?;
        let color_space = ColorSpace::try_new(bytes[13])
            .ok_or(Error::MalformedHeader("bad color space"))?;
        Ok(Header{wide, high, channels, color_space})
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let header = Header::new(640, 480, 4, 0).unwrap();
        let bytes = header.to_bytes();
        assert_eq!(Header::from_bytes(&bytes), Ok(header));
    }

    #[test]
    fn wire_layout_height_before_width() {
        let header = Header::new(2, 1, 3, 1).unwrap();
        assert_eq!(header.to_bytes(), [
            b'q', b'o', b'i', b'f',
            0, 0, 0, 1,
            0, 0, 0, 2,
            3, 1,
        ]);
    }

    #[test]
    fn rejects_bad_metadata_on_encode() {
        assert_eq!(
            Header::new(1, 1, 5, 0),
            Err(Error::InvalidHeaderInput{channels: 5, color_space: 0}),
        );
        assert_eq!(
            Header::new(1, 1, 3, 2),
            Err(Error::InvalidHeaderInput{channels: 3, color_space: 2}),
        );
    }

    #[test]
    fn rejects_malformed_bytes_on_decode() {
        let good = Header::new(1, 1, 4, 0).unwrap().to_bytes();

        let mut bad_magic = good;
        bad_magic[0] = b'Q';
        assert!(matches!(Header::from_bytes(&bad_magic), Err(Error::MalformedHeader(_))));

        let mut bad_channels = good;
        bad_channels[12] = 2;
        assert!(matches!(Header::from_bytes(&bad_channels), Err(Error::MalformedHeader(_))));

        let mut bad_space = good;
        bad_space[13] = 9;
        assert!(matches!(Header::from_bytes(&bad_space), Err(Error::MalformedHeader(_))));

        assert!(matches!(Header::from_bytes(&good[..13]), Err(Error::MalformedHeader(_))));
    }
}
