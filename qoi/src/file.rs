use {
    crate::{
        decode::decode_data,
        encode::encode_data,
        error::Error,
        header::{Channels, ColorSpace, Header, HEADER_LEN},
    },
    pixmap::{Pixmap, Rgba},
};

/// Eight-byte sentinel closing every qoi file.
pub const END_MARKER: [u8; 8] = [0, 0, 0, 0, 0, 0, 0, 1];

/// Assemble a complete file: header, tagged pixel stream, end marker.
/// `pixels` is the image in row-major scan order and must match the header
/// dimensions.
pub fn encode_file(header: &Header, pixels: &[Rgba]) -> Result<Vec<u8>, Error> {
    debug_assert_eq!(pixels.len(), header.pixel_count());

    let body = encode_data(pixels)?;
    let bytes = util::concat([&header.to_bytes()[..], &body[..], &END_MARKER[..]]);
    log::debug!(target: "qoi", "encoded {}x{}: {} pixels -> {} bytes",
        header.wide, header.high, pixels.len(), bytes.len());
    Ok(bytes)
}

/// Split a file into header, body and end marker, validate the frame, and
/// decode the body.
pub fn decode_file(bytes: &[u8]) -> Result<(Header, Vec<Rgba>), Error> {
    let body_len = bytes.len()
        .checked_sub(HEADER_LEN + END_MARKER.len())
        .ok_or(Error::MalformedHeader("input too short for a qoi file"))?;
    let [head, body, marker] = util::partition(bytes, [HEADER_LEN, body_len, END_MARKER.len()])
        .ok_or(Error::MalformedHeader("input too short for a qoi file"))?;

    let header = Header::from_bytes(head)?;
    if marker != END_MARKER {
        return Err(Error::CorruptEndMarker);
    }

    let pixels = decode_data(body, header.wide, header.high)?;
    log::debug!(target: "qoi", "decoded {} bytes -> {}x{}",
        bytes.len(), header.wide, header.high);
    Ok((header, pixels))
}

/// Encode a pixel grid under the given source metadata.
pub fn encode_pixmap(image: &Pixmap, channels: Channels, color_space: ColorSpace)
    -> Result<Vec<u8>, Error>
{
    let header = Header {
        wide: image.wide(),
        high: image.high(),
        channels,
        color_space,
    };
    encode_file(&header, image.pixels())
}

/// Decode a file into a pixel grid plus its header metadata.
pub fn decode_pixmap(bytes: &[u8]) -> Result<(Header, Pixmap), Error> {
    let (header, pixels) = decode_file(bytes)?;
    let image = Pixmap::from_pixels(pixels, header.wide, header.high)
        .ok_or(Error::MalformedHeader("pixel count does not match dimensions"))?;
    Ok((header, image))
}
