use {
    crate::{error::Error, op::Op, state::State},
    pixmap::Rgba,
};

impl State {
    /// Decode operations into `output` until it is full, returning the
    /// unconsumed input. A run that overruns `output` stays pending in the
    /// state, so an image can be decoded in several batches.
    pub fn decode_some<'b>(&mut self, output: &mut [Rgba], bytes: &'b [u8])
        -> Result<&'b [u8], Error>
    {
        let mut cursor_in = bytes;
        let mut cursor_out = output;

        while !cursor_out.is_empty() {
            if self.run != 0 {
                let n = self.run.min(cursor_out.len());
                let (filled, rest) = std::mem::take(&mut cursor_out).split_at_mut(n);
                filled.fill(self.prev);
                cursor_out = rest;
                self.run -= n;
                // each replayed copy lands in the same slot with the same
                // value, so one store covers the whole chunk
                self.store(self.prev);
                continue;
            }

            let (op, rest) = Op::parse(cursor_in).ok_or(Error::TruncatedStream)?;
            cursor_in = rest;

            let prev = self.prev;
            let pixel = match op {
                Op::Run(len) => {
                    self.run = len as usize;
                    continue;
                }
                Op::Index(slot) => self.lookup(slot),
                Op::Diff(dr2, dg2, db2) => {
                    let undo = |c: u8, biased: u8| c.wrapping_add(biased).wrapping_sub(2);
                    Rgba([
                        undo(prev.0[0], dr2),
                        undo(prev.0[1], dg2),
                        undo(prev.0[2], db2),
                        prev.0[3],
                    ])
                }
                Op::Luma(dg32, drg8, dbg8) => {
                    let dg = dg32.wrapping_sub(32);
                    let dr = dg.wrapping_add(drg8).wrapping_sub(8);
                    let db = dg.wrapping_add(dbg8).wrapping_sub(8);
                    Rgba([
                        prev.0[0].wrapping_add(dr),
                        prev.0[1].wrapping_add(dg),
                        prev.0[2].wrapping_add(db),
                        prev.0[3],
                    ])
                }
                Op::Rgb([r, g, b]) => Rgba([r, g, b, prev.0[3]]),
                Op::Rgba(px) => Rgba(px),
            };

            let (pixel_out, rest) = std::mem::take(&mut cursor_out)
                .split_first_mut()
                .unwrap();
            *pixel_out = pixel;
            cursor_out = rest;

            self.prev = pixel;
            self.store(pixel);
        }

        Ok(cursor_in)
    }
}

/// Decode a whole tagged pixel stream (no header, no end marker) into
/// `wide * high` pixels.
pub fn decode_data(bytes: &[u8], wide: u32, high: u32) -> Result<Vec<Rgba>, Error> {
    let mut pixels = vec![Rgba::TRANSPARENT; wide as usize * high as usize];
    let mut state = State::new();
    let rest = state.decode_some(&mut pixels, bytes)?;
    if !rest.is_empty() || state.run != 0 {
        return Err(Error::TrailingData);
    }
    Ok(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_each_operation() {
        let stream = [
            0xff, 27, 146, 55, 203,  // raw pixel
            0xc0 | 1,                // run of 2
            0xfe, 27, 146, 60,       // raw color, alpha carried from (..203)
            0x40 | 0x3 << 4 | 0x2 << 2 | 0x1,  // diff (+1, 0, -1)
            0x80 | 40, 0x2 << 4 | 0xd,         // luma dg=8, dr=2, db=13
            0x25,                    // index: slot 37 still holds the first pixel
        ];
        assert_eq!(crate::state::hash(Rgba([27, 146, 55, 203])), 0x25);
        let pixels = decode_data(&stream, 7, 1).unwrap();
        assert_eq!(pixels[0], Rgba([27, 146, 55, 203]));
        assert_eq!(pixels[1], Rgba([27, 146, 55, 203]));
        assert_eq!(pixels[2], Rgba([27, 146, 55, 203]));
        assert_eq!(pixels[3], Rgba([27, 146, 60, 203]));
        assert_eq!(pixels[4], Rgba([28, 146, 59, 203]));
        assert_eq!(pixels[5], Rgba([30, 154, 72, 203]));
        assert_eq!(pixels[6], Rgba([27, 146, 55, 203]));
    }

    #[test]
    fn truncated_stream_is_reported() {
        // one raw pixel, then nothing, for a 2-pixel image
        let stream = [0xff, 1, 2, 3, 4];
        assert_eq!(decode_data(&stream, 2, 1), Err(Error::TruncatedStream));

        // an operation cut in half
        assert_eq!(decode_data(&[0xfe, 9], 1, 1), Err(Error::TruncatedStream));
        assert_eq!(decode_data(&[], 1, 1), Err(Error::TruncatedStream));
    }

    #[test]
    fn trailing_data_is_reported() {
        // a full image followed by one more operation
        let stream = [0xff, 1, 2, 3, 4, 0xc0];
        assert_eq!(decode_data(&stream, 1, 1), Err(Error::TrailingData));

        // a run reaching past the last pixel
        let stream = [0xff, 1, 2, 3, 4, 0xc0 | 5];
        assert_eq!(decode_data(&stream, 1, 2), Err(Error::TrailingData));
    }

    #[test]
    fn batch_decode_carries_runs_across_calls() {
        let mut state = State::new();
        let stream = [0xff, 1, 2, 3, 4, 0xc0 | 4];
        let mut front = [Rgba::TRANSPARENT; 2];
        let mut back = [Rgba::TRANSPARENT; 4];

        let rest = state.decode_some(&mut front, &stream).unwrap();
        assert!(rest.is_empty());
        let rest = state.decode_some(&mut back, rest).unwrap();
        assert!(rest.is_empty());
        assert_eq!(state.run, 0);
        assert!(front.iter().chain(&back).all(|&p| p == Rgba([1, 2, 3, 4])));
    }

    #[test]
    fn empty_image_decodes_from_empty_body() {
        assert_eq!(decode_data(&[], 0, 3), Ok(vec![]));
        assert_eq!(decode_data(&[0x00], 0, 0), Err(Error::TrailingData));
    }
}
