use {
    crate::{
        error::Error,
        op::{Op, RUN_MAX},
        state::State,
    },
    pixmap::Rgba,
};

impl State {
    /// Encode a batch of pixels. A run left pending at the end of the batch
    /// stays in the state; call [`State::encode_flush`] after the last
    /// batch of the image.
    pub fn encode_some(&mut self, out: &mut Vec<u8>, pixels: &[Rgba]) -> Result<(), Error> {
        for &cur in pixels {
            if cur == self.prev {
                self.run += 1;
                if self.run == RUN_MAX as usize {
                    self.encode_flush(out)?;
                }
                continue;
            }
            self.encode_flush(out)?;

            let op = Op::pick(cur, self.prev, self.cached(cur));
            op.emit(out)?;
            // INDEX leaves the slot alone (it already holds `cur`); every
            // other emission refreshes it
            if !matches!(op, Op::Index(_)) {
                self.store(cur);
            }
            self.prev = cur;
        }
        Ok(())
    }

    /// Emit the pending run, if any.
    pub fn encode_flush(&mut self, out: &mut Vec<u8>) -> Result<(), Error> {
        if self.run != 0 {
            Op::Run(self.run as u8).emit(out)?;
            self.run = 0;
        }
        Ok(())
    }
}

/// Encode a whole image worth of pixels into a fresh tagged byte stream,
/// without header or end marker.
pub fn encode_data(pixels: &[Rgba]) -> Result<Vec<u8>, Error> {
    let mut out = Vec::with_capacity(pixels.len());
    let mut state = State::new();
    state.encode_some(&mut out, pixels)?;
    state.encode_flush(&mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_are_bounded_at_62() {
        // 70 pixels equal to the seed split into RUN(62) + RUN(8), never
        // one oversized run
        let pixels = vec![Rgba([0, 0, 0, 255]); 70];
        assert_eq!(encode_data(&pixels), Ok(vec![0xc0 | 61, 0xc0 | 7]));

        // same split when the run follows an ordinary pixel
        let mut pixels = vec![Rgba([5, 5, 5, 255]); 71];
        pixels[0] = Rgba([9, 5, 5, 255]);
        let stream = encode_data(&pixels).unwrap();
        let tail = &stream[stream.len() - 2..];
        assert_eq!(tail, [0xc0 | 61, 0xc0 | 7]);
    }

    #[test]
    fn leading_run_spans_the_initial_previous_pixel() {
        // the first pixel may equal the format's seed pixel
        let pixels = vec![Rgba([0, 0, 0, 255]); 2];
        assert_eq!(encode_data(&pixels), Ok(vec![0xc0 | 1]));
    }

    #[test]
    fn repeated_color_comes_back_through_the_cache() {
        let a = Rgba([90, 13, 8, 255]);
        let b = Rgba([13, 200, 90, 255]);
        let stream = encode_data(&[a, b, a]).unwrap();

        // a and b are raw RGB ops; the second a is a 1-byte INDEX
        assert_eq!(stream.len(), 4 + 4 + 1);
        assert_eq!(stream[8], crate::state::hash(a));
    }

    #[test]
    fn alpha_change_forces_rgba() {
        // a 1x1 transparent image: deltas from the seed are zero on the
        // color channels but alpha differs, and the virgin cache slot that
        // happens to hold the zero pixel must not shortcut it to INDEX
        let stream = encode_data(&[Rgba([0, 0, 0, 0])]).unwrap();
        assert_eq!(stream, [0xff, 0, 0, 0, 0]);
    }

    #[test]
    fn transparent_pixel_indexes_once_stored() {
        let t = Rgba::TRANSPARENT;
        let x = Rgba([70, 80, 90, 255]);
        let stream = encode_data(&[t, x, t]).unwrap();

        // RGBA, RGBA (alpha flips back), then a bare INDEX of slot 0
        assert_eq!(stream.len(), 5 + 5 + 1);
        assert_eq!(stream[10], 0x00);
    }

    #[test]
    fn flush_is_idempotent() {
        let mut out = Vec::new();
        let mut state = State::new();
        state.encode_some(&mut out, &[Rgba::BLACK; 3]).unwrap();
        state.encode_flush(&mut out).unwrap();
        state.encode_flush(&mut out).unwrap();
        assert_eq!(out, [0xc0 | 2]);
    }
}
