//! Encoder and decoder for the "Quite OK Image" format: a 14-byte header,
//! a stream of six tagged per-pixel operations sharing a rolling previous
//! pixel and a 64-slot color cache, and an 8-byte end marker.
//!
//! [`encode_file`]/[`decode_file`] work on flat pixel slices;
//! [`encode_pixmap`]/[`decode_pixmap`] bridge to [`pixmap::Pixmap`] grids.
//! Both directions are pure functions of their input: state lives in a
//! per-call [`State`], so independent images can be processed on as many
//! threads as you like.

pub use crate::{
    decode::decode_data,
    encode::encode_data,
    error::Error,
    file::{decode_file, decode_pixmap, encode_file, encode_pixmap, END_MARKER},
    header::{Channels, ColorSpace, Header, HEADER_LEN, MAGIC},
    op::{Op, RUN_MAX},
    state::{hash, State},
};

pub use pixmap::{Pixmap, Rgba};

mod decode;
mod encode;
mod error;
mod file;
mod header;
mod op;
mod state;
