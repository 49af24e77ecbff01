//! # rle_codec
//!
//! Run-length encoding for two kinds of token streams: the characters of a
//! piece of text, and the pixels of an RGBA raster.
//!
//! ## Features
//!
//! - **Text codec**: two wire formats, selected with [`Format`]
//! - **Array codec**: `count:token|` records for arbitrary string tokens
//! - **Images**: pixels become `"r,g,b,a"` tokens, wrapped in a JSON envelope
//!   that carries the raster dimensions
//!
//! ## Quick Start
//!
//! ### Encoding text
//!
//! ```rust
//! use rle_codec::{decode_text, encode_text, Format};
//!
//! let encoded = encode_text("aaabbbccd", Format::Plain);
//! assert_eq!(encoded, "3a3b2c1d");
//! assert_eq!(decode_text(&encoded, Format::Plain), "aaabbbccd");
//!
//! // Digits in the source need the annotated format
//! let encoded = encode_text("aa11bb", Format::Annotated);
//! assert_eq!(encoded, "2:a,2:1,2:b");
//! ```
//!
//! ### Encoding an image
//!
//! ```rust
//! use rle_codec::{decode_image, encode_image};
//!
//! // RGBA image data (4 bytes per pixel)
//! let rgba = vec![255u8, 255, 255, 255]; // 1x1 white pixel
//! let envelope = encode_image(&rgba, 1, 1)?;
//!
//! let image = decode_image(&envelope)?;
//! assert_eq!(image.pixels, rgba);
//! # Ok::<(), rle_codec::RleError>(())
//! ```

use thiserror::Error;

pub mod array;
pub mod envelope;
pub mod filter;
pub mod raster;
pub mod run;
pub mod text;

pub use array::{decode_tokens, decode_tokens_strict, encode_tokens};
pub use envelope::{unwrap, wrap, Envelope, ENVELOPE_TYPE};
pub use filter::{has_digits, prepare_text, strip_digits};
pub use raster::{decode_image, encode_image, pixels_to_tokens, tokens_to_pixels, RasterImage};
pub use run::{runs, Run};
pub use text::{decode_text, encode_text, Format};

/// Errors that can occur while encoding or decoding.
#[derive(Debug, Error)]
pub enum RleError {
    /// Invalid image dimensions (width or height is zero)
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Buffer size doesn't match expected size for dimensions
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Decoded pixel count doesn't match the declared dimensions
    #[error("dimension mismatch: expected {expected} pixels, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A pixel token is not four comma separated channel values
    #[error("invalid pixel data at token {index}: {token:?}")]
    InvalidChannel { index: usize, token: String },

    /// The envelope text could not be parsed
    #[error("invalid envelope: {0}")]
    InvalidEnvelope(String),

    /// A required envelope field is missing or empty
    #[error("envelope field `{0}` is missing or empty")]
    MissingField(&'static str),

    /// The envelope describes something other than a PNG raster
    #[error("unsupported envelope type: {0:?}")]
    UnsupportedFormat(String),

    /// A `count:token|` record is malformed (strict decoding only)
    #[error("malformed record: {0:?}")]
    MalformedRecord(String),
}

impl From<serde_json::Error> for RleError {
    fn from(err: serde_json::Error) -> Self {
        RleError::InvalidEnvelope(err.to_string())
    }
}

/// Result type for codec operations.
pub type Result<T> = core::result::Result<T, RleError>;
