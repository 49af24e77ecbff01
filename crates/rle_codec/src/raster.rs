//! Conversion between RGBA rasters and `"r,g,b,a"` pixel tokens, and the
//! full image pipeline built on it.

use crate::array::decode_tokens_bounded;
use crate::envelope::Envelope;
use crate::{Result, RleError};

const CHANNELS: usize = 4;

/// A decoded RGBA raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    /// RGBA pixel data (4 bytes per pixel: R, G, B, A), row-major
    pub pixels: Vec<u8>,
    /// Image width in pixels
    pub width: usize,
    /// Image height in pixels
    pub height: usize,
}

/// Turns each RGBA pixel into a `"r,g,b,a"` token.
///
/// # Arguments
/// * `rgba` - Raw RGBA pixel data (4 bytes per pixel: R, G, B, A)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Example
/// ```rust
/// use rle_codec::pixels_to_tokens;
///
/// let tokens = pixels_to_tokens(&[255, 0, 0, 255, 0, 0, 0, 0], 2, 1)?;
/// assert_eq!(tokens, vec!["255,0,0,255", "0,0,0,0"]);
/// # Ok::<(), rle_codec::RleError>(())
/// ```
pub fn pixels_to_tokens(rgba: &[u8], width: usize, height: usize) -> Result<Vec<String>> {
    let expected = byte_len(width, height)?;
    if rgba.len() != expected {
        return Err(RleError::BufferSizeMismatch {
            expected,
            actual: rgba.len(),
        });
    }

    Ok(rgba
        .chunks_exact(CHANNELS)
        .map(|c| format!("{},{},{},{}", c[0], c[1], c[2], c[3]))
        .collect())
}

/// Turns `"r,g,b,a"` tokens back into RGBA bytes.
///
/// Every token must hold exactly four channel values in `0..=255`, and there
/// must be exactly `width * height` tokens. Nothing is truncated or padded.
///
/// # Errors
///
/// - [`RleError::InvalidDimensions`] if `width` or `height` is zero
/// - [`RleError::InvalidChannel`] for the first token that does not parse
/// - [`RleError::DimensionMismatch`] if the pixel count is wrong
pub fn tokens_to_pixels<S: AsRef<str>>(
    tokens: &[S],
    width: usize,
    height: usize,
) -> Result<Vec<u8>> {
    let expected = byte_len(width, height)?;

    let mut pixels = Vec::with_capacity(tokens.len().saturating_mul(CHANNELS));
    for (index, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        let rgba = parse_pixel(token).ok_or_else(|| RleError::InvalidChannel {
            index,
            token: token.to_string(),
        })?;
        pixels.extend_from_slice(&rgba);
    }

    if pixels.len() != expected {
        return Err(RleError::DimensionMismatch {
            expected: expected / CHANNELS,
            actual: pixels.len() / CHANNELS,
        });
    }

    Ok(pixels)
}

/// Encodes an RGBA raster into envelope JSON.
///
/// # Example
/// ```rust
/// use rle_codec::encode_image;
///
/// let json = encode_image(&[255, 255, 255, 255], 1, 1)?;
/// assert_eq!(json, r#"{"type":"PNG","width":1,"height":1,"data":"1:255,255,255,255|"}"#);
/// # Ok::<(), rle_codec::RleError>(())
/// ```
#[tracing::instrument(skip(rgba))]
pub fn encode_image(rgba: &[u8], width: usize, height: usize) -> Result<String> {
    let tokens = pixels_to_tokens(rgba, width, height)?;
    let envelope = Envelope::new(width, height, &tokens);
    tracing::debug!(
        pixels = tokens.len(),
        encoded_len = envelope.data.len(),
        "encoded image"
    );
    envelope.to_json()
}

/// Decodes envelope JSON back into an RGBA raster.
///
/// Malformed `count:token|` records in the envelope data are skipped, which
/// usually surfaces as a [`RleError::DimensionMismatch`]. Data that asks for
/// more pixels than `width * height` is rejected before any of them are
/// built.
#[tracing::instrument(skip(text), fields(len = text.len()))]
pub fn decode_image(text: &str) -> Result<RasterImage> {
    let envelope = Envelope::from_json(text)?;
    let pixel_count = byte_len(envelope.width, envelope.height)? / CHANNELS;
    let tokens = decode_tokens_bounded(&envelope.data, pixel_count)?;
    tracing::debug!(
        width = envelope.width,
        height = envelope.height,
        tokens = tokens.len(),
        "decoded envelope"
    );
    let pixels = tokens_to_pixels(&tokens, envelope.width, envelope.height)?;

    Ok(RasterImage {
        pixels,
        width: envelope.width,
        height: envelope.height,
    })
}

fn byte_len(width: usize, height: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(RleError::InvalidDimensions { width, height });
    }
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or(RleError::InvalidDimensions { width, height })
}

fn parse_pixel(token: &str) -> Option<[u8; CHANNELS]> {
    let mut parts = token.split(',');
    let mut rgba = [0u8; CHANNELS];
    for channel in &mut rgba {
        *channel = parts.next()?.trim().parse().ok()?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(rgba)
}
