//! JSON envelope for run-length encoded images.
//!
//! The envelope is the only persisted artifact of the codec:
//!
//! ```text
//! {"type":"PNG","width":1,"height":1,"data":"1:255,255,255,255|"}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::array::encode_tokens;
use crate::{Result, RleError};

/// Value of the `type` field for RGBA rasters.
pub const ENVELOPE_TYPE: &str = "PNG";

/// An array-encoded pixel stream together with the raster dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Always [`ENVELOPE_TYPE`]
    #[serde(rename = "type")]
    pub kind: String,
    /// Image width in pixels
    pub width: usize,
    /// Image height in pixels
    pub height: usize,
    /// `count:token|` records, one `"r,g,b,a"` token per pixel
    pub data: String,
}

impl Envelope {
    /// Builds an envelope by array-encoding `tokens`.
    pub fn new<S: AsRef<str>>(width: usize, height: usize, tokens: &[S]) -> Self {
        Self {
            kind: ENVELOPE_TYPE.to_string(),
            width,
            height,
            data: encode_tokens(tokens),
        }
    }

    /// Serializes the envelope as compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses and validates an envelope.
    ///
    /// # Errors
    ///
    /// - [`RleError::InvalidEnvelope`] if `text` is not a JSON object with
    ///   correctly typed fields
    /// - [`RleError::MissingField`] if `type`, `width`, `height` or `data` is
    ///   missing, `null`, zero or empty
    /// - [`RleError::UnsupportedFormat`] if `type` is not `"PNG"`
    ///
    /// The pixel count of `data` is not checked here.
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: RawEnvelope = serde_json::from_str(text)?;

        let kind = raw.kind.filter(|kind| !kind.is_empty());
        let kind = kind.ok_or(RleError::MissingField("type"))?;
        if kind != ENVELOPE_TYPE {
            return Err(RleError::UnsupportedFormat(kind));
        }

        let width = dimension(raw.width, "width")?;
        let height = dimension(raw.height, "height")?;
        let data = raw
            .data
            .filter(|data| !data.is_empty())
            .ok_or(RleError::MissingField("data"))?;

        Ok(Self {
            kind,
            width,
            height,
            data,
        })
    }
}

/// Array-encodes `tokens` and serializes them with the dimensions.
///
/// # Example
/// ```rust
/// use rle_codec::wrap;
///
/// let json = wrap(1, 1, &["255,255,255,255"])?;
/// assert_eq!(json, r#"{"type":"PNG","width":1,"height":1,"data":"1:255,255,255,255|"}"#);
/// # Ok::<(), rle_codec::RleError>(())
/// ```
pub fn wrap<S: AsRef<str>>(width: usize, height: usize, tokens: &[S]) -> Result<String> {
    Envelope::new(width, height, tokens).to_json()
}

/// Parses envelope text. See [`Envelope::from_json`].
pub fn unwrap(text: &str) -> Result<Envelope> {
    Envelope::from_json(text)
}

/// Envelope as found on disk, before validation.
///
/// `type` and `data` accept any JSON value so that `null` and other falsy
/// values report a missing field rather than a parse error.
#[derive(Deserialize)]
struct RawEnvelope {
    #[serde(rename = "type", default, deserialize_with = "string_or_missing")]
    kind: Option<String>,
    #[serde(default)]
    width: Option<Value>,
    #[serde(default)]
    height: Option<Value>,
    #[serde(default, deserialize_with = "string_or_missing")]
    data: Option<String>,
}

fn string_or_missing<'de, D>(deserializer: D) -> core::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        Value::Null | Value::Bool(false) => Ok(None),
        other => Err(D::Error::custom(format!("expected a string, found {other}"))),
    }
}

fn dimension(value: Option<Value>, field: &'static str) -> Result<usize> {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Err(RleError::MissingField(field)),
        Some(Value::Number(n)) => match n.as_u64() {
            Some(0) => Err(RleError::MissingField(field)),
            Some(n) => usize::try_from(n).map_err(|_| {
                RleError::InvalidEnvelope(format!("`{field}` is out of range: {n}"))
            }),
            None if n.as_f64() == Some(0.0) => Err(RleError::MissingField(field)),
            None => Err(RleError::InvalidEnvelope(format!(
                "`{field}` must be a positive integer, found {n}"
            ))),
        },
        Some(other) => Err(RleError::InvalidEnvelope(format!(
            "`{field}` must be a positive integer, found {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap() {
        let json = wrap(2, 1, &["1,2,3,4", "1,2,3,4"]).unwrap();
        assert_eq!(json, r#"{"type":"PNG","width":2,"height":1,"data":"2:1,2,3,4|"}"#);
    }

    #[test]
    fn test_unwrap_field_order_is_free() {
        let envelope = unwrap(r#"{"data":"1:0,0,0,0|","height":1,"width":1,"type":"PNG"}"#).unwrap();
        assert_eq!(envelope, Envelope::new(1, 1, &["0,0,0,0"]));
    }

    #[test]
    fn test_unwrap_invalid_json() {
        assert!(matches!(unwrap("not json"), Err(RleError::InvalidEnvelope(_))));
        assert!(matches!(unwrap("[1, 2]"), Err(RleError::InvalidEnvelope(_))));
        assert!(matches!(
            unwrap(r#"{"type":"PNG","width":"2","height":1,"data":"1:a|"}"#),
            Err(RleError::InvalidEnvelope(_))
        ));
    }

    #[test]
    fn test_unwrap_missing_fields() {
        let cases = [
            (r#"{"width":1,"height":1,"data":"1:a|"}"#, "type"),
            (r#"{"type":"","width":1,"height":1,"data":"1:a|"}"#, "type"),
            (r#"{"type":"PNG","height":1,"data":"1:a|"}"#, "width"),
            (r#"{"type":"PNG","width":0,"height":1,"data":"1:a|"}"#, "width"),
            (r#"{"type":"PNG","width":1,"height":null,"data":"1:a|"}"#, "height"),
            (r#"{"type":"PNG","width":1,"height":1}"#, "data"),
            (r#"{"type":"PNG","width":1,"height":1,"data":""}"#, "data"),
        ];
        for (text, field) in cases {
            match unwrap(text) {
                Err(RleError::MissingField(name)) => assert_eq!(name, field, "{text}"),
                other => panic!("expected missing `{field}` for {text}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_unwrap_unknown_type() {
        assert!(matches!(
            unwrap(r#"{"type":"JPEG","width":1,"height":1,"data":"1:a|"}"#),
            Err(RleError::UnsupportedFormat(kind)) if kind == "JPEG"
        ));
    }

    #[test]
    fn test_unwrap_fractional_dimension() {
        assert!(matches!(
            unwrap(r#"{"type":"PNG","width":1.5,"height":1,"data":"1:a|"}"#),
            Err(RleError::InvalidEnvelope(_))
        ));
    }
}
