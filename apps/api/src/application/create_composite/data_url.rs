use base64::{
    Engine, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use bytes::Bytes;
use lazy_static::lazy_static;

lazy_static! {
    static ref DATA_URL_REGEX: regex::Regex = regex::Regex::new(r"^data:(.+);base64,(.*)$").unwrap();
}

/// Standard alphabet, padding optional.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// A decoded `data:<mime>;base64,<payload>` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    pub mime: String,
    pub data: Bytes,
}

impl DataUrl {
    /// Returns `None` when `input` is not a base64 data URL or its payload is not valid base64.
    pub fn parse(input: &str) -> Option<Self> {
        let captures = DATA_URL_REGEX.captures(input)?;
        let mime = captures.get(1)?.as_str().to_string();
        let data = PAYLOAD_ENGINE.decode(captures.get(2)?.as_str()).ok()?;
        Some(Self {
            mime,
            data: Bytes::from(data),
        })
    }
}
