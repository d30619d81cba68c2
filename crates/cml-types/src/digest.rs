use std::fmt;

use base64::engine::general_purpose::URL_SAFE_NO_PAD as BASE64URL;
use base64::Engine as _;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;

/// A 20-byte RIPEMD-160 digest identifying a case, codemod, or job.
///
/// Internally the raw bytes are kept for hash-chain arithmetic; external
/// collaborators only ever see the base64url text form. `Display` and the
/// serde representation are both base64url, never raw bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; 20]);

impl Digest {
    /// Digest width in bytes (RIPEMD-160 output).
    pub const LEN: usize = 20;

    /// Create a digest from a pre-computed 20-byte array.
    pub const fn from_array(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Create a digest from a byte slice, checking the length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TypeError> {
        let arr: [u8; 20] = bytes.try_into().map_err(|_| TypeError::InvalidLength {
            expected: Self::LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }

    /// The raw 20-byte digest.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Base64url text form (unpadded), the consumer-facing identifier.
    pub fn encode(&self) -> String {
        BASE64URL.encode(self.0)
    }

    /// Parse from base64url text.
    pub fn decode(s: &str) -> Result<Self, TypeError> {
        let bytes = BASE64URL
            .decode(s)
            .map_err(|e| TypeError::InvalidBase64(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Short hex representation (first 8 characters) for debug output.
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.short_hex())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl From<[u8; 20]> for Digest {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::decode(&s).map_err(D::Error::custom)
    }
}
