//! Ed25519 verification of incoming interaction requests.
//!
//! Discord signs `timestamp || body` with the application's key and sends
//! the detached signature and the timestamp as headers.

use axum::http::HeaderMap;
use ed25519_dalek::{Signature, Verifier as _, VerifyingKey};
use tracing::warn;

pub const SIGNATURE_HEADER: &str = "x-signature-ed25519";
pub const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

/// Verifies request signatures against the configured public key.
///
/// A key that fails to decode leaves the verifier in a rejecting state
/// instead of failing construction, so the server still starts and can
/// report the problem.
#[derive(Clone)]
pub struct SignatureVerifier {
    public_key: Option<VerifyingKey>,
}

impl SignatureVerifier {
    /// Create a verifier from a hex-encoded 32-byte public key.
    pub fn new(public_key_hex: &str) -> Self {
        let public_key = parse_hex::<32>(public_key_hex)
            .and_then(|bytes| VerifyingKey::from_bytes(&bytes).ok());

        if public_key.is_none() {
            warn!("Discord public key is missing or invalid; all requests will be rejected");
        }

        Self { public_key }
    }

    /// Whether a usable public key was configured.
    pub fn has_key(&self) -> bool {
        self.public_key.is_some()
    }

    /// Verify the detached signature over `timestamp || body`.
    ///
    /// Malformed hex, wrong lengths and bad signatures all yield `false`.
    pub fn verify(&self, signature: &str, timestamp: &str, body: &[u8]) -> bool {
        let Some(public_key) = &self.public_key else {
            return false;
        };
        let Some(signature_bytes) = parse_hex::<64>(signature) else {
            return false;
        };
        let signature = Signature::from_bytes(&signature_bytes);

        let message = [timestamp.as_bytes(), body].concat();
        public_key.verify(&message, &signature).is_ok()
    }

    /// Verify a request given its headers and raw body. Missing or non-ASCII
    /// headers fail verification.
    pub fn verify_request(&self, headers: &HeaderMap, body: &[u8]) -> bool {
        let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());

        match (header(SIGNATURE_HEADER), header(TIMESTAMP_HEADER)) {
            (Some(signature), Some(timestamp)) => self.verify(signature, timestamp, body),
            _ => false,
        }
    }
}

/// Decode exactly `N` bytes of hex.
fn parse_hex<const N: usize>(s: &str) -> Option<[u8; N]> {
    let mut out = [0u8; N];
    hex::decode_to_slice(s, &mut out).ok()?;
    Some(out)
}
