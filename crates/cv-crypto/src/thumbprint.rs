use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use cv_types::Thumbprint;
use sha1::{Digest, Sha1};

const PEM_BEGIN: &str = "-----BEGIN CERTIFICATE-----";
const PEM_END: &str = "-----END CERTIFICATE-----";

/// Decode the DER bytes out of a single PEM certificate.
///
/// The armour lines and all whitespace are removed before the body is
/// base64-decoded. Only the first certificate is meaningful; concatenated
/// chains will fail to decode.
pub fn decode_pem(pem: &str) -> Result<Vec<u8>, ThumbprintError> {
    let body: String = pem
        .replace(PEM_BEGIN, "")
        .replace(PEM_END, "")
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    if body.is_empty() {
        return Err(ThumbprintError::Empty);
    }
    STANDARD
        .decode(body.as_bytes())
        .map_err(|e| ThumbprintError::Base64(e.to_string()))
}

/// SHA-1 thumbprint of raw DER bytes.
pub fn thumbprint_der(der: &[u8]) -> Thumbprint {
    Thumbprint::from_hash(Sha1::digest(der).into())
}

/// SHA-1 thumbprint of a PEM-encoded certificate.
pub fn thumbprint(pem: &str) -> Result<Thumbprint, ThumbprintError> {
    decode_pem(pem).map(|der| thumbprint_der(&der))
}

/// Errors from thumbprint computation.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ThumbprintError {
    #[error("certificate body is empty")]
    Empty,

    #[error("invalid base64 in certificate body: {0}")]
    Base64(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    const CERT: &str = "-----BEGIN CERTIFICATE-----\nMIIDSjCCAjKgAwIBAgIUdpQ3G/AnIilrPAsvMz3Zf9VnvWgwDQYJKoZIhvcNAQEL\nBQAwGjEYMBYGA1UEAwwPZm9vX2NlcnRpZmljYXRlMB4XDTE3MTEyMTE2MjUyMFoX\nDTE4MTEyMTE2MjUyMFowGjEYMBYGA1UEAwwPZm9vX2NlcnRpZmljYXRlMIIBIjAN\nBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEAwqIrV8HpCuPyuJ6VvyG7gVhYJGAO\nX4zhclxkTAKT5rkE4Lfj048GZsDghK+pHs+tVotfyrJzYGJoEBTn9Wy7kP5pQmLR\nF54imDztep15OlyoJmLZfRgct/8Kyxkjgg3PKVw68IiNhnTlYaw4CAyZ/13mvw2c\nWIYlag9LV5R2ifcyubaYllxJhdWSXrcbYxrts1kRsUQTo99jJzKu71meLigMryaM\nry8xvjv1X8Yjq3s3Lud6gWZ6BuaaaVVIjI9clGgR1MkgKJgVkWjNzDRiCxYnq1LH\nCho9bgKgiY4p604zPk9Mw4FhtCbOim6HOsHTimONZXfDNmfsJ9wJefA0UwIDAQAB\no4GHMIGEMB0GA1UdDgQWBBTyAOrrFMy88bGgEBVI4PRGD4b02jBVBgNVHSMETjBM\ngBQ3ZlJJaG9Brzf3IM6tWsMJce6YIKEepBwwGjEYMBYGA1UEAwwPZm9vX2NlcnRp\nZmljYXRlghQvHGgHfN/J7QzPNFAa0q3DwILanjAMBgNVHRMBAf8EAjAAMA0GCSqG\nSIb3DQEBCwUAA4IBAQBC1x2+E35y+iX3Mu+SWD1I3RNTGE3qKdUqj+O+QeavqCRQ\n01nolxFaSvrM/4znAlWukfp9lCOHl8foD3vHQ+meW+PlLIH9HlBjn9T3c6h4p8EQ\niYV93tyCmUlPdtzW7k4Onl3IroNNHem9Uj+OSZxGtw35YU84T+hM1kaDKtZeS1je\nFWF1W8DCORxD2rFXFwe2nJd6SSeF3KWzuKAKDqJ7CmbdRb1TtgjUym6X55SQfW2a\ndwNE+9ztMBQm4ERhwMU/NMx14UjsOPvNjF1VVei52qQ2ce7c1vgW1RI2cYFgV8q8\noFjMdJePy7eLbGRaW7Jpdy9MOiEZOj513lT5MBGk\n-----END CERTIFICATE-----";

    #[test]
    fn known_certificate_thumbprint() {
        let tp = thumbprint(CERT).unwrap();
        assert_eq!(tp.to_hex(), "ebdbe32ef98991695958ea2510287f0e6c52a483");
    }

    #[test]
    fn crlf_line_endings_give_same_thumbprint() {
        let crlf = CERT.replace('\n', "\r\n");
        assert_eq!(thumbprint(&crlf).unwrap(), thumbprint(CERT).unwrap());
    }

    #[test]
    fn decode_yields_der_sequence() {
        let der = decode_pem(CERT).unwrap();
        // DER certificates open with a SEQUENCE tag.
        assert_eq!(der[0], 0x30);
        assert_eq!(thumbprint_der(&der), thumbprint(CERT).unwrap());
    }

    #[test]
    fn empty_body_is_an_error() {
        assert_eq!(thumbprint(""), Err(ThumbprintError::Empty));
        assert_eq!(
            thumbprint("-----BEGIN CERTIFICATE-----\n-----END CERTIFICATE-----"),
            Err(ThumbprintError::Empty)
        );
    }

    #[test]
    fn garbage_body_is_an_error() {
        assert!(matches!(
            thumbprint("-----BEGIN CERTIFICATE-----\n!!!not base64!!!\n-----END CERTIFICATE-----"),
            Err(ThumbprintError::Base64(_))
        ));
    }
}
