use std::fmt;

/// Length in bytes of a SHA-1 digest.
pub const THUMBPRINT_LEN: usize = 20;

/// SHA-1 thumbprint of a certificate.
///
/// The thumbprint is the digest of the certificate's DER bytes, which is how
/// the issuing authority identifies certificates. Both sides of a
/// reconciliation can be keyed on it: the authority reports it directly and
/// the credential store's value is computed from the stored PEM body.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Thumbprint([u8; THUMBPRINT_LEN]);

impl Thumbprint {
    /// Create a `Thumbprint` from a pre-computed digest.
    pub fn from_hash(hash: [u8; THUMBPRINT_LEN]) -> Self {
        Self(hash)
    }

    /// Lower-case hex representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Thumbprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Thumbprint({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for Thumbprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SAMPLE: [u8; THUMBPRINT_LEN] = [
        0xeb, 0xdb, 0xe3, 0x2e, 0xf9, 0x89, 0x91, 0x69, 0x59, 0x58, 0xea, 0x25, 0x10, 0x28, 0x7f,
        0x0e, 0x6c, 0x52, 0xa4, 0x83,
    ];

    #[test]
    fn hex_is_lower_case() {
        let tp = Thumbprint::from_hash(SAMPLE);
        assert_eq!(tp.to_hex(), "ebdbe32ef98991695958ea2510287f0e6c52a483");
    }

    #[test]
    fn display_is_full_hex_and_debug_is_short() {
        let tp = Thumbprint::from_hash(SAMPLE);
        assert_eq!(format!("{tp}"), tp.to_hex());
        assert_eq!(format!("{tp:?}"), "Thumbprint(ebdbe32e)");
    }

    proptest! {
        #[test]
        fn hex_form_preserves_byte_order(bytes in proptest::array::uniform20(any::<u8>())) {
            let hex = Thumbprint::from_hash(bytes).to_hex();
            prop_assert_eq!(hex.len(), 2 * THUMBPRINT_LEN);
            for (i, byte) in bytes.iter().enumerate() {
                prop_assert_eq!(&hex[2 * i..2 * i + 2], format!("{byte:02x}"));
            }
        }
    }
}
