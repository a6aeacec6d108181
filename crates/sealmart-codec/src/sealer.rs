use crate::error::{CodecError, CodecResult};

/// Seam for the code-sealing collaborator.
///
/// The registry core requires only that `seal` is deterministic and returns
/// an opaque string; it never inspects the output. Whatever real protection
/// the marketplace applies to submitted source lives behind this trait.
pub trait CodeSealer: Send + Sync {
    /// Transform cleartext source into its opaque stored form.
    fn seal(&self, source: &str) -> String;

    /// Recover cleartext from a sealed blob.
    fn unseal(&self, sealed: &str) -> CodecResult<String>;
}

/// Hex-encoding sealer.
///
/// A deterministic stand-in, not a cipher: the stored blob is the hex
/// encoding of the source's UTF-8 bytes. Keeps the blob opaque to casual
/// inspection and round-trippable for the demo surface.
#[derive(Clone, Copy, Debug, Default)]
pub struct HexSealer;

impl CodeSealer for HexSealer {
    fn seal(&self, source: &str) -> String {
        hex::encode(source.as_bytes())
    }

    fn unseal(&self, sealed: &str) -> CodecResult<String> {
        let bytes = hex::decode(sealed)?;
        String::from_utf8(bytes).map_err(|_| CodecError::SealedNotUtf8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seal_is_deterministic() {
        let sealer = HexSealer;
        assert_eq!(sealer.seal("fn main() {}"), sealer.seal("fn main() {}"));
    }

    #[test]
    fn seal_unseal_round_trips() {
        let sealer = HexSealer;
        let source = "console.log('hello');\n// comment\n";
        let sealed = sealer.seal(source);
        assert_ne!(sealed, source);
        assert_eq!(sealer.unseal(&sealed).unwrap(), source);
    }

    #[test]
    fn unseal_rejects_non_hex() {
        let sealer = HexSealer;
        assert!(sealer.unseal("not hex at all").is_err());
    }
}
