//! Text digests for the hash generator.

use anyhow::Result;
use serde::Serialize;
use sha2::{Digest, Sha256, Sha384, Sha512};
use std::fmt;
use std::str::FromStr;

/// Digest algorithms offered by the hash generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum HashAlgorithm {
    /// SHA-256
    #[default]
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
}

impl HashAlgorithm {
    /// Lowercase hex digest of the UTF-8 bytes of `text`.
    #[must_use]
    pub fn digest_hex(self, text: &str) -> String {
        match self {
            Self::Sha256 => format!("{:x}", Sha256::digest(text.as_bytes())),
            Self::Sha384 => format!("{:x}", Sha384::digest(text.as_bytes())),
            Self::Sha512 => format!("{:x}", Sha512::digest(text.as_bytes())),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
        };
        f.write_str(name)
    }
}

impl FromStr for HashAlgorithm {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('-', "").as_str() {
            "sha256" => Ok(Self::Sha256),
            "sha384" => Ok(Self::Sha384),
            "sha512" => Ok(Self::Sha512),
            "md5" => anyhow::bail!("MD5 is not supported. Use sha256, sha384, or sha512"),
            _ => anyhow::bail!("Unknown hash algorithm '{s}'. Expected sha256, sha384, or sha512"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_vectors() {
        assert_eq!(
            HashAlgorithm::Sha256.digest_hex(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            HashAlgorithm::Sha256.digest_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_digest_lengths() {
        assert_eq!(HashAlgorithm::Sha384.digest_hex("abc").len(), 96);
        assert_eq!(HashAlgorithm::Sha512.digest_hex("abc").len(), 128);
    }

    #[test]
    fn test_parse_algorithm() {
        assert_eq!("SHA-512".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha512);
        assert!("md5".parse::<HashAlgorithm>().is_err());
    }

    #[test]
    fn test_display_names_match_algorithm() {
        assert_eq!(HashAlgorithm::Sha256.to_string(), "SHA-256");
    }
}
