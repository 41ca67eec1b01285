//! Cipher suite configuration.
//!
//! A [`CipherSuite`] selects the curve used for key pairs and the AEAD
//! cipher used for symmetric keys and IVs. It can be built in code or
//! loaded from TOML:
//!
//! ```
//! use provider::{Cipher, CipherSuite, Curve};
//!
//! let suite = CipherSuite::from_toml("curve = \"P-384\"\ncipher = \"AES-128-GCM\"\n").unwrap();
//! assert_eq!(suite, CipherSuite::new(Curve::P384, Cipher::Aes128Gcm));
//! ```

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use aes_gcm::aead::generic_array::typenum::Unsigned;
use aes_gcm::aead::{AeadCore, KeySizeUser};
use aes_gcm::{Aes128Gcm, Aes256Gcm};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const P256_NAME: &str = "P-256";
const P384_NAME: &str = "P-384";
const AES_128_GCM_NAME: &str = "AES-128-GCM";
const AES_256_GCM_NAME: &str = "AES-256-GCM";

/// Elliptic curve used for key agreement pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Curve {
    #[default]
    #[serde(rename = "P-256")]
    P256,
    #[serde(rename = "P-384")]
    P384,
}

impl Curve {
    pub fn name(&self) -> &'static str {
        match self {
            Curve::P256 => P256_NAME,
            Curve::P384 => P384_NAME,
        }
    }
}

impl Display for Curve {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Curve {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            P256_NAME => Ok(Curve::P256),
            P384_NAME => Ok(Curve::P384),
            _ => Err(Error::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

/// Authenticated encryption cipher used for symmetric keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cipher {
    #[serde(rename = "AES-128-GCM")]
    Aes128Gcm,
    #[default]
    #[serde(rename = "AES-256-GCM")]
    Aes256Gcm,
}

impl Cipher {
    pub fn name(&self) -> &'static str {
        match self {
            Cipher::Aes128Gcm => AES_128_GCM_NAME,
            Cipher::Aes256Gcm => AES_256_GCM_NAME,
        }
    }

    /// Length of a raw key in bytes.
    pub fn key_len(&self) -> usize {
        match self {
            Cipher::Aes128Gcm => <Aes128Gcm as KeySizeUser>::KeySize::USIZE,
            Cipher::Aes256Gcm => <Aes256Gcm as KeySizeUser>::KeySize::USIZE,
        }
    }

    /// Length of an IV (GCM nonce) in bytes.
    pub fn iv_len(&self) -> usize {
        match self {
            Cipher::Aes128Gcm => <Aes128Gcm as AeadCore>::NonceSize::USIZE,
            Cipher::Aes256Gcm => <Aes256Gcm as AeadCore>::NonceSize::USIZE,
        }
    }
}

impl Display for Cipher {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Cipher {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            AES_128_GCM_NAME => Ok(Cipher::Aes128Gcm),
            AES_256_GCM_NAME => Ok(Cipher::Aes256Gcm),
            _ => Err(Error::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

/// Curve and cipher used by a provider. Defaults to P-256 with AES-256-GCM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CipherSuite {
    pub curve: Curve,
    pub cipher: Cipher,
}

impl CipherSuite {
    pub fn new(curve: Curve, cipher: Cipher) -> Self {
        CipherSuite { curve, cipher }
    }

    /// Loads a suite from TOML. Missing keys keep their default.
    pub fn from_toml(s: &str) -> Result<Self> {
        let suite = toml::from_str(s)?;
        Ok(suite)
    }
}
