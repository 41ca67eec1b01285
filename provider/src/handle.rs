//! Opaque key handles produced by [`SoftwareProvider`](crate::SoftwareProvider).
//!
//! The handles only reveal which curve or cipher they belong to. Their
//! material can be read back solely through the provider's export
//! operations. Secret handles compare in constant time and wipe their
//! material on drop.

use std::fmt::{Debug, Formatter};

use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::suite::{Cipher, Curve};

/// Public half of a key agreement pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey(pub(crate) EcPublicKey);

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum EcPublicKey {
    P256(p256::PublicKey),
    P384(p384::PublicKey),
}

impl PublicKey {
    pub fn curve(&self) -> Curve {
        match self.0 {
            EcPublicKey::P256(_) => Curve::P256,
            EcPublicKey::P384(_) => Curve::P384,
        }
    }
}

/// Private half of a key agreement pair.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey(pub(crate) EcPrivateKey);

#[derive(Clone, PartialEq, Eq)]
pub(crate) enum EcPrivateKey {
    P256(p256::SecretKey),
    P384(p384::SecretKey),
}

impl PrivateKey {
    pub fn curve(&self) -> Curve {
        match self.0 {
            EcPrivateKey::P256(_) => Curve::P256,
            EcPrivateKey::P384(_) => Curve::P384,
        }
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("curve", &self.curve())
            .finish_non_exhaustive()
    }
}

/// Symmetric AEAD key.
#[derive(Clone)]
pub struct SecretKey {
    pub(crate) cipher: Cipher,
    pub(crate) bytes: Zeroizing<Vec<u8>>,
}

impl SecretKey {
    pub fn cipher(&self) -> Cipher {
        self.cipher
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.cipher == other.cipher && bool::from(self.bytes.as_slice().ct_eq(other.bytes.as_slice()))
    }
}

impl Eq for SecretKey {}

impl Debug for SecretKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretKey")
            .field("cipher", &self.cipher)
            .finish_non_exhaustive()
    }
}

/// A public and a private key generated together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair<P, S> {
    pub public_key: P,
    pub private_key: S,
}

/// ECDH shared secret between `private` and `public`, `None` on a curve mismatch.
#[cfg(test)]
pub(crate) fn shared_secret(private: &PrivateKey, public: &PublicKey) -> Option<Vec<u8>> {
    match (&private.0, &public.0) {
        (EcPrivateKey::P256(sk), EcPublicKey::P256(pk)) => Some(
            p256::ecdh::diffie_hellman(sk.to_nonzero_scalar(), pk.as_affine())
                .raw_secret_bytes()
                .to_vec(),
        ),
        (EcPrivateKey::P384(sk), EcPublicKey::P384(pk)) => Some(
            p384::ecdh::diffie_hellman(sk.to_nonzero_scalar(), pk.as_affine())
                .raw_secret_bytes()
                .to_vec(),
        ),
        _ => None,
    }
}
