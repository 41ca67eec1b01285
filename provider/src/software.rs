use aes_gcm::aead::KeyInit;
use aes_gcm::{Aes128Gcm, Aes256Gcm};
use async_trait::async_trait;
use pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use rand::RngCore;
use rand::rngs::OsRng;
use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::handle::{EcPrivateKey, EcPublicKey, KeyPair, PrivateKey, PublicKey, SecretKey};
use crate::provider::CryptoProvider;
use crate::suite::{Cipher, CipherSuite, Curve};

/// Provider backed by the RustCrypto crates and the operating system RNG.
///
/// It keeps no state besides its [`CipherSuite`], so one instance can be
/// shared between any number of tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SoftwareProvider {
    suite: CipherSuite,
}

impl SoftwareProvider {
    pub fn new(suite: CipherSuite) -> Self {
        SoftwareProvider { suite }
    }

    pub fn suite(&self) -> CipherSuite {
        self.suite
    }

    fn check_key(&self, data: &[u8]) -> Result<()> {
        let cipher = self.suite.cipher;
        let valid = match cipher {
            Cipher::Aes128Gcm => Aes128Gcm::new_from_slice(data).is_ok(),
            Cipher::Aes256Gcm => Aes256Gcm::new_from_slice(data).is_ok(),
        };
        if !valid {
            return Err(Error::InvalidKeyLength {
                expected: cipher.key_len(),
                actual: data.len(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl CryptoProvider for SoftwareProvider {
    type PublicKey = PublicKey;
    type PrivateKey = PrivateKey;
    type SecretKey = SecretKey;

    async fn generate_key_pair(&self) -> Result<KeyPair<PublicKey, PrivateKey>> {
        let (public_key, private_key) = match self.suite.curve {
            Curve::P256 => {
                let sk = p256::SecretKey::random(&mut OsRng);
                (EcPublicKey::P256(sk.public_key()), EcPrivateKey::P256(sk))
            }
            Curve::P384 => {
                let sk = p384::SecretKey::random(&mut OsRng);
                (EcPublicKey::P384(sk.public_key()), EcPrivateKey::P384(sk))
            }
        };
        debug!(curve = %self.suite.curve, "generated key pair");
        Ok(KeyPair {
            public_key: PublicKey(public_key),
            private_key: PrivateKey(private_key),
        })
    }

    async fn generate_key(&self) -> Result<SecretKey> {
        let cipher = self.suite.cipher;
        let mut bytes = Zeroizing::new(vec![0u8; cipher.key_len()]);
        OsRng.try_fill_bytes(bytes.as_mut_slice())?;
        debug!(cipher = %cipher, "generated key");
        Ok(SecretKey { cipher, bytes })
    }

    async fn generate_iv(&self) -> Result<Vec<u8>> {
        let mut iv = vec![0u8; self.suite.cipher.iv_len()];
        OsRng.try_fill_bytes(&mut iv)?;
        trace!(len = iv.len(), "generated iv");
        Ok(iv)
    }

    async fn export_key(&self, key: &SecretKey) -> Result<Vec<u8>> {
        trace!(cipher = %key.cipher, "exporting key");
        Ok(key.bytes.to_vec())
    }

    async fn import_key(&self, data: &[u8]) -> Result<SecretKey> {
        self.check_key(data)?;
        debug!(cipher = %self.suite.cipher, "imported key");
        Ok(SecretKey {
            cipher: self.suite.cipher,
            bytes: Zeroizing::new(data.to_vec()),
        })
    }

    async fn export_public_key(&self, key: &PublicKey) -> Result<Vec<u8>> {
        let der = match &key.0 {
            EcPublicKey::P256(pk) => pk.to_public_key_der()?,
            EcPublicKey::P384(pk) => pk.to_public_key_der()?,
        };
        trace!(curve = %key.curve(), len = der.as_bytes().len(), "exported public key");
        Ok(der.as_bytes().to_vec())
    }

    async fn import_public_key(&self, data: &[u8]) -> Result<PublicKey> {
        let key = match self.suite.curve {
            Curve::P256 => EcPublicKey::P256(p256::PublicKey::from_public_key_der(data)?),
            Curve::P384 => EcPublicKey::P384(p384::PublicKey::from_public_key_der(data)?),
        };
        debug!(curve = %self.suite.curve, "imported public key");
        Ok(PublicKey(key))
    }

    async fn export_private_key(&self, key: &PrivateKey) -> Result<Vec<u8>> {
        let der = match &key.0 {
            EcPrivateKey::P256(sk) => sk.to_pkcs8_der()?,
            EcPrivateKey::P384(sk) => sk.to_pkcs8_der()?,
        };
        trace!(curve = %key.curve(), len = der.as_bytes().len(), "exported private key");
        Ok(der.as_bytes().to_vec())
    }

    async fn import_private_key(&self, data: &[u8]) -> Result<PrivateKey> {
        let key = match self.suite.curve {
            Curve::P256 => EcPrivateKey::P256(p256::SecretKey::from_pkcs8_der(data)?),
            Curve::P384 => EcPrivateKey::P384(p384::SecretKey::from_pkcs8_der(data)?),
        };
        debug!(curve = %self.suite.curve, "imported private key");
        Ok(PrivateKey(key))
    }
}
