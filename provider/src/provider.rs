use async_trait::async_trait;

use crate::error::Result;
use crate::handle::KeyPair;

/// Capability to create, export and import keys.
///
/// Implementations own the key handles. Callers only move them around and
/// hand them back to the provider; the raw material is reachable solely
/// through the export operations.
///
/// Every export/import pair round trips: `import_x(export_x(h))` yields a
/// handle that is usable wherever `h` is.
///
/// # Encodings
///
/// - public keys: X.509 SubjectPublicKeyInfo (DER)
/// - private keys: PKCS#8 PrivateKeyInfo (DER)
/// - symmetric keys and IVs: raw bytes
#[async_trait]
pub trait CryptoProvider: Send + Sync {
    type PublicKey: Send + Sync;
    type PrivateKey: Send + Sync;
    type SecretKey: Send + Sync;

    /// Generates a fresh key agreement pair.
    async fn generate_key_pair(&self) -> Result<KeyPair<Self::PublicKey, Self::PrivateKey>>;

    /// Generates a fresh symmetric key for authenticated encryption.
    async fn generate_key(&self) -> Result<Self::SecretKey>;

    /// Generates random bytes of the length the configured cipher needs as IV.
    async fn generate_iv(&self) -> Result<Vec<u8>>;

    async fn export_key(&self, key: &Self::SecretKey) -> Result<Vec<u8>>;

    async fn import_key(&self, data: &[u8]) -> Result<Self::SecretKey>;

    async fn export_public_key(&self, key: &Self::PublicKey) -> Result<Vec<u8>>;

    async fn import_public_key(&self, data: &[u8]) -> Result<Self::PublicKey>;

    async fn export_private_key(&self, key: &Self::PrivateKey) -> Result<Vec<u8>>;

    async fn import_private_key(&self, data: &[u8]) -> Result<Self::PrivateKey>;
}
