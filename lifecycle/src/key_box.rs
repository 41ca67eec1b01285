use provider::{CipherSuite, CryptoProvider, KeyPair, SoftwareProvider};
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::Result;

/// Generates, exports and imports keys through an injected provider.
///
/// The box keeps no state of its own. Handles are owned by the caller and
/// only ever passed back to the provider.
#[derive(Debug, Clone, Default)]
pub struct KeyBox<P = SoftwareProvider> {
    provider: P,
}

impl KeyBox<SoftwareProvider> {
    /// A box backed by [`SoftwareProvider`] with the given suite.
    pub fn with_suite(suite: CipherSuite) -> Self {
        KeyBox::new(SoftwareProvider::new(suite))
    }
}

impl<P: CryptoProvider> KeyBox<P> {
    pub fn new(provider: P) -> Self {
        KeyBox { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn encode_public_key_pem(&self, spki: &[u8]) -> String {
        pem::encode_public_key_pem(spki)
    }

    pub fn decode_public_key_pem(&self, text: &str) -> Result<Vec<u8>> {
        Ok(pem::decode_public_key_pem(text)?)
    }

    pub fn encode_private_key_pem(&self, pkcs8: &[u8]) -> String {
        pem::encode_private_key_pem(pkcs8)
    }

    pub fn decode_private_key_pem(&self, text: &str) -> Result<Vec<u8>> {
        Ok(pem::decode_private_key_pem(text)?)
    }

    pub async fn generate_key_pair(&self) -> Result<KeyPair<P::PublicKey, P::PrivateKey>> {
        Ok(self.provider.generate_key_pair().await?)
    }

    pub async fn generate_key(&self) -> Result<P::SecretKey> {
        Ok(self.provider.generate_key().await?)
    }

    pub async fn generate_iv(&self) -> Result<Vec<u8>> {
        Ok(self.provider.generate_iv().await?)
    }

    /// Raw bytes of a symmetric key.
    pub async fn export_key(&self, key: &P::SecretKey) -> Result<Vec<u8>> {
        Ok(self.provider.export_key(key).await?)
    }

    pub async fn import_key(&self, data: &[u8]) -> Result<P::SecretKey> {
        Ok(self.provider.import_key(data).await?)
    }

    /// SPKI (DER) encoding of a public key.
    pub async fn export_public_key(&self, key: &P::PublicKey) -> Result<Vec<u8>> {
        Ok(self.provider.export_public_key(key).await?)
    }

    pub async fn import_public_key(&self, data: &[u8]) -> Result<P::PublicKey> {
        Ok(self.provider.import_public_key(data).await?)
    }

    /// PKCS#8 (DER) encoding of a private key.
    pub async fn export_private_key(&self, key: &P::PrivateKey) -> Result<Vec<u8>> {
        Ok(self.provider.export_private_key(key).await?)
    }

    pub async fn import_private_key(&self, data: &[u8]) -> Result<P::PrivateKey> {
        Ok(self.provider.import_private_key(data).await?)
    }

    /// Exports a public key as a `PUBLIC KEY` PEM document.
    pub async fn export_public_key_pem(&self, key: &P::PublicKey) -> Result<String> {
        let spki = self.provider.export_public_key(key).await?;
        debug!(len = spki.len(), "encoding public key as PEM");
        Ok(pem::encode_public_key_pem(&spki))
    }

    /// Exports a private key as a `PRIVATE KEY` PEM document.
    pub async fn export_private_key_pem(&self, key: &P::PrivateKey) -> Result<String> {
        let pkcs8 = Zeroizing::new(self.provider.export_private_key(key).await?);
        debug!(len = pkcs8.len(), "encoding private key as PEM");
        Ok(pem::encode_private_key_pem(&pkcs8))
    }

    /// Imports a public key from a `PUBLIC KEY` PEM document.
    pub async fn import_public_key_pem(&self, text: &str) -> Result<P::PublicKey> {
        let spki = pem::decode_public_key_pem(text)?;
        debug!(len = spki.len(), "decoded public key PEM");
        Ok(self.provider.import_public_key(&spki).await?)
    }

    /// Imports a private key from a `PRIVATE KEY` PEM document.
    pub async fn import_private_key_pem(&self, text: &str) -> Result<P::PrivateKey> {
        let pkcs8 = Zeroizing::new(pem::decode_private_key_pem(text)?);
        debug!(len = pkcs8.len(), "decoded private key PEM");
        Ok(self.provider.import_private_key(&pkcs8).await?)
    }
}
