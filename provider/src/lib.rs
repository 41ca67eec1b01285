//! # provider
//!
//! The cryptographic engine behind keybox.
//!
//! [`CryptoProvider`] is the capability the key facade is built on: it
//! generates key pairs, symmetric keys and IVs, and moves keys between
//! opaque handles and their binary encodings (SPKI, PKCS#8, raw).
//!
//! [`SoftwareProvider`] implements it with the RustCrypto crates
//! (`p256`/`p384` for ECDH pairs, `aes-gcm` for symmetric keys) and is
//! configured by a [`CipherSuite`].
//!
//! ```ignore
//! use provider::{CipherSuite, CryptoProvider, SoftwareProvider};
//!
//! let provider = SoftwareProvider::new(CipherSuite::default());
//! let pair = provider.generate_key_pair().await?;
//! let spki = provider.export_public_key(&pair.public_key).await?;
//! let again = provider.import_public_key(&spki).await?;
//! assert_eq!(pair.public_key, again);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod handle;
mod provider;
mod software;
pub mod suite;

pub use error::{Error, Result};
pub use handle::{KeyPair, PrivateKey, PublicKey, SecretKey};
pub use provider::CryptoProvider;
pub use software::SoftwareProvider;
pub use suite::{Cipher, CipherSuite, Curve};
