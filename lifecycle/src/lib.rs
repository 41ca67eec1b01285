//! # lifecycle
//!
//! Key lifecycle facade for keybox.
//!
//! [`KeyBox`] wraps an injected [`CryptoProvider`] and adds PEM import and
//! export on top of the provider's binary encodings:
//!
//! ```text
//! export_public_key_pem  = encode_pem(export_public_key(key), "PUBLIC KEY")
//! export_private_key_pem = encode_pem(export_private_key(key), "PRIVATE KEY")
//! import_public_key_pem  = import_public_key(decode_pem(text, "PUBLIC KEY"))
//! import_private_key_pem = import_private_key(decode_pem(text, "PRIVATE KEY"))
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use lifecycle::KeyBox;
//!
//! let keybox: KeyBox = KeyBox::default();
//! let pair = keybox.generate_key_pair().await?;
//! let pem = keybox.export_private_key_pem(&pair.private_key).await?;
//! let private_key = keybox.import_private_key_pem(&pem).await?;
//! assert_eq!(pair.private_key, private_key);
//! ```

#![forbid(unsafe_code)]

pub mod error;
mod key_box;

pub use error::{Error, Result};
pub use key_box::KeyBox;
pub use provider::{
    Cipher, CipherSuite, CryptoProvider, Curve, KeyPair, PrivateKey, PublicKey, SecretKey,
    SoftwareProvider,
};
