//! # keybox
//!
//! Core traits for encoding and decoding key material in keybox.
//!
//! This crate defines the `Decoder` and `Encoder` traits that every other
//! keybox crate uses to move key material between its representations.
//!
//! ## Overview
//!
//! Importing a key flows like this:
//! ```text
//! &str → Pem → Vec<u8> (SPKI / PKCS8 / raw) → provider key handle
//! ```
//!
//! Each textual step uses the `Decoder` trait, and the `Encoder` trait is
//! used in the reverse direction. The last step is owned by the crypto
//! provider and never leaves it.
//!
//! ## Type Safety
//!
//! The traits use marker traits (`DecodableFrom` and `EncodableTo`) so a
//! conversion only exists where it has been declared explicitly.
//!
//! ## Example
//!
//! ```ignore
//! use keybox::decoder::Decoder;
//! use keybox::encoder::Encoder;
//! use pem::Pem;
//!
//! let text = "-----BEGIN PUBLIC KEY-----\nYWJj\n-----END PUBLIC KEY-----\n";
//! let pem: Pem = text.decode()?;
//! let bytes: Vec<u8> = pem.decode()?;
//! assert_eq!(bytes, b"abc");
//!
//! let again: String = pem.encode()?;
//! assert_eq!(again, text);
//! ```

#![forbid(unsafe_code)]

pub mod decoder;
pub mod encoder;
