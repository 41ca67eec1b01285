//! Encoder trait, the reverse direction of [`Decoder`](crate::decoder::Decoder).
//!
//! `Encoder<T, E>` is implemented by the source type `T` and produces the
//! destination `E`, which must declare `EncodableTo<T>`.
//!
//! ```no_run
//! use keybox::encoder::{EncodableTo, Encoder};
//!
//! struct Armored(String);
//!
//! #[derive(Debug)]
//! struct MyError;
//!
//! impl EncodableTo<Armored> for String {}
//!
//! impl Encoder<Armored, String> for Armored {
//!     type Error = MyError;
//!
//!     fn encode(&self) -> Result<String, Self::Error> {
//!         Ok(self.0.clone())
//!     }
//! }
//! ```

/// Encoder trait for converting from type `T` to type `E`.
pub trait Encoder<T, E: EncodableTo<T>> {
    /// The error type returned when encoding fails.
    type Error;

    /// Encodes `self` into type `E`.
    fn encode(&self) -> Result<E, Self::Error>;
}

/// Marker trait indicating that type `E` can be encoded from type `T`.
pub trait EncodableTo<T> {}
