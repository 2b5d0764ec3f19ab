#![warn(missing_debug_implementations, rust_2018_idioms)]

//! Decode and validate DID tokens.
//!
//! A DID token is a standard base64 string wrapping a two-element JSON array:
//! a hex-encoded secp256k1 signature (the "proof") and a JSON-encoded
//! [`Claim`]. The claim is signed by the issuer's Ethereum address using the
//! `personal_sign` message scheme.
//!
//! ```no_run
//! use did_token::{decode, TokenValidator};
//!
//! # fn main() -> Result<(), did_token::Error> {
//! # let encoded = "";
//! let token = decode(encoded)?;
//! TokenValidator::new("did:magic:731848cc-084e-41ff-bbdf-7f103817ea6b").validate(&token)?;
//!
//! println!("Authenticated {}", token.issuer());
//! # Ok(())
//! # }
//! ```

pub mod claim;
pub mod crypto;
pub mod error;
pub mod header;
pub mod issuer;
pub mod serde;
pub mod time;
pub mod token;
pub mod validator;

pub use claim::Claim;
pub use error::{Error, ErrorKind, Result};
pub use header::parse_authorization_header;
pub use issuer::{construct_issuer_with_public_address, public_address};
pub use token::{decode, Token};
pub use validator::{validate, TokenValidator, GRACE_PERIOD_SECONDS};
