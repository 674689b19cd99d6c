//! JWT token encoding, decoding, claims, and revocation.

pub mod claims;
pub mod decoder;
pub mod encoder;
pub mod error;

pub use claims::{Claims, TokenType};
pub use decoder::JwtDecoder;
pub use encoder::{JwtEncoder, TokenPair};
pub use error::TokenError;
