//! # cms-auth
//!
//! Authentication primitives for the memorial CMS: JWT token issuance and
//! validation, Argon2id password hashing, and password policy enforcement.

pub mod jwt;
pub mod password;

pub use jwt::claims::{Claims, TokenType};
pub use jwt::decoder::JwtDecoder;
pub use jwt::encoder::{JwtEncoder, TokenPair};
pub use password::hasher::PasswordHasher;
pub use password::validator::PasswordValidator;
