//! Secure memory handling

mod secret;

pub use secret::SecretBytes;
