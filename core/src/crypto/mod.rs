pub mod types;
pub mod aead;
pub mod kdf;
pub mod entropy;
pub mod digest;

pub use types::*;
pub use aead::*;
pub use kdf::*;
pub use entropy::*;
pub use digest::*;
