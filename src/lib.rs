pub mod ciphertext;
pub mod error;
pub mod groups;
pub mod key;
pub mod power_cache;
pub mod serialize;
pub mod traits;
pub mod utils;
pub mod window;
pub mod zkp;

pub use ciphertext::CipherText;
pub use error::{Error, Result};
pub use key::{PrivateKey, PublicKey};
pub use power_cache::PowerCache;
pub use serialize::IoMode;
pub use zkp::Zkp;
