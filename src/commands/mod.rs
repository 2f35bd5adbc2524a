pub mod decode;
pub mod encode;
pub mod keygen;
pub mod pubkey;
