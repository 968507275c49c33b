pub mod health;
pub mod url;

pub use health::health_handler;
pub use url::{decode_handler, encode_handler, redirect_handler};
