//! HTTP Handlers

mod download;
mod ping;
mod speech;
mod token;
mod voice;

pub use download::*;
pub use ping::*;
pub use speech::*;
pub use token::*;
pub use voice::*;
