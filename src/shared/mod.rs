pub mod error;
mod result;
pub mod security;

pub use result::Result;
