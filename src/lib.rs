pub mod core;
pub mod error;
pub mod impls;

pub use error::Error;
