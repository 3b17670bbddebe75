pub use entity::{jwt, users, Id};

pub mod error;
pub mod hash;
pub mod user;
