mod client;
mod error;
mod form;
mod value_object;

pub use client::*;
pub use error::*;
pub use form::*;
pub use value_object::*;
