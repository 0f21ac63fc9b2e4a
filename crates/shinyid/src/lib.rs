//! Short, URL-safe, reversible encoding for 64-bit integer IDs.
//!
//! A *shiny* is a `u64` written in base 64 with the URL-safe alphabet
//! `A-Z a-z 0-9 - _`, most significant digit first and without padding. Every
//! `u64` maps to exactly one shiny of 1 to 11 characters and back.
//!
//! ```
//! let shiny = shinyid::encode(9375);
//! assert_eq!(shiny, "CSf");
//! assert_eq!(shinyid::decode(&shiny), Ok(9375));
//! assert!(shinyid::decode("1_$_").is_err());
//! ```
//!
//! The codec is not a cipher. It hides nothing and is trivially reversible;
//! uniqueness comes from whatever hands out the integers.
#![cfg_attr(not(test), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod alphabet;
mod codec;
mod error;
mod id;
#[cfg(feature = "serde")]
mod serde;

pub use crate::alphabet::*;
pub use crate::codec::*;
pub use crate::error::*;
pub use crate::id::*;
#[cfg(feature = "serde")]
pub use crate::serde::*;
