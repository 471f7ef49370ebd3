//! It exposes the errors, event tags and helpers shared by the auction contracts.
#![cfg_attr(not(feature = "std"), no_std)]
pub use crate::{calculations::*, constants::*, errors::*, types::*};
use concordium_std::*;

mod calculations;
mod constants;
mod errors;
mod types;
