//! English auction for a single lot paid in CCD.
//!
//! Accounts raise the highest bid until the auction end time. Out-bid funds
//! are credited to the displaced bidder and have to be withdrawn by them;
//! after the end time anyone may finalize the auction, which releases the
//! winning bid to the beneficiary.
#![cfg_attr(not(feature = "std"), no_std)]
use crate::{events::*, impls::*, structs::*};
use commons::*;
use concordium_std::*;

mod contract;
mod events;
mod impls;
mod structs;
