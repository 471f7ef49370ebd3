use super::*;

/// The state in which an auction can be.
#[derive(Debug, Serialize, SchemaType, Eq, PartialEq, Clone, Copy)]
pub enum AuctionState {
    /// The auction is either
    /// - still accepting bids or
    /// - not accepting bids because it's past the auction end, but nobody has
    ///   finalized the auction yet.
    Open,
    /// The auction has been finalized and the highest bid has been released to
    /// the beneficiary.
    Ended,
}

/// The state of the smart contract.
/// This is the state that will be shown when the contract is queried using
/// `concordium-client contract show`.
#[derive(Serial, DeserialWithState)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// The part of the state that can be viewed
    pub viewable_state: ViewableState,
    /// Funds owed to out-bid accounts, claimable through `withdraw`
    pub pending_returns: StateMap<AccountAddress, Amount, S>,
}

/// The part of the state to be viewed using `concordium-client contract invoke`
#[derive(Debug, Serialize, SchemaType, Clone, PartialEq, Eq)]
pub struct ViewableState {
    /// Has the auction been finalized?
    pub auction_state: AuctionState,
    /// Account receiving the winning bid on finalization
    pub beneficiary: AccountAddress,
    /// Time at which bids will be closed
    pub auction_end_time: Timestamp,
    /// The highest bid so far, zero until somebody bids
    pub highest_bid: Amount,
    /// Account holding the highest bid
    pub highest_bidder: Option<AccountAddress>,
    /// Sum of all `pending_returns` entries
    pub outstanding_returns: Amount,
}

/// Type of the parameter to the `init` function.
#[derive(Serialize, SchemaType)]
pub struct InitParameter {
    /// Account receiving the winning bid.
    pub beneficiary: AccountAddress,
    /// Length of the bidding window in seconds, counted from the init slot time.
    pub bidding_duration: u64,
}

/// Bid displaced by a higher one. Its amount was credited to `account`.
#[derive(Debug, PartialEq, Eq)]
pub struct Outbid {
    pub account: AccountAddress,
    pub amount: Amount,
}

/// Outcome of a successful finalization.
#[derive(Debug, PartialEq, Eq)]
pub struct FinalBid {
    /// `None` if nobody bid.
    pub winner: Option<AccountAddress>,
    /// Amount owed to the beneficiary, zero if nobody bid.
    pub amount: Amount,
}
