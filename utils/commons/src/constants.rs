// Tags above `u8::MAX - 5` are kept free for the standard token events.

/// Tag for the Custom Highest Bid Increased event.
pub const HIGHEST_BID_INCREASED_TAG: u8 = u8::MAX - 5;

/// Tag for the Custom Auction Ended event.
pub const AUCTION_ENDED_TAG: u8 = u8::MAX - 6;

/// Tag for the Custom Withdrawal event.
pub const WITHDRAWAL_TAG: u8 = u8::MAX - 7;
