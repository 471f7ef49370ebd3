use super::*;

/// An untagged event of a new highest bid.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct HighestBidIncreasedEvent {
    /// Account now leading the auction.
    pub bidder: AccountAddress,
    /// The new highest bid.
    pub amount: Amount,
}

/// An untagged event of auction finalization.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct AuctionEndedEvent {
    /// Winning account, `None` if nobody bid.
    pub winner: Option<AccountAddress>,
    /// Amount released to the beneficiary.
    pub amount: Amount,
}

/// An untagged event of a refund being withdrawn.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct WithdrawalEvent {
    /// Account receiving the refund.
    pub account: AccountAddress,
    /// Refunded amount.
    pub amount: Amount,
}

/// Tagged Custom event to be serialized for the event log.
#[derive(Debug, PartialEq, Eq)]
pub enum CustomEvent {
    /// Bid accepted
    HighestBidIncreased(HighestBidIncreasedEvent),
    /// Auction finalized
    AuctionEnded(AuctionEndedEvent),
    /// Refund withdrawn
    Withdrawal(WithdrawalEvent),
}

impl Serial for CustomEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            CustomEvent::HighestBidIncreased(event) => {
                out.write_u8(HIGHEST_BID_INCREASED_TAG)?;
                event.serial(out)
            }
            CustomEvent::AuctionEnded(event) => {
                out.write_u8(AUCTION_ENDED_TAG)?;
                event.serial(out)
            }
            CustomEvent::Withdrawal(event) => {
                out.write_u8(WITHDRAWAL_TAG)?;
                event.serial(out)
            }
        }
    }
}

impl Deserial for CustomEvent {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let tag = source.read_u8()?;
        match tag {
            HIGHEST_BID_INCREASED_TAG => {
                HighestBidIncreasedEvent::deserial(source).map(CustomEvent::HighestBidIncreased)
            }
            AUCTION_ENDED_TAG => AuctionEndedEvent::deserial(source).map(CustomEvent::AuctionEnded),
            WITHDRAWAL_TAG => WithdrawalEvent::deserial(source).map(CustomEvent::Withdrawal),
            _ => Err(ParseError::default()),
        }
    }
}
