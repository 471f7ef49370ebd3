use super::*;

/// The custom errors the contract can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// Only account addresses can bid or withdraw (Error code: -4).
    OnlyAccountAddress,
    /// Raised if bid does not exceed the highest bid (Error code: -5).
    BidNotHighEnough,
    /// Raised if bidding or finalization is attempted after the auction closed
    /// (Error code: -6).
    AuctionAlreadyEnded,
    /// Raised if there is an attempt to finalize the auction before its end
    /// time (Error code: -7).
    AuctionNotYetEnded,
    /// Bidding duration is zero or pushes the end time out of range
    /// (Error code: -8).
    InvalidDuration,
    /// Failed to invoke a transfer (Error code: -9).
    InvokeTransferError,
    /// Refund bookkeeping overflowed (Error code: -10).
    AmountOverflow,
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping errors related to transfers to CustomContractError.
impl From<TransferError> for CustomContractError {
    fn from(_te: TransferError) -> Self {
        Self::InvokeTransferError
    }
}
