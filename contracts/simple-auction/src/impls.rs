use super::*;

/// End time of an auction started at `start` that takes bids for
/// `bidding_duration` seconds.
pub fn auction_end_time(start: Timestamp, bidding_duration: u64) -> ContractResult<Timestamp> {
    ensure!(bidding_duration > 0, CustomContractError::InvalidDuration);
    bidding_duration
        .checked_mul(1000)
        .map(Duration::from_millis)
        .and_then(|duration| start.checked_add(duration))
        .ok_or(CustomContractError::InvalidDuration)
}

// Functions for creating, updating and querying the contract state.
impl<S: HasStateApi> State<S> {
    /// Creates an open auction without bids.
    pub fn new(
        beneficiary: AccountAddress,
        auction_end_time: Timestamp,
        state_builder: &mut StateBuilder<S>,
    ) -> Self {
        Self {
            viewable_state: ViewableState {
                auction_state: AuctionState::Open,
                beneficiary,
                auction_end_time,
                highest_bid: Amount::zero(),
                highest_bidder: None,
                outstanding_returns: Amount::zero(),
            },
            pending_returns: state_builder.new_map(),
        }
    }

    pub fn is_ended(&self) -> bool {
        self.viewable_state.auction_state == AuctionState::Ended
    }

    /// Bids are taken until the auction is finalized or `slot_time` reaches the
    /// end time, whichever comes first.
    pub fn accepts_bids(&self, slot_time: Timestamp) -> bool {
        !self.is_ended() && slot_time < self.viewable_state.auction_end_time
    }

    /// Amount `account` can currently withdraw.
    pub fn pending_return(&self, account: &AccountAddress) -> Amount {
        self.pending_returns
            .get(account)
            .map(|owed| *owed)
            .unwrap_or_else(Amount::zero)
    }

    /// Everything the contract should hold right now: the leading bid while the
    /// auction is open, plus all refunds not yet withdrawn.
    pub fn escrowed_funds(&self) -> ContractResult<Amount> {
        match self.viewable_state.auction_state {
            AuctionState::Open => checked_add(
                self.viewable_state.highest_bid,
                self.viewable_state.outstanding_returns,
            ),
            AuctionState::Ended => Ok(self.viewable_state.outstanding_returns),
        }
    }

    /// Makes `bidder` the leader with `amount`.
    ///
    /// The displaced leader is credited with their bid and returned. Nothing is
    /// changed if the bid is rejected.
    pub fn bid(
        &mut self,
        bidder: AccountAddress,
        amount: Amount,
        slot_time: Timestamp,
    ) -> ContractResult<Option<Outbid>> {
        ensure!(
            self.accepts_bids(slot_time),
            CustomContractError::AuctionAlreadyEnded
        );

        // Zero never passes this check, so every accepted bid is positive
        ensure!(
            amount > self.viewable_state.highest_bid,
            CustomContractError::BidNotHighEnough
        );

        let outbid = self.viewable_state.highest_bidder.map(|account| Outbid {
            account,
            amount: self.viewable_state.highest_bid,
        });
        if let Some(outbid) = &outbid {
            self.credit_pending_return(outbid.account, outbid.amount)?;
        }

        self.viewable_state.highest_bid = amount;
        self.viewable_state.highest_bidder = Some(bidder);

        Ok(outbid)
    }

    /// Adds `amount` to what `account` can withdraw.
    ///
    /// Also used to hand a debit back after a failed payout.
    pub fn credit_pending_return(
        &mut self,
        account: AccountAddress,
        amount: Amount,
    ) -> ContractResult<()> {
        if amount == Amount::zero() {
            return Ok(());
        }

        let owed = checked_add(self.pending_return(&account), amount)?;
        let outstanding = checked_add(self.viewable_state.outstanding_returns, amount)?;

        self.pending_returns.insert(account, owed);
        self.viewable_state.outstanding_returns = outstanding;

        Ok(())
    }

    /// Removes and returns everything owed to `account`.
    ///
    /// The ledger is debited before any funds leave the contract. If the payout
    /// then fails, the amount has to be put back with
    /// [`State::credit_pending_return`].
    pub fn take_pending_return(&mut self, account: &AccountAddress) -> ContractResult<Amount> {
        let owed = self.pending_return(account);
        if owed == Amount::zero() {
            return Ok(owed);
        }

        let outstanding = checked_sub(self.viewable_state.outstanding_returns, owed)?;

        self.pending_returns.remove(account);
        self.viewable_state.outstanding_returns = outstanding;

        Ok(owed)
    }

    /// Closes the auction and returns the bid owed to the beneficiary.
    ///
    /// Refunds are left untouched and stay claimable.
    pub fn finalize(&mut self, slot_time: Timestamp) -> ContractResult<FinalBid> {
        ensure!(!self.is_ended(), CustomContractError::AuctionAlreadyEnded);
        ensure!(
            slot_time >= self.viewable_state.auction_end_time,
            CustomContractError::AuctionNotYetEnded
        );

        self.viewable_state.auction_state = AuctionState::Ended;

        Ok(FinalBid {
            winner: self.viewable_state.highest_bidder,
            amount: self.viewable_state.highest_bid,
        })
    }

    /// Undoes [`State::finalize`] when paying the beneficiary fails.
    pub fn reopen(&mut self) {
        self.viewable_state.auction_state = AuctionState::Open;
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const START: u64 = 1_000;
    const BIDDING_DURATION: u64 = 300;
    const BENEFICIARY: AccountAddress = AccountAddress([9u8; 32]);
    const ALICE: AccountAddress = AccountAddress([1u8; 32]);
    const BOB: AccountAddress = AccountAddress([2u8; 32]);
    const CAROL: AccountAddress = AccountAddress([3u8; 32]);

    fn end_time() -> Timestamp {
        Timestamp::from_timestamp_millis(START + BIDDING_DURATION * 1000)
    }

    fn before_end() -> Timestamp {
        Timestamp::from_timestamp_millis(START)
    }

    fn after_end() -> Timestamp {
        Timestamp::from_timestamp_millis(START + BIDDING_DURATION * 1000 + 1)
    }

    fn ccd(micro_ccd: u64) -> Amount {
        Amount::from_micro_ccd(micro_ccd)
    }

    fn fresh_state(state_builder: &mut TestStateBuilder) -> State<TestStateApi> {
        State::new(BENEFICIARY, end_time(), state_builder)
    }

    #[concordium_test]
    fn test_auction_end_time() {
        let start = Timestamp::from_timestamp_millis(START);

        claim_eq!(auction_end_time(start, BIDDING_DURATION), Ok(end_time()));
        claim_eq!(
            auction_end_time(start, 0),
            Err(CustomContractError::InvalidDuration)
        );
        claim_eq!(
            auction_end_time(start, u64::MAX),
            Err(CustomContractError::InvalidDuration)
        );
        claim_eq!(
            auction_end_time(start, u64::MAX / 1000),
            Err(CustomContractError::InvalidDuration)
        );
    }

    #[concordium_test]
    fn test_new_auction_is_open_without_bids() {
        let mut state_builder = TestStateBuilder::new();
        let state = fresh_state(&mut state_builder);

        claim_eq!(state.viewable_state.auction_state, AuctionState::Open);
        claim_eq!(state.viewable_state.highest_bid, Amount::zero());
        claim_eq!(state.viewable_state.highest_bidder, None);
        claim_eq!(state.viewable_state.beneficiary, BENEFICIARY);
        claim!(state.accepts_bids(before_end()));
        claim_eq!(state.escrowed_funds(), Ok(Amount::zero()));
    }

    /// A=1, B=2, C=3: each displaced leader is owed exactly their bid.
    #[concordium_test]
    fn test_bid_credits_displaced_leaders() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = fresh_state(&mut state_builder);

        claim_eq!(state.bid(ALICE, ccd(1), before_end()), Ok(None));
        claim_eq!(
            state.bid(BOB, ccd(2), before_end()),
            Ok(Some(Outbid {
                account: ALICE,
                amount: ccd(1),
            }))
        );
        claim_eq!(
            state.bid(CAROL, ccd(3), before_end()),
            Ok(Some(Outbid {
                account: BOB,
                amount: ccd(2),
            }))
        );

        claim_eq!(state.viewable_state.highest_bid, ccd(3));
        claim_eq!(state.viewable_state.highest_bidder, Some(CAROL));
        claim_eq!(state.pending_return(&ALICE), ccd(1));
        claim_eq!(state.pending_return(&BOB), ccd(2));
        claim_eq!(state.pending_return(&CAROL), Amount::zero());
        claim_eq!(state.viewable_state.outstanding_returns, ccd(3));
        claim_eq!(state.escrowed_funds(), Ok(ccd(6)));
    }

    #[concordium_test]
    fn test_bid_not_above_highest_is_rejected() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = fresh_state(&mut state_builder);

        claim_eq!(
            state.bid(ALICE, Amount::zero(), before_end()),
            Err(CustomContractError::BidNotHighEnough)
        );

        claim_eq!(state.bid(ALICE, ccd(2), before_end()), Ok(None));
        let before = state.viewable_state.clone();

        claim_eq!(
            state.bid(BOB, ccd(1), before_end()),
            Err(CustomContractError::BidNotHighEnough)
        );
        // Equal bids lose to the earlier one
        claim_eq!(
            state.bid(BOB, ccd(2), before_end()),
            Err(CustomContractError::BidNotHighEnough)
        );

        claim_eq!(state.viewable_state, before);
        claim_eq!(state.pending_return(&ALICE), Amount::zero());
        claim_eq!(state.pending_return(&BOB), Amount::zero());
    }

    #[concordium_test]
    fn test_bid_closes_at_end_time() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = fresh_state(&mut state_builder);

        let last_moment = Timestamp::from_timestamp_millis(end_time().timestamp_millis() - 1);
        claim_eq!(state.bid(ALICE, ccd(1), last_moment), Ok(None));
        claim_eq!(
            state.bid(BOB, ccd(2), end_time()),
            Err(CustomContractError::AuctionAlreadyEnded)
        );
        claim_eq!(state.viewable_state.highest_bidder, Some(ALICE));
    }

    #[concordium_test]
    fn test_outbid_leader_can_bid_again() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = fresh_state(&mut state_builder);

        claim!(state.bid(ALICE, ccd(1), before_end()).is_ok());
        claim!(state.bid(BOB, ccd(2), before_end()).is_ok());
        claim!(state.bid(ALICE, ccd(5), before_end()).is_ok());
        claim!(state.bid(BOB, ccd(8), before_end()).is_ok());

        // Pending returns accumulate over every superseded bid
        claim_eq!(state.pending_return(&ALICE), ccd(6));
        claim_eq!(state.pending_return(&BOB), ccd(2));
        claim_eq!(state.viewable_state.highest_bidder, Some(BOB));
        claim_eq!(state.escrowed_funds(), Ok(ccd(16)));
    }

    #[concordium_test]
    fn test_take_pending_return_debits_once() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = fresh_state(&mut state_builder);

        claim!(state.bid(ALICE, ccd(1), before_end()).is_ok());
        claim!(state.bid(BOB, ccd(2), before_end()).is_ok());

        claim_eq!(state.take_pending_return(&ALICE), Ok(ccd(1)));
        claim_eq!(state.take_pending_return(&ALICE), Ok(Amount::zero()));
        claim_eq!(state.viewable_state.outstanding_returns, Amount::zero());

        // The leader has nothing to withdraw
        claim_eq!(state.take_pending_return(&BOB), Ok(Amount::zero()));
        claim_eq!(state.viewable_state.highest_bid, ccd(2));
        claim_eq!(state.escrowed_funds(), Ok(ccd(2)));
    }

    #[concordium_test]
    fn test_credit_restores_failed_payout() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = fresh_state(&mut state_builder);

        claim!(state.bid(ALICE, ccd(4), before_end()).is_ok());
        claim!(state.bid(BOB, ccd(7), before_end()).is_ok());
        let before = state.viewable_state.clone();

        let owed = state.take_pending_return(&ALICE).expect_report("Debit should pass");
        claim_eq!(state.credit_pending_return(ALICE, owed), Ok(()));

        claim_eq!(state.viewable_state, before);
        claim_eq!(state.pending_return(&ALICE), ccd(4));
    }

    #[concordium_test]
    fn test_finalize() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = fresh_state(&mut state_builder);

        claim!(state.bid(ALICE, ccd(1), before_end()).is_ok());
        claim!(state.bid(BOB, ccd(3), before_end()).is_ok());

        claim_eq!(
            state.finalize(before_end()),
            Err(CustomContractError::AuctionNotYetEnded)
        );
        claim!(!state.is_ended());

        claim_eq!(
            state.finalize(end_time()),
            Ok(FinalBid {
                winner: Some(BOB),
                amount: ccd(3),
            })
        );
        claim!(state.is_ended());
        claim_eq!(
            state.finalize(after_end()),
            Err(CustomContractError::AuctionAlreadyEnded)
        );

        // Bids are refused, refunds stay claimable
        claim_eq!(
            state.bid(CAROL, ccd(10), after_end()),
            Err(CustomContractError::AuctionAlreadyEnded)
        );
        claim_eq!(state.escrowed_funds(), Ok(ccd(1)));
        claim_eq!(state.take_pending_return(&ALICE), Ok(ccd(1)));
        claim_eq!(state.escrowed_funds(), Ok(Amount::zero()));
    }

    #[concordium_test]
    fn test_finalize_without_bids() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = fresh_state(&mut state_builder);

        claim_eq!(
            state.finalize(after_end()),
            Ok(FinalBid {
                winner: None,
                amount: Amount::zero(),
            })
        );
        claim!(state.is_ended());
    }

    #[concordium_test]
    fn test_reopen_after_failed_payout() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = fresh_state(&mut state_builder);

        claim!(state.bid(ALICE, ccd(1), before_end()).is_ok());
        claim!(state.finalize(after_end()).is_ok());
        state.reopen();

        claim!(!state.is_ended());
        claim_eq!(state.escrowed_funds(), Ok(ccd(1)));
        claim!(state.finalize(after_end()).is_ok());
    }

    /// Replays a fixed mix of accepted bids, rejected bids and withdrawals and
    /// checks the ledger against the funds that actually moved after every step.
    #[concordium_test]
    fn test_funds_are_conserved() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = fresh_state(&mut state_builder);

        let bidders = [ALICE, BOB, CAROL];
        let mut deposited = 0u64;
        let mut withdrawn = 0u64;
        let mut previous_highest = Amount::zero();

        for step in 0..60u64 {
            let bidder = bidders[(step * 7 % 3) as usize];
            // Every fourth bid dips below the current highest bid
            let amount = if step % 4 == 3 {
                ccd(step)
            } else {
                ccd(step * 5 + 1)
            };

            match state.bid(bidder, amount, before_end()) {
                Ok(_) => deposited += amount.micro_ccd,
                Err(error) => claim_eq!(error, CustomContractError::BidNotHighEnough),
            }

            if step % 5 == 0 {
                let withdrawer = bidders[(step % 3) as usize];
                let paid = state
                    .take_pending_return(&withdrawer)
                    .expect_report("Withdrawal should pass");
                withdrawn += paid.micro_ccd;
            }

            claim!(state.viewable_state.highest_bid >= previous_highest);
            previous_highest = state.viewable_state.highest_bid;

            let owed: u64 = bidders
                .iter()
                .map(|account| state.pending_return(account).micro_ccd)
                .sum();
            claim_eq!(owed, state.viewable_state.outstanding_returns.micro_ccd);
            claim_eq!(state.escrowed_funds(), Ok(ccd(deposited - withdrawn)));
        }

        claim!(state.viewable_state.highest_bidder.is_some());
    }

    #[concordium_test]
    fn test_instances_are_independent() {
        let mut first_builder = TestStateBuilder::new();
        let mut second_builder = TestStateBuilder::new();
        let mut first = fresh_state(&mut first_builder);
        let mut second = fresh_state(&mut second_builder);

        claim!(first.bid(ALICE, ccd(5), before_end()).is_ok());
        claim!(first.bid(BOB, ccd(6), before_end()).is_ok());
        claim!(second.bid(ALICE, ccd(1), before_end()).is_ok());

        claim_eq!(first.pending_return(&ALICE), ccd(5));
        claim_eq!(second.pending_return(&ALICE), Amount::zero());
        claim_eq!(second.viewable_state.highest_bidder, Some(ALICE));
    }
}
