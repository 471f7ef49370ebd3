use super::*;

/// Init function that creates a new auction.
///
/// Bidding closes `bidding_duration` seconds after the slot time of the init
/// transaction.
///
/// It rejects if:
/// - It fails to parse `InitParameter`.
/// - The bidding duration is zero or the end time does not fit a timestamp.
#[init(contract = "SimpleAuction", parameter = "InitParameter")]
fn init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    let parameter: InitParameter = ctx.parameter_cursor().get()?;
    let end_time = auction_end_time(ctx.metadata().slot_time(), parameter.bidding_duration)?;
    Ok(State::new(parameter.beneficiary, end_time, state_builder))
}

/// Receive function in which accounts can bid before the auction end time.
/// The attached amount is the bid and stays with the contract.
///
/// It rejects if:
/// - The sender is a contract.
/// - The auction was finalized or the end time was reached.
/// - The amount does not exceed the highest bid.
#[receive(
    contract = "SimpleAuction",
    name = "bid",
    mutable,
    enable_logger,
    payable
)]
fn bid<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let bidder = sender_account(ctx)?;

    host.state_mut().bid(bidder, amount, ctx.metadata().slot_time())?;

    // Event for Bidding.
    logger.log(&CustomEvent::HighestBidIncreased(HighestBidIncreasedEvent {
        bidder,
        amount,
    }))?;

    Ok(())
}

/// Pays the sender everything they are owed for out-bid bids and returns the
/// amount. Works before and after finalization; nothing owed is not an error.
///
/// It rejects if:
/// - The sender is a contract.
/// - The transfer fails. The refund then stays claimable.
#[receive(
    contract = "SimpleAuction",
    name = "withdraw",
    mutable,
    enable_logger,
    return_value = "Amount"
)]
fn withdraw<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<Amount> {
    let account = sender_account(ctx)?;

    // Debit has to land before the transfer
    let amount = host.state_mut().take_pending_return(&account)?;
    if amount == Amount::zero() {
        return Ok(amount);
    }

    if let Err(error) = host.invoke_transfer(&account, amount) {
        host.state_mut().credit_pending_return(account, amount)?;
        return Err(error.into());
    }

    // Event for Withdrawal.
    logger.log(&CustomEvent::Withdrawal(WithdrawalEvent { account, amount }))?;

    Ok(amount)
}

/// Receive function used to finalize the auction, releasing the highest bid to
/// the beneficiary. Anyone may call it once the end time is reached.
///
/// It rejects if:
/// - The end time was not reached yet.
/// - The auction was already finalized.
/// - The transfer to the beneficiary fails. The auction then stays open.
#[receive(contract = "SimpleAuction", name = "finalize", mutable, enable_logger)]
fn finalize<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let final_bid = host.state_mut().finalize(ctx.metadata().slot_time())?;

    if final_bid.amount > Amount::zero() {
        let beneficiary = host.state().viewable_state.beneficiary;
        if let Err(error) = host.invoke_transfer(&beneficiary, final_bid.amount) {
            host.state_mut().reopen();
            return Err(error.into());
        }
    }

    // Event for Finalize.
    logger.log(&CustomEvent::AuctionEnded(AuctionEndedEvent {
        winner: final_bid.winner,
        amount: final_bid.amount,
    }))?;

    Ok(())
}

/// View function that returns the contents of the state except the map of
/// pending returns.
#[receive(
    contract = "SimpleAuction",
    name = "view",
    return_value = "ViewableState"
)]
fn view<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ViewableState> {
    Ok(host.state().viewable_state.clone())
}

#[receive(contract = "SimpleAuction", name = "highestBid", return_value = "Amount")]
fn view_highest_bid<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Amount> {
    Ok(host.state().viewable_state.highest_bid)
}

#[receive(
    contract = "SimpleAuction",
    name = "highestBidder",
    return_value = "Option<AccountAddress>"
)]
fn view_highest_bidder<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Option<AccountAddress>> {
    Ok(host.state().viewable_state.highest_bidder)
}

#[receive(
    contract = "SimpleAuction",
    name = "auctionEndTime",
    return_value = "Timestamp"
)]
fn view_auction_end_time<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Timestamp> {
    Ok(host.state().viewable_state.auction_end_time)
}

#[receive(contract = "SimpleAuction", name = "ended", return_value = "bool")]
fn view_ended<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<bool> {
    Ok(host.state().is_ended())
}

#[receive(
    contract = "SimpleAuction",
    name = "beneficiary",
    return_value = "AccountAddress"
)]
fn view_beneficiary<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<AccountAddress> {
    Ok(host.state().viewable_state.beneficiary)
}

/// View function that returns how much the given account can withdraw.
/// Takes the account address as a parameter.
#[receive(
    contract = "SimpleAuction",
    name = "pendingReturn",
    parameter = "AccountAddress",
    return_value = "Amount"
)]
fn view_pending_return<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Amount> {
    let account: AccountAddress = ctx.parameter_cursor().get()?;
    Ok(host.state().pending_return(&account))
}

/// View function that returns the amount the contract should be holding: the
/// highest bid until finalization plus every refund not yet withdrawn.
#[receive(
    contract = "SimpleAuction",
    name = "escrowedFunds",
    return_value = "Amount"
)]
fn view_escrowed_funds<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Amount> {
    host.state().escrowed_funds()
}

// Refunds are paid with account transfers, so contracts cannot take part.
fn sender_account(ctx: &impl HasReceiveContext) -> ContractResult<AccountAddress> {
    match ctx.sender() {
        Address::Account(account_address) => Ok(account_address),
        Address::Contract(_) => Err(CustomContractError::OnlyAccountAddress),
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const AUCTION_START: u64 = 1_000;
    const BIDDING_DURATION: u64 = 300;
    const BENEFICIARY: AccountAddress = AccountAddress([9u8; 32]);
    const ALICE: AccountAddress = AccountAddress([1u8; 32]);
    const BOB: AccountAddress = AccountAddress([2u8; 32]);
    const CAROL: AccountAddress = AccountAddress([3u8; 32]);
    const OTHER_CONTRACT: ContractAddress = ContractAddress {
        index: 7,
        subindex: 0,
    };

    fn auction_end() -> u64 {
        AUCTION_START + BIDDING_DURATION * 1000
    }

    fn ccd(micro_ccd: u64) -> Amount {
        Amount::from_micro_ccd(micro_ccd)
    }

    fn default_host() -> TestHost<State<TestStateApi>> {
        let params = to_bytes(&InitParameter {
            beneficiary: BENEFICIARY,
            bidding_duration: BIDDING_DURATION,
        });
        let mut ctx = TestInitContext::empty();
        ctx.set_parameter(&params)
            .set_metadata_slot_time(Timestamp::from_timestamp_millis(AUCTION_START));
        let mut state_builder = TestStateBuilder::new();

        // Call the init method.
        let state = init(&ctx, &mut state_builder).expect_report("Failed during init_SimpleAuction");

        TestHost::new(state, state_builder)
    }

    fn new_ctx<'a>(sender: Address, slot_time: u64) -> TestReceiveContext<'a> {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(sender)
            .set_metadata_slot_time(Timestamp::from_timestamp_millis(slot_time));
        ctx
    }

    /// Calls `bid` the way the chain does: the attached amount is added to the
    /// contract balance first and taken back if the call is rejected.
    fn place_bid(
        host: &mut TestHost<State<TestStateApi>>,
        logger: &mut TestLogger,
        bidder: AccountAddress,
        amount: Amount,
        slot_time: u64,
    ) -> ContractResult<()> {
        let ctx = new_ctx(Address::Account(bidder), slot_time);
        let balance = host.self_balance();
        host.set_self_balance(balance + amount);

        let result = bid(&ctx, host, amount, logger);
        if result.is_err() {
            host.set_self_balance(balance);
        }
        result
    }

    fn call_withdraw(
        host: &mut TestHost<State<TestStateApi>>,
        logger: &mut TestLogger,
        account: AccountAddress,
    ) -> ContractResult<Amount> {
        let ctx = new_ctx(Address::Account(account), AUCTION_START);
        withdraw(&ctx, host, logger)
    }

    fn call_finalize(
        host: &mut TestHost<State<TestStateApi>>,
        logger: &mut TestLogger,
        slot_time: u64,
    ) -> ContractResult<()> {
        let ctx = new_ctx(Address::Account(CAROL), slot_time);
        finalize(&ctx, host, logger)
    }

    fn claim_escrow_matches_balance(host: &TestHost<State<TestStateApi>>) {
        claim_eq!(
            host.state().escrowed_funds(),
            Ok(host.self_balance()),
            "Ledger and contract balance diverged"
        );
    }

    #[concordium_test]
    /// Test that the smart-contract initialization sets the state correctly
    /// (no bids, open state, end time counted from the init slot time).
    fn test_init() {
        let host = default_host();
        let state = host.state();

        claim_eq!(state.viewable_state.auction_state, AuctionState::Open);
        claim_eq!(state.viewable_state.beneficiary, BENEFICIARY);
        claim_eq!(
            state.viewable_state.auction_end_time,
            Timestamp::from_timestamp_millis(auction_end())
        );
        claim_eq!(state.viewable_state.highest_bid, Amount::zero());
        claim_eq!(state.viewable_state.highest_bidder, None);
    }

    #[concordium_test]
    fn test_init_rejects_zero_duration() {
        let params = to_bytes(&InitParameter {
            beneficiary: BENEFICIARY,
            bidding_duration: 0,
        });
        let mut ctx = TestInitContext::empty();
        ctx.set_parameter(&params)
            .set_metadata_slot_time(Timestamp::from_timestamp_millis(AUCTION_START));
        let mut state_builder = TestStateBuilder::new();

        claim!(
            init(&ctx, &mut state_builder).is_err(),
            "Init should fail for an empty bidding window"
        );
    }

    #[concordium_test]
    /// A bids 1, B bids 2, A withdraws the out-bid 1.
    fn test_outbid_account_withdraws_refund() {
        let mut host = default_host();
        let mut logger = TestLogger::init();

        claim_eq!(place_bid(&mut host, &mut logger, ALICE, ccd(1), AUCTION_START), Ok(()));
        claim_eq!(host.state().viewable_state.highest_bid, ccd(1));
        claim_eq!(host.state().viewable_state.highest_bidder, Some(ALICE));

        claim_eq!(place_bid(&mut host, &mut logger, BOB, ccd(2), AUCTION_START), Ok(()));
        claim_eq!(host.state().viewable_state.highest_bid, ccd(2));
        claim_eq!(host.state().viewable_state.highest_bidder, Some(BOB));
        claim_eq!(host.state().pending_return(&ALICE), ccd(1));
        claim_escrow_matches_balance(&host);

        claim_eq!(call_withdraw(&mut host, &mut logger, ALICE), Ok(ccd(1)));
        claim!(host.transfer_occurred(&ALICE, ccd(1)));
        claim_eq!(host.state().pending_return(&ALICE), Amount::zero());
        claim_escrow_matches_balance(&host);

        // Nothing left for a second withdrawal
        claim_eq!(call_withdraw(&mut host, &mut logger, ALICE), Ok(Amount::zero()));
        claim_eq!(host.get_transfers().len(), 1, "Only one refund should be paid");
    }

    #[concordium_test]
    /// A bids 2, then B's bid of 1 is rejected and nothing changes.
    fn test_lower_bid_is_rejected() {
        let mut host = default_host();
        let mut logger = TestLogger::init();

        claim_eq!(place_bid(&mut host, &mut logger, ALICE, ccd(2), AUCTION_START), Ok(()));
        let before = host.state().viewable_state.clone();

        claim_eq!(
            place_bid(&mut host, &mut logger, BOB, ccd(1), AUCTION_START),
            Err(CustomContractError::BidNotHighEnough)
        );
        claim_eq!(
            place_bid(&mut host, &mut logger, BOB, ccd(2), AUCTION_START),
            Err(CustomContractError::BidNotHighEnough)
        );

        claim_eq!(host.state().viewable_state, before);
        claim_eq!(host.state().pending_return(&BOB), Amount::zero());
        claim_eq!(logger.logs.len(), 1, "Only the accepted bid should be logged");
        claim_escrow_matches_balance(&host);
    }

    #[concordium_test]
    fn test_bid_zero_is_rejected() {
        let mut host = default_host();
        let mut logger = TestLogger::init();

        claim_eq!(
            place_bid(&mut host, &mut logger, ALICE, Amount::zero(), AUCTION_START),
            Err(CustomContractError::BidNotHighEnough)
        );
        claim_eq!(host.state().viewable_state.highest_bidder, None);
    }

    #[concordium_test]
    fn test_bid_from_contract_is_rejected() {
        let mut host = default_host();
        let mut logger = TestLogger::init();
        let ctx = new_ctx(Address::Contract(OTHER_CONTRACT), AUCTION_START);

        claim_eq!(
            bid(&ctx, &mut host, ccd(5), &mut logger),
            Err(CustomContractError::OnlyAccountAddress)
        );
        claim_eq!(
            withdraw(&ctx, &mut host, &mut logger),
            Err(CustomContractError::OnlyAccountAddress)
        );
    }

    #[concordium_test]
    /// Nobody bids; finalizing after the end time pays nothing and ends the
    /// auction.
    fn test_finalize_without_bids() {
        let mut host = default_host();
        let mut logger = TestLogger::init();

        claim_eq!(call_finalize(&mut host, &mut logger, auction_end()), Ok(()));
        claim!(host.state().is_ended());
        claim!(host.get_transfers().is_empty(), "Nothing should be transferred");
        claim_eq!(
            logger.logs,
            vec![to_bytes(&CustomEvent::AuctionEnded(AuctionEndedEvent {
                winner: None,
                amount: Amount::zero(),
            }))]
        );
    }

    #[concordium_test]
    /// A bids 1; finalizing early fails, finalizing after the end time pays the
    /// beneficiary.
    fn test_finalize_before_and_after_end_time() {
        let mut host = default_host();
        let mut logger = TestLogger::init();

        claim_eq!(place_bid(&mut host, &mut logger, ALICE, ccd(1), AUCTION_START), Ok(()));

        claim_eq!(
            call_finalize(&mut host, &mut logger, auction_end() - 1),
            Err(CustomContractError::AuctionNotYetEnded)
        );
        claim!(!host.state().is_ended());
        claim!(host.get_transfers().is_empty());

        claim_eq!(call_finalize(&mut host, &mut logger, auction_end() + 1), Ok(()));
        claim!(host.state().is_ended());
        claim!(host.transfer_occurred(&BENEFICIARY, ccd(1)));
        claim_escrow_matches_balance(&host);
    }

    #[concordium_test]
    fn test_finalize_twice_fails() {
        let mut host = default_host();
        let mut logger = TestLogger::init();

        claim_eq!(place_bid(&mut host, &mut logger, ALICE, ccd(3), AUCTION_START), Ok(()));
        claim_eq!(call_finalize(&mut host, &mut logger, auction_end()), Ok(()));
        claim_eq!(
            call_finalize(&mut host, &mut logger, auction_end() + 10),
            Err(CustomContractError::AuctionAlreadyEnded)
        );
        claim_eq!(
            host.get_transfers(),
            vec![(BENEFICIARY, ccd(3))],
            "The winning bid should be paid once"
        );
    }

    #[concordium_test]
    fn test_bid_after_end_time_fails() {
        let mut host = default_host();
        let mut logger = TestLogger::init();

        // Not finalized yet, the end time alone closes bidding
        claim_eq!(
            place_bid(&mut host, &mut logger, ALICE, ccd(1), auction_end()),
            Err(CustomContractError::AuctionAlreadyEnded)
        );

        claim_eq!(call_finalize(&mut host, &mut logger, auction_end()), Ok(()));
        claim_eq!(
            place_bid(&mut host, &mut logger, ALICE, ccd(1), auction_end() + 1),
            Err(CustomContractError::AuctionAlreadyEnded)
        );
        claim_eq!(host.state().viewable_state.highest_bidder, None);
    }

    #[concordium_test]
    /// A bids 1, B bids 2, C bids 3. The beneficiary receives 3 on finalization,
    /// A and B withdraw their bids afterwards.
    fn test_full_auction() {
        let mut host = default_host();
        let mut logger = TestLogger::init();

        claim_eq!(place_bid(&mut host, &mut logger, ALICE, ccd(1), AUCTION_START), Ok(()));
        claim_eq!(place_bid(&mut host, &mut logger, BOB, ccd(2), AUCTION_START + 1), Ok(()));
        claim_eq!(place_bid(&mut host, &mut logger, CAROL, ccd(3), AUCTION_START + 2), Ok(()));

        claim_eq!(host.state().pending_return(&ALICE), ccd(1));
        claim_eq!(host.state().pending_return(&BOB), ccd(2));
        claim_escrow_matches_balance(&host);

        claim_eq!(call_finalize(&mut host, &mut logger, auction_end()), Ok(()));
        claim!(host.transfer_occurred(&BENEFICIARY, ccd(3)));
        claim_eq!(host.state().viewable_state.highest_bidder, Some(CAROL));
        claim_escrow_matches_balance(&host);

        claim_eq!(call_withdraw(&mut host, &mut logger, BOB), Ok(ccd(2)));
        claim_eq!(call_withdraw(&mut host, &mut logger, ALICE), Ok(ccd(1)));
        claim_eq!(call_withdraw(&mut host, &mut logger, CAROL), Ok(Amount::zero()));
        claim!(host.transfer_occurred(&BOB, ccd(2)));
        claim!(host.transfer_occurred(&ALICE, ccd(1)));
        claim_eq!(host.self_balance(), Amount::zero());
        claim_escrow_matches_balance(&host);
    }

    #[concordium_test]
    fn test_failed_refund_stays_claimable() {
        let mut host = default_host();
        let mut logger = TestLogger::init();

        claim_eq!(place_bid(&mut host, &mut logger, ALICE, ccd(1), AUCTION_START), Ok(()));
        claim_eq!(place_bid(&mut host, &mut logger, BOB, ccd(2), AUCTION_START), Ok(()));
        let before = host.state().viewable_state.clone();

        // The contract cannot cover the refund, so the transfer fails
        host.set_self_balance(Amount::zero());
        claim_eq!(
            call_withdraw(&mut host, &mut logger, ALICE),
            Err(CustomContractError::InvokeTransferError)
        );
        claim_eq!(host.state().pending_return(&ALICE), ccd(1));
        claim_eq!(host.state().viewable_state, before);
        claim!(host.get_transfers().is_empty());

        host.set_self_balance(ccd(3));
        claim_eq!(call_withdraw(&mut host, &mut logger, ALICE), Ok(ccd(1)));
        claim!(host.transfer_occurred(&ALICE, ccd(1)));
    }

    #[concordium_test]
    fn test_failed_payout_keeps_auction_open() {
        let mut host = default_host();
        let mut logger = TestLogger::init();

        claim_eq!(place_bid(&mut host, &mut logger, ALICE, ccd(4), AUCTION_START), Ok(()));

        host.set_self_balance(Amount::zero());
        claim_eq!(
            call_finalize(&mut host, &mut logger, auction_end()),
            Err(CustomContractError::InvokeTransferError)
        );
        claim!(!host.state().is_ended());
        claim_eq!(logger.logs.len(), 1, "Only the bid should be logged");

        host.set_self_balance(ccd(4));
        claim_eq!(call_finalize(&mut host, &mut logger, auction_end()), Ok(()));
        claim!(host.transfer_occurred(&BENEFICIARY, ccd(4)));
    }

    #[concordium_test]
    fn test_events_are_logged() {
        let mut host = default_host();
        let mut logger = TestLogger::init();

        claim_eq!(place_bid(&mut host, &mut logger, ALICE, ccd(10), AUCTION_START), Ok(()));
        claim_eq!(place_bid(&mut host, &mut logger, BOB, ccd(20), AUCTION_START), Ok(()));
        claim_eq!(call_withdraw(&mut host, &mut logger, ALICE), Ok(ccd(10)));
        claim_eq!(call_finalize(&mut host, &mut logger, auction_end()), Ok(()));

        let events: Vec<CustomEvent> = logger
            .logs
            .iter()
            .map(|log| from_bytes(log).expect_report("Event should parse"))
            .collect();
        claim_eq!(
            events,
            vec![
                CustomEvent::HighestBidIncreased(HighestBidIncreasedEvent {
                    bidder: ALICE,
                    amount: ccd(10),
                }),
                CustomEvent::HighestBidIncreased(HighestBidIncreasedEvent {
                    bidder: BOB,
                    amount: ccd(20),
                }),
                CustomEvent::Withdrawal(WithdrawalEvent {
                    account: ALICE,
                    amount: ccd(10),
                }),
                CustomEvent::AuctionEnded(AuctionEndedEvent {
                    winner: Some(BOB),
                    amount: ccd(20),
                }),
            ]
        );
    }

    #[concordium_test]
    fn test_views() {
        let mut host = default_host();
        let mut logger = TestLogger::init();

        claim_eq!(place_bid(&mut host, &mut logger, ALICE, ccd(5), AUCTION_START), Ok(()));
        claim_eq!(place_bid(&mut host, &mut logger, BOB, ccd(6), AUCTION_START), Ok(()));

        let ctx = new_ctx(Address::Account(CAROL), AUCTION_START);
        claim_eq!(view_highest_bid(&ctx, &host), Ok(ccd(6)));
        claim_eq!(view_highest_bidder(&ctx, &host), Ok(Some(BOB)));
        claim_eq!(
            view_auction_end_time(&ctx, &host),
            Ok(Timestamp::from_timestamp_millis(auction_end()))
        );
        claim_eq!(view_ended(&ctx, &host), Ok(false));
        claim_eq!(view_beneficiary(&ctx, &host), Ok(BENEFICIARY));
        claim_eq!(view_escrowed_funds(&ctx, &host), Ok(ccd(11)));
        claim_eq!(
            view(&ctx, &host).map(|state| state.highest_bidder),
            Ok(Some(BOB))
        );

        let params = to_bytes(&ALICE);
        let mut ctx = new_ctx(Address::Account(CAROL), AUCTION_START);
        ctx.set_parameter(&params);
        claim_eq!(view_pending_return(&ctx, &host), Ok(ccd(5)));

        claim_eq!(call_finalize(&mut host, &mut logger, auction_end()), Ok(()));
        let ctx = new_ctx(Address::Account(CAROL), auction_end());
        claim_eq!(view_ended(&ctx, &host), Ok(true));
        claim_eq!(view_escrowed_funds(&ctx, &host), Ok(ccd(5)));
    }

    #[concordium_test]
    fn test_auctions_do_not_share_state() {
        let mut first = default_host();
        let mut second = default_host();
        let mut logger = TestLogger::init();

        claim_eq!(place_bid(&mut first, &mut logger, ALICE, ccd(1), AUCTION_START), Ok(()));
        claim_eq!(place_bid(&mut first, &mut logger, BOB, ccd(2), AUCTION_START), Ok(()));

        claim_eq!(second.state().viewable_state.highest_bidder, None);
        claim_eq!(call_withdraw(&mut second, &mut logger, ALICE), Ok(Amount::zero()));
        claim_eq!(first.state().pending_return(&ALICE), ccd(1));
    }
}
