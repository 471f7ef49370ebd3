use super::*;

/// Adds two amounts, failing instead of wrapping.
pub fn checked_add(lhs: Amount, rhs: Amount) -> Result<Amount, CustomContractError> {
    lhs.micro_ccd
        .checked_add(rhs.micro_ccd)
        .map(Amount::from_micro_ccd)
        .ok_or(CustomContractError::AmountOverflow)
}

/// Subtracts `rhs` from `lhs`, failing if the result would be negative.
pub fn checked_sub(lhs: Amount, rhs: Amount) -> Result<Amount, CustomContractError> {
    lhs.micro_ccd
        .checked_sub(rhs.micro_ccd)
        .map(Amount::from_micro_ccd)
        .ok_or(CustomContractError::AmountOverflow)
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    #[concordium_test]
    fn test_checked_add() {
        claim_eq!(
            checked_add(Amount::from_ccd(2), Amount::from_micro_ccd(5)),
            Ok(Amount::from_micro_ccd(2_000_005))
        );
        claim_eq!(
            checked_add(Amount::from_micro_ccd(u64::MAX), Amount::from_micro_ccd(1)),
            Err(CustomContractError::AmountOverflow)
        );
    }

    #[concordium_test]
    fn test_checked_sub() {
        claim_eq!(
            checked_sub(Amount::from_micro_ccd(7), Amount::from_micro_ccd(7)),
            Ok(Amount::zero())
        );
        claim_eq!(
            checked_sub(Amount::from_micro_ccd(1), Amount::from_micro_ccd(2)),
            Err(CustomContractError::AmountOverflow)
        );
    }
}
