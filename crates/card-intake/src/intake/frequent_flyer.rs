//! Frequent flyer number grammar.
//!
//! A number is eight characters: a six digit member number, one separator
//! slot, then a single uppercase scheme identifier. The separator position is
//! fixed but its character is not checked, so `012345-A` and `0123450A` are
//! both well formed.

/// Scheme identifiers accepted in the final position.
pub const SCHEME_IDENTIFIERS: [char; 3] = ['A', 'Q', 'Y'];

const EXPECTED_TOTAL_LENGTH: usize = 8;
const MEMBER_NUMBER_LENGTH: usize = 6;

/// Raised when a caller breaks the validator's calling contract.
///
/// This is a programming error in the caller, never an invalid number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractViolation {
    #[error("required argument `{argument}` was absent")]
    MissingArgument { argument: &'static str },
}

/// Seam for the frequent flyer check so rules can run against a stub.
pub trait FrequentFlyerNumberValidator: Send + Sync {
    /// `Ok(false)` for a malformed number, `Err` when no candidate was supplied.
    fn is_valid(&self, candidate: Option<&str>) -> Result<bool, ContractViolation>;
}

/// Grammar backed validator used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemeFrequentFlyerValidator;

impl FrequentFlyerNumberValidator for SchemeFrequentFlyerValidator {
    fn is_valid(&self, candidate: Option<&str>) -> Result<bool, ContractViolation> {
        let candidate = candidate.ok_or(ContractViolation::MissingArgument {
            argument: "frequent_flyer_number",
        })?;
        Ok(is_valid_frequent_flyer_number(candidate))
    }
}

/// True for six ASCII digits, any separator character, then one of [`SCHEME_IDENTIFIERS`].
pub fn is_valid_frequent_flyer_number(candidate: &str) -> bool {
    if candidate.chars().count() != EXPECTED_TOTAL_LENGTH {
        return false;
    }

    let member_number_ok = candidate
        .chars()
        .take(MEMBER_NUMBER_LENGTH)
        .all(|c| c.is_ascii_digit());
    if !member_number_ok {
        return false;
    }

    candidate
        .chars()
        .last()
        .is_some_and(|scheme| SCHEME_IDENTIFIERS.contains(&scheme))
}
