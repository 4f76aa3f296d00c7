use shared::{Bill, SplitMode};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BillValidationError {
    #[error("Bill name cannot be empty")]
    EmptyName,
    #[error("Bill name is too long ({0} characters)")]
    NameTooLong(usize),
    #[error("A bill needs at least one participant")]
    NoParticipants,
    #[error("Too many participants ({0})")]
    TooManyParticipants(usize),
    #[error("Participant name cannot be empty")]
    EmptyParticipantName,
    #[error("Participant '{0}' appears more than once")]
    DuplicateParticipant(String),
    #[error("Amount for {0} cannot be negative")]
    NegativeAmount(String),
    #[error("Amount for {0} is not a finite number")]
    NonFiniteAmount(String),
    #[error("Total amount is required when splitting equally")]
    MissingTotalAmount,
}

/// Limits enforced on incoming bills
#[derive(Debug, Clone, PartialEq)]
pub struct BillLimits {
    pub max_name_length: usize,
    pub max_participants: usize,
}

impl Default for BillLimits {
    fn default() -> Self {
        Self {
            max_name_length: 128,
            max_participants: 50,
        }
    }
}

fn check_amount(label: &str, amount: f64) -> Result<(), BillValidationError> {
    if !amount.is_finite() {
        return Err(BillValidationError::NonFiniteAmount(label.to_string()));
    }
    if amount < 0.0 {
        return Err(BillValidationError::NegativeAmount(label.to_string()));
    }
    Ok(())
}

/// Check a fully built bill before it is stored
///
/// Names are compared after trimming so "Bob" and "Bob " count as the same person.
pub fn validate_bill(bill: &Bill, limits: &BillLimits) -> Result<(), BillValidationError> {
    let name = bill.name.trim();
    if name.is_empty() {
        return Err(BillValidationError::EmptyName);
    }
    if name.chars().count() > limits.max_name_length {
        return Err(BillValidationError::NameTooLong(name.chars().count()));
    }

    if bill.participants.is_empty() {
        return Err(BillValidationError::NoParticipants);
    }
    if bill.participants.len() > limits.max_participants {
        return Err(BillValidationError::TooManyParticipants(bill.participants.len()));
    }

    let mut seen = HashSet::new();
    for participant in &bill.participants {
        let participant_name = participant.name.trim();
        if participant_name.is_empty() {
            return Err(BillValidationError::EmptyParticipantName);
        }
        if !seen.insert(participant_name) {
            return Err(BillValidationError::DuplicateParticipant(participant_name.to_string()));
        }
        if bill.split_mode == SplitMode::Individual {
            check_amount(participant_name, participant.paid())?;
        }
    }

    check_amount("the bill total", bill.total_amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Participant;

    fn bill(split_mode: SplitMode, participants: Vec<Participant>) -> Bill {
        Bill {
            id: "bill::1::abc".to_string(),
            name: "Lunch".to_string(),
            total_amount: 20.0,
            designated_payer: None,
            split_mode,
            participants,
            created_at: "2025-01-20T10:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_valid_bill_passes() {
        let bill = bill(SplitMode::Equal, vec![Participant::new("Alice"), Participant::new("Bob")]);
        assert_eq!(validate_bill(&bill, &BillLimits::default()), Ok(()));
    }

    #[test]
    fn test_rejects_empty_participant_list() {
        let bill = bill(SplitMode::Equal, Vec::new());
        assert_eq!(
            validate_bill(&bill, &BillLimits::default()),
            Err(BillValidationError::NoParticipants)
        );
    }

    #[test]
    fn test_rejects_duplicate_names_after_trim() {
        let bill = bill(SplitMode::Equal, vec![Participant::new("Bob"), Participant::new(" Bob ")]);
        assert_eq!(
            validate_bill(&bill, &BillLimits::default()),
            Err(BillValidationError::DuplicateParticipant("Bob".to_string()))
        );
    }

    #[test]
    fn test_rejects_negative_paid_amount_in_individual_mode() {
        let bill = bill(
            SplitMode::Individual,
            vec![Participant::with_paid_amount("Alice", -1.0)],
        );
        assert_eq!(
            validate_bill(&bill, &BillLimits::default()),
            Err(BillValidationError::NegativeAmount("Alice".to_string()))
        );
    }

    #[test]
    fn test_equal_mode_ignores_paid_amounts() {
        let bill = bill(
            SplitMode::Equal,
            vec![Participant::with_paid_amount("Alice", -1.0)],
        );
        assert_eq!(validate_bill(&bill, &BillLimits::default()), Ok(()));
    }

    #[test]
    fn test_rejects_non_finite_total() {
        let mut bill = bill(SplitMode::Equal, vec![Participant::new("Alice")]);
        bill.total_amount = f64::NAN;
        assert!(matches!(
            validate_bill(&bill, &BillLimits::default()),
            Err(BillValidationError::NonFiniteAmount(_))
        ));
    }
}
