//! Bill form domain logic for the bill splitter.
//!
//! This module contains all business logic related to the bill creation form:
//! amount parsing, participant list editing rules, form validation and turning
//! raw form input into a [`CreateBillRequest`]. The UI should only handle
//! presentation concerns.

use std::collections::HashSet;

use shared::{
    BillFormConfig, BillFormError, BillFormInput, BillFormValidation, CreateBillRequest,
    Participant, ParticipantFormInput, SplitMode,
};

/// Bill form service that handles all form-related business logic
#[derive(Clone)]
pub struct BillFormService {
    config: BillFormConfig,
}

impl Default for BillFormService {
    fn default() -> Self {
        Self::new()
    }
}

impl BillFormService {
    pub fn new() -> Self {
        Self {
            config: BillFormConfig::default(),
        }
    }

    pub fn with_config(config: BillFormConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BillFormConfig {
        &self.config
    }

    /// Create an empty form, as shown when "Create New" is pressed
    pub fn create_form_input() -> BillFormInput {
        BillFormInput::default()
    }

    /// Clean and parse amount input string
    pub fn clean_and_parse_amount(&self, amount_input: &str) -> Result<f64, String> {
        // Remove currency symbols, spaces and thousands separators
        let cleaned = amount_input
            .trim()
            .replace(&self.config.currency_symbol, "")
            .replace(',', "")
            .replace(' ', "");

        if cleaned.is_empty() {
            return Err("Empty amount after cleaning".to_string());
        }

        let amount = cleaned
            .parse::<f64>()
            .map_err(|e| format!("Invalid number format: {}", e))?;

        if !amount.is_finite() {
            return Err("Amount must be a finite number".to_string());
        }

        Ok(amount)
    }

    /// Check a participant name before adding it to the form
    ///
    /// Returns the trimmed name to add.
    pub fn can_add_participant(
        &self,
        existing: &[ParticipantFormInput],
        candidate: &str,
    ) -> Result<String, BillFormError> {
        let name = candidate.trim();
        if name.is_empty() {
            return Err(BillFormError::EmptyParticipantName);
        }
        if existing.len() >= self.config.max_participants {
            return Err(BillFormError::TooManyParticipants(existing.len() + 1));
        }
        if existing.iter().any(|p| p.name.trim() == name) {
            return Err(BillFormError::DuplicateParticipant(name.to_string()));
        }
        Ok(name.to_string())
    }

    /// Validate the bill creation form input
    pub fn validate_bill_form(&self, input: &BillFormInput) -> BillFormValidation {
        let mut errors = Vec::new();
        let mut suggestions = Vec::new();

        let name = input.name.trim();
        if name.is_empty() {
            errors.push(BillFormError::EmptyName);
            suggestions.push("Try: Dinner, Trip, Groceries, etc.".to_string());
        } else if name.chars().count() > self.config.max_name_length {
            errors.push(BillFormError::NameTooLong(name.chars().count()));
        }

        self.validate_participants(&input.participants, &mut errors, &mut suggestions);

        let cleaned_total = match input.split_mode {
            SplitMode::Equal => self.validate_total(&input.total_amount_input, &mut errors, &mut suggestions),
            SplitMode::Individual => self.validate_paid_amounts(&input.participants, &mut errors),
        };

        BillFormValidation {
            is_valid: errors.is_empty(),
            errors,
            cleaned_total,
            suggestions,
        }
    }

    fn validate_participants(
        &self,
        participants: &[ParticipantFormInput],
        errors: &mut Vec<BillFormError>,
        suggestions: &mut Vec<String>,
    ) {
        if participants.is_empty() {
            errors.push(BillFormError::NoParticipants);
            suggestions.push("Add everyone who shared the bill, including yourself".to_string());
            return;
        }
        if participants.len() > self.config.max_participants {
            errors.push(BillFormError::TooManyParticipants(participants.len()));
        }

        let mut seen = HashSet::new();
        for participant in participants {
            let name = participant.name.trim();
            if name.is_empty() {
                errors.push(BillFormError::EmptyParticipantName);
            } else if !seen.insert(name) {
                errors.push(BillFormError::DuplicateParticipant(name.to_string()));
            }
        }
    }

    fn validate_total(
        &self,
        total_input: &str,
        errors: &mut Vec<BillFormError>,
        suggestions: &mut Vec<String>,
    ) -> Option<f64> {
        if total_input.trim().is_empty() {
            errors.push(BillFormError::EmptyAmount);
            suggestions.push("Enter the bill total like 45.00".to_string());
            return None;
        }

        match self.clean_and_parse_amount(total_input) {
            Ok(amount) if amount < 0.0 => {
                errors.push(BillFormError::NegativeAmount);
                None
            }
            Ok(amount) if amount > self.config.max_amount => {
                errors.push(BillFormError::AmountTooLarge(self.config.max_amount));
                None
            }
            Ok(amount) => Some(amount),
            Err(parse_error) => {
                errors.push(BillFormError::InvalidAmountFormat(parse_error));
                suggestions.push("Enter a valid number like 45.00 or 12".to_string());
                None
            }
        }
    }

    /// Individual mode: blank paid amounts count as zero
    fn validate_paid_amounts(
        &self,
        participants: &[ParticipantFormInput],
        errors: &mut Vec<BillFormError>,
    ) -> Option<f64> {
        let mut total = 0.0;
        let mut all_valid = true;

        for participant in participants {
            match self.parse_paid_amount(&participant.paid_amount_input) {
                Ok(amount) => total += amount,
                Err(reason) => {
                    all_valid = false;
                    errors.push(BillFormError::InvalidPaidAmount {
                        participant: participant.name.trim().to_string(),
                        reason,
                    });
                }
            }
        }

        if all_valid && total > self.config.max_amount {
            errors.push(BillFormError::AmountTooLarge(self.config.max_amount));
            return None;
        }

        all_valid.then_some(total)
    }

    fn parse_paid_amount(&self, input: &str) -> Result<f64, String> {
        if input.trim().is_empty() {
            return Ok(0.0);
        }
        let amount = self.clean_and_parse_amount(input)?;
        if amount < 0.0 {
            return Err("Paid amount cannot be negative".to_string());
        }
        Ok(amount)
    }

    /// Turn valid form input into a create request
    pub fn to_create_bill_request(&self, input: &BillFormInput) -> Result<CreateBillRequest, Vec<BillFormError>> {
        let validation = self.validate_bill_form(input);
        if !validation.is_valid {
            return Err(validation.errors);
        }

        let participants = input
            .participants
            .iter()
            .map(|p| match input.split_mode {
                SplitMode::Equal => Participant::new(p.name.trim()),
                SplitMode::Individual => Participant {
                    name: p.name.trim().to_string(),
                    paid_amount: self.parse_paid_amount(&p.paid_amount_input).ok(),
                },
            })
            .collect();

        let designated_payer = match input.designated_payer.trim() {
            "" => None,
            payer => Some(payer.to_string()),
        };

        Ok(CreateBillRequest {
            name: input.name.trim().to_string(),
            split_mode: input.split_mode,
            total_amount: match input.split_mode {
                SplitMode::Equal => validation.cleaned_total,
                SplitMode::Individual => None,
            },
            designated_payer,
            participants,
        })
    }

    /// Format amount for display
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{}{:.2}", self.config.currency_symbol, amount)
    }

    /// Get user-friendly error message for validation error
    pub fn get_error_message(&self, error: &BillFormError) -> String {
        match error {
            BillFormError::EmptyName => "Please enter an event name".to_string(),
            BillFormError::NameTooLong(len) => {
                format!("Event name is too long ({} characters). Maximum is {}.", len, self.config.max_name_length)
            }
            BillFormError::EmptyAmount => "Please enter the total amount".to_string(),
            BillFormError::InvalidAmountFormat(msg) => {
                format!("Please enter a valid amount (like 45 or 45.00): {}", msg)
            }
            BillFormError::NegativeAmount => "Amount cannot be negative".to_string(),
            BillFormError::AmountTooLarge(max) => {
                format!("Amount is too large. Maximum is {}", self.format_amount(*max))
            }
            BillFormError::NoParticipants => "Add at least one participant".to_string(),
            BillFormError::TooManyParticipants(count) => {
                format!("Too many participants ({}). Maximum is {}.", count, self.config.max_participants)
            }
            BillFormError::EmptyParticipantName => "Participant name cannot be empty".to_string(),
            BillFormError::DuplicateParticipant(name) => format!("{} is already a participant", name),
            BillFormError::InvalidPaidAmount { participant, reason } => {
                format!("Amount paid by {} is invalid: {}", participant, reason)
            }
        }
    }

    /// Get all validation error messages as a list
    pub fn get_error_messages(&self, errors: &[BillFormError]) -> Vec<String> {
        errors.iter().map(|e| self.get_error_message(e)).collect()
    }

    /// Get the first error message (for displaying single error)
    pub fn get_first_error_message(&self, errors: &[BillFormError]) -> Option<String> {
        errors.first().map(|e| self.get_error_message(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, paid: &str) -> ParticipantFormInput {
        ParticipantFormInput {
            name: name.to_string(),
            paid_amount_input: paid.to_string(),
        }
    }

    fn equal_form(total: &str, names: &[&str]) -> BillFormInput {
        BillFormInput {
            name: "Dinner".to_string(),
            split_mode: SplitMode::Equal,
            total_amount_input: total.to_string(),
            designated_payer: String::new(),
            participants: names.iter().map(|n| row(n, "")).collect(),
        }
    }

    #[test]
    fn test_clean_and_parse_amount() {
        let service = BillFormService::new();

        assert_eq!(service.clean_and_parse_amount("$1,234.50"), Ok(1234.5));
        assert_eq!(service.clean_and_parse_amount(" 12 "), Ok(12.0));
        assert!(service.clean_and_parse_amount("$").is_err());
        assert!(service.clean_and_parse_amount("twelve").is_err());
        assert!(service.clean_and_parse_amount("inf").is_err());
    }

    #[test]
    fn test_valid_equal_form() {
        let service = BillFormService::new();

        let validation = service.validate_bill_form(&equal_form("90", &["Alice", "Bob", "Carol"]));

        assert!(validation.is_valid);
        assert_eq!(validation.cleaned_total, Some(90.0));
    }

    #[test]
    fn test_zero_total_is_allowed() {
        let service = BillFormService::new();

        let validation = service.validate_bill_form(&equal_form("0", &["Alice"]));

        assert!(validation.is_valid);
        assert_eq!(validation.cleaned_total, Some(0.0));
    }

    #[test]
    fn test_empty_form_reports_every_problem() {
        let service = BillFormService::new();

        let validation = service.validate_bill_form(&BillFormService::create_form_input());

        assert!(!validation.is_valid);
        assert_eq!(
            validation.errors,
            vec![BillFormError::EmptyName, BillFormError::NoParticipants, BillFormError::EmptyAmount]
        );
        assert_eq!(validation.suggestions.len(), 3);
    }

    #[test]
    fn test_negative_total_rejected() {
        let service = BillFormService::new();

        let validation = service.validate_bill_form(&equal_form("-5", &["Alice"]));

        assert_eq!(validation.errors, vec![BillFormError::NegativeAmount]);
    }

    #[test]
    fn test_duplicate_participants_rejected() {
        let service = BillFormService::new();

        let validation = service.validate_bill_form(&equal_form("10", &["Alice", "Alice "]));

        assert_eq!(validation.errors, vec![BillFormError::DuplicateParticipant("Alice".to_string())]);
    }

    #[test]
    fn test_individual_form_sums_paid_amounts() {
        let service = BillFormService::new();
        let input = BillFormInput {
            name: "Trip".to_string(),
            split_mode: SplitMode::Individual,
            total_amount_input: "ignored".to_string(),
            designated_payer: String::new(),
            participants: vec![row("Alice", "60"), row("Bob", ""), row("Carol", "$30.00")],
        };

        let validation = service.validate_bill_form(&input);

        assert!(validation.is_valid);
        assert_eq!(validation.cleaned_total, Some(90.0));
    }

    #[test]
    fn test_individual_form_rejects_bad_paid_amount() {
        let service = BillFormService::new();
        let input = BillFormInput {
            name: "Trip".to_string(),
            split_mode: SplitMode::Individual,
            total_amount_input: String::new(),
            designated_payer: String::new(),
            participants: vec![row("Alice", "-3"), row("Bob", "abc")],
        };

        let validation = service.validate_bill_form(&input);

        assert!(!validation.is_valid);
        assert_eq!(validation.cleaned_total, None);
        assert_eq!(validation.errors.len(), 2);
        assert!(matches!(
            &validation.errors[0],
            BillFormError::InvalidPaidAmount { participant, .. } if participant == "Alice"
        ));
    }

    #[test]
    fn test_can_add_participant() {
        let service = BillFormService::new();
        let existing = vec![row("Alice", "")];

        assert_eq!(service.can_add_participant(&existing, "  Bob "), Ok("Bob".to_string()));
        assert_eq!(
            service.can_add_participant(&existing, "Alice"),
            Err(BillFormError::DuplicateParticipant("Alice".to_string()))
        );
        assert_eq!(
            service.can_add_participant(&existing, "   "),
            Err(BillFormError::EmptyParticipantName)
        );
    }

    #[test]
    fn test_can_add_participant_respects_limit() {
        let service = BillFormService::with_config(BillFormConfig {
            max_participants: 1,
            ..BillFormConfig::default()
        });

        assert_eq!(
            service.can_add_participant(&[row("Alice", "")], "Bob"),
            Err(BillFormError::TooManyParticipants(2))
        );
    }

    #[test]
    fn test_to_create_bill_request_equal() {
        let service = BillFormService::new();
        let mut input = equal_form("90.00", &[" Alice", "Bob"]);
        input.designated_payer = " Alice ".to_string();
        input.name = " Dinner ".to_string();

        let request = service.to_create_bill_request(&input).unwrap();

        assert_eq!(request.name, "Dinner");
        assert_eq!(request.total_amount, Some(90.0));
        assert_eq!(request.designated_payer.as_deref(), Some("Alice"));
        assert_eq!(request.participants, vec![Participant::new("Alice"), Participant::new("Bob")]);
    }

    #[test]
    fn test_to_create_bill_request_individual() {
        let service = BillFormService::new();
        let input = BillFormInput {
            name: "Trip".to_string(),
            split_mode: SplitMode::Individual,
            total_amount_input: String::new(),
            designated_payer: "   ".to_string(),
            participants: vec![row("Alice", "60"), row("Bob", "")],
        };

        let request = service.to_create_bill_request(&input).unwrap();

        assert_eq!(request.total_amount, None);
        assert_eq!(request.designated_payer, None);
        assert_eq!(
            request.participants,
            vec![Participant::with_paid_amount("Alice", 60.0), Participant::with_paid_amount("Bob", 0.0)]
        );
    }

    #[test]
    fn test_to_create_bill_request_invalid() {
        let service = BillFormService::new();

        let errors = service.to_create_bill_request(&equal_form("", &["Alice"])).unwrap_err();

        assert_eq!(errors, vec![BillFormError::EmptyAmount]);
    }

    #[test]
    fn test_error_messages() {
        let service = BillFormService::new();

        assert_eq!(
            service.get_first_error_message(&[BillFormError::DuplicateParticipant("Bob".to_string())]),
            Some("Bob is already a participant".to_string())
        );
        assert_eq!(
            service.get_error_message(&BillFormError::AmountTooLarge(1_000_000.0)),
            "Amount is too large. Maximum is $1000000.00"
        );
        assert_eq!(service.get_first_error_message(&[]), None);
    }
}
