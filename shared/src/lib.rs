use serde::{Deserialize, Serialize};
use std::fmt;

/// Balances and transfers smaller than this are treated as zero.
pub const SETTLEMENT_EPSILON: f64 = 0.01;

/// How the cost of a bill is shared between its participants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SplitMode {
    /// A single total split evenly; an optional designated payer fronted it
    #[default]
    Equal,
    /// Every participant records what they personally paid
    Individual,
}

impl SplitMode {
    pub fn label(&self) -> &'static str {
        match self {
            SplitMode::Equal => "Split equally",
            SplitMode::Individual => "Individual payments",
        }
    }
}

impl fmt::Display for SplitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitMode::Equal => write!(f, "equal"),
            SplitMode::Individual => write!(f, "individual"),
        }
    }
}

/// A person taking part in a bill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// Display name, unique within a bill
    pub name: String,
    /// Amount this participant paid (only meaningful in individual mode)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_amount: Option<f64>,
}

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            paid_amount: None,
        }
    }

    pub fn with_paid_amount(name: impl Into<String>, paid_amount: f64) -> Self {
        Self {
            name: name.into(),
            paid_amount: Some(paid_amount),
        }
    }

    /// Paid amount with a missing value counted as nothing paid
    pub fn paid(&self) -> f64 {
        self.paid_amount.unwrap_or(0.0)
    }
}

/// Bill ID in format: "bill::<epoch_millis>::<nonce>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: String,
    /// Event name, e.g. "Dinner" or "Ski trip"
    pub name: String,
    /// Total cost; derived from paid amounts in individual mode
    pub total_amount: f64,
    /// Person who fronted the money (equal mode only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designated_payer: Option<String>,
    #[serde(default)]
    pub split_mode: SplitMode,
    pub participants: Vec<Participant>,
    /// Human-readable timestamp with timezone (RFC 3339)
    pub created_at: String,
}

impl Bill {
    /// Generate a bill ID from a creation timestamp and a uniqueness nonce
    pub fn generate_id(epoch_millis: u64, nonce: &str) -> String {
        format!("bill::{}::{}", epoch_millis, nonce)
    }

    /// Parse a bill ID to extract its creation timestamp
    pub fn parse_id(id: &str) -> Result<u64, BillIdError> {
        let parts: Vec<&str> = id.split("::").collect();
        if parts.len() != 3 || parts[0] != "bill" {
            return Err(BillIdError::InvalidFormat);
        }
        if parts[2].is_empty() {
            return Err(BillIdError::MissingNonce);
        }

        parts[1]
            .parse::<u64>()
            .map_err(|_| BillIdError::InvalidTimestamp)
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn has_participant(&self, name: &str) -> bool {
        self.participants.iter().any(|p| p.name == name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BillIdError {
    InvalidFormat,
    InvalidTimestamp,
    MissingNonce,
}

impl fmt::Display for BillIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BillIdError::InvalidFormat => write!(f, "Invalid bill ID format"),
            BillIdError::InvalidTimestamp => write!(f, "Invalid timestamp in bill ID"),
            BillIdError::MissingNonce => write!(f, "Missing nonce in bill ID"),
        }
    }
}

impl std::error::Error for BillIdError {}

/// A directed transfer that closes part of the imbalance between two participants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

/// Net position of a participant in an individual-mode bill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantBalance {
    pub name: String,
    pub paid_amount: f64,
    /// Positive when the participant overpaid, negative when they underpaid
    pub balance: f64,
}

/// Output of the settlement calculator, tagged by split mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SettlementResult {
    Equal {
        amount_per_person: f64,
        /// Absent when nobody usable is known to have fronted the money
        #[serde(default, skip_serializing_if = "Option::is_none")]
        settlements: Option<Vec<Settlement>>,
    },
    Individual {
        equal_share: f64,
        balances: Vec<ParticipantBalance>,
        settlements: Vec<Settlement>,
    },
}

impl SettlementResult {
    /// The amount each participant is responsible for
    pub fn share_per_person(&self) -> f64 {
        match self {
            SettlementResult::Equal { amount_per_person, .. } => *amount_per_person,
            SettlementResult::Individual { equal_share, .. } => *equal_share,
        }
    }

    /// Transfers to perform; empty when none are computable or needed
    pub fn settlements(&self) -> &[Settlement] {
        match self {
            SettlementResult::Equal { settlements, .. } => settlements.as_deref().unwrap_or(&[]),
            SettlementResult::Individual { settlements, .. } => settlements,
        }
    }

    pub fn balances(&self) -> &[ParticipantBalance] {
        match self {
            SettlementResult::Equal { .. } => &[],
            SettlementResult::Individual { balances, .. } => balances,
        }
    }

    pub fn total_transferred(&self) -> f64 {
        self.settlements().iter().map(|s| s.amount).sum()
    }
}

/// Request for creating a new bill
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateBillRequest {
    pub name: String,
    pub split_mode: SplitMode,
    /// Required in equal mode, ignored in individual mode
    pub total_amount: Option<f64>,
    pub designated_payer: Option<String>,
    pub participants: Vec<Participant>,
}

/// Response after creating a bill
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateBillResponse {
    pub bill: Bill,
    pub success_message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListBillsResponse {
    pub bills: Vec<Bill>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeleteBillRequest {
    pub bill_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeleteBillResponse {
    pub deleted: bool,
    pub success_message: String,
}

/// Bill together with its computed settlements and display summary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BillSummaryResponse {
    pub bill: Bill,
    pub result: SettlementResult,
    pub summary: SettlementSummary,
}

/// Why a bill shows no transfers, decided by the caller rather than the calculator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SettlementNote {
    /// A payer was named but is not one of the participants
    PayerNotParticipant,
    /// Equal split with nobody recorded as having paid
    NoPayerSpecified,
    /// Individual payments already balance out
    EveryonePaidEqualShare,
}

/// A settlement formatted for display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormattedSettlement {
    pub from: String,
    pub to: String,
    pub formatted_amount: String,
    pub raw_amount: f64,
}

/// A participant balance formatted for display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormattedBalance {
    pub name: String,
    pub formatted_paid: String,
    pub formatted_balance: String,
    pub amount_type: AmountType,
}

/// Sign of an amount for styling and display
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AmountType {
    Positive,
    Negative,
    Zero,
}

/// Display-ready view of a settlement result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettlementSummary {
    /// e.g. "Amount per person: $30.00"
    pub share_line: String,
    pub settlements: Vec<FormattedSettlement>,
    pub balances: Vec<FormattedBalance>,
    pub note: Option<SettlementNote>,
}

/// Raw input from the bill creation form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BillFormInput {
    pub name: String,
    pub split_mode: SplitMode,
    pub total_amount_input: String,
    pub designated_payer: String,
    pub participants: Vec<ParticipantFormInput>,
}

/// Raw participant row from the bill creation form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ParticipantFormInput {
    pub name: String,
    pub paid_amount_input: String,
}

/// Form validation result for bill creation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BillFormValidation {
    pub is_valid: bool,
    pub errors: Vec<BillFormError>,
    /// Parsed total (equal mode) or sum of paid amounts (individual mode)
    pub cleaned_total: Option<f64>,
    pub suggestions: Vec<String>,
}

/// Specific validation errors for the bill form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum BillFormError {
    EmptyName,
    NameTooLong(usize),
    EmptyAmount,
    InvalidAmountFormat(String),
    NegativeAmount,
    AmountTooLarge(f64),
    NoParticipants,
    TooManyParticipants(usize),
    EmptyParticipantName,
    DuplicateParticipant(String),
    InvalidPaidAmount { participant: String, reason: String },
}

/// Configuration for the bill creation form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BillFormConfig {
    pub max_name_length: usize,
    pub max_participants: usize,
    pub max_amount: f64,
    pub currency_symbol: String,
}

impl Default for BillFormConfig {
    fn default() -> Self {
        Self {
            max_name_length: 128,
            max_participants: 50,
            max_amount: 1_000_000.0,
            currency_symbol: "$".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_bill_id() {
        let id = Bill::generate_id(1702516122000, "a1b2c3d4");
        assert_eq!(id, "bill::1702516122000::a1b2c3d4");
    }

    #[test]
    fn test_parse_bill_id() {
        assert_eq!(Bill::parse_id("bill::1702516122000::a1b2c3d4"), Ok(1702516122000));
        assert_eq!(Bill::parse_id("child::1702516122000"), Err(BillIdError::InvalidFormat));
        assert_eq!(Bill::parse_id("bill::soon::a1b2"), Err(BillIdError::InvalidTimestamp));
        assert_eq!(Bill::parse_id("bill::1702516122000::"), Err(BillIdError::MissingNonce));
    }

    #[test]
    fn test_participant_paid_defaults_to_zero() {
        assert_eq!(Participant::new("Alice").paid(), 0.0);
        assert_eq!(Participant::with_paid_amount("Bob", 12.5).paid(), 12.5);
    }

    #[test]
    fn test_equal_result_omits_missing_settlements() {
        let result = SettlementResult::Equal {
            amount_per_person: 30.0,
            settlements: None,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["mode"], "equal");
        assert_eq!(json["amount_per_person"], 30.0);
        assert!(json.get("settlements").is_none());
        assert!(result.settlements().is_empty());
    }

    #[test]
    fn test_bill_deserializes_without_optional_fields() {
        let json = r#"{
            "id": "bill::1::x",
            "name": "Dinner",
            "total_amount": 90.0,
            "participants": [{"name": "Alice"}, {"name": "Bob"}],
            "created_at": "2025-01-20T10:00:00Z"
        }"#;

        let bill: Bill = serde_json::from_str(json).unwrap();
        assert_eq!(bill.split_mode, SplitMode::Equal);
        assert_eq!(bill.designated_payer, None);
        assert_eq!(bill.participant_count(), 2);
        assert!(bill.has_participant("Bob"));
        assert!(!bill.has_participant("Carol"));
    }
}
