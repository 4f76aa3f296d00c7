//! Settlement display logic for the bill splitter.
//!
//! Converts calculator output into display-ready lines and decides which
//! explanatory note to show when a bill has no transfers. The note is a
//! display policy owned by this layer: the calculator only reports that no
//! transfers were computable, this service works out why.

use chrono::DateTime;
use shared::{
    AmountType, Bill, FormattedBalance, FormattedSettlement, SettlementNote, SettlementResult,
    SettlementSummary, SETTLEMENT_EPSILON,
};

/// Settlement summary service that formats results for display
#[derive(Clone)]
pub struct SettlementSummaryService {
    currency_symbol: String,
}

impl Default for SettlementSummaryService {
    fn default() -> Self {
        Self::new()
    }
}

impl SettlementSummaryService {
    pub fn new() -> Self {
        Self::with_currency_symbol("$")
    }

    pub fn with_currency_symbol(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Build the display summary for a bill and its computed result
    pub fn summarize(&self, bill: &Bill, result: &SettlementResult) -> SettlementSummary {
        let share_line = match result {
            SettlementResult::Equal { amount_per_person, .. } => {
                format!("Amount per person: {}", self.format_amount(*amount_per_person))
            }
            SettlementResult::Individual { equal_share, .. } => {
                format!("Equal share: {}", self.format_amount(*equal_share))
            }
        };

        let settlements = result
            .settlements()
            .iter()
            .map(|s| FormattedSettlement {
                from: s.from.clone(),
                to: s.to.clone(),
                formatted_amount: self.format_amount(s.amount),
                raw_amount: s.amount,
            })
            .collect();

        let balances = result
            .balances()
            .iter()
            .map(|b| FormattedBalance {
                name: b.name.clone(),
                formatted_paid: self.format_amount(b.paid_amount),
                formatted_balance: self.format_signed_amount(b.balance),
                amount_type: amount_type(b.balance),
            })
            .collect();

        SettlementSummary {
            share_line,
            settlements,
            balances,
            note: self.settlement_note(bill, result),
        }
    }

    /// Decide why a bill shows no transfers, if it shows none
    pub fn settlement_note(&self, bill: &Bill, result: &SettlementResult) -> Option<SettlementNote> {
        match result {
            SettlementResult::Equal { settlements: None, .. } => match bill.designated_payer {
                Some(_) => Some(SettlementNote::PayerNotParticipant),
                None => Some(SettlementNote::NoPayerSpecified),
            },
            SettlementResult::Individual { settlements, .. } if settlements.is_empty() => {
                Some(SettlementNote::EveryonePaidEqualShare)
            }
            _ => None,
        }
    }

    pub fn note_message(note: SettlementNote) -> &'static str {
        match note {
            SettlementNote::PayerNotParticipant => "The person who paid is not in the participants list.",
            SettlementNote::NoPayerSpecified => "No payer specified. Each person should pay their share.",
            SettlementNote::EveryonePaidEqualShare => "Everyone paid their equal share. Nothing to settle!",
        }
    }

    /// "Bob owes Alice $30.00"
    pub fn describe_settlement(settlement: &FormattedSettlement) -> String {
        format!("{} owes {} {}", settlement.from, settlement.to, settlement.formatted_amount)
    }

    /// One-line description for the bill list, e.g. "3 participants · $90.00"
    pub fn format_bill_line(&self, bill: &Bill) -> String {
        let count = bill.participant_count();
        let noun = if count == 1 { "participant" } else { "participants" };
        format!("{} {} · {}", count, noun, self.format_amount(bill.total_amount))
    }

    /// Format the creation timestamp as "January 20, 2025", falling back to the raw value
    pub fn format_created_date(&self, bill: &Bill) -> String {
        DateTime::parse_from_rfc3339(&bill.created_at)
            .map(|date| date.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|_| bill.created_at.clone())
    }

    pub fn format_amount(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency_symbol, amount)
    }

    /// "+$30.00" / "-$30.00" / "$0.00"
    pub fn format_signed_amount(&self, amount: f64) -> String {
        match amount_type(amount) {
            AmountType::Positive => format!("+{}{:.2}", self.currency_symbol, amount),
            AmountType::Negative => format!("-{}{:.2}", self.currency_symbol, amount.abs()),
            AmountType::Zero => self.format_amount(0.0),
        }
    }
}

fn amount_type(amount: f64) -> AmountType {
    if amount >= SETTLEMENT_EPSILON {
        AmountType::Positive
    } else if amount <= -SETTLEMENT_EPSILON {
        AmountType::Negative
    } else {
        AmountType::Zero
    }
}
