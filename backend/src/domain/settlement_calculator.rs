//! Settlement calculation for bills.
//!
//! Turns a bill into the set of transfers that evens out what everyone put in.
//! The calculator is stateless: it reads a [`Bill`] and returns a freshly built
//! [`SettlementResult`] without touching storage.
//!
//! ## Equal mode
//!
//! The total is divided evenly. When a designated payer is one of the
//! participants, every other participant owes the payer one share. Otherwise
//! only the per-person amount is known and no transfers are produced.
//!
//! ## Individual mode
//!
//! Each participant's balance is what they paid minus the equal share.
//! Creditors (overpaid) and debtors (underpaid) are matched greedily, largest
//! first, until one side runs out:
//!
//! 1. Sort creditors by descending balance, debtors by descending deficit
//! 2. Transfer `min(remaining credit, remaining debt)` from debtor to creditor
//! 3. Move past whichever side has less than a cent left
//!
//! The greedy pass does not always find the theoretical minimum number of
//! transfers, but every creditor receives exactly their surplus and every
//! debtor pays exactly their deficit.

use log::debug;
use shared::{Bill, ParticipantBalance, Settlement, SettlementResult, SplitMode, SETTLEMENT_EPSILON};

/// Stateless settlement calculation service
#[derive(Debug, Clone, Copy, Default)]
pub struct SettlementCalculator;

impl SettlementCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Compute the settlement result for a validated bill
    pub fn calculate_settlements(&self, bill: &Bill) -> SettlementResult {
        debug!(
            "Calculating settlements for bill {} ({} mode, {} participants)",
            bill.id,
            bill.split_mode,
            bill.participant_count()
        );

        match bill.split_mode {
            SplitMode::Equal => self.calculate_equal_split(bill),
            SplitMode::Individual => self.calculate_individual_split(bill),
        }
    }

    fn calculate_equal_split(&self, bill: &Bill) -> SettlementResult {
        let amount_per_person = share_of(bill.total_amount, bill.participant_count());

        let payer = match bill.designated_payer.as_deref() {
            Some(payer) if bill.has_participant(payer) => payer,
            _ => {
                return SettlementResult::Equal {
                    amount_per_person,
                    settlements: None,
                }
            }
        };

        let settlements = if amount_per_person < SETTLEMENT_EPSILON {
            Vec::new()
        } else {
            bill.participants
                .iter()
                .filter(|p| p.name != payer)
                .map(|p| Settlement {
                    from: p.name.clone(),
                    to: payer.to_string(),
                    amount: amount_per_person,
                })
                .collect()
        };

        SettlementResult::Equal {
            amount_per_person,
            settlements: Some(settlements),
        }
    }

    fn calculate_individual_split(&self, bill: &Bill) -> SettlementResult {
        let equal_share = share_of(bill.total_amount, bill.participant_count());

        let balances: Vec<ParticipantBalance> = bill
            .participants
            .iter()
            .map(|p| ParticipantBalance {
                name: p.name.clone(),
                paid_amount: p.paid(),
                balance: snap_to_zero(p.paid() - equal_share),
            })
            .collect();

        let settlements = match_creditors_and_debtors(&balances);

        SettlementResult::Individual {
            equal_share,
            balances,
            settlements,
        }
    }
}

/// Compute the settlement result for a validated bill
pub fn calculate_settlements(bill: &Bill) -> SettlementResult {
    SettlementCalculator::new().calculate_settlements(bill)
}

/// Greedy largest-first matching over immutable sorted snapshots
fn match_creditors_and_debtors(balances: &[ParticipantBalance]) -> Vec<Settlement> {
    let mut creditors: Vec<(&str, f64)> = balances
        .iter()
        .filter(|b| b.balance >= SETTLEMENT_EPSILON)
        .map(|b| (b.name.as_str(), b.balance))
        .collect();
    let mut debtors: Vec<(&str, f64)> = balances
        .iter()
        .filter(|b| b.balance <= -SETTLEMENT_EPSILON)
        .map(|b| (b.name.as_str(), -b.balance))
        .collect();

    // Stable sorts keep participant order among equal amounts
    creditors.sort_by(|a, b| b.1.total_cmp(&a.1));
    debtors.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut settlements = Vec::with_capacity(creditors.len() + debtors.len());
    let (mut ci, mut di) = (0, 0);
    let mut credit_left = creditors.first().map_or(0.0, |c| c.1);
    let mut debt_left = debtors.first().map_or(0.0, |d| d.1);

    while ci < creditors.len() && di < debtors.len() {
        let amount = credit_left.min(debt_left);
        if amount >= SETTLEMENT_EPSILON {
            settlements.push(Settlement {
                from: debtors[di].0.to_string(),
                to: creditors[ci].0.to_string(),
                amount,
            });
        }

        credit_left -= amount;
        debt_left -= amount;

        if credit_left < SETTLEMENT_EPSILON {
            ci += 1;
            credit_left = creditors.get(ci).map_or(0.0, |c| c.1);
        }
        if debt_left < SETTLEMENT_EPSILON {
            di += 1;
            debt_left = debtors.get(di).map_or(0.0, |d| d.1);
        }
    }

    settlements
}

fn share_of(total: f64, participant_count: usize) -> f64 {
    if participant_count == 0 {
        return 0.0;
    }
    total / participant_count as f64
}

fn snap_to_zero(value: f64) -> f64 {
    if value.abs() < SETTLEMENT_EPSILON {
        0.0
    } else {
        value
    }
}
