use bill_splitter_backend::calculate_settlements;
use proptest::prelude::*;
use shared::{Bill, Participant, SettlementResult, SplitMode, SETTLEMENT_EPSILON};

fn names(count: usize) -> Vec<String> {
    (0..count).map(|idx| format!("Person {}", idx + 1)).collect()
}

fn equal_bill(total: f64, payer: Option<String>, count: usize) -> Bill {
    Bill {
        id: "bill::1::prop".to_string(),
        name: "Generated".to_string(),
        total_amount: total,
        designated_payer: payer,
        split_mode: SplitMode::Equal,
        participants: names(count).into_iter().map(Participant::new).collect(),
        created_at: "2025-01-20T10:00:00Z".to_string(),
    }
}

fn individual_bill(paid: &[f64]) -> Bill {
    let participants: Vec<Participant> = names(paid.len())
        .into_iter()
        .zip(paid)
        .map(|(name, amount)| Participant::with_paid_amount(name, *amount))
        .collect();
    Bill {
        id: "bill::2::prop".to_string(),
        name: "Generated".to_string(),
        total_amount: paid.iter().sum(),
        designated_payer: None,
        split_mode: SplitMode::Individual,
        participants,
        created_at: "2025-01-20T10:00:00Z".to_string(),
    }
}

/// Cents in, currency units out, so generated amounts look like real prices
fn paid_amounts() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0u64..=100_000, 1..=8)
        .prop_map(|cents| cents.into_iter().map(|c| c as f64 / 100.0).collect())
}

/// Paid amounts whose balances against the equal share are whole multiples of
/// ten cents, so no balance falls under the settlement tolerance
fn ten_cent_balances() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0u64..=10_000, 1..=8).prop_map(|units| {
        let count = units.len() as u64;
        units
            .into_iter()
            .map(|u| (u * count * 10) as f64 / 100.0)
            .collect()
    })
}

/// Balances under a cent are treated as settled, and the greedy pass drops
/// sub-cent remainders, so each participant contributes less than a cent of
/// shortfall
fn shortfall_bound(bill: &Bill) -> f64 {
    SETTLEMENT_EPSILON * bill.participant_count() as f64
}

fn surplus(result: &SettlementResult) -> f64 {
    result.balances().iter().map(|b| b.balance).filter(|b| *b > 0.0).sum()
}

fn deficit(result: &SettlementResult) -> f64 {
    result.balances().iter().map(|b| b.balance).filter(|b| *b < 0.0).map(f64::abs).sum()
}

/// What each participant has put in once every transfer is made
fn effective_contributions(bill: &Bill, result: &SettlementResult) -> Vec<f64> {
    let mut effective: Vec<f64> = bill.participants.iter().map(|p| p.paid()).collect();
    let index_of = |name: &str| bill.participants.iter().position(|p| p.name == name);
    for settlement in result.settlements() {
        let from = index_of(&settlement.from).expect("debtor is a participant");
        let to = index_of(&settlement.to).expect("creditor is a participant");
        effective[from] += settlement.amount;
        effective[to] -= settlement.amount;
    }
    effective
}

proptest! {
    #[test]
    fn equal_split_transfers_cover_everyone_but_the_payer(
        count in 1usize..=8,
        payer_index in 0usize..8,
        total_cents in 0u64..=1_000_000,
    ) {
        let total = total_cents as f64 / 100.0;
        let payer = format!("Person {}", payer_index % count + 1);
        let bill = equal_bill(total, Some(payer.clone()), count);

        let result = calculate_settlements(&bill);
        let amount_per_person = result.share_per_person();

        prop_assert!((amount_per_person - total / count as f64).abs() < 1e-9);
        prop_assert!(result.settlements().iter().all(|s| s.to == payer && s.from != payer));
        if amount_per_person >= SETTLEMENT_EPSILON {
            prop_assert_eq!(result.settlements().len(), count - 1);
            prop_assert!((result.total_transferred() - (total - amount_per_person)).abs() < SETTLEMENT_EPSILON);
        }
    }

    #[test]
    fn individual_transfers_equal_total_surplus(paid in ten_cent_balances()) {
        let bill = individual_bill(&paid);

        let result = calculate_settlements(&bill);

        prop_assert!((result.total_transferred() - surplus(&result)).abs() <= SETTLEMENT_EPSILON);
        prop_assert!((result.total_transferred() - deficit(&result)).abs() <= SETTLEMENT_EPSILON);
        prop_assert!(result.settlements().iter().all(|s| s.amount >= SETTLEMENT_EPSILON && s.from != s.to));
    }

    #[test]
    fn applying_transfers_equalizes_contributions(paid in ten_cent_balances()) {
        let bill = individual_bill(&paid);

        let result = calculate_settlements(&bill);

        for amount in effective_contributions(&bill, &result) {
            prop_assert!((amount - result.share_per_person()).abs() <= SETTLEMENT_EPSILON);
        }
    }

    #[test]
    fn sub_cent_shortfall_stays_within_a_cent_per_participant(paid in paid_amounts()) {
        let bill = individual_bill(&paid);

        let result = calculate_settlements(&bill);
        let bound = shortfall_bound(&bill);

        prop_assert!((result.total_transferred() - surplus(&result)).abs() <= bound);
        prop_assert!((result.total_transferred() - deficit(&result)).abs() <= bound);
        for amount in effective_contributions(&bill, &result) {
            prop_assert!((amount - result.share_per_person()).abs() <= bound, "{} vs share {}", amount, result.share_per_person());
        }
    }

    #[test]
    fn calculation_is_idempotent(paid in paid_amounts()) {
        let bill = individual_bill(&paid);
        prop_assert_eq!(calculate_settlements(&bill), calculate_settlements(&bill));
    }

    #[test]
    fn single_participant_never_settles(total_cents in 0u64..=1_000_000, individual in any::<bool>()) {
        let total = total_cents as f64 / 100.0;
        let bill = if individual {
            individual_bill(&[total])
        } else {
            equal_bill(total, Some("Person 1".to_string()), 1)
        };

        let result = calculate_settlements(&bill);

        prop_assert!((result.share_per_person() - total).abs() < 1e-9);
        prop_assert!(result.settlements().is_empty());
    }
}

#[test]
fn scenario_equal_with_payer() {
    let bill = equal_bill(90.0, Some("Person 1".to_string()), 3);

    let result = calculate_settlements(&bill);

    let SettlementResult::Equal { amount_per_person, settlements } = result else {
        panic!("expected an equal-mode result");
    };
    assert_eq!(amount_per_person, 30.0);
    let transfers: Vec<(String, String, f64)> = settlements
        .expect("payer is a participant")
        .into_iter()
        .map(|s| (s.from, s.to, s.amount))
        .collect();
    assert_eq!(
        transfers,
        vec![
            ("Person 2".to_string(), "Person 1".to_string(), 30.0),
            ("Person 3".to_string(), "Person 1".to_string(), 30.0),
        ]
    );
}

#[test]
fn scenario_equal_without_payer_serializes_share_only() {
    let bill = equal_bill(90.0, None, 3);

    let json = serde_json::to_value(calculate_settlements(&bill)).unwrap();

    assert_eq!(json, serde_json::json!({ "mode": "equal", "amount_per_person": 30.0 }));
}

#[test]
fn scenario_individual_single_debtor() {
    let bill = individual_bill(&[60.0, 0.0, 30.0]);

    let result = calculate_settlements(&bill);

    assert_eq!(result.share_per_person(), 30.0);
    let balances: Vec<f64> = result.balances().iter().map(|b| b.balance).collect();
    assert_eq!(balances, vec![30.0, -30.0, 0.0]);
    let transfers: Vec<(&str, &str, f64)> = result
        .settlements()
        .iter()
        .map(|s| (s.from.as_str(), s.to.as_str(), s.amount))
        .collect();
    assert_eq!(transfers, vec![("Person 2", "Person 1", 30.0)]);
}

#[test]
fn scenario_individual_all_equal() {
    let bill = individual_bill(&[30.0, 30.0, 30.0]);

    let result = calculate_settlements(&bill);

    assert!(result.balances().iter().all(|b| b.balance == 0.0));
    assert!(result.settlements().is_empty());
}
