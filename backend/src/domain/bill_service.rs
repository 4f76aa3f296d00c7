//! Bill service domain logic for the bill splitter.
//!
//! This module owns the bill lifecycle: creating a bill from a validated
//! request, listing and deleting stored bills, and answering settlement
//! queries. Bills are immutable once stored; settlement results are computed
//! fresh on every query and never written back.
//!
//! ## Business Rules
//!
//! - A bill needs a non-empty name and at least one participant
//! - Participant names are trimmed and must be unique within a bill
//! - Equal mode: the total is supplied, paid amounts are dropped
//! - Individual mode: the total is the sum of paid amounts, the payer is dropped
//! - Amounts must be finite and non-negative

use anyhow::Result;
use chrono::Utc;
use log::{info, warn};
use uuid::Uuid;

use shared::{
    Bill, BillSummaryResponse, CreateBillRequest, CreateBillResponse, DeleteBillRequest,
    DeleteBillResponse, ListBillsResponse, Participant, SettlementResult, SplitMode,
};

use crate::domain::models::bill::{validate_bill, BillLimits, BillValidationError};
use crate::domain::settlement_calculator::SettlementCalculator;
use crate::domain::settlement_summary::SettlementSummaryService;
use crate::storage::BillStorage;

/// Service for managing bills and computing their settlements
#[derive(Clone)]
pub struct BillService<S: BillStorage> {
    storage: S,
    calculator: SettlementCalculator,
    summary_service: SettlementSummaryService,
    limits: BillLimits,
}

impl<S: BillStorage> BillService<S> {
    /// Create a new BillService over an explicit store handle
    pub fn new(storage: S) -> Self {
        Self::with_limits(storage, BillLimits::default())
    }

    pub fn with_limits(storage: S, limits: BillLimits) -> Self {
        Self {
            storage,
            calculator: SettlementCalculator::new(),
            summary_service: SettlementSummaryService::new(),
            limits,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn summary_service(&self) -> &SettlementSummaryService {
        &self.summary_service
    }

    /// Create and store a new bill
    pub fn create_bill(&self, request: CreateBillRequest) -> Result<CreateBillResponse> {
        info!("Creating bill: {:?}", request);

        let bill = self.build_bill(request)?;
        validate_bill(&bill, &self.limits)?;

        self.storage.store_bill(&bill)?;

        info!("Successfully created bill: {}", bill.id);
        Ok(CreateBillResponse {
            success_message: format!("Bill '{}' saved", bill.name),
            bill,
        })
    }

    /// Normalize a create request into a bill for its split mode
    fn build_bill(&self, request: CreateBillRequest) -> Result<Bill, BillValidationError> {
        let now = Utc::now();
        let nonce = Uuid::new_v4().simple().to_string();
        let id = Bill::generate_id(now.timestamp_millis().max(0) as u64, &nonce[..8]);

        let (participants, total_amount, designated_payer) = match request.split_mode {
            SplitMode::Equal => {
                let total = request.total_amount.ok_or(BillValidationError::MissingTotalAmount)?;
                let participants: Vec<Participant> = request
                    .participants
                    .iter()
                    .map(|p| Participant::new(p.name.trim()))
                    .collect();
                let payer = request
                    .designated_payer
                    .as_deref()
                    .map(str::trim)
                    .filter(|payer| !payer.is_empty())
                    .map(str::to_string);
                (participants, total, payer)
            }
            SplitMode::Individual => {
                let participants: Vec<Participant> = request
                    .participants
                    .iter()
                    .map(|p| Participant::with_paid_amount(p.name.trim(), p.paid()))
                    .collect();
                let total: f64 = participants.iter().map(Participant::paid).sum();
                (participants, total, None)
            }
        };

        Ok(Bill {
            id,
            name: request.name.trim().to_string(),
            total_amount,
            designated_payer,
            split_mode: request.split_mode,
            participants,
            created_at: now.to_rfc3339(),
        })
    }

    /// List all bills in the order they were created
    pub fn list_bills(&self) -> Result<ListBillsResponse> {
        let bills = self.storage.list_bills()?;
        Ok(ListBillsResponse { bills })
    }

    pub fn get_bill(&self, bill_id: &str) -> Result<Option<Bill>> {
        self.storage.get_bill(bill_id)
    }

    /// Delete a bill; deleting an unknown bill is not an error
    pub fn delete_bill(&self, request: DeleteBillRequest) -> Result<DeleteBillResponse> {
        info!("Deleting bill: {}", request.bill_id);

        let deleted = self.storage.delete_bill(&request.bill_id)?;
        let success_message = if deleted {
            "Bill deleted".to_string()
        } else {
            warn!("Delete requested for unknown bill: {}", request.bill_id);
            "Bill was already deleted".to_string()
        };

        Ok(DeleteBillResponse {
            deleted,
            success_message,
        })
    }

    /// Compute settlements for a bill without touching storage
    pub fn calculate_settlements(&self, bill: &Bill) -> SettlementResult {
        self.calculator.calculate_settlements(bill)
    }

    /// Load a bill with its settlements and display summary
    pub fn get_bill_summary(&self, bill_id: &str) -> Result<Option<BillSummaryResponse>> {
        let bill = match self.storage.get_bill(bill_id)? {
            Some(bill) => bill,
            None => return Ok(None),
        };

        let result = self.calculate_settlements(&bill);
        let summary = self.summary_service.summarize(&bill, &result);

        Ok(Some(BillSummaryResponse {
            bill,
            result,
            summary,
        }))
    }
}
