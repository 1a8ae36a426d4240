use contracts::domain::a001_supplier::aggregate::Supplier;
use contracts::domain::a002_inventory::aggregate::InventoryRecord;
use contracts::domain::a003_purchase_order::aggregate::PurchaseOrder;
use contracts::domain::a004_delivery::aggregate::Delivery;
use contracts::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Встроенный набор начальных данных
pub const EMBEDDED_SEED: &str = include_str!("seed_data.json");

/// Ошибки загрузки начальных данных
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Seed parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    #[error("Duplicate supplier id: {0}")]
    DuplicateSupplierId(String),

    #[error("Duplicate order id: {0}")]
    DuplicateOrderId(String),

    #[error("Delivery schedule of supplier {0} is not sorted or has repeated dates")]
    UnsortedSchedule(String),
}

/// Начальные данные дашборда
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedData {
    pub suppliers: Vec<Supplier>,
    pub inventory: InventoryRecord,
    pub orders: Vec<PurchaseOrder>,
    #[serde(default)]
    pub deliveries: Vec<Delivery>,
}

impl SeedData {
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let data: SeedData = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    pub fn embedded() -> Result<Self, SeedError> {
        Self::from_json(EMBEDDED_SEED)
    }

    pub fn validate(&self) -> Result<(), SeedError> {
        let mut supplier_ids = HashSet::new();
        for supplier in &self.suppliers {
            check_id(&supplier.id)?;
            if !supplier_ids.insert(&supplier.id) {
                return Err(SeedError::DuplicateSupplierId(supplier.id.to_string()));
            }
            if !supplier.has_sorted_schedule() {
                return Err(SeedError::UnsortedSchedule(supplier.id.to_string()));
            }
        }

        let mut order_ids = HashSet::new();
        for order in &self.orders {
            check_id(&order.id)?;
            if !order_ids.insert(&order.id) {
                return Err(SeedError::DuplicateOrderId(order.id.to_string()));
            }
        }

        for delivery in &self.deliveries {
            check_id(&delivery.id)?;
        }

        Ok(())
    }
}

/// Идентификатор должен иметь префикс своего типа
fn check_id<T: AggregateId>(id: &T) -> Result<(), SeedError> {
    T::from_string(&id.as_string())
        .map(|_| ())
        .map_err(SeedError::InvalidId)
}
