use crate::domain::common::aggregate_id::validate_prefixed;
use crate::domain::common::{AggregateId, Origin};
use crate::enums::OrderStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// ID заказа на покупку (напр. "#ORD-2024-001")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub String);

impl OrderId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Сформировать номер по году и порядковому номеру: `#ORD-2024-009`
    pub fn from_parts(year: i32, seq: u32) -> Self {
        Self(format!("{}{}-{:03}", Self::PREFIX, year, seq))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Порядковый номер в пределах года, если номер в стандартном формате
    pub fn sequence(&self) -> Option<(i32, u32)> {
        let rest = self.0.strip_prefix(Self::PREFIX)?;
        let (year, seq) = rest.split_once('-')?;
        Some((year.parse().ok()?, seq.parse().ok()?))
    }
}

impl AggregateId for OrderId {
    const PREFIX: &'static str = "#ORD-";

    fn as_string(&self) -> String {
        self.0.clone()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        validate_prefixed(s, Self::PREFIX)?;
        Ok(OrderId::new(s.trim()))
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Заказ на покупку
///
/// Статус ядром не меняется: заказы только читаются и фильтруются.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseOrder {
    pub id: OrderId,

    /// Наименование поставщика
    pub supplier: String,

    /// Дата заказа
    pub order_date: NaiveDate,

    /// Дата поставки
    pub delivery_date: NaiveDate,

    /// Сумма заказа, руб.
    pub amount: u64,

    /// Количество позиций
    pub items: u32,

    pub status: OrderStatus,

    #[serde(default)]
    pub origin: Origin,
}

impl PurchaseOrder {
    /// Заказ учитывается в выручке, если он не отменён
    pub fn counts_as_revenue(&self) -> bool {
        self.status != OrderStatus::Cancelled
    }
}
