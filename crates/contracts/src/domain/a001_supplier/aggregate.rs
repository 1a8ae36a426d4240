use crate::domain::common::aggregate_id::validate_prefixed;
use crate::domain::common::AggregateId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// ID поставщика (напр. "SUP-001")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupplierId(pub String);

impl SupplierId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl AggregateId for SupplierId {
    const PREFIX: &'static str = "SUP-";

    fn as_string(&self) -> String {
        self.0.clone()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        validate_prefixed(s, Self::PREFIX)?;
        Ok(SupplierId::new(s.trim()))
    }
}

impl std::fmt::Display for SupplierId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Поставщик со своим графиком поставок (справочные данные, не изменяются)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Supplier {
    pub id: SupplierId,

    /// Наименование (напр. `ООО "Поставщик-1"`)
    pub name: String,

    /// График поставок: даты, в которые поставщик привозит товар
    pub delivery_days: Vec<NaiveDate>,
}

impl Supplier {
    pub fn new(id: SupplierId, name: impl Into<String>, mut delivery_days: Vec<NaiveDate>) -> Self {
        delivery_days.sort();
        delivery_days.dedup();
        Self {
            id,
            name: name.into(),
            delivery_days,
        }
    }

    /// Входит ли дата в график поставок
    pub fn is_delivery_day(&self, date: NaiveDate) -> bool {
        self.delivery_days.binary_search(&date).is_ok()
    }

    /// График отсортирован по возрастанию и без повторов
    pub fn has_sorted_schedule(&self) -> bool {
        self.delivery_days.windows(2).all(|w| w[0] < w[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_new_sorts_schedule() {
        let supplier = Supplier::new(
            SupplierId::new("SUP-001"),
            "ИП Иванов",
            vec![d("2024-02-21"), d("2024-02-14"), d("2024-02-17"), d("2024-02-14")],
        );
        assert_eq!(
            supplier.delivery_days,
            vec![d("2024-02-14"), d("2024-02-17"), d("2024-02-21")]
        );
        assert!(supplier.has_sorted_schedule());
        assert!(supplier.is_delivery_day(d("2024-02-17")));
        assert!(!supplier.is_delivery_day(d("2024-02-18")));
    }

    #[test]
    fn test_supplier_id_from_string() {
        assert_eq!(
            SupplierId::from_string("SUP-002").unwrap(),
            SupplierId::new("SUP-002")
        );
        assert!(SupplierId::from_string("DEL-002").is_err());
    }
}
