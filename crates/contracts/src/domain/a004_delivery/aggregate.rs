use crate::domain::a003_purchase_order::aggregate::OrderId;
use crate::domain::common::aggregate_id::validate_prefixed;
use crate::domain::common::AggregateId;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// ID поставки (напр. "DEL-001")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeliveryId(pub String);

impl DeliveryId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl AggregateId for DeliveryId {
    const PREFIX: &'static str = "DEL-";

    fn as_string(&self) -> String {
        self.0.clone()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        validate_prefixed(s, Self::PREFIX)?;
        Ok(DeliveryId::new(s.trim()))
    }
}

/// Запланированная поставка (календарь поставок)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Delivery {
    pub id: DeliveryId,

    /// Заказ, по которому выполняется поставка
    pub order_id: OrderId,

    pub date: NaiveDate,

    /// Время прибытия (HH:MM)
    #[serde(with = "hh_mm")]
    pub time: NaiveTime,

    /// Наименование поставщика
    pub supplier: String,

    /// Количество позиций
    pub items: u32,

    pub address: String,
    pub phone: String,

    /// Комментарий для водителя
    #[serde(default)]
    pub notes: Option<String>,
}

/// Сериализация времени в формате "HH:MM"
pub mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(s.trim(), FORMAT).map_err(serde::de::Error::custom)
    }
}
