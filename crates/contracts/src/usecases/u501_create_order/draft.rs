use crate::domain::a001_supplier::aggregate::SupplierId;
use crate::domain::a002_inventory::aggregate::ItemQuantities;
use crate::domain::a004_delivery::aggregate::hh_mm;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Результат мастера: черновик заказа на покупку.
///
/// Создаётся один раз при завершении мастера и далее не изменяется.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDraft {
    pub supplier_id: SupplierId,

    /// Наименование поставщика
    pub supplier: String,

    /// Выбранные даты поставок (по возрастанию)
    pub delivery_dates: Vec<NaiveDate>,

    /// Дата следующей поставки: до неё должно хватить товаров из заказа
    pub next_delivery_date: NaiveDate,

    #[serde(with = "hh_mm")]
    pub next_delivery_time: NaiveTime,

    /// Расчётные потребности по категориям
    pub needs: ItemQuantities,

    /// Дата инвентаризации, по которой выполнен расчёт
    pub inventory_date: NaiveDate,
}

impl OrderDraft {
    /// Первая дата поставки по заказу
    pub fn first_delivery_date(&self) -> Option<NaiveDate> {
        self.delivery_dates.first().copied()
    }
}
