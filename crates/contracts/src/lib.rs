//! Общие типы данных дашборда управления заказами.
//!
//! Крейт содержит только записи (поставщики, инвентаризация, заказы,
//! поставки, черновики заказов) без бизнес-логики.

pub mod domain;
pub mod enums;
pub mod usecases;
