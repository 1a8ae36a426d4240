//! Ядро дашборда управления заказами на покупку: расчёт потребностей,
//! мастер создания заказа, фильтрация списка заказов и календарь поставок.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
pub mod usecases;
