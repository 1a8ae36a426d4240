pub mod draft;
pub mod step;

use super::common::UseCaseMetadata;

/// Мастер создания заказа на покупку
pub struct CreateOrder;

impl UseCaseMetadata for CreateOrder {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "create_order"
    }

    fn display_name() -> &'static str {
        "Создание нового заказа на покупку"
    }

    fn description() -> &'static str {
        "Расчёт потребностей по данным инвентаризации и графику поставок поставщика"
    }
}
