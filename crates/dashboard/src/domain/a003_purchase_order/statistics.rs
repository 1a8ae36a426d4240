use contracts::domain::a003_purchase_order::aggregate::PurchaseOrder;
use contracts::enums::OrderStatus;
use serde::Serialize;

/// Показатели для карточек дашборда
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderStatistics {
    /// Активные заказы (в процессе обработки)
    pub active_orders: usize,
    /// Ожидают подтверждения поставщика
    pub awaiting_confirmation: usize,
    /// Выручка без отменённых заказов
    pub total_revenue: u64,
    /// Средняя сумма по отфильтрованному списку (0 для пустого)
    pub average_amount: f64,
    /// Размер отфильтрованного списка
    pub filtered_count: usize,
}

pub fn count_by_status(orders: &[PurchaseOrder], status: OrderStatus) -> usize {
    orders.iter().filter(|o| o.status == status).count()
}

pub fn total_revenue(orders: &[PurchaseOrder]) -> u64 {
    orders
        .iter()
        .filter(|o| o.counts_as_revenue())
        .fold(0u64, |acc, o| acc.saturating_add(o.amount))
}

pub fn average_amount(orders: &[PurchaseOrder]) -> f64 {
    if orders.is_empty() {
        return 0.0;
    }
    let sum: f64 = orders.iter().map(|o| o.amount as f64).sum();
    sum / orders.len() as f64
}

/// Счётчики и выручка считаются по всем заказам, средняя сумма - по
/// отфильтрованным.
pub fn calculate(all: &[PurchaseOrder], filtered: &[PurchaseOrder]) -> OrderStatistics {
    OrderStatistics {
        active_orders: count_by_status(all, OrderStatus::Processing),
        awaiting_confirmation: count_by_status(all, OrderStatus::AwaitingConfirmation),
        total_revenue: total_revenue(all),
        average_amount: average_amount(filtered),
        filtered_count: filtered.len(),
    }
}
