use contracts::domain::a003_purchase_order::aggregate::{OrderId, PurchaseOrder};
use contracts::domain::a003_purchase_order::filter::FilterCriteria;

/// Проверка одного заказа по всем критериям
pub fn matches(order: &PurchaseOrder, criteria: &FilterCriteria) -> bool {
    if !criteria.status.matches(order.status) {
        return false;
    }

    if !criteria.query.is_empty() {
        let query = criteria.query.to_lowercase();
        let by_supplier = order.supplier.to_lowercase().contains(&query);
        let by_id = order.id.value().to_lowercase().contains(&query);
        if !by_supplier && !by_id {
            return false;
        }
    }

    // Суммы в рублях укладываются в i64
    let amount = i64::try_from(order.amount).unwrap_or(i64::MAX);
    if criteria.min_amount.is_some_and(|min| amount < min) {
        return false;
    }
    if criteria.max_amount.is_some_and(|max| amount > max) {
        return false;
    }

    true
}

/// Отфильтрованный список заказов в исходном порядке
pub fn filter(orders: &[PurchaseOrder], criteria: &FilterCriteria) -> Vec<PurchaseOrder> {
    orders
        .iter()
        .filter(|order| matches(order, criteria))
        .cloned()
        .collect()
}

pub fn find_by_id<'a>(orders: &'a [PurchaseOrder], id: &OrderId) -> Option<&'a PurchaseOrder> {
    orders.iter().find(|order| &order.id == id)
}

/// Следующий номер заказа за год: максимум существующих + 1
pub fn next_order_id(orders: &[PurchaseOrder], year: i32) -> OrderId {
    let max_seq = orders
        .iter()
        .filter_map(|order| order.id.sequence())
        .filter(|(y, _)| *y == year)
        .map(|(_, seq)| seq)
        .max()
        .unwrap_or(0);
    OrderId::from_parts(year, max_seq + 1)
}
