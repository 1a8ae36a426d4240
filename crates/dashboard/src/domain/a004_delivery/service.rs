use chrono::NaiveDate;
use contracts::domain::a004_delivery::aggregate::{Delivery, DeliveryId};

/// Сколько ближайших поставок показывает виджет календаря
pub const UPCOMING_LIMIT: usize = 3;

/// Первая поставка, запланированная на указанный день
pub fn find_by_date(deliveries: &[Delivery], date: NaiveDate) -> Option<&Delivery> {
    deliveries.iter().find(|d| d.date == date)
}

pub fn find_by_id<'a>(deliveries: &'a [Delivery], id: &DeliveryId) -> Option<&'a Delivery> {
    deliveries.iter().find(|d| &d.id == id)
}

/// Первые `limit` поставок списка
pub fn upcoming(deliveries: &[Delivery], limit: usize) -> &[Delivery] {
    &deliveries[..deliveries.len().min(limit)]
}

/// Дни, выделяемые в календаре (по возрастанию, без повторов)
pub fn delivery_dates(deliveries: &[Delivery]) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = deliveries.iter().map(|d| d.date).collect();
    dates.sort();
    dates.dedup();
    dates
}
