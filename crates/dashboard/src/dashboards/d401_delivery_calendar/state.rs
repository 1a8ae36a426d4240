use crate::domain::a004_delivery::service::{self, UPCOMING_LIMIT};
use crate::shared::data::DataProvider;
use chrono::NaiveDate;
use contracts::domain::a004_delivery::aggregate::{Delivery, DeliveryId};

/// Календарь поставок: выбранный день и диалог деталей поставки
#[derive(Debug, Clone)]
pub struct DeliveryCalendarState {
    deliveries: Vec<Delivery>,
    selected_date: Option<NaiveDate>,
    /// Поставка, открытая в диалоге
    opened: Option<DeliveryId>,
}

impl DeliveryCalendarState {
    /// `today` - день, выбранный в календаре при открытии
    pub fn new(provider: &dyn DataProvider, today: NaiveDate) -> Self {
        Self {
            deliveries: provider.deliveries().to_vec(),
            selected_date: Some(today),
            opened: None,
        }
    }

    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn highlighted_dates(&self) -> Vec<NaiveDate> {
        service::delivery_dates(&self.deliveries)
    }

    pub fn upcoming(&self) -> &[Delivery] {
        service::upcoming(&self.deliveries, UPCOMING_LIMIT)
    }

    /// Выбор дня: если на этот день есть поставка, открывается её диалог
    pub fn select_date(&mut self, date: Option<NaiveDate>) {
        self.selected_date = date;
        let Some(date) = date else {
            return;
        };
        if let Some(delivery) = service::find_by_date(&self.deliveries, date) {
            self.opened = Some(delivery.id.clone());
        }
    }

    pub fn open_delivery(&mut self, id: &DeliveryId) -> bool {
        if service::find_by_id(&self.deliveries, id).is_none() {
            return false;
        }
        self.opened = Some(id.clone());
        true
    }

    pub fn close(&mut self) {
        self.opened = None;
    }

    pub fn is_dialog_open(&self) -> bool {
        self.opened.is_some()
    }

    pub fn opened_delivery(&self) -> Option<&Delivery> {
        self.opened
            .as_ref()
            .and_then(|id| service::find_by_id(&self.deliveries, id))
    }
}
