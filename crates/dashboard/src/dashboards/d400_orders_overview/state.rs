use crate::domain::a003_purchase_order::service;
use crate::domain::a003_purchase_order::statistics::{self, OrderStatistics};
use crate::shared::config::Config;
use crate::shared::data::DataProvider;
use crate::usecases::u501_create_order::wizard::parse_delivery_time;
use crate::usecases::u501_create_order::{
    CreateOrderWizard, DailyConsumption, RestockCalculator, WizardError,
};
use chrono::{Datelike, NaiveDate};
use contracts::domain::a003_purchase_order::aggregate::{OrderId, PurchaseOrder};
use contracts::domain::a003_purchase_order::filter::FilterCriteria;
use contracts::domain::common::Origin;
use contracts::enums::OrderStatus;
use contracts::usecases::u501_create_order::draft::OrderDraft;
use tracing::{debug, info};

/// Значения полей фильтра в том виде, в каком их ввёл пользователь
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFilterInputs {
    pub status: String,
    pub query: String,
    pub min_amount: String,
    pub max_amount: String,
}

impl Default for OrderFilterInputs {
    fn default() -> Self {
        Self {
            status: "all".to_string(),
            query: String::new(),
            min_amount: String::new(),
            max_amount: String::new(),
        }
    }
}

impl OrderFilterInputs {
    pub fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria::from_inputs(&self.status, &self.query, &self.min_amount, &self.max_amount)
    }
}

/// Диалог создания заказа вместе с мастером
#[derive(Debug, Clone)]
pub struct CreateOrderDialog {
    is_open: bool,
    wizard: CreateOrderWizard,
}

impl CreateOrderDialog {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn wizard(&self) -> &CreateOrderWizard {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut CreateOrderWizard {
        &mut self.wizard
    }
}

/// Состояние главной страницы: список заказов, фильтры, диалоги
#[derive(Debug, Clone)]
pub struct OrdersOverviewState {
    orders: Vec<PurchaseOrder>,
    filters: OrderFilterInputs,
    /// Заказ, открытый в диалоге деталей
    details: Option<OrderId>,
    create_order: CreateOrderDialog,
}

impl OrdersOverviewState {
    pub fn new(provider: &dyn DataProvider, config: &Config) -> Result<Self, WizardError> {
        let default_time = parse_delivery_time(&config.wizard.default_delivery_time)?;
        let calculator = RestockCalculator::new(DailyConsumption::from_config(&config.restock));

        Ok(Self {
            orders: provider.orders().to_vec(),
            filters: OrderFilterInputs::default(),
            details: None,
            create_order: CreateOrderDialog {
                is_open: false,
                wizard: CreateOrderWizard::new(provider, calculator, default_time),
            },
        })
    }

    pub fn orders(&self) -> &[PurchaseOrder] {
        &self.orders
    }

    pub fn filters(&self) -> &OrderFilterInputs {
        &self.filters
    }

    pub fn set_status_filter(&mut self, status: impl Into<String>) {
        self.filters.status = status.into();
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.filters.query = query.into();
    }

    pub fn set_min_amount(&mut self, value: impl Into<String>) {
        self.filters.min_amount = value.into();
    }

    pub fn set_max_amount(&mut self, value: impl Into<String>) {
        self.filters.max_amount = value.into();
    }

    pub fn reset_filters(&mut self) {
        self.filters = OrderFilterInputs::default();
    }

    pub fn filtered_orders(&self) -> Vec<PurchaseOrder> {
        service::filter(&self.orders, &self.filters.to_criteria())
    }

    pub fn statistics(&self) -> OrderStatistics {
        statistics::calculate(&self.orders, &self.filtered_orders())
    }

    /// Открыть диалог деталей; false, если заказа нет в списке
    pub fn open_order(&mut self, id: &OrderId) -> bool {
        if service::find_by_id(&self.orders, id).is_none() {
            return false;
        }
        self.details = Some(id.clone());
        true
    }

    pub fn close_order(&mut self) {
        self.details = None;
    }

    pub fn selected_order(&self) -> Option<&PurchaseOrder> {
        self.details
            .as_ref()
            .and_then(|id| service::find_by_id(&self.orders, id))
    }

    pub fn create_order_dialog(&self) -> &CreateOrderDialog {
        &self.create_order
    }

    pub fn create_order_dialog_mut(&mut self) -> &mut CreateOrderDialog {
        &mut self.create_order
    }

    pub fn open_create_order(&mut self) {
        self.create_order.is_open = true;
    }

    /// Закрытие диалога сбрасывает незавершённый мастер
    pub fn close_create_order(&mut self) {
        self.create_order.is_open = false;
        self.create_order.wizard.reset();
    }

    /// Добавить заказ по черновику из мастера.
    ///
    /// Сумма не рассчитывается (цены поставщика недоступны), количество
    /// позиций - число категорий с ненулевой потребностью.
    pub fn submit_draft(&mut self, draft: &OrderDraft, today: NaiveDate) -> PurchaseOrder {
        let order = PurchaseOrder {
            id: service::next_order_id(&self.orders, today.year()),
            supplier: draft.supplier.clone(),
            order_date: today,
            delivery_date: draft
                .first_delivery_date()
                .unwrap_or(draft.next_delivery_date),
            amount: 0,
            items: draft.needs.non_zero_count() as u32,
            status: OrderStatus::Pending,
            origin: Origin::Wizard,
        };

        info!("Order {} added for {}", order.id, order.supplier);
        self.orders.push(order.clone());
        self.close_create_order();
        debug!("Orders in list: {}", self.orders.len());
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::SeedDataProvider;
    use contracts::domain::a001_supplier::aggregate::SupplierId;
    use contracts::usecases::u501_create_order::step::WizardStepKind;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn state() -> OrdersOverviewState {
        let provider = SeedDataProvider::embedded().unwrap();
        OrdersOverviewState::new(&provider, &Config::default()).unwrap()
    }

    #[test]
    fn test_filters_and_reset() {
        let mut s = state();
        s.set_status_filter("processing");
        s.set_min_amount("20000");
        s.set_max_amount("30000");
        let filtered = s.filtered_orders();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id.value(), "#ORD-2024-002");

        s.set_search_query("иванов");
        assert!(s.filtered_orders().is_empty());
        assert_eq!(s.statistics().average_amount, 0.0);

        s.reset_filters();
        assert_eq!(s.filters(), &OrderFilterInputs::default());
        assert_eq!(s.filtered_orders().len(), 8);
    }

    #[test]
    fn test_details_dialog() {
        let mut s = state();
        assert!(!s.open_order(&OrderId::new("#ORD-2030-001")));
        assert!(s.selected_order().is_none());

        assert!(s.open_order(&OrderId::new("#ORD-2024-004")));
        assert_eq!(s.selected_order().unwrap().amount, 12900);
        s.close_order();
        assert!(s.selected_order().is_none());
    }

    #[test]
    fn test_closing_dialog_resets_wizard() {
        let mut s = state();
        s.open_create_order();
        let wizard = s.create_order_dialog_mut().wizard_mut();
        wizard.confirm_inventory(true).unwrap();
        assert_eq!(wizard.step_kind(), WizardStepKind::Supplier);

        s.close_create_order();
        assert!(!s.create_order_dialog().is_open());
        assert_eq!(
            s.create_order_dialog().wizard().step_kind(),
            WizardStepKind::Inventory
        );
    }

    #[test]
    fn test_submit_draft_appends_pending_order() {
        let mut s = state();
        s.open_create_order();

        let wizard = s.create_order_dialog_mut().wizard_mut();
        wizard.confirm_inventory(true).unwrap();
        wizard.select_supplier(&SupplierId::new("SUP-002")).unwrap();
        wizard.proceed().unwrap();
        wizard.toggle_delivery_date(d("2024-02-17")).unwrap();
        wizard.toggle_delivery_date(d("2024-02-14")).unwrap();
        wizard.select_next_delivery_date(d("2024-02-28")).unwrap();
        wizard.calculate_needs().unwrap();
        let draft = wizard.create_order().unwrap();

        let order = s.submit_draft(&draft, d("2024-02-12"));
        assert_eq!(order.id.value(), "#ORD-2024-009");
        assert_eq!(order.supplier, "ИП Иванов");
        assert_eq!(order.delivery_date, d("2024-02-14"));
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.origin, Origin::Wizard);
        // 11 дней: все шесть категорий в дефиците
        assert_eq!(order.items, 6);

        assert_eq!(s.orders().len(), 9);
        assert!(!s.create_order_dialog().is_open());

        s.set_status_filter("pending");
        assert_eq!(s.filtered_orders(), vec![order]);
    }

    #[test]
    fn test_invalid_default_time_in_config() {
        let provider = SeedDataProvider::embedded().unwrap();
        let mut config = Config::default();
        config.wizard.default_delivery_time = "ten".to_string();
        assert!(matches!(
            OrdersOverviewState::new(&provider, &config),
            Err(WizardError::InvalidTime(_))
        ));
    }
}
