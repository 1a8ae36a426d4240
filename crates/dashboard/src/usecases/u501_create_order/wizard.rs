use super::error::WizardError;
use super::restock::RestockCalculator;
use crate::shared::data::DataProvider;
use chrono::{NaiveDate, NaiveTime};
use contracts::domain::a001_supplier::aggregate::{Supplier, SupplierId};
use contracts::domain::a002_inventory::aggregate::{InventoryRecord, ItemQuantities};
use contracts::domain::a004_delivery::aggregate::hh_mm;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_create_order::draft::OrderDraft;
use contracts::usecases::u501_create_order::step::WizardStepKind;
use contracts::usecases::u501_create_order::CreateOrder;
use tracing::{debug, info, warn};

/// Время следующей поставки, предлагаемое по умолчанию
pub const DEFAULT_DELIVERY_TIME: &str = "10:00";

/// Разбор времени из поля ввода (ЧЧ:ММ)
pub fn parse_delivery_time(input: &str) -> Result<NaiveTime, WizardError> {
    NaiveTime::parse_from_str(input.trim(), hh_mm::FORMAT)
        .map_err(|_| WizardError::InvalidTime(input.to_string()))
}

/// Состояние шага "Календарь поставок"
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarSelection {
    supplier: Supplier,
    /// Выбранные даты поставок, всегда по возрастанию
    delivery_dates: Vec<NaiveDate>,
    next_delivery_date: Option<NaiveDate>,
    next_delivery_time: NaiveTime,
    needs: Option<ItemQuantities>,
}

impl CalendarSelection {
    pub fn new(supplier: Supplier, next_delivery_time: NaiveTime) -> Self {
        Self {
            supplier,
            delivery_dates: Vec::new(),
            next_delivery_date: None,
            next_delivery_time,
            needs: None,
        }
    }

    pub fn supplier(&self) -> &Supplier {
        &self.supplier
    }

    pub fn delivery_dates(&self) -> &[NaiveDate] {
        &self.delivery_dates
    }

    pub fn next_delivery_date(&self) -> Option<NaiveDate> {
        self.next_delivery_date
    }

    pub fn next_delivery_time(&self) -> NaiveTime {
        self.next_delivery_time
    }

    /// Последний расчёт потребностей (сбрасывается при изменении дат)
    pub fn needs(&self) -> Option<&ItemQuantities> {
        self.needs.as_ref()
    }

    pub fn latest_delivery_date(&self) -> Option<NaiveDate> {
        self.delivery_dates.last().copied()
    }

    /// Можно ли выбрать дату следующей поставки: строго после последней
    /// выбранной даты поставки.
    pub fn is_next_delivery_selectable(&self, date: NaiveDate) -> bool {
        self.latest_delivery_date().is_some_and(|last| date > last)
    }

    /// Расчёт возможен, когда выбраны даты поставок и следующая поставка
    pub fn can_calculate(&self) -> bool {
        !self.delivery_dates.is_empty() && self.next_delivery_date.is_some()
    }

    /// Добавить дату в выбранные или убрать её оттуда.
    ///
    /// Даты вне графика поставщика игнорируются. Возвращает true, если
    /// выбор изменился.
    pub fn toggle_delivery_date(&mut self, date: NaiveDate) -> bool {
        if !self.supplier.is_delivery_day(date) {
            debug!("{} is not a delivery day of {}", date, self.supplier.id);
            return false;
        }

        match self.delivery_dates.binary_search(&date) {
            Ok(pos) => {
                self.delivery_dates.remove(pos);
            }
            Err(pos) => self.delivery_dates.insert(pos, date),
        }
        self.needs = None;

        if let Some(next) = self.next_delivery_date {
            if !self.is_next_delivery_selectable(next) {
                warn!(
                    "Next delivery {} is no longer after the selected deliveries, clearing it",
                    next
                );
                self.next_delivery_date = None;
            }
        }
        true
    }

    pub fn select_next_delivery_date(&mut self, date: NaiveDate) -> Result<(), WizardError> {
        if !self.is_next_delivery_selectable(date) {
            return Err(WizardError::InvalidSelection);
        }
        if self.next_delivery_date != Some(date) {
            self.needs = None;
        }
        self.next_delivery_date = Some(date);
        Ok(())
    }

    pub fn set_next_delivery_time(&mut self, input: &str) -> Result<(), WizardError> {
        self.next_delivery_time = parse_delivery_time(input)?;
        Ok(())
    }

    pub fn calculate_needs(
        &mut self,
        calculator: &RestockCalculator,
        inventory: &InventoryRecord,
    ) -> Result<ItemQuantities, WizardError> {
        let next = self
            .next_delivery_date
            .ok_or(WizardError::InvalidSelection)?;
        let needs = calculator.compute_needs(&self.delivery_dates, next, inventory)?;
        self.needs = Some(needs);
        Ok(needs)
    }

    fn to_draft(&self, inventory_date: NaiveDate) -> Result<OrderDraft, WizardError> {
        let needs = self.needs.ok_or(WizardError::NeedsNotCalculated)?;
        let next_delivery_date = self
            .next_delivery_date
            .ok_or(WizardError::InvalidSelection)?;

        Ok(OrderDraft {
            supplier_id: self.supplier.id.clone(),
            supplier: self.supplier.name.clone(),
            delivery_dates: self.delivery_dates.clone(),
            next_delivery_date,
            next_delivery_time: self.next_delivery_time,
            needs,
            inventory_date,
        })
    }
}

/// Текущий шаг мастера вместе с данными шага
#[derive(Debug, Clone, PartialEq)]
pub enum WizardStep {
    /// Проверка данных инвентаризации
    Inventory,
    /// Выбор поставщика
    Supplier { selected: Option<SupplierId> },
    /// Выбор дат поставок и расчёт потребностей
    Calendar(CalendarSelection),
}

impl WizardStep {
    pub fn kind(&self) -> WizardStepKind {
        match self {
            WizardStep::Inventory => WizardStepKind::Inventory,
            WizardStep::Supplier { .. } => WizardStepKind::Supplier,
            WizardStep::Calendar(_) => WizardStepKind::Calendar,
        }
    }
}

/// Мастер создания заказа: inventory -> supplier -> calendar
#[derive(Debug, Clone)]
pub struct CreateOrderWizard {
    suppliers: Vec<Supplier>,
    inventory: InventoryRecord,
    calculator: RestockCalculator,
    default_delivery_time: NaiveTime,
    step: WizardStep,
}

impl CreateOrderWizard {
    pub fn new(
        provider: &dyn DataProvider,
        calculator: RestockCalculator,
        default_delivery_time: NaiveTime,
    ) -> Self {
        Self {
            suppliers: provider.suppliers().to_vec(),
            inventory: provider.inventory().clone(),
            calculator,
            default_delivery_time,
            step: WizardStep::Inventory,
        }
    }

    pub fn step(&self) -> &WizardStep {
        &self.step
    }

    pub fn step_kind(&self) -> WizardStepKind {
        self.step.kind()
    }

    pub fn inventory(&self) -> &InventoryRecord {
        &self.inventory
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn calendar(&self) -> Option<&CalendarSelection> {
        match &self.step {
            WizardStep::Calendar(selection) => Some(selection),
            _ => None,
        }
    }

    fn find_supplier(&self, id: &SupplierId) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| &s.id == id)
    }

    fn calendar_mut(&mut self) -> Result<&mut CalendarSelection, WizardError> {
        match &mut self.step {
            WizardStep::Calendar(selection) => Ok(selection),
            other => Err(WizardError::WrongStep(other.kind())),
        }
    }

    /// Шаг 1. `use_existing = false` означает загрузку файла инвентаризации,
    /// которая не поддерживается.
    pub fn confirm_inventory(&mut self, use_existing: bool) -> Result<(), WizardError> {
        if self.step != WizardStep::Inventory {
            return Err(WizardError::WrongStep(self.step.kind()));
        }
        if !use_existing {
            warn!("Inventory file upload requested");
            return Err(WizardError::InventoryUploadUnsupported);
        }
        self.step = WizardStep::Supplier { selected: None };
        debug!("Wizard step: {}", self.step.kind().title());
        Ok(())
    }

    /// Шаг 2. Неизвестный поставщик сбрасывает выбор.
    pub fn select_supplier(&mut self, id: &SupplierId) -> Result<(), WizardError> {
        let known = self.find_supplier(id).is_some();
        match &mut self.step {
            WizardStep::Supplier { selected } => {
                if known {
                    *selected = Some(id.clone());
                    Ok(())
                } else {
                    *selected = None;
                    Err(WizardError::UnknownSupplier(id.to_string()))
                }
            }
            other => Err(WizardError::WrongStep(other.kind())),
        }
    }

    pub fn selected_supplier(&self) -> Option<&Supplier> {
        match &self.step {
            WizardStep::Supplier { selected: Some(id) } => self.find_supplier(id),
            WizardStep::Calendar(selection) => Some(selection.supplier()),
            _ => None,
        }
    }

    /// Переход с выбора поставщика на календарь
    pub fn proceed(&mut self) -> Result<(), WizardError> {
        let supplier = match &self.step {
            WizardStep::Supplier { selected: Some(id) } => self
                .find_supplier(id)
                .cloned()
                .ok_or_else(|| WizardError::UnknownSupplier(id.to_string()))?,
            WizardStep::Supplier { selected: None } => {
                return Err(WizardError::NoSupplierSelected)
            }
            other => return Err(WizardError::WrongStep(other.kind())),
        };

        debug!("Wizard step: {} ({})", WizardStepKind::Calendar.title(), supplier.id);
        self.step = WizardStep::Calendar(CalendarSelection::new(
            supplier,
            self.default_delivery_time,
        ));
        Ok(())
    }

    /// Назад на предыдущий шаг. С календаря возвращаемся к выбору
    /// поставщика, поставщик остаётся выбранным, даты сбрасываются.
    pub fn back(&mut self) {
        self.step = match std::mem::replace(&mut self.step, WizardStep::Inventory) {
            WizardStep::Inventory | WizardStep::Supplier { .. } => WizardStep::Inventory,
            WizardStep::Calendar(selection) => WizardStep::Supplier {
                selected: Some(selection.supplier.id),
            },
        };
    }

    pub fn toggle_delivery_date(&mut self, date: NaiveDate) -> Result<bool, WizardError> {
        Ok(self.calendar_mut()?.toggle_delivery_date(date))
    }

    pub fn select_next_delivery_date(&mut self, date: NaiveDate) -> Result<(), WizardError> {
        self.calendar_mut()?.select_next_delivery_date(date)
    }

    pub fn set_next_delivery_time(&mut self, input: &str) -> Result<(), WizardError> {
        self.calendar_mut()?.set_next_delivery_time(input)
    }

    pub fn calculate_needs(&mut self) -> Result<ItemQuantities, WizardError> {
        match &mut self.step {
            WizardStep::Calendar(selection) => {
                let needs = selection.calculate_needs(&self.calculator, &self.inventory)?;
                debug!("Calculated needs: {:?}", needs);
                Ok(needs)
            }
            other => Err(WizardError::WrongStep(other.kind())),
        }
    }

    /// Завершение мастера: черновик заказа, после чего мастер сбрасывается
    pub fn create_order(&mut self) -> Result<OrderDraft, WizardError> {
        let draft = match &self.step {
            WizardStep::Calendar(selection) => {
                selection.to_draft(self.inventory.last_inventory_date)?
            }
            other => return Err(WizardError::WrongStep(other.kind())),
        };

        info!(
            "{}: supplier={}, deliveries={}, next={} {}",
            CreateOrder::full_name(),
            draft.supplier_id,
            draft.delivery_dates.len(),
            draft.next_delivery_date,
            draft.next_delivery_time.format(hh_mm::FORMAT)
        );
        self.reset();
        Ok(draft)
    }

    pub fn reset(&mut self) {
        self.step = WizardStep::Inventory;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::SeedDataProvider;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn wizard() -> CreateOrderWizard {
        let provider = SeedDataProvider::embedded().unwrap();
        CreateOrderWizard::new(
            &provider,
            RestockCalculator::default(),
            parse_delivery_time(DEFAULT_DELIVERY_TIME).unwrap(),
        )
    }

    fn wizard_on_calendar(supplier: &str) -> CreateOrderWizard {
        let mut w = wizard();
        w.confirm_inventory(true).unwrap();
        w.select_supplier(&SupplierId::new(supplier)).unwrap();
        w.proceed().unwrap();
        w
    }

    #[test]
    fn test_full_flow() {
        let mut w = wizard();
        assert_eq!(w.step_kind(), WizardStepKind::Inventory);

        w.confirm_inventory(true).unwrap();
        assert_eq!(w.step_kind(), WizardStepKind::Supplier);
        assert_eq!(w.proceed(), Err(WizardError::NoSupplierSelected));

        w.select_supplier(&SupplierId::new("SUP-001")).unwrap();
        assert_eq!(w.selected_supplier().unwrap().name, "ООО \"Поставщик-1\"");
        w.proceed().unwrap();
        assert_eq!(w.step_kind(), WizardStepKind::Calendar);

        assert_eq!(w.toggle_delivery_date(d("2024-02-18")), Ok(true));
        assert_eq!(w.toggle_delivery_date(d("2024-02-15")), Ok(true));
        assert_eq!(
            w.calendar().unwrap().delivery_dates(),
            &[d("2024-02-15"), d("2024-02-18")]
        );

        w.select_next_delivery_date(d("2024-03-01")).unwrap();
        w.set_next_delivery_time("12:30").unwrap();

        // 12 дней после 18.02
        let needs = w.calculate_needs().unwrap();
        assert_eq!(needs.buns, 100);
        assert_eq!(needs.patties, 90);
        assert_eq!(needs.tomatoes, 40);
        assert_eq!(needs.cucumbers, 36);
        assert_eq!(needs.fries, 60);
        assert_eq!(needs.cola, 50);

        let draft = w.create_order().unwrap();
        assert_eq!(draft.supplier_id, SupplierId::new("SUP-001"));
        assert_eq!(draft.delivery_dates, vec![d("2024-02-15"), d("2024-02-18")]);
        assert_eq!(draft.next_delivery_date, d("2024-03-01"));
        assert_eq!(
            draft.next_delivery_time,
            NaiveTime::from_hms_opt(12, 30, 0).unwrap()
        );
        assert_eq!(draft.needs, needs);
        assert_eq!(draft.inventory_date, d("2024-02-10"));

        assert_eq!(w.step(), &WizardStep::Inventory);
    }

    #[test]
    fn test_inventory_upload_unsupported() {
        let mut w = wizard();
        assert_eq!(
            w.confirm_inventory(false),
            Err(WizardError::InventoryUploadUnsupported)
        );
        assert_eq!(w.step_kind(), WizardStepKind::Inventory);
    }

    #[test]
    fn test_unknown_supplier_clears_selection() {
        let mut w = wizard();
        w.confirm_inventory(true).unwrap();
        w.select_supplier(&SupplierId::new("SUP-002")).unwrap();
        assert_eq!(
            w.select_supplier(&SupplierId::new("SUP-404")),
            Err(WizardError::UnknownSupplier("SUP-404".to_string()))
        );
        assert!(w.selected_supplier().is_none());
    }

    #[test]
    fn test_wrong_step_operations() {
        let mut w = wizard();
        assert_eq!(
            w.toggle_delivery_date(d("2024-02-15")),
            Err(WizardError::WrongStep(WizardStepKind::Inventory))
        );
        assert_eq!(
            w.select_supplier(&SupplierId::new("SUP-001")),
            Err(WizardError::WrongStep(WizardStepKind::Inventory))
        );
        assert_eq!(
            w.create_order(),
            Err(WizardError::WrongStep(WizardStepKind::Inventory))
        );

        let mut w = wizard_on_calendar("SUP-001");
        assert_eq!(
            w.confirm_inventory(true),
            Err(WizardError::WrongStep(WizardStepKind::Calendar))
        );
    }

    #[test]
    fn test_date_outside_schedule_is_noop() {
        let mut w = wizard_on_calendar("SUP-002");
        assert_eq!(w.toggle_delivery_date(d("2024-02-15")), Ok(false));
        assert!(w.calendar().unwrap().delivery_dates().is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut w = wizard_on_calendar("SUP-003");
        w.toggle_delivery_date(d("2024-02-23")).unwrap();
        w.toggle_delivery_date(d("2024-02-16")).unwrap();
        let before = w.calendar().unwrap().delivery_dates().to_vec();

        for day in ["2024-02-20", "2024-02-16", "2024-03-02"] {
            w.toggle_delivery_date(d(day)).unwrap();
            w.toggle_delivery_date(d(day)).unwrap();
            assert_eq!(w.calendar().unwrap().delivery_dates(), before.as_slice());
        }
    }

    #[test]
    fn test_selection_stays_sorted() {
        let mut w = wizard_on_calendar("SUP-001");
        let schedule = w.selected_supplier().unwrap().delivery_days.clone();
        let n = schedule.len();

        // Детерминированная последовательность переключений
        for i in 0..40usize {
            let day = schedule[(i * 7 + i / 3) % n];
            w.toggle_delivery_date(day).unwrap();
            let dates = w.calendar().unwrap().delivery_dates();
            assert!(dates.windows(2).all(|p| p[0] < p[1]), "{:?}", dates);
        }
    }

    #[test]
    fn test_next_delivery_must_follow_latest_selected() {
        let mut w = wizard_on_calendar("SUP-001");
        assert_eq!(
            w.select_next_delivery_date(d("2024-02-20")),
            Err(WizardError::InvalidSelection)
        );
        assert_eq!(w.calculate_needs(), Err(WizardError::InvalidSelection));

        w.toggle_delivery_date(d("2024-02-18")).unwrap();
        assert_eq!(
            w.select_next_delivery_date(d("2024-02-18")),
            Err(WizardError::InvalidSelection)
        );
        w.select_next_delivery_date(d("2024-02-19")).unwrap();
    }

    #[test]
    fn test_adding_later_date_clears_next_delivery() {
        let mut w = wizard_on_calendar("SUP-001");
        w.toggle_delivery_date(d("2024-02-15")).unwrap();
        w.select_next_delivery_date(d("2024-02-20")).unwrap();
        w.calculate_needs().unwrap();

        w.toggle_delivery_date(d("2024-02-22")).unwrap();
        let calendar = w.calendar().unwrap();
        assert_eq!(calendar.next_delivery_date(), None);
        assert!(calendar.needs().is_none());
        assert!(!calendar.can_calculate());
    }

    #[test]
    fn test_removing_latest_date_reenables_earlier_next_dates() {
        let mut w = wizard_on_calendar("SUP-001");
        w.toggle_delivery_date(d("2024-02-15")).unwrap();
        w.toggle_delivery_date(d("2024-02-22")).unwrap();
        assert!(!w.calendar().unwrap().is_next_delivery_selectable(d("2024-02-20")));

        w.select_next_delivery_date(d("2024-02-25")).unwrap();
        w.toggle_delivery_date(d("2024-02-22")).unwrap();

        let calendar = w.calendar().unwrap();
        assert!(calendar.is_next_delivery_selectable(d("2024-02-20")));
        assert_eq!(calendar.next_delivery_date(), Some(d("2024-02-25")));
    }

    #[test]
    fn test_create_requires_calculation() {
        let mut w = wizard_on_calendar("SUP-002");
        w.toggle_delivery_date(d("2024-02-14")).unwrap();
        w.select_next_delivery_date(d("2024-02-17")).unwrap();
        assert_eq!(w.create_order(), Err(WizardError::NeedsNotCalculated));
        assert_eq!(w.step_kind(), WizardStepKind::Calendar);
    }

    #[test]
    fn test_invalid_time_keeps_previous() {
        let mut w = wizard_on_calendar("SUP-002");
        assert_eq!(
            w.set_next_delivery_time("25:99"),
            Err(WizardError::InvalidTime("25:99".to_string()))
        );
        assert_eq!(
            w.calendar().unwrap().next_delivery_time(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_back_navigation() {
        let mut w = wizard_on_calendar("SUP-003");
        w.toggle_delivery_date(d("2024-02-16")).unwrap();

        w.back();
        assert_eq!(
            w.step(),
            &WizardStep::Supplier {
                selected: Some(SupplierId::new("SUP-003"))
            }
        );
        w.proceed().unwrap();
        assert!(w.calendar().unwrap().delivery_dates().is_empty());

        w.back();
        w.back();
        assert_eq!(w.step(), &WizardStep::Inventory);
        w.back();
        assert_eq!(w.step(), &WizardStep::Inventory);
    }
}
