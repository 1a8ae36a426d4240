use super::error::WizardError;
use crate::shared::config::RestockConfig;
use contracts::domain::a002_inventory::aggregate::{InventoryRecord, ItemQuantities};
use contracts::enums::ItemCategory;
use chrono::NaiveDate;

/// Нормы расхода в день по умолчанию
pub const DEFAULT_DAILY_CONSUMPTION: ItemQuantities = ItemQuantities {
    buns: 50,
    patties: 45,
    tomatoes: 20,
    cucumbers: 18,
    fries: 30,
    cola: 25,
};

/// Ожидаемый расход в день по каждой категории (единиц в день)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyConsumption(ItemQuantities);

impl DailyConsumption {
    pub fn new(rates: ItemQuantities) -> Self {
        Self(rates)
    }

    pub fn from_config(config: &RestockConfig) -> Self {
        config
            .daily_consumption
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn rate(&self, category: ItemCategory) -> u32 {
        self.0.get(category)
    }

    pub fn rates(&self) -> &ItemQuantities {
        &self.0
    }
}

impl Default for DailyConsumption {
    fn default() -> Self {
        Self(DEFAULT_DAILY_CONSUMPTION)
    }
}

/// Расчёт потребностей: сколько нужно заказать, чтобы остатков хватило
/// до следующей поставки.
#[derive(Debug, Clone, Copy, Default)]
pub struct RestockCalculator {
    consumption: DailyConsumption,
}

impl RestockCalculator {
    pub fn new(consumption: DailyConsumption) -> Self {
        Self { consumption }
    }

    pub fn consumption(&self) -> &DailyConsumption {
        &self.consumption
    }

    /// Число дней от последней выбранной поставки до следующей.
    ///
    /// Даты календарные, поэтому округление вверх сводится к разнице дней.
    /// Ошибка, если даты не выбраны или следующая поставка не позже последней.
    pub fn days_to_next_delivery(
        selected_delivery_dates: &[NaiveDate],
        next_delivery_date: NaiveDate,
    ) -> Result<u32, WizardError> {
        let last = selected_delivery_dates
            .iter()
            .max()
            .ok_or(WizardError::InvalidSelection)?;

        let days = next_delivery_date.signed_duration_since(*last).num_days();
        if days <= 0 {
            return Err(WizardError::InvalidSelection);
        }
        Ok(u32::try_from(days).unwrap_or(u32::MAX))
    }

    /// `need = max(0, rate * days - on_hand)` по каждой категории
    pub fn compute_needs(
        &self,
        selected_delivery_dates: &[NaiveDate],
        next_delivery_date: NaiveDate,
        inventory: &InventoryRecord,
    ) -> Result<ItemQuantities, WizardError> {
        let days = Self::days_to_next_delivery(selected_delivery_dates, next_delivery_date)?;

        Ok(ItemQuantities::from_fn(|category| {
            self.consumption
                .rate(category)
                .saturating_mul(days)
                .saturating_sub(inventory.items.get(category))
        }))
    }
}
