use crate::enums::ItemCategory;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Количества по шести категориям товаров.
///
/// Закрытая запись: остатки, нормы расхода и потребности всегда содержат
/// ровно шесть категорий.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemQuantities {
    pub buns: u32,
    pub patties: u32,
    pub tomatoes: u32,
    pub cucumbers: u32,
    pub fries: u32,
    pub cola: u32,
}

impl ItemQuantities {
    pub fn get(&self, category: ItemCategory) -> u32 {
        match category {
            ItemCategory::Buns => self.buns,
            ItemCategory::Patties => self.patties,
            ItemCategory::Tomatoes => self.tomatoes,
            ItemCategory::Cucumbers => self.cucumbers,
            ItemCategory::Fries => self.fries,
            ItemCategory::Cola => self.cola,
        }
    }

    pub fn set(&mut self, category: ItemCategory, value: u32) {
        match category {
            ItemCategory::Buns => self.buns = value,
            ItemCategory::Patties => self.patties = value,
            ItemCategory::Tomatoes => self.tomatoes = value,
            ItemCategory::Cucumbers => self.cucumbers = value,
            ItemCategory::Fries => self.fries = value,
            ItemCategory::Cola => self.cola = value,
        }
    }

    /// Собрать запись, вычислив значение для каждой категории
    pub fn from_fn(mut f: impl FnMut(ItemCategory) -> u32) -> Self {
        let mut result = Self::default();
        for category in ItemCategory::ALL {
            result.set(category, f(category));
        }
        result
    }

    /// Пары (категория, количество) в порядке отображения
    pub fn iter(&self) -> impl Iterator<Item = (ItemCategory, u32)> + '_ {
        ItemCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Количество категорий с ненулевым значением
    pub fn non_zero_count(&self) -> usize {
        self.iter().filter(|(_, qty)| *qty > 0).count()
    }

    pub fn is_zero(&self) -> bool {
        self.non_zero_count() == 0
    }
}

/// Снимок последней инвентаризации (только чтение)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryRecord {
    /// Дата последней инвентаризации
    pub last_inventory_date: NaiveDate,

    /// Остатки по категориям
    pub items: ItemQuantities,
}

impl InventoryRecord {
    pub fn new(last_inventory_date: NaiveDate, items: ItemQuantities) -> Self {
        Self {
            last_inventory_date,
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_cover_all_categories() {
        let mut q = ItemQuantities::default();
        for (i, category) in ItemCategory::ALL.into_iter().enumerate() {
            q.set(category, (i as u32 + 1) * 10);
        }
        assert_eq!(
            q,
            ItemQuantities {
                buns: 10,
                patties: 20,
                tomatoes: 30,
                cucumbers: 40,
                fries: 50,
                cola: 60,
            }
        );
        let collected: Vec<u32> = q.iter().map(|(_, v)| v).collect();
        assert_eq!(collected, vec![10, 20, 30, 40, 50, 60]);
    }

    #[test]
    fn test_non_zero_count() {
        let q = ItemQuantities {
            buns: 0,
            patties: 5,
            cola: 1,
            ..Default::default()
        };
        assert_eq!(q.non_zero_count(), 2);
        assert!(!q.is_zero());
        assert!(ItemQuantities::default().is_zero());
    }

    #[test]
    fn test_inventory_deserializes_from_seed_shape() {
        let json = r#"{
            "last_inventory_date": "2024-02-10",
            "items": {"buns": 500, "patties": 450, "tomatoes": 200,
                      "cucumbers": 180, "fries": 300, "cola": 250}
        }"#;
        let record: InventoryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.items.get(ItemCategory::Cucumbers), 180);
        assert_eq!(
            record.last_inventory_date,
            NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()
        );
    }
}
