use serde::{Deserialize, Serialize};

/// Категория товара, по которой ведётся учёт остатков и потребностей
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Buns,
    Patties,
    Tomatoes,
    Cucumbers,
    Fries,
    Cola,
}

impl ItemCategory {
    /// Все категории в порядке отображения
    pub const ALL: [ItemCategory; 6] = [
        ItemCategory::Buns,
        ItemCategory::Patties,
        ItemCategory::Tomatoes,
        ItemCategory::Cucumbers,
        ItemCategory::Fries,
        ItemCategory::Cola,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ItemCategory::Buns => "buns",
            ItemCategory::Patties => "patties",
            ItemCategory::Tomatoes => "tomatoes",
            ItemCategory::Cucumbers => "cucumbers",
            ItemCategory::Fries => "fries",
            ItemCategory::Cola => "cola",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            ItemCategory::Buns => "Булочки",
            ItemCategory::Patties => "Котлеты",
            ItemCategory::Tomatoes => "Помидоры",
            ItemCategory::Cucumbers => "Огурцы",
            ItemCategory::Fries => "Картошка фри",
            ItemCategory::Cola => "Кока-кола",
        }
    }

    /// Единица измерения остатков
    pub fn unit(&self) -> &'static str {
        match self {
            ItemCategory::Buns | ItemCategory::Patties => "шт",
            ItemCategory::Tomatoes | ItemCategory::Cucumbers | ItemCategory::Fries => "кг",
            ItemCategory::Cola => "л",
        }
    }
}

impl std::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
