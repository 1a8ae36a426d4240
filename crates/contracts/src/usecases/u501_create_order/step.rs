use serde::{Deserialize, Serialize};

/// Шаг мастера создания заказа (без данных шага, для отображения)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStepKind {
    /// Проверка данных инвентаризации
    Inventory,
    /// Выбор поставщика
    Supplier,
    /// Календарь поставок и расчёт потребностей
    Calendar,
}

impl WizardStepKind {
    pub fn code(&self) -> &'static str {
        match self {
            WizardStepKind::Inventory => "inventory",
            WizardStepKind::Supplier => "supplier",
            WizardStepKind::Calendar => "calendar",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStepKind::Inventory => "Данные инвентаризации",
            WizardStepKind::Supplier => "Выбор поставщика",
            WizardStepKind::Calendar => "График поставок",
        }
    }

    /// Порядковый номер шага (с 1)
    pub fn number(&self) -> u8 {
        match self {
            WizardStepKind::Inventory => 1,
            WizardStepKind::Supplier => 2,
            WizardStepKind::Calendar => 3,
        }
    }
}
