use serde::{Deserialize, Serialize};

/// Источник данных для записи
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Origin {
    /// Начальные (демонстрационные) данные
    #[default]
    #[serde(rename = "seed")]
    Seed,
    /// Создано мастером заказа в текущей сессии
    #[serde(rename = "wizard")]
    Wizard,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Seed => "seed",
            Origin::Wizard => "wizard",
        }
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
