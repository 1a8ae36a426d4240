use crate::enums::OrderStatus;
use serde::{Deserialize, Serialize};

/// Фильтр по статусу: все статусы или один конкретный
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    /// Код для выпадающего списка: "all" или код статуса
    pub fn code(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.code(),
        }
    }

    /// Неизвестный код трактуется как "все статусы"
    pub fn from_code(code: &str) -> Self {
        OrderStatus::from_code(code)
            .map(StatusFilter::Only)
            .unwrap_or(StatusFilter::All)
    }

    pub fn matches(&self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(expected) => *expected == status,
        }
    }
}

/// Критерии фильтрации списка заказов
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub status: StatusFilter,

    /// Поиск по поставщику или номеру заказа (без учёта регистра)
    pub query: String,

    /// Минимальная сумма (None - без нижней границы)
    pub min_amount: Option<i64>,

    /// Максимальная сумма (None - без верхней границы)
    pub max_amount: Option<i64>,
}

impl FilterCriteria {
    /// Собрать критерии из сырых значений полей ввода.
    ///
    /// Нечисловые и пустые суммы означают отсутствие границы.
    pub fn from_inputs(status: &str, query: &str, min_amount: &str, max_amount: &str) -> Self {
        Self {
            status: StatusFilter::from_code(status),
            query: query.to_string(),
            min_amount: parse_amount_bound(min_amount),
            max_amount: parse_amount_bound(max_amount),
        }
    }

    /// Критерии без ограничений
    pub fn is_empty(&self) -> bool {
        self.status == StatusFilter::All
            && self.query.is_empty()
            && self.min_amount.is_none()
            && self.max_amount.is_none()
    }
}

/// Разбор границы суммы из текста поля.
///
/// Берётся целочисленный префикс (необязательный знак и цифры после
/// пробелов): `"20000"` -> 20000, `"20000abc"` -> 20000, `"12.5"` -> 12.
/// Пустая строка или текст без цифр в начале -> None.
pub fn parse_amount_bound(input: &str) -> Option<i64> {
    let s = input.trim();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}
