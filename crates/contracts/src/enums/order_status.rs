use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Статус заказа на покупку
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
    Cancelled,
    AwaitingConfirmation,
}

impl OrderStatus {
    /// Получить код статуса
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::AwaitingConfirmation => "awaiting_confirmation",
        }
    }

    /// Получить человекочитаемое название (для бейджа статуса)
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Ожидает",
            OrderStatus::Processing => "Активный",
            OrderStatus::Completed => "Завершён",
            OrderStatus::Cancelled => "Отменён",
            OrderStatus::AwaitingConfirmation => "Ожидает подтверждения",
        }
    }

    /// Получить все статусы
    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
            OrderStatus::AwaitingConfirmation,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(OrderStatus::Pending),
            "processing" => Some(OrderStatus::Processing),
            "completed" => Some(OrderStatus::Completed),
            "cancelled" => Some(OrderStatus::Cancelled),
            "awaiting_confirmation" => Some(OrderStatus::AwaitingConfirmation),
            _ => None,
        }
    }
}

impl FromStr for OrderStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::from_code(s).ok_or_else(|| anyhow::anyhow!("Unknown order status: {}", s))
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
