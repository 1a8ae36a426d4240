use contracts::usecases::u501_create_order::step::WizardStepKind;
use thiserror::Error;

/// Ошибки мастера создания заказа.
///
/// Все ошибки восстановимы: мастер остаётся на текущем шаге.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Выберите даты поставок и дату следующей поставки")]
    InvalidSelection,

    #[error("Поставщик не выбран")]
    NoSupplierSelected,

    #[error("Неизвестный поставщик: {0}")]
    UnknownSupplier(String),

    #[error("Загрузка файла инвентаризации не поддерживается")]
    InventoryUploadUnsupported,

    #[error("Сначала рассчитайте потребности")]
    NeedsNotCalculated,

    #[error("Некорректное время (ожидается ЧЧ:ММ): {0}")]
    InvalidTime(String),

    #[error("Операция недоступна на шаге '{}'", .0.code())]
    WrongStep(WizardStepKind),
}
