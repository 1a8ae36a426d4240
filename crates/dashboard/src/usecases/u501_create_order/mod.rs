pub mod error;
pub mod restock;
pub mod wizard;

pub use error::WizardError;
pub use restock::{DailyConsumption, RestockCalculator};
pub use wizard::{CalendarSelection, CreateOrderWizard, WizardStep};
