pub mod item_category;
pub mod order_status;

pub use item_category::ItemCategory;
pub use order_status::OrderStatus;
