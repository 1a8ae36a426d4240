pub mod a003_purchase_order;
pub mod a004_delivery;
