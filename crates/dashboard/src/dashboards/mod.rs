pub mod d400_orders_overview;
pub mod d401_delivery_calendar;
