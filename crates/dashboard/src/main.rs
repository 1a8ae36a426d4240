use dashboard::dashboards::d400_orders_overview::state::OrdersOverviewState;
use dashboard::dashboards::d401_delivery_calendar::state::DeliveryCalendarState;
use dashboard::shared::config;
use dashboard::shared::data::{DataProvider, SeedDataProvider};
use dashboard::shared::date_utils::{format_date, format_date_long};
use dashboard::shared::format::{format_amount, format_quantity};
use tracing::info;

fn main() -> anyhow::Result<()> {
    dashboard::system::tracing::initialize()?;

    let config = config::load_config()?;
    let provider = SeedDataProvider::from_config(&config)?;
    let overview = OrdersOverviewState::new(&provider, &config)?;

    let stats = overview.statistics();
    info!("Активные заказы: {}", stats.active_orders);
    info!("Ожидают подтверждения: {}", stats.awaiting_confirmation);
    info!("Выручка (без отменённых): {}", format_amount(stats.total_revenue));
    info!(
        "Средняя сумма заказа: {}",
        format_amount(stats.average_amount.round() as u64)
    );

    let inventory = provider.inventory();
    info!(
        "Инвентаризация от {}",
        format_date_long(inventory.last_inventory_date)
    );
    for (category, qty) in inventory.items.iter() {
        info!("  {}: {}", category.display_name(), format_quantity(qty, category.unit()));
    }

    let calendar = DeliveryCalendarState::new(&provider, chrono::Local::now().date_naive());
    for delivery in calendar.upcoming() {
        info!(
            "Поставка {} {} {}: {} ({})",
            delivery.id.value(),
            format_date(delivery.date),
            delivery.time.format("%H:%M"),
            delivery.supplier,
            delivery.order_id
        );
    }

    Ok(())
}
