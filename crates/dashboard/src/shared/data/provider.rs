use super::seed::SeedData;
use crate::shared::config::{self, Config};
use anyhow::Context;
use contracts::domain::a001_supplier::aggregate::Supplier;
use contracts::domain::a002_inventory::aggregate::InventoryRecord;
use contracts::domain::a003_purchase_order::aggregate::PurchaseOrder;
use contracts::domain::a004_delivery::aggregate::Delivery;
use std::path::Path;

/// Источник справочных данных для дашборда.
///
/// Передаётся в сервисы и состояния при старте вместо глобальных констант.
pub trait DataProvider {
    fn suppliers(&self) -> &[Supplier];
    fn inventory(&self) -> &InventoryRecord;
    fn orders(&self) -> &[PurchaseOrder];
    fn deliveries(&self) -> &[Delivery];
}

/// Провайдер поверх набора начальных данных в памяти
#[derive(Debug, Clone)]
pub struct SeedDataProvider {
    data: SeedData,
}

impl SeedDataProvider {
    pub fn new(data: SeedData) -> Self {
        Self { data }
    }

    /// Встроенный набор данных
    pub fn embedded() -> anyhow::Result<Self> {
        let data = SeedData::embedded().context("embedded seed data is invalid")?;
        Ok(Self::new(data))
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read seed file {}", path.display()))?;
        let data = SeedData::from_json(&json)
            .with_context(|| format!("invalid seed file {}", path.display()))?;
        Ok(Self::new(data))
    }

    /// Файл из конфигурации, если задан, иначе встроенный набор
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        match config::resolve_seed_path(config) {
            Some(path) => {
                tracing::info!("Loading seed data from: {}", path.display());
                Self::from_file(&path)
            }
            None => {
                tracing::info!("Using embedded seed data");
                Self::embedded()
            }
        }
    }

    pub fn data(&self) -> &SeedData {
        &self.data
    }
}

impl DataProvider for SeedDataProvider {
    fn suppliers(&self) -> &[Supplier] {
        &self.data.suppliers
    }

    fn inventory(&self) -> &InventoryRecord {
        &self.data.inventory
    }

    fn orders(&self) -> &[PurchaseOrder] {
        &self.data.orders
    }

    fn deliveries(&self) -> &[Delivery] {
        &self.data.deliveries
    }
}
