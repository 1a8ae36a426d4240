use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов агрегатов
///
/// Идентификаторы в этом домене строковые с бизнес-префиксом
/// (`SUP-001`, `#ORD-2024-001`, `DEL-001`).
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Префикс идентификатора
    const PREFIX: &'static str;

    /// Преобразовать ID в строку
    fn as_string(&self) -> String;

    /// Создать ID из строки
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Проверка строкового идентификатора: непустой и с нужным префиксом
pub fn validate_prefixed(s: &str, prefix: &str) -> Result<(), String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("Empty identifier".to_string());
    }
    if !s.starts_with(prefix) {
        return Err(format!("Identifier '{}' must start with '{}'", s, prefix));
    }
    if s.len() == prefix.len() {
        return Err(format!("Identifier '{}' has no number after prefix", s));
    }
    Ok(())
}
