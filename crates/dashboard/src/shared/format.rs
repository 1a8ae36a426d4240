/// Форматирует число с разделителями тысяч (пробелами), как в ru-RU
///
/// # Примеры
/// ```
/// use dashboard::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1 234 567");
/// assert_eq!(format_number(42), "42");
/// assert_eq!(format_number(0), "0");
/// ```
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(' ');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Сумма в рублях: "45 800 ₽"
pub fn format_amount(amount: u64) -> String {
    format!("{} ₽", format_number(amount))
}

/// Количество с единицей измерения: "500 шт"
pub fn format_quantity(qty: u32, unit: &str) -> String {
    format!("{} {}", format_number(qty as u64), unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1 000");
        assert_eq!(format_number(89300), "89 300");
        assert_eq!(format_number(1234567890), "1 234 567 890");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(45800), "45 800 ₽");
        assert_eq!(format_quantity(180, "кг"), "180 кг");
    }
}
