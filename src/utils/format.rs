/// Formats centavos as pt-BR currency: 6000 -> "R$ 60,00".
pub fn format_price(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    let reais = cents / 100;
    let rest = cents % 100;

    // Thousands groups separated by dots, decimals by a comma.
    let digits = reais.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!("{sign}R$ {grouped},{rest:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_prices() {
        assert_eq!(format_price(6000), "R$ 60,00");
        assert_eq!(format_price(10000), "R$ 100,00");
        assert_eq!(format_price(15000), "R$ 150,00");
    }

    #[test]
    fn test_cents_and_grouping() {
        assert_eq!(format_price(0), "R$ 0,00");
        assert_eq!(format_price(5), "R$ 0,05");
        assert_eq!(format_price(12345), "R$ 123,45");
        assert_eq!(format_price(1234567), "R$ 12.345,67");
        assert_eq!(format_price(100000000), "R$ 1.000.000,00");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(format_price(-6000), "-R$ 60,00");
    }
}
