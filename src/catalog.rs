use crate::models::Plan;
use std::sync::LazyLock;

pub const WHATSAPP_SUPPORT_URL: &str =
    "https://wa.me/5511999999999?text=Comprei%20chamada%20-%20preciso%20de%20ajuda";

/// Fixed offer list. Defined at deploy time, immutable at runtime; prices are
/// in centavos (BRL minor units).
static PLANS: LazyLock<Vec<Plan>> = LazyLock::new(|| {
    vec![
        Plan {
            id: "5min".to_string(),
            name: "5 Minutos".to_string(),
            minutes_label: "5 minutos".to_string(),
            price_cents: 6000,
            description: "Uma experiência íntima e exclusiva".to_string(),
        },
        Plan {
            id: "10min".to_string(),
            name: "10 Minutos".to_string(),
            minutes_label: "10 minutos".to_string(),
            price_cents: 10000,
            description: "Mais tempo pra conversas quentes".to_string(),
        },
        Plan {
            id: "15min".to_string(),
            name: "15 Minutos".to_string(),
            minutes_label: "15 minutos".to_string(),
            price_cents: 15000,
            description: "Experiência completa".to_string(),
        },
    ]
});

pub fn plans() -> &'static [Plan] {
    &PLANS
}

pub fn find_plan(id: &str) -> Option<&'static Plan> {
    PLANS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_three_plans_with_unique_ids() {
        let plans = plans();
        assert_eq!(plans.len(), 3);
        for (i, a) in plans.iter().enumerate() {
            for b in &plans[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_find_plan() {
        let plan = find_plan("10min").unwrap();
        assert_eq!(plan.name, "10 Minutos");
        assert_eq!(plan.price_cents, 10000);

        assert_eq!(find_plan("5min").unwrap().price_cents, 6000);
        assert_eq!(find_plan("15min").unwrap().price_cents, 15000);
        assert!(find_plan("30min").is_none());
        assert!(find_plan("").is_none());
    }

    #[test]
    fn test_all_prices_positive() {
        assert!(plans().iter().all(|p| p.price_cents > 0));
    }
}
