/// Label shown under the star row once a rating is picked. Feedback stays
/// client-side; these strings are embedded into the feedback page.
pub fn rating_label(rating: u8) -> Option<&'static str> {
    match rating {
        1 => Some("Vamos melhorar! 💪"),
        2 => Some("Pode melhorar 🤔"),
        3 => Some("Bom! 👍"),
        4 => Some("Muito bom! 😊"),
        5 => Some("Perfeito! 🌟"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_labels() {
        assert_eq!(rating_label(5), Some("Perfeito! 🌟"));
        assert_eq!(rating_label(4), Some("Muito bom! 😊"));
        assert_eq!(rating_label(3), Some("Bom! 👍"));
        assert_eq!(rating_label(2), Some("Pode melhorar 🤔"));
        assert_eq!(rating_label(1), Some("Vamos melhorar! 💪"));
    }

    #[test]
    fn test_out_of_range_has_no_label() {
        assert_eq!(rating_label(0), None);
        assert_eq!(rating_label(6), None);
    }
}
