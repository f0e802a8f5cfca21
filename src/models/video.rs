use serde::{Deserialize, Serialize};

/// A `videos` row. Only the columns the verifier needs are mapped; the
/// PostgREST response may carry more.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    #[serde(default)]
    pub storage_path: String,
    #[serde(default)]
    pub active_for_plans: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_with_extra_columns() {
        let row = serde_json::json!({
            "id": "vid-1",
            "storage_path": "videos/loop.mp4",
            "active_for_plans": ["5min", "10min"],
            "title": "Loop",
            "uploaded_by": "admin"
        });
        let video: Video = serde_json::from_value(row).unwrap();
        assert_eq!(video.id, "vid-1");
        assert_eq!(video.active_for_plans, vec!["5min", "10min"]);
    }
}
