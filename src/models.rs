use serde::{Deserialize, Deserializer, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Company {
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Convention {
    pub name: String,
}

// Unknown fields the API sends (storage keys, booth ids) are ignored by serde.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Video {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub purchased: bool,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationInfo {
    pub total_items: u32,
    pub total_pages: u32,
}

impl PaginationInfo {
    /// Page count implied by `total_items` at the given page size.
    pub fn expected_pages(&self, per_page: u32) -> u32 {
        if per_page == 0 {
            return 0;
        }
        self.total_items.div_ceil(per_page)
    }

    pub fn is_consistent_with(&self, per_page: u32) -> bool {
        self.expected_pages(per_page) == self.total_pages
    }
}

/// One page of `GET /api/videos`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VideoPage {
    pub videos: Vec<Video>,
    pub pagination: PaginationInfo,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!("invalid video id: {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceiling_division_for_page_count() {
        let info = PaginationInfo { total_items: 25, total_pages: 3 };
        assert_eq!(info.expected_pages(12), 3);
        assert!(info.is_consistent_with(12));
        assert!(!info.is_consistent_with(24));
    }

    #[test]
    fn exact_multiple_and_empty() {
        assert_eq!(PaginationInfo { total_items: 24, total_pages: 2 }.expected_pages(12), 2);
        assert_eq!(PaginationInfo { total_items: 0, total_pages: 0 }.expected_pages(12), 0);
        assert_eq!(PaginationInfo { total_items: 5, total_pages: 1 }.expected_pages(0), 0);
    }

    #[test]
    fn video_accepts_sparse_payload_and_numeric_id() {
        let v: Video = serde_json::from_str(r#"{"id": 7, "title": "Keynote"}"#).unwrap();
        assert_eq!(v.id, "7");
        assert_eq!(v.price, None);
        assert_eq!(v.video_url, None);
        assert!(!v.purchased);
    }

    #[test]
    fn video_ignores_storage_fields() {
        let v: Video = serde_json::from_str(
            r#"{
                "id": "booth_A/intro_reel.mp4",
                "booth_id": "booth_A",
                "title": "Intro Reel",
                "description": "Video file: intro_reel.mp4",
                "price": 9.99,
                "s3_bucket_name": "bucket",
                "s3_object_key": "booth_A/intro_reel.mp4",
                "purchased": false,
                "video_url": "https://cdn.example.com/intro_reel.mp4"
            }"#,
        )
        .unwrap();
        assert_eq!(v.id, "booth_A/intro_reel.mp4");
        assert_eq!(v.price, Some(9.99));
        assert_eq!(v.video_url.as_deref(), Some("https://cdn.example.com/intro_reel.mp4"));
    }

    #[test]
    fn video_rejects_missing_id() {
        assert!(serde_json::from_str::<Video>(r#"{"title": "x"}"#).is_err());
    }
}
