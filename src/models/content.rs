use serde::{Deserialize, Serialize};

/// Summary of one content item as returned by the listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub post_date: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

/// Category descriptor cached alongside a listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub id: String,
    pub name: String,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_item_camel_case_fields() {
        let json = r#"{
            "id": "42",
            "name": "Spring set",
            "category": "cosplay",
            "postDate": "2024-03-01",
            "slug": "spring-set",
            "preview": "https://cdn.example.com/p/42.jpg",
            "createdAt": "2024-03-01T10:00:00Z",
            "contentType": "vip"
        }"#;

        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.post_date, "2024-03-01");
        assert_eq!(item.preview.as_deref(), Some("https://cdn.example.com/p/42.jpg"));
        assert!(item.thumbnail.is_none());
        assert_eq!(item.content_type.as_deref(), Some("vip"));
    }

    #[test]
    fn test_optional_fields_omitted_when_none() {
        let item = ContentItem {
            id: "1".to_string(),
            name: "a".to_string(),
            category: "c".to_string(),
            post_date: "2024-01-01".to_string(),
            slug: "a".to_string(),
            preview: None,
            thumbnail: None,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            content_type: None,
        };

        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("preview"));
        assert!(!json.contains("contentType"));
        assert!(json.contains("\"postDate\""));
    }
}
