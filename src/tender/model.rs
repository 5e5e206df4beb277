//! 招标记录数据模型（与后端列表接口的返回结构一致）

use serde::{Deserialize, Serialize};

/// 招标来源机构
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenderSource {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub url: String,
    pub slug: String,
}

/// 招标记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenderRecord {
    pub id: i64,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<TenderSource>,
    /// 已存储的分类键（重新分类时更新）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl TenderRecord {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// 从 JSON 数组解析招标列表
pub fn parse_tenders(json: &str) -> crate::TenderResult<Vec<TenderRecord>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
pub(crate) fn tender(id: i64, title: &str, description: Option<&str>, created_at: &str) -> TenderRecord {
    TenderRecord {
        id,
        title: title.to_string(),
        url: format!("https://ekap.example/ihale/{}", id),
        description: description.map(str::to_string),
        published_at: None,
        created_at: created_at.to_string(),
        source: None,
        category: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_listing_payload() {
        let json = r#"[
            {
                "id": 7,
                "title": "Sunucu ve switch alımı",
                "url": "https://example.org/ihale/7",
                "description": null,
                "published_at": "2024-02-10T00:00:00",
                "created_at": "2024-02-11T08:30:00",
                "source": {"id": 2, "name": "TEİAŞ", "url": "https://www.teias.gov.tr", "slug": "teias"}
            },
            {
                "id": 8,
                "title": "Yemek hizmeti",
                "url": "https://example.org/ihale/8",
                "created_at": "2024-02-12T08:30:00"
            }
        ]"#;

        let tenders = parse_tenders(json).unwrap();
        assert_eq!(tenders.len(), 2);
        assert_eq!(tenders[0].description(), None);
        assert_eq!(tenders[0].source.as_ref().map(|s| s.slug.as_str()), Some("teias"));
        assert!(tenders[1].source.is_none());
        assert!(tenders[1].category.is_none());
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        let json = serde_json::to_value(tender(1, "Laptop", None, "2024-01-01T00:00:00")).unwrap();
        assert!(json.get("description").is_none());
        assert!(json.get("category").is_none());
        assert_eq!(json["title"], "Laptop");
    }
}
