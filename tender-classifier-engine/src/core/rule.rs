use serde::{Deserialize, Serialize};

/// 分类规则定义（静态配置 / JSON 目录文件）
/// 关键词保持声明顺序，编译时统一标准化
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    /// 稳定分类键，如 `bilisim_teknolojileri`
    pub key: String,
    /// 展示名称
    pub name: String,
    /// 主关键词：单独命中一个不足以定类
    #[serde(default, alias = "primaryKeywords")]
    pub primary_keywords: Vec<String>,
    /// 次关键词：可佐证单个主关键词命中
    #[serde(default, alias = "secondaryKeywords")]
    pub secondary_keywords: Vec<String>,
    /// 排除关键词：命中即否决该分类
    #[serde(default, alias = "excludeKeywords")]
    pub exclude_keywords: Vec<String>,
}

impl CategoryRule {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_primary<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primary_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_secondary<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.secondary_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_exclude<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// 是否未声明任何关键词（兜底分类的常态）
    pub fn has_no_keywords(&self) -> bool {
        self.primary_keywords.is_empty()
            && self.secondary_keywords.is_empty()
            && self.exclude_keywords.is_empty()
    }
}
