//! 分类器配置：目录来源 + 允许的分类白名单

use std::path::PathBuf;

/// 分类目录来源
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogOrigin {
    /// 内置关键词表（编译期固定）
    #[default]
    Embedded,
    /// 本地 JSON 目录文件（运行时加载一次）
    LocalFile(PathBuf),
}

/// 分类器配置
#[derive(Debug, Clone, Default)]
pub struct ClassifierConfig {
    pub origin: CatalogOrigin,
    /// 允许的分类键；None 表示全部允许
    pub allowed_categories: Option<Vec<String>>,
}

impl ClassifierConfig {
    /// 内置目录，不限制分类
    pub fn embedded() -> Self {
        Self::default()
    }

    /// 本地目录文件
    pub fn local_file(path: impl Into<PathBuf>) -> Self {
        Self {
            origin: CatalogOrigin::LocalFile(path.into()),
            allowed_categories: None,
        }
    }

    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: ClassifierConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: CatalogOrigin) -> Self {
        self.config.origin = origin;
        self
    }

    pub fn catalog_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.origin = CatalogOrigin::LocalFile(path.into());
        self
    }

    /// 追加一个允许的分类键（首次调用即启用白名单）
    pub fn allow_category(mut self, key: impl Into<String>) -> Self {
        self.config
            .allowed_categories
            .get_or_insert_with(Vec::new)
            .push(key.into());
        self
    }

    pub fn allowed_categories<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.allowed_categories = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> ClassifierConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_allow_list() {
        let config = ClassifierConfig::custom()
            .catalog_file("catalog.json")
            .allow_category("bilisim_teknolojileri")
            .allow_category("diger")
            .build();

        assert_eq!(config.origin, CatalogOrigin::LocalFile(PathBuf::from("catalog.json")));
        assert_eq!(
            config.allowed_categories,
            Some(vec!["bilisim_teknolojileri".to_string(), "diger".to_string()])
        );
    }

    #[test]
    fn test_default_is_embedded_without_allow_list() {
        let config = ClassifierConfig::default();
        assert_eq!(config.origin, CatalogOrigin::Embedded);
        assert!(config.allowed_categories.is_none());
    }
}
