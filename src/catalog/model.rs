//! 分类目录：声明结构（可序列化）与编译后的只读目录

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tender_classifier_engine::{CategoryRule, CompiledCategoryRule};

use crate::error::{TenderError, TenderResult};

/// 分类目录声明（内置表 / JSON 目录文件）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDefinition {
    /// 兜底分类键，必须出现在 `categories` 中
    pub fallback: String,
    /// 分类列表，顺序即判定顺序与展示顺序
    pub categories: Vec<CategoryRule>,
}

/// 编译后的分类目录
/// 构建后不可变，可在线程间自由共享
#[derive(Debug, Clone)]
pub struct CategoryCatalog {
    categories: Vec<CompiledCategoryRule>,
    index: FxHashMap<String, usize>,
    fallback: usize,
}

impl CategoryCatalog {
    /// 校验并编译目录声明
    pub fn compile(definition: &CatalogDefinition) -> TenderResult<Self> {
        if definition.categories.is_empty() {
            return Err(TenderError::CatalogInvalid("catalog declares no categories".into()));
        }

        let mut categories = Vec::with_capacity(definition.categories.len());
        let mut index = FxHashMap::default();

        for rule in &definition.categories {
            let compiled = CompiledCategoryRule::compile(rule)?;
            let key = compiled.key().to_string();
            if index.insert(key.clone(), categories.len()).is_some() {
                return Err(TenderError::CatalogInvalid(format!(
                    "duplicate category key '{}'",
                    key
                )));
            }
            categories.push(compiled);
        }

        let fallback = *index.get(definition.fallback.trim()).ok_or_else(|| {
            TenderError::CatalogInvalid(format!(
                "fallback category '{}' is not declared",
                definition.fallback
            ))
        })?;

        if categories[fallback].has_keywords() {
            log::warn!(
                "Keywords declared on fallback category '{}' are ignored",
                categories[fallback].key()
            );
        }

        log::debug!(
            "Category catalog compiled: {} categories, fallback='{}'",
            categories.len(),
            categories[fallback].key()
        );

        Ok(Self {
            categories,
            index,
            fallback,
        })
    }

    /// 内置目录
    pub fn builtin() -> TenderResult<Self> {
        Self::compile(&super::builtin::builtin_definition())
    }

    #[inline]
    pub fn fallback(&self) -> &CompiledCategoryRule {
        &self.categories[self.fallback]
    }

    #[inline]
    pub fn fallback_key(&self) -> &str {
        self.fallback().key()
    }

    pub fn get(&self, key: &str) -> Option<&CompiledCategoryRule> {
        self.index.get(key).map(|&idx| &self.categories[idx])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// 分类展示名称，未知键返回兜底分类名称
    pub fn name(&self, key: &str) -> &str {
        self.get(key).unwrap_or_else(|| self.fallback()).name()
    }

    /// 按声明顺序遍历全部分类
    pub fn iter(&self) -> impl Iterator<Item = &CompiledCategoryRule> {
        self.categories.iter()
    }

    /// 按声明顺序遍历参与判定的分类（不含兜底）
    pub fn substantive(&self) -> impl Iterator<Item = &CompiledCategoryRule> {
        let fallback = self.fallback;
        self.categories
            .iter()
            .enumerate()
            .filter(move |(idx, _)| *idx != fallback)
            .map(|(_, rule)| rule)
    }

    /// (key, name) 列表，声明顺序
    pub fn entries(&self) -> Vec<(&str, &str)> {
        self.categories.iter().map(|c| (c.key(), c.name())).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin::{FALLBACK_CATEGORY_KEY, IT_CATEGORY_KEY};

    fn definition(fallback: &str, rules: Vec<CategoryRule>) -> CatalogDefinition {
        CatalogDefinition {
            fallback: fallback.to_string(),
            categories: rules,
        }
    }

    #[test]
    fn test_builtin_compiles() {
        let catalog = CategoryCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.fallback_key(), FALLBACK_CATEGORY_KEY);
        assert_eq!(
            catalog.entries(),
            vec![
                (IT_CATEGORY_KEY, "💻 Bilişim & Güvenlik"),
                (FALLBACK_CATEGORY_KEY, "📋 Diğer")
            ]
        );
        let keys: Vec<_> = catalog.substantive().map(|c| c.key()).collect();
        assert_eq!(keys, vec![IT_CATEGORY_KEY]);
    }

    #[test]
    fn test_unknown_key_name_falls_back() {
        let catalog = CategoryCatalog::builtin().unwrap();
        assert_eq!(catalog.name("savunma_sanayi"), "📋 Diğer");
        assert_eq!(catalog.name(""), "📋 Diğer");
        assert_eq!(catalog.name(IT_CATEGORY_KEY), "💻 Bilişim & Güvenlik");
    }

    #[test]
    fn test_missing_fallback() {
        let def = definition("diger", vec![CategoryRule::new("bilisim", "Bilişim")]);
        assert!(matches!(
            CategoryCatalog::compile(&def),
            Err(TenderError::CatalogInvalid(msg)) if msg.contains("diger")
        ));
    }

    #[test]
    fn test_duplicate_key() {
        let def = definition(
            "diger",
            vec![
                CategoryRule::new("diger", "Diğer"),
                CategoryRule::new(" diger ", "Diğer 2"),
            ],
        );
        assert!(matches!(
            CategoryCatalog::compile(&def),
            Err(TenderError::CatalogInvalid(msg)) if msg.contains("duplicate")
        ));
    }

    #[test]
    fn test_empty_catalog() {
        let def = definition("diger", Vec::new());
        assert!(matches!(
            CategoryCatalog::compile(&def),
            Err(TenderError::CatalogInvalid(_))
        ));
    }

    #[test]
    fn test_invalid_keyword_propagates() {
        let def = definition(
            "diger",
            vec![
                CategoryRule::new("bilisim", "Bilişim").with_primary(["server", ""]),
                CategoryRule::new("diger", "Diğer"),
            ],
        );
        assert!(matches!(
            CategoryCatalog::compile(&def),
            Err(TenderError::RuleCompileError(_))
        ));
    }
}
