//! 招标分类器
use rustc_hash::FxHashSet;
use tender_classifier_engine::{NormalizedText, RuleVerdict};

use crate::catalog::{CatalogLoader, CategoryCatalog};
use crate::config::ClassifierConfig;
use crate::error::{TenderError, TenderResult};
use crate::utils::preview_title;

const LOG_PREVIEW_CHARS: usize = 60;

/// 单个参与判定分类的结果
#[derive(Debug, Clone)]
pub struct CategoryVerdict<'a> {
    pub key: &'a str,
    pub verdict: RuleVerdict,
}

/// 带判定明细的分类结果
#[derive(Debug, Clone)]
pub struct Classification<'a> {
    pub key: &'a str,
    pub name: &'a str,
    /// 按判定顺序记录，命中即停止，后续分类不出现
    pub verdicts: Vec<CategoryVerdict<'a>>,
}

impl Classification<'_> {
    pub fn is_fallback(&self) -> bool {
        !self.verdicts.iter().any(|v| v.verdict.is_accepted())
    }
}

/// 招标分类器
/// 目录编译后只读，分类过程无副作用，可在多线程间共享
#[derive(Debug, Clone)]
pub struct TenderClassifier {
    catalog: CategoryCatalog,
    allowed: Option<FxHashSet<String>>,
}

impl TenderClassifier {
    pub fn new(config: ClassifierConfig) -> TenderResult<Self> {
        let catalog = CatalogLoader::new().load(&config.origin)?;
        let mut classifier = Self::from_catalog(catalog);
        if let Some(keys) = config.allowed_categories {
            classifier = classifier.with_allowed_categories(keys)?;
        }
        Ok(classifier)
    }

    /// 内置目录，不限制分类
    pub fn builtin() -> TenderResult<Self> {
        Ok(Self::from_catalog(CategoryCatalog::builtin()?))
    }

    pub fn from_catalog(catalog: CategoryCatalog) -> Self {
        Self {
            catalog,
            allowed: None,
        }
    }

    /// 设置允许的分类白名单，未在目录中声明的键视为配置错误
    pub fn with_allowed_categories<I, S>(mut self, keys: I) -> TenderResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut allowed = FxHashSet::default();
        for key in keys {
            let key = key.into();
            if !self.catalog.contains(&key) {
                return Err(TenderError::InvalidInput(format!(
                    "allowed category '{}' is not declared in the catalog",
                    key
                )));
            }
            allowed.insert(key);
        }
        self.allowed = Some(allowed);
        Ok(self)
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    /// 对标题 + 可选描述定类，返回目录中的分类键
    /// 参与判定的分类按声明顺序检查，第一个满足阈值的胜出，否则归入兜底分类
    pub fn classify(&self, title: &str, description: Option<&str>) -> &str {
        let text = NormalizedText::from_tender(title, description);
        let key = self
            .catalog
            .substantive()
            .find(|rule| rule.accepts(&text))
            .map(|rule| rule.key())
            .unwrap_or_else(|| self.catalog.fallback_key());

        log::debug!(
            "classified \"{}\" -> {}",
            preview_title(title, LOG_PREVIEW_CHARS),
            key
        );
        key
    }

    /// 与 `classify` 结果一致，额外返回各分类的判定明细
    pub fn classify_detailed(&self, title: &str, description: Option<&str>) -> Classification<'_> {
        let text = NormalizedText::from_tender(title, description);
        let mut verdicts = Vec::new();

        for rule in self.catalog.substantive() {
            let verdict = rule.evaluate(&text);
            let accepted = verdict.is_accepted();
            verdicts.push(CategoryVerdict {
                key: rule.key(),
                verdict,
            });
            if accepted {
                return Classification {
                    key: rule.key(),
                    name: rule.name(),
                    verdicts,
                };
            }
        }

        let fallback = self.catalog.fallback();
        Classification {
            key: fallback.key(),
            name: fallback.name(),
            verdicts,
        }
    }

    /// 分类展示名称，未知键返回兜底分类名称
    pub fn category_name(&self, key: &str) -> &str {
        self.catalog.name(key)
    }

    /// (key, name) 列表，声明顺序
    pub fn list_categories(&self) -> Vec<(&str, &str)> {
        self.catalog.entries()
    }

    /// 分类键是否在白名单内（未配置白名单时全部允许）
    pub fn is_allowed(&self, key: &str) -> bool {
        match &self.allowed {
            Some(allowed) => allowed.contains(key),
            None => self.catalog.contains(key),
        }
    }
}
