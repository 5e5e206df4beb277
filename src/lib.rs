//! tender-classifier - 招标信息关键词分类库
//! 将招标标题/描述映射到固定分类键，并提供看板所需的过滤、统计与重新分类工具

// 导出全局错误类型
pub use self::error::{TenderError, TenderResult};

// 导出配置模块
pub use self::config::{CatalogOrigin, ClassifierConfig, CustomConfigBuilder};

// 导出目录模块核心接口
pub use self::catalog::{
    category_options, CatalogDefinition, CatalogLoader, CategoryCatalog, CategoryOption,
    FALLBACK_CATEGORY_KEY, IT_CATEGORY_KEY,
};

// 导出分类模块核心接口（含全局默认分类器的简化接口）
pub use self::classifier::{
    category_name, classify_tender, default_classifier, list_categories, CategoryVerdict,
    Classification, TenderClassifier,
};

// 导出招标记录工具
pub use self::tender::{
    category_stats, filter_by_category, latest_update, parse_tenders, recategorize, retain_allowed,
    CategoryChange, CategoryStats, TenderRecord, TenderSource,
};

// 内核类型透出
pub use tender_classifier_engine::{CategoryRule, MatchEvidence, RuleVerdict};

// 声明所有子模块
pub mod catalog;
pub mod classifier;
pub mod config;
pub mod error;
pub mod tender;
pub mod utils;
