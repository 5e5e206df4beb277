//! 分类模块：分类器实例与全局默认分类器
pub mod classifier;
pub mod global;

// 导出核心接口
pub use self::classifier::{CategoryVerdict, Classification, TenderClassifier};
pub use self::global::{category_name, classify_tender, default_classifier, list_categories};
