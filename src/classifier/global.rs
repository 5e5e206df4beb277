//! 全局默认分类器（内置目录）单例
use once_cell::sync::Lazy;

use super::classifier::TenderClassifier;

/// 全局默认分类器，首次访问时编译内置目录，之后只读共享
static DEFAULT_CLASSIFIER: Lazy<TenderClassifier> = Lazy::new(|| {
    TenderClassifier::builtin().unwrap_or_else(|e| {
        // 内置表在编译期固定，失败说明关键词表本身有误
        panic!("built-in category catalog failed to compile: {}", e)
    })
});

/// 获取全局默认分类器
pub fn default_classifier() -> &'static TenderClassifier {
    &DEFAULT_CLASSIFIER
}

/// 使用内置目录定类
pub fn classify_tender(title: &str, description: Option<&str>) -> &'static str {
    DEFAULT_CLASSIFIER.classify(title, description)
}

/// 内置目录的分类名称，未知键返回兜底分类名称
pub fn category_name(key: &str) -> &'static str {
    DEFAULT_CLASSIFIER.category_name(key)
}

/// 内置目录的 (key, name) 列表
pub fn list_categories() -> Vec<(&'static str, &'static str)> {
    DEFAULT_CLASSIFIER.list_categories()
}
