//! 分类目录模块：内置关键词表、目录加载与校验、分类选项
pub mod builtin;
pub mod listing;
pub mod loader;
pub mod model;

// 导出核心接口
pub use self::builtin::{builtin_definition, FALLBACK_CATEGORY_KEY, IT_CATEGORY_KEY};
pub use self::listing::{category_options, humanize_key, CategoryOption};
pub use self::loader::CatalogLoader;
pub use self::model::{CatalogDefinition, CategoryCatalog};
