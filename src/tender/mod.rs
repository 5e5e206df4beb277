//! 招标记录模块：数据模型、分类过滤、统计与批量重新分类
pub mod filter;
pub mod model;
pub mod recategorize;
pub mod stats;

// 导出核心接口
pub use self::filter::{filter_by_category, retain_allowed};
pub use self::model::{parse_tenders, TenderRecord, TenderSource};
pub use self::recategorize::{recategorize, CategoryChange};
pub use self::stats::{category_stats, latest_update, CategoryStats};
