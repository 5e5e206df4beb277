//! tender-classifier-engine - 招标分类关键词匹配内核
//! 只负责文本标准化、关键词编译与分类规则判定，不涉及任何 I/O

// 核心公共结构体（规则定义 + 判定结果）
pub mod core;
// 关键词编译与子串匹配
pub mod matcher;
// 编译后的分类规则与判定逻辑
pub mod compiled;
// 内核错误定义
pub mod error;
// 文本标准化工具
pub mod utils;

// 顶层导出常用类型
pub use crate::compiled::{meets_threshold, CompiledCategoryRule};
pub use crate::core::{CategoryRule, MatchEvidence, RuleVerdict};
pub use crate::error::{CoreError, CoreResult};
pub use crate::matcher::{Keyword, KeywordMatcher, NormalizedText};
pub use crate::utils::normalize::{fold_char, normalize_text};
