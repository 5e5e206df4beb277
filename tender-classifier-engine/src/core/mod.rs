mod rule;
mod verdict;

// 导出常用项
pub use rule::CategoryRule;
pub use verdict::{MatchEvidence, RuleVerdict};
