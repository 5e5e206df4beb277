//! 内核错误定义
//! 仅覆盖规则编译阶段的错误，分类判定本身不会失败
use thiserror::Error;

/// 内核核心错误枚举
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// 关键词标准化后为空（空串会命中任意文本）
    #[error("Invalid keyword in category '{category}': {reason}")]
    InvalidKeyword { category: String, reason: String },

    /// 分类规则本身不合法（key/name 缺失等）
    #[error("Invalid category rule: {0}")]
    InvalidRule(String),
}

/// 内核层全局Result类型别名
pub type CoreResult<T> = Result<T, CoreError>;
