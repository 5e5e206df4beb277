use std::sync::Arc;

/// 命中证据：按声明顺序记录命中的主/次关键词（原始写法）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchEvidence {
    pub primary: Vec<Arc<str>>,
    pub secondary: Vec<Arc<str>>,
}

impl MatchEvidence {
    #[inline]
    pub fn primary_matches(&self) -> usize {
        self.primary.len()
    }

    #[inline]
    pub fn secondary_matches(&self) -> usize {
        self.secondary.len()
    }
}

/// 单个分类规则对一段文本的判定结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleVerdict {
    /// 命中排除关键词，直接否决（不再统计主/次关键词）
    Excluded { keyword: Arc<str> },
    /// 满足定类阈值
    Accepted(MatchEvidence),
    /// 未满足阈值（含零命中）
    Rejected(MatchEvidence),
}

impl RuleVerdict {
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, RuleVerdict::Accepted(_))
    }

    /// 命中证据，排除时为 None
    pub fn evidence(&self) -> Option<&MatchEvidence> {
        match self {
            RuleVerdict::Accepted(e) | RuleVerdict::Rejected(e) => Some(e),
            RuleVerdict::Excluded { .. } => None,
        }
    }

    /// 描述判定结果（日志/CLI 输出）
    pub fn describe(&self) -> String {
        match self {
            RuleVerdict::Excluded { keyword } => format!("excluded by '{}'", keyword),
            RuleVerdict::Accepted(e) => format!(
                "accepted: primary={:?} secondary={:?}",
                e.primary, e.secondary
            ),
            RuleVerdict::Rejected(e) => format!(
                "rejected: primary={:?} secondary={:?}",
                e.primary, e.secondary
            ),
        }
    }
}
