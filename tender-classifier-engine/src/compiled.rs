//! 编译后的分类规则与判定逻辑
use std::sync::Arc;

use crate::core::{CategoryRule, MatchEvidence, RuleVerdict};
use crate::error::{CoreError, CoreResult};
use crate::matcher::{KeywordMatcher, NormalizedText};

/// 定类阈值：至少一个主关键词，且（主关键词 ≥ 2 或 次关键词 ≥ 1）
#[inline(always)]
pub fn meets_threshold(primary_matches: usize, secondary_matches: usize) -> bool {
    primary_matches > 0 && (primary_matches > 1 || secondary_matches > 0)
}

/// 运行时分类规则（不可变，可跨线程共享）
#[derive(Debug, Clone)]
pub struct CompiledCategoryRule {
    key: Arc<str>,
    name: Arc<str>,
    primary: KeywordMatcher,
    secondary: KeywordMatcher,
    exclude: KeywordMatcher,
}

impl CompiledCategoryRule {
    pub fn compile(rule: &CategoryRule) -> CoreResult<Self> {
        let key = rule.key.trim();
        if key.is_empty() {
            return Err(CoreError::InvalidRule(format!(
                "category '{}' has an empty key",
                rule.name
            )));
        }

        Ok(Self {
            key: Arc::from(key),
            name: Arc::from(rule.name.as_str()),
            primary: KeywordMatcher::compile(key, &rule.primary_keywords)?,
            secondary: KeywordMatcher::compile(key, &rule.secondary_keywords)?,
            exclude: KeywordMatcher::compile(key, &rule.exclude_keywords)?,
        })
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn primary(&self) -> &KeywordMatcher {
        &self.primary
    }

    pub fn secondary(&self) -> &KeywordMatcher {
        &self.secondary
    }

    pub fn exclude(&self) -> &KeywordMatcher {
        &self.exclude
    }

    /// 是否声明了任何关键词
    pub fn has_keywords(&self) -> bool {
        !(self.primary.is_empty() && self.secondary.is_empty() && self.exclude.is_empty())
    }

    /// 快速判定：只计数，不收集证据
    pub fn accepts(&self, text: &NormalizedText) -> bool {
        if let Some(kw) = self.exclude.first_match(text) {
            log::trace!("[{}] vetoed by exclusion keyword '{}'", self.key, kw.raw());
            return false;
        }

        let primary_matches = self.primary.count_matches(text);
        // 没有主关键词命中时无需再扫次关键词
        if primary_matches == 0 {
            return false;
        }
        meets_threshold(primary_matches, self.secondary.count_matches(text))
    }

    /// 完整判定：排除优先，其次统计主/次关键词并给出证据
    pub fn evaluate(&self, text: &NormalizedText) -> RuleVerdict {
        if let Some(kw) = self.exclude.first_match(text) {
            return RuleVerdict::Excluded {
                keyword: kw.raw().clone(),
            };
        }

        let evidence = MatchEvidence {
            primary: self.primary.matches(text).map(|k| k.raw().clone()).collect(),
            secondary: self.secondary.matches(text).map(|k| k.raw().clone()).collect(),
        };

        if meets_threshold(evidence.primary_matches(), evidence.secondary_matches()) {
            RuleVerdict::Accepted(evidence)
        } else {
            RuleVerdict::Rejected(evidence)
        }
    }
}
