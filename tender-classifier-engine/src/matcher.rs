//! 关键词编译与子串匹配
//! 关键词在编译期标准化一次，运行期只做 `str::contains`
use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::utils::normalize::normalize_text;

/// 已标准化的待分类文本
/// 只能通过构造函数得到，保证与关键词走同一条标准化路径
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText(String);

impl NormalizedText {
    /// 标题 + 空格 + 描述（缺省为空串），再标准化
    pub fn from_tender(title: &str, description: Option<&str>) -> Self {
        let description = description.unwrap_or("");
        let mut raw = String::with_capacity(title.len() + description.len() + 1);
        raw.push_str(title);
        raw.push(' ');
        raw.push_str(description);
        Self(normalize_text(&raw))
    }

    pub fn new(text: &str) -> Self {
        Self(normalize_text(text))
    }

    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 单个关键词：保留原始写法用于展示，匹配使用标准化形式
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    raw: Arc<str>,
    normalized: Arc<str>,
}

impl Keyword {
    pub fn raw(&self) -> &Arc<str> {
        &self.raw
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    #[inline(always)]
    pub fn is_found_in(&self, text: &NormalizedText) -> bool {
        text.as_str().contains(&*self.normalized)
    }
}

/// 有序关键词列表
/// 计数按声明条目计算：标准化后重复的两个条目（如 antivirüs / antivirus）各计一次
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordMatcher {
    keywords: Vec<Keyword>,
}

impl KeywordMatcher {
    /// 编译关键词列表
    /// `category` 仅用于错误信息
    pub fn compile<I, S>(category: &str, keywords: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|kw| {
                let raw = kw.as_ref();
                let normalized = normalize_text(raw);
                if normalized.trim().is_empty() {
                    return Err(CoreError::InvalidKeyword {
                        category: category.to_string(),
                        reason: format!("keyword {:?} is empty after normalization", raw),
                    });
                }
                Ok(Keyword {
                    raw: Arc::from(raw),
                    normalized: Arc::from(normalized),
                })
            })
            .collect::<CoreResult<Vec<_>>>()?;

        Ok(Self { keywords })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Keyword> {
        self.keywords.iter()
    }

    /// 第一个命中的关键词（排除检查用，命中即短路）
    pub fn first_match(&self, text: &NormalizedText) -> Option<&Keyword> {
        self.keywords.iter().find(|kw| kw.is_found_in(text))
    }

    /// 命中条目数
    pub fn count_matches(&self, text: &NormalizedText) -> usize {
        self.keywords.iter().filter(|kw| kw.is_found_in(text)).count()
    }

    /// 按声明顺序返回所有命中的关键词
    pub fn matches<'a>(&'a self, text: &'a NormalizedText) -> impl Iterator<Item = &'a Keyword> + 'a {
        self.keywords.iter().filter(move |kw| kw.is_found_in(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tender_joins_with_space() {
        let text = NormalizedText::from_tender("Sunucu", Some("Alımı"));
        assert_eq!(text.as_str(), "sunucu alimi");

        let text = NormalizedText::from_tender("Sunucu", None);
        assert_eq!(text.as_str(), "sunucu ");
    }

    #[test]
    fn test_title_and_description_boundary() {
        // 标题末尾与描述开头之间有空格，不会拼出跨边界的关键词
        let text = NormalizedText::from_tender("ser", Some("ver"));
        let matcher = KeywordMatcher::compile("t", ["server"]).unwrap();
        assert_eq!(matcher.count_matches(&text), 0);
    }

    #[test]
    fn test_keywords_are_normalized() {
        let matcher = KeywordMatcher::compile("t", ["Güvenlik Duvarı", "masaüstü"]).unwrap();
        let text = NormalizedText::new("GUVENLIK DUVARI ve masaustu bilgisayar");
        assert_eq!(matcher.count_matches(&text), 2);
        let hits: Vec<_> = matcher.matches(&text).map(|k| k.raw().to_string()).collect();
        assert_eq!(hits, vec!["Güvenlik Duvarı", "masaüstü"]);
    }

    #[test]
    fn test_duplicate_entries_counted_separately() {
        let matcher = KeywordMatcher::compile("t", ["antivirüs", "antivirus"]).unwrap();
        let text = NormalizedText::new("antivirüs lisansı");
        assert_eq!(matcher.count_matches(&text), 2);
    }

    #[test]
    fn test_first_match_in_declaration_order() {
        let matcher = KeywordMatcher::compile("t", ["yakıt", "petrol"]).unwrap();
        let text = NormalizedText::new("petrol ve yakit alimi");
        assert_eq!(matcher.first_match(&text).map(|k| k.normalized()), Some("yakit"));
    }

    #[test]
    fn test_empty_keyword_rejected() {
        let err = KeywordMatcher::compile("bilisim", ["server", "  "]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidKeyword { ref category, .. } if category == "bilisim"));
    }
}
