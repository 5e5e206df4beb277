//! 过滤下拉框用的分类选项
//! 先列出目录中的分类，再补充存量数据里出现过的其他分类键

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::model::CategoryCatalog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOption {
    pub key: String,
    pub name: String,
}

/// 合并目录分类与已见分类键
/// 未知键的名称：下划线换空格，每个单词首字母大写
pub fn category_options<'a, I>(catalog: &CategoryCatalog, seen_keys: I) -> Vec<CategoryOption>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut options: Vec<CategoryOption> = catalog
        .iter()
        .map(|c| CategoryOption {
            key: c.key().to_string(),
            name: c.name().to_string(),
        })
        .collect();

    let mut listed: FxHashSet<String> = options.iter().map(|o| o.key.clone()).collect();
    for key in seen_keys {
        if key.is_empty() || listed.contains(key) {
            continue;
        }
        listed.insert(key.to_string());
        options.push(CategoryOption {
            key: key.to_string(),
            name: humanize_key(key),
        });
    }

    options
}

/// `savunma_sanayi` → `Savunma Sanayi`
pub fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut word_start = true;
    for ch in key.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(ch);
            word_start = true;
        }
    }
    out
}
