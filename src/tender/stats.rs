//! 按分类统计招标数量与最近更新时间

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::classifier::TenderClassifier;
use crate::utils::is_newer;

use super::model::TenderRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub key: String,
    pub name: String,
    pub count: usize,
    /// 该分类下最新的 `created_at`
    pub last_update: Option<String>,
}

/// 统计每个分类的招标数量
/// 按数量降序，数量相同保持首次出现顺序
pub fn category_stats(classifier: &TenderClassifier, tenders: &[TenderRecord]) -> Vec<CategoryStats> {
    let mut order: FxHashMap<&str, usize> = FxHashMap::default();
    let mut stats: Vec<CategoryStats> = Vec::new();

    for tender in tenders {
        let key = classifier.classify(&tender.title, tender.description());
        let idx = *order.entry(key).or_insert_with(|| {
            stats.push(CategoryStats {
                key: key.to_string(),
                name: classifier.category_name(key).to_string(),
                count: 0,
                last_update: Some(tender.created_at.clone()),
            });
            stats.len() - 1
        });

        let entry = &mut stats[idx];
        entry.count += 1;
        let newer = match entry.last_update.as_deref() {
            Some(current) => is_newer(&tender.created_at, current),
            None => true,
        };
        if newer {
            entry.last_update = Some(tender.created_at.clone());
        }
    }

    // sort_by 是稳定排序
    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}

/// 全部记录中最新的 `created_at`
pub fn latest_update(tenders: &[TenderRecord]) -> Option<&str> {
    tenders
        .iter()
        .map(|t| t.created_at.as_str())
        .reduce(|latest, current| if is_newer(current, latest) { current } else { latest })
}
