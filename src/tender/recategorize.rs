//! 批量重新分类已存储的招标记录

use serde::Serialize;

use crate::classifier::TenderClassifier;
use crate::utils::preview_title;

use super::model::TenderRecord;

/// 单条记录的分类变更
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryChange {
    pub id: i64,
    pub title: String,
    pub old: Option<String>,
    pub new: String,
}

/// 就地重算每条记录的分类，返回发生变化的记录
pub fn recategorize(classifier: &TenderClassifier, tenders: &mut [TenderRecord]) -> Vec<CategoryChange> {
    let mut changes = Vec::new();

    for tender in tenders.iter_mut() {
        let new = classifier.classify(&tender.title, tender.description());
        if tender.category.as_deref() == Some(new) {
            continue;
        }

        log::info!(
            "ID: {} - {} -> {} ({})",
            tender.id,
            tender.category.as_deref().unwrap_or("-"),
            new,
            preview_title(&tender.title, 80)
        );
        let old = tender.category.replace(new.to_string());
        changes.push(CategoryChange {
            id: tender.id,
            title: tender.title.clone(),
            old,
            new: new.to_string(),
        });
    }

    log::info!(
        "Recategorization finished: {} tenders, {} changed",
        tenders.len(),
        changes.len()
    );
    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tender::model::tender;

    #[test]
    fn test_reports_only_changes() {
        let classifier = TenderClassifier::builtin().unwrap();
        let mut tenders = vec![
            tender(1, "server ve switch alımı", None, "2024-01-01T00:00:00"),
            tender(2, "Yemek hizmeti", None, "2024-01-01T00:00:00"),
            tender(3, "Bilgisayar bakım hizmeti", None, "2024-01-01T00:00:00"),
        ];
        tenders[0].category = Some("bilisim_teknolojileri".into());
        tenders[2].category = Some("bilisim_teknolojileri".into());

        let changes = recategorize(&classifier, &mut tenders);

        assert_eq!(
            changes,
            vec![
                CategoryChange {
                    id: 2,
                    title: "Yemek hizmeti".into(),
                    old: None,
                    new: "diger".into(),
                },
                CategoryChange {
                    id: 3,
                    title: "Bilgisayar bakım hizmeti".into(),
                    old: Some("bilisim_teknolojileri".into()),
                    new: "diger".into(),
                },
            ]
        );
        assert_eq!(tenders[1].category.as_deref(), Some("diger"));
        assert_eq!(tenders[2].category.as_deref(), Some("diger"));

        // 再跑一次没有变化
        assert!(recategorize(&classifier, &mut tenders).is_empty());
    }
}
