//! 按分类过滤已获取的招标列表

use crate::classifier::TenderClassifier;

use super::model::TenderRecord;

/// 按计算出的分类过滤；`None` 或空串表示不过滤
pub fn filter_by_category<'a>(
    classifier: &TenderClassifier,
    tenders: &'a [TenderRecord],
    category: Option<&str>,
) -> Vec<&'a TenderRecord> {
    match category.filter(|c| !c.is_empty()) {
        None => tenders.iter().collect(),
        Some(wanted) => tenders
            .iter()
            .filter(|t| classifier.classify(&t.title, t.description()) == wanted)
            .collect(),
    }
}

/// 写入分类键并只保留白名单内的记录
pub fn retain_allowed(classifier: &TenderClassifier, tenders: Vec<TenderRecord>) -> Vec<TenderRecord> {
    let total = tenders.len();
    let kept: Vec<TenderRecord> = tenders
        .into_iter()
        .filter_map(|mut tender| {
            let key = classifier.classify(&tender.title, tender.description());
            if !classifier.is_allowed(key) {
                return None;
            }
            tender.category = Some(key.to_string());
            Some(tender)
        })
        .collect();

    log::info!("Kept {} of {} tenders in allowed categories", kept.len(), total);
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tender::model::tender;

    fn sample() -> Vec<TenderRecord> {
        vec![
            tender(1, "server ve switch alımı", None, "2024-01-01T00:00:00"),
            tender(2, "Personel yemek hizmeti", None, "2024-01-02T00:00:00"),
            tender(3, "Bilgisayar alımı", Some("kurulum dahil"), "2024-01-03T00:00:00"),
        ]
    }

    #[test]
    fn test_no_filter_keeps_all() {
        let classifier = TenderClassifier::builtin().unwrap();
        let tenders = sample();
        assert_eq!(filter_by_category(&classifier, &tenders, None).len(), 3);
        assert_eq!(filter_by_category(&classifier, &tenders, Some("")).len(), 3);
    }

    #[test]
    fn test_filter_by_category() {
        let classifier = TenderClassifier::builtin().unwrap();
        let tenders = sample();

        let it: Vec<i64> = filter_by_category(&classifier, &tenders, Some("bilisim_teknolojileri"))
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(it, vec![1, 3]);

        let other: Vec<i64> = filter_by_category(&classifier, &tenders, Some("diger"))
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(other, vec![2]);

        assert!(filter_by_category(&classifier, &tenders, Some("yok")).is_empty());
    }

    #[test]
    fn test_retain_allowed_stamps_category() {
        let classifier = TenderClassifier::builtin()
            .unwrap()
            .with_allowed_categories(["bilisim_teknolojileri"])
            .unwrap();

        let kept = retain_allowed(&classifier, sample());
        assert_eq!(kept.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);
        assert!(kept
            .iter()
            .all(|t| t.category.as_deref() == Some("bilisim_teknolojileri")));
    }
}
