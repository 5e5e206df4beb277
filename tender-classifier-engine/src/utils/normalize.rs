//! 土耳其语文本标准化
//! 小写化 + 固定字符折叠表，关键词和待分类文本走同一条路径

/// 固定折叠表（小写形式 → ASCII）
pub const FOLD_TABLE: [(char, char); 6] = [
    ('ç', 'c'),
    ('ğ', 'g'),
    ('ı', 'i'),
    ('ö', 'o'),
    ('ş', 's'),
    ('ü', 'u'),
];

/// 折叠单个已小写字符，不在表中的字符原样返回
#[inline(always)]
pub fn fold_char(ch: char) -> char {
    FOLD_TABLE
        .iter()
        .find_map(|&(from, to)| (from == ch).then_some(to))
        .unwrap_or(ch)
}

/// 小写化并折叠土耳其语字符
///
/// 大写 `İ` 直接映射为 `i`：Unicode 小写规则会把它展开成 `i` + U+0307，
/// 导致 `BİLGİSAYAR` 与 `bilgisayar` 无法互相包含。
pub fn normalize_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if ch == 'İ' {
            out.push('i');
            continue;
        }
        if ch.is_ascii() {
            out.push(ch.to_ascii_lowercase());
            continue;
        }
        out.extend(ch.to_lowercase().map(fold_char));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_table_chars() {
        assert_eq!(normalize_text("çğıöşü"), "cgiosu");
        assert_eq!(normalize_text("ÇĞIÖŞÜ"), "cgiosu");
    }

    #[test]
    fn test_dotted_capital_i() {
        assert_eq!(normalize_text("BİLGİSAYAR"), "bilgisayar");
        assert_eq!(normalize_text("BİLGİSAYAR"), normalize_text("bilgisayar"));
    }

    #[test]
    fn test_untouched_chars() {
        // 折叠表之外的字符只做小写
        assert_eq!(normalize_text("Güvenlik Duvarı – CAT6"), "guvenlik duvari – cat6");
        assert_eq!(normalize_text("âîû"), "âîû");
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize_text("Kartlı Geçiş Sistemi Alımı");
        assert_eq!(normalize_text(&once), once);
    }
}
