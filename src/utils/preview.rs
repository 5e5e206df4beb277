use std::fmt::{self, Write};

/// 日志用标题预览：折叠连续空白，超长截断并追加省略号
/// 只在格式化时遍历原串，不产生中间 String
#[inline]
pub fn preview_title(title: &str, max_chars: usize) -> impl fmt::Display + '_ {
    TitlePreview { title, max_chars }
}

struct TitlePreview<'a> {
    title: &'a str,
    max_chars: usize,
}

impl fmt::Display for TitlePreview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut written = 0;
        let mut pending_space = false;

        for ch in self.title.trim().chars() {
            if ch.is_whitespace() {
                pending_space = true;
                continue;
            }
            // 空格也计入长度
            let needed = if pending_space { 2 } else { 1 };
            if written + needed > self.max_chars {
                return f.write_char('…');
            }
            if pending_space {
                f.write_char(' ')?;
                pending_space = false;
            }
            f.write_char(ch)?;
            written += needed;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace() {
        let s = preview_title("  Sunucu \n\t ve   switch  ", 80).to_string();
        assert_eq!(s, "Sunucu ve switch");
    }

    #[test]
    fn test_truncates() {
        assert_eq!(preview_title("bilgisayar alımı", 10).to_string(), "bilgisayar…");
        assert_eq!(preview_title("bilgisayar", 10).to_string(), "bilgisayar");
        assert_eq!(preview_title("", 10).to_string(), "");
    }
}
