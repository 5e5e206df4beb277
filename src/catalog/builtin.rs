//! 内置分类关键词表
//! 与看板前端保持一致，进程内只读

use tender_classifier_engine::CategoryRule;

use super::model::CatalogDefinition;

/// 信息技术与安全分类
pub const IT_CATEGORY_KEY: &str = "bilisim_teknolojileri";
/// 兜底分类
pub const FALLBACK_CATEGORY_KEY: &str = "diger";

const IT_CATEGORY_NAME: &str = "💻 Bilişim & Güvenlik";
const FALLBACK_CATEGORY_NAME: &str = "📋 Diğer";

const IT_PRIMARY_KEYWORDS: &[&str] = &[
    // 基础信息化
    "bilgisayar", "bilişim", "yazılım", "donanım", "network",
    "server", "sunucu", "veri merkezi", "datacenter",
    // 硬件
    "masaüstü", "laptop", "dizüstü", "işlemci", "cpu",
    "ram", "bellek", "harddisk", "ssd", "hdd", "anakart",
    "ekran kartı", "gpu", "monitör", "ups", "printer",
    // 软件
    "microsoft", "windows", "linux", "oracle", "sql",
    "erp", "crm", "lisans", "antivirüs", "antivirus",
    // 网络
    "switch", "router", "modem", "firewall", "güvenlik duvarı",
    "access point", "fiber", "cat6", "cat7",
    // 安防
    "kamera sistemi", "cctv", "ip kamera", "nvr", "dvr",
    "kartlı geçiş", "yüz tanıma",
];

const IT_SECONDARY_KEYWORDS: &[&str] = &[
    "sistem", "altyapı", "ağ", "elektronik", "digital",
    "dijital", "teknoloji", "yazıcı", "tarayıcı", "scanner",
    "kablolama", "kurulum", "güncelleme", "yedekleme",
    "bakım", "onarım", "teknik servis", "it", "bt",
];

// 防误判：燃料/餐饮/建筑/维修/医疗/车辆等
const IT_EXCLUDE_KEYWORDS: &[&str] = &[
    "fuel", "kalyak", "yakıt", "petrol", "lpg", "doğalgaz",
    "mutfak", "yemek", "gıda", "temizlik", "kırtasiye",
    "mobilya", "taşınmaz", "gayrimenkul", "arsa", "bina",
    "inşaat", "tadilat", "onarım", "bakım", "malzeme",
    "hırdavat", "tekstil", "giyim", "kıyafet", "ilaç",
    "tıbbi", "medikal", "araç", "vasıta", "otomobil",
];

/// 内置目录定义（声明顺序即列表顺序）
pub fn builtin_definition() -> CatalogDefinition {
    CatalogDefinition {
        fallback: FALLBACK_CATEGORY_KEY.to_string(),
        categories: vec![
            CategoryRule::new(IT_CATEGORY_KEY, IT_CATEGORY_NAME)
                .with_primary(IT_PRIMARY_KEYWORDS.iter().copied())
                .with_secondary(IT_SECONDARY_KEYWORDS.iter().copied())
                .with_exclude(IT_EXCLUDE_KEYWORDS.iter().copied()),
            CategoryRule::new(FALLBACK_CATEGORY_KEY, FALLBACK_CATEGORY_NAME),
        ],
    }
}
