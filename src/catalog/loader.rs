//! 分类目录加载：内置表或本地 JSON 文件

use std::fs;
use std::path::Path;

use crate::config::CatalogOrigin;
use crate::error::{TenderError, TenderResult};

use super::builtin::builtin_definition;
use super::model::{CatalogDefinition, CategoryCatalog};

#[derive(Debug, Default)]
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn new() -> Self {
        Self
    }

    pub fn load(&self, origin: &CatalogOrigin) -> TenderResult<CategoryCatalog> {
        match origin {
            CatalogOrigin::Embedded => CategoryCatalog::compile(&builtin_definition()),
            CatalogOrigin::LocalFile(path) => self.load_file(path),
        }
    }

    /// 读取并编译本地目录文件
    pub fn load_file(&self, path: &Path) -> TenderResult<CategoryCatalog> {
        let content = fs::read_to_string(path).map_err(|e| {
            TenderError::CatalogLoadError(format!("cannot read [{}]: {}", path.display(), e))
        })?;

        let catalog = Self::from_json_str(&content)?;
        log::info!(
            "Loaded category catalog from [{}] ({} categories)",
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    pub fn from_json_str(json: &str) -> TenderResult<CategoryCatalog> {
        let definition: CatalogDefinition = serde_json::from_str(json)?;
        CategoryCatalog::compile(&definition)
    }
}
