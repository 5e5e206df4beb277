//! 全局错误类型定义

use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use tender_classifier_engine::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TenderError {
    // 目录相关错误
    #[error("Category catalog load failed: {0}")]
    CatalogLoadError(String),
    #[error("Category catalog is invalid: {0}")]
    CatalogInvalid(String),

    // 规则编译错误（内核层）
    #[error("Category rule compilation failed: {0}")]
    RuleCompileError(#[from] CoreError),

    // 序列化/反序列化错误
    #[error("JSON parse failed: {0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO operation failed: {0}")]
    IoError(#[from] IoError),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type TenderResult<T> = Result<T, TenderError>;
