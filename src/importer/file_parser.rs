// ==========================================
// 纪念日名单引擎 - 名单文件解析
// ==========================================
// 支持: CSV (.csv) / JSON (.json)
// CSV 列: id, firstName, lastName, [avatar], [status], 其余列为档案字段
// JSON: ProfileRecord 数组
// ==========================================

use crate::domain::profile::{Avatar, AvatarImage, ProfileRecord};
use crate::domain::types::UserStatus;
use crate::importer::error::{ImportError, ImportResult};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

const COL_ID: &str = "id";
const COL_FIRST_NAME: &str = "firstName";
const COL_LAST_NAME: &str = "lastName";
const COL_AVATAR: &str = "avatar";
const COL_STATUS: &str = "status";

/// 名单文件解析接口
pub trait RosterParser {
    fn parse_records(&self, path: &Path) -> ImportResult<Vec<ProfileRecord>>;
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl CsvParser {
    /// 从任意读取源解析
    pub fn parse_reader<R: Read>(&self, source: R) -> ImportResult<Vec<ProfileRecord>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(source);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        if !headers.iter().any(|h| h == COL_ID) {
            return Err(ImportError::MissingColumn(COL_ID.to_string()));
        }

        let mut records = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let row = result?;
            let row_map: HashMap<&str, &str> = headers
                .iter()
                .map(String::as_str)
                .zip(row.iter().map(str::trim))
                .collect();

            // 跳过完全空白的行
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            // 表头占第 1 行
            records.push(map_row(&row_map, row_idx + 2)?);
        }

        Ok(records)
    }
}

impl RosterParser for CsvParser {
    fn parse_records(&self, path: &Path) -> ImportResult<Vec<ProfileRecord>> {
        let file = File::open(path)?;
        self.parse_reader(file)
    }
}

/// CSV 行 → ProfileRecord
fn map_row(row: &HashMap<&str, &str>, row_number: usize) -> ImportResult<ProfileRecord> {
    let id = row.get(COL_ID).copied().unwrap_or("");
    if id.is_empty() {
        return Err(ImportError::InvalidValue {
            row: row_number,
            field: COL_ID.to_string(),
            value: String::new(),
        });
    }

    let mut record = ProfileRecord::new(
        id,
        row.get(COL_FIRST_NAME).copied().unwrap_or(""),
        row.get(COL_LAST_NAME).copied().unwrap_or(""),
    );

    if let Some(url) = row.get(COL_AVATAR).filter(|v| !v.is_empty()) {
        record.avatar = Some(Avatar {
            thumb: Some(AvatarImage {
                url: url.to_string(),
            }),
        });
    }

    if let Some(status) = row.get(COL_STATUS).filter(|v| !v.is_empty()) {
        record.status =
            UserStatus::from_str_loose(status).ok_or_else(|| ImportError::InvalidValue {
                row: row_number,
                field: COL_STATUS.to_string(),
                value: status.to_string(),
            })?;
    }

    record.profile = row
        .iter()
        .filter(|(column, _)| {
            ![COL_ID, COL_FIRST_NAME, COL_LAST_NAME, COL_AVATAR, COL_STATUS].contains(column)
        })
        .map(|(column, value)| (column.to_string(), value.to_string()))
        .collect();

    Ok(record)
}

// ==========================================
// JSON Parser 实现
// ==========================================
pub struct JsonParser;

impl RosterParser for JsonParser {
    fn parse_records(&self, path: &Path) -> ImportResult<Vec<ProfileRecord>> {
        let file = File::open(path)?;
        let records: Vec<ProfileRecord> = serde_json::from_reader(BufReader::new(file))?;
        Ok(records)
    }
}

// ==========================================
// 通用解析器（按扩展名分派）
// ==========================================
pub struct UniversalFileParser;

impl RosterParser for UniversalFileParser {
    fn parse_records(&self, path: &Path) -> ImportResult<Vec<ProfileRecord>> {
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        debug!(path = %path.display(), ext = %ext, "解析名单文件");

        let records = match ext.as_str() {
            "csv" => CsvParser.parse_records(path)?,
            "json" => JsonParser.parse_records(path)?,
            _ => return Err(ImportError::UnsupportedFormat(ext)),
        };

        info!(path = %path.display(), count = records.len(), "名单加载完成");
        Ok(records)
    }
}
