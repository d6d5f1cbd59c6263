//! O*NET 텍스트 덤프(TSV) 파싱
//!
//! 필요한 컬럼만 뽑아 빌더 입력(SourceTable)으로 바꾼다. 숫자로 읽을 수
//! 없는 Data Value는 원본 스크립트와 같이 행 단위로 건너뛴다.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use jf_common::builder::{SourceRecord, SourceScale, SourceTable};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceParseError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },
    #[error("{path} row {line}: {message}")]
    MalformedRow {
        path: String,
        line: usize,
        message: String,
    },
}

#[derive(Debug, Deserialize)]
struct OccupationRow {
    #[serde(rename = "O*NET-SOC Code")]
    code: String,
    #[serde(rename = "Title")]
    title: String,
}

#[derive(Debug, Deserialize)]
struct AttributeRow {
    #[serde(rename = "O*NET-SOC Code")]
    code: String,
    #[serde(rename = "Element Name")]
    element: String,
    #[serde(rename = "Scale ID")]
    scale_id: String,
    #[serde(rename = "Data Value")]
    data_value: String,
    #[serde(rename = "Domain Source")]
    domain_source: String,
}

fn tsv_reader(path: &Path) -> Result<csv::Reader<File>, SourceParseError> {
    let file = File::open(path).map_err(|source| SourceParseError::Open {
        path: path.display().to_string(),
        source,
    })?;
    Ok(csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file))
}

/// `Occupation Data.txt` → 직업 코드-제목 매핑
pub fn load_occupation_titles(path: &Path) -> Result<HashMap<String, String>, SourceParseError> {
    let mut reader = tsv_reader(path)?;
    let mut titles = HashMap::new();

    for (index, result) in reader.deserialize::<OccupationRow>().enumerate() {
        let row = result.map_err(|err| SourceParseError::MalformedRow {
            path: path.display().to_string(),
            line: index + 2,
            message: err.to_string(),
        })?;
        if !row.code.is_empty() {
            titles.insert(row.code, row.title);
        }
    }

    Ok(titles)
}

/// 속성 테이블 1개를 읽어 SourceTable로 만든다.
pub fn load_source_table(
    path: &Path,
    name: &str,
    provenance_filter: &str,
) -> Result<SourceTable, SourceParseError> {
    let mut reader = tsv_reader(path)?;
    let mut records = Vec::new();
    let mut skipped = 0_usize;

    for (index, result) in reader.deserialize::<AttributeRow>().enumerate() {
        let row = result.map_err(|err| SourceParseError::MalformedRow {
            path: path.display().to_string(),
            line: index + 2,
            message: err.to_string(),
        })?;

        let Ok(value) = row.data_value.parse::<f64>() else {
            skipped += 1;
            continue;
        };
        // LV(수준, 0~7)만 재변환 대상이고 나머지는 중요도 척도로 본다
        let scale = if row.scale_id == "LV" {
            SourceScale::Level
        } else {
            SourceScale::Importance
        };

        records.push(SourceRecord {
            occupation_code: row.code,
            element: row.element,
            scale,
            value,
            provenance: row.domain_source,
        });
    }

    if skipped > 0 {
        tracing::debug!(table = name, skipped, "skipped rows without numeric values");
    }

    Ok(SourceTable {
        name: name.to_string(),
        provenance_filter: provenance_filter.to_string(),
        records,
    })
}
