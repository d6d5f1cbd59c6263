//! 서빙 카탈로그 적재/저장
//!
//! 카탈로그는 표 형태(CSV) 또는 JSON으로 보관한다. 컬럼 레이아웃:
//! `code, title, COMM, RESP, PROB, GROW, STRE, ADAP[, description, category]`
//! 빠진 역량 컬럼은 0.0으로 채운다.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{DimensionScores, JobProfile};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog row {line}: {message}")]
    MalformedRow { line: usize, message: String },
    #[error("failed to parse catalog json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write catalog: {0}")]
    Csv(#[from] csv::Error),
}

// CSV용 평탄화 레코드. csv 크레이트는 #[serde(flatten)]을 다루지 못해
// JobProfile과 별도로 둔다.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogRow {
    code: String,
    title: String,
    #[serde(rename = "COMM", default)]
    comm: f64,
    #[serde(rename = "RESP", default)]
    resp: f64,
    #[serde(rename = "PROB", default)]
    prob: f64,
    #[serde(rename = "GROW", default)]
    grow: f64,
    #[serde(rename = "STRE", default)]
    stre: f64,
    #[serde(rename = "ADAP", default)]
    adap: f64,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    category: Option<String>,
}

impl From<CatalogRow> for JobProfile {
    fn from(row: CatalogRow) -> Self {
        JobProfile {
            code: row.code,
            title: row.title,
            scores: DimensionScores::from_array([
                row.comm, row.resp, row.prob, row.grow, row.stre, row.adap,
            ]),
            description: row.description.filter(|s| !s.is_empty()),
            category: row.category.filter(|s| !s.is_empty()),
        }
    }
}

impl From<&JobProfile> for CatalogRow {
    fn from(profile: &JobProfile) -> Self {
        let [comm, resp, prob, grow, stre, adap] = profile.scores.to_array();
        CatalogRow {
            code: profile.code.clone(),
            title: profile.title.clone(),
            comm,
            resp,
            prob,
            grow,
            stre,
            adap,
            description: profile.description.clone(),
            category: profile.category.clone(),
        }
    }
}

/// CSV 카탈로그를 읽는다. 헤더 필수, 빈 카탈로그는 오류가 아니다.
pub fn load_csv<R: Read>(reader: R) -> Result<Vec<JobProfile>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut profiles = Vec::new();
    for (index, result) in csv_reader.deserialize::<CatalogRow>().enumerate() {
        let row = result.map_err(|err| CatalogError::MalformedRow {
            // +2: 헤더 1행과 1-기반 번호
            line: index + 2,
            message: err.to_string(),
        })?;
        profiles.push(row.into());
    }

    tracing::debug!(count = profiles.len(), "loaded job catalog from csv");
    Ok(profiles)
}

/// JSON 배열 카탈로그를 읽는다.
pub fn load_json<R: Read>(reader: R) -> Result<Vec<JobProfile>, CatalogError> {
    let profiles: Vec<JobProfile> = serde_json::from_reader(reader)?;
    tracing::debug!(count = profiles.len(), "loaded job catalog from json");
    Ok(profiles)
}

pub fn write_csv<W: Write>(writer: W, profiles: &[JobProfile]) -> Result<(), CatalogError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for profile in profiles {
        csv_writer.serialize(CatalogRow::from(profile))?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(writer: W, profiles: &[JobProfile]) -> Result<(), CatalogError> {
    serde_json::to_writer_pretty(writer, profiles)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
code,title,COMM,RESP,PROB,GROW,STRE,ADAP,description,category
15-1252.00,Software Developers,3.9,4.1,4.4,4.2,3.6,3.7,writes software,IT
29-1141.00,Registered Nurses,4.3,4.6,3.8,3.9,4.5,4.1,,Healthcare
";

    #[test]
    fn loads_catalog_rows_from_csv() {
        let profiles = load_csv(SAMPLE_CSV.as_bytes()).unwrap();

        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].code, "15-1252.00");
        assert_eq!(profiles[0].scores.problem_solving, 4.4);
        assert_eq!(profiles[0].description.as_deref(), Some("writes software"));
        // 빈 셀은 None으로 정규화
        assert_eq!(profiles[1].description, None);
        assert_eq!(profiles[1].category.as_deref(), Some("Healthcare"));
    }

    #[test]
    fn missing_dimension_column_defaults_to_zero() {
        let csv = "code,title,COMM,RESP\nx,partial,4.0,3.5\n";

        let profiles = load_csv(csv.as_bytes()).unwrap();

        assert_eq!(profiles[0].scores.communication, 4.0);
        assert_eq!(profiles[0].scores.stress_tolerance, 0.0);
        assert_eq!(profiles[0].scores.adaptation, 0.0);
    }

    #[test]
    fn malformed_value_reports_line_number() {
        let csv = "code,title,COMM,RESP,PROB,GROW,STRE,ADAP\na,ok,3,3,3,3,3,3\nb,bad,x,3,3,3,3,3\n";

        let err = load_csv(csv.as_bytes()).unwrap_err();

        match err {
            CatalogError::MalformedRow { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_catalog_is_not_an_error() {
        let csv = "code,title,COMM,RESP,PROB,GROW,STRE,ADAP\n";

        let profiles = load_csv(csv.as_bytes()).unwrap();

        assert!(profiles.is_empty());
    }

    #[test]
    fn loads_catalog_from_json() {
        let json = r#"[
            {"code": "11-1011.00", "title": "Chief Executives",
             "COMM": 4.8, "RESP": 4.5, "PROB": 4.4, "GROW": 4.0, "STRE": 4.6, "ADAP": 4.2}
        ]"#;

        let profiles = load_json(json.as_bytes()).unwrap();

        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].scores.communication, 4.8);
    }

    #[test]
    fn written_csv_can_be_loaded_back() {
        let profiles = load_csv(SAMPLE_CSV.as_bytes()).unwrap();

        let mut buffer = Vec::new();
        write_csv(&mut buffer, &profiles).unwrap();
        let reloaded = load_csv(buffer.as_slice()).unwrap();

        assert_eq!(reloaded, profiles);
    }
}
