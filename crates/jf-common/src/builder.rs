//! 오프라인 카탈로그 빌더
//!
//! 직업 DB(O*NET류)의 속성 테이블 여러 개를 모아 직업별 6개 역량 점수를
//! 집계한다. 배치 전처리 전용이며 서빙 경로에서는 호출하지 않는다.

use std::collections::{BTreeMap, HashMap};

use crate::dimension::Dimension;
use crate::scoring::round2;
use crate::{DimensionScores, JobProfile};

/// 원본 값의 입력 척도
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceScale {
    /// 중요도: 이미 0~5 범위
    Importance,
    /// 수준: 0~7 범위라서 0~5로 선형 변환
    Level,
}

impl SourceScale {
    /// 0.0~5.0으로 정규화 (범위 밖 값은 잘라낸다)
    pub fn normalize(self, value: f64) -> f64 {
        match self {
            SourceScale::Importance => value.clamp(0.0, 5.0),
            SourceScale::Level => (value / 7.0 * 5.0).clamp(0.0, 5.0),
        }
    }
}

/// 속성 테이블의 1행: 직업 코드 + 요소명 + 척도값 + 출처 태그
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRecord {
    pub occupation_code: String,
    pub element: String,
    pub scale: SourceScale,
    pub value: f64,
    pub provenance: String,
}

/// 속성 테이블 1개. 테이블마다 신뢰하는 출처 태그가 다르다
/// (예: 업무 스타일은 Incumbent, 스킬/능력은 Analyst).
#[derive(Debug, Clone, PartialEq)]
pub struct SourceTable {
    pub name: String,
    pub provenance_filter: String,
    pub records: Vec<SourceRecord>,
}

/// 요소명 → 기여하는 역량 축 매핑. 한 요소가 여러 축에 기여할 수 있다.
pub fn default_rules() -> HashMap<String, Vec<Dimension>> {
    use Dimension::*;

    let entries: [(&str, &[Dimension]); 18] = [
        // 업무 스타일
        ("Cooperation", &[Communication]),
        ("Social Orientation", &[Communication]),
        ("Integrity", &[Responsibility]),
        ("Dependability", &[Responsibility]),
        ("Attention to Detail", &[Responsibility]),
        ("Persistence", &[Responsibility]),
        ("Stress Tolerance", &[StressTolerance]),
        ("Self-Control", &[StressTolerance]),
        ("Adaptability/Flexibility", &[Adaptation]),
        // 스킬
        ("Speaking", &[Communication]),
        ("Active Listening", &[Communication]),
        ("Coordination", &[Communication]),
        ("Oral Expression", &[Communication]),
        ("Critical Thinking", &[ProblemSolving]),
        ("Complex Problem Solving", &[ProblemSolving]),
        ("Learning Strategies", &[Growth]),
        ("Active Learning", &[Growth]),
        // 능력 (스킬과 겹치는 요소는 위에서 처리)
        ("Social Perceptiveness", &[Adaptation]),
    ];

    let mut rules: HashMap<String, Vec<Dimension>> = entries
        .into_iter()
        .map(|(element, dimensions)| (element.to_string(), dimensions.to_vec()))
        .collect();

    rules.insert("Service Orientation".into(), vec![Adaptation]);
    rules.insert("Persuasion".into(), vec![Adaptation]);
    rules.insert("Problem Sensitivity".into(), vec![ProblemSolving]);
    rules.insert("Inductive Reasoning".into(), vec![ProblemSolving]);
    rules.insert("Deductive Reasoning".into(), vec![ProblemSolving]);

    rules
}

/// 직업별 역량 점수 집계기
pub struct CatalogBuilder {
    rules: HashMap<String, Vec<Dimension>>,
    min_dimensions: usize,
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
            min_dimensions: 3,
        }
    }

    pub fn with_rules(rules: HashMap<String, Vec<Dimension>>) -> Self {
        Self {
            rules,
            min_dimensions: 3,
        }
    }

    /// 채워진 역량 축이 이 개수보다 적은 직업은 버린다 (기본 3)
    pub fn min_dimensions(mut self, min_dimensions: usize) -> Self {
        self.min_dimensions = min_dimensions;
        self
    }

    /// 속성 테이블들을 집계해 직업 프로파일 목록을 만든다.
    ///
    /// - 테이블별 출처 필터에 맞지 않는 행은 건너뛴다
    /// - 규칙에 없는 요소명은 무시한다
    /// - 직업별·역량별 기여값을 평균 내고 소수 둘째 자리로 반올림한다
    /// - 채워진 축이 min_dimensions 미만이면 신호 부족으로 조용히 제외한다
    /// - 출력은 직업 코드 오름차순 (행 순서에 기대지 않는 명시적 결정성)
    pub fn build(
        &self,
        titles: &HashMap<String, String>,
        sources: &[SourceTable],
    ) -> Vec<JobProfile> {
        // BTreeMap: 출력 정렬을 코드 순으로 고정
        let mut contributions: BTreeMap<String, [Vec<f64>; 6]> = BTreeMap::new();

        for table in sources {
            let mut used = 0_usize;
            for record in &table.records {
                if record.provenance != table.provenance_filter {
                    continue;
                }
                let Some(dimensions) = self.rules.get(&record.element) else {
                    continue;
                };

                let score = record.scale.normalize(record.value);
                let entry = contributions
                    .entry(record.occupation_code.clone())
                    .or_default();
                for dimension in dimensions {
                    entry[dimension.index()].push(score);
                }
                used += 1;
            }
            tracing::debug!(table = %table.name, used, "aggregated source table");
        }

        let mut profiles = Vec::new();
        for (code, buckets) in contributions {
            let populated = buckets.iter().filter(|values| !values.is_empty()).count();
            if populated < self.min_dimensions {
                continue;
            }

            let mut scores = DimensionScores::default();
            for dimension in Dimension::ALL {
                let values = &buckets[dimension.index()];
                if !values.is_empty() {
                    let mean = values.iter().sum::<f64>() / values.len() as f64;
                    scores.set(dimension, round2(mean));
                }
            }

            let title = titles.get(&code).cloned().unwrap_or_else(|| "Unknown".into());
            profiles.push(JobProfile {
                code,
                title,
                scores,
                description: None,
                category: None,
            });
        }

        tracing::info!(
            occupations = profiles.len(),
            min_dimensions = self.min_dimensions,
            "catalog build complete"
        );
        profiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str, element: &str, scale: SourceScale, value: f64, tag: &str) -> SourceRecord {
        SourceRecord {
            occupation_code: code.into(),
            element: element.into(),
            scale,
            value,
            provenance: tag.into(),
        }
    }

    fn incumbent_table(records: Vec<SourceRecord>) -> SourceTable {
        SourceTable {
            name: "work_styles".into(),
            provenance_filter: "Incumbent".into(),
            records,
        }
    }

    fn titles() -> HashMap<String, String> {
        HashMap::from([("11-0000".to_string(), "Manager".to_string())])
    }

    #[test]
    fn level_scale_rescales_to_five_point_range() {
        assert_eq!(SourceScale::Level.normalize(7.0), 5.0);
        assert_eq!(SourceScale::Level.normalize(3.5), 2.5);
        assert_eq!(SourceScale::Level.normalize(9.0), 5.0);
        assert_eq!(SourceScale::Importance.normalize(4.2), 4.2);
        assert_eq!(SourceScale::Importance.normalize(6.0), 5.0);
    }

    #[test]
    fn averages_contributions_within_a_dimension() {
        let table = incumbent_table(vec![
            record("11-0000", "Cooperation", SourceScale::Importance, 4.0, "Incumbent"),
            record("11-0000", "Social Orientation", SourceScale::Importance, 5.0, "Incumbent"),
            record("11-0000", "Dependability", SourceScale::Importance, 4.0, "Incumbent"),
            record("11-0000", "Critical Thinking", SourceScale::Importance, 3.0, "Incumbent"),
        ]);

        let profiles = CatalogBuilder::new().build(&titles(), &[table]);

        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].title, "Manager");
        assert_eq!(profiles[0].scores.communication, 4.5);
        assert_eq!(profiles[0].scores.responsibility, 4.0);
        // 기여가 없는 축은 0.0으로 남는다
        assert_eq!(profiles[0].scores.growth, 0.0);
    }

    #[test]
    fn drops_occupations_with_fewer_than_three_populated_dimensions() {
        // COMM 2건 + RESP 1건 → 채워진 축 2개뿐이므로 제외
        let table = incumbent_table(vec![
            record("11-0000", "Cooperation", SourceScale::Importance, 4.0, "Incumbent"),
            record("11-0000", "Social Orientation", SourceScale::Importance, 5.0, "Incumbent"),
            record("11-0000", "Dependability", SourceScale::Importance, 4.0, "Incumbent"),
        ]);

        let profiles = CatalogBuilder::new().build(&titles(), &[table]);

        assert!(profiles.is_empty());
    }

    #[test]
    fn min_dimensions_override_keeps_sparse_occupations() {
        let table = incumbent_table(vec![record(
            "11-0000",
            "Cooperation",
            SourceScale::Importance,
            4.0,
            "Incumbent",
        )]);

        let profiles = CatalogBuilder::new()
            .min_dimensions(1)
            .build(&titles(), &[table]);

        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].scores.communication, 4.0);
    }

    #[test]
    fn filters_records_by_table_provenance() {
        let table = incumbent_table(vec![
            record("11-0000", "Cooperation", SourceScale::Importance, 5.0, "Incumbent"),
            record("11-0000", "Cooperation", SourceScale::Importance, 1.0, "Analyst"),
        ]);

        let profiles = CatalogBuilder::new()
            .min_dimensions(1)
            .build(&titles(), &[table]);

        assert_eq!(profiles[0].scores.communication, 5.0);
    }

    #[test]
    fn unknown_elements_are_ignored() {
        let table = incumbent_table(vec![record(
            "11-0000",
            "Telepathy",
            SourceScale::Importance,
            5.0,
            "Incumbent",
        )]);

        let profiles = CatalogBuilder::new()
            .min_dimensions(1)
            .build(&titles(), &[table]);

        assert!(profiles.is_empty());
    }

    #[test]
    fn output_is_sorted_by_occupation_code() {
        let make = |code: &str| {
            vec![
                record(code, "Cooperation", SourceScale::Importance, 4.0, "Incumbent"),
                record(code, "Dependability", SourceScale::Importance, 4.0, "Incumbent"),
                record(code, "Critical Thinking", SourceScale::Importance, 4.0, "Incumbent"),
            ]
        };
        let mut records = make("29-1141");
        records.extend(make("11-1011"));
        records.extend(make("15-1252"));

        let profiles = CatalogBuilder::new().build(&HashMap::new(), &[incumbent_table(records)]);

        let codes: Vec<&str> = profiles.iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, ["11-1011", "15-1252", "29-1141"]);
        // 제목 테이블에 없는 코드는 Unknown
        assert!(profiles.iter().all(|p| p.title == "Unknown"));
    }
}
