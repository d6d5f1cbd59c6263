pub mod builder;
pub mod catalog;
pub mod dimension;
pub mod logging;
pub mod matching;
pub mod question;
pub mod scoring;

use serde::{Deserialize, Serialize};

use dimension::Dimension;

// Commonly used data models shared by the scoring and matching engines.

/// 6개 역량 축의 점수 묶음 (1.00~5.00, 카탈로그 쪽은 0.00 허용)
///
/// 컬럼 순서는 저장 포맷과 동일: COMM, RESP, PROB, GROW, STRE, ADAP
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    #[serde(rename = "COMM", default)]
    pub communication: f64,
    #[serde(rename = "RESP", default)]
    pub responsibility: f64,
    #[serde(rename = "PROB", default)]
    pub problem_solving: f64,
    #[serde(rename = "GROW", default)]
    pub growth: f64,
    #[serde(rename = "STRE", default)]
    pub stress_tolerance: f64,
    #[serde(rename = "ADAP", default)]
    pub adaptation: f64,
}

impl DimensionScores {
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Communication => self.communication,
            Dimension::Responsibility => self.responsibility,
            Dimension::ProblemSolving => self.problem_solving,
            Dimension::Growth => self.growth,
            Dimension::StressTolerance => self.stress_tolerance,
            Dimension::Adaptation => self.adaptation,
        }
    }

    pub fn set(&mut self, dimension: Dimension, value: f64) {
        match dimension {
            Dimension::Communication => self.communication = value,
            Dimension::Responsibility => self.responsibility = value,
            Dimension::ProblemSolving => self.problem_solving = value,
            Dimension::Growth => self.growth = value,
            Dimension::StressTolerance => self.stress_tolerance = value,
            Dimension::Adaptation => self.adaptation = value,
        }
    }

    /// `Dimension::ALL` 순서의 고정 길이 벡터로 변환
    pub fn to_array(&self) -> [f64; 6] {
        [
            self.communication,
            self.responsibility,
            self.problem_solving,
            self.growth,
            self.stress_tolerance,
            self.adaptation,
        ]
    }

    pub fn from_array(values: [f64; 6]) -> Self {
        Self {
            communication: values[0],
            responsibility: values[1],
            problem_solving: values[2],
            growth: values[3],
            stress_tolerance: values[4],
            adaptation: values[5],
        }
    }
}

/// 직업 프로파일 (서빙 카탈로그의 1행)
///
/// CatalogBuilder가 오프라인으로 생성하며, 서빙 중에는 읽기 전용이다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobProfile {
    pub code: String,
    pub title: String,
    #[serde(flatten)]
    pub scores: DimensionScores,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}
