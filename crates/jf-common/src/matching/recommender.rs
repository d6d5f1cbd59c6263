use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum::AsRefStr;

use super::classifier::ArchetypeClassifier;
use super::similarity::{cosine_similarity, euclidean_distance};
use crate::{DimensionScores, JobProfile};

/// 거리/유사도 계산 방식
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "snake_case")]
pub enum MatchMethod {
    /// 유클리드 거리, 오름차순 (가까울수록 상위)
    #[default]
    Euclidean,
    /// 코사인 유사도, 내림차순 (클수록 상위)
    Cosine,
}

/// 추천 결과 1건. score의 의미는 방식에 따라 거리 또는 유사도.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobMatch {
    pub profile: JobProfile,
    pub score: f64,
}

/// 카탈로그 기반 추천 엔진
///
/// 카탈로그는 기동 시 한 번 적재하고 이후 읽기 전용으로만 쓴다.
/// (모듈 전역 싱글톤 대신 명시적으로 주입하는 서비스 객체)
pub struct Recommender {
    catalog: Vec<JobProfile>,
}

impl Recommender {
    pub fn new(catalog: Vec<JobProfile>) -> Self {
        if catalog.is_empty() {
            tracing::warn!("recommender constructed with an empty job catalog");
        }
        Self { catalog }
    }

    pub fn catalog(&self) -> &[JobProfile] {
        &self.catalog
    }

    /// 카탈로그 전체를 사용자 점수와의 거리/유사도로 정렬해 상위 top_n을 돌려준다.
    ///
    /// 정렬은 안정 정렬이며 동점은 카탈로그 적재 순서를 유지한다.
    /// top_n이 카탈로그 크기를 넘으면 전체를, 0이면 빈 리스트를 돌려준다.
    pub fn recommend(
        &self,
        user: &DimensionScores,
        top_n: usize,
        method: MatchMethod,
    ) -> Vec<JobMatch> {
        if top_n == 0 || self.catalog.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<JobMatch> = self
            .catalog
            .iter()
            .map(|job| {
                let score = match method {
                    MatchMethod::Euclidean => euclidean_distance(user, &job.scores),
                    MatchMethod::Cosine => cosine_similarity(user, &job.scores),
                };
                JobMatch {
                    profile: job.clone(),
                    score,
                }
            })
            .collect();

        match method {
            MatchMethod::Euclidean => {
                matches.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal))
            }
            MatchMethod::Cosine => {
                matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal))
            }
        }

        matches.truncate(top_n);
        matches
    }
}

/// 추천 전략 선택기
///
/// 기하 방식(카탈로그 유사도)과 분류기 방식은 같은 계약을 공유한다:
/// 6개 점수 입력 → 정렬된 직업 리스트 출력.
pub enum MatchStrategy {
    Catalog {
        recommender: Recommender,
        method: MatchMethod,
    },
    Classifier(ArchetypeClassifier),
}

impl MatchStrategy {
    pub fn recommend(&self, user: &DimensionScores, top_n: usize) -> Vec<JobMatch> {
        match self {
            MatchStrategy::Catalog {
                recommender,
                method,
            } => recommender.recommend(user, top_n, *method),
            MatchStrategy::Classifier(classifier) => classifier.recommend(user, top_n),
        }
    }
}
