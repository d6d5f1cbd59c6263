use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use thiserror::Error;

use super::archetypes::Archetype;
use super::recommender::JobMatch;
use crate::{DimensionScores, JobProfile};

/// 합성 학습 데이터 생성 설정
///
/// seed가 고정되면 데이터셋과 학습 결과가 완전히 재현된다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntheticConfig {
    pub samples_per_class: usize,
    pub noise_std: f64,
    pub seed: u64,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            samples_per_class: 400,
            noise_std: 0.7,
            seed: 42,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum TrainError {
    #[error("archetype table is empty")]
    NoArchetypes,
    #[error("samples_per_class must be positive")]
    NoSamples,
    #[error("noise standard deviation must be positive, got {0}")]
    InvalidNoiseStd(f64),
}

/// 클래스 인덱스 ↔ 직업명 매핑
///
/// 클래스는 사전순으로 정렬해 인코딩하므로 아키타입 테이블이 같으면
/// 매핑도 항상 같다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn fit<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        let mut classes: Vec<String> = labels.into_iter().map(str::to_string).collect();
        classes.sort();
        classes.dedup();
        Self { classes }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn encode(&self, label: &str) -> Option<usize> {
        self.classes.binary_search_by(|c| c.as_str().cmp(label)).ok()
    }

    pub fn decode(&self, index: usize) -> Option<&str> {
        self.classes.get(index).map(String::as_str)
    }
}

/// 합성 샘플 1건: 노이즈를 더한 6차원 벡터와 클래스 인덱스
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub features: [f64; 6],
    pub class: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticDataset {
    pub labels: LabelEncoder,
    pub samples: Vec<Sample>,
}

/// 아키타입 평균 벡터에 가우시안 노이즈를 더한 학습 데이터셋을 만든다.
///
/// 샘플은 리커트 범위 [1, 5]로 잘라낸다. 아키타입 테이블 순서대로
/// 하나의 시드 RNG에서 뽑으므로 같은 입력이면 같은 데이터셋이 나온다.
pub fn generate_dataset(
    archetypes: &[Archetype],
    config: &SyntheticConfig,
) -> Result<SyntheticDataset, TrainError> {
    if archetypes.is_empty() {
        return Err(TrainError::NoArchetypes);
    }
    if config.samples_per_class == 0 {
        return Err(TrainError::NoSamples);
    }
    // Normal::new은 0.0을 허용하지만 predict_proba의 2σ² 분모가 0이 되므로
    // 여기서 양수(NaN 제외)만 받는다
    if !(config.noise_std > 0.0) {
        return Err(TrainError::InvalidNoiseStd(config.noise_std));
    }
    let noise = Normal::new(0.0, config.noise_std)
        .map_err(|_| TrainError::InvalidNoiseStd(config.noise_std))?;

    let labels = LabelEncoder::fit(archetypes.iter().map(|a| a.title));
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut samples = Vec::with_capacity(archetypes.len() * config.samples_per_class);

    for archetype in archetypes {
        // fit은 중복을 제거하므로 테이블 제목은 항상 인코딩 가능하다
        let class = labels
            .encode(archetype.title)
            .ok_or(TrainError::NoArchetypes)?;

        for _ in 0..config.samples_per_class {
            let mut features = archetype.scores;
            for value in &mut features {
                *value = (*value + noise.sample(&mut rng)).clamp(1.0, 5.0);
            }
            samples.push(Sample { features, class });
        }
    }

    Ok(SyntheticDataset { labels, samples })
}

/// 아키타입 분류기 (추천 엔진의 대안 전략)
///
/// 합성 데이터셋에서 클래스별 중심 벡터를 추정해 두고, 서빙 시에는
/// 생성 모형 그대로 softmax(-‖x-c‖²/2σ²)로 클래스 확률을 낸다.
/// 런타임 계약은 기하 방식과 동일: 6개 점수 입력 → 정렬된 직업 리스트.
/// 학습 후에는 읽기 전용이며 예측은 상태를 바꾸지 않는다.
#[derive(Debug)]
pub struct ArchetypeClassifier {
    labels: LabelEncoder,
    centroids: Vec<[f64; 6]>,
    noise_std: f64,
}

impl ArchetypeClassifier {
    pub fn train(archetypes: &[Archetype], config: &SyntheticConfig) -> Result<Self, TrainError> {
        let dataset = generate_dataset(archetypes, config)?;
        let class_count = dataset.labels.classes().len();

        let mut sums = vec![[0.0_f64; 6]; class_count];
        let mut counts = vec![0_usize; class_count];
        for sample in &dataset.samples {
            for (i, value) in sample.features.iter().enumerate() {
                sums[sample.class][i] += value;
            }
            counts[sample.class] += 1;
        }

        let centroids = sums
            .into_iter()
            .zip(counts)
            .map(|(sum, count)| sum.map(|v| v / count as f64))
            .collect();

        Ok(Self {
            labels: dataset.labels,
            centroids,
            noise_std: config.noise_std,
        })
    }

    pub fn classes(&self) -> &[String] {
        self.labels.classes()
    }

    /// 클래스별 확률 (labels 순서, 합계 1.0)
    pub fn predict_proba(&self, user: &DimensionScores) -> Vec<f64> {
        let x = user.to_array();
        let scale = 2.0 * self.noise_std * self.noise_std;

        let logits: Vec<f64> = self
            .centroids
            .iter()
            .map(|centroid| {
                let squared: f64 = x
                    .iter()
                    .zip(centroid)
                    .map(|(a, b)| (a - b) * (a - b))
                    .sum();
                -squared / scale
            })
            .collect();

        // softmax (최대값을 빼서 오버플로 방지)
        let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = logits.iter().map(|l| (l - max).exp()).collect();
        let total: f64 = exps.iter().sum();
        exps.into_iter().map(|e| e / total).collect()
    }

    /// 예측 확률 내림차순 상위 top_n 클래스를 추천으로 돌려준다.
    pub fn recommend(&self, user: &DimensionScores, top_n: usize) -> Vec<JobMatch> {
        if top_n == 0 {
            return Vec::new();
        }

        let probabilities = self.predict_proba(user);
        let mut ranked: Vec<(usize, f64)> = probabilities.into_iter().enumerate().collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        ranked.truncate(top_n);

        ranked
            .into_iter()
            .map(|(class, probability)| JobMatch {
                profile: JobProfile {
                    code: format!("REP-{:02}", class + 1),
                    title: self.labels.classes()[class].clone(),
                    scores: DimensionScores::from_array(self.centroids[class]),
                    description: None,
                    category: None,
                },
                score: probability,
            })
            .collect()
    }
}
