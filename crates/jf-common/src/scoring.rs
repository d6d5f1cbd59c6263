use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use crate::dimension::Dimension;
use crate::question::{default_question_bank, ItemScale, Question};
use crate::DimensionScores;

/// 응답 입력이 잘못된 경우. 재시도로 해결되지 않으므로 호출자가 그대로 반려한다.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("answers must contain {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("answer at index {index} must be an integer between 1 and 5, got {value}")]
    OutOfRange { index: usize, value: i32 },
}

/// 문항 구성이 불변식을 깨는 경우. 기동 시점에 실패해야 한다.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("no scored questions are assigned to dimension {0}")]
    EmptyDimension(Dimension),
    #[error("duplicate question number {0}")]
    DuplicateNumber(u16),
}

/// 타당도 문항에서 뽑는 진단 신호 2종. 추천 입력으로는 쓰지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidityAssessment {
    /// 타당도 응답이 전부 같은 값이면 false (무성의 응답 의심)
    pub attention_check_pass: bool,
    /// 타당도 응답 중 극단값(1 또는 5)이 2개 이상이면 true
    pub exaggeration_flag: bool,
}

/// 1회 채점 결과: 역량 평균 6개 + 타당도 신호
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreReport {
    pub scores: DimensionScores,
    pub validity: ValidityAssessment,
}

/// 리커트 응답 채점 엔진
///
/// 순수 함수 집합이다. 동일 입력에 대해 비트 단위로 동일한 출력을 내며,
/// 공유 상태가 없어 동시 호출에 안전하다.
#[derive(Debug)]
pub struct ScoringEngine {
    questions: Vec<Question>,
}

impl ScoringEngine {
    /// 문항 구성을 검증하고 엔진을 만든다.
    ///
    /// 6개 역량 각각에 채점 문항이 최소 1개씩 있어야 한다. 빠진 역량을
    /// 0점으로 조용히 채우는 대신 여기서 기동을 거부한다.
    pub fn new(questions: Vec<Question>) -> Result<Self, ConfigurationError> {
        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.number) {
                return Err(ConfigurationError::DuplicateNumber(question.number));
            }
        }

        for dimension in Dimension::ALL {
            let covered = questions
                .iter()
                .any(|q| q.scale == ItemScale::Scored(dimension));
            if !covered {
                return Err(ConfigurationError::EmptyDimension(dimension));
            }
        }

        Ok(Self { questions })
    }

    pub fn with_default_bank() -> Self {
        // 기본 뱅크는 자체 테스트로 불변식이 보장된다
        Self::new(default_question_bank().to_vec())
            .unwrap_or_else(|err| panic!("default question bank is invalid: {err}"))
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// 응답 리스트를 채점한다.
    ///
    /// 1) 역코딩 문항은 v → 6-v 로 뒤집는다 (1↔5, 2↔4, 3→3)
    /// 2) 역량별 산술평균을 소수 둘째 자리까지 반올림한다
    /// 3) 타당도 문항은 변환 없이 원값으로 주의력·과장 신호를 계산한다
    pub fn score(&self, answers: &[i32]) -> Result<ScoreReport, ValidationError> {
        if answers.len() != self.questions.len() {
            return Err(ValidationError::LengthMismatch {
                expected: self.questions.len(),
                actual: answers.len(),
            });
        }

        let mut sums = [0.0_f64; 6];
        let mut counts = [0_usize; 6];
        let mut validity_raw: Vec<i32> = Vec::new();

        for (index, (question, &value)) in self.questions.iter().zip(answers).enumerate() {
            if !(1..=5).contains(&value) {
                return Err(ValidationError::OutOfRange { index, value });
            }

            match question.scale {
                ItemScale::Validity => validity_raw.push(value),
                ItemScale::Scored(dimension) => {
                    let adjusted = if question.is_reverse { 6 - value } else { value };
                    sums[dimension.index()] += f64::from(adjusted);
                    counts[dimension.index()] += 1;
                }
            }
        }

        let mut scores = DimensionScores::default();
        for dimension in Dimension::ALL {
            let i = dimension.index();
            // 빈 파티션은 0.00 (new()가 막아주지만 계약상 정의된 값)
            let mean = if counts[i] == 0 {
                0.0
            } else {
                round2(sums[i] / counts[i] as f64)
            };
            scores.set(dimension, mean);
        }

        let attention_check_pass = match validity_raw.first() {
            None => true,
            Some(first) => !validity_raw.iter().all(|v| v == first),
        };
        let exaggeration_flag = validity_raw.iter().filter(|v| **v == 1 || **v == 5).count() >= 2;

        Ok(ScoreReport {
            scores,
            validity: ValidityAssessment {
                attention_check_pass,
                exaggeration_flag,
            },
        })
    }
}

/// 소수 둘째 자리 반올림.
///
/// 반올림 규칙은 half away from zero (`f64::round`)로 고정한다. 2.125 → 2.13.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_per_dimension() -> Vec<Question> {
        Dimension::ALL
            .into_iter()
            .enumerate()
            .map(|(i, d)| Question::scored(i as u16 + 1, d, "item"))
            .collect()
    }

    #[test]
    fn midpoint_answers_score_three_everywhere() {
        let engine = ScoringEngine::with_default_bank();
        let answers = vec![3; engine.question_count()];

        let report = engine.score(&answers).unwrap();

        for dimension in Dimension::ALL {
            assert_eq!(report.scores.get(dimension), 3.0);
        }
    }

    #[test]
    fn reverse_coding_mirrors_around_midpoint() {
        // 역코딩 문항에 v를 답한 것과 일반 문항에 6-v를 답한 것은 같은 기여
        let mut reversed_bank = one_per_dimension();
        reversed_bank[0] = Question::scored_reverse(1, Dimension::Communication, "item");
        let reversed = ScoringEngine::new(reversed_bank).unwrap();
        let plain = ScoringEngine::new(one_per_dimension()).unwrap();

        for v in 1..=5 {
            let from_reversed = reversed.score(&[v, 3, 3, 3, 3, 3]).unwrap();
            let from_plain = plain.score(&[6 - v, 3, 3, 3, 3, 3]).unwrap();
            assert_eq!(from_reversed.scores, from_plain.scores);
            assert_eq!(6 - (6 - v), v);
        }
    }

    #[test]
    fn end_to_end_six_question_scenario() {
        let engine = ScoringEngine::new(one_per_dimension()).unwrap();

        let report = engine.score(&[5, 1, 3, 3, 3, 3]).unwrap();

        assert_eq!(report.scores.communication, 5.0);
        assert_eq!(report.scores.responsibility, 1.0);
        assert_eq!(report.scores.problem_solving, 3.0);
        assert_eq!(report.scores.adaptation, 3.0);
        // 타당도 문항이 없으면 주의력 체크는 통과로 본다
        assert!(report.validity.attention_check_pass);
        assert!(!report.validity.exaggeration_flag);
    }

    #[test]
    fn identical_validity_answers_fail_attention_check() {
        let engine = ScoringEngine::with_default_bank();
        let answers = vec![3; engine.question_count()];

        let report = engine.score(&answers).unwrap();

        assert!(!report.validity.attention_check_pass);
    }

    #[test]
    fn two_distinct_validity_answers_pass_attention_check() {
        let engine = ScoringEngine::with_default_bank();
        let mut answers = vec![3; engine.question_count()];
        // 7번 문항이 첫 타당도 문항
        answers[6] = 2;

        let report = engine.score(&answers).unwrap();

        assert!(report.validity.attention_check_pass);
    }

    #[test]
    fn exaggeration_needs_at_least_two_extremes() {
        let engine = ScoringEngine::with_default_bank();
        let validity_positions = [6_usize, 13, 20, 27];

        let mut one_extreme = vec![3; engine.question_count()];
        one_extreme[validity_positions[0]] = 5;
        let report = engine.score(&one_extreme).unwrap();
        assert!(!report.validity.exaggeration_flag);

        let mut two_extremes = one_extreme;
        two_extremes[validity_positions[1]] = 1;
        let report = engine.score(&two_extremes).unwrap();
        assert!(report.validity.exaggeration_flag);
    }

    #[test]
    fn rejects_wrong_answer_count() {
        let engine = ScoringEngine::with_default_bank();

        let err = engine.score(&[3; 39]).unwrap_err();

        assert_eq!(
            err,
            ValidationError::LengthMismatch {
                expected: 40,
                actual: 39
            }
        );
    }

    #[test]
    fn rejects_out_of_range_answer() {
        let engine = ScoringEngine::new(one_per_dimension()).unwrap();

        let err = engine.score(&[3, 3, 6, 3, 3, 3]).unwrap_err();

        assert_eq!(err, ValidationError::OutOfRange { index: 2, value: 6 });
    }

    #[test]
    fn refuses_bank_missing_a_dimension() {
        let bank: Vec<Question> = one_per_dimension()
            .into_iter()
            .filter(|q| q.scale != ItemScale::Scored(Dimension::Growth))
            .collect();

        let err = ScoringEngine::new(bank).unwrap_err();

        assert_eq!(err, ConfigurationError::EmptyDimension(Dimension::Growth));
    }

    #[test]
    fn refuses_duplicate_question_numbers() {
        let mut bank = one_per_dimension();
        bank[5].number = 1;

        let err = ScoringEngine::new(bank).unwrap_err();

        assert_eq!(err, ConfigurationError::DuplicateNumber(1));
    }

    #[test]
    fn rounds_half_away_from_zero() {
        // 8문항 평균 33/8 = 4.125 → 4.13 (banker's rounding이면 4.12가 된다)
        let mut bank: Vec<Question> = (1..=8)
            .map(|n| Question::scored(n, Dimension::Communication, "item"))
            .collect();
        bank.extend(
            Dimension::ALL
                .into_iter()
                .skip(1)
                .enumerate()
                .map(|(i, d)| Question::scored(9 + i as u16, d, "item")),
        );
        let engine = ScoringEngine::new(bank).unwrap();

        let report = engine
            .score(&[4, 4, 4, 4, 4, 4, 4, 5, 3, 3, 3, 3, 3])
            .unwrap();

        assert_eq!(report.scores.communication, 4.13);
        assert_eq!(round2(2.125), 2.13);
        assert_eq!(round2(-2.125), -2.13);
    }
}
