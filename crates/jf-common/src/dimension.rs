use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

/// 인적성 검사와 직업 프로파일이 공유하는 6개 역량 축
///
/// 순서는 표시/저장 순서일 뿐 의미는 없다. 축 집합 자체는 불변.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display,
)]
pub enum Dimension {
    #[serde(rename = "COMM")]
    #[strum(serialize = "COMM")]
    Communication,
    #[serde(rename = "RESP")]
    #[strum(serialize = "RESP")]
    Responsibility,
    #[serde(rename = "PROB")]
    #[strum(serialize = "PROB")]
    ProblemSolving,
    #[serde(rename = "GROW")]
    #[strum(serialize = "GROW")]
    Growth,
    #[serde(rename = "STRE")]
    #[strum(serialize = "STRE")]
    StressTolerance,
    #[serde(rename = "ADAP")]
    #[strum(serialize = "ADAP")]
    Adaptation,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::Communication,
        Dimension::Responsibility,
        Dimension::ProblemSolving,
        Dimension::Growth,
        Dimension::StressTolerance,
        Dimension::Adaptation,
    ];

    /// `ALL` 내에서의 고정 인덱스 (점수 벡터와 공유)
    pub fn index(self) -> usize {
        match self {
            Dimension::Communication => 0,
            Dimension::Responsibility => 1,
            Dimension::ProblemSolving => 2,
            Dimension::Growth => 3,
            Dimension::StressTolerance => 4,
            Dimension::Adaptation => 5,
        }
    }

    /// 결과 화면에 쓰는 한국어 라벨
    pub fn label_ko(self) -> &'static str {
        match self {
            Dimension::Communication => "커뮤니케이션·협업",
            Dimension::Responsibility => "책임감·성실성",
            Dimension::ProblemSolving => "문제해결·논리",
            Dimension::Growth => "성장지향·학습의지",
            Dimension::StressTolerance => "스트레스·정서안정",
            Dimension::Adaptation => "조직적응·대인관계",
        }
    }
}
