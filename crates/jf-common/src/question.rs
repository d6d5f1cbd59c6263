use once_cell::sync::Lazy;

use crate::dimension::Dimension;

/// 문항이 집계되는 축: 6개 역량 중 하나, 또는 타당도(주의/과장) 문항
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemScale {
    Scored(Dimension),
    Validity,
}

/// 검사 문항 1개
///
/// 문항 구성은 정적 설정이다. 기본 뱅크는 40문항이지만 엔진은
/// "6개 역량마다 최소 1문항"만 지키면 임의 개수를 받는다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// 1부터 시작하는 문항 번호 (뱅크 내 유일)
    pub number: u16,
    pub text: String,
    pub scale: ItemScale,
    /// 역코딩 문항 여부 (응답 v를 6-v로 뒤집어 집계)
    pub is_reverse: bool,
}

impl Question {
    pub fn scored(number: u16, dimension: Dimension, text: &str) -> Self {
        Self {
            number,
            text: text.to_string(),
            scale: ItemScale::Scored(dimension),
            is_reverse: false,
        }
    }

    pub fn scored_reverse(number: u16, dimension: Dimension, text: &str) -> Self {
        Self {
            is_reverse: true,
            ..Self::scored(number, dimension, text)
        }
    }

    pub fn validity(number: u16, text: &str) -> Self {
        Self {
            number,
            text: text.to_string(),
            scale: ItemScale::Validity,
            is_reverse: false,
        }
    }
}

/// 기본 40문항 뱅크: 역량별 6문항 + 타당도 4문항
///
/// 타당도 문항은 역코딩/역량 평균 어디에도 들어가지 않고
/// 원값 그대로 주의력·과장 판정에만 쓰인다.
pub static DEFAULT_QUESTION_BANK: Lazy<Vec<Question>> = Lazy::new(|| {
    use Dimension::*;

    vec![
        Question::scored(1, Communication, "나는 처음 만난 사람과도 쉽게 대화를 시작한다."),
        Question::scored(2, Communication, "팀으로 일할 때 내 의견을 명확하게 전달하는 편이다."),
        Question::scored_reverse(3, Communication, "여러 사람 앞에서 말해야 하는 상황을 되도록 피한다."),
        Question::scored(4, Communication, "동료의 이야기를 끝까지 듣고 나서 내 생각을 말한다."),
        Question::scored(5, Communication, "갈등이 생기면 대화로 풀어가려고 노력한다."),
        Question::scored_reverse(6, Communication, "협업보다는 혼자 일할 때 성과가 더 좋다."),
        Question::validity(7, "나는 지금까지 한 번도 거짓말을 한 적이 없다."),
        Question::scored(8, Responsibility, "맡은 일은 기한 안에 반드시 끝낸다."),
        Question::scored(9, Responsibility, "사소한 일이라도 꼼꼼하게 확인하는 편이다."),
        Question::scored_reverse(10, Responsibility, "일이 많아지면 마감 약속을 미루는 경우가 있다."),
        Question::scored(11, Responsibility, "한 번 시작한 일은 끝까지 해낸다."),
        Question::scored(12, Responsibility, "내 실수는 변명하지 않고 인정한다."),
        Question::scored_reverse(13, Responsibility, "세부 사항 확인은 귀찮아서 건너뛸 때가 있다."),
        Question::validity(14, "나는 지금까지 한 번도 약속을 어긴 적이 없다."),
        Question::scored(15, ProblemSolving, "문제가 생기면 원인을 먼저 분석한다."),
        Question::scored(16, ProblemSolving, "복잡한 문제를 작은 단위로 나누어 접근한다."),
        Question::scored_reverse(17, ProblemSolving, "논리적으로 따지는 일은 나와 맞지 않는다."),
        Question::scored(18, ProblemSolving, "결정을 내리기 전에 여러 대안을 비교한다."),
        Question::scored(19, ProblemSolving, "데이터나 근거를 바탕으로 판단하려고 한다."),
        Question::scored(20, ProblemSolving, "예상치 못한 문제가 생겨도 해결 방법을 찾아낸다."),
        Question::validity(21, "나는 다른 사람에게 화를 낸 적이 단 한 번도 없다."),
        Question::scored(22, Growth, "새로운 지식이나 기술을 배우는 것이 즐겁다."),
        Question::scored(23, Growth, "더 나은 방법이 있는지 스스로 찾아보는 편이다."),
        Question::scored_reverse(24, Growth, "익숙한 방식이 있으면 굳이 새로운 것을 배우지 않는다."),
        Question::scored(25, Growth, "피드백을 받으면 개선하려고 노력한다."),
        Question::scored(26, Growth, "장기적인 성장 목표를 세우고 관리한다."),
        Question::scored_reverse(27, Growth, "자기계발에 시간을 쓰는 것은 아깝다고 느낀다."),
        Question::validity(28, "나는 모든 사람에게 언제나 친절하게 대한다."),
        Question::scored(29, StressTolerance, "압박이 심한 상황에서도 평정심을 유지한다."),
        Question::scored(30, StressTolerance, "급한 일이 겹쳐도 우선순위를 정해 차분히 처리한다."),
        Question::scored_reverse(31, StressTolerance, "예상 밖의 일이 생기면 쉽게 당황한다."),
        Question::scored(32, StressTolerance, "실패해도 감정에 오래 휘둘리지 않는다."),
        Question::scored(33, StressTolerance, "긴장되는 상황에서도 해야 할 일에 집중할 수 있다."),
        Question::scored_reverse(34, StressTolerance, "스트레스를 받으면 일에 집중하기 어렵다."),
        Question::scored(35, Adaptation, "새로운 환경에 빠르게 적응하는 편이다."),
        Question::scored(36, Adaptation, "다양한 성향의 사람들과 무리 없이 지낸다."),
        Question::scored_reverse(37, Adaptation, "업무 방식이 바뀌면 불편해서 예전 방식을 고집한다."),
        Question::scored(38, Adaptation, "조직의 규칙과 분위기를 빨리 파악한다."),
        Question::scored(39, Adaptation, "변화가 생기면 긍정적인 면을 먼저 본다."),
        Question::scored_reverse(40, Adaptation, "낯선 조직에 들어가면 적응하는 데 오래 걸린다."),
    ]
});

pub fn default_question_bank() -> &'static [Question] {
    &DEFAULT_QUESTION_BANK
}
