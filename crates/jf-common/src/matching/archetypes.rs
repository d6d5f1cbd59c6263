/// 분류기 학습에 쓰는 대표직업 아키타입
///
/// 점수 배열은 `Dimension::ALL` 순서(COMM, RESP, PROB, GROW, STRE, ADAP).
/// 합성 샘플은 이 평균 벡터에 가우시안 노이즈를 더해 만든다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Archetype {
    pub title: &'static str,
    pub scores: [f64; 6],
}

const fn archetype(title: &'static str, scores: [f64; 6]) -> Archetype {
    Archetype { title, scores }
}

/// 대표직업 40종의 수작업 프로파일
pub const ARCHETYPES: [Archetype; 40] = [
    archetype("연구원(R&D)", [3.0, 3.0, 5.0, 5.0, 3.0, 3.0]),
    archetype("데이터 분석가", [3.0, 3.0, 5.0, 4.0, 3.0, 3.0]),
    archetype("AI 개발·기획자", [3.0, 3.0, 5.0, 5.0, 3.0, 4.0]),
    archetype("기획/전략 담당자", [4.0, 4.0, 4.0, 4.0, 3.0, 3.0]),
    archetype("교육·교사", [4.0, 4.0, 3.0, 4.0, 3.0, 3.0]),
    archetype("상담사/심리상담사", [5.0, 4.0, 3.0, 4.0, 3.0, 3.0]),
    archetype("백엔드 개발자", [3.0, 3.0, 4.0, 4.0, 4.0, 3.0]),
    archetype("프론트엔드 개발자", [4.0, 3.0, 3.0, 4.0, 3.0, 4.0]),
    archetype("모바일 앱 개발자", [3.0, 3.0, 4.0, 4.0, 3.0, 4.0]),
    archetype("임베디드/시스템 엔지니어", [2.0, 4.0, 5.0, 3.0, 4.0, 2.0]),
    archetype("정보보안 전문가", [3.0, 4.0, 5.0, 3.0, 4.0, 3.0]),
    archetype("데이터 엔지니어", [3.0, 3.0, 4.0, 4.0, 3.0, 3.0]),
    archetype("QA/테스터", [3.0, 4.0, 3.0, 3.0, 3.0, 3.0]),
    archetype("기계 엔지니어", [3.0, 3.0, 4.0, 3.0, 3.0, 2.0]),
    archetype("전기/전자 엔지니어", [3.0, 3.0, 4.0, 3.0, 3.0, 3.0]),
    archetype("제조·품질관리(QC/QA)", [3.0, 4.0, 3.0, 3.0, 3.0, 2.0]),
    archetype("설계·CAD 엔지니어", [2.0, 4.0, 4.0, 3.0, 3.0, 2.0]),
    archetype("토목/건축 엔지니어", [3.0, 4.0, 4.0, 3.0, 3.0, 2.0]),
    archetype("공정/생산 엔지니어", [3.0, 4.0, 4.0, 3.0, 4.0, 2.0]),
    archetype("의사(전체)", [4.0, 5.0, 4.0, 4.0, 5.0, 3.0]),
    archetype("간호사", [4.0, 5.0, 3.0, 3.0, 5.0, 3.0]),
    archetype("치료사(물리·작업)", [4.0, 4.0, 3.0, 4.0, 3.0, 3.0]),
    archetype("임상병리사", [3.0, 4.0, 3.0, 3.0, 3.0, 2.0]),
    archetype("치위생/치과 직무", [3.0, 4.0, 3.0, 3.0, 3.0, 2.0]),
    archetype("약무/보건행정", [3.0, 4.0, 3.0, 3.0, 3.0, 3.0]),
    archetype("CS/고객응대", [4.0, 3.0, 2.0, 2.0, 3.0, 3.0]),
    archetype("영업·판매", [4.0, 3.0, 3.0, 3.0, 3.0, 3.0]),
    archetype("마케팅·홍보", [4.0, 3.0, 3.0, 4.0, 3.0, 4.0]),
    archetype("MD/상품기획", [4.0, 3.0, 3.0, 4.0, 3.0, 3.0]),
    archetype("서비스 기획자", [4.0, 3.0, 3.0, 4.0, 3.0, 4.0]),
    archetype("시각디자이너", [3.0, 2.0, 3.0, 4.0, 2.0, 3.0]),
    archetype("UX/UI 디자이너", [4.0, 2.0, 3.0, 4.0, 2.0, 4.0]),
    archetype("영상편집/콘텐츠", [3.0, 2.0, 3.0, 4.0, 2.0, 4.0]),
    archetype("게임 그래픽/일러스트", [3.0, 2.0, 3.0, 4.0, 2.0, 3.0]),
    archetype("기자·작가·출판", [4.0, 3.0, 4.0, 4.0, 3.0, 3.0]),
    archetype("행정·사무", [3.0, 4.0, 2.0, 2.0, 3.0, 2.0]),
    archetype("회계·재무", [3.0, 4.0, 4.0, 3.0, 3.0, 2.0]),
    archetype("인사·총무", [4.0, 4.0, 3.0, 3.0, 3.0, 3.0]),
    archetype("경찰·소방·교정", [3.0, 4.0, 3.0, 3.0, 5.0, 3.0]),
    archetype("군인", [2.0, 4.0, 3.0, 2.0, 5.0, 2.0]),
];
