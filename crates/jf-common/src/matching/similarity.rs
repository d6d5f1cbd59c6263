use crate::DimensionScores;

/// 6차원 점수 벡터 간 유클리드 거리. 작을수록 유사하다.
pub fn euclidean_distance(a: &DimensionScores, b: &DimensionScores) -> f64 {
    a.to_array()
        .iter()
        .zip(b.to_array())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// 6차원 점수 벡터 간 코사인 유사도. 클수록 유사하다.
///
/// 어느 한쪽이라도 영벡터면 정확히 0.0을 돌려준다. 수학적으로 올바른
/// 유사도가 아니라 0 나눗셈을 피하는 경계 정책이며, 호환성을 위해 유지한다.
pub fn cosine_similarity(a: &DimensionScores, b: &DimensionScores) -> f64 {
    let (av, bv) = (a.to_array(), b.to_array());

    let dot: f64 = av.iter().zip(bv).map(|(x, y)| x * y).sum();
    let norm_a: f64 = av.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = bv.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}
