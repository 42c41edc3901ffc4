/// Cosine similarity in `[-1, 1]`.
///
/// Returns `0.0` for empty or mismatched inputs and for zero-norm vectors; callers that
/// need to distinguish those cases check dimensions first.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let (dot, norm_a_sq, norm_b_sq) = a
        .iter()
        .zip(b.iter())
        .fold((0.0f32, 0.0f32, 0.0f32), |(dot, na, nb), (&av, &bv)| {
            (dot + av * bv, na + av * av, nb + bv * bv)
        });

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}
