use crate::Span;

/// Report every two pairs whose spans cross (`i < k < j < l`). Nested and
/// disjoint pairs are never reported. Each crossing is reported once, in
/// input order of the first pair.
pub fn detect_pseudoknots<P: Span + Clone>(pairs: &[P]) -> Vec<(P, P)> {
    let mut crossings = Vec::new();
    for (n, a) in pairs.iter().enumerate() {
        for b in &pairs[n + 1..] {
            if a.crosses(b) {
                crossings.push((a.clone(), b.clone()));
            }
        }
    }
    crossings
}

/// True if no two pairs cross.
pub fn is_pseudoknot_free<P: Span>(pairs: &[P]) -> bool {
    pairs.iter().enumerate()
        .all(|(n, a)| pairs[n + 1..].iter().all(|b| !a.crosses(b)))
}
