use std::cmp::Ordering;

/// Jaro-Winkler similarity in `[0, 1]` over chars.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn jaro_winkler(a: &str, b: &str) -> f32 {
    if a == b {
        return 1.0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let window = (a.len().max(b.len()) / 2).saturating_sub(1);
    let mut a_matched = vec![false; a.len()];
    let mut b_matched = vec![false; b.len()];
    let mut matches = 0_usize;

    for (i, a_char) in a.iter().enumerate() {
        let start = i.saturating_sub(window);
        let end = (i + window + 1).min(b.len());
        for j in start..end {
            if !b_matched[j] && *a_char == b[j] {
                a_matched[i] = true;
                b_matched[j] = true;
                matches += 1;
                break;
            }
        }
    }

    if matches == 0 {
        return 0.0;
    }

    let a_order = a.iter().zip(&a_matched).filter(|(_, hit)| **hit);
    let b_order = b.iter().zip(&b_matched).filter(|(_, hit)| **hit);
    let transpositions = a_order
        .zip(b_order)
        .filter(|((x, _), (y, _))| x != y)
        .count();

    let m = matches as f32;
    let jaro =
        (m / a.len() as f32 + m / b.len() as f32 + (m - transpositions as f32 / 2.0) / m) / 3.0;

    let prefix = a
        .iter()
        .zip(&b)
        .take(4)
        .take_while(|(x, y)| x == y)
        .count() as f32;

    jaro + prefix * 0.1 * (1.0 - jaro)
}

/// The candidate whose key is most similar to `target`.
pub fn closest<T, I, F>(target: &str, candidates: I, key: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> String,
{
    candidates
        .into_iter()
        .map(|candidate| (jaro_winkler(target, &key(&candidate)), candidate))
        .max_by(|(x, _), (y, _)| x.partial_cmp(y).unwrap_or(Ordering::Less))
        .map(|(_, candidate)| candidate)
}
