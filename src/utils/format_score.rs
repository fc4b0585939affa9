use crate::types::SimilarityScore;

/// Renders a score with a fixed number of decimal places.
///
/// Rounding is half-up on the shortest decimal representation of the score, so `0.575`
/// becomes `"0.58"` even though its binary value sits slightly below the half.
pub fn format_score(score: SimilarityScore, precision: usize) -> String {
    if !score.is_finite() {
        return format!("{:.*}", precision, score);
    }

    // `Display` for f64 prints the shortest round-tripping digits, never an exponent
    let shortest = format!("{}", score.abs());
    let (whole, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().take(precision))
        .map(|b| b - b'0')
        .collect();
    digits.resize(whole.len() + precision, 0);

    let round_up = fraction
        .as_bytes()
        .get(precision)
        .map_or(false, |&b| b >= b'5');

    let mut whole_len = whole.len();
    if round_up && !increment_digits(&mut digits) {
        digits.insert(0, 1);
        whole_len += 1;
    }

    let mut rendered = String::with_capacity(digits.len() + 2);
    if score < 0.0 && digits.iter().any(|&d| d != 0) {
        rendered.push('-');
    }
    for (i, d) in digits.iter().enumerate() {
        if i == whole_len {
            rendered.push('.');
        }
        rendered.push((b'0' + d) as char);
    }

    rendered
}

/// Adds one to the last digit, carrying leftwards. Returns `false` if the carry ran off
/// the front.
fn increment_digits(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return true;
        }
    }

    false
}
