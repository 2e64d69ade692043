//! Ascending sort of exactly three numbers.

/// Sort three values in place with a fixed three-comparison network.
///
/// Inputs are expected to be finite; [`crate::input::parse_number`] never
/// produces NaN.
pub fn sort_in_place(v: &mut [f64; 3]) {
    if v[0] > v[1] {
        v.swap(0, 1);
    }
    if v[1] > v[2] {
        v.swap(1, 2);
    }
    if v[0] > v[1] {
        v.swap(0, 1);
    }
}

pub fn sort_triple(mut v: [f64; 3]) -> [f64; 3] {
    sort_in_place(&mut v);
    v
}

pub fn format_triple(v: &[f64; 3]) -> String {
    v.iter()
        .map(|x| x.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
