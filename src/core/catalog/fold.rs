/// Case-insensitive comparison key. Only letter case is folded; no other normalization happens.
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    fold_case(a) == fold_case(b)
}
