/// Diff suppressor for attributes whose value is case-insensitive.
///
/// Returns `true` when `old` and `new` differ only in case, meaning the
/// change should not be planned. Strings are compared one character at a
/// time under simple case folding, so a character never matches a
/// multi-character sequence (`"ß"` does not equal `"ss"`), while the Greek
/// final sigma and the other alternate lowercase forms fold together.
pub fn ignore_case(old: &str, new: &str) -> bool {
    old == new || old.chars().map(simple_fold).eq(new.chars().map(simple_fold))
}

/// Folds `c` to a single canonical character.
fn simple_fold(c: char) -> char {
    match c {
        'ς' => 'σ',
        'ſ' => 's',
        '\u{345}' | '\u{1FBE}' => 'ι',
        'ϐ' => 'β',
        'ϑ' => 'θ',
        'ϕ' => 'φ',
        'ϖ' => 'π',
        'ϰ' => 'κ',
        'ϱ' => 'ρ',
        'ϵ' => 'ε',
        'ẛ' => 'ṡ',
        _ => {
            let mut lower = c.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(folded), None) => folded,
                _ => c,
            }
        }
    }
}
