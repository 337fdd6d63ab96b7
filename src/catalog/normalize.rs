/// Normalizes a user-typed course identifier into a catalog key: trims,
/// uppercases, collapses whitespace, and joins a leading alphabetic
/// department pair ("ELEC ENG 2CI5" becomes "ELECENG 2CI5").
pub fn normalize_course_code(raw: &str) -> String {
    let upper = raw.trim().to_uppercase();
    let mut tokens: Vec<&str> = upper.split_whitespace().collect();

    if tokens.len() > 1 && is_alphabetic(tokens[0]) && is_alphabetic(tokens[1]) {
        let merged = format!("{}{}", tokens[0], tokens[1]);
        tokens.drain(..2);
        let mut joined = vec![merged];
        joined.extend(tokens.iter().map(|token| token.to_string()));
        return joined.join(" ");
    }

    tokens.join(" ")
}

fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_uppercases() {
        assert_eq!(normalize_course_code("  math 1a "), "MATH 1A");
    }

    #[test]
    fn merges_leading_department_pair() {
        assert_eq!(normalize_course_code("Elec Eng 2CI5"), "ELECENG 2CI5");
    }

    #[test]
    fn does_not_merge_when_second_token_has_digits() {
        assert_eq!(normalize_course_code("MATH 1A"), "MATH 1A");
    }

    #[test]
    fn collapses_interior_whitespace() {
        assert_eq!(normalize_course_code("math   1a   lab"), "MATH 1A LAB");
    }

    #[test]
    fn single_token_passes_through() {
        assert_eq!(normalize_course_code("math"), "MATH");
    }
}
