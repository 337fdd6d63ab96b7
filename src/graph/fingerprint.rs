use crate::catalog::{BranchKind, BranchSpec};

/// Placeholder for a branch with no course list at all. Distinct from an
/// explicit empty list: "no courses listed" and "unspecified" are different
/// source states and must not collide.
const ABSENT_COURSES: &str = "{1}";
/// Placeholder for a branch with no sub-branch list at all.
const ABSENT_SUBBRANCHES: &str = "{2}";

/// How sub-branch content is folded into the fingerprint key.
///
/// `Hashed` replaces the serialized sub-branch list with a 32-bit digest,
/// keeping keys small at the cost of a bounded non-zero collision
/// probability: two structurally different branches may be merged. This is
/// an accepted limitation of the mode, not corrected here. `Exact` keeps
/// the raw serialization and is collision-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FingerprintMode {
    #[default]
    Hashed,
    Exact,
}

impl FingerprintMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "hashed" => Some(FingerprintMode::Hashed),
            "exact" => Some(FingerprintMode::Exact),
            _ => None,
        }
    }
}

/// Computes the structural identity key for a logic branch: kind plus the
/// serialized content of its course and sub-branch lists. Two branches with
/// equal kind and equal list content always produce the same key, wherever
/// they appear in the prerequisite forest.
pub fn fingerprint(
    kind: BranchKind,
    courses: Option<&[String]>,
    subbranches: Option<&[BranchSpec]>,
    mode: FingerprintMode,
) -> serde_json::Result<String> {
    let course_part = match courses {
        Some(list) => list.join(","),
        None => ABSENT_COURSES.to_string(),
    };

    let subbranch_raw = match subbranches {
        Some(list) => serde_json::to_string(list)?,
        None => ABSENT_SUBBRANCHES.to_string(),
    };
    let subbranch_part = match mode {
        FingerprintMode::Hashed => digest32(&subbranch_raw).to_string(),
        FingerprintMode::Exact => subbranch_raw,
    };

    Ok(format!(
        "[{}]_[{}]_[{}]",
        kind.as_str(),
        course_part,
        subbranch_part
    ))
}

/// 32-bit rolling hash (h = 31*h + c) over the serialized sub-branch list.
fn digest32(value: &str) -> i32 {
    let mut hash: i32 = 0;
    for c in value.chars() {
        hash = hash.wrapping_mul(31).wrapping_add(c as i32);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branch(kind: BranchKind, courses: &[&str]) -> BranchSpec {
        BranchSpec {
            kind,
            courses: Some(courses.iter().map(|s| s.to_string()).collect()),
            subbranches: None,
        }
    }

    #[test]
    fn equal_shapes_produce_equal_keys() {
        let courses = vec!["MATH 1A".to_string(), "MATH 1B".to_string()];
        for mode in [FingerprintMode::Hashed, FingerprintMode::Exact] {
            let a = fingerprint(BranchKind::And, Some(&courses), None, mode).unwrap();
            let b = fingerprint(BranchKind::And, Some(&courses), None, mode).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn kind_distinguishes_keys() {
        let courses = vec!["MATH 1A".to_string()];
        let and = fingerprint(BranchKind::And, Some(&courses), None, FingerprintMode::Exact);
        let or = fingerprint(BranchKind::Or, Some(&courses), None, FingerprintMode::Exact);
        assert_ne!(and.unwrap(), or.unwrap());
    }

    #[test]
    fn absent_lists_differ_from_empty_lists() {
        let empty: Vec<String> = Vec::new();
        let absent =
            fingerprint(BranchKind::And, None, None, FingerprintMode::Exact).unwrap();
        let explicit =
            fingerprint(BranchKind::And, Some(&empty), None, FingerprintMode::Exact).unwrap();
        assert_ne!(absent, explicit);

        let no_subs =
            fingerprint(BranchKind::Or, None, None, FingerprintMode::Exact).unwrap();
        let empty_subs =
            fingerprint(BranchKind::Or, None, Some(&[]), FingerprintMode::Exact).unwrap();
        assert_ne!(no_subs, empty_subs);
    }

    #[test]
    fn course_order_is_significant() {
        let ab = vec!["A".to_string(), "B".to_string()];
        let ba = vec!["B".to_string(), "A".to_string()];
        let first =
            fingerprint(BranchKind::And, Some(&ab), None, FingerprintMode::Exact).unwrap();
        let second =
            fingerprint(BranchKind::And, Some(&ba), None, FingerprintMode::Exact).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn nested_subbranches_affect_both_modes() {
        let subs_a = vec![branch(BranchKind::Or, &["A", "B"])];
        let subs_b = vec![branch(BranchKind::Or, &["A", "C"])];
        for mode in [FingerprintMode::Hashed, FingerprintMode::Exact] {
            let a = fingerprint(BranchKind::And, None, Some(&subs_a), mode).unwrap();
            let b = fingerprint(BranchKind::And, None, Some(&subs_b), mode).unwrap();
            assert_ne!(a, b, "mode {mode:?} should see nested content");
        }
    }

    #[test]
    fn hashed_mode_uses_fixed_size_digest() {
        let subs = vec![branch(BranchKind::Or, &["A", "B", "C", "D", "E", "F"])];
        let hashed =
            fingerprint(BranchKind::And, None, Some(&subs), FingerprintMode::Hashed).unwrap();
        let exact =
            fingerprint(BranchKind::And, None, Some(&subs), FingerprintMode::Exact).unwrap();
        assert_ne!(hashed, exact);
        assert!(hashed.len() < exact.len());
    }
}
