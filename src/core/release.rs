//! Release classification
//!
//! Infers whether a change list looks like a major or minor release and
//! synthesizes a cosmetic version label for it.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Keywords that signal large-scope changes regardless of bullet count
const MAJOR_KEYWORDS: &[&str] = &[
    "new mechanic",
    "new boss",
    "new map",
    "new mode",
    "new character",
    "new weapon",
    "overhaul",
    "rework",
    "revamp",
    "redesign",
    "expansion",
    "season",
    "battle pass",
    "leaderboard",
    "progression system",
];

/// Bullet count at or above which a release counts as major
/// even without a scope keyword
const MAJOR_BULLET_THRESHOLD: usize = 6;

/// Major/minor classification of an update's perceived scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseType {
    Major,
    Minor,
}

impl ReleaseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseType::Major => "major",
            ReleaseType::Minor => "minor",
        }
    }
}

impl std::fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify a change list as a major or minor release.
///
/// Precedence: a scope keyword anywhere in the joined bullet text wins,
/// then the bullet-count threshold, otherwise minor.
pub fn infer_release_type(bullets: &[String]) -> ReleaseType {
    let joined = bullets.join(" ").to_lowercase();

    if MAJOR_KEYWORDS.iter().any(|kw| joined.contains(kw)) {
        return ReleaseType::Major;
    }
    if bullets.len() >= MAJOR_BULLET_THRESHOLD {
        return ReleaseType::Major;
    }
    ReleaseType::Minor
}

/// Synthesize a cosmetic version label for the release type.
///
/// Major releases get "{major}.0", minor releases "{major}.{minor}" with a
/// non-zero minor. The numbers are random and no state is tracked across
/// calls, so identical inputs can yield different labels.
pub fn synthesize_version(release_type: ReleaseType) -> String {
    let mut rng = rand::thread_rng();
    let major: u32 = rng.gen_range(1..=5);

    match release_type {
        ReleaseType::Major => format!("{}.0", major),
        ReleaseType::Minor => {
            let minor: u32 = rng.gen_range(1..=9);
            format!("{}.{}", major, minor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bullets(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_keyword_forces_major() {
        let b = bullets(&["Added a new boss to the crypt"]);
        assert_eq!(infer_release_type(&b), ReleaseType::Major);
    }

    #[test]
    fn test_keyword_is_case_insensitive() {
        let b = bullets(&["Complete UI OVERHAUL"]);
        assert_eq!(infer_release_type(&b), ReleaseType::Major);
    }

    #[test]
    fn test_count_threshold_forces_major() {
        let b = bullets(&["a", "b", "c", "d", "e", "f", "g"]);
        assert_eq!(infer_release_type(&b), ReleaseType::Major);
    }

    #[test]
    fn test_exactly_six_bullets_is_major() {
        let b = bullets(&["a", "b", "c", "d", "e", "f"]);
        assert_eq!(infer_release_type(&b), ReleaseType::Major);
    }

    #[test]
    fn test_few_plain_bullets_are_minor() {
        let b = bullets(&["Fixed a crash", "Tuned drop rates", "Updated icons"]);
        assert_eq!(infer_release_type(&b), ReleaseType::Minor);
    }

    #[test]
    fn test_empty_list_is_minor() {
        assert_eq!(infer_release_type(&[]), ReleaseType::Minor);
    }

    #[test]
    fn test_major_version_shape() {
        for _ in 0..50 {
            let v = synthesize_version(ReleaseType::Major);
            let (major, minor) = v.split_once('.').expect("dotted version");
            let major: u32 = major.parse().expect("numeric major");
            assert!((1..=5).contains(&major));
            assert_eq!(minor, "0");
        }
    }

    #[test]
    fn test_minor_version_shape() {
        for _ in 0..50 {
            let v = synthesize_version(ReleaseType::Minor);
            let (major, minor) = v.split_once('.').expect("dotted version");
            let major: u32 = major.parse().expect("numeric major");
            let minor: u32 = minor.parse().expect("numeric minor");
            assert!((1..=5).contains(&major));
            assert!((1..=9).contains(&minor));
        }
    }

    #[test]
    fn test_release_type_display() {
        assert_eq!(ReleaseType::Major.to_string(), "major");
        assert_eq!(ReleaseType::Minor.to_string(), "minor");
    }
}
