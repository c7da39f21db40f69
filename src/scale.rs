//! The canonical chromatic scale and its enharmonic aliases.
//!
//! Every pitch class has exactly one canonical spelling. Alternate spellings
//! are mapped onto it by `normalize` before any index lookup takes place.

/// The total number of pitch classes.
pub const PITCH_CLASS_COUNT: usize = 12;

/// Canonical spellings, indexed by semitones above `C`.
pub const CHROMATIC_SCALE: [&str; PITCH_CLASS_COUNT] = [
    "C", "C#", "D", "Eb", "E", "F", "F#", "G", "Ab", "A", "Bb", "B",
];

/// Alternate spellings and the canonical spelling they stand for.
pub const ENHARMONIC_ALIASES: [(&str, &str); 9] = [
    ("Cb", "B"),
    ("Db", "C#"),
    ("D#", "Eb"),
    ("Fb", "E"),
    ("E#", "F"),
    ("Gb", "F#"),
    ("G#", "Ab"),
    ("A#", "Bb"),
    ("B#", "C"),
];

/// Returns the canonical spelling of a root.
///
/// Input that is not an alias is returned as-is, whether or not it is a
/// member of the scale.
pub fn normalize(root: &str) -> &str {
    ENHARMONIC_ALIASES
        .iter()
        .find(|&&(alias, _)| alias == root)
        .map(|&(_, canonical)| canonical)
        .unwrap_or(root)
}

/// Index of a canonical spelling within `CHROMATIC_SCALE`.
pub fn position(name: &str) -> Option<usize> {
    CHROMATIC_SCALE.iter().position(|&n| n == name)
}

/// Pitch class of any recognized spelling, aliases included.
pub fn pitch_class(root: &str) -> Option<usize> {
    position(normalize(root))
}

/// Canonical spelling of the pitch class `index` semitones shifted by `steps`.
///
/// `steps` is reduced modulo 12 before the addition, so the arithmetic holds
/// for every `i32`.
pub fn shift(index: usize, steps: i32) -> &'static str {
    let count = PITCH_CLASS_COUNT as i32;
    let base = (index % PITCH_CLASS_COUNT) as i32;
    let shifted = (base + steps.rem_euclid(count)).rem_euclid(count);
    CHROMATIC_SCALE[shifted as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_has_no_duplicates() {
        for (i, a) in CHROMATIC_SCALE.iter().enumerate() {
            for b in &CHROMATIC_SCALE[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn aliases_target_the_scale() {
        for &(alias, canonical) in ENHARMONIC_ALIASES.iter() {
            assert!(position(canonical).is_some(), "{} -> {}", alias, canonical);
            assert!(position(alias).is_none(), "{} is canonical", alias);
        }
    }

    #[test]
    fn normalize_aliases() {
        assert_eq!(normalize("Db"), "C#");
        assert_eq!(normalize("D#"), "Eb");
        assert_eq!(normalize("Cb"), "B");
        assert_eq!(normalize("B#"), "C");
        assert_eq!(normalize("Gb"), "F#");
    }

    #[test]
    fn normalize_passes_through() {
        assert_eq!(normalize("F#"), "F#");
        assert_eq!(normalize("A"), "A");
        assert_eq!(normalize("H"), "H");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn pitch_class_lookup() {
        assert_eq!(pitch_class("C"), Some(0));
        assert_eq!(pitch_class("Fb"), Some(4));
        assert_eq!(pitch_class("E#"), Some(5));
        assert_eq!(pitch_class("Bb"), Some(10));
        assert_eq!(pitch_class("Cm"), None);
    }

    #[test]
    fn shift_extremes() {
        assert_eq!(shift(0, i32::MAX), CHROMATIC_SCALE[(i32::MAX % 12) as usize]);
        assert_eq!(shift(11, i32::MIN), CHROMATIC_SCALE[(11 + i32::MIN.rem_euclid(12) as usize) % 12]);
        assert_eq!(shift(3, -15), "C");
        assert_eq!(shift(3, 0), "Eb");
    }
}
