use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::SortError;

/// Source of uniformly distributed pivot offsets.
///
/// `len` is always at least 1 and the returned offset must lie in `0..len`.
/// Every [`Rng`] is an offset source.
pub trait OffsetSource {
    fn next_offset(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> OffsetSource for R {
    #[inline]
    fn next_offset(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Where the pivot is taken from inside the sub-range being partitioned.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum PivotMode {
    First,
    Middle,
    #[default]
    Random,
}

impl PivotMode {
    pub const ALL: [PivotMode; 3] = [PivotMode::First, PivotMode::Middle, PivotMode::Random];

    pub fn name(self) -> &'static str {
        match self {
            PivotMode::First => "first",
            PivotMode::Middle => "middle",
            PivotMode::Random => "random",
        }
    }

    /// Pivot offset relative to the start of a sub-range of `len` elements.
    ///
    /// `Random` draws a fresh offset from `source` on every call; the other
    /// modes never touch it.
    pub fn offset<S: OffsetSource + ?Sized>(
        self,
        len: usize,
        source: &mut S,
    ) -> Result<usize, SortError> {
        if len == 0 {
            return Err(SortError::EmptySequence);
        }

        let offset = match self {
            PivotMode::First => 0,
            PivotMode::Middle => len / 2,
            PivotMode::Random => source.next_offset(len),
        };

        if offset >= len {
            return Err(SortError::OffsetOutOfRange { offset, len });
        }
        Ok(offset)
    }
}

pub fn all_pivot_modes() -> &'static [PivotMode] {
    &PivotMode::ALL
}

impl fmt::Display for PivotMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PivotMode {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        PivotMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SortError::UnknownPivotMode(trimmed.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    struct Fixed(usize);

    impl OffsetSource for Fixed {
        fn next_offset(&mut self, _len: usize) -> usize {
            self.0
        }
    }

    #[test]
    fn deterministic_offsets() {
        let mut source = Fixed(0);
        let cases = [
            (1_usize, 0_usize, 0_usize),
            (2, 0, 1),
            (5, 0, 2),
            (6, 0, 3),
            (1024, 0, 512),
        ];

        for (len, first, middle) in cases {
            assert_eq!(PivotMode::First.offset(len, &mut source), Ok(first));
            assert_eq!(PivotMode::Middle.offset(len, &mut source), Ok(middle));
        }
    }

    #[test]
    fn random_offsets_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for len in 1..64_usize {
            for _ in 0..32 {
                let offset = PivotMode::Random.offset(len, &mut rng).unwrap();
                assert!(offset < len, "offset={offset} len={len}");
            }
        }
    }

    #[test]
    fn random_offsets_cover_the_range() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        let mut seen = HashSet::new();
        for _ in 0..512 {
            seen.insert(PivotMode::Random.offset(8, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn only_random_consults_the_source() {
        let mut source = Fixed(usize::MAX);
        assert_eq!(PivotMode::First.offset(4, &mut source), Ok(0));
        assert_eq!(PivotMode::Middle.offset(4, &mut source), Ok(2));
        assert_eq!(
            PivotMode::Random.offset(4, &mut source),
            Err(SortError::OffsetOutOfRange {
                offset: usize::MAX,
                len: 4,
            })
        );
    }

    #[test]
    fn empty_range_is_rejected() {
        let mut source = Fixed(0);
        for &mode in all_pivot_modes() {
            assert_eq!(mode.offset(0, &mut source), Err(SortError::EmptySequence));
        }
    }

    #[test]
    fn default_mode_is_random() {
        assert_eq!(PivotMode::default(), PivotMode::Random);
    }

    #[test]
    fn names_round_trip_through_parse() {
        let mut seen = HashSet::new();
        for &mode in all_pivot_modes() {
            assert!(seen.insert(mode.name()));
            assert_eq!(mode.to_string().parse::<PivotMode>(), Ok(mode));
        }
        assert_eq!(" MIDDLE ".parse::<PivotMode>(), Ok(PivotMode::Middle));
        assert_eq!("Random".parse::<PivotMode>(), Ok(PivotMode::Random));
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert_eq!(
            "median3".parse::<PivotMode>(),
            Err(SortError::UnknownPivotMode("median3".to_owned()))
        );
        assert_eq!(
            "".parse::<PivotMode>(),
            Err(SortError::UnknownPivotMode(String::new()))
        );
    }
}
