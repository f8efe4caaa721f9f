#[rustfmt::skip]
pub const GLIDER_GUN: &[(i64, i64)] = &[
    // left block
    (0, 4), (0, 5), (1, 4), (1, 5),
    // left queen bee
    (10, 4), (10, 5), (10, 6), (11, 3), (11, 7), (12, 2), (12, 8), (13, 2), (13, 8),
    (14, 5), (15, 3), (15, 7), (16, 4), (16, 5), (16, 6), (17, 5),
    // right queen bee
    (20, 2), (20, 3), (20, 4), (21, 2), (21, 3), (21, 4), (22, 1), (22, 5),
    (24, 0), (24, 1), (24, 5), (24, 6),
    // right block
    (34, 2), (34, 3), (35, 2), (35, 3),
];

pub const BLINKER: &[(i64, i64)] = &[(0, 1), (1, 1), (2, 1)];

pub const BLOCK: &[(i64, i64)] = &[(0, 0), (0, 1), (1, 0), (1, 1)];

pub const GLIDER: &[(i64, i64)] = &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

pub const R_PENTOMINO: &[(i64, i64)] = &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)];

pub const PRESETS: &[(&str, &[(i64, i64)])] = &[
    ("Gosper glider gun", GLIDER_GUN),
    ("Blinker", BLINKER),
    ("Block", BLOCK),
    ("Glider", GLIDER),
    ("R-pentomino", R_PENTOMINO),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pattern;

    #[test]
    fn glider_gun_is_complete() {
        let gun = Pattern::from_offsets(GLIDER_GUN);
        assert_eq!(gun.len(), 36);
        let (lo, hi) = gun.bounding_box().unwrap();
        assert_eq!((lo.x, lo.y, hi.x, hi.y), (0, 0, 35, 8));
    }

    #[test]
    fn presets_are_distinct() {
        for (i, (name, offsets)) in PRESETS.iter().enumerate() {
            assert_eq!(Pattern::from_offsets(offsets).len(), offsets.len(), "{name}");
            assert!(PRESETS[i + 1..].iter().all(|(other, _)| other != name));
        }
    }
}
