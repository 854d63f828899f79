//! Patient-space geometry derived from image orientation.

use std::fmt;

/// The anatomical direction along which slices were acquired.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SliceDirection {
    /// The orientation is missing or malformed.
    Unknown,
    /// Slices stack along the patient X axis (left-right).
    Sagittal,
    /// Slices stack along the patient Y axis (anterior-posterior).
    Coronal,
    /// Slices stack along the patient Z axis (feet-head).
    Axial,
    /// No patient axis dominates the slice normal.
    Oblique,
}

impl SliceDirection {
    /// The index of the patient axis of this direction, if any.
    pub fn axis(self) -> Option<usize> {
        match self {
            SliceDirection::Sagittal => Some(0),
            SliceDirection::Coronal => Some(1),
            SliceDirection::Axial => Some(2),
            SliceDirection::Unknown | SliceDirection::Oblique => None,
        }
    }
}

impl fmt::Display for SliceDirection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            SliceDirection::Unknown => "unknown",
            SliceDirection::Sagittal => "sagittal",
            SliceDirection::Coronal => "coronal",
            SliceDirection::Axial => "axial",
            SliceDirection::Oblique => "oblique",
        };
        f.write_str(name)
    }
}

/// The minimum share of the slice normal on a single axis
/// for the slices to be attributed to that axis.
pub const MAJOR_AXIS_THRESHOLD: f64 = 0.8;

/// The normal of the image plane,
/// the cross product of the row and column direction cosines.
pub fn slice_normal(dir_cos: &[f64; 6]) -> [f64; 3] {
    let (r, c) = (&dir_cos[0..3], &dir_cos[3..6]);
    [
        r[1] * c[2] - r[2] * c[1],
        r[2] * c[0] - r[0] * c[2],
        r[0] * c[1] - r[1] * c[0],
    ]
}

/// Determine the slice direction from the row and column direction cosines.
pub fn slice_direction(dir_cos: &[f64; 6]) -> SliceDirection {
    let normal = slice_normal(dir_cos);
    let (axis, magnitude) = normal
        .iter()
        .map(|v| v.abs())
        .enumerate()
        .fold((0, 0.), |best, (i, v)| if v > best.1 { (i, v) } else { best });
    if magnitude < MAJOR_AXIS_THRESHOLD {
        return SliceDirection::Oblique;
    }
    match axis {
        0 => SliceDirection::Sagittal,
        1 => SliceDirection::Coronal,
        _ => SliceDirection::Axial,
    }
}

fn major_index(values: &[f64]) -> usize {
    values
        .iter()
        .enumerate()
        .fold((0, 0.), |best, (i, v)| {
            if v.abs() > best.1 {
                (i, v.abs())
            } else {
                best
            }
        })
        .0
}

/// Describe the orientation of an image
/// as the patient axes of its rows, columns and slices
/// followed by the sense of each one,
/// such as `XYZ--+` for a regular axial image.
///
/// The first three characters name the dominant patient axis
/// of the row direction, the column direction and the slice normal.
/// A `+` sense means the axis increases along the image,
/// once rows and columns are mapped to radiological convention.
pub fn orientation_string(dir_cos: &[f64; 6]) -> String {
    let big_row = major_index(&dir_cos[0..3]);
    let big_col = 3 + major_index(&dir_cos[3..6]);

    let mut orient = String::with_capacity(6);
    orient.push_str(match (big_row, big_col) {
        (0, 4) => "XYZ",
        (0, _) => "XZY",
        (1, 3) => "YXZ",
        (1, _) => "YZX",
        (_, 3) => "ZXY",
        _ => "ZYX",
    });
    // X and Y increase towards the left and posterior sides,
    // Z towards the head
    let sense = |index: usize, value: f64| match (index % 3, value > 0.) {
        (2, true) | (0 | 1, false) => '+',
        _ => '-',
    };
    orient.push(sense(big_row, dir_cos[big_row]));
    orient.push(sense(big_col, dir_cos[big_col]));
    orient.push('+');
    orient
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const AXIAL: [f64; 6] = [1., 0., 0., 0., 1., 0.];
    const CORONAL: [f64; 6] = [1., 0., 0., 0., 0., -1.];
    const SAGITTAL: [f64; 6] = [0., 1., 0., 0., 0., -1.];

    #[rstest]
    #[case(AXIAL, SliceDirection::Axial)]
    #[case(CORONAL, SliceDirection::Coronal)]
    #[case(SAGITTAL, SliceDirection::Sagittal)]
    #[case([1., 0., 0., 0., 0.70710678, 0.70710678], SliceDirection::Oblique)]
    #[case([0.99, 0.1, 0., -0.1, 0.99, 0.], SliceDirection::Axial)]
    fn slice_directions(#[case] dir_cos: [f64; 6], #[case] expected: SliceDirection) {
        assert_eq!(slice_direction(&dir_cos), expected);
    }

    #[rstest]
    #[case(AXIAL, "XYZ--+")]
    #[case(CORONAL, "XZY--+")]
    #[case(SAGITTAL, "YZX--+")]
    #[case([-1., 0., 0., 0., -1., 0.], "XYZ+++")]
    fn orientation_strings(#[case] dir_cos: [f64; 6], #[case] expected: &str) {
        assert_eq!(orientation_string(&dir_cos), expected);
    }

    #[test]
    fn axes() {
        assert_eq!(SliceDirection::Axial.axis(), Some(2));
        assert_eq!(SliceDirection::Oblique.axis(), None);
        assert_eq!(slice_normal(&AXIAL), [0., 0., 1.]);
    }
}
