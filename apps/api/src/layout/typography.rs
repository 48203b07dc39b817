//! Rendering parameter table keyed by `(DensityClass, FitLevel)`.
//!
//! Expanded content always takes the most generous row so short resumes still
//! fill the page. Within a density class each step up in fit level tightens
//! every dimension; compact rows never exceed the normal rows for the same fit
//! level.

use serde::{Deserialize, Serialize};

use crate::layout::density::DensityClass;
use crate::layout::lines::FitLevel;

/// Font sizes and spacing handed to the document renderer. Sizes in points,
/// `line_height` as a multiplier of the body font size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    pub body_font_pt: f32,
    pub name_font_pt: f32,
    pub section_heading_pt: f32,
    pub contact_font_pt: f32,
    pub line_height: f32,
    pub section_gap_pt: f32,
    pub entry_gap_pt: f32,
    pub bullet_gap_pt: f32,
    pub page_padding_pt: f32,
}

impl Typography {
    /// Every size and spacing dimension, in declaration order.
    #[cfg(test)]
    pub fn dimensions(&self) -> [f32; 9] {
        [
            self.body_font_pt,
            self.name_font_pt,
            self.section_heading_pt,
            self.contact_font_pt,
            self.line_height,
            self.section_gap_pt,
            self.entry_gap_pt,
            self.bullet_gap_pt,
            self.page_padding_pt,
        ]
    }

    /// True when no dimension of `self` exceeds the matching one in `other`.
    #[cfg(test)]
    pub fn fits_within(&self, other: &Typography) -> bool {
        self.dimensions()
            .iter()
            .zip(other.dimensions().iter())
            .all(|(a, b)| a <= b)
    }
}

const GENEROUS: Typography = Typography {
    body_font_pt: 11.0,
    name_font_pt: 24.0,
    section_heading_pt: 13.0,
    contact_font_pt: 10.5,
    line_height: 1.45,
    section_gap_pt: 14.0,
    entry_gap_pt: 10.0,
    bullet_gap_pt: 3.0,
    page_padding_pt: 48.0,
};

const BASELINE: Typography = Typography {
    body_font_pt: 10.5,
    name_font_pt: 22.0,
    section_heading_pt: 12.0,
    contact_font_pt: 10.0,
    line_height: 1.35,
    section_gap_pt: 12.0,
    entry_gap_pt: 8.0,
    bullet_gap_pt: 2.0,
    page_padding_pt: 40.0,
};

const SNUG: Typography = Typography {
    body_font_pt: 10.0,
    name_font_pt: 20.0,
    section_heading_pt: 11.5,
    contact_font_pt: 9.5,
    line_height: 1.3,
    section_gap_pt: 10.0,
    entry_gap_pt: 6.0,
    bullet_gap_pt: 1.5,
    page_padding_pt: 36.0,
};

const TIGHT: Typography = Typography {
    body_font_pt: 9.5,
    name_font_pt: 19.0,
    section_heading_pt: 11.0,
    contact_font_pt: 9.0,
    line_height: 1.25,
    section_gap_pt: 8.0,
    entry_gap_pt: 5.0,
    bullet_gap_pt: 1.0,
    page_padding_pt: 32.0,
};

const TIGHTEST: Typography = Typography {
    body_font_pt: 9.0,
    name_font_pt: 18.0,
    section_heading_pt: 10.5,
    contact_font_pt: 8.5,
    line_height: 1.2,
    section_gap_pt: 6.0,
    entry_gap_pt: 4.0,
    bullet_gap_pt: 0.5,
    page_padding_pt: 28.0,
};

/// Looks up the parameter row for a density class and fit level.
pub fn typography_for(density: DensityClass, fit: FitLevel) -> Typography {
    match (density, fit) {
        (DensityClass::Expanded, _) => GENEROUS,
        (DensityClass::Normal, FitLevel::Comfortable) => BASELINE,
        (DensityClass::Normal, FitLevel::Tight) => SNUG,
        (DensityClass::Normal, FitLevel::Dense) => TIGHT,
        (DensityClass::Compact, FitLevel::Comfortable) => SNUG,
        (DensityClass::Compact, FitLevel::Tight) => TIGHT,
        (DensityClass::Compact, FitLevel::Dense) => TIGHTEST,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DENSITIES: [DensityClass; 3] = [
        DensityClass::Compact,
        DensityClass::Normal,
        DensityClass::Expanded,
    ];
    const LEVELS: [FitLevel; 3] = [FitLevel::Comfortable, FitLevel::Tight, FitLevel::Dense];

    #[test]
    fn test_higher_fit_level_never_grows_any_dimension() {
        for density in DENSITIES {
            for pair in LEVELS.windows(2) {
                let looser = typography_for(density, pair[0]);
                let tighter = typography_for(density, pair[1]);
                assert!(
                    tighter.fits_within(&looser),
                    "{density:?}: {:?} grew a dimension over {:?}",
                    pair[1],
                    pair[0]
                );
            }
        }
    }

    #[test]
    fn test_expanded_never_smaller_than_compact() {
        for fit in LEVELS {
            let compact = typography_for(DensityClass::Compact, fit);
            let normal = typography_for(DensityClass::Normal, fit);
            let expanded = typography_for(DensityClass::Expanded, fit);
            assert!(compact.fits_within(&expanded), "fit {fit:?}");
            assert!(compact.fits_within(&normal), "fit {fit:?}");
            assert!(normal.fits_within(&expanded), "fit {fit:?}");
        }
    }

    #[test]
    fn test_expanded_ignores_fit_level() {
        let first = typography_for(DensityClass::Expanded, FitLevel::Comfortable);
        for fit in LEVELS {
            assert_eq!(typography_for(DensityClass::Expanded, fit), first);
        }
    }

    #[test]
    fn test_compact_dense_is_smallest_row() {
        let smallest = typography_for(DensityClass::Compact, FitLevel::Dense);
        for density in DENSITIES {
            for fit in LEVELS {
                assert!(smallest.fits_within(&typography_for(density, fit)));
            }
        }
    }

    #[test]
    fn test_normal_comfortable_is_baseline() {
        let row = typography_for(DensityClass::Normal, FitLevel::Comfortable);
        assert_eq!(row.body_font_pt, 10.5);
        assert_eq!(row.page_padding_pt, 40.0);
    }
}
