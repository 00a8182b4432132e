//! Slice angle allocation for the category pie chart.
//!
//! Angles follow the mathematical convention: degrees, 0° pointing east,
//! increasing counter-clockwise. Slices are laid out contiguously from 0°.
//!
//! A category whose share of the total is below [`MIN_PERCENTAGE`] would be an
//! unreadable sliver, so it gets a fixed [`MIN_SEGMENT_ANGLE`] instead. The
//! remaining ("normal") categories split what is left of the circle in
//! proportion to their amounts relative to each other, which keeps their
//! relative sizes correct after the small slices have taken their budget.

use crate::error::ChartError;
use crate::model::CategorySlice;

/// Share below which a slice is drawn at the fixed minimum angle
pub const MIN_PERCENTAGE: f64 = 0.07;

/// Angle in degrees given to every small slice
pub const MIN_SEGMENT_ANGLE: f64 = 25.2;

pub const FULL_CIRCLE: f64 = 360.0;

/// Draw geometry for one slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceGeometry {
    /// Start angle in degrees
    pub start_angle: f64,
    /// Angular extent in degrees
    pub span_angle: f64,
    /// Rank of the category, used to pick its palette color
    pub color_index: usize,
    /// Signed share of the side total (amount / total)
    pub percentage: f64,
}

impl SliceGeometry {
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.span_angle
    }

    /// Angle halfway through the slice
    pub fn bisector(&self) -> f64 {
        self.start_angle + self.span_angle / 2.0
    }
}

/// How the circle was divided. Mostly useful for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationMode {
    /// Small slices fixed, normal slices share the rest
    MinimumAngle,
    /// Every slice was small; the circle is split evenly
    EqualSplit,
    /// Fixed small slices would fill the circle; everything is proportional
    Proportional,
}

/// Compute contiguous slice angles for ranked categories.
///
/// `slices` must already be ranked (see
/// [`SideAggregate::ranked_slices`](crate::model::SideAggregate::ranked_slices)):
/// the position in the input becomes the color index.
pub fn allocate(slices: &[CategorySlice]) -> Result<Vec<SliceGeometry>, ChartError> {
    allocate_with_mode(slices).map(|(geometry, _)| geometry)
}

/// Same as [`allocate`], also reporting which allocation rule applied.
pub fn allocate_with_mode(
    slices: &[CategorySlice],
) -> Result<(Vec<SliceGeometry>, AllocationMode), ChartError> {
    validate(slices)?;

    let small_count = slices.iter().filter(|s| is_small(s)).count();
    let fixed_budget = small_count as f64 * MIN_SEGMENT_ANGLE;
    let remaining_angle = FULL_CIRCLE - fixed_budget;
    let remaining_total: f64 = slices
        .iter()
        .filter(|s| !is_small(s))
        .map(|s| s.amount.abs())
        .sum();

    let (spans, mode): (Vec<f64>, AllocationMode) = if small_count == slices.len() {
        let even = FULL_CIRCLE / slices.len() as f64;
        (vec![even; slices.len()], AllocationMode::EqualSplit)
    } else if remaining_angle <= 0.0 {
        let grand_total: f64 = slices.iter().map(|s| s.amount.abs()).sum();
        (
            slices
                .iter()
                .map(|s| s.amount.abs() / grand_total * FULL_CIRCLE)
                .collect(),
            AllocationMode::Proportional,
        )
    } else {
        (
            slices
                .iter()
                .map(|s| {
                    if is_small(s) {
                        MIN_SEGMENT_ANGLE
                    } else {
                        s.amount.abs() / remaining_total * remaining_angle
                    }
                })
                .collect(),
            AllocationMode::MinimumAngle,
        )
    };

    let mut start_angle = 0.0;
    let geometry = slices
        .iter()
        .zip(spans)
        .enumerate()
        .map(|(color_index, (slice, span_angle))| {
            let geometry = SliceGeometry {
                start_angle,
                span_angle,
                color_index,
                percentage: slice.ratio(),
            };
            start_angle += span_angle;
            geometry
        })
        .collect();

    Ok((geometry, mode))
}

/// Whether the slice falls under the legibility threshold
pub fn is_small(slice: &CategorySlice) -> bool {
    slice.abs_ratio() < MIN_PERCENTAGE
}

fn validate(slices: &[CategorySlice]) -> Result<(), ChartError> {
    let first = slices.first().ok_or(ChartError::Empty)?;
    if !first.total.is_finite() {
        return Err(ChartError::NonFinite {
            category: first.name.clone(),
        });
    }
    if first.total == 0.0 {
        return Err(ChartError::ZeroTotal);
    }
    if let Some(bad) = slices
        .iter()
        .find(|s| !s.amount.is_finite() || !s.total.is_finite())
    {
        return Err(ChartError::NonFinite {
            category: bad.name.clone(),
        });
    }
    if slices.iter().any(|s| s.total == 0.0) {
        return Err(ChartError::ZeroTotal);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn slices(entries: &[(&str, f64)], total: f64) -> Vec<CategorySlice> {
        entries
            .iter()
            .map(|(name, amount)| CategorySlice {
                name: name.to_string(),
                amount: *amount,
                total,
            })
            .collect()
    }

    fn spans(geometry: &[SliceGeometry]) -> Vec<f64> {
        geometry.iter().map(|g| g.span_angle).collect()
    }

    #[test]
    fn test_proportional_slices_without_small_categories() {
        let input = slices(&[("A", -600.0), ("B", -300.0), ("C", -100.0)], -1000.0);
        let (geometry, mode) = allocate_with_mode(&input).unwrap();

        assert_eq!(mode, AllocationMode::MinimumAngle);
        let expected = [216.0, 108.0, 36.0];
        for (g, want) in geometry.iter().zip(expected) {
            assert!((g.span_angle - want).abs() < EPS, "{g:?} != {want}");
        }
        assert_eq!(geometry[0].start_angle, 0.0);
        assert!((geometry[1].start_angle - 216.0).abs() < EPS);
        assert!((geometry[2].start_angle - 324.0).abs() < EPS);
    }

    #[test]
    fn test_small_slice_gets_minimum_angle() {
        let input = slices(&[("A", -950.0), ("B", -50.0)], -1000.0);
        let geometry = allocate(&input).unwrap();

        assert_eq!(geometry[1].span_angle, MIN_SEGMENT_ANGLE);
        assert!((geometry[0].span_angle - 334.8).abs() < EPS);
        assert!((geometry[1].start_angle - 334.8).abs() < EPS);
    }

    #[test]
    fn test_normal_slices_renormalize_among_themselves() {
        // 0.6 / 0.35 / 0.05: the two normal slices keep their 60:35 ratio
        let input = slices(&[("A", 600.0), ("B", 350.0), ("C", 50.0)], 1000.0);
        let geometry = allocate(&input).unwrap();
        let ratio = geometry[0].span_angle / geometry[1].span_angle;
        assert!((ratio - 600.0 / 350.0).abs() < EPS);
        let total: f64 = spans(&geometry).iter().sum();
        assert!((total - FULL_CIRCLE).abs() < 1e-6);
    }

    #[test]
    fn test_percentage_is_signed_ratio() {
        let input = slices(&[("A", -600.0), ("B", -400.0)], -1000.0);
        let geometry = allocate(&input).unwrap();
        assert!((geometry[0].percentage - 0.6).abs() < EPS);
        assert!((geometry[1].percentage - 0.4).abs() < EPS);
    }

    #[test]
    fn test_color_index_follows_rank() {
        let input = slices(&[("A", 5.0), ("B", 4.0), ("C", 3.0), ("D", 2.0)], 14.0);
        let geometry = allocate(&input).unwrap();
        let indices: Vec<usize> = geometry.iter().map(|g| g.color_index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_all_small_falls_back_to_equal_split() {
        let entries: Vec<(String, f64)> = (0..20).map(|i| (format!("C{i}"), -5.0)).collect();
        let input: Vec<CategorySlice> = entries
            .iter()
            .map(|(n, a)| CategorySlice {
                name: n.clone(),
                amount: *a,
                total: -100.0,
            })
            .collect();
        let (geometry, mode) = allocate_with_mode(&input).unwrap();

        assert_eq!(mode, AllocationMode::EqualSplit);
        assert!(geometry.iter().all(|g| (g.span_angle - 18.0).abs() < EPS));
        let last = geometry.last().unwrap();
        assert!((last.end_angle() - FULL_CIRCLE).abs() < 1e-6);
    }

    #[test]
    fn test_overflowing_minimum_budget_falls_back_to_proportional() {
        // One 25% slice plus fifteen 5% slices: 15 * 25.2 > 360
        let mut entries = vec![("Big".to_string(), 25.0)];
        entries.extend((0..15).map(|i| (format!("S{i}"), 5.0)));
        let input: Vec<CategorySlice> = entries
            .iter()
            .map(|(n, a)| CategorySlice {
                name: n.clone(),
                amount: *a,
                total: 100.0,
            })
            .collect();
        let (geometry, mode) = allocate_with_mode(&input).unwrap();

        assert_eq!(mode, AllocationMode::Proportional);
        assert!((geometry[0].span_angle - 90.0).abs() < EPS);
        assert!((geometry[1].span_angle - 18.0).abs() < EPS);
        let total: f64 = spans(&geometry).iter().sum();
        assert!((total - FULL_CIRCLE).abs() < 1e-6);
    }

    #[test]
    fn test_single_category_fills_circle() {
        let input = slices(&[("Only", -42.0)], -42.0);
        let geometry = allocate(&input).unwrap();
        assert!((geometry[0].span_angle - FULL_CIRCLE).abs() < EPS);
    }

    #[test]
    fn test_rejects_empty_and_zero_total() {
        assert_eq!(allocate(&[]), Err(ChartError::Empty));
        let input = slices(&[("A", 10.0)], 0.0);
        assert_eq!(allocate(&input), Err(ChartError::ZeroTotal));
    }

    #[test]
    fn test_rejects_non_finite_amounts() {
        let input = slices(&[("A", 10.0), ("B", f64::NAN)], 10.0);
        assert_eq!(
            allocate(&input),
            Err(ChartError::NonFinite {
                category: "B".into()
            })
        );
    }

    #[test]
    fn test_allocation_is_deterministic() {
        let input = slices(&[("A", -700.0), ("B", -200.0), ("C", -60.0), ("D", -40.0)], -1000.0);
        assert_eq!(allocate(&input).unwrap(), allocate(&input).unwrap());
    }
}
