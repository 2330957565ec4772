//! Geometry predicates backed by the `geo` crate.

use geo::{EuclideanDistance, Relate};
use geo_types::Geometry;

use crate::op::OperationType;

/// A spatial relation between a member geometry and a constant geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpatialOp {
    Covers,
    Crosses,
    Touches,
    Overlaps,
    CoveredBy,
    Disjoint,
    Intersects,
    Within,
    IsWithinDistance,
}

impl SpatialOp {
    /// Maps a spatial operator; `None` for every other operator.
    pub fn from_operation(operation: OperationType) -> Option<Self> {
        Some(match operation {
            OperationType::Covers => SpatialOp::Covers,
            OperationType::Crosses => SpatialOp::Crosses,
            OperationType::Touches => SpatialOp::Touches,
            OperationType::Overlaps => SpatialOp::Overlaps,
            OperationType::CoveredBy => SpatialOp::CoveredBy,
            OperationType::Disjoint => SpatialOp::Disjoint,
            OperationType::Intersects => SpatialOp::Intersects,
            OperationType::Within => SpatialOp::Within,
            OperationType::IsWithinDistance => SpatialOp::IsWithinDistance,
            _ => return None,
        })
    }

    /// Method name used when rendering expressions.
    pub fn as_str(self) -> &'static str {
        match self {
            SpatialOp::Covers => "covers",
            SpatialOp::Crosses => "crosses",
            SpatialOp::Touches => "touches",
            SpatialOp::Overlaps => "overlaps",
            SpatialOp::CoveredBy => "covered_by",
            SpatialOp::Disjoint => "disjoint",
            SpatialOp::Intersects => "intersects",
            SpatialOp::Within => "within",
            SpatialOp::IsWithinDistance => "is_within_distance",
        }
    }

    /// Tests `subject <relation> other`.
    ///
    /// `distance` is only read by `IsWithinDistance`, which is false without
    /// one.
    pub fn test(self, subject: &Geometry<f64>, other: &Geometry<f64>, distance: Option<f64>) -> bool {
        if let SpatialOp::IsWithinDistance = self {
            return distance.is_some_and(|max| subject.euclidean_distance(other) <= max);
        }

        let matrix = subject.relate(other);
        match self {
            SpatialOp::Covers => matrix.is_covers(),
            SpatialOp::Crosses => matrix.is_crosses(),
            SpatialOp::Touches => matrix.is_touches(),
            SpatialOp::Overlaps => matrix.is_overlaps(),
            SpatialOp::CoveredBy => matrix.is_coveredby(),
            SpatialOp::Disjoint => matrix.is_disjoint(),
            SpatialOp::Intersects => matrix.is_intersects(),
            SpatialOp::Within => matrix.is_within(),
            SpatialOp::IsWithinDistance => false,
        }
    }
}

impl std::fmt::Display for SpatialOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
