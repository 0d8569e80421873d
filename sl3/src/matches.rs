use crate::PlanarPoint;

/// Source point to target point correspondence
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct PointMatch(pub PlanarPoint, pub PlanarPoint);
