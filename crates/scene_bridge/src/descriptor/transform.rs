//! Transform descriptor crossing the export boundary

use crate::descriptor::arrays::{BoundaryArray, FloatArray};

/// A flattened 4x4 transform matrix, ready to cross the boundary
///
/// The flattening convention is column-major: element `[row, col]` of the
/// matrix lands at index `col * 4 + row`. The buffer is not self-describing,
/// so this convention is part of the wire contract with the native side.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransformDescriptor {
    /// Sixteen floats, column-major
    pub matrix: FloatArray,
}

impl TransformDescriptor {
    /// Wire-layout view of this descriptor
    pub fn record(&self) -> TransformRecord<'_> {
        TransformRecord {
            matrix: self.matrix.as_boundary(),
        }
    }
}

/// Wire layout of a transform descriptor, matching the native side's
/// `TransformData` struct
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct TransformRecord<'a> {
    /// Sixteen floats, column-major
    pub matrix: BoundaryArray<'a, f32>,
}
