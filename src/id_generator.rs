use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

// Single static counter for all shapes
static NEXT_SHAPE_ID: AtomicUsize = AtomicUsize::new(1);

/// Identity of a shape instance. Two structurally equal shapes still have different ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(usize);

impl ShapeId {
    pub fn generate() -> Self {
        Self(NEXT_SHAPE_ID.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
