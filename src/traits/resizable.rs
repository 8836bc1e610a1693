//! Capability trait for views that cache layout measurements.

/// A view that must re-measure when its container may have changed size.
///
/// The resize coordinator only knows this trait; it never looks at a concrete
/// chart type.
pub trait Resizable: Send {
    /// Invalidate cached measurements so the next render re-measures.
    fn resize(&mut self);
}
