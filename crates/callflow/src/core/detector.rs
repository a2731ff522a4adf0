//! Core detector trait for diagram kind identification
//!
//! Detectors recognise a diagram family from the embedded diagram source so
//! later stages can decide what extra processing applies.

/// Core trait for diagram kind detectors
///
/// # Example
/// ```
/// use callflow::core::Detector;
/// use callflow::plugins::mermaid::FlowchartDetector;
///
/// let detector = FlowchartDetector::new();
/// assert!(detector.detect("graph TD\n    A --> B"));
/// ```
pub trait Detector: Send + Sync {
    /// Detect if the input matches this diagram kind
    fn detect(&self, input: &str) -> bool;

    /// Get the confidence level of the detection (0.0 to 1.0)
    fn confidence(&self, input: &str) -> f64;

    /// Get the diagram kind name
    fn diagram_type(&self) -> &'static str;

    /// Get key patterns that this detector looks for
    fn patterns(&self) -> Vec<&'static str>;
}
