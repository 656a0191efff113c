/// Rejected widget configuration.
///
/// Returned by [`crate::RingProgress::configure`] and everything routed through
/// it. The widget keeps its previous configuration when one of these is
/// returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("radius must be a positive finite value, got {0}")]
    NonPositiveRadius(f32),
    #[error("stroke width must be a positive finite value, got {0}")]
    NonPositiveStrokeWidth(f32),
    #[error("text size must be a positive finite value, got {0}")]
    NonPositiveTextSize(f32),
    #[error("max progress must be positive, got {0}")]
    NonPositiveMaxProgress(i32),
    #[error("current progress cannot be negative, got {0}")]
    NegativeProgress(i32),
    #[error("padding must be a non-negative finite value, got {0}")]
    InvalidPadding(f32),
    #[error("attribute `{name}` has invalid value `{value}`")]
    InvalidAttribute { name: String, value: String },
}

/// Out-of-range state that is drawn anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DegenerateState {
    #[error("current progress {current} exceeds max progress {max}, sweep clamped to a full ring")]
    ProgressExceedsMax { current: i32, max: i32 },
}
