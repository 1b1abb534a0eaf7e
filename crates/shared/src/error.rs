use thiserror::Error;

use crate::domain::ElementId;

/// Startup precondition failures. The page layout is fixed, so a missing
/// or malformed element means the engine cannot run at all; these are
/// surfaced once at binding time and never during event handling.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("required element '{0}' is missing from the page")]
    MissingElement(ElementId),
    #[error("duplicate element id '{0}' in the page definition")]
    DuplicateElement(ElementId),
    #[error("gallery has no slides")]
    EmptySlideSet,
    #[error("gallery has {slides} slides but {indicators} indicators")]
    IndicatorMismatch { slides: usize, indicators: usize },
    #[error("element '{0}' has no placeholder source to swap")]
    MissingPlaceholder(ElementId),
}
