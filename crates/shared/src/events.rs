use serde::{Deserialize, Serialize};

use crate::domain::{ElementId, FieldId, Key};

/// One notification from the viewport event source. Raw input (clicks,
/// key presses, scroll and visibility changes, timer fires) is translated
/// into these before it reaches the page controller; handlers run to
/// completion in queue order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewportEvent {
    PageLoaded,
    MenuTogglePressed,
    NavLinkPressed { anchor: ElementId },
    ScrollChanged { offset_y: f64 },
    KeyPressed { key: Key },
    SlidePrevPressed,
    SlideNextPressed,
    IndicatorPressed { index: usize },
    PointerEnteredGallery,
    PointerLeftGallery,
    AutoplayTick,
    FieldEdited { field: FieldId, value: String },
    FieldBlurred { field: FieldId },
    SubmitPressed,
    SubmissionCompleted,
    ElementVisible { element: ElementId },
}
