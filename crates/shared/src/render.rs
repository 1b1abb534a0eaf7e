use serde::{Deserialize, Serialize};

use crate::domain::ElementId;

/// Presentation states the behaviors toggle. The stylesheet owns what each
/// one looks like; the engine only flips them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CssClass {
    Active,
    Scrolled,
    Error,
    FadeInUp,
    Lazy,
}

impl CssClass {
    pub fn as_str(self) -> &'static str {
        match self {
            CssClass::Active => "active",
            CssClass::Scrolled => "scrolled",
            CssClass::Error => "error",
            CssClass::FadeInUp => "fade-in-up",
            CssClass::Lazy => "lazy",
        }
    }
}

/// A single presentation mutation requested by the page controller and
/// applied by the document. Rendering proper happens outside the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RenderOp {
    AddClass { target: ElementId, class: CssClass },
    RemoveClass { target: ElementId, class: CssClass },
    SetText { target: ElementId, text: String },
    SetValue { target: ElementId, value: String },
    SetDisabled { target: ElementId, disabled: bool },
    SwapImageSource { target: ElementId, source: String },
    SetAnimationDelay { target: ElementId, delay_ms: u64 },
    ScrollTo { target: ElementId },
    Announce { message: String },
    Unobserve { target: ElementId },
}
