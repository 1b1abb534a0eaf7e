use serde::{Deserialize, Serialize};

/// Identity of one named element on the fixed page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl FieldId {
    pub const ALL: [FieldId; 5] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Subject,
        FieldId::Message,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Subject => "subject",
            FieldId::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

/// Resolved handles for every interactive element the page behaviors need.
/// Built once at startup from the page definition; a missing element there
/// is a fatal precondition, so once this struct exists every id is valid.
#[derive(Debug, Clone)]
pub struct PageBindings {
    pub menu_toggle: ElementId,
    pub nav_menu: ElementId,
    pub navbar: ElementId,
    pub slides: Vec<ElementId>,
    pub indicators: Vec<ElementId>,
    pub prev_control: ElementId,
    pub next_control: ElementId,
    pub form: ElementId,
    pub submit_control: ElementId,
    pub submit_label: String,
    pub fields: Vec<FieldBinding>,
    pub reveal: Vec<ElementId>,
    pub cards: Vec<ElementId>,
    pub lazy_images: Vec<LazyImage>,
}

/// Input element, its error-message holder, and the form group whose
/// `error` class marks the field as invalid.
#[derive(Debug, Clone)]
pub struct FieldBinding {
    pub field: FieldId,
    pub input: ElementId,
    pub error_holder: ElementId,
    pub group: ElementId,
}

/// Image element still showing its placeholder, plus the real source to
/// swap in once the element becomes visible.
#[derive(Debug, Clone)]
pub struct LazyImage {
    pub element: ElementId,
    pub source: String,
}
