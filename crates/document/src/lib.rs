//! In-memory stand-in for the page the behaviors run against: element
//! state, render-op application, and startup binding resolution.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use shared::{
    domain::{ElementId, FieldBinding, FieldId, LazyImage, PageBindings},
    error::PageError,
    render::{CssClass, RenderOp},
};

/// Declarative description of the fixed page, loaded from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageDefinition {
    pub elements: Vec<ElementDef>,
    pub menu_toggle: ElementId,
    pub nav_menu: ElementId,
    pub navbar: ElementId,
    pub slides: Vec<ElementId>,
    pub indicators: Vec<ElementId>,
    pub prev_control: ElementId,
    pub next_control: ElementId,
    pub form: ElementId,
    pub submit_control: ElementId,
    pub fields: Vec<FieldDef>,
    #[serde(default)]
    pub reveal: Vec<ElementId>,
    #[serde(default)]
    pub cards: Vec<ElementId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementDef {
    pub id: ElementId,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default)]
    pub data_src: Option<String>,
    #[serde(default)]
    pub disabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDef {
    pub field: FieldId,
    pub input: ElementId,
    pub error_holder: ElementId,
    pub group: ElementId,
}

impl PageDefinition {
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

/// Mutable state of one page element.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Element {
    pub classes: BTreeSet<String>,
    pub text: String,
    pub value: String,
    pub src: Option<String>,
    pub data_src: Option<String>,
    pub disabled: bool,
    pub animation_delay_ms: Option<u64>,
}

/// The page itself. Applies render ops and records the side channels the
/// engine cannot express as element state (scroll requests, announcements,
/// unobserve requests).
#[derive(Debug, Default)]
pub struct Document {
    elements: HashMap<ElementId, Element>,
    scrolled_to: Vec<ElementId>,
    announcements: Vec<String>,
    unobserved: Vec<ElementId>,
}

impl Document {
    pub fn from_definition(definition: &PageDefinition) -> Result<Self, PageError> {
        let mut elements = HashMap::new();
        for def in &definition.elements {
            let element = Element {
                classes: def.classes.iter().cloned().collect(),
                text: def.text.clone(),
                value: String::new(),
                src: def.src.clone(),
                data_src: def.data_src.clone(),
                disabled: def.disabled,
                animation_delay_ms: None,
            };
            if elements.insert(def.id.clone(), element).is_some() {
                return Err(PageError::DuplicateElement(def.id.clone()));
            }
        }
        Ok(Self {
            elements,
            ..Self::default()
        })
    }

    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn has_class(&self, id: &ElementId, class: CssClass) -> bool {
        self.elements
            .get(id)
            .is_some_and(|element| element.classes.contains(class.as_str()))
    }

    pub fn text(&self, id: &ElementId) -> &str {
        self.elements.get(id).map_or("", |element| &element.text)
    }

    pub fn value(&self, id: &ElementId) -> &str {
        self.elements.get(id).map_or("", |element| &element.value)
    }

    pub fn scrolled_to(&self) -> &[ElementId] {
        &self.scrolled_to
    }

    pub fn announcements(&self) -> &[String] {
        &self.announcements
    }

    pub fn unobserved(&self) -> &[ElementId] {
        &self.unobserved
    }

    pub fn apply(&mut self, op: &RenderOp) -> Result<(), PageError> {
        match op {
            RenderOp::AddClass { target, class } => {
                self.element_mut(target)?
                    .classes
                    .insert(class.as_str().to_string());
            }
            RenderOp::RemoveClass { target, class } => {
                self.element_mut(target)?.classes.remove(class.as_str());
            }
            RenderOp::SetText { target, text } => {
                self.element_mut(target)?.text = text.clone();
            }
            RenderOp::SetValue { target, value } => {
                self.element_mut(target)?.value = value.clone();
            }
            RenderOp::SetDisabled { target, disabled } => {
                self.element_mut(target)?.disabled = *disabled;
            }
            RenderOp::SwapImageSource { target, source } => {
                let element = self.element_mut(target)?;
                if element.data_src.is_none() {
                    return Err(PageError::MissingPlaceholder(target.clone()));
                }
                element.src = Some(source.clone());
                element.data_src = None;
            }
            RenderOp::SetAnimationDelay { target, delay_ms } => {
                self.element_mut(target)?.animation_delay_ms = Some(*delay_ms);
            }
            RenderOp::ScrollTo { target } => {
                // Smooth scrolling itself belongs to the viewport.
                self.require(target)?;
                self.scrolled_to.push(target.clone());
            }
            RenderOp::Announce { message } => {
                self.announcements.push(message.clone());
            }
            RenderOp::Unobserve { target } => {
                self.require(target)?;
                self.unobserved.push(target.clone());
            }
        }
        Ok(())
    }

    pub fn apply_all(&mut self, ops: &[RenderOp]) -> Result<(), PageError> {
        for op in ops {
            self.apply(op)?;
        }
        Ok(())
    }

    fn element_mut(&mut self, id: &ElementId) -> Result<&mut Element, PageError> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| PageError::MissingElement(id.clone()))
    }

    fn require(&self, id: &ElementId) -> Result<(), PageError> {
        if self.elements.contains_key(id) {
            Ok(())
        } else {
            Err(PageError::MissingElement(id.clone()))
        }
    }
}

/// Resolves every element the behaviors depend on. The page cannot work
/// with any of them missing, so this is the single place that failure is
/// allowed to surface.
pub fn resolve_bindings(
    definition: &PageDefinition,
    document: &Document,
) -> Result<PageBindings, PageError> {
    let require = |id: &ElementId| -> Result<ElementId, PageError> {
        document.require(id)?;
        Ok(id.clone())
    };

    if definition.slides.is_empty() {
        return Err(PageError::EmptySlideSet);
    }
    if definition.slides.len() != definition.indicators.len() {
        return Err(PageError::IndicatorMismatch {
            slides: definition.slides.len(),
            indicators: definition.indicators.len(),
        });
    }

    let mut slides = Vec::with_capacity(definition.slides.len());
    for id in &definition.slides {
        slides.push(require(id)?);
    }
    let mut indicators = Vec::with_capacity(definition.indicators.len());
    for id in &definition.indicators {
        indicators.push(require(id)?);
    }

    let mut fields = Vec::with_capacity(FieldId::ALL.len());
    for field in FieldId::ALL {
        let def = definition
            .fields
            .iter()
            .find(|def| def.field == field)
            .ok_or_else(|| PageError::MissingElement(ElementId::new(field.as_str())))?;
        fields.push(FieldBinding {
            field,
            input: require(&def.input)?,
            error_holder: require(&def.error_holder)?,
            group: require(&def.group)?,
        });
    }

    let mut reveal = Vec::with_capacity(definition.reveal.len());
    for id in &definition.reveal {
        reveal.push(require(id)?);
    }
    let mut cards = Vec::with_capacity(definition.cards.len());
    for id in &definition.cards {
        cards.push(require(id)?);
    }

    let lazy_images = definition
        .elements
        .iter()
        .filter_map(|def| {
            def.data_src.as_ref().map(|source| LazyImage {
                element: def.id.clone(),
                source: source.clone(),
            })
        })
        .collect();

    let submit_control = require(&definition.submit_control)?;
    let submit_label = document.text(&submit_control).to_string();

    Ok(PageBindings {
        menu_toggle: require(&definition.menu_toggle)?,
        nav_menu: require(&definition.nav_menu)?,
        navbar: require(&definition.navbar)?,
        slides,
        indicators,
        prev_control: require(&definition.prev_control)?,
        next_control: require(&definition.next_control)?,
        form: require(&definition.form)?,
        submit_control,
        submit_label,
        fields,
        reveal,
        cards,
        lazy_images,
    })
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
