//! Reducer wiring every behavior to the viewport event stream. Each event
//! becomes a pure state transition plus render requests; the document and
//! the transport act on the result.

use std::time::Duration;

use shared::{
    domain::{Key, PageBindings},
    events::ViewportEvent,
    render::{CssClass, RenderOp},
};

use crate::behaviors::{stagger_delays, LazyImages, MobileNav, RevealAnimations, ScrollHeader};
use crate::form::{FormCoordinator, SubmissionState};
use crate::scheduler::Scheduler;
use crate::slider::{SlideController, SlideTransition};
use crate::transport::FormSubmission;

#[derive(Debug, Clone, Copy)]
pub struct PageConfig {
    pub autoplay_interval: Duration,
    pub scroll_threshold: f64,
    pub stagger_step: Duration,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            autoplay_interval: Duration::from_millis(5000),
            scroll_threshold: 50.0,
            stagger_step: Duration::from_millis(100),
        }
    }
}

/// Result of handling one event: render ops for the document, plus an
/// optional validated submission for the transport.
#[derive(Debug, Default)]
pub struct Update {
    pub ops: Vec<RenderOp>,
    pub submission: Option<FormSubmission>,
}

impl Update {
    fn ops(ops: Vec<RenderOp>) -> Self {
        Self {
            ops,
            submission: None,
        }
    }
}

pub struct PageController {
    bindings: PageBindings,
    nav: MobileNav,
    header: ScrollHeader,
    slider: SlideController,
    form: FormCoordinator,
    reveal: RevealAnimations,
    lazy: LazyImages,
    stagger_step: Duration,
}

impl PageController {
    pub fn new(bindings: PageBindings, config: PageConfig) -> Self {
        let nav = MobileNav::new(bindings.menu_toggle.clone(), bindings.nav_menu.clone());
        let header = ScrollHeader::new(bindings.navbar.clone(), config.scroll_threshold);
        let slider = SlideController::new(bindings.slides.len(), config.autoplay_interval);
        let form = FormCoordinator::new(
            bindings.fields.clone(),
            bindings.submit_control.clone(),
            bindings.submit_label.clone(),
        );
        let reveal = RevealAnimations::new(bindings.reveal.iter().cloned());
        let lazy = LazyImages::new(&bindings.lazy_images);
        Self {
            bindings,
            nav,
            header,
            slider,
            form,
            reveal,
            lazy,
            stagger_step: config.stagger_step,
        }
    }

    pub fn active_slide(&self) -> usize {
        self.slider.active()
    }

    pub fn submission_state(&self) -> SubmissionState {
        self.form.state()
    }

    pub fn handle(&mut self, event: ViewportEvent, scheduler: &dyn Scheduler) -> Update {
        match event {
            ViewportEvent::PageLoaded => {
                self.slider.start_autoplay(scheduler);
                Update::ops(stagger_delays(&self.bindings.cards, self.stagger_step))
            }
            ViewportEvent::MenuTogglePressed => Update::ops(self.nav.toggle()),
            ViewportEvent::NavLinkPressed { anchor } => Update::ops(self.nav.link_pressed(&anchor)),
            ViewportEvent::ScrollChanged { offset_y } => {
                Update::ops(self.header.on_scroll(offset_y).into_iter().collect())
            }
            ViewportEvent::KeyPressed { key } => match key {
                Key::ArrowLeft => {
                    let transition = self.slider.previous();
                    Update::ops(self.slide_ops(transition))
                }
                Key::ArrowRight => {
                    let transition = self.slider.next();
                    Update::ops(self.slide_ops(transition))
                }
                Key::Other => Update::default(),
            },
            ViewportEvent::SlidePrevPressed => {
                let transition = self.slider.previous();
                Update::ops(self.slide_ops(transition))
            }
            ViewportEvent::SlideNextPressed | ViewportEvent::AutoplayTick => {
                let transition = self.slider.next();
                Update::ops(self.slide_ops(transition))
            }
            ViewportEvent::IndicatorPressed { index } => {
                if index >= self.slider.slide_count() {
                    tracing::warn!(index, "indicator press outside slide range; ignoring");
                    return Update::default();
                }
                let transition = self.slider.go_to(index);
                Update::ops(self.slide_ops(transition))
            }
            ViewportEvent::PointerEnteredGallery => {
                self.slider.stop_autoplay();
                Update::default()
            }
            ViewportEvent::PointerLeftGallery => {
                self.slider.start_autoplay(scheduler);
                Update::default()
            }
            ViewportEvent::FieldEdited { field, value } => {
                Update::ops(self.form.on_field_input(field, value))
            }
            ViewportEvent::FieldBlurred { field } => Update::ops(self.form.on_field_blur(field)),
            ViewportEvent::SubmitPressed => {
                let (ops, submission) = self.form.on_submit();
                Update { ops, submission }
            }
            ViewportEvent::SubmissionCompleted => Update::ops(self.form.on_submission_complete()),
            ViewportEvent::ElementVisible { element } => {
                let mut ops: Vec<RenderOp> = self.reveal.on_visible(&element).into_iter().collect();
                ops.extend(self.lazy.on_visible(&element));
                Update::ops(ops)
            }
        }
    }

    /// Exactly one deactivation pair and one activation pair per change;
    /// never a clear-all sweep.
    fn slide_ops(&self, transition: SlideTransition) -> Vec<RenderOp> {
        vec![
            RenderOp::RemoveClass {
                target: self.bindings.slides[transition.previous].clone(),
                class: CssClass::Active,
            },
            RenderOp::RemoveClass {
                target: self.bindings.indicators[transition.previous].clone(),
                class: CssClass::Active,
            },
            RenderOp::AddClass {
                target: self.bindings.slides[transition.current].clone(),
                class: CssClass::Active,
            },
            RenderOp::AddClass {
                target: self.bindings.indicators[transition.current].clone(),
                class: CssClass::Active,
            },
        ]
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
