//! Page-behavior glue outside the carousel and form: mobile navigation,
//! the scroll-reactive header, reveal animations, lazy images, and the
//! staggered card entry delays.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use shared::{
    domain::{ElementId, LazyImage},
    render::{CssClass, RenderOp},
};

/// Collapsible mobile menu. The toggle button and the menu mirror each
/// other's `active` class.
pub struct MobileNav {
    toggle: ElementId,
    menu: ElementId,
    open: bool,
}

impl MobileNav {
    pub fn new(toggle: ElementId, menu: ElementId) -> Self {
        Self {
            toggle,
            menu,
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> Vec<RenderOp> {
        self.open = !self.open;
        let make = |target: &ElementId| {
            if self.open {
                RenderOp::AddClass {
                    target: target.clone(),
                    class: CssClass::Active,
                }
            } else {
                RenderOp::RemoveClass {
                    target: target.clone(),
                    class: CssClass::Active,
                }
            }
        };
        vec![make(&self.toggle), make(&self.menu)]
    }

    pub fn close(&mut self) -> Vec<RenderOp> {
        if !self.open {
            return Vec::new();
        }
        self.open = false;
        vec![
            RenderOp::RemoveClass {
                target: self.toggle.clone(),
                class: CssClass::Active,
            },
            RenderOp::RemoveClass {
                target: self.menu.clone(),
                class: CssClass::Active,
            },
        ]
    }

    /// A nav link was pressed: the menu closes and the viewport smooth-
    /// scrolls to the link's anchor target.
    pub fn link_pressed(&mut self, anchor: &ElementId) -> Vec<RenderOp> {
        let mut ops = self.close();
        ops.push(RenderOp::ScrollTo {
            target: anchor.clone(),
        });
        ops
    }
}

/// Adds `scrolled` to the navbar once the viewport moves past the
/// threshold, removes it when back at the top. Tracks the last state so
/// every scroll event does not re-emit the same op.
pub struct ScrollHeader {
    navbar: ElementId,
    threshold: f64,
    scrolled: bool,
}

impl ScrollHeader {
    pub fn new(navbar: ElementId, threshold: f64) -> Self {
        Self {
            navbar,
            threshold,
            scrolled: false,
        }
    }

    pub fn on_scroll(&mut self, offset_y: f64) -> Option<RenderOp> {
        let scrolled = offset_y > self.threshold;
        if scrolled == self.scrolled {
            return None;
        }
        self.scrolled = scrolled;
        Some(if scrolled {
            RenderOp::AddClass {
                target: self.navbar.clone(),
                class: CssClass::Scrolled,
            }
        } else {
            RenderOp::RemoveClass {
                target: self.navbar.clone(),
                class: CssClass::Scrolled,
            }
        })
    }
}

/// Scroll-triggered fade-in. Watched elements keep their observer after
/// revealing; re-adding the class is idempotent.
pub struct RevealAnimations {
    watched: HashSet<ElementId>,
}

impl RevealAnimations {
    pub fn new(watched: impl IntoIterator<Item = ElementId>) -> Self {
        Self {
            watched: watched.into_iter().collect(),
        }
    }

    pub fn on_visible(&self, element: &ElementId) -> Option<RenderOp> {
        self.watched.contains(element).then(|| RenderOp::AddClass {
            target: element.clone(),
            class: CssClass::FadeInUp,
        })
    }
}

/// Deferred image loading. Each placeholder is swapped exactly once; the
/// element is unobserved afterwards.
pub struct LazyImages {
    pending: HashMap<ElementId, String>,
}

impl LazyImages {
    pub fn new(images: &[LazyImage]) -> Self {
        Self {
            pending: images
                .iter()
                .map(|image| (image.element.clone(), image.source.clone()))
                .collect(),
        }
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn on_visible(&mut self, element: &ElementId) -> Vec<RenderOp> {
        let Some(source) = self.pending.remove(element) else {
            return Vec::new();
        };
        vec![
            RenderOp::SwapImageSource {
                target: element.clone(),
                source,
            },
            RenderOp::RemoveClass {
                target: element.clone(),
                class: CssClass::Lazy,
            },
            RenderOp::Unobserve {
                target: element.clone(),
            },
        ]
    }
}

/// Entry-animation stagger applied to card elements at page load: the
/// n-th card starts `n * step` after the first.
pub fn stagger_delays(cards: &[ElementId], step: Duration) -> Vec<RenderOp> {
    cards
        .iter()
        .enumerate()
        .map(|(index, card)| RenderOp::SetAnimationDelay {
            target: card.clone(),
            delay_ms: index as u64 * step.as_millis() as u64,
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/behaviors_tests.rs"]
mod tests;
