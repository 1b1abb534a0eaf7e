use super::*;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct FakeScheduler {
    created: AtomicUsize,
    live: Arc<AtomicUsize>,
}

impl FakeScheduler {
    fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    fn live(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}

impl Scheduler for FakeScheduler {
    fn repeat(&self, _every: Duration, _event: ViewportEvent) -> TaskHandle {
        self.created.fetch_add(1, Ordering::SeqCst);
        self.live.fetch_add(1, Ordering::SeqCst);
        let live = Arc::clone(&self.live);
        TaskHandle::from_fn(move || {
            live.fetch_sub(1, Ordering::SeqCst);
        })
    }
}

fn controller(count: usize) -> SlideController {
    SlideController::new(count, Duration::from_millis(5000))
}

#[test]
fn index_tracks_net_displacement_modulo_count() {
    let count = 4;
    let mut slider = controller(count);
    let steps: [i64; 12] = [1, 1, -1, 1, -1, -1, -1, 1, 1, 1, 1, -1];
    let mut net: i64 = 0;
    for step in steps {
        let transition = if step > 0 {
            slider.next()
        } else {
            slider.previous()
        };
        net += step;
        let expected = net.rem_euclid(count as i64) as usize;
        assert_eq!(slider.active(), expected);
        assert_eq!(transition.current, expected);
        assert!(slider.active() < count);
    }
}

#[test]
fn go_to_lands_on_every_valid_index() {
    let mut slider = controller(5);
    for index in 0..5 {
        let transition = slider.go_to(index);
        assert_eq!(transition.current, index);
        assert_eq!(slider.active(), index);
    }
}

#[test]
fn single_slide_gallery_wraps_onto_itself() {
    let mut slider = controller(1);
    let forward = slider.next();
    assert_eq!((forward.previous, forward.current), (0, 0));
    let backward = slider.previous();
    assert_eq!((backward.previous, backward.current), (0, 0));
    assert_eq!(slider.active(), 0);
}

#[test]
fn transition_reports_previous_and_current() {
    let mut slider = controller(3);
    let transition = slider.next();
    assert_eq!((transition.previous, transition.current), (0, 1));
    let transition = slider.previous();
    assert_eq!((transition.previous, transition.current), (1, 0));
    let transition = slider.previous();
    assert_eq!((transition.previous, transition.current), (0, 2));
}

#[test]
fn starting_autoplay_twice_leaves_exactly_one_live_timer() {
    let scheduler = FakeScheduler::default();
    let mut slider = controller(3);

    slider.start_autoplay(&scheduler);
    slider.start_autoplay(&scheduler);

    assert_eq!(scheduler.created(), 2);
    assert_eq!(scheduler.live(), 1);
    assert!(slider.autoplay_running());
}

#[test]
fn stop_autoplay_cancels_and_is_noop_when_idle() {
    let scheduler = FakeScheduler::default();
    let mut slider = controller(3);

    slider.stop_autoplay();
    assert!(!slider.autoplay_running());

    slider.start_autoplay(&scheduler);
    assert!(slider.autoplay_running());
    slider.stop_autoplay();
    assert_eq!(scheduler.live(), 0);
    assert!(!slider.autoplay_running());

    slider.stop_autoplay();
    assert_eq!(scheduler.live(), 0);
}
