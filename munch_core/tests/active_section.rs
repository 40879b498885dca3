use munch_core::{
    ActiveSectionTracker, MenuState, MunchError, ScrollHandler, ScrollSource, ScrollSubscription,
    SectionDescriptor, SiteConfig, StaticLayout, TrackingConfig, resolve_active,
};
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::rc::Rc;

fn page_layout() -> StaticLayout {
    StaticLayout::new()
        .with("home", 0.0, 800.0)
        .with("about", 800.0, 600.0)
        .with("video", 1400.0, 2400.0)
        .with("features", 3800.0, 700.0)
        .with("diagrams", 4500.0, 1800.0)
}

fn bundled_tracker() -> ActiveSectionTracker {
    let site = SiteConfig::bundled().expect("bundled config");
    ActiveSectionTracker::new(site.nav, site.tracking).expect("tracker")
}

#[test]
fn scroll_into_about() {
    let mut tracker = bundled_tracker();
    let layout = StaticLayout::new()
        .with("home", 0.0, 800.0)
        .with("about", 800.0, 600.0);

    assert!(tracker.update(850.0, &layout));
    assert_eq!(tracker.active(), "about");
}

#[test]
fn top_of_page_is_home() {
    let mut tracker = bundled_tracker();
    let layout = page_layout();

    tracker.update(2000.0, &layout);
    assert_eq!(tracker.active(), "video");

    assert!(tracker.update(0.0, &layout));
    assert_eq!(tracker.active(), "home");
}

#[test]
fn walking_down_the_page_visits_sections_in_order() {
    let mut tracker = bundled_tracker();
    let layout = page_layout();

    let visited: Vec<String> = [0.0, 699.0, 700.0, 1300.0, 3700.0, 4400.0, 6000.0]
        .into_iter()
        .map(|y| {
            tracker.update(y, &layout);
            tracker.active().to_string()
        })
        .collect();

    assert_eq!(
        visited,
        vec!["home", "home", "about", "video", "features", "diagrams", "diagrams"]
    );
}

#[test]
fn no_match_keeps_previous_section() {
    let mut tracker = bundled_tracker();
    let layout = page_layout();

    tracker.update(4600.0, &layout);
    assert_eq!(tracker.active(), "diagrams");

    // Past the last section (the unlisted team block sits there).
    assert!(!tracker.update(9000.0, &layout));
    assert_eq!(tracker.active(), "diagrams");
}

#[test]
fn unmounted_sections_are_skipped() {
    let mut tracker = bundled_tracker();
    let partial = StaticLayout::new()
        .with("home", 0.0, 800.0)
        .with("features", 800.0, 600.0);

    assert!(tracker.update(900.0, &partial));
    assert_eq!(tracker.active(), "features");
}

#[test]
fn last_declared_match_wins_on_overlap() {
    let sections = vec![
        SectionDescriptor::new("home", "Home"),
        SectionDescriptor::new("about", "About"),
    ];
    let overlapping = StaticLayout::new()
        .with("home", 0.0, 2000.0)
        .with("about", 500.0, 300.0);

    assert_eq!(
        resolve_active(&sections, &overlapping, 450.0, &TrackingConfig::default()),
        Some("about")
    );
    assert_eq!(
        resolve_active(&sections, &overlapping, 1000.0, &TrackingConfig::default()),
        Some("home")
    );
}

#[test]
fn link_selection_closes_menu_from_any_state() {
    let mut menu = MenuState::default();
    for presses in 0..5 {
        for _ in 0..presses {
            menu = menu.toggled();
        }
        assert_eq!(menu.link_selected(), MenuState::Closed);
    }
}

/// Minimal window double: a list of live scroll handlers.
#[derive(Clone, Default)]
struct Window {
    handlers: Rc<RefCell<Vec<Option<Rc<dyn Fn(f64)>>>>>,
}

impl Window {
    fn scroll_to(&self, y: f64) {
        let live: Vec<_> = self.handlers.borrow().iter().flatten().cloned().collect();
        for handler in live {
            handler(y);
        }
    }
}

impl ScrollSource for Window {
    type Listener = usize;

    fn attach(&self, handler: ScrollHandler) -> Result<usize, MunchError> {
        let mut handlers = self.handlers.borrow_mut();
        handlers.push(Some(Rc::from(handler)));
        Ok(handlers.len() - 1)
    }

    fn detach(&self, listener: usize) {
        if let Some(slot) = self.handlers.borrow_mut().get_mut(listener) {
            *slot = None;
        }
    }
}

#[test]
fn unmount_stops_tracking() {
    let window = Window::default();
    let tracker = Rc::new(RefCell::new(bundled_tracker()));
    let changes = Rc::new(RefCell::new(Vec::new()));

    let subscription = {
        let tracker = tracker.clone();
        let changes = changes.clone();
        let layout = page_layout();
        ScrollSubscription::subscribe(window.clone(), move |y| {
            let mut tracker = tracker.borrow_mut();
            if tracker.update(y, &layout) {
                changes.borrow_mut().push(tracker.active().to_string());
            }
        })
        .expect("subscribe")
    };

    window.scroll_to(850.0);
    window.scroll_to(2000.0);
    assert_eq!(*changes.borrow(), vec!["about", "video"]);

    drop(subscription);

    window.scroll_to(4000.0);
    window.scroll_to(0.0);
    assert_eq!(*changes.borrow(), vec!["about", "video"]);
    assert_eq!(tracker.borrow().active(), "video");
}
