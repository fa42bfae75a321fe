//! Integration tests for host-driven repositioning
//!
//! A simulated page stands in for the browser: it owns element rects,
//! listener registrations and a frame queue. Scrolling moves the trigger,
//! and the recompute callback re-measures and re-places the menu.

use geometry::{Rect, Side, Viewport};
use positioning::{compute_position, FloatingKind, PlacementResult};
use repositioner::{
    FrameHandle, LayoutHost, ListenerId, Repositioner, RepositionerConfig, RepositionerState,
    Trigger,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Page {
    rects: HashMap<u32, Rect>,
    viewport: Viewport,
    placements: Vec<PlacementResult>,
}

#[derive(Default)]
struct SimulatedHost {
    next_id: u64,
    listeners: HashMap<ListenerId, (Trigger, Option<u32>)>,
    frame_queue: Vec<FrameHandle>,
}

impl SimulatedHost {
    /// Fire every queued frame, returning them in order
    fn drain_frames(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.frame_queue)
    }

    fn has_listener(&self, trigger: Trigger) -> bool {
        self.listeners.values().any(|(t, _)| *t == trigger)
    }
}

impl LayoutHost for SimulatedHost {
    type Handle = u32;
    type Error = String;

    fn listen(&mut self, trigger: Trigger, target: Option<&u32>) -> Result<ListenerId, String> {
        self.next_id += 1;
        let id = ListenerId::new(self.next_id);
        self.listeners.insert(id, (trigger, target.copied()));
        Ok(id)
    }

    fn unlisten(&mut self, id: ListenerId) {
        self.listeners.remove(&id);
    }

    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let frame = FrameHandle::new(self.next_id);
        self.frame_queue.push(frame);
        frame
    }

    fn cancel_frame(&mut self, frame: FrameHandle) {
        self.frame_queue.retain(|f| *f != frame);
    }
}

const TRIGGER: u32 = 1;
const MENU: u32 = 2;

fn page() -> Rc<RefCell<Page>> {
    let mut page = Page {
        viewport: Viewport::new(1024.0, 768.0),
        ..Default::default()
    };
    page.rects.insert(TRIGGER, Rect::new(100.0, 100.0, 80.0, 30.0));
    page.rects.insert(MENU, Rect::sized(120.0, 200.0));
    Rc::new(RefCell::new(page))
}

fn recompute(page: &Rc<RefCell<Page>>) -> impl FnMut() -> Result<(), String> + 'static {
    let page = Rc::clone(page);
    move || {
        let mut page = page.borrow_mut();
        let reference = *page.rects.get(&TRIGGER).ok_or("trigger detached")?;
        let floating = *page.rects.get(&MENU).ok_or("menu detached")?;
        let request = FloatingKind::Dropdown.default_request();
        let result = compute_position(&reference, &floating, &page.viewport, &request);
        page.placements.push(result);
        Ok(())
    }
}

#[test]
fn test_scroll_burst_recomputes_once_with_fresh_rects() {
    let page = page();
    let mut host = SimulatedHost::default();
    let mut repo = Repositioner::new(RepositionerConfig::default());
    repo.start(&mut host, TRIGGER, MENU, recompute(&page)).unwrap();

    // Ten scroll events within one frame; the trigger ends near the bottom
    for step in 1..=10 {
        page.borrow_mut()
            .rects
            .insert(TRIGGER, Rect::new(100.0 + 60.0 * step as f64, 100.0, 80.0, 30.0));
        repo.notify(&mut host, Trigger::AncestorScroll);
    }

    let frames = host.drain_frames();
    assert_eq!(frames.len(), 1);
    for frame in frames {
        repo.on_frame(frame).unwrap();
    }

    let page = page.borrow();
    assert_eq!(page.placements.len(), 1);
    // Trigger now sits at top=700, so the menu flips above it
    assert_eq!(page.placements[0].resolved_side, Side::Top);
    assert_eq!(repo.stats().recomputes, 1);
    assert_eq!(repo.stats().coalesced, 9);

    drop(page);
    repo.stop(&mut host);
}

#[test]
fn test_separate_frames_recompute_separately() {
    let page = page();
    let mut host = SimulatedHost::default();
    let mut repo = Repositioner::new(RepositionerConfig::default());
    repo.start(&mut host, TRIGGER, MENU, recompute(&page)).unwrap();

    for trigger in [Trigger::WindowResize, Trigger::ElementResize, Trigger::DomMutation] {
        repo.notify(&mut host, trigger);
        for frame in host.drain_frames() {
            repo.on_frame(frame).unwrap();
        }
    }

    assert_eq!(page.borrow().placements.len(), 3);
    repo.stop(&mut host);
}

#[test]
fn test_stop_releases_everything_and_is_repeatable() {
    let page = page();
    let mut host = SimulatedHost::default();
    let mut repo = Repositioner::new(RepositionerConfig::default());

    repo.stop(&mut host);
    repo.start(&mut host, TRIGGER, MENU, recompute(&page)).unwrap();
    assert!(host.has_listener(Trigger::AncestorScroll));
    assert!(host.has_listener(Trigger::DomMutation));

    repo.notify(&mut host, Trigger::WindowResize);
    repo.stop(&mut host);
    repo.stop(&mut host);

    assert_eq!(repo.state(), RepositionerState::Idle);
    assert!(host.listeners.is_empty());
    assert!(host.frame_queue.is_empty());
    assert!(page.borrow().placements.is_empty());
}

#[test]
fn test_detached_element_error_reaches_caller() {
    let page = page();
    let mut host = SimulatedHost::default();
    let mut repo = Repositioner::new(RepositionerConfig::default());
    repo.start(&mut host, TRIGGER, MENU, recompute(&page)).unwrap();

    page.borrow_mut().rects.remove(&MENU);
    repo.notify(&mut host, Trigger::DomMutation);
    let frame = host.drain_frames()[0];

    assert_eq!(repo.on_frame(frame), Err("menu detached".to_string()));
    repo.stop(&mut host);
}

#[test]
fn test_restart_after_stop_begins_fresh_session() {
    let page = page();
    let mut host = SimulatedHost::default();
    let mut repo = Repositioner::new(RepositionerConfig::default());

    repo.start(&mut host, TRIGGER, MENU, recompute(&page)).unwrap();
    repo.notify(&mut host, Trigger::WindowResize);
    repo.notify(&mut host, Trigger::WindowResize);
    repo.stop(&mut host);

    repo.start(&mut host, TRIGGER, MENU, recompute(&page)).unwrap();
    assert_eq!(repo.stats().signals, 0);
    assert!(!repo.has_pending_frame());
    repo.stop(&mut host);
}
