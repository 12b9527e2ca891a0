use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use log::{debug, warn};
use web_sys::{Document, Element};

use crate::config;
use crate::controllers::counter::{CountUp, CounterAnimator, Frame};
use crate::controllers::reveal::{RevealAnimator, RevealProfile};
use crate::dom::{self, DomError, Watcher};

/// Hides every element claimed by a reveal profile and starts watching it.
///
/// Elements are hidden before the first watcher is attached so nothing
/// flashes fully visible on load.
pub fn install_reveals(document: &Document) -> Result<Vec<Watcher>, DomError> {
    let mut animator = RevealAnimator::new(config::reveal_profiles());
    let profiles = animator.profiles().to_vec();

    for (index, profile) in profiles.iter().enumerate() {
        for element in dom::query_all(document, &profile.selector()) {
            if animator.register(element.clone(), index) {
                let hidden = profile.hidden_style();
                dom::set_styles(
                    &element,
                    hidden.iter().map(|(property, value)| (*property, value.as_str())),
                );
            }
        }
    }

    let animator = Rc::new(RefCell::new(animator));
    let mut watchers = Vec::with_capacity(profiles.len());
    for (index, profile) in profiles.iter().enumerate() {
        let watcher = reveal_watcher(profile, animator.clone())?;
        let mut observed = 0;
        for element in animator.borrow().nodes_for(index) {
            watcher.observe(element);
            observed += 1;
        }
        debug!("reveal profile {} watching {} elements", profile.name, observed);
        watchers.push(watcher);
    }
    Ok(watchers)
}

fn reveal_watcher(
    profile: &RevealProfile,
    animator: Rc<RefCell<RevealAnimator<Element>>>,
) -> Result<Watcher, DomError> {
    Watcher::new(
        profile.threshold,
        Some(&profile.root_margin()),
        move |element, intersecting, observer| {
            if animator.borrow_mut().on_intersection(&element, intersecting) {
                dom::set_styles(&element, RevealProfile::visible_style());
                observer.unobserve(&element);
            }
        },
    )
}

/// Registers `.stat-number` counters and starts each one the first time
/// half of it is visible.
pub fn install_counters(document: &Document) -> Result<Watcher, DomError> {
    let mut animator = CounterAnimator::new();
    let mut valid = Vec::new();
    for element in dom::query_all(document, ".stat-number") {
        match animator.register(element.clone(), element.get_attribute("data-target").as_deref()) {
            Ok(_) => {
                element.set_text_content(Some("0"));
                valid.push(element);
            }
            Err(err) => warn!("skipping counter: {}", err),
        }
    }

    let animator = Rc::new(RefCell::new(animator));
    let watcher = {
        let animator = animator.clone();
        Watcher::new(config::COUNTER_THRESHOLD, None, move |element, intersecting, _| {
            let started = animator.borrow_mut().trigger(&element, intersecting);
            if let Some(count) = started {
                run_count_up(element, count, animator.clone());
            }
        })?
    };
    for element in &valid {
        watcher.observe(element);
    }
    Ok(watcher)
}

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

fn run_count_up(
    element: Element,
    count: CountUp,
    animator: Rc<RefCell<CounterAnimator<Element>>>,
) {
    let slot: FrameSlot = Rc::new(RefCell::new(None));
    advance(slot, element, count, animator);
}

// One frame of the count-up; schedules the next frame until done.
fn advance(
    slot: FrameSlot,
    element: Element,
    mut count: CountUp,
    animator: Rc<RefCell<CounterAnimator<Element>>>,
) {
    let value = match count.step() {
        Frame::Continue(value) => value,
        Frame::Done(value) => {
            show(&element, value, &animator);
            slot.borrow_mut().take();
            return;
        }
    };
    show(&element, value, &animator);

    let next = slot.clone();
    let frame = request_animation_frame(move |_| advance(next, element, count, animator));
    *slot.borrow_mut() = Some(frame);
}

fn show(element: &Element, value: u32, animator: &Rc<RefCell<CounterAnimator<Element>>>) {
    element.set_text_content(Some(&value.to_string()));
    animator.borrow_mut().record(element, value);
}
