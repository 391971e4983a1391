use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use glide_core::config::{AnimationMode, MotionConfig, StepPolicy};
use glide_core::{Clock, Duration, ManualClock, ManualFrameScheduler, SystemClock};
use glide_ui::*;

/// ~60fps
const FRAME: Duration = Duration::from_millis(16);

struct LogHost;

impl PagerHost for LogHost {
    fn request_scroll_to(&mut self, offset: f32) {
        log::info!("host: scroll to {offset}");
    }
    fn on_finished(&mut self) {
        log::info!("host: onboarding done");
    }
}

fn list_demo(clock: &ManualClock) {
    let device = DeviceSize {
        width: 320.0,
        height: 640.0,
    };
    let mut list = AnimatedList::new(MotionConfig::with_mode(AnimationMode::SlideLeft), device);
    list.apply_reports((0..5u32).map(|i| VisibilityReport {
        key: i,
        is_visible: i < 3,
    }));
    for i in 0..5 {
        log::info!("list: item {i} -> {:?}", list.target_transform(&i));
    }

    list.apply_reports([VisibilityReport::visible(4)]);
    let start = list.animated_transform(&4, clock.now());
    clock.advance(Duration::from_millis(150));
    let mid = list.animated_transform(&4, clock.now());
    clock.advance(Duration::from_millis(200));
    let end = list.animated_transform(&4, clock.now());
    log::info!("list: item 4 slides in {start:?} -> {mid:?} -> {end:?}");
}

fn pager_demo() -> glide_core::Result<()> {
    let mut nav = PageNavigator::new(3, 320.0);
    let mut host = LogHost;
    while let Advance::ScrollTo { index, offset } = nav.advance(&mut host) {
        nav.on_settle(offset);
        let dots: Vec<String> = nav
            .indicator_styles()?
            .iter()
            .map(|s| format!("{:.2}", s.scale))
            .collect();
        log::info!("pager: page {index}, dots [{}]", dots.join(", "));
    }
    nav.advance(&mut host);
    Ok(())
}

fn progress_demo(clock: &ManualClock, sched: &Rc<ManualFrameScheduler>) -> anyhow::Result<()> {
    let mut ring = CircularProgress::new(Arc::new(clock.clone()), RingGeometry::default(), 1000)?;
    ring.set_progress_driven(75.0, sched);
    while sched.pending() > 0 {
        clock.advance(FRAME * 8);
        sched.run_frame(clock.now());
        ring.update();
        log::info!(
            "progress: label {}, arc {:.1}%, dash offset {:.1}",
            ring.label(),
            ring.arc_percent(),
            ring.stroke_dash_offset()
        );
    }
    Ok(())
}

fn loader_demo(clock: &ManualClock) -> anyhow::Result<()> {
    let mut loader = MultiStepLoader::new(4, 500, StepPolicy::Loop);
    loader.set_loading(true, clock.now());
    for _ in 0..5 {
        clock.advance(Duration::from_millis(500));
        let step = loader.tick(clock.now());
        let style = loader.step_style(step)?;
        log::info!("loader: step {step}, shift {}", style.translate_y);
    }
    loader.set_loading(false, clock.now());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let clock = ManualClock::default();
    let sched = Rc::new(ManualFrameScheduler::new());

    list_demo(&clock);
    pager_demo()?;
    progress_demo(&clock, &sched)?;
    loader_demo(&clock)?;

    // Last one on wall-clock time, the way a host frame loop would run it.
    let counter = Rc::new(RefCell::new(FrameCounter::new(Arc::new(SystemClock), 0)));
    counter.borrow_mut().set_target(250, 300);
    drive_counter(&counter, &sched);
    let mut frames = 0;
    while sched.pending() > 0 {
        std::thread::sleep(FRAME);
        sched.run_frame(SystemClock.now());
        frames += 1;
    }
    log::info!(
        "counter: settled at {} after {frames} frames",
        counter.borrow().display_value()
    );

    Ok(())
}
