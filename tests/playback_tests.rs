// Integration tests for the playback controller

use rustc_hash::FxHashSet;
use sortty::engine::{self, EngineError, Step, StepKind, Value};
use sortty::generator::{ArrayGenerator, Distribution};
use sortty::playback::{
    delay_for_speed, Controller, ManualScheduler, Mark, PlaybackMode, PlaybackState, Renderer,
};
use sortty::ui::BarView;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Render {
        kind: StepKind,
        working: Vec<Value>,
        sorted: usize,
    },
    Redraw(Vec<Value>),
    AllSorted(Vec<Value>),
}

#[derive(Debug, Default)]
struct RecordingRenderer {
    events: Vec<Event>,
}

impl RecordingRenderer {
    fn renders(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Render { .. }))
            .count()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, step: &Step<Value>, working: &[Value], sorted: &FxHashSet<usize>) {
        self.events.push(Event::Render {
            kind: step.kind,
            working: working.to_vec(),
            sorted: sorted.len(),
        });
    }

    fn redraw(&mut self, array: &[Value]) {
        self.events.push(Event::Redraw(array.to_vec()));
    }

    fn mark_all_sorted(&mut self, array: &[Value]) {
        self.events.push(Event::AllSorted(array.to_vec()));
    }
}

type TestController = Controller<RecordingRenderer, ManualScheduler>;

fn controller(mode: PlaybackMode) -> TestController {
    Controller::new(
        RecordingRenderer::default(),
        ManualScheduler::new(),
        ArrayGenerator::seeded(7),
        mode,
        10,
    )
}

/// Fire ticks until the run stops running or `limit` ticks pass
fn run_ticks(c: &mut TestController, limit: usize) -> usize {
    let mut fired = 0;
    while c.state() == PlaybackState::Running && fired < limit {
        if let Some(wait) = c.scheduler().time_until_next() {
            c.scheduler_mut().advance(wait);
        }
        let processed = c.pump();
        assert!(processed > 0, "running controller had nothing scheduled");
        fired += processed;
    }
    fired
}

#[test]
fn test_continuous_plays_to_completion() {
    let mut c = controller(PlaybackMode::Continuous);
    let input = [5, 2, 9, 1, 5, 6];
    c.start("merge", &input, PlaybackMode::Continuous).unwrap();
    assert_eq!(c.state(), PlaybackState::Running);

    let expected = engine::run("merge", &input).unwrap();
    run_ticks(&mut c, 10_000);

    assert_eq!(c.state(), PlaybackState::Finished);
    let session = c.session();
    assert_eq!(session.cursor(), expected.steps.len());
    assert_eq!(session.working_array(), expected.sorted_array.as_slice());
    assert_eq!(session.sorted_set().len(), input.len());
    assert!(session.marks().is_empty());
    assert_eq!(session.caption(), "Sorting completed!");

    assert_eq!(c.renderer().renders(), expected.steps.len());
    assert_eq!(
        c.renderer().events.last(),
        Some(&Event::AllSorted(expected.sorted_array.clone()))
    );
    assert!(c.scheduler().pending_tokens().is_empty());
}

#[test]
fn test_first_tick_is_immediate_then_paced_by_speed() {
    let mut c = controller(PlaybackMode::Continuous);
    c.set_speed(5);
    c.start("bubble", &[3, 1, 2], PlaybackMode::Continuous).unwrap();

    assert_eq!(c.pump(), 1);
    assert_eq!(c.session().cursor(), 1);

    // Nothing fires before the delay elapses
    c.scheduler_mut().advance(delay_for_speed(5) - Duration::from_millis(1));
    assert_eq!(c.pump(), 0);
    c.scheduler_mut().advance(Duration::from_millis(1));
    assert_eq!(c.pump(), 1);
    assert_eq!(c.session().cursor(), 2);
}

#[test]
fn test_speed_change_applies_to_next_tick() {
    let mut c = controller(PlaybackMode::Continuous);
    c.set_speed(1);
    c.start("bubble", &[3, 1, 2], PlaybackMode::Continuous).unwrap();
    c.pump();
    c.set_speed(10);

    // The tick already scheduled keeps its slow delay
    assert_eq!(c.scheduler().time_until_next(), Some(delay_for_speed(1)));
    c.scheduler_mut().advance(delay_for_speed(1));
    c.pump();
    assert_eq!(c.scheduler().time_until_next(), Some(delay_for_speed(10)));
}

#[test]
fn test_step_mode_never_advances_on_its_own() {
    let mut c = controller(PlaybackMode::Step);
    c.start("bubble", &[3, 1, 2], PlaybackMode::Step).unwrap();
    assert_eq!(c.state(), PlaybackState::Paused);

    c.scheduler_mut().advance(Duration::from_secs(60));
    assert_eq!(c.pump(), 0);
    assert_eq!(c.session().cursor(), 0);
    assert_eq!(c.renderer().renders(), 0);
}

#[test]
fn test_step_mode_walks_bubble_trace() {
    let mut c = controller(PlaybackMode::Step);
    c.start("bubble", &[3, 1, 2], PlaybackMode::Step).unwrap();

    c.next_step();
    let session = c.session();
    assert_eq!(session.cursor(), 1);
    assert_eq!(session.working_array(), &[3, 1, 2]);
    assert_eq!(session.marks().get(&0), Some(&Mark::Comparing));
    assert_eq!(session.marks().get(&1), Some(&Mark::Comparing));
    assert_eq!(session.caption(), "Comparing 3 and 1");

    c.next_step();
    let session = c.session();
    assert_eq!(session.working_array(), &[1, 3, 2]);
    assert_eq!(session.marks().get(&0), Some(&Mark::Swapping));

    let total = c.session().total_steps();
    for _ in 2..total {
        c.next_step();
    }
    assert_eq!(c.state(), PlaybackState::Finished);
    assert_eq!(c.session().working_array(), &[1, 2, 3]);
    assert_eq!(c.session().sorted_set().len(), 3);

    // Further requests do nothing
    c.next_step();
    assert_eq!(c.session().cursor(), total);
}

#[test]
fn test_stale_tick_after_pause_is_ignored() {
    let mut c = controller(PlaybackMode::Continuous);
    c.start("selection", &[4, 2, 3, 1], PlaybackMode::Continuous)
        .unwrap();
    c.pump();
    let stale = c.scheduler().pending_tokens()[0];

    c.pause();
    assert_eq!(c.state(), PlaybackState::Paused);
    assert!(c.scheduler().pending_tokens().is_empty());
    let cursor = c.session().cursor();

    c.on_tick(stale);
    assert_eq!(c.session().cursor(), cursor);

    // A late token from before the pause stays dead after resuming
    c.resume();
    c.on_tick(stale);
    assert_eq!(c.session().cursor(), cursor);
    assert_eq!(c.pump(), 1);
    assert_eq!(c.session().cursor(), cursor + 1);
}

#[test]
fn test_pause_resume_keeps_cursor() {
    let mut c = controller(PlaybackMode::Continuous);
    let input = [4, 2, 3, 1];
    c.start("heap", &input, PlaybackMode::Continuous).unwrap();
    run_ticks(&mut c, 3);
    c.pause();
    let cursor = c.session().cursor();
    assert_eq!(cursor, 3);

    c.resume();
    assert_eq!(c.state(), PlaybackState::Running);
    run_ticks(&mut c, 10_000);
    assert_eq!(c.state(), PlaybackState::Finished);
    assert_eq!(c.session().working_array(), &[1, 2, 3, 4]);
}

#[test]
fn test_double_start_is_ignored() {
    let mut c = controller(PlaybackMode::Continuous);
    c.start("bubble", &[3, 1, 2], PlaybackMode::Continuous).unwrap();
    c.pump();
    let generation = c.generation();

    c.start("quick", &[9, 8], PlaybackMode::Step).unwrap();
    assert_eq!(c.generation(), generation);
    assert_eq!(c.session().algorithm().map(|a| a.key()), Some("bubble"));
    assert_eq!(c.session().mode(), PlaybackMode::Continuous);
    assert_eq!(c.session().cursor(), 1);
    assert_eq!(c.scheduler().pending_tokens().len(), 1);
}

#[test]
fn test_next_step_ignored_in_continuous_mode() {
    let mut c = controller(PlaybackMode::Continuous);
    c.start("bubble", &[3, 1, 2], PlaybackMode::Continuous).unwrap();
    c.next_step();
    assert_eq!(c.session().cursor(), 0);

    c.pump();
    c.pause();
    c.next_step();
    assert_eq!(c.session().cursor(), 1);
}

#[test]
fn test_unknown_key_leaves_state_untouched() {
    let mut c = controller(PlaybackMode::Continuous);
    c.load(&[2, 1]);
    let events = c.renderer().events.len();

    let err = c
        .start("bogo", &[2, 1], PlaybackMode::Continuous)
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::UnknownAlgorithm {
            key: "bogo".to_string()
        }
    );
    assert_eq!(c.state(), PlaybackState::Idle);
    assert!(c.session().trace().is_none());
    assert!(c.scheduler().pending_tokens().is_empty());
    assert_eq!(c.renderer().events.len(), events);
}

#[test]
fn test_reset_restores_original() {
    let mut c = controller(PlaybackMode::Step);
    let input = [4, 3, 2, 1];
    c.start("insertion", &input, PlaybackMode::Step).unwrap();
    for _ in 0..5 {
        c.next_step();
    }
    assert!(!c.session().sorted_set().is_empty());
    assert_ne!(c.session().working_array(), &input);

    c.reset();
    let session = c.session();
    assert_eq!(session.state(), PlaybackState::Idle);
    assert_eq!(session.cursor(), 0);
    assert_eq!(session.working_array(), &input);
    assert!(session.sorted_set().is_empty());
    assert!(session.marks().is_empty());
    assert!(session.trace().is_none());
    assert_eq!(c.renderer().events.last(), Some(&Event::Redraw(input.to_vec())));
}

#[test]
fn test_reset_while_running_cancels_ticks() {
    let mut c = controller(PlaybackMode::Continuous);
    c.start("quick", &[3, 1, 2], PlaybackMode::Continuous).unwrap();
    c.pump();
    let stale = c.scheduler().pending_tokens()[0];

    c.reset();
    assert!(c.scheduler().pending_tokens().is_empty());
    c.on_tick(stale);
    assert_eq!(c.state(), PlaybackState::Idle);
    assert_eq!(c.session().cursor(), 0);
}

#[test]
fn test_switching_to_step_mode_pauses() {
    let mut c = controller(PlaybackMode::Continuous);
    c.start("bubble", &[3, 1, 2], PlaybackMode::Continuous).unwrap();
    c.pump();

    c.set_mode(PlaybackMode::Step);
    assert_eq!(c.state(), PlaybackState::Paused);
    assert!(c.scheduler().pending_tokens().is_empty());

    c.next_step();
    assert_eq!(c.session().cursor(), 2);
}

#[test]
fn test_restart_after_finish() {
    let mut c = controller(PlaybackMode::Continuous);
    c.start("bubble", &[2, 1], PlaybackMode::Continuous).unwrap();
    run_ticks(&mut c, 100);
    assert_eq!(c.state(), PlaybackState::Finished);

    c.start("selection", &[3, 2, 1], PlaybackMode::Step).unwrap();
    assert_eq!(c.state(), PlaybackState::Paused);
    assert_eq!(c.session().cursor(), 0);
    assert_eq!(c.session().working_array(), &[3, 2, 1]);
    assert!(c.session().sorted_set().is_empty());
    assert_eq!(c.original(), &[3, 2, 1]);
    assert_eq!(c.algorithm_info().map(|info| info.key), Some("selection"));
}

#[test]
fn test_start_redraws_input() {
    let mut c = controller(PlaybackMode::Step);
    c.load(&[2, 1]);
    c.start("bubble", &[4, 6, 5], PlaybackMode::Step).unwrap();
    assert_eq!(c.renderer().events.last(), Some(&Event::Redraw(vec![4, 6, 5])));
    assert_eq!(c.renderer().renders(), 0);
}

#[test]
fn test_restart_from_finished_redraws_new_input() {
    let mut c = controller(PlaybackMode::Continuous);
    c.load(&[2, 1]);
    c.start("bubble", &[2, 1], PlaybackMode::Continuous).unwrap();
    run_ticks(&mut c, 100);
    assert_eq!(c.renderer().events.last(), Some(&Event::AllSorted(vec![1, 2])));

    c.start("selection", &[9, 8, 7], PlaybackMode::Step).unwrap();
    assert_eq!(c.renderer().events.last(), Some(&Event::Redraw(vec![9, 8, 7])));
}

#[test]
fn test_bar_view_matches_session_after_restart() {
    let mut c = Controller::new(
        BarView::new(),
        ManualScheduler::new(),
        ArrayGenerator::seeded(7),
        PlaybackMode::Continuous,
        10,
    );
    c.load(&[2, 1]);
    c.start("bubble", &[2, 1], PlaybackMode::Continuous).unwrap();
    while c.state() == PlaybackState::Running {
        if let Some(wait) = c.scheduler().time_until_next() {
            c.scheduler_mut().advance(wait);
        }
        c.pump();
    }
    assert_eq!(c.renderer().sorted.len(), 2);

    c.start("selection", &[9, 8, 7], PlaybackMode::Step).unwrap();
    let view = c.renderer();
    assert_eq!(view.values, c.session().working_array());
    assert_eq!(view.sorted, *c.session().sorted_set());
    assert!(view.sorted.is_empty());
    assert!(view.marks.is_empty());
}

#[test]
fn test_empty_array_finishes_on_first_tick() {
    let mut c = controller(PlaybackMode::Continuous);
    c.start("heap", &[], PlaybackMode::Continuous).unwrap();

    // "Building max heap" plus the terminal step
    assert_eq!(c.session().total_steps(), 2);
    run_ticks(&mut c, 10);
    assert_eq!(c.state(), PlaybackState::Finished);
    assert!(c.session().working_array().is_empty());
}

#[test]
fn test_generate_resets_and_redraws() {
    let mut c = controller(PlaybackMode::Step);
    c.start("bubble", &[3, 1, 2], PlaybackMode::Step).unwrap();
    c.next_step();

    let array = c.generate(Distribution::Reversed, 8).to_vec();
    assert_eq!(array, vec![8, 7, 6, 5, 4, 3, 2, 1]);
    assert_eq!(c.state(), PlaybackState::Idle);
    assert_eq!(c.original(), array.as_slice());
    assert_eq!(c.renderer().events.last(), Some(&Event::Redraw(array)));
}

#[test]
fn test_every_render_sees_consistent_state() {
    let mut c = controller(PlaybackMode::Continuous);
    let input = [6, 1, 4, 4, 2];
    c.start("quick", &input, PlaybackMode::Continuous).unwrap();
    run_ticks(&mut c, 10_000);

    let expected = engine::run("quick", &input).unwrap();
    let mut array = input.to_vec();
    let mut previous_sorted = 0;
    let renders = c
        .renderer()
        .events
        .iter()
        .filter_map(|e| match e {
            Event::Render {
                kind,
                working,
                sorted,
            } => Some((*kind, working, *sorted)),
            _ => None,
        });
    for ((kind, working, sorted), step) in renders.zip(&expected.steps) {
        assert_eq!(kind, step.kind);
        step.apply_values(&mut array);
        assert_eq!(working, &array);
        assert!(sorted >= previous_sorted, "sorted set shrank");
        previous_sorted = sorted;
    }
}
