//! Bridge answer, command, and first-responder tests.

use std::cell::Cell;
use std::rc::Rc;

use super::{
    Handled, HandlerChain, HostWindow, WindowAction, WindowCommand, WindowControlBridge,
    WindowReply, WindowRequest, WindowRequestKind, WindowState,
};
use crate::error::Error;

#[derive(Debug, Clone, PartialEq)]
struct FakeHost {
    position: (i32, i32),
    size: (f64, f64),
    title: String,
    state: WindowState,
    screen: Option<(i32, i32)>,
    activated: usize,
    lowered: usize,
    closed: bool,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self {
            position: (120, 80),
            size: (800.5, 600.9),
            title: "shell".to_owned(),
            state: WindowState::Normal,
            screen: Some((1920, 1080)),
            activated: 0,
            lowered: 0,
            closed: false,
        }
    }
}

impl HostWindow for FakeHost {
    fn position(&self) -> (i32, i32) {
        self.position
    }
    fn set_position(&mut self, x: i32, y: i32) {
        self.position = (x, y);
    }
    fn size(&self) -> (f64, f64) {
        self.size
    }
    fn set_size(&mut self, width: f64, height: f64) {
        self.size = (width, height);
    }
    fn title(&self) -> String {
        self.title.clone()
    }
    fn set_title(&mut self, title: &str) {
        self.title = title.to_owned();
    }
    fn state(&self) -> WindowState {
        self.state
    }
    fn set_state(&mut self, state: WindowState) {
        self.state = state;
    }
    fn activate(&mut self) {
        self.activated += 1;
    }
    fn lower(&mut self) {
        self.lowered += 1;
    }
    fn screen_size(&self) -> Option<(i32, i32)> {
        self.screen
    }
    fn close(&mut self) {
        self.closed = true;
    }
}

fn bridge() -> WindowControlBridge<FakeHost> {
    WindowControlBridge::new(FakeHost::default())
}

fn ask(bridge: &mut WindowControlBridge<FakeHost>, kind: WindowRequestKind) -> WindowRequest {
    let mut request = WindowRequest::new(kind);
    bridge.handle_request(&mut request);
    request
}

fn run(bridge: &mut WindowControlBridge<FakeHost>, action: WindowAction) -> WindowCommand {
    let mut command = WindowCommand::new(action);
    bridge.handle_command(&mut command);
    command
}

// Requests

#[test]
fn position_request_returns_host_position() {
    let mut b = bridge();
    let req = ask(&mut b, WindowRequestKind::Position);
    assert!(req.is_handled());
    assert_eq!(req.reply(), Some(&WindowReply::Position { x: 120, y: 80 }));
}

#[test]
fn state_request_reports_iconified_only_when_minimized() {
    let mut b = bridge();
    let req = ask(&mut b, WindowRequestKind::State);
    assert_eq!(req.reply(), Some(&WindowReply::State { iconified: false }));

    b.host_mut().state = WindowState::Minimized;
    let req = ask(&mut b, WindowRequestKind::State);
    assert_eq!(req.reply(), Some(&WindowReply::State { iconified: true }));

    b.host_mut().state = WindowState::Maximized;
    let req = ask(&mut b, WindowRequestKind::State);
    assert_eq!(req.reply(), Some(&WindowReply::State { iconified: false }));
}

#[test]
fn size_request_truncates_host_size() {
    let mut b = bridge();
    let req = ask(&mut b, WindowRequestKind::SizePixels);
    assert_eq!(
        req.reply(),
        Some(&WindowReply::SizePixels {
            width: 800,
            height: 600
        })
    );
}

#[test]
fn screen_size_request_uses_containing_screen() {
    let mut b = bridge();
    let req = ask(&mut b, WindowRequestKind::ScreenSizePixels);
    assert_eq!(
        req.reply(),
        Some(&WindowReply::ScreenSizePixels {
            width: 1920,
            height: 1080
        })
    );
}

#[test]
fn unresolved_screen_leaves_request_unhandled() {
    let mut b = bridge();
    b.host_mut().screen = None;
    let req = ask(&mut b, WindowRequestKind::ScreenSizePixels);
    assert!(!req.is_handled());
    assert_eq!(req.reply(), None);

    let mut req = WindowRequest::new(WindowRequestKind::ScreenSizePixels);
    assert!(matches!(b.answer(&mut req), Err(Error::UnresolvedScreen)));
}

#[test]
fn cell_size_request_uses_font_estimate() {
    let mut b = bridge();
    let req = ask(&mut b, WindowRequestKind::CellSizePixels);
    assert_eq!(
        req.reply(),
        Some(&WindowReply::CellSizePixels {
            width: 8,
            height: 16
        })
    );

    b.set_font_size(20.0);
    let req = ask(&mut b, WindowRequestKind::CellSizePixels);
    assert_eq!(
        req.reply(),
        Some(&WindowReply::CellSizePixels {
            width: 12,
            height: 24
        })
    );
}

#[test]
fn title_and_icon_title_return_window_title() {
    let mut b = bridge();
    let req = ask(&mut b, WindowRequestKind::Title);
    assert_eq!(req.reply(), Some(&WindowReply::Title("shell".to_owned())));
    let req = ask(&mut b, WindowRequestKind::IconTitle);
    assert_eq!(req.reply(), Some(&WindowReply::IconTitle("shell".to_owned())));
}

#[test]
fn handled_request_is_not_overwritten() {
    let b = bridge();
    let mut req = WindowRequest::new(WindowRequestKind::Position);
    assert!(req.respond(WindowReply::Position { x: 1, y: 2 }));

    b.answer(&mut req).unwrap();
    assert_eq!(req.reply(), Some(&WindowReply::Position { x: 1, y: 2 }));
    assert!(!req.respond(WindowReply::Position { x: 3, y: 4 }));
}

#[test]
fn earlier_handler_wins_over_bridge_default() {
    let mut b = bridge();
    b.on_request(|req| {
        if req.kind() == WindowRequestKind::Title {
            req.respond(WindowReply::Title("custom".to_owned()));
        }
    });

    let req = ask(&mut b, WindowRequestKind::Title);
    assert_eq!(req.reply(), Some(&WindowReply::Title("custom".to_owned())));

    // Other kinds fall through to the built-in answer.
    let req = ask(&mut b, WindowRequestKind::Position);
    assert_eq!(req.reply(), Some(&WindowReply::Position { x: 120, y: 80 }));
}

#[test]
fn mismatched_reply_is_ignored() {
    let mut req = WindowRequest::new(WindowRequestKind::Title);
    assert!(!req.respond(WindowReply::Position { x: 0, y: 0 }));
    assert!(!req.is_handled());
    assert_eq!(req.reply(), None);
}

// Commands

#[test]
fn moved_and_resized_update_host_geometry() {
    let mut b = bridge();
    let cmd = run(&mut b, WindowAction::Moved { x: 5, y: 6 });
    assert!(cmd.is_handled());
    let cmd = run(
        &mut b,
        WindowAction::Resized {
            width: 640,
            height: 480,
        },
    );
    assert!(cmd.is_handled());
    assert_eq!(b.host().position, (5, 6));
    assert_eq!(b.host().size, (640.0, 480.0));
}

#[test]
fn state_commands_set_window_state() {
    let mut b = bridge();
    let cases = [
        (WindowAction::Minimized, WindowState::Minimized),
        (WindowAction::Maximized, WindowState::Maximized),
        (WindowAction::Fullscreened, WindowState::FullScreen),
        (WindowAction::Restored, WindowState::Normal),
    ];
    for (action, expected) in cases {
        run(&mut b, action);
        assert_eq!(b.host().state, expected);
    }
}

#[test]
fn raise_activates_and_lower_is_forwarded() {
    let mut b = bridge();
    run(&mut b, WindowAction::Raised);
    run(&mut b, WindowAction::Lowered);
    assert_eq!(b.host().activated, 1);
    assert_eq!(b.host().lowered, 1);
}

#[test]
fn bell_has_no_host_effect() {
    let mut b = bridge();
    let before = b.host().clone();
    let cmd = run(&mut b, WindowAction::BellRang);
    assert!(cmd.is_handled());
    assert_eq!(*b.host(), before);
}

#[test]
fn title_change_sets_window_title() {
    let mut b = bridge();
    run(&mut b, WindowAction::TitleChanged("vim".to_owned()));
    assert_eq!(b.host().title, "vim");
}

#[test]
fn title_change_ignored_when_updates_disabled() {
    let mut b = bridge();
    b.set_update_title_from_terminal(false);
    let cmd = run(&mut b, WindowAction::TitleChanged("vim".to_owned()));
    assert!(!cmd.is_handled());
    assert_eq!(b.host().title, "shell");
}

#[test]
fn handled_command_suppresses_default_action() {
    let mut b = bridge();
    let calls = Rc::new(Cell::new(0));
    let seen = calls.clone();
    b.on_command(move |cmd| {
        seen.set(seen.get() + 1);
        if matches!(cmd.action(), WindowAction::Minimized) {
            cmd.mark_handled();
        }
    });

    let cmd = run(&mut b, WindowAction::Minimized);
    assert!(cmd.is_handled());
    assert_eq!(b.host().state, WindowState::Normal);

    run(&mut b, WindowAction::Maximized);
    assert_eq!(b.host().state, WindowState::Maximized);
    assert_eq!(calls.get(), 2);

    let mut pre_handled = WindowCommand::new(WindowAction::Moved { x: 0, y: 0 });
    pre_handled.mark_handled();
    b.apply(&mut pre_handled);
    assert_eq!(b.host().position, (120, 80));
}

#[test]
fn process_exit_closes_host_when_enabled() {
    let mut b = bridge();
    b.set_close_on_process_exit(false);
    assert!(!b.on_process_exited(Some(0)));
    assert!(!b.host().closed);

    b.set_close_on_process_exit(true);
    assert!(b.on_process_exited(Some(1)));
    assert!(b.host().closed);
}

// Chain

#[test]
fn chain_stops_at_first_handler_that_handles() {
    let hits = Rc::new(Cell::new([false; 3]));
    let mut chain = HandlerChain::<WindowCommand>::new();
    for i in 0..3 {
        let hits = hits.clone();
        chain.push(move |cmd: &mut WindowCommand| {
            let mut h = hits.get();
            h[i] = true;
            hits.set(h);
            if i == 1 {
                cmd.mark_handled();
            }
        });
    }
    assert_eq!(chain.len(), 3);

    let mut cmd = WindowCommand::new(WindowAction::BellRang);
    assert!(chain.dispatch(&mut cmd));
    assert!(Handled::is_handled(&cmd));
    assert_eq!(hits.get(), [true, true, false]);
}

#[test]
fn empty_chain_leaves_event_unhandled() {
    let mut chain = HandlerChain::<WindowRequest>::default();
    assert!(chain.is_empty());
    let mut req = WindowRequest::new(WindowRequestKind::State);
    assert!(!chain.dispatch(&mut req));
}
