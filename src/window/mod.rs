//! Window control bridge.
//!
//! Terminal programs query and manipulate their window through escape
//! sequences (XTWINOPS). The engine turns those into [`WindowRequest`] and
//! [`WindowCommand`] events; [`WindowControlBridge`] answers or applies them
//! against the embedding [`HostWindow`]. Embedders can register their own
//! handlers ahead of the built-in behavior: the first one to mark an event
//! handled wins and the bridge's default is skipped.

mod chain;
mod event;
mod host;

pub use chain::HandlerChain;
pub use event::{
    Handled, WindowAction, WindowCommand, WindowReply, WindowRequest, WindowRequestKind,
};
pub use host::{HostWindow, WindowState};

use crate::error::{Error, Result};
use crate::render::CellMetrics;

/// Default font size in points, used for the cell-size estimate.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Answers window requests and applies window commands for one surface.
pub struct WindowControlBridge<H> {
    host: H,
    font_size: f32,
    update_title_from_terminal: bool,
    close_on_process_exit: bool,
    requests: HandlerChain<WindowRequest>,
    commands: HandlerChain<WindowCommand>,
}

impl<H: HostWindow> WindowControlBridge<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            font_size: DEFAULT_FONT_SIZE,
            update_title_from_terminal: true,
            close_on_process_exit: true,
            requests: HandlerChain::new(),
            commands: HandlerChain::new(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    pub fn update_title_from_terminal(&self) -> bool {
        self.update_title_from_terminal
    }

    /// Whether `TitleChanged` commands retitle the host window.
    pub fn set_update_title_from_terminal(&mut self, enabled: bool) {
        self.update_title_from_terminal = enabled;
    }

    pub fn close_on_process_exit(&self) -> bool {
        self.close_on_process_exit
    }

    pub fn set_close_on_process_exit(&mut self, enabled: bool) {
        self.close_on_process_exit = enabled;
    }

    /// Register a request handler that runs before the built-in answers.
    pub fn on_request(&mut self, handler: impl FnMut(&mut WindowRequest) + 'static) {
        self.requests.push(handler);
    }

    /// Register a command handler that runs before the built-in actions.
    pub fn on_command(&mut self, handler: impl FnMut(&mut WindowCommand) + 'static) {
        self.commands.push(handler);
    }

    /// Run registered handlers, then the built-in answer if still unhandled.
    ///
    /// Returns whether the request ended up handled. An unresolved screen
    /// leaves it unhandled for the engine's own fallback.
    pub fn handle_request(&mut self, request: &mut WindowRequest) -> bool {
        if !self.requests.dispatch(request) {
            if let Err(e) = self.answer(request) {
                log::debug!("window request {:?} left unhandled: {e}", request.kind());
            }
        }
        request.is_handled()
    }

    /// Run registered handlers, then the built-in action if still unhandled.
    pub fn handle_command(&mut self, command: &mut WindowCommand) -> bool {
        if !self.commands.dispatch(command) {
            self.apply(command);
        }
        command.is_handled()
    }

    /// Fill in the canonical answer for an unhandled request.
    ///
    /// A request that is already handled is left untouched.
    pub fn answer(&self, request: &mut WindowRequest) -> Result<()> {
        if request.is_handled() {
            return Ok(());
        }
        let reply = match request.kind() {
            WindowRequestKind::State => WindowReply::State {
                iconified: self.host.state() == WindowState::Minimized,
            },
            WindowRequestKind::Position => {
                let (x, y) = self.host.position();
                WindowReply::Position { x, y }
            }
            WindowRequestKind::SizePixels => {
                let (width, height) = self.host.size();
                WindowReply::SizePixels {
                    width: width as i32,
                    height: height as i32,
                }
            }
            WindowRequestKind::ScreenSizePixels => {
                let (width, height) = self.host.screen_size().ok_or(Error::UnresolvedScreen)?;
                WindowReply::ScreenSizePixels { width, height }
            }
            WindowRequestKind::CellSizePixels => {
                let metrics = CellMetrics::estimate(self.font_size);
                WindowReply::CellSizePixels {
                    width: metrics.cell_width as i32,
                    height: metrics.cell_height as i32,
                }
            }
            WindowRequestKind::Title => WindowReply::Title(self.host.title()),
            WindowRequestKind::IconTitle => WindowReply::IconTitle(self.host.title()),
        };
        request.respond(reply);
        Ok(())
    }

    /// Perform the built-in host action for an unhandled command.
    ///
    /// A command that is already handled is left untouched. A title change
    /// with title updates disabled stays unhandled.
    pub fn apply(&mut self, command: &mut WindowCommand) {
        if command.is_handled() {
            return;
        }
        match command.action() {
            WindowAction::Moved { x, y } => self.host.set_position(*x, *y),
            WindowAction::Resized { width, height } => {
                self.host.set_size(f64::from(*width), f64::from(*height));
            }
            WindowAction::Minimized => self.host.set_state(WindowState::Minimized),
            WindowAction::Maximized => self.host.set_state(WindowState::Maximized),
            WindowAction::Restored => self.host.set_state(WindowState::Normal),
            WindowAction::Fullscreened => self.host.set_state(WindowState::FullScreen),
            WindowAction::Raised => self.host.activate(),
            WindowAction::Lowered => self.host.lower(),
            WindowAction::BellRang => {}
            WindowAction::TitleChanged(title) => {
                if !self.update_title_from_terminal {
                    log::debug!("title change ignored: updates from terminal disabled");
                    return;
                }
                self.host.set_title(title);
            }
        }
        command.mark_handled();
    }

    /// React to the child process exiting. Returns whether the host was closed.
    pub fn on_process_exited(&mut self, code: Option<i32>) -> bool {
        log::debug!("process exited with {code:?}");
        if self.close_on_process_exit {
            self.host.close();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests;
