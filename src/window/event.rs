//! Window request and command events raised by the terminal engine.
//!
//! Each event carries a `handled` flag. Once set it stays set: later
//! handlers in a chain see the event as already consumed and must leave it
//! alone.

/// Query kinds a terminal program can ask about its window (XTWINOPS reports).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowRequestKind {
    State,
    Position,
    SizePixels,
    ScreenSizePixels,
    CellSizePixels,
    Title,
    IconTitle,
}

/// Answer to a [`WindowRequest`], typed per kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowReply {
    State { iconified: bool },
    Position { x: i32, y: i32 },
    SizePixels { width: i32, height: i32 },
    ScreenSizePixels { width: i32, height: i32 },
    CellSizePixels { width: i32, height: i32 },
    Title(String),
    IconTitle(String),
}

impl WindowReply {
    /// The request kind this reply answers.
    pub fn kind(&self) -> WindowRequestKind {
        match self {
            Self::State { .. } => WindowRequestKind::State,
            Self::Position { .. } => WindowRequestKind::Position,
            Self::SizePixels { .. } => WindowRequestKind::SizePixels,
            Self::ScreenSizePixels { .. } => WindowRequestKind::ScreenSizePixels,
            Self::CellSizePixels { .. } => WindowRequestKind::CellSizePixels,
            Self::Title(_) => WindowRequestKind::Title,
            Self::IconTitle(_) => WindowRequestKind::IconTitle,
        }
    }
}

/// A window query awaiting its first responder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRequest {
    kind: WindowRequestKind,
    handled: bool,
    reply: Option<WindowReply>,
}

impl WindowRequest {
    pub fn new(kind: WindowRequestKind) -> Self {
        Self {
            kind,
            handled: false,
            reply: None,
        }
    }

    pub fn kind(&self) -> WindowRequestKind {
        self.kind
    }

    pub fn is_handled(&self) -> bool {
        self.handled
    }

    pub fn reply(&self) -> Option<&WindowReply> {
        self.reply.as_ref()
    }

    /// Answer the request and mark it handled.
    ///
    /// Returns `false` without touching the request if it was already
    /// handled or if `reply` answers a different kind.
    pub fn respond(&mut self, reply: WindowReply) -> bool {
        if self.handled {
            return false;
        }
        if reply.kind() != self.kind {
            log::warn!(
                "window reply {:?} does not answer {:?} request; ignored",
                reply.kind(),
                self.kind
            );
            return false;
        }
        self.reply = Some(reply);
        self.handled = true;
        true
    }

    /// Consume the request without answering it.
    pub fn mark_handled(&mut self) {
        self.handled = true;
    }
}

/// Window actions a terminal program can ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowAction {
    Moved { x: i32, y: i32 },
    Resized { width: i32, height: i32 },
    Minimized,
    Maximized,
    Restored,
    Raised,
    Lowered,
    Fullscreened,
    BellRang,
    TitleChanged(String),
}

/// A window action awaiting its first responder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowCommand {
    action: WindowAction,
    handled: bool,
}

impl WindowCommand {
    pub fn new(action: WindowAction) -> Self {
        Self {
            action,
            handled: false,
        }
    }

    pub fn action(&self) -> &WindowAction {
        &self.action
    }

    pub fn is_handled(&self) -> bool {
        self.handled
    }

    pub fn mark_handled(&mut self) {
        self.handled = true;
    }
}

/// Events that follow the first-responder-wins contract.
pub trait Handled {
    fn is_handled(&self) -> bool;
}

impl Handled for WindowRequest {
    fn is_handled(&self) -> bool {
        self.handled
    }
}

impl Handled for WindowCommand {
    fn is_handled(&self) -> bool {
        self.handled
    }
}
