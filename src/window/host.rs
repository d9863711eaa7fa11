//! The host window the bridge reads from and mutates.

/// Presentation state of a top-level window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WindowState {
    #[default]
    Normal,
    Minimized,
    Maximized,
    FullScreen,
}

/// Getters and setters the bridge needs from the embedding window.
///
/// Position and screen size are in physical pixels; window size is in
/// device-independent units, as most toolkits expose it.
pub trait HostWindow {
    fn position(&self) -> (i32, i32);
    fn set_position(&mut self, x: i32, y: i32);

    fn size(&self) -> (f64, f64);
    fn set_size(&mut self, width: f64, height: f64);

    fn title(&self) -> String;
    fn set_title(&mut self, title: &str);

    fn state(&self) -> WindowState;
    fn set_state(&mut self, state: WindowState);

    /// Bring the window to the front and give it focus.
    fn activate(&mut self);

    /// Drop always-on-top. Platforms without z-order lowering do nothing.
    fn lower(&mut self) {}

    /// Pixel size of the screen containing the window, if one can be found.
    fn screen_size(&self) -> Option<(i32, i32)>;

    fn close(&mut self);
}
