//! A terminal surface: grid, selection, renderer, and window bridge wired
//! to the shared frame coordinator.
//!
//! Every mutation that changes what is on screen requests a coordinated
//! redraw. The host's [`RedrawTarget`] is called on the next flush and is
//! expected to call [`TerminalSurface::render`] from its paint handler.

use std::sync::Arc;

use crate::cell::Pen;
use crate::config::SurfaceConfig;
use crate::error::Result;
use crate::frame::{FrameCoordinator, RedrawTarget, SurfaceId};
use crate::grid::Grid;
use crate::index::Point;
use crate::render::{CellMetrics, DrawList, Rgba, RunRenderer};
use crate::selection::{Selection, extract_text};
use crate::window::{HostWindow, WindowCommand, WindowControlBridge, WindowRequest};

/// One embeddable terminal view.
pub struct TerminalSurface<H> {
    id: SurfaceId,
    grid: Grid,
    selection: Selection,
    renderer: RunRenderer,
    draw_list: DrawList,
    coordinator: Arc<FrameCoordinator>,
    target: Arc<dyn RedrawTarget>,
    bridge: WindowControlBridge<H>,
    exit_code: Option<i32>,
}

impl<H: HostWindow> TerminalSurface<H> {
    /// Build a surface from `config`, bound to `host` and repainted through `target`.
    pub fn new(
        config: &SurfaceConfig,
        host: H,
        coordinator: Arc<FrameCoordinator>,
        target: Arc<dyn RedrawTarget>,
    ) -> Result<Self> {
        let grid = Grid::new(config.grid.columns, config.grid.rows)?;
        let metrics = CellMetrics::estimate(config.font.size);
        let renderer = RunRenderer::new(metrics, config.selection_rgba()?);

        let mut bridge = WindowControlBridge::new(host);
        bridge.set_font_size(config.font.size);
        bridge.set_update_title_from_terminal(config.window.update_title_from_terminal);
        bridge.set_close_on_process_exit(config.window.close_on_process_exit);

        let id = SurfaceId::next();
        log::debug!(
            "surface {}: created {}x{}",
            id.get(),
            grid.cols(),
            grid.lines()
        );
        Ok(Self {
            id,
            grid,
            selection: Selection::new(),
            renderer,
            draw_list: DrawList::new(),
            coordinator,
            target,
            bridge,
            exit_code: None,
        })
    }

    pub fn id(&self) -> SurfaceId {
        self.id
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn bridge(&self) -> &WindowControlBridge<H> {
        &self.bridge
    }

    pub fn bridge_mut(&mut self) -> &mut WindowControlBridge<H> {
        &mut self.bridge
    }

    /// Ask the coordinator to repaint this surface on the next frame.
    pub fn request_redraw(&self) {
        self.coordinator.request_redraw(self.id, &self.target);
    }

    /// Apply a styled write from the terminal engine.
    pub fn write(&mut self, text: &str, pen: &Pen) {
        self.grid.write_text(text, pen);
        self.request_redraw();
    }

    /// Resize the grid. Content and selection are discarded.
    pub fn resize(&mut self, cols: usize, lines: usize) -> Result<()> {
        self.grid.resize(cols, lines)?;
        self.selection.clear();
        self.request_redraw();
        Ok(())
    }

    /// Start a drag selection at pixel position `(x, y)`.
    pub fn pointer_pressed(&mut self, x: f32, y: f32) {
        let point = self.caret_at(x, y);
        self.selection.begin(point);
        self.request_redraw();
    }

    /// Extend an in-progress drag selection. Ignored when no drag is active.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        if !self.selection.is_active() {
            return;
        }
        let point = self.caret_at(x, y);
        if point != self.selection.head() {
            self.selection.extend(point);
            self.request_redraw();
        }
    }

    pub fn pointer_released(&mut self) {
        self.selection.end();
    }

    pub fn select_all(&mut self) {
        self.selection
            .select_all(self.grid.cols(), self.grid.lines());
        self.request_redraw();
    }

    /// Drop the selection (escape key or explicit clear).
    pub fn clear_selection(&mut self) {
        if !self.selection.is_empty() {
            self.selection.clear();
            self.request_redraw();
        }
    }

    /// Text under the selection, for copy.
    pub fn selected_text(&self) -> String {
        extract_text(&self.grid, &self.selection)
    }

    /// Rebuild the draw list for the current grid and selection.
    pub fn render(&mut self) -> &DrawList {
        self.renderer
            .render(&self.grid, &self.selection, &mut self.draw_list);
        &self.draw_list
    }

    pub fn set_selection_color(&mut self, color: Rgba) {
        self.renderer.set_selection_color(color);
        self.request_redraw();
    }

    /// Change the font size used for cell geometry and cell-size reports.
    pub fn set_font_size(&mut self, size: f32) {
        self.bridge.set_font_size(size);
        self.renderer.set_metrics(CellMetrics::estimate(size));
        self.request_redraw();
    }

    /// Route a window query through the bridge.
    pub fn handle_request(&mut self, request: &mut WindowRequest) -> bool {
        self.bridge.handle_request(request)
    }

    /// Route a window command through the bridge.
    pub fn handle_command(&mut self, command: &mut WindowCommand) -> bool {
        self.bridge.handle_command(command)
    }

    /// Record the child process exit. Returns whether the host window was closed.
    pub fn process_exited(&mut self, code: Option<i32>) -> bool {
        self.exit_code = code;
        self.bridge.on_process_exited(code)
    }

    /// Exit code reported by [`process_exited`](Self::process_exited).
    pub fn exit_code(&self) -> Option<i32> {
        self.exit_code
    }

    fn caret_at(&self, x: f32, y: f32) -> Point {
        self.renderer
            .metrics()
            .caret_at(x, y, self.grid.cols(), self.grid.lines())
    }
}

impl<H> Drop for TerminalSurface<H> {
    fn drop(&mut self) {
        self.coordinator.remove(self.id);
    }
}
