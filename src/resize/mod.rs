//! Interactive table resizing.
//!
//! [`ResizeHandler`] drives a table resize gesture from start to finish. The host feeds it
//! named events as they happen:
//!
//! - `init`: the editor is ready. Registers the resize wire and, if enabled, the drag bars.
//! - `start_drag`: the user grabbed a bar. Remembers the selection to restore afterwards.
//! - `before_resize` / `object_resize_start`: a table is about to be resized. Converts it
//!   into the forced unit and captures its starting size. `Idle -> Dragging`.
//! - `drag`: one pointer move. Rewrites the table and column widths.
//! - `after_resize` / `object_resized`: the resize finished. `Dragging -> Idle`.
//! - `cancel`: the gesture was abandoned. `Dragging -> Idle`, widths stay as last committed.
//! - `mode_switch`: the editor entered or left read-only mode. Shows or hides the bars.
//! - `destroy`: the editor is going away. `* -> Destroyed`.
//!
//! Events that don't apply to the current state are ignored.

use std::fmt;

use tablesize_config::Table;
use tracing::{debug, trace, warn};

use crate::dom::TableDom;
use crate::geometry::{remove_data_style, rendered_height, rendered_width};

mod bars;
mod session;
mod types;
pub mod wire;

pub use self::bars::ResizeBars;
pub use self::session::ResizeSession;
pub use self::types::{DragTarget, HandlerState, ResizeNotification};
use self::wire::ResizeWire;

/// Editor hosting the tables.
pub trait EditorHost: TableDom {
    /// Opaque snapshot of the editor selection.
    type Selection: fmt::Debug;

    fn selection(&self) -> Option<Self::Selection>;

    fn restore_selection(&mut self, selection: Self::Selection);

    fn focus(&mut self);

    fn is_read_only(&self) -> bool;

    fn notify(&mut self, notification: ResizeNotification<Self::Element>);

    /// Records an undo checkpoint.
    fn add_undo_level(&mut self);

    /// Root element of the editing surface.
    fn body(&self) -> Self::Element;

    /// Container for resize bars, if the host wants them somewhere else than the body.
    fn custom_wire_root(&self) -> Option<Self::Element> {
        None
    }

    /// Releases a custom wire container.
    fn release_wire(&mut self, _wire: &ResizeWire<Self::Element>) {}

    /// Starts rendering drag bars for tables within the wire.
    fn attach_bars(&mut self, wire: &ResizeWire<Self::Element>);

    /// Stops rendering drag bars and stops delivering drag events for them.
    fn detach_bars(&mut self, wire: &ResizeWire<Self::Element>);

    fn set_bars_visible(&mut self, visible: bool);
}

#[derive(Debug)]
enum State<E> {
    Idle,
    Dragging(ResizeSession<E>),
    Destroyed,
}

/// Table resize controller for one editor.
#[derive(Debug)]
pub struct ResizeHandler<H: EditorHost> {
    options: Table,
    state: State<H::Element>,
    wire: Option<ResizeWire<H::Element>>,
    bars: Option<ResizeBars<H::Element>>,
    selection: Option<H::Selection>,
}

impl<H: EditorHost> ResizeHandler<H> {
    pub fn new(options: Table) -> Self {
        Self {
            options,
            state: State::Idle,
            wire: None,
            bars: None,
            selection: None,
        }
    }

    pub fn options(&self) -> &Table {
        &self.options
    }

    pub fn state(&self) -> HandlerState {
        match self.state {
            State::Idle => HandlerState::Idle,
            State::Dragging(_) => HandlerState::Dragging,
            State::Destroyed => HandlerState::Destroyed,
        }
    }

    /// The session of the resize in progress, if any.
    pub fn session(&self) -> Option<&ResizeSession<H::Element>> {
        match &self.state {
            State::Dragging(session) => Some(session),
            _ => None,
        }
    }

    /// Drag bars, if they were registered.
    pub fn resize_bars(&self) -> Option<&ResizeBars<H::Element>> {
        self.bars.as_ref()
    }

    /// The registered wire, or one spanning the whole editor body.
    pub fn wire(&self, host: &H) -> ResizeWire<H::Element> {
        self.wire
            .clone()
            .unwrap_or_else(|| ResizeWire::only(host.body()))
    }

    pub fn init(&mut self, host: &mut H) {
        if matches!(self.state, State::Destroyed) {
            warn!("ignoring init of a destroyed resize handler");
            return;
        }

        if self.wire.is_some() {
            debug!("resize handler is already initialized");
            return;
        }

        let wire = wire::get(&*host);
        if self.options.has_resize_bars() {
            debug!("attaching table resize bars to {:?}", wire.root());
            self.bars = Some(ResizeBars::attach(host, wire.clone()));
        } else {
            debug!("table resize bars are disabled");
        }
        self.wire = Some(wire);
    }

    pub fn start_drag(&mut self, host: &H) {
        if self.bars.is_none() {
            return;
        }

        self.selection = host.selection();
    }

    /// A drag on one of the bars is about to resize `table`.
    pub fn before_resize(&mut self, host: &mut H, table: &H::Element) {
        if self.bars.is_none() {
            return;
        }

        let width = rendered_width(&*host, table);
        let height = rendered_height(&*host, table);
        host.notify(ResizeNotification::Start {
            target: table.clone(),
            width,
            height,
        });

        self.object_resize_start(host, table);
    }

    /// A resize of `table` is starting, through the bars or the host's own handles.
    pub fn object_resize_start(&mut self, host: &mut H, table: &H::Element) {
        let _span = tracy_client::span!("ResizeHandler::object_resize_start");

        match &self.state {
            State::Destroyed => return,
            State::Dragging(session) => {
                warn!(
                    "resize of {table:?} started while {:?} is still being resized",
                    session.table
                );
            }
            State::Idle => (),
        }

        let session = ResizeSession::begin(host, table, self.options.sizing);
        self.state = State::Dragging(session);
    }

    /// Applies one pointer move of `raw_delta` pixels since the previous one.
    pub fn drag(&mut self, host: &mut H, target: DragTarget, raw_delta: f64) {
        let State::Dragging(session) = &mut self.state else {
            trace!("ignoring drag without a resize in progress");
            return;
        };

        session.drag(host, target, raw_delta);
    }

    /// A drag on one of the bars finished resizing `table`.
    pub fn after_resize(&mut self, host: &mut H, table: &H::Element) {
        let _span = tracy_client::span!("ResizeHandler::after_resize");

        if self.bars.is_none() {
            return;
        }

        let State::Dragging(session) = &self.state else {
            trace!("ignoring resize end without a resize in progress");
            return;
        };

        if &session.table != table {
            warn!("ignoring resize end of {table:?}, expected {:?}", session.table);
            return;
        }
        self.state = State::Idle;

        remove_data_style(host, table);

        if let Some(selection) = self.selection.take() {
            host.restore_selection(selection);
            host.focus();
        }

        let width = rendered_width(&*host, table);
        let height = rendered_height(&*host, table);
        debug!("finished resizing {table:?} to {width}x{height}");
        host.notify(ResizeNotification::End {
            target: table.clone(),
            width,
            height,
        });

        host.add_undo_level();
    }

    /// The host's own handles finished resizing `table` to `width` pixels.
    pub fn object_resized(&mut self, host: &mut H, table: &H::Element, width: f64) {
        let State::Dragging(session) = &self.state else {
            trace!("ignoring object resize without a resize in progress");
            return;
        };

        if &session.table != table {
            warn!("ignoring object resize of {table:?}, expected {:?}", session.table);
            return;
        }

        session.finish_object_resize(host, width);
        self.state = State::Idle;
    }

    /// Abandons the resize in progress, keeping the widths of the last drag.
    pub fn cancel(&mut self) {
        if let State::Dragging(session) = &self.state {
            debug!("cancelling resize of {:?}", session.table);
            self.state = State::Idle;
        }
    }

    /// The editor entered or left read-only mode.
    pub fn mode_switch(&mut self, host: &mut H) {
        let read_only = host.is_read_only();
        if let Some(bars) = &mut self.bars {
            if read_only {
                bars.hide(host);
            } else {
                bars.show(host);
            }
        }
    }

    /// Unregisters everything from the host. Safe to call more than once.
    pub fn destroy(&mut self, host: &mut H) {
        if let Some(bars) = self.bars.take() {
            bars.destroy(host);
        }

        if let Some(wire) = self.wire.take() {
            wire::remove(host, &wire);
        }

        self.selection = None;
        if !matches!(self.state, State::Destroyed) {
            debug!("destroying resize handler");
            self.state = State::Destroyed;
        }
    }
}
