use tracing::trace;

use super::wire::ResizeWire;
use super::EditorHost;

/// Drag bars registered with the host for one wire.
#[derive(Debug)]
pub struct ResizeBars<E> {
    wire: ResizeWire<E>,
    visible: bool,
}

impl<E: Clone> ResizeBars<E> {
    pub fn attach<H: EditorHost<Element = E>>(host: &mut H, wire: ResizeWire<E>) -> Self {
        host.attach_bars(&wire);
        Self {
            wire,
            visible: true,
        }
    }

    pub fn wire(&self) -> &ResizeWire<E> {
        &self.wire
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show<H: EditorHost<Element = E>>(&mut self, host: &mut H) {
        self.set_visible(host, true);
    }

    pub fn hide<H: EditorHost<Element = E>>(&mut self, host: &mut H) {
        self.set_visible(host, false);
    }

    fn set_visible<H: EditorHost<Element = E>>(&mut self, host: &mut H, visible: bool) {
        if self.visible == visible {
            return;
        }

        trace!("setting resize bars visible: {visible}");
        self.visible = visible;
        host.set_bars_visible(visible);
    }

    pub fn destroy<H: EditorHost<Element = E>>(self, host: &mut H) {
        host.detach_bars(&self.wire);
    }
}
