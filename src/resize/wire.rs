//! Where resize bars are attached.

use super::EditorHost;

/// Container that resize bars are rendered into.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeWire<E> {
    root: E,
    is_custom: bool,
}

impl<E> ResizeWire<E> {
    /// Wire spanning a whole editing surface.
    pub fn only(root: E) -> Self {
        Self {
            root,
            is_custom: false,
        }
    }

    /// Wire living in a container provided by the host, e.g. for inline editors.
    pub fn custom(root: E) -> Self {
        Self {
            root,
            is_custom: true,
        }
    }

    pub fn root(&self) -> &E {
        &self.root
    }

    pub fn is_custom(&self) -> bool {
        self.is_custom
    }
}

/// Returns the host-provided wire, or one wrapping the whole editor body.
pub fn get<H: EditorHost>(host: &H) -> ResizeWire<H::Element> {
    match host.custom_wire_root() {
        Some(root) => ResizeWire::custom(root),
        None => ResizeWire::only(host.body()),
    }
}

/// Releases a wire obtained from [`get`].
///
/// Only custom wires own anything on the host side.
pub fn remove<H: EditorHost>(host: &mut H, wire: &ResizeWire<H::Element>) {
    if wire.is_custom() {
        host.release_wire(wire);
    }
}
