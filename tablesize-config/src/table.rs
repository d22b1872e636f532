use knuffel::errors::DecodeError;

/// Options of the `table` section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Table {
    /// Master switch for resizing objects in the editing surface.
    pub object_resizing: bool,
    /// Whether drag bars are attached to table column boundaries.
    pub resize_bars: bool,
    /// Unit that tables are converted to before a resize starts.
    pub sizing: SizingPolicy,
}

/// Unit a table is forced into when a resize starts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SizingPolicy {
    /// Keep whatever unit the table is declared in.
    #[default]
    Unforced,
    /// Convert percentage tables to absolute pixels.
    Pixels,
    /// Convert non-percentage tables to percentages.
    Percentages,
    /// Like `Percentages`, but meant for tables that should follow their container.
    Responsive,
}

impl SizingPolicy {
    pub fn is_pixels_forced(self) -> bool {
        self == Self::Pixels
    }

    pub fn is_percentages_forced(self) -> bool {
        self == Self::Percentages
    }

    pub fn is_responsive_forced(self) -> bool {
        self == Self::Responsive
    }
}

impl Default for Table {
    fn default() -> Self {
        Self {
            object_resizing: true,
            resize_bars: true,
            sizing: SizingPolicy::Unforced,
        }
    }
}

impl Table {
    /// Drag bars only exist while object resizing as a whole is enabled.
    pub fn has_resize_bars(&self) -> bool {
        self.object_resizing && self.resize_bars
    }
}

#[derive(knuffel::Decode, Debug, Clone, PartialEq)]
struct TableNodes {
    #[knuffel(child, unwrap(argument), default = true)]
    object_resizing: bool,
    #[knuffel(child, unwrap(argument), default = true)]
    resize_bars: bool,
    #[knuffel(child)]
    force_pixels: bool,
    #[knuffel(child)]
    force_percentages: bool,
    #[knuffel(child)]
    force_responsive: bool,
}

impl From<TableNodes> for Table {
    fn from(nodes: TableNodes) -> Self {
        let sizing = if nodes.force_pixels {
            SizingPolicy::Pixels
        } else if nodes.force_percentages {
            SizingPolicy::Percentages
        } else if nodes.force_responsive {
            SizingPolicy::Responsive
        } else {
            SizingPolicy::Unforced
        };

        Self {
            object_resizing: nodes.object_resizing,
            resize_bars: nodes.resize_bars,
            sizing,
        }
    }
}

impl<S: knuffel::traits::ErrorSpan> knuffel::Decode<S> for Table {
    fn decode_node(
        node: &knuffel::ast::SpannedNode<S>,
        ctx: &mut knuffel::decode::Context<S>,
    ) -> Result<Self, DecodeError<S>> {
        let mut forced: Option<String> = None;

        for child in node.children() {
            let name = &**child.node_name;
            if !matches!(name, "force-pixels" | "force-percentages" | "force-responsive") {
                continue;
            }

            // Only one unit can win when a resize starts.
            match &forced {
                Some(previous) => ctx.emit_error(DecodeError::unexpected(
                    child,
                    "node",
                    format!("`{name}` conflicts with `{previous}`"),
                )),
                None => forced = Some(name.to_owned()),
            }
        }

        <TableNodes as knuffel::Decode<S>>::decode_node(node, ctx).map(Self::from)
    }
}
