//! In-memory editor used by the tests.
//!
//! [`TestDom`] lays tables out with a small deterministic model:
//!
//! - A table is as wide as its declared pixel width, a percentage of the body width, or, if
//!   it has no usable width, the sum of its columns at their natural width.
//! - Columns take their declared pixel width or a percentage of the table width. Columns
//!   without a width share what is left.
//! - Columns of a fixed-width table are scaled proportionally to exactly fill the table.
//! - LTR tables start at the left edge of the body, RTL tables end at its right edge.

use std::collections::BTreeMap;

use crate::dom::{Direction, TableDom};
use crate::resize::wire::ResizeWire;
use crate::resize::{EditorHost, ResizeNotification};
use crate::snapshot::{rendered, CellSnapshot, TableSnapshot};


const ROW_HEIGHT: f64 = 24.;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Body,
    Table,
    Row,
    Cell,
}

#[derive(Debug)]
struct Node {
    kind: Kind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    styles: BTreeMap<String, String>,
    attributes: BTreeMap<String, String>,
    direction: Direction,
}

impl Node {
    fn new(kind: Kind, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            parent,
            children: Vec::new(),
            styles: BTreeMap::new(),
            attributes: BTreeMap::new(),
            direction: Direction::Ltr,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Length {
    Pixels(f64),
    Percentage(f64),
    Auto,
}

impl Length {
    fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let parsed = match raw.strip_suffix('%') {
            Some(number) => number.trim().parse().map(Self::Percentage),
            None => raw
                .strip_suffix("px")
                .unwrap_or(raw)
                .trim()
                .parse()
                .map(Self::Pixels),
        };

        match parsed {
            Ok(Self::Pixels(px)) if px < 0. => Self::Auto,
            Ok(Self::Percentage(pc)) if pc < 0. => Self::Auto,
            Ok(length) => length,
            Err(_) => Self::Auto,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct TableLayout {
    left: f64,
    width: f64,
    columns: Vec<f64>,
}

/// Description of a table to add to a [`TestDom`].
#[derive(Debug, Clone)]
pub struct TestTable {
    rows: Vec<usize>,
    width: Option<String>,
    attribute_width: Option<String>,
    cell_widths: Vec<String>,
    direction: Direction,
}

impl TestTable {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self::ragged(&vec![columns; rows])
    }

    pub fn ragged(rows: &[usize]) -> Self {
        Self {
            rows: rows.to_vec(),
            width: None,
            attribute_width: None,
            cell_widths: Vec::new(),
            direction: Direction::Ltr,
        }
    }

    pub fn width(mut self, width: &str) -> Self {
        self.width = Some(width.to_owned());
        self
    }

    pub fn attribute_width(mut self, width: &str) -> Self {
        self.attribute_width = Some(width.to_owned());
        self
    }

    /// Style widths of the columns, applied to the cells of every row.
    pub fn cell_widths(mut self, widths: &[&str]) -> Self {
        self.cell_widths = widths.iter().map(|width| (*width).to_owned()).collect();
        self
    }

    pub fn rtl(mut self) -> Self {
        self.direction = Direction::Rtl;
        self
    }
}

#[derive(Debug)]
pub struct TestDom {
    nodes: Vec<Node>,
    body_width: f64,
    natural_cell_width: f64,

    pub selection: u32,
    pub restored_selections: Vec<u32>,
    pub focus_count: usize,
    pub read_only: bool,
    pub notifications: Vec<ResizeNotification<NodeId>>,
    pub undo_levels: usize,
    pub custom_wire: Option<NodeId>,
    pub attached_bars: Vec<ResizeWire<NodeId>>,
    pub detached_bars: Vec<ResizeWire<NodeId>>,
    pub released_wires: Vec<ResizeWire<NodeId>>,
    pub bars_visible: bool,
}

impl TestDom {
    pub fn new(body_width: f64) -> Self {
        Self {
            nodes: vec![Node::new(Kind::Body, None)],
            body_width,
            natural_cell_width: 100.,
            selection: 1,
            restored_selections: Vec::new(),
            focus_count: 0,
            read_only: false,
            notifications: Vec::new(),
            undo_levels: 0,
            custom_wire: None,
            attached_bars: Vec::new(),
            detached_bars: Vec::new(),
            released_wires: Vec::new(),
            bars_visible: false,
        }
    }

    pub fn body(&self) -> NodeId {
        NodeId(0)
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    fn push(&mut self, kind: Kind, parent: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(kind, Some(parent)));
        self.node_mut(parent).children.push(id);
        id
    }

    /// Adds a detached container element, e.g. to hold resize bars.
    pub fn add_container(&mut self) -> NodeId {
        let body = self.body();
        self.push(Kind::Body, body)
    }

    pub fn add_table(&mut self, desc: TestTable) -> NodeId {
        let body = self.body();
        let table = self.push(Kind::Table, body);
        self.node_mut(table).direction = desc.direction;

        if let Some(width) = desc.width {
            self.node_mut(table).styles.insert("width".to_owned(), width);
        }
        if let Some(width) = desc.attribute_width {
            self.node_mut(table)
                .attributes
                .insert("width".to_owned(), width);
        }

        for columns in desc.rows {
            let row = self.push(Kind::Row, table);
            for idx in 0..columns {
                let cell = self.push(Kind::Cell, row);
                if let Some(width) = desc.cell_widths.get(idx) {
                    self.node_mut(cell)
                        .styles
                        .insert("width".to_owned(), width.clone());
                }
            }
        }

        table
    }

    fn declared_length(&self, id: NodeId) -> Length {
        let node = self.node(id);
        node.styles
            .get("width")
            .or_else(|| node.attributes.get("width"))
            .map_or(Length::Auto, |raw| Length::parse(raw))
    }

    fn table_of(&self, id: NodeId) -> Option<NodeId> {
        let mut current = Some(id);
        while let Some(id) = current {
            let node = self.node(id);
            if node.kind == Kind::Table {
                return Some(id);
            }
            current = node.parent;
        }
        None
    }

    fn cell_index(&self, cell: NodeId) -> (NodeId, usize) {
        let row = self.node(cell).parent.unwrap();
        let idx = self
            .node(row)
            .children
            .iter()
            .position(|child| *child == cell)
            .unwrap();
        (row, idx)
    }

    fn layout(&self, table: NodeId) -> TableLayout {
        let rows = &self.node(table).children;
        let column_count = rows
            .iter()
            .map(|row| self.node(*row).children.len())
            .max()
            .unwrap_or(0);

        let lengths: Vec<Length> = (0..column_count)
            .map(|idx| {
                rows.iter()
                    .filter_map(|row| self.node(*row).children.get(idx))
                    .map(|cell| self.declared_length(*cell))
                    .find(|length| *length != Length::Auto)
                    .unwrap_or(Length::Auto)
            })
            .collect();

        let (width, columns) = match self.declared_length(table) {
            Length::Pixels(width) => (width, self.fill_columns(&lengths, width)),
            Length::Percentage(pc) => {
                let width = pc / 100. * self.body_width;
                (width, self.fill_columns(&lengths, width))
            }
            Length::Auto => {
                let columns: Vec<f64> = lengths
                    .iter()
                    .map(|length| match *length {
                        Length::Pixels(width) => width,
                        Length::Percentage(pc) => pc / 100. * self.body_width,
                        Length::Auto => self.natural_cell_width,
                    })
                    .collect();
                (columns.iter().sum(), columns)
            }
        };

        let left = match self.node(table).direction {
            Direction::Ltr => 0.,
            Direction::Rtl => self.body_width - width,
        };

        TableLayout {
            left,
            width,
            columns,
        }
    }

    fn fill_columns(&self, lengths: &[Length], width: f64) -> Vec<f64> {
        let mut columns: Vec<Option<f64>> = lengths
            .iter()
            .map(|length| match *length {
                Length::Pixels(px) => Some(px),
                Length::Percentage(pc) => Some(pc / 100. * width),
                Length::Auto => None,
            })
            .collect();

        let fixed: f64 = columns.iter().flatten().sum();
        let auto_count = columns.iter().filter(|column| column.is_none()).count();
        if auto_count > 0 {
            let share = f64::max(0., width - fixed) / auto_count as f64;
            for column in columns.iter_mut().filter(|column| column.is_none()) {
                *column = Some(share);
            }
        }

        let mut columns: Vec<f64> = columns.into_iter().flatten().collect();
        let total: f64 = columns.iter().sum();
        if columns.is_empty() {
            return columns;
        }

        if total <= 0. {
            let share = width / columns.len() as f64;
            columns.iter_mut().for_each(|column| *column = share);
        } else if (total - width).abs() > 1e-9 {
            let scale = width / total;
            columns.iter_mut().for_each(|column| *column *= scale);
        }

        columns
    }

    pub fn snapshot(&self, table: &NodeId) -> TableSnapshot {
        let declared = |id: &NodeId| {
            let node = self.node(*id);
            node.styles
                .get("width")
                .or_else(|| node.attributes.get("width"))
                .cloned()
        };

        TableSnapshot {
            width: declared(table),
            rendered_width: rendered(self.rendered_width(table)),
            rows: self
                .rows(table)
                .iter()
                .map(|row| {
                    self.cells(row)
                        .iter()
                        .map(|cell| CellSnapshot {
                            width: declared(cell),
                            rendered_width: rendered(self.rendered_width(cell)),
                        })
                        .collect()
                })
                .collect(),
        }
    }

    /// Declared pixel widths of the first row's cells, `None` if any is not in pixels.
    pub fn declared_pixel_columns(&self, table: &NodeId) -> Option<Vec<f64>> {
        let row = *self.rows(table).first()?;
        self.cells(&row)
            .iter()
            .map(|cell| match self.declared_length(*cell) {
                Length::Pixels(px) => Some(px),
                _ => None,
            })
            .collect()
    }

    /// Declared table width in pixels, `None` if it is not in pixels.
    pub fn declared_pixel_width(&self, table: &NodeId) -> Option<f64> {
        match self.declared_length(*table) {
            Length::Pixels(px) => Some(px),
            _ => None,
        }
    }
}

impl TableDom for TestDom {
    type Element = NodeId;

    fn rendered_width(&self, element: &NodeId) -> f64 {
        let node = self.node(*element);
        match node.kind {
            Kind::Body => self.body_width,
            Kind::Table | Kind::Row => self.layout(self.table_of(*element).unwrap()).width,
            Kind::Cell => {
                let layout = self.layout(self.table_of(*element).unwrap());
                let (_, idx) = self.cell_index(*element);
                layout.columns[idx]
            }
        }
    }

    fn rendered_height(&self, element: &NodeId) -> f64 {
        let node = self.node(*element);
        match node.kind {
            Kind::Body => f64::from(u16::MAX),
            Kind::Table => node.children.len() as f64 * ROW_HEIGHT,
            Kind::Row | Kind::Cell => ROW_HEIGHT,
        }
    }

    fn rendered_left(&self, element: &NodeId) -> f64 {
        let node = self.node(*element);
        match node.kind {
            Kind::Body => 0.,
            Kind::Table | Kind::Row => self.layout(self.table_of(*element).unwrap()).left,
            Kind::Cell => {
                let table = self.table_of(*element).unwrap();
                let layout = self.layout(table);
                let (_, idx) = self.cell_index(*element);
                let before: f64 = layout.columns[..idx].iter().sum();
                match self.node(table).direction {
                    Direction::Ltr => layout.left + before,
                    Direction::Rtl => layout.left + layout.width - before - layout.columns[idx],
                }
            }
        }
    }

    fn style(&self, element: &NodeId, property: &str) -> Option<String> {
        self.node(*element).styles.get(property).cloned()
    }

    fn set_style(&mut self, element: &NodeId, property: &str, value: &str) {
        self.node_mut(*element)
            .styles
            .insert(property.to_owned(), value.to_owned());
    }

    fn remove_style(&mut self, element: &NodeId, property: &str) {
        self.node_mut(*element).styles.remove(property);
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.node(*element).attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, element: &NodeId, name: &str, value: &str) {
        self.node_mut(*element)
            .attributes
            .insert(name.to_owned(), value.to_owned());
    }

    fn remove_attribute(&mut self, element: &NodeId, name: &str) {
        self.node_mut(*element).attributes.remove(name);
    }

    fn direction(&self, element: &NodeId) -> Direction {
        self.table_of(*element)
            .map_or(Direction::Ltr, |table| self.node(table).direction)
    }

    fn parent(&self, element: &NodeId) -> Option<NodeId> {
        self.node(*element).parent
    }

    fn rows(&self, table: &NodeId) -> Vec<NodeId> {
        self.node(*table).children.clone()
    }

    fn cells(&self, row: &NodeId) -> Vec<NodeId> {
        self.node(*row).children.clone()
    }
}

impl EditorHost for TestDom {
    type Selection = u32;

    fn selection(&self) -> Option<u32> {
        Some(self.selection)
    }

    fn restore_selection(&mut self, selection: u32) {
        self.restored_selections.push(selection);
    }

    fn focus(&mut self) {
        self.focus_count += 1;
    }

    fn is_read_only(&self) -> bool {
        self.read_only
    }

    fn notify(&mut self, notification: ResizeNotification<NodeId>) {
        self.notifications.push(notification);
    }

    fn add_undo_level(&mut self) {
        self.undo_levels += 1;
    }

    fn body(&self) -> NodeId {
        NodeId(0)
    }

    fn custom_wire_root(&self) -> Option<NodeId> {
        self.custom_wire
    }

    fn release_wire(&mut self, wire: &ResizeWire<NodeId>) {
        self.released_wires.push(wire.clone());
    }

    fn attach_bars(&mut self, wire: &ResizeWire<NodeId>) {
        self.attached_bars.push(wire.clone());
        self.bars_visible = true;
    }

    fn detach_bars(&mut self, wire: &ResizeWire<NodeId>) {
        self.detached_bars.push(wire.clone());
        self.bars_visible = false;
    }

    fn set_bars_visible(&mut self, visible: bool) {
        self.bars_visible = visible;
    }
}

#[test]
fn test_dom_layout() {
    let mut dom = TestDom::new(1000.);
    let fixed = dom.add_table(
        TestTable::new(2, 3)
            .width("600px")
            .cell_widths(&["100px", "20%"]),
    );
    let auto = dom.add_table(TestTable::new(1, 2));

    let cells = dom.table_cells(&fixed);
    let widths: Vec<_> = cells.iter().map(|cell| dom.rendered_width(cell)).collect();
    assert_eq!(widths, [100., 120., 380., 100., 120., 380.]);
    assert_eq!(dom.rendered_left(&cells[2]), 220.);
    assert_eq!(dom.rendered_height(&fixed), 48.);

    assert_eq!(dom.rendered_width(&auto), 200.);
    assert_eq!(dom.parent(&auto), Some(dom.body()));
}

#[test]
fn test_dom_scales_overfull_tables() {
    let mut dom = TestDom::new(1000.);
    let table = dom.add_table(
        TestTable::new(1, 2)
            .width("300px")
            .cell_widths(&["300px", "300px"]),
    );

    let cells = dom.table_cells(&table);
    assert_eq!(dom.rendered_width(&cells[0]), 150.);
    assert_eq!(dom.rendered_width(&cells[1]), 150.);
}

#[test]
fn test_dom_rtl_positions() {
    let mut dom = TestDom::new(1000.);
    let table = dom.add_table(
        TestTable::new(1, 2)
            .width("400px")
            .cell_widths(&["100px", "300px"])
            .rtl(),
    );

    let cells = dom.table_cells(&table);
    assert_eq!(dom.rendered_left(&table), 600.);
    assert_eq!(dom.rendered_left(&cells[0]), 900.);
    assert_eq!(dom.rendered_left(&cells[1]), 600.);
    assert_eq!(dom.direction(&cells[1]), Direction::Rtl);
}
