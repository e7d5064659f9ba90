use crate::grid::{Cell, Orientation};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Marker {
    Exploring,
    PathSuccess,
    Abandoned,
    Entry,
    Exit,
}

/// Receives notifications from the generator and the solver. Nothing a
/// surface does can affect the algorithms.
pub trait DrawingSurface {
    /// A wall was opened.
    fn draw_wall(&mut self, cell: Cell, orientation: Orientation);
    fn draw_marker(&mut self, cell: Cell, marker: Marker);
    /// The solver entered a cell.
    fn visit(&mut self, _cell: Cell) {}
}

impl DrawingSurface for () {
    fn draw_wall(&mut self, _cell: Cell, _orientation: Orientation) {}
    fn draw_marker(&mut self, _cell: Cell, _marker: Marker) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Wall(Cell, Orientation),
    Marker(Cell, Marker),
    Visit(Cell),
}

/// Records every notification in arrival order.
#[derive(Clone, Debug, Default)]
pub struct Trace {
    pub events: Vec<Event>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn visits(&self) -> impl Iterator<Item = Cell> + '_ {
        self.events.iter().filter_map(|event| match event {
            Event::Visit(cell) => Some(*cell),
            _ => None,
        })
    }

    pub fn marked(&self, marker: Marker) -> impl Iterator<Item = Cell> + '_ {
        self.events.iter().filter_map(move |event| match event {
            Event::Marker(cell, m) if *m == marker => Some(*cell),
            _ => None,
        })
    }

    pub fn walls(&self) -> impl Iterator<Item = (Cell, Orientation)> + '_ {
        self.events.iter().filter_map(|event| match event {
            Event::Wall(cell, orientation) => Some((*cell, *orientation)),
            _ => None,
        })
    }
}

impl DrawingSurface for Trace {
    fn draw_wall(&mut self, cell: Cell, orientation: Orientation) {
        self.events.push(Event::Wall(cell, orientation));
    }

    fn draw_marker(&mut self, cell: Cell, marker: Marker) {
        self.events.push(Event::Marker(cell, marker));
    }

    fn visit(&mut self, cell: Cell) {
        self.events.push(Event::Visit(cell));
    }
}
