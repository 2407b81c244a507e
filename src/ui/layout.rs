use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout regions
pub struct ScreenLayout {
    pub header: Rect,
    pub main: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header (nav tabs)
                Constraint::Min(10),   // Main content area
                Constraint::Length(2), // Footer (alert + key hints)
            ])
            .split(area);

        Self {
            header: chunks[0],
            main: chunks[1],
            footer: chunks[2],
        }
    }
}

/// Dashboard view: toolbar row on top, sensor grid below
pub struct DashboardLayout {
    pub toolbar: Rect,
    pub grid: Rect,
}

impl DashboardLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(6)])
            .split(area);

        Self {
            toolbar: chunks[0],
            grid: chunks[1],
        }
    }
}

/// Split the grid region into up to `count` sensor cells, two per row
pub fn sensor_cells(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return vec![];
    }
    let rows = count.div_ceil(2);
    let row_constraints: Vec<Constraint> = (0..rows)
        .map(|_| Constraint::Ratio(1, rows as u32))
        .collect();
    let row_rects = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    let mut cells = Vec::with_capacity(count);
    for (row, rect) in row_rects.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*rect);
        for col in 0..2 {
            if row * 2 + col < count {
                cells.push(cols[col]);
            }
        }
    }
    cells
}

/// Signal view: control readouts on the left, scope on the right
pub struct SignalLayout {
    pub controls: Rect,
    pub scope: Rect,
}

impl SignalLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Min(20)])
            .split(area);

        Self {
            controls: chunks[0],
            scope: chunks[1],
        }
    }
}
