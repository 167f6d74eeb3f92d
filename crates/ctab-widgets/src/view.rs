#![forbid(unsafe_code)]

//! The incremental college table.
//!
//! Screen layout, top to bottom:
//!
//! ```text
//! ┌ search box ───────────────────────────────────────────┐
//! │ header (click to sort)                                 │
//! │ rows: the first `window` of the sorted, filtered list  │
//! │ ...                                                    │
//! └ status: shown/matches, active sort ────────────────────┘
//! ```
//!
//! Every sort or filter change recomputes the full order once and resets the
//! window to one batch. Scrolling only moves the viewport; when the viewport
//! touches the bottom the window grows by one batch.

use std::fmt;
use std::sync::Arc;

use ctab_core::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ctab_core::geometry::Rect;
use ctab_model::college::display_number;
use ctab_model::{College, SearchFilter, SortDirection, SortKey, SortPolicy, VisibleWindow, order};
use ctab_render::{Buffer, Color, Style};

use crate::decoration::{Decoration, RandomIcons};
use crate::input::SearchInput;
use crate::scroll::ScrollGeometry;
use crate::table::{Constraint, Row, Table, TableCell, TableState};
use crate::{StatefulWidget, Widget};

/// Placeholder shown in the empty search box.
pub const SEARCH_PLACEHOLDER: &str = "Search by college name";

/// Rows moved per mouse wheel notch.
const WHEEL_STEP: isize = 3;

/// A table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// "Table ID", sorts by id.
    Id,
    /// "College Name", shown after the row icon.
    Name,
    /// "Rating".
    Rating,
    /// "Fees".
    Fees,
    /// "User Review".
    Review,
    /// "Featured", not sortable.
    Featured,
}

impl Column {
    /// All columns, left to right.
    pub const ALL: [Column; 6] = [
        Column::Id,
        Column::Name,
        Column::Rating,
        Column::Fees,
        Column::Review,
        Column::Featured,
    ];

    /// Header text.
    pub const fn title(self) -> &'static str {
        match self {
            Column::Id => "Table ID",
            Column::Name => "College Name",
            Column::Rating => "Rating",
            Column::Fees => "Fees",
            Column::Review => "User Review",
            Column::Featured => "Featured",
        }
    }

    /// The key a header click sorts by. `Featured` is not sortable.
    pub const fn sort_key(self) -> Option<SortKey> {
        match self {
            Column::Id => Some(SortKey::Id),
            Column::Name => Some(SortKey::Name),
            Column::Rating => Some(SortKey::Rating),
            Column::Fees => Some(SortKey::Fees),
            Column::Review => Some(SortKey::Review),
            Column::Featured => None,
        }
    }

    /// The column showing `key`.
    pub const fn for_key(key: SortKey) -> Self {
        match key {
            SortKey::Id => Column::Id,
            SortKey::Name => Column::Name,
            SortKey::Rating => Column::Rating,
            SortKey::Fees => Column::Fees,
            SortKey::Review => Column::Review,
        }
    }

    const fn constraint(self) -> Constraint {
        match self {
            Column::Id => Constraint::Fixed(10),
            Column::Name => Constraint::Fill,
            Column::Rating => Constraint::Fixed(8),
            Column::Fees => Constraint::Fixed(10),
            Column::Review => Constraint::Fixed(13),
            Column::Featured => Constraint::Fixed(8),
        }
    }
}

fn arrow(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Ascending => "▲",
        SortDirection::Descending => "▼",
    }
}

/// Search box, sortable header, and a batch-wise growing list of colleges.
pub struct IncrementalTableView {
    source: Arc<[College]>,
    policy: SortPolicy,
    filter: SearchFilter,
    search: SearchInput,
    window: VisibleWindow,
    /// Sorted, filtered positions into `source`.
    order: Vec<usize>,
    table: TableState,
    decoration: Box<dyn Decoration>,
    /// Where the table (header included) was last drawn.
    table_area: Rect,
}

impl fmt::Debug for IncrementalTableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IncrementalTableView")
            .field("rows", &self.source.len())
            .field("policy", &self.policy)
            .field("search", &self.filter.term())
            .field("window", &self.window)
            .field("matches", &self.order.len())
            .field("table", &self.table)
            .finish_non_exhaustive()
    }
}

impl IncrementalTableView {
    /// A view over `source`, sorted by id ascending, with no filter.
    pub fn new(source: Arc<[College]>) -> Self {
        let mut view = Self {
            source,
            policy: SortPolicy::default(),
            filter: SearchFilter::default(),
            search: SearchInput::new().with_placeholder(SEARCH_PLACEHOLDER),
            window: VisibleWindow::new(),
            order: Vec::new(),
            table: TableState::default(),
            decoration: Box::new(RandomIcons::new(0)),
            table_area: Rect::default(),
        };
        view.recompute();
        view
    }

    /// Replace the row icon source.
    #[must_use]
    pub fn with_decoration(mut self, decoration: impl Decoration + 'static) -> Self {
        self.decoration = Box::new(decoration);
        self
    }

    // --- Accessors ---

    /// The rows currently shown (the window over the sorted, filtered order).
    pub fn visible_rows(&self) -> Vec<&College> {
        self.window
            .visible_slice(&self.order)
            .iter()
            .map(|&i| &self.source[i])
            .collect()
    }

    /// Number of records matching the search.
    pub fn total_matches(&self) -> usize {
        self.order.len()
    }

    /// Active sort.
    pub fn sort_policy(&self) -> SortPolicy {
        self.policy
    }

    /// Current search text.
    pub fn search(&self) -> &str {
        self.search.value()
    }

    /// Current window.
    pub fn window(&self) -> VisibleWindow {
        self.window
    }

    /// Table scroll state as of the last render.
    pub fn table_state(&self) -> TableState {
        self.table
    }

    /// Scroll geometry of the body, in rows.
    pub fn geometry(&self) -> ScrollGeometry {
        ScrollGeometry::from_rows(
            self.table.offset,
            self.table.viewport,
            self.window.visible_len(self.order.len()),
        )
    }

    // --- Operations ---

    /// Replace the search text. A different term refilters and resets the
    /// window; the same term leaves everything as it is.
    pub fn set_search(&mut self, term: impl Into<String>) {
        let before = self.search.value().to_owned();
        self.search.set_value(term);
        if self.search.value() != before {
            self.apply_search();
        }
    }

    /// A click on `column`'s header.
    ///
    /// Sortable columns toggle the sort policy, recompute, and reset the
    /// window. Returns `false` for the non-sortable `Featured` column.
    pub fn click_header(&mut self, column: Column) -> bool {
        let Some(key) = column.sort_key() else {
            return false;
        };
        self.policy.toggle(key);
        ctab_core::debug!(
            key = %self.policy.key,
            direction = ?self.policy.direction,
            "sort changed"
        );
        self.recompute();
        true
    }

    /// Grow the window by one batch if `geometry` is at the bottom and more
    /// matches remain. Returns `true` if the window grew.
    pub fn on_scroll(&mut self, geometry: ScrollGeometry) -> bool {
        if !geometry.is_at_bottom() {
            return false;
        }
        let grew = self.window.grow_within(self.order.len());
        if grew {
            ctab_core::debug!(
                requested = self.window.requested(),
                matches = self.order.len(),
                "window grown"
            );
        }
        grew
    }

    /// Handle a terminal event. Returns `true` if anything visible changed.
    ///
    /// Arrow keys, paging keys, Home/End, and the mouse wheel scroll the
    /// body. Other keys and pastes edit the search box. A left click on a
    /// header cell sorts by that column.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                let page = self.table.viewport.max(1) as isize;
                match key.code {
                    KeyCode::Up => self.scroll_by(-1),
                    KeyCode::Down => self.scroll_by(1),
                    KeyCode::PageUp => self.scroll_by(-page),
                    KeyCode::PageDown => self.scroll_by(page),
                    KeyCode::Home => {
                        let moved = self.table.scroll_to_top();
                        self.after_scroll(moved)
                    }
                    KeyCode::End => {
                        let shown = self.window.visible_len(self.order.len());
                        let moved = self.table.scroll_to_bottom(shown);
                        self.after_scroll(moved)
                    }
                    _ => self.edit_search(event),
                }
            }
            Event::Paste(_) => self.edit_search(event),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    let (x, y) = mouse.position();
                    self.header_at(x, y)
                        .is_some_and(|column| self.click_header(column))
                }
                MouseEventKind::ScrollUp => self.scroll_by(-WHEEL_STEP),
                MouseEventKind::ScrollDown => self.scroll_by(WHEEL_STEP),
                _ => false,
            },
            _ => false,
        }
    }

    /// The header column under terminal cell `(x, y)`, as of the last render.
    pub fn header_at(&self, x: u16, y: u16) -> Option<Column> {
        let layout = Self::layout_table();
        let (header, _) = layout.areas(self.table_area);
        if !header.contains(x, y) {
            return None;
        }
        layout
            .column_at(self.table_area, x)
            .map(|index| Column::ALL[index])
    }

    // --- Internals ---

    fn scroll_by(&mut self, delta: isize) -> bool {
        let shown = self.window.visible_len(self.order.len());
        let moved = self.table.scroll_by(delta, shown);
        self.after_scroll(moved)
    }

    fn after_scroll(&mut self, moved: bool) -> bool {
        let grew = self.on_scroll(self.geometry());
        moved || grew
    }

    fn edit_search(&mut self, event: &Event) -> bool {
        let before = self.search.value().to_owned();
        let changed = self.search.handle_event(event);
        if self.search.value() != before {
            self.apply_search();
        }
        changed
    }

    fn apply_search(&mut self) {
        self.filter = SearchFilter::new(self.search.value());
        ctab_core::debug!(term = self.filter.term(), "search changed");
        self.recompute();
    }

    /// Rebuild the order from scratch and start over at one batch.
    fn recompute(&mut self) {
        let _span = ctab_core::debug_span!("view_recompute", rows = self.source.len()).entered();
        self.order = order(&self.source, self.policy, &self.filter);
        self.window.reset();
        self.table.offset = 0;
    }

    fn layout_table() -> Table {
        Table::new(Vec::new(), Column::ALL.map(Column::constraint)).header(Row::default())
    }

    fn header_row(&self) -> Row {
        let header_style = Style::new().fg(Color::WHITE).bg(Color::LIGHT_BLUE).bold();
        let cells = Column::ALL.map(|column| {
            if column.sort_key() == Some(self.policy.key) {
                format!("{} {}", column.title(), arrow(self.policy.direction))
            } else {
                column.title().to_owned()
            }
        });
        Row::new(cells).style(header_style)
    }

    fn body_row(college: &College, icon: &str) -> Row {
        let blue = Style::new().fg(Color::BLUE);
        let featured = if college.featured {
            TableCell::new("Yes").style(Style::new().fg(Color::RED))
        } else {
            TableCell::new("No").style(blue)
        };
        let review = college
            .user_review
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        Row::new([
            TableCell::new(college.id.to_string()),
            TableCell::new(format!("{icon} {}", college.name)),
            TableCell::new(display_number(college.rating)).style(blue),
            TableCell::new(display_number(college.fees)).style(blue),
            TableCell::new(review).style(blue),
            featured,
        ])
    }

    // --- Rendering ---

    /// Draw the view into `area`.
    ///
    /// Needs at least three rows (search, header, status) to show any body.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "IncrementalTableView",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        if area.is_empty() {
            return;
        }

        let (search_area, rest) = area.split_top(1);
        let (table_area, status_area) = rest.split_bottom(1);

        self.search.render(search_area, buf);

        let rows: Vec<Row> = self
            .window
            .visible_slice(&self.order)
            .iter()
            .map(|&i| {
                let college = &self.source[i];
                Self::body_row(college, self.decoration.icon(college))
            })
            .collect();
        let table = Table::new(rows, Column::ALL.map(Column::constraint)).header(self.header_row());
        table.render(table_area, buf, &mut self.table);
        self.table_area = table_area;

        let (_, body) = table.areas(table_area);
        if self.order.is_empty() && !body.is_empty() {
            let message = if self.filter.is_empty() {
                "No colleges".to_owned()
            } else {
                format!("No colleges match \"{}\"", self.filter.term())
            };
            buf.draw_str(body.x, body.y, &message, Style::new().dim(), body.right());
        }

        if !status_area.is_empty() {
            let status = format!(
                "{}/{} shown · sorted by {} {}",
                self.window.visible_len(self.order.len()),
                self.order.len(),
                Column::for_key(self.policy.key).title(),
                arrow(self.policy.direction),
            );
            buf.draw_str(
                status_area.x,
                status_area.y,
                &status,
                Style::new().dim(),
                status_area.right(),
            );
        }
    }
}
