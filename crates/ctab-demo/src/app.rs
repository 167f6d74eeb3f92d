#![forbid(unsafe_code)]

//! The interactive loop.
//!
//! [`App`] is the terminal-independent part: it routes events to the view,
//! decides when to quit, and keeps a frame buffer the size of the screen.
//! [`run`] wires it to a [`TerminalSession`] and a [`Presenter`].

use std::fmt;
use std::io::{self, BufWriter};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use ctab_core::event::{Event, KeyCode};
use ctab_core::terminal_session::{SessionOptions, TerminalSession};
use ctab_model::{Dataset, DatasetError};
use ctab_render::Buffer;
use ctab_render::presenter::Presenter;
use ctab_widgets::{IncrementalTableView, RandomIcons};

use crate::cli::Opts;

/// How long to wait for input before checking whether to redraw.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Whether the loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Errors that end the program.
#[derive(Debug)]
pub enum AppError {
    /// The dataset could not be loaded.
    Dataset(DatasetError),
    /// Terminal I/O failed.
    Io(io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Dataset(e) => write!(f, "failed to load dataset: {e}"),
            AppError::Io(e) => write!(f, "terminal error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Dataset(e) => Some(e),
            AppError::Io(e) => Some(e),
        }
    }
}

impl From<DatasetError> for AppError {
    fn from(e: DatasetError) -> Self {
        AppError::Dataset(e)
    }
}

impl From<io::Error> for AppError {
    fn from(e: io::Error) -> Self {
        AppError::Io(e)
    }
}

/// The table plus a screen-sized frame buffer.
#[derive(Debug)]
pub struct App {
    view: IncrementalTableView,
    frame: Buffer,
    dirty: bool,
}

impl App {
    /// An app drawing into a `width` x `height` frame.
    pub fn new(view: IncrementalTableView, width: u16, height: u16) -> Self {
        Self {
            view,
            frame: Buffer::new(width.max(1), height.max(1)),
            dirty: true,
        }
    }

    /// The table view.
    pub fn view(&self) -> &IncrementalTableView {
        &self.view
    }

    /// True if the next [`draw`](Self::draw) will repaint.
    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    /// Route one event. Esc and Ctrl+C quit; everything else goes to the view.
    pub fn handle_event(&mut self, event: &Event) -> Flow {
        match event {
            Event::Key(key) if key.is_press() => {
                if key.code == KeyCode::Escape || (key.ctrl() && key.is_char('c')) {
                    ctab_core::info!("quit requested");
                    return Flow::Quit;
                }
            }
            Event::Resize { width, height } => {
                self.resize(*width, *height);
                return Flow::Continue;
            }
            _ => {}
        }
        if self.view.handle_event(event) {
            self.dirty = true;
        }
        Flow::Continue
    }

    /// Match the frame to a new terminal size.
    pub fn resize(&mut self, width: u16, height: u16) {
        let (width, height) = (width.max(1), height.max(1));
        if width != self.frame.width() || height != self.frame.height() {
            ctab_core::debug!(width, height, "resized");
            self.frame = Buffer::new(width, height);
        }
        self.dirty = true;
    }

    /// The current frame, repainted first if anything changed.
    pub fn draw(&mut self) -> &Buffer {
        if self.dirty {
            self.frame.clear();
            let area = self.frame.bounds();
            self.view.render(area, &mut self.frame);
            self.dirty = false;
        }
        &self.frame
    }
}

/// Load the dataset named in `opts`, or the built-in one.
pub fn load_dataset(opts: &Opts) -> Result<Dataset, DatasetError> {
    match &opts.data {
        Some(path) => {
            ctab_core::info!(path = %path.display(), "loading dataset");
            Dataset::from_path(path)
        }
        None => Dataset::builtin(),
    }
}

/// The icon seed from `opts`, or one derived from the clock.
pub fn icon_seed(opts: &Opts) -> u64 {
    opts.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default()
    })
}

/// Run the table until the user quits.
///
/// # Errors
///
/// Dataset load failures and terminal I/O errors.
pub fn run(opts: &Opts) -> Result<(), AppError> {
    let dataset = load_dataset(opts)?;
    let seed = icon_seed(opts);
    ctab_core::info!(rows = dataset.len(), seed, "starting");

    let view = IncrementalTableView::new(dataset.colleges()).with_decoration(RandomIcons::new(seed));

    let session = TerminalSession::new(SessionOptions {
        alternate_screen: true,
        mouse_capture: opts.mouse,
        bracketed_paste: true,
    })?;
    let (width, height) = session.size()?;
    let mut app = App::new(view, width, height);
    let mut presenter = Presenter::new(BufWriter::new(io::stdout()));

    loop {
        if app.needs_redraw() {
            presenter.present(app.draw())?;
        }
        if !session.poll_event(POLL_INTERVAL)? {
            continue;
        }
        let Some(event) = session.read_event()? else {
            continue;
        };
        if matches!(event, Event::Resize { .. }) {
            presenter.invalidate();
        }
        if app.handle_event(&event) == Flow::Quit {
            break;
        }
    }

    ctab_core::info!(
        shown = app.view().visible_rows().len(),
        matches = app.view().total_matches(),
        "exiting"
    );
    Ok(())
}
