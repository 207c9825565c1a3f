//! Terminal host for the starfield.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Style, Stylize},
    text::Line,
    widgets::Block,
};
use tracing::{debug, info};
use universe_config::Config;
use universe_core::{Size, THEME_ATTRIBUTE};
use universe_starfield::{CanvasSurface, MOUNT_ID, Page, PageEvent, Starfield, StarfieldOptions};

/// Rows reserved below the sky for the help line.
const HELP_ROWS: u16 = 1;

/// The main application: a host page, the starfield living in it and the
/// terminal loop driving both.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    config: Config,
    page: Page<CanvasSurface>,
    starfield: Option<Starfield<StdRng>>,
}

impl App {
    /// Construct a new instance of [`App`] with a page that is still loading.
    pub fn new(config: Config) -> Self {
        let mut page = Page::loading(Size::default());
        page.set_attribute(THEME_ATTRIBUTE, &config.appearance.theme);
        Self {
            running: false,
            config,
            page,
            starfield: None,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let area = terminal.size()?;
        self.page.resize(sky_viewport(area.width, area.height));
        self.page.mark_interactive();

        let interval = self.config.starfield.frame_interval();
        info!(?interval, "entering frame loop");

        self.running = true;
        while self.running {
            self.tick();
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events(interval)?;
        }

        if let Some(starfield) = self.starfield.as_mut() {
            starfield.stop(&mut self.page);
        }
        info!("frame loop finished");
        Ok(())
    }

    /// One display tick: deliver page events, then run due frame callbacks.
    fn tick(&mut self) {
        for event in self.page.drain_events() {
            match event {
                PageEvent::Ready => self.boot(),
                other => {
                    if let Some(starfield) = self.starfield.as_mut() {
                        starfield.handle_event(&mut self.page, &other);
                    }
                }
            }
        }

        for request in self.page.frames_mut().take_due() {
            if let Some(starfield) = self.starfield.as_mut() {
                starfield.on_animation_frame(&mut self.page, request);
            }
        }
    }

    /// Start the starfield if the page is ready for it.
    fn boot(&mut self) {
        let options = StarfieldOptions {
            star_count: self.config.starfield.star_count,
        };
        let seed = self.config.starfield.seed;
        if let Some(starfield) = Starfield::boot(&mut self.page, options, || make_rng(seed)) {
            self.starfield = Some(starfield);
        }
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let theme = self.page.theme();
        let [sky, help] = Layout::vertical([Constraint::Fill(1), Constraint::Length(HELP_ROWS)])
            .areas(frame.area());

        match self.page.surface_by_id(MOUNT_ID) {
            Some(surface) => frame.render_widget(surface.canvas(theme.background()), sky),
            None => frame.render_widget(Block::new().bg(theme.background()), sky),
        }

        let fg = theme.foreground();
        let paused = self.starfield.as_ref().is_some_and(|s| !s.is_running());
        let mut spans = vec![
            "q".bold().fg(fg),
            " quit  ".dark_gray(),
            "t".bold().fg(fg),
            " toggle theme  ".dark_gray(),
            "r".bold().fg(fg),
            " reset  ".dark_gray(),
            "space".bold().fg(fg),
            " pause".dark_gray(),
        ];
        if paused {
            spans.push("  [paused]".italic().fg(fg));
        }
        let line = Line::from(spans)
            .centered()
            .style(Style::new().bg(theme.background()));
        frame.render_widget(line, help);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits at most one frame interval so the animation keeps moving.
    fn handle_crossterm_events(&mut self, timeout: Duration) -> color_eyre::Result<()> {
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(columns, rows) => self.page.resize(sky_viewport(columns, rows)),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('t')) => self.toggle_theme(),
            (_, KeyCode::Char('r')) => self.reinitialize(),
            (_, KeyCode::Char(' ')) => self.toggle_pause(),
            _ => {}
        }
    }

    /// Flip the page theme attribute; the starfield hears about it on the
    /// next tick.
    fn toggle_theme(&mut self) {
        let next = self.page.theme().toggle();
        debug!(theme = next.as_attribute(), "theme toggled");
        self.page.set_attribute(THEME_ATTRIBUTE, next.as_attribute());
    }

    /// Replace the starfield with a freshly seeded one.
    fn reinitialize(&mut self) {
        if let Some(mut old) = self.starfield.take() {
            old.stop(&mut self.page);
        }
        self.boot();
    }

    fn toggle_pause(&mut self) {
        if let Some(starfield) = self.starfield.as_mut() {
            if starfield.is_running() {
                starfield.stop(&mut self.page);
            } else {
                starfield.resume(&mut self.page);
            }
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// Pixel viewport of the sky for a terminal of `columns` x `rows` cells.
fn sky_viewport(columns: u16, rows: u16) -> Size {
    Size::from_cells(columns, rows.saturating_sub(HELP_ROWS))
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
