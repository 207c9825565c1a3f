//! The starfield renderer.

use rand::Rng;
use tracing::{debug, trace};
use universe_core::{Size, THEME_ATTRIBUTE, Theme, resolve_color};

use crate::frame::FrameRequest;
use crate::page::{NodeId, Page, PageEvent};
use crate::star::{Star, generate_stars};
use crate::surface::Surface;

/// Element id reserved for the starfield surface.
pub const MOUNT_ID: &str = "universe";

/// Default number of stars.
pub const STAR_COUNT: usize = 200;

/// Renderer settings fixed at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarfieldOptions {
    /// Stars seeded per surface.
    pub star_count: usize,
}

impl Default for StarfieldOptions {
    fn default() -> Self {
        Self {
            star_count: STAR_COUNT,
        }
    }
}

/// Full-viewport starfield animation.
///
/// The renderer owns one surface in its page, identified by node rather than
/// element id, so a renderer whose surface has been replaced stops drawing
/// instead of painting over its successor.
#[derive(Debug)]
pub struct Starfield<R> {
    node: Option<NodeId>,
    stars: Vec<Star>,
    width: f64,
    height: f64,
    theme: Theme,
    pending_frame: Option<FrameRequest>,
    options: StarfieldOptions,
    rng: R,
}

impl<R: Rng> Starfield<R> {
    /// Initialize once the page is interactive.
    ///
    /// Returns `None` while the page is still loading; call again after
    /// [`PageEvent::Ready`]. `make_rng` only runs when initialization happens.
    pub fn boot<S: Surface>(
        page: &mut Page<S>,
        options: StarfieldOptions,
        make_rng: impl FnOnce() -> R,
    ) -> Option<Self> {
        if !page.is_interactive() {
            debug!("page still loading, deferring starfield");
            return None;
        }
        Some(Self::initialize(page, options, make_rng()))
    }

    /// Mount a fresh surface, seed the stars and start the frame loop.
    ///
    /// Any surface already mounted under [`MOUNT_ID`] is removed first. If the
    /// page has no body the renderer is still returned but never draws.
    pub fn initialize<S: Surface>(page: &mut Page<S>, options: StarfieldOptions, rng: R) -> Self {
        let removed = page.remove_by_id(MOUNT_ID);
        let node = page.mount(MOUNT_ID);
        page.observe_attribute(THEME_ATTRIBUTE);

        let mut starfield = Self {
            node,
            stars: Vec::new(),
            width: 0.0,
            height: 0.0,
            theme: page.theme(),
            pending_frame: None,
            options,
            rng,
        };
        let viewport = page.viewport();
        starfield.on_resize(page, viewport);
        starfield.generate(options.star_count);
        starfield.pending_frame = Some(page.frames_mut().request());

        debug!(
            ?node,
            removed,
            stars = options.star_count,
            width = viewport.width,
            height = viewport.height,
            theme = ?starfield.theme,
            "starfield initialized"
        );
        starfield
    }

    /// Replace the star set with `count` freshly placed stars.
    pub fn generate(&mut self, count: usize) {
        let size = Size::new(self.width as u32, self.height as u32);
        self.stars = generate_stars(count, size, self.theme, &mut self.rng);
    }

    /// Draw every star, then move each one up a frame.
    ///
    /// Skipped entirely when the surface is no longer mounted.
    pub fn render_frame<S: Surface>(&mut self, page: &mut Page<S>) {
        let Some(surface) = self.node.and_then(|node| page.surface_mut(node)) else {
            trace!("starfield surface not mounted, skipping frame");
            return;
        };

        surface.clear();
        for star in &mut self.stars {
            surface.fill_circle(star.x, star.y, star.radius, star.color);
            star.advance(self.width, self.height, &mut self.rng);
        }
    }

    /// Frame callback. Renders and requests the next frame when `request` is
    /// this renderer's pending one; other requests are ignored.
    pub fn on_animation_frame<S: Surface>(
        &mut self,
        page: &mut Page<S>,
        request: FrameRequest,
    ) -> bool {
        if self.pending_frame != Some(request) {
            return false;
        }
        self.render_frame(page);
        self.pending_frame = Some(page.frames_mut().request());
        true
    }

    /// Cancel the frame loop. Returns whether a frame was pending.
    pub fn stop<S: Surface>(&mut self, page: &mut Page<S>) -> bool {
        let Some(request) = self.pending_frame.take() else {
            return false;
        };
        debug!(request = request.id(), "starfield stopped");
        page.frames_mut().cancel(request)
    }

    /// Restart a stopped frame loop.
    pub fn resume<S: Surface>(&mut self, page: &mut Page<S>) {
        if self.pending_frame.is_none() {
            self.pending_frame = Some(page.frames_mut().request());
            debug!("starfield resumed");
        }
    }

    /// Recolour every star for `theme`. Positions, radii and speeds stay.
    pub fn on_theme_change(&mut self, theme: Theme) {
        debug!(?theme, "recolouring stars");
        self.theme = theme;
        for star in &mut self.stars {
            star.color = resolve_color(theme, &mut self.rng);
        }
    }

    /// Track a new viewport size. Stars are not moved or reseeded.
    pub fn on_resize<S: Surface>(&mut self, page: &mut Page<S>, size: Size) {
        self.width = size.width as f64;
        self.height = size.height as f64;
        if let Some(surface) = self.node.and_then(|node| page.surface_mut(node)) {
            surface.resize(size);
        }
        debug!(width = size.width, height = size.height, "starfield resized");
    }

    /// Dispatch a page notification to the matching handler.
    pub fn handle_event<S: Surface>(&mut self, page: &mut Page<S>, event: &PageEvent) {
        match event {
            PageEvent::Resized(size) => self.on_resize(page, *size),
            PageEvent::AttributeChanged { name, value } if name == THEME_ATTRIBUTE => {
                self.on_theme_change(Theme::from_attribute(value.as_deref()));
            }
            _ => {}
        }
    }
}

impl<R> Starfield<R> {
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn options(&self) -> StarfieldOptions {
        self.options
    }

    /// Node of the surface this renderer mounted, if the page had a body.
    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    /// Handle of the pending frame request; `None` once stopped.
    pub fn frame_request(&self) -> Option<FrameRequest> {
        self.pending_frame
    }

    pub fn is_running(&self) -> bool {
        self.pending_frame.is_some()
    }
}
