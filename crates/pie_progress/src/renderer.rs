use crate::color::ColorPair;
use crate::config::Configuration;
use crate::geometry::Rect;
use crate::layer::ShapeLayer;
use crate::state::ProgressState;
use crate::surface::{DrawingSurface, Transaction};
use crate::wedge::calculate_wedges;

/// One surface layer per wedge, matched by position; a new wedge count only
/// adds or removes layers at the end.
pub struct PieRenderer<S: DrawingSurface> {
    surface: S,
    pool: Vec<S::Layer>,
    configuration: Configuration,
    state: ProgressState,
    bounds: Rect,
}

impl<S: DrawingSurface> PieRenderer<S> {
    pub fn new(surface: S, configuration: Configuration) -> Self {
        Self {
            surface,
            pool: Vec::new(),
            configuration,
            state: ProgressState::default(),
            bounds: Rect::default(),
        }
    }

    pub fn layout(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.relayout();
    }

    pub fn update_state(&mut self, passed: i64, total: i64, animated: bool) {
        self.state = ProgressState::new(passed, total);
        log::debug!(
            "Progress {}/{} (animated: {})",
            self.state.passed(),
            self.state.total(),
            animated
        );

        if animated {
            self.surface.flush();
            self.surface.begin_transaction(&Transaction::ease_in_ease_out(
                self.configuration.animation_duration,
            ));
            self.relayout();
            self.surface.commit_transaction();
        } else {
            self.relayout();
        }
    }

    pub fn update_configuration(&mut self, configuration: Configuration) {
        self.configuration = configuration;
    }

    /// Takes effect on the next layout.
    pub fn update_active_colors(&mut self, active_colors: ColorPair) {
        self.configuration.active_colors = active_colors;
    }

    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn shape_layers(&self) -> Vec<ShapeLayer> {
        calculate_wedges(&self.bounds, &self.configuration, &self.state)
            .unwrap_or_default()
            .into_iter()
            .map(|wedge| wedge.into_shape_layer(&self.bounds, self.configuration.line_width))
            .collect()
    }

    fn relayout(&mut self) {
        let Some(wedges) = calculate_wedges(&self.bounds, &self.configuration, &self.state) else {
            log::debug!("Skipping layout into empty bounds {:?}", self.bounds);
            return;
        };

        self.reconcile_pool();

        for (layer, wedge) in self.pool.iter().zip(wedges) {
            log::trace!(
                "Wedge {} {:.3}..{:.3} active={}",
                wedge.index,
                wedge.span.start,
                wedge.span.end,
                wedge.active
            );
            let command = wedge.into_shape_layer(&self.bounds, self.configuration.line_width);
            self.surface.apply(layer, &command);
        }
    }

    fn reconcile_pool(&mut self) {
        let total = self.state.total();
        if self.pool.len() != total {
            log::debug!("Resizing layer pool {} -> {}", self.pool.len(), total);
        }

        while self.pool.len() > total {
            if let Some(layer) = self.pool.pop() {
                self.surface.remove_layer(layer);
            }
        }
        while self.pool.len() < total {
            let layer = self.surface.create_layer();
            self.pool.push(layer);
        }
    }
}
