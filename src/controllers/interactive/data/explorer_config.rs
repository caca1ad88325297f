use crate::controllers::interactive::errors::config::ConfigError;
use crate::core::data::complex::Complex;

/// Startup constants for an explorer session. Fixed once a controller is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    /// Pixels per plane unit.
    pub unit_scale: f64,
    /// Pixel step of the coarse preview grid.
    pub grid_stride: u32,
    /// Marker radius of the coarse preview grid.
    pub marker_size: f64,
    pub show_preview_grid: bool,
    pub still_stride: u32,
    pub still_marker_size: f64,
    pub still_render_depth: u32,
    pub orbit_marker_radius: f64,
    pub interactive_diverge_test_depth: u32,
    pub initial_iteration_budget: u32,
    pub max_iteration_budget: u32,
    pub initial_pan_origin: Complex,
    pub pan_step: f64,
    /// Half length of the axis guides, in plane units.
    pub guide_half_extent: f64,
    pub tick_hz: u32,
    pub max_ticks_per_advance: u32,
}

impl ExplorerConfig {
    #[must_use]
    pub fn dt(&self) -> f64 {
        if self.tick_hz == 0 {
            0.0
        } else {
            1.0 / f64::from(self.tick_hz)
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("unit_scale", self.unit_scale)?;
        positive("marker_size", self.marker_size)?;
        positive("still_marker_size", self.still_marker_size)?;
        positive("orbit_marker_radius", self.orbit_marker_radius)?;
        positive("pan_step", self.pan_step)?;
        positive("guide_half_extent", self.guide_half_extent)?;

        if self.grid_stride == 0 {
            return Err(ConfigError::ZeroStride("grid_stride"));
        }
        if self.still_stride == 0 {
            return Err(ConfigError::ZeroStride("still_stride"));
        }
        if self.tick_hz == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if self.max_ticks_per_advance == 0 {
            return Err(ConfigError::ZeroTickCap);
        }
        if self.initial_iteration_budget > self.max_iteration_budget {
            return Err(ConfigError::InitialBudgetAboveMax {
                initial: self.initial_iteration_budget,
                max: self.max_iteration_budget,
            });
        }
        if !self.initial_pan_origin.real.is_finite() || !self.initial_pan_origin.imag.is_finite() {
            return Err(ConfigError::NonFiniteOrigin);
        }

        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            unit_scale: 200.0,
            grid_stride: 25,
            marker_size: 10.0,
            show_preview_grid: false,
            still_stride: 1,
            still_marker_size: 1.0,
            still_render_depth: 250,
            orbit_marker_radius: 5.0,
            interactive_diverge_test_depth: 50,
            initial_iteration_budget: 5,
            max_iteration_budget: 50,
            initial_pan_origin: Complex::ZERO,
            pan_step: 0.01,
            guide_half_extent: 1.5,
            tick_hz: 60,
            max_ticks_per_advance: 10,
        }
    }
}
