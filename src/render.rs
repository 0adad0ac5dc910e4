//! Rendering: draws one frame of the scene to a [`Surface`].
//!
//! The renderer receives read-only views of the control points and the
//! already-computed construction levels and produces draw calls; it does not
//! mutate any application state, so redrawing the same frame is idempotent.
//!
//! Layers, bottom to top:
//! 1. background
//! 2. construction polylines and points (or only the curve point)
//! 3. the curve
//! 4. control points
//! 5. hover highlight

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::control::{ControlPoint, draw_dot};
use crate::curve::Construction;
use crate::settings::Settings;
use crate::surface::Surface;
use crate::transform::Viewport;
use crate::vector::Vector;

/// Everything needed to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub viewport: Viewport,
    /// Active control points (the first `order` points).
    pub points: &'a [ControlPoint],
    pub construction: &'a Construction,
    pub show_construction: bool,
    /// Control point to draw enlarged on top (hovered or dragged).
    pub highlighted: Option<usize>,
    pub settings: &'a Settings,
}

/// Draw the full scene.
///
/// # Errors
///
/// Returns `Err` if any fallible surface call fails.
pub fn draw<S: Surface>(surface: &mut S, frame: &Frame<'_>) -> Result<(), S::Error> {
    draw_background(surface, frame)?;

    if frame.show_construction {
        draw_construction(surface, frame)?;
    } else {
        draw_curve_point(surface, frame)?;
    }

    draw_curve(surface, frame.construction, frame.settings)?;
    draw_control_points(surface, frame)?;
    draw_highlight(surface, frame)
}

fn draw_background<S: Surface>(surface: &mut S, frame: &Frame<'_>) -> Result<(), S::Error> {
    surface.set_transform(&frame.viewport.view_transform())?;
    surface.set_global_alpha(1.0);

    let bounds = frame.viewport.logical_bounds();
    surface.clear_rect(bounds.min.x, bounds.min.y, bounds.width(), bounds.height());
    surface.set_fill_color(&frame.settings.palette.background);
    surface.fill_rect(bounds.min.x, bounds.min.y, bounds.width(), bounds.height());
    Ok(())
}

// =============================================================
// Construction
// =============================================================

fn draw_construction<S: Surface>(surface: &mut S, frame: &Frame<'_>) -> Result<(), S::Error> {
    let settings = frame.settings;
    let levels = frame.construction.levels();

    surface.set_global_alpha(settings.construction_alpha);
    surface.set_line_dash(&settings.construction_dash)?;
    surface.set_line_width(settings.construction_width);
    surface.set_stroke_color(&settings.palette.construction);

    // Polylines for every level that still has a segment.
    for level in levels.iter().filter(|level| level.len() >= 2) {
        stroke_polyline(surface, level);
    }

    // Points for every derived level; level 0 is drawn as control points later.
    let radius = settings.construction_radius();
    for (k, level) in levels.iter().enumerate().skip(1) {
        let color = settings.palette.level_color(k);
        for &p in level {
            draw_dot(surface, p, radius, color, settings.outline_width)?;
        }
    }

    surface.set_global_alpha(1.0);
    surface.set_line_dash(&[])
}

fn stroke_polyline<S: Surface>(surface: &mut S, points: &[Vector]) {
    let Some((&first, rest)) = points.split_first() else {
        return;
    };
    surface.begin_path();
    surface.move_to(first);
    for &p in rest {
        surface.line_to(p);
    }
    surface.stroke();
    surface.close_path();
}

fn draw_curve_point<S: Surface>(surface: &mut S, frame: &Frame<'_>) -> Result<(), S::Error> {
    let settings = frame.settings;
    draw_dot(
        surface,
        frame.construction.point(),
        settings.construction_radius(),
        settings.palette.final_color(),
        settings.outline_width,
    )
}

// =============================================================
// Curve
// =============================================================

fn draw_curve<S: Surface>(surface: &mut S, construction: &Construction, settings: &Settings) -> Result<(), S::Error> {
    surface.set_line_dash(&[])?;
    surface.set_stroke_color(&settings.palette.curve);
    surface.set_line_width(settings.curve_width);

    surface.begin_path();
    match *construction.control_points() {
        [p0, p1] => {
            surface.move_to(p0);
            surface.line_to(p1);
        }
        [p0, ctrl, p2] => {
            surface.move_to(p0);
            surface.quadratic_curve_to(ctrl, p2);
        }
        [p0, ctrl1, ctrl2, p3] => {
            surface.move_to(p0);
            surface.bezier_curve_to(ctrl1, ctrl2, p3);
        }
        _ => {}
    }
    surface.stroke();
    surface.close_path();
    Ok(())
}

// =============================================================
// Control points
// =============================================================

fn draw_control_points<S: Surface>(surface: &mut S, frame: &Frame<'_>) -> Result<(), S::Error> {
    let settings = frame.settings;
    let last = frame.points.len().saturating_sub(1);
    for (i, point) in frame.points.iter().enumerate() {
        let color = if i == 0 || i == last {
            &settings.palette.endpoint
        } else {
            &settings.palette.interior
        };
        point.draw(surface, settings.hit_radius, color, settings.outline_width)?;
    }
    Ok(())
}

fn draw_highlight<S: Surface>(surface: &mut S, frame: &Frame<'_>) -> Result<(), S::Error> {
    let Some(point) = frame.highlighted.and_then(|i| frame.points.get(i)) else {
        return Ok(());
    };
    let settings = frame.settings;
    point.draw(surface, settings.hover_radius(), &settings.palette.hover, settings.outline_width)
}
