use std::error::Error;
use std::ops::Range;

use plotters::prelude::*;

use crate::core::HvError;
use crate::utils::is_pareto_front;

/// Generate and save a chart with the cost vectors, where the Pareto-optimal vectors are
/// highlighted. This is only available for vectors with 2 or 3 objectives.
///
/// # Arguments
///
/// * `costs`: The cost vectors.
/// * `file_name`: The file path where to save the chart.
///
/// returns: `Result<(), HvError>`
pub fn plot_front(costs: &[Vec<f64>], file_name: &str) -> Result<(), HvError> {
    let on_front = is_pareto_front(costs, false)?;
    let number_of_objectives = costs.first().map(|c| c.len()).unwrap_or(0);

    match number_of_objectives {
        2 => plot_2d(costs, &on_front, file_name).map_err(|e| HvError::Generic(e.to_string())),
        3 => plot_3d(costs, &on_front, file_name).map_err(|e| HvError::Generic(e.to_string())),
        _ => Err(HvError::Generic(
            "Plotting is available when the number of objective is either 2 or 3".to_string(),
        )),
    }
}

/// The axis range for an objective, with a 5% margin on both sides.
fn axis_range(costs: &[Vec<f64>], obj_idx: usize) -> Range<f64> {
    let (min, max) = costs
        .iter()
        .map(|c| c[obj_idx])
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    let margin = if max > min { 0.05 * (max - min) } else { 1.0 };
    (min - margin)..(max + margin)
}

/// The marker style for a point.
fn point_style(is_optimal: bool) -> ShapeStyle {
    let colour = if is_optimal { RED.mix(1.0) } else { BLACK.mix(0.3) };
    ShapeStyle {
        color: colour.to_rgba(),
        filled: true,
        stroke_width: 1,
    }
}

/// Generate and save a 2D chart.
///
/// returns: `Result<(), Box<dyn Error>>`
fn plot_2d(costs: &[Vec<f64>], on_front: &[bool], file_name: &str) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(file_name, (800, 600)).into_drawing_area();

    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .x_label_area_size(65)
        .y_label_area_size(65)
        .margin_top(5)
        .margin_left(10)
        .margin_right(30)
        .margin_bottom(5)
        .caption("Pareto front", ("sans-serif", 30.0))
        .build_cartesian_2d(axis_range(costs, 0), axis_range(costs, 1))?;

    chart
        .configure_mesh()
        .bold_line_style(WHITE.mix(0.3))
        .y_desc("Objective #2")
        .x_desc("Objective #1")
        .axis_desc_style(("sans-serif", 25, &BLACK))
        .label_style(("sans-serif", 20, &BLACK))
        .draw()?;

    chart.draw_series(
        costs
            .iter()
            .zip(on_front)
            .map(|(c, is_optimal)| Circle::new((c[0], c[1]), 5, point_style(*is_optimal))),
    )?;

    root.present()?;
    Ok(())
}

/// Generate and save a 3D chart.
///
/// returns: `Result<(), Box<dyn Error>>`
fn plot_3d(costs: &[Vec<f64>], on_front: &[bool], file_name: &str) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(file_name, (800, 600)).into_drawing_area();

    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .x_label_area_size(65)
        .y_label_area_size(65)
        .margin_top(5)
        .margin_left(10)
        .margin_right(30)
        .margin_bottom(5)
        .caption("Pareto front", ("sans-serif", 30.0))
        .build_cartesian_3d(
            axis_range(costs, 0),
            axis_range(costs, 1),
            axis_range(costs, 2),
        )?;

    chart.with_projection(|mut pb| {
        pb.yaw = 0.5;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.15))
        .max_light_lines(3)
        .draw()?;

    chart.draw_series(costs.iter().zip(on_front).map(|(c, is_optimal)| {
        Circle::new((c[0], c[1], c[2]), 5, point_style(*is_optimal))
    }))?;

    root.present()?;
    Ok(())
}
