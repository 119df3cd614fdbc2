//! Rendering of response data to image files
//!
//! All functions take an explicit [`PlotContext`] instead of relying on any
//! implicit current-figure state, and render without returning data.

use num_complex::Complex64;
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

/// Rendering context: output raster size
#[derive(Debug, Clone, Copy)]
pub struct PlotContext {
    pub width: u32,
    pub height: u32,
}

impl PlotContext {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for PlotContext {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 960,
        }
    }
}

/// Pad a data range so curves do not hug the frame
fn padded_range(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = (max - min).abs();
    let pad = if span < 1e-12 { 0.5 } else { span * 0.05 };
    (min - pad, max + pad)
}

/// Plot a time-domain response `y(t)`
pub fn plot_time<P: AsRef<Path>>(
    ctx: &PlotContext,
    path: P,
    t: &[f64],
    y: &[f64],
) -> Result<(), Box<dyn Error>> {
    if t.is_empty() || t.len() != y.len() {
        return Err("time and response vectors must be non-empty and equal in length".into());
    }

    let root = BitMapBackend::new(path.as_ref(), (ctx.width, ctx.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let (y_lo, y_hi) = padded_range(y);
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(t[0]..t[t.len() - 1], y_lo..y_hi)?;

    chart
        .configure_mesh()
        .x_desc("time (s)")
        .y_desc("response")
        .draw()?;

    chart.draw_series(LineSeries::new(
        t.iter().copied().zip(y.iter().copied()),
        &BLUE,
    ))?;

    root.present()?;
    Ok(())
}

/// Plot a Bode diagram: magnitude (dB) and phase (degrees) panels over a
/// logarithmic frequency axis
pub fn plot_bode<P: AsRef<Path>>(
    ctx: &PlotContext,
    path: P,
    w: &[f64],
    response: &[Complex64],
) -> Result<(), Box<dyn Error>> {
    if w.is_empty() || w.len() != response.len() {
        return Err("frequency and response vectors must be non-empty and equal in length".into());
    }
    let w_min = w.iter().copied().fold(f64::INFINITY, f64::min);
    let w_max = w.iter().copied().fold(0.0_f64, f64::max);
    if w_min <= 0.0 {
        return Err("frequencies must be positive for a logarithmic axis".into());
    }

    let mag_db: Vec<f64> = response.iter().map(|h| 20.0 * h.norm().log10()).collect();
    let phase_deg: Vec<f64> = response.iter().map(|h| h.arg().to_degrees()).collect();

    let root = BitMapBackend::new(path.as_ref(), (ctx.width, ctx.height)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((2, 1));

    let (m_lo, m_hi) = padded_range(&mag_db);
    let mut mag_chart = ChartBuilder::on(&panels[0])
        .caption("Magnitude", ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((w_min..w_max).log_scale(), m_lo..m_hi)?;
    mag_chart
        .configure_mesh()
        .x_desc("Angular Frequency (rad/s)")
        .y_desc("Magnitude (dB)")
        .draw()?;
    mag_chart.draw_series(LineSeries::new(
        w.iter().copied().zip(mag_db.iter().copied()),
        &BLUE,
    ))?;

    let (p_lo, p_hi) = padded_range(&phase_deg);
    let mut phase_chart = ChartBuilder::on(&panels[1])
        .caption("Phase", ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((w_min..w_max).log_scale(), p_lo..p_hi)?;
    phase_chart
        .configure_mesh()
        .x_desc("Angular Frequency (rad/s)")
        .y_desc("Phase (degrees)")
        .draw()?;
    phase_chart.draw_series(LineSeries::new(
        w.iter().copied().zip(phase_deg.iter().copied()),
        &RED,
    ))?;

    root.present()?;
    Ok(())
}

/// Plot a pole-zero map: crosses for poles, circles for zeros
pub fn plot_pzmap<P: AsRef<Path>>(
    ctx: &PlotContext,
    path: P,
    poles: &[Complex64],
    zeros: &[Complex64],
) -> Result<(), Box<dyn Error>> {
    let re: Vec<f64> = poles.iter().chain(zeros.iter()).map(|c| c.re).collect();
    let im: Vec<f64> = poles.iter().chain(zeros.iter()).map(|c| c.im).collect();
    if re.is_empty() {
        return Err("nothing to plot: no poles and no zeros".into());
    }

    let (x_lo, x_hi) = padded_range(&re);
    let (y_lo, y_hi) = padded_range(&im);

    let root = BitMapBackend::new(path.as_ref(), (ctx.width, ctx.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .x_desc("Real Part")
        .y_desc("Imag Part")
        .draw()?;

    chart.draw_series(
        poles
            .iter()
            .map(|p| Cross::new((p.re, p.im), 6, RED.stroke_width(2))),
    )?;
    chart.draw_series(
        zeros
            .iter()
            .map(|z| Circle::new((z.re, z.im), 6, BLUE.stroke_width(2))),
    )?;

    root.present()?;
    Ok(())
}
