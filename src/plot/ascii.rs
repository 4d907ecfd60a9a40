//! ASCII/Unicode plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks of a spectrum's shape in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - sampled spectrum: `-` line
//! - Wien peak (when it falls inside the plotted range): `|` column

use crate::domain::{ColorFile, Nanometers, Spectrum};

/// Render a spectrum, marking `peak` if it lies within the sampled range.
pub fn render_spectrum_plot(
    spectrum: &Spectrum,
    peak: Option<Nanometers>,
    width: usize,
    height: usize,
) -> String {
    let points: Vec<(f64, f64)> = spectrum
        .points()
        .map(|(lambda, s)| (lambda.value(), s.value()))
        .collect();
    let (l_min, l_max) =
        wavelength_range(&points).unwrap_or((spectrum.start.value(), spectrum.end.value()));
    render_plot(&points, peak.map(Nanometers::value), l_min, l_max, width, height)
}

/// Render the spectrum stored in a saved color JSON file.
pub fn render_plot_from_color_file(file: &ColorFile, width: usize, height: usize) -> String {
    render_spectrum_plot(&file.spectrum, Some(file.peak_wavelength), width, height)
}

fn render_plot(
    points: &[(f64, f64)],
    peak: Option<f64>,
    l_min: f64,
    l_max: f64,
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (y_min, y_max) = y_range(points).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Peak marker first so the curve draws over it.
    if let Some(p) = peak.filter(|&p| p >= l_min && p <= l_max && l_max > l_min) {
        let x = map_x(p, l_min, l_max, width);
        for row in grid.iter_mut() {
            row[x] = '|';
        }
    }

    draw_curve(&mut grid, points, l_min, l_max, y_min, y_max);

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: lambda=[{l_min:.1}, {l_max:.1}] nm | S=[{y_min:.4e}, {y_max:.4e}] W/(sr*m^3)\n"
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn wavelength_range(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    let mut min_l = f64::INFINITY;
    let mut max_l = f64::NEG_INFINITY;
    for &(l, _) in points {
        min_l = min_l.min(l);
        max_l = max_l.max(l);
    }
    if min_l.is_finite() && max_l.is_finite() && max_l > min_l {
        Some((min_l, max_l))
    } else {
        None
    }
}

fn y_range(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for &(_, y) in points {
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }
    if min_y.is_finite() && max_y.is_finite() && max_y > min_y {
        Some((min_y, max_y))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(l: f64, l_min: f64, l_max: f64, width: usize) -> usize {
    let width = width.max(2);
    if l_max <= l_min {
        return 0;
    }
    let u = ((l - l_min) / (l_max - l_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(
    grid: &mut [Vec<char>],
    curve: &[(f64, f64)],
    l_min: f64,
    l_max: f64,
    y_min: f64,
    y_max: f64,
) {
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(l, y) in curve {
        let x = map_x(l, l_min, l_max, width);
        let yy = map_y(y, y_min, y_max, height);
        if let Some((x0, y0)) = prev {
            draw_line(grid, x0, y0, x, yy, '-');
        } else {
            grid[yy][x] = '-';
        }
        prev = Some((x, yy));
    }
}

/// Integer line drawing (Bresenham-ish). Only the peak marker is overwritten.
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0 && (y0 as usize) < grid.len() && x0 >= 0 && (x0 as usize) < grid[0].len() {
            let cell = &mut grid[y0 as usize][x0 as usize];
            if *cell == ' ' || *cell == '|' {
                *cell = ch;
            }
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
