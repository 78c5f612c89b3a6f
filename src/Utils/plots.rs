use crate::plotting::sampler::PlotError;
use nalgebra::DVector;
use std::path::Path;

// pads degenerate ranges so the chart area is never empty (a constant
// function still gets a visible axis)
fn padded_range(min: f64, max: f64) -> (f64, f64) {
    let span = max - min;
    if span.abs() < f64::EPSILON {
        (min - 0.5, max + 0.5)
    } else {
        (min - 0.05 * span, max + 0.05 * span)
    }
}

/// Renders the sampled curve as a PNG line plot with plotters.
///
/// `caption` is the expression as the user typed it; the file is written to
/// `filename` at the given pixel size.
pub fn plot_series(
    caption: &str,
    x: &DVector<f64>,
    y: &DVector<f64>,
    filename: &Path,
    size: (u32, u32),
) -> Result<(), PlotError> {
    use plotters::prelude::*;

    let (x_min, x_max) = padded_range(x.min(), x.max());
    let (y_min, y_max) = padded_range(y.min(), y.max());

    let root_area = BitMapBackend::new(filename, size).into_drawing_area();
    root_area
        .fill(&WHITE)
        .map_err(|e| PlotError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root_area)
        .caption(caption, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| PlotError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("y")
        .draw()
        .map_err(|e| PlotError::Render(e.to_string()))?;

    let series: Vec<(f64, f64)> = x.iter().zip(y.iter()).map(|(&x, &y)| (x, y)).collect();
    chart
        .draw_series(LineSeries::new(series, &BLUE))
        .map_err(|e| PlotError::Render(e.to_string()))?
        .label(caption)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| PlotError::Render(e.to_string()))?;

    root_area
        .present()
        .map_err(|e| PlotError::Render(e.to_string()))?;
    Ok(())
}

/// gnuplot-backed alternative to `plot_series`; needs the gnuplot binary
pub fn plot_series_gnuplot(
    caption: &str,
    x: &DVector<f64>,
    y: &DVector<f64>,
    filename: &Path,
    size: (u32, u32),
) -> Result<(), PlotError> {
    use gnuplot::{AxesCommon, Caption, Color, Figure, RGBString};

    let y_col: Vec<f64> = y.iter().copied().collect();
    let mut fg = Figure::new();
    fg.axes2d()
        .set_title(caption, &[])
        .set_x_label("x", &[])
        .set_y_label("y", &[])
        .lines(x.as_slice(), &y_col, &[Caption(caption), Color(RGBString("blue"))]);

    fg.save_to_png(filename, size.0, size.1)
        .map_err(|e| PlotError::Render(format!("{:?}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::DVector;

    #[test]
    fn test_padded_range_widens_degenerate_span() {
        let (lo, hi) = padded_range(2.0, 2.0);
        assert!(lo < 2.0 && hi > 2.0);
        let (lo, hi) = padded_range(-1.0, 1.0);
        assert!(lo < -1.0 && hi > 1.0);
    }

    // renders a line into a PNG without any text element, so the test does
    // not depend on installed fonts
    #[test]
    fn test_bitmap_backend_writes_png() {
        use plotters::prelude::*;

        let dir = tempfile::tempdir().unwrap();
        let filename = dir.path().join("line.png");
        {
            let root_area = BitMapBackend::new(&filename, (200, 150)).into_drawing_area();
            root_area.fill(&WHITE).unwrap();
            let mut chart = ChartBuilder::on(&root_area)
                .build_cartesian_2d(0.0..2.0, 0.0..4.0)
                .unwrap();
            chart
                .draw_series(LineSeries::new(
                    vec![(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)],
                    &BLUE,
                ))
                .unwrap();
            root_area.present().unwrap();
        }
        assert!(std::fs::metadata(&filename).unwrap().len() > 0);
    }

    #[test]
    fn test_plot_series_gnuplot_writes_png() {
        if std::process::Command::new("gnuplot")
            .arg("--version")
            .output()
            .is_err()
        {
            // gnuplot binary not installed
            return;
        }

        let dir = tempfile::tempdir().unwrap();
        let filename = dir.path().join("curve.png");
        let x = DVector::from_vec(vec![0.0, 1.0, 2.0]);
        let y = DVector::from_vec(vec![0.0, 1.0, 4.0]);
        plot_series_gnuplot("x^2", &x, &y, &filename, (400, 300)).unwrap();
        assert!(std::fs::metadata(&filename).unwrap().len() > 0);
    }
}
