use aerofoil_rs::aerofoil::naca4::Naca4;
use aerofoil_rs::aerofoil::CamberLine;
use aerofoil_rs::polar::{self, AerodynamicCentre, LiftSample, MomentSlopeSample};
use aerofoil_rs::thin_aerofoil::ThinAerofoil;
use itertools::{Itertools, MinMaxResult};
use ncollide2d::na::Point2;
use plotters::prelude::*;
use serde::Serialize;
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct Summary<'a> {
    code: &'a str,
    zero_lift_angle_rad: f64,
    zero_lift_angle_deg: f64,
    cl_at_zero_alpha: f64,
    cm_leading_edge: f64,
    cm_quarter_chord: f64,
    aerodynamic_centre: AerodynamicCentre,
    fourier_coefficients: Vec<f64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let code = args.next().unwrap_or_else(|| String::from("2412"));
    let out_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    let naca = Naca4::parse(&code)?;
    let foil = ThinAerofoil::new(naca).memoized();

    let outline = naca.surface(None)?;
    write_points(&outline, &out_dir.join(format!("naca{}_surface.txt", code)))?;

    let zero_lift = foil.zero_lift_angle()?;
    let summary = Summary {
        code: &code,
        zero_lift_angle_rad: zero_lift,
        zero_lift_angle_deg: zero_lift.to_degrees(),
        cl_at_zero_alpha: foil.lift_coefficient(0.0)?,
        cm_leading_edge: foil.moment_coefficient_le(0.0)?,
        cm_quarter_chord: foil.moment_coefficient(0.0, 0.25)?,
        aerodynamic_centre: polar::aerodynamic_centre(&foil)?,
        fourier_coefficients: foil.fourier_coefficients(0.0, 4)?,
    };
    serde_json::to_writer_pretty(
        File::create(out_dir.join(format!("naca{}_summary.json", code)))?,
        &summary,
    )?;

    let alphas: Vec<f64> = (-20..=20).map(|d| (d as f64).to_radians()).collect();
    let lift = polar::lift_curve(&foil, &alphas)?;
    let stations: Vec<f64> = (0..=50).map(|i| i as f64 / 50.0).collect();
    let moment = polar::moment_slope_curve(&foil, &stations)?;
    render_charts(
        &code,
        foil.camber(),
        &outline,
        &lift,
        &moment,
        &out_dir.join(format!("naca{}.png", code)),
    )?;

    println!(
        "NACA {}: zero lift at {:.4} deg, Cl(0) = {:.4}, Cm about c/4 = {:.4}, a.c. at x/c = {:.4}",
        code,
        summary.zero_lift_angle_deg,
        summary.cl_at_zero_alpha,
        summary.cm_quarter_chord,
        summary.aerodynamic_centre.x
    );
    Ok(())
}

fn write_points(v: &[Point2<f64>], file_name: &Path) -> std::io::Result<()> {
    let mut file = File::create(file_name)?;
    for p in v.iter() {
        writeln!(file, "{}, {}", &p.x, &p.y)?;
    }

    Ok(())
}

fn span(values: impl Iterator<Item = f64>) -> (f64, f64) {
    match values.minmax() {
        MinMaxResult::MinMax(lo, hi) => (lo, hi),
        MinMaxResult::OneElement(v) => (v - 1.0, v + 1.0),
        MinMaxResult::NoElements => (-1.0, 1.0),
    }
}

fn render_charts<C: CamberLine>(
    code: &str,
    camber: &C,
    outline: &[Point2<f64>],
    lift: &[LiftSample],
    moment: &[MomentSlopeSample],
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, (1280, 960)).into_drawing_area();
    root.fill(&WHITE)?;
    let (top, bottom) = root.split_vertically(480);
    let (left, right) = bottom.split_horizontally(640);

    let (y_lo, y_hi) = span(outline.iter().map(|p| p.y));
    let mut profile = ChartBuilder::on(&top)
        .caption(format!("NACA {} profile", code), ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(-0.05f64..1.05f64, (y_lo - 0.05)..(y_hi + 0.05))?;
    profile.configure_mesh().x_desc("x/c").y_desc("y/c").draw()?;
    profile.draw_series(LineSeries::new(
        outline.iter().map(|p| (p.x, p.y)),
        &BLACK,
    ))?;
    profile.draw_series(LineSeries::new(
        (0..=100).map(|i| {
            let x = i as f64 / 100.0;
            (x, camber.camber(x))
        }),
        &RED,
    ))?;

    let (cl_lo, cl_hi) = span(lift.iter().map(|s| s.cl));
    let mut lift_chart = ChartBuilder::on(&left)
        .caption("Lift curve", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(-21f64..21f64, (cl_lo - 0.1)..(cl_hi + 0.1))?;
    lift_chart
        .configure_mesh()
        .x_desc("alpha [deg]")
        .y_desc("Cl")
        .draw()?;
    lift_chart.draw_series(LineSeries::new(
        lift.iter().map(|s| (s.alpha.to_degrees(), s.cl)),
        &RED,
    ))?;

    let (cm_lo, cm_hi) = span(moment.iter().map(|s| s.cm_alpha));
    let mut moment_chart = ChartBuilder::on(&right)
        .caption("Moment slope about x/c", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..1f64, (cm_lo - 0.1)..(cm_hi + 0.1))?;
    moment_chart
        .configure_mesh()
        .x_desc("x/c")
        .y_desc("dCm/dalpha")
        .draw()?;
    moment_chart.draw_series(LineSeries::new(
        moment.iter().map(|s| (s.x, s.cm_alpha)),
        &RED,
    ))?;

    root.present()?;
    Ok(())
}
