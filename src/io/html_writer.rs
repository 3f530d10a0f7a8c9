//! Renders the report page as a single self-contained HTML document.
//!
//! Deterministic: the same context always produces identical bytes. All
//! dynamic text goes through esc(); charts and the logo are inline, so the
//! page carries no external references.

use anyhow::{Context, Result};
use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::charts::{BoxPlotSpec, RadarPlotSpec};
use crate::ctx::Ctx;
use crate::schema::v1::{
    ClinicalHistoryRecord, HormoneMeasurement, PathologyPanel, PatientProfile, PredictionSummary,
};

pub fn write_html(path: &Path, ctx: &Ctx) -> Result<()> {
    let html = render_page(ctx)?;
    let mut w =
        BufWriter::new(File::create(path).with_context(|| "create report.html failed")?);
    w.write_all(html.as_bytes())?;
    Ok(())
}

pub fn render_page(ctx: &Ctx) -> Result<String> {
    let theme = ctx.theme.as_ref().context("theme missing")?;
    let logo = ctx.logo.as_ref().context("logo missing")?;
    let box_plot = ctx.box_plot.as_ref().context("box plot spec missing")?;
    let radar_plot = ctx.radar_plot.as_ref().context("radar plot spec missing")?;
    let report = &ctx.report;

    let mut html = String::with_capacity(64 * 1024);

    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html lang=\"en\">")?;
    writeln!(html, "<head>")?;
    writeln!(html, "<meta charset=\"utf-8\"/>")?;
    writeln!(
        html,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>"
    )?;
    writeln!(html, "<title>{}</title>", esc(&report.title))?;
    writeln!(html, "<style>")?;
    html.push_str(&theme.stylesheet());
    writeln!(html, "</style>")?;
    writeln!(html, "</head>")?;
    writeln!(html, "<body>")?;

    writeln!(html, "<div class=\"header\">")?;
    writeln!(
        html,
        "<img src=\"{}\" alt=\"logo\" width=\"60\" height=\"60\"/>",
        logo.data_uri
    )?;
    writeln!(html, "<h1>{}</h1>", esc(&report.title))?;
    writeln!(html, "</div>")?;

    writeln!(html, "<div class=\"columns\">")?;
    chart_column(&mut html, box_plot, radar_plot)?;
    detail_column(
        &mut html,
        &report.patient,
        &report.history,
        &report.pathology,
        &report.prediction,
    )?;
    writeln!(html, "</div>")?;

    writeln!(html, "</body></html>")?;
    Ok(html)
}

fn chart_column(out: &mut String, box_plot: &BoxPlotSpec, radar: &RadarPlotSpec) -> Result<()> {
    writeln!(out, "<div class=\"col chart-col\">")?;
    writeln!(out, "<h2>Clinical Summary</h2>")?;
    writeln!(out, "<h5>Parameter Comparison (Box Plot)</h5>")?;
    svg_box_plot(out, box_plot, 720.0, 350.0)?;
    writeln!(out, "<h5>Parameter Comparison (Radar Chart)</h5>")?;
    svg_radar(out, radar, 720.0, 350.0)?;
    writeln!(out, "</div>")?;
    Ok(())
}

fn detail_column(
    out: &mut String,
    patient: &PatientProfile,
    history: &ClinicalHistoryRecord,
    pathology: &PathologyPanel,
    prediction: &PredictionSummary,
) -> Result<()> {
    writeln!(out, "<div class=\"col detail-col\">")?;

    section_open(out, "Patient Information")?;
    writeln!(out, "<div class=\"metric-grid cols-3\">")?;
    // Row-major grid order keeps the original column arrangement.
    metric(out, "Name", &patient.name)?;
    metric(out, "Postcode", &patient.postcode)?;
    metric(out, "Weight", &patient.weight)?;
    metric(out, "Age", &patient.age)?;
    metric(out, "Height", &patient.height)?;
    writeln!(out, "</div>")?;
    section_close(out)?;
    writeln!(out, "<hr/>")?;

    section_open(out, "Clinical History")?;
    writeln!(out, "<div class=\"metric-grid cols-2\">")?;
    metric(
        out,
        "Number of previous IVF Cycles",
        &history.previous_cycles.to_string(),
    )?;
    metric(out, "Endometriosis", yes_no(history.endometriosis))?;
    metric(out, "Polycystic Ovary Syndrome", yes_no(history.pcos))?;
    metric(out, "Tubal Factors", yes_no(history.tubal_factors))?;
    metric(
        out,
        "Fertility Preservation",
        yes_no(history.fertility_preservation),
    )?;
    metric(out, "Other Infertility Factors", yes_no(history.other_factors))?;
    metric(
        out,
        "Unexplained causes of infertility",
        yes_no(history.unexplained_infertility),
    )?;
    writeln!(out, "</div>")?;
    section_close(out)?;
    writeln!(out, "<hr/>")?;

    section_open(out, "Pathology")?;
    writeln!(out, "<div class=\"metric-grid cols-2\">")?;
    hormone_metric(out, &pathology.amh)?;
    hormone_metric(out, &pathology.e2)?;
    hormone_metric(out, &pathology.fsh)?;
    hormone_metric(out, &pathology.lh)?;
    writeln!(out, "</div>")?;
    section_close(out)?;
    writeln!(out, "<hr/>")?;

    section_open(out, "Summary of Results")?;
    writeln!(out, "<div class=\"callout\">")?;
    writeln!(
        out,
        "<p>Based on the input data, the <b>predicted number of oocytes is {}</b>.</p>",
        prediction.predicted_oocytes
    )?;
    writeln!(
        out,
        "<p>The most influential factor in this prediction is <b>{}</b>.</p>",
        esc(&prediction.influential_factor)
    )?;
    writeln!(
        out,
        "<p>The expected range of error in this prediction is between <b>{} and {:+} oocytes</b>.</p>",
        prediction.error_low, prediction.error_high
    )?;
    writeln!(out, "</div>")?;
    writeln!(
        out,
        "<div class=\"disclaimer\">{}</div>",
        esc(&prediction.disclaimer)
    )?;
    section_close(out)?;

    writeln!(out, "</div>")?;
    Ok(())
}

fn section_open(out: &mut String, title: &str) -> Result<()> {
    writeln!(out, "<section class=\"panel\">")?;
    writeln!(out, "<h2>{}</h2>", esc(title))?;
    Ok(())
}

fn section_close(out: &mut String) -> Result<()> {
    writeln!(out, "</section>")?;
    Ok(())
}

fn metric(out: &mut String, label: &str, value: &str) -> Result<()> {
    writeln!(out, "<div class=\"metric\">")?;
    writeln!(out, "<div class=\"metric-label\">{}</div>", esc(label))?;
    writeln!(out, "<div class=\"metric-value\">{}</div>", esc(value))?;
    writeln!(out, "</div>")?;
    Ok(())
}

fn hormone_metric(out: &mut String, m: &HormoneMeasurement) -> Result<()> {
    metric(out, &m.label, &format!("{} {}", m.value, m.unit))
}

fn yes_no(v: bool) -> &'static str {
    if v { "Yes" } else { "No" }
}

fn svg_box_plot(out: &mut String, spec: &BoxPlotSpec, w: f64, h: f64) -> Result<()> {
    writeln!(out, "<div class=\"plot\">")?;
    writeln!(
        out,
        "<svg width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">",
        w, h, w, h
    )?;
    let left = 56.0;
    let right = 16.0;
    let top = 12.0;
    let bottom = 44.0;
    let plot_w = w - left - right;
    let plot_h = h - top - bottom;
    writeln!(
        out,
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"#fff\" stroke=\"#ddd\"/>",
        left, top, plot_w, plot_h
    )?;

    let y_min = spec
        .traces
        .iter()
        .map(|t| t.summary.min)
        .fold(f64::INFINITY, f64::min);
    let y_max = spec
        .traces
        .iter()
        .map(|t| t.summary.max)
        .fold(f64::NEG_INFINITY, f64::max);
    let (y_min, y_max) = if spec.traces.is_empty() {
        (0.0, 1.0)
    } else {
        let span = (y_max - y_min).max(1e-9);
        (y_min - span * 0.05, y_max + span * 0.05)
    };
    let y_scale = plot_h / (y_max - y_min);
    let sy = |v: f64| top + plot_h - (v - y_min) * y_scale;

    draw_y_axis_ticks(out, left, top, plot_w, plot_h, y_min, y_max, 5)?;
    draw_axis_labels(out, left, top, plot_w, plot_h, "Parameter", "Value")?;

    let n = spec.traces.len().max(1) as f64;
    let x_step = plot_w / n;
    for (i, trace) in spec.traces.iter().enumerate() {
        let x = left + (i as f64 + 0.5) * x_step;
        let s = &trace.summary;
        let box_w = (x_step * 0.5).max(1.0);
        let box_x = x - box_w / 2.0;

        // Whiskers (min-max) with caps.
        writeln!(
            out,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"#555\" stroke-width=\"1\"/>",
            x,
            sy(s.max),
            x,
            sy(s.min)
        )?;
        let cap_w = (box_w * 0.6).max(1.0);
        for v in [s.min, s.max] {
            writeln!(
                out,
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"#555\" stroke-width=\"1\"/>",
                x - cap_w / 2.0,
                sy(v),
                x + cap_w / 2.0,
                sy(v)
            )?;
        }

        writeln!(
            out,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" fill-opacity=\"0.6\" stroke=\"{}\"/>",
            box_x,
            sy(s.q3),
            box_w,
            (sy(s.q1) - sy(s.q3)).max(0.0),
            spec.fill_color,
            spec.fill_color
        )?;
        writeln!(
            out,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"#333\" stroke-width=\"1.2\"/>",
            box_x,
            sy(s.median),
            box_x + box_w,
            sy(s.median)
        )?;

        writeln!(
            out,
            "<text x=\"{}\" y=\"{}\" font-size=\"10\" fill=\"#444\" text-anchor=\"middle\">{}</text>",
            x,
            top + plot_h + 14.0,
            esc(&trace.name)
        )?;
    }

    writeln!(out, "</svg></div>")?;
    Ok(())
}

fn svg_radar(out: &mut String, spec: &RadarPlotSpec, w: f64, h: f64) -> Result<()> {
    writeln!(out, "<div class=\"plot\">")?;
    writeln!(
        out,
        "<svg width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">",
        w, h, w, h
    )?;
    let cx = w / 2.0;
    let cy = h / 2.0;
    let radius = (w.min(h) / 2.0 - 48.0).max(10.0);

    writeln!(
        out,
        "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"rgba(240,240,240,0.8)\"/>",
        cx, cy, radius
    )?;
    for frac in [0.25, 0.5, 0.75, 1.0] {
        writeln!(
            out,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"none\" stroke=\"#ccc\" stroke-width=\"1\"/>",
            cx,
            cy,
            radius * frac
        )?;
        writeln!(
            out,
            "<text x=\"{}\" y=\"{}\" font-size=\"9\" fill=\"#888\">{}</text>",
            cx + 4.0,
            cy - radius * frac - 2.0,
            fmt_num(spec.radial_max * frac)
        )?;
    }

    let n = spec.axes.len();
    if n == 0 {
        writeln!(out, "</svg></div>")?;
        return Ok(());
    }

    let angle = |i: usize| -> f64 {
        -std::f64::consts::FRAC_PI_2 + (i as f64) * std::f64::consts::TAU / n as f64
    };

    for (i, name) in spec.axes.iter().enumerate() {
        let a = angle(i);
        let (sx, sy) = (cx + radius * a.cos(), cy + radius * a.sin());
        writeln!(
            out,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"#ddd\" stroke-width=\"1\"/>",
            cx, cy, sx, sy
        )?;
        let (lx, ly) = (cx + (radius + 14.0) * a.cos(), cy + (radius + 14.0) * a.sin());
        let anchor = if a.cos().abs() < 0.3 {
            "middle"
        } else if a.cos() > 0.0 {
            "start"
        } else {
            "end"
        };
        writeln!(
            out,
            "<text x=\"{}\" y=\"{}\" font-size=\"10\" fill=\"#444\" text-anchor=\"{}\" dominant-baseline=\"central\">{}</text>",
            lx,
            ly,
            anchor,
            esc(name)
        )?;
    }

    let mut points = String::new();
    for (i, v) in spec.values.iter().enumerate() {
        let frac = if spec.radial_max > 0.0 {
            (v / spec.radial_max).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let a = angle(i);
        let (px, py) = (cx + radius * frac * a.cos(), cy + radius * frac * a.sin());
        if i > 0 {
            points.push(' ');
        }
        write!(points, "{:.2},{:.2}", px, py)?;
    }
    writeln!(
        out,
        "<polygon points=\"{}\" fill=\"{}\" fill-opacity=\"0.35\" stroke=\"{}\" stroke-width=\"2\"/>",
        points, spec.line_color, spec.line_color
    )?;

    writeln!(out, "</svg></div>")?;
    Ok(())
}

fn draw_y_axis_ticks(
    out: &mut String,
    left: f64,
    top: f64,
    plot_w: f64,
    plot_h: f64,
    y_min: f64,
    y_max: f64,
    ticks: usize,
) -> Result<()> {
    for i in 0..=ticks {
        let frac = i as f64 / ticks as f64;
        let v = y_min + (y_max - y_min) * frac;
        let y = top + plot_h - plot_h * frac;
        writeln!(
            out,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"#eee\" stroke-width=\"1\"/>",
            left,
            y,
            left + plot_w,
            y
        )?;
        writeln!(
            out,
            "<text x=\"{}\" y=\"{}\" font-size=\"9\" fill=\"#888\" text-anchor=\"end\">{}</text>",
            left - 4.0,
            y + 3.0,
            fmt_num(v)
        )?;
    }
    Ok(())
}

fn draw_axis_labels(
    out: &mut String,
    left: f64,
    top: f64,
    plot_w: f64,
    plot_h: f64,
    x_label: &str,
    y_label: &str,
) -> Result<()> {
    writeln!(
        out,
        "<text x=\"{}\" y=\"{}\" font-size=\"11\" fill=\"#555\" text-anchor=\"middle\">{}</text>",
        left + plot_w / 2.0,
        top + plot_h + 32.0,
        esc(x_label)
    )?;
    writeln!(
        out,
        "<text x=\"{}\" y=\"{}\" font-size=\"11\" fill=\"#555\" text-anchor=\"middle\" transform=\"rotate(-90 {} {})\">{}</text>",
        14.0,
        top + plot_h / 2.0,
        14.0,
        top + plot_h / 2.0,
        esc(y_label)
    )?;
    Ok(())
}

fn fmt_num(v: f64) -> String {
    if v.abs() >= 100.0 {
        format!("{:.0}", v)
    } else if v.abs() >= 10.0 {
        format!("{:.1}", v)
    } else {
        format!("{:.2}", v)
    }
}

fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
