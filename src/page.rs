//! HTML rendering of the revenue calculator page

use std::fmt::{self, Write};

use crate::chart::{format_usd, ChartSeries};
use crate::inputs::{
    ProjectionInputs, EXISTING_PROJECTS_PARAM, NEW_PROJECTS_PARAM, REFERRALS_PARAM,
};

/// Brand colour used for chart bars
pub const BAR_COLOR: &str = "#afcc54";

const CHART_WIDTH: f64 = 720.0;
const CHART_HEIGHT: f64 = 300.0;
const AXIS_WIDTH: f64 = 150.0;
const LABEL_HEIGHT: f64 = 40.0;

/// Range slider definition: (parameter, caption, min, max)
const SLIDERS: [(&str, &str, i64, i64); 3] = [
    (REFERRALS_PARAM, "Referred Customers per month", 1, 10),
    (NEW_PROJECTS_PARAM, "Avg. new projects per month", 5, 50),
    (EXISTING_PROJECTS_PARAM, "Avg. existing projects", 0, 10000),
];

/// Render the complete calculator page
pub fn render_page(inputs: &ProjectionInputs, series: &ChartSeries) -> Result<String, fmt::Error> {
    let values = [
        inputs.referred_customers_per_month,
        inputs.avg_new_projects_per_month,
        inputs.avg_existing_projects,
    ];

    let mut sliders = String::new();
    for ((name, caption, min, max), value) in SLIDERS.iter().zip(values) {
        write!(
            sliders,
            r#"
      <div class="slider">
        <label for="{name}"><span>{caption}</span><strong>{value}</strong></label>
        <input type="range" id="{name}" name="{name}" min="{min}" max="{max}" value="{value}" onchange="this.form.submit()">
      </div>"#,
            name = name,
            caption = caption,
            min = min,
            max = max,
            value = value,
        )?;
    }

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Affiliate Revenue Calculator</title>
  <meta name="description" content="Affiliate Revenue Calculator">
  <style>
    body {{ font-family: sans-serif; color: #3f3e45; display: flex; flex-direction: column; align-items: center; padding: 1rem; }}
    .layout {{ display: flex; flex-wrap: wrap; gap: 2rem; justify-content: center; max-width: 72rem; }}
    .controls {{ max-width: 32rem; width: 100%; }}
    .slider label {{ display: flex; justify-content: space-between; font-size: 0.875rem; }}
    .slider input {{ width: 100%; }}
    .headline {{ font-size: 2.25rem; font-weight: bold; }}
  </style>
</head>
<body>
  <h1>Calculate Your Recurring <br> Passive Income</h1>
  <div class="layout">
    <div class="controls">
      <p>Add in your expected referrals to see how much you could earn as an <strong>Affiliate</strong> in just 1 year</p>
      <form method="get">{sliders}
      </form>
      <p>Your <strong>monthly income</strong> after 1 year:</p>
      <p class="headline">{headline}</p>
    </div>
    <div class="chart">
{chart}
    </div>
  </div>
</body>
</html>
"#,
        sliders = sliders,
        headline = format_usd(series.headline()),
        chart = render_bar_chart(series)?,
    ))
}

/// Render the series as an inline SVG bar chart
pub fn render_bar_chart(series: &ChartSeries) -> Result<String, fmt::Error> {
    let total_width = AXIS_WIDTH + CHART_WIDTH;
    let total_height = CHART_HEIGHT + LABEL_HEIGHT;

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img">"#,
        w = total_width,
        h = total_height,
    );

    let max = series.max_value();
    write!(
        svg,
        r##"<text x="{x}" y="12" text-anchor="end" font-size="12">{top}</text><text x="{x}" y="{bottom}" text-anchor="end" font-size="12">{zero}</text>"##,
        x = AXIS_WIDTH - 8.0,
        bottom = CHART_HEIGHT,
        top = format_usd(max),
        zero = format_usd(0.0),
    )?;

    if !series.bars.is_empty() {
        let slot = CHART_WIDTH / series.bars.len() as f64;
        let bar_width = slot * 0.7;

        for (i, bar) in series.bars.iter().enumerate() {
            let height = if max > 0.0 {
                (bar.value.max(0.0) / max) * CHART_HEIGHT
            } else {
                0.0
            };
            let x = AXIS_WIDTH + i as f64 * slot + (slot - bar_width) / 2.0;
            let y = CHART_HEIGHT - height;

            write!(
                svg,
                r#"<rect x="{x:.1}" y="{y:.1}" width="{bw:.1}" height="{height:.1}" fill="{color}"><title>{label}: {value}</title></rect><text x="{cx:.1}" y="{ly:.1}" text-anchor="middle" font-size="11">{label}</text>"#,
                x = x,
                y = y,
                bw = bar_width,
                height = height,
                color = BAR_COLOR,
                label = bar.label,
                value = format_usd(bar.value),
                cx = x + bar_width / 2.0,
                ly = CHART_HEIGHT + 16.0,
            )?;
        }
    }

    svg.push_str("</svg>");
    Ok(svg)
}
