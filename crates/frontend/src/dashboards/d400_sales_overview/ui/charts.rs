use contracts::dashboards::d400_sales_overview::{Dimension, MonthlyPoint, RankingEntry};
use leptos::prelude::*;

use crate::shared::number_format::{format_brl, format_compact};

const CHART_WIDTH: f64 = 800.0;
const CHART_HEIGHT: f64 = 320.0;
const PAD_LEFT: f64 = 64.0;
const PAD_RIGHT: f64 = 24.0;
const PAD_TOP: f64 = 16.0;
const PAD_BOTTOM: f64 = 40.0;
const Y_TICKS: usize = 4;

/// Ranking labels longer than this are cut
pub const MAX_LABEL_CHARS: usize = 25;

pub const PALETTE: [&str; 10] = [
    "oklch(0.55 0.25 280)",
    "oklch(0.60 0.28 140)",
    "oklch(0.65 0.30 30)",
    "oklch(0.62 0.25 20)",
    "oklch(0.58 0.26 240)",
    "oklch(0.68 0.27 60)",
    "oklch(0.52 0.24 180)",
    "oklch(0.64 0.26 320)",
    "oklch(0.56 0.25 100)",
    "oklch(0.61 0.27 200)",
];

pub fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Label shown on the ranking; empty keys fall back to the dimension name
pub fn display_label(key: &str, dimension: Dimension) -> String {
    if key.trim().is_empty() {
        return dimension.label().to_string();
    }
    if key.chars().count() > MAX_LABEL_CHARS {
        let cut: String = key.chars().take(MAX_LABEL_CHARS).collect();
        format!("{}...", cut)
    } else {
        key.to_string()
    }
}

/// Bar widths in percent of the largest amount
pub fn bar_percentages(entries: &[RankingEntry]) -> Vec<f64> {
    let max = entries.iter().map(|e| e.amount).fold(0.0_f64, f64::max);
    entries
        .iter()
        .map(|e| {
            if max > 0.0 {
                (e.amount / max * 100.0).clamp(0.0, 100.0)
            } else {
                0.0
            }
        })
        .collect()
}

fn scale_max(values: &[f64]) -> f64 {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    if max > 0.0 {
        max
    } else {
        1.0
    }
}

/// SVG coordinates of the line chart vertices
pub fn line_points(values: &[f64]) -> Vec<(f64, f64)> {
    let plot_w = CHART_WIDTH - PAD_LEFT - PAD_RIGHT;
    let plot_h = CHART_HEIGHT - PAD_TOP - PAD_BOTTOM;
    let max = scale_max(values);
    let step = if values.len() > 1 {
        plot_w / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = if values.len() > 1 {
                PAD_LEFT + step * i as f64
            } else {
                PAD_LEFT + plot_w / 2.0
            };
            let y = PAD_TOP + plot_h - (v.max(0.0) / max) * plot_h;
            (x, y)
        })
        .collect()
}

/// Y-axis ticks as (y coordinate, label), bottom to top
fn y_ticks(values: &[f64]) -> Vec<(f64, String)> {
    let plot_h = CHART_HEIGHT - PAD_TOP - PAD_BOTTOM;
    let max = scale_max(values);
    (0..=Y_TICKS)
        .map(|i| {
            let fraction = i as f64 / Y_TICKS as f64;
            let y = PAD_TOP + plot_h - fraction * plot_h;
            (y, format_compact(max * fraction))
        })
        .collect()
}

/// Monthly evolution line chart
#[component]
pub fn MonthlyLineChart(#[prop(into)] points: Signal<Vec<MonthlyPoint>>) -> impl IntoView {
    let view_box = format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT);

    view! {
        <svg class="line-chart" viewBox=view_box width="100%" height="350">
            {move || {
                let points = points.get();
                let values: Vec<f64> = points.iter().map(|p| p.amount).collect();
                let coords = line_points(&values);
                let polyline = coords
                    .iter()
                    .map(|(x, y)| format!("{:.1},{:.1}", x, y))
                    .collect::<Vec<_>>()
                    .join(" ");

                let grid = y_ticks(&values)
                    .into_iter()
                    .map(|(y, label)| {
                        let y = format!("{:.1}", y);
                        view! {
                            <line class="line-chart__grid" x1=PAD_LEFT.to_string() x2=(CHART_WIDTH - PAD_RIGHT).to_string() y1=y.clone() y2=y.clone() stroke-dasharray="3 3"/>
                            <text class="line-chart__tick" x=(PAD_LEFT - 8.0).to_string() y=y text-anchor="end" font-size="11">{label}</text>
                        }
                    })
                    .collect_view();

                let dots = points
                    .iter()
                    .zip(coords.iter())
                    .map(|(point, (x, y))| {
                        let tooltip = format!("{}: {}", point.label, format_brl(point.amount));
                        let short: String = point.label.chars().take(3).collect();
                        view! {
                            <circle class="line-chart__dot" cx=format!("{:.1}", x) cy=format!("{:.1}", y) r="5" aria-label=tooltip/>
                            <text class="line-chart__label" x=format!("{:.1}", x) y=(CHART_HEIGHT - 12.0).to_string() text-anchor="middle" font-size="12">{short}</text>
                        }
                    })
                    .collect_view();

                view! {
                    {grid}
                    <polyline class="line-chart__line" points=polyline fill="none" stroke-width="3"/>
                    {dots}
                }
            }}
        </svg>
    }
}

/// Horizontal top-N ranking bars
#[component]
pub fn RankingBarChart(
    #[prop(into)] entries: Signal<Vec<RankingEntry>>,
    dimension: Dimension,
) -> impl IntoView {
    view! {
        <div class="ranking-chart">
            {move || {
                let entries = entries.get();
                if entries.is_empty() {
                    return view! { <div class="ranking-chart__empty">"Sem dados"</div> }.into_any();
                }
                let widths = bar_percentages(&entries);
                entries
                    .into_iter()
                    .zip(widths)
                    .enumerate()
                    .map(|(idx, (entry, width))| {
                        let style = format!("width: {:.1}%; background: {};", width, color_for(idx));
                        view! {
                            <div class="ranking-chart__row" title=format_brl(entry.amount)>
                                <span class="ranking-chart__label">{display_label(&entry.key, dimension)}</span>
                                <div class="ranking-chart__track">
                                    <div class="ranking-chart__bar" style=style></div>
                                </div>
                                <span class="ranking-chart__value">{format_compact(entry.amount)}</span>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, amount: f64) -> RankingEntry {
        RankingEntry {
            key: key.to_string(),
            amount,
        }
    }

    #[test]
    fn test_display_label_truncates_long_names() {
        let long = "Distribuidora de Papelaria Central Ltda";
        let label = display_label(long, Dimension::Product);
        assert_eq!(label, "Distribuidora de Papelari...");
        assert_eq!(display_label("Caneta", Dimension::Product), "Caneta");
        assert_eq!(display_label("", Dimension::Product), "Produto");
    }

    #[test]
    fn test_bar_percentages() {
        let widths = bar_percentages(&[entry("a", 200.0), entry("b", 50.0), entry("c", 0.0)]);
        assert_eq!(widths, vec![100.0, 25.0, 0.0]);
        assert_eq!(bar_percentages(&[entry("a", 0.0)]), vec![0.0]);
        assert!(bar_percentages(&[]).is_empty());
    }

    #[test]
    fn test_line_points_span_plot_area() {
        let points = line_points(&[0.0, 50.0, 100.0]);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].0, PAD_LEFT);
        assert_eq!(points[2].0, CHART_WIDTH - PAD_RIGHT);
        // zero sits on the baseline, the max touches the top padding
        assert_eq!(points[0].1, CHART_HEIGHT - PAD_BOTTOM);
        assert_eq!(points[2].1, PAD_TOP);
    }

    #[test]
    fn test_line_points_all_zero_stay_on_baseline() {
        let points = line_points(&[0.0; 12]);
        assert!(points.iter().all(|(_, y)| *y == CHART_HEIGHT - PAD_BOTTOM));
    }

    #[test]
    fn test_single_point_is_centered() {
        let points = line_points(&[10.0]);
        let plot_w = CHART_WIDTH - PAD_LEFT - PAD_RIGHT;
        assert_eq!(points[0].0, PAD_LEFT + plot_w / 2.0);
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(color_for(0), color_for(PALETTE.len()));
        assert_ne!(color_for(0), color_for(1));
    }
}
