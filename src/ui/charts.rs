use chrono::{Datelike, NaiveDate};
use eframe::egui::{self, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};

use crate::color;
use crate::data::model::{CategoryOrdersRow, CategoryRateRow, DailyOrdersRow};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Central panel – dashboard charts
// ---------------------------------------------------------------------------

/// Render all dashboard charts for the current date range.
pub fn dashboard_charts(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a CSV to view orders  (File → Open…)");
        });
        return;
    }

    if state.filtered.is_empty() {
        ui.label("No orders in the selected date range.");
        return;
    }

    ui.heading("Daily Sales");
    daily_line_chart(
        ui,
        "daily_order_count",
        "orders",
        state,
        color::sales_accent(),
        |row| row.unique_orders as f64,
    );
    ui.add_space(8.0);
    daily_line_chart(
        ui,
        "daily_revenue",
        "US$",
        state,
        color::warning_accent(),
        |row| row.total_price,
    );

    ui.add_space(12.0);
    ui.heading("Category Sales");
    category_sales_charts(ui, &state.by_category);

    ui.add_space(12.0);
    ui.heading("Category Ratings");
    ui.columns(2, |cols| {
        rate_bar_chart(
            &mut cols[0],
            "high_rating",
            "Most High Ratings",
            &state.high_rate,
            color::sales_accent(),
        );
        rate_bar_chart(
            &mut cols[1],
            "low_rating",
            "Most Low Ratings",
            &state.low_rate,
            color::warning_accent(),
        );
    });
}

// ---------------------------------------------------------------------------
// Daily line charts
// ---------------------------------------------------------------------------

/// One line over the daily table; x is the order date, y is a chosen column.
fn daily_line_chart(
    ui: &mut Ui,
    id: &str,
    y_label: &str,
    state: &AppState,
    accent: egui::Color32,
    y_value: impl Fn(&DailyOrdersRow) -> f64,
) {
    let points: PlotPoints = state
        .daily
        .iter()
        .map(|row| [row.order_date.num_days_from_ce() as f64, y_value(row)])
        .collect();

    let line = Line::new(points).color(accent).width(2.0);

    Plot::new(id.to_string())
        .height(200.0)
        .y_axis_label(y_label)
        .x_axis_formatter(|mark, _range| format_day_tick(mark.value))
        .label_formatter(|_name, value| {
            format!("{}\n{:.2}", format_day_tick(value.x), value.y)
        })
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });
}

/// Turn a fractional days-from-ce x coordinate back into a date label.
fn format_day_tick(value: f64) -> String {
    let days = value.round() as i32;
    if (value - f64::from(days)).abs() > 1e-6 {
        return String::new();
    }
    NaiveDate::from_num_days_from_ce_opt(days)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Ranked horizontal bar charts
// ---------------------------------------------------------------------------

const TOP_N: usize = 5;

/// Best- and worst-selling categories by units sold, side by side.
fn category_sales_charts(ui: &mut Ui, by_category: &[CategoryOrdersRow]) {
    let mut ranked: Vec<&CategoryOrdersRow> = by_category.iter().collect();
    ranked.sort_by(|a, b| b.unique_orders.cmp(&a.unique_orders));

    let best: Vec<(String, f64)> = ranked
        .iter()
        .take(TOP_N)
        .map(|row| (row.category.clone(), row.unique_orders as f64))
        .collect();
    let worst: Vec<(String, f64)> = ranked
        .iter()
        .rev()
        .take(TOP_N)
        .map(|row| (row.category.clone(), row.unique_orders as f64))
        .collect();

    ui.columns(2, |cols| {
        ranked_bar_chart(
            &mut cols[0],
            "best_sellers",
            "Best Selling",
            &best,
            color::sales_accent(),
        );
        ranked_bar_chart(
            &mut cols[1],
            "worst_sellers",
            "Worst Selling",
            &worst,
            color::warning_accent(),
        );
    });
}

/// Top-N rating-rate chart; rows arrive already sorted descending by rate.
fn rate_bar_chart(
    ui: &mut Ui,
    id: &str,
    title: &str,
    rows: &[CategoryRateRow],
    accent: egui::Color32,
) {
    let top: Vec<(String, f64)> = rows
        .iter()
        .take(TOP_N)
        .map(|row| (row.category.clone(), row.rate))
        .collect();
    ranked_bar_chart(ui, id, title, &top, accent);
}

/// Horizontal bar chart with the leading entry at the top, accent on the
/// leader and gray on the rest. Category names go on the y axis.
fn ranked_bar_chart(
    ui: &mut Ui,
    id: &str,
    title: &str,
    rows: &[(String, f64)],
    accent: egui::Color32,
) {
    ui.strong(title);
    if rows.is_empty() {
        ui.label("no data");
        return;
    }

    let n = rows.len();
    let fills = color::ranked_fills(n, accent);
    let bars: Vec<Bar> = rows
        .iter()
        .zip(fills)
        .enumerate()
        .map(|(i, ((name, value), fill))| {
            // rank 0 gets the highest y so the leader renders on top
            Bar::new((n - 1 - i) as f64, *value)
                .name(name)
                .fill(fill)
        })
        .collect();

    let labels: Vec<String> = rows.iter().map(|(name, _)| name.clone()).collect();

    Plot::new(id.to_string())
        .height(170.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .legend(Legend::default())
        .y_axis_formatter(move |mark, _range| {
            let i = mark.value.round();
            if (mark.value - i).abs() > 1e-6 || i < 0.0 {
                return String::new();
            }
            let rank = n.saturating_sub(1).checked_sub(i as usize);
            rank.and_then(|r| labels.get(r))
                .cloned()
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal());
        });
}
