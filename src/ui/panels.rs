use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::DatePickerButton;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – date range and headline metrics
// ---------------------------------------------------------------------------

/// Render the left panel: date-range pickers and summary metrics.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Date Range");
    ui.separator();

    let (min_date, max_date) = match &state.dataset {
        Some(ds) => (ds.min_date, ds.max_date),
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    let mut start = state.start_date;
    let mut end = state.end_date;
    let mut changed = false;

    ui.label("From");
    changed |= ui
        .add(DatePickerButton::new(&mut start).id_salt("start_date"))
        .changed();
    ui.label("To");
    changed |= ui
        .add(DatePickerButton::new(&mut end).id_salt("end_date"))
        .changed();

    if ui.small_button("Full range").clicked() {
        start = min_date;
        end = max_date;
        changed = true;
    }

    if changed {
        // set_date_range clamps to [min_date, max_date]
        state.set_date_range(start, end);
    }

    ui.label(
        RichText::new(format!("dataset spans {min_date} – {max_date}"))
            .small()
            .weak(),
    );

    ui.separator();
    ui.strong("Total Orders");
    ui.label(RichText::new(state.total_orders().to_string()).size(22.0));
    ui.add_space(4.0);
    ui.strong("Total Revenue");
    ui.label(RichText::new(format_usd(state.total_revenue())).size(22.0));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} line items loaded, {} in range",
                ds.len(),
                state.filtered.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open orders data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_csv(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} line items spanning {} – {}",
                    dataset.len(),
                    dataset.min_date,
                    dataset.max_date
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                // keep whatever was on screen; just surface the failure
                log::error!("Failed to load file: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Currency formatting (UI boundary only; aggregates stay raw numbers)
// ---------------------------------------------------------------------------

/// Fixed single-locale USD format: `US$ 1,234.56`.
fn format_usd(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}US$ {grouped}.{frac:02}")
}

#[cfg(test)]
mod tests {
    use super::format_usd;

    #[test]
    fn formats_with_thousands_grouping() {
        assert_eq!(format_usd(0.0), "US$ 0.00");
        assert_eq!(format_usd(7.5), "US$ 7.50");
        assert_eq!(format_usd(1234.56), "US$ 1,234.56");
        assert_eq!(format_usd(1_234_567.891), "US$ 1,234,567.89");
        assert_eq!(format_usd(-99.999), "-US$ 100.00");
    }
}
