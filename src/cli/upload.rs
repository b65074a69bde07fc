use super::ui;
use crate::core::currency::format_number;
use crate::core::{
    CurrencyFormatter, FileHandle, HistoricalTrend, Notification, Notifier, UploadSimulator,
    UploadState, UploadedData,
};
use anyhow::{Context, Result};
use comfy_table::Cell;
use console::style;
use indicatif::ProgressBar;

/// Prints upload notifications above the active spinner.
pub struct ConsoleNotifier {
    progress: ProgressBar,
}

impl ConsoleNotifier {
    pub fn new(progress: ProgressBar) -> Self {
        Self { progress }
    }
}

pub fn notification_line(notification: &Notification) -> String {
    match notification {
        Notification::ValidationFailed { reason } => format!(
            "{} {}",
            ui::style_text("Invalid file type.", ui::StyleType::Error),
            reason
        ),
        Notification::ProcessingStarted => format!(
            "{} {}",
            style("Processing data...").cyan(),
            ui::style_text("AI is analyzing your booking data", ui::StyleType::Subtle)
        ),
        Notification::AnalysisComplete { records, file_name } => format!(
            "{} {} records analyzed from {}",
            style("Analysis complete!").green().bold(),
            format_number(f64::from(*records)),
            file_name
        ),
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: &Notification) {
        let line = notification_line(notification);
        self.progress.suspend(|| println!("{line}"));
    }
}

pub fn render_summary(data: &UploadedData) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Records"),
        ui::header_cell("Months"),
        ui::header_cell("Trends"),
    ]);
    table.add_row(vec![
        ui::value_cell(format_number(f64::from(data.records))),
        ui::value_cell(data.months.to_string()),
        ui::value_cell(data.trends.to_string()),
    ]);

    format!(
        "{}: {}\n\n{}",
        ui::style_text("Upload Complete", ui::StyleType::TotalLabel),
        ui::style_text(&data.file_name, ui::StyleType::TotalValue),
        table
    )
}

/// Quarterly trends with revenue shown in whole thousands.
pub fn render_trends(trends: &[HistoricalTrend], formatter: &CurrencyFormatter) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Period"),
        ui::header_cell("Avg Occupancy (%)"),
        ui::header_cell("Avg Revenue"),
    ]);
    for trend in trends {
        let thousands = (trend.avg_revenue as f64 / 1000.0).round();
        table.add_row(vec![
            Cell::new(&trend.period),
            ui::value_cell(trend.avg_occupancy.to_string()),
            ui::value_cell(format!("{}k", formatter.format_amount(thousands))),
        ]);
    }
    table.to_string()
}

pub fn show_trends(trends: &[HistoricalTrend], formatter: &CurrencyFormatter) {
    println!(
        "{}\n",
        ui::style_text("Historical Trends", ui::StyleType::Title)
    );
    println!("{}", render_trends(trends, formatter));
}

/// Runs the simulated upload of `file`, following progress on `progress`.
pub async fn run(
    simulator: &mut UploadSimulator,
    file: &FileHandle,
    progress: &ProgressBar,
    formatter: &CurrencyFormatter,
    json: bool,
) -> Result<()> {
    let mut updates = simulator.subscribe();
    let follower_pb = progress.clone();
    let follower = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().state;
            match state {
                UploadState::Uploading => follower_pb.set_message("Uploading file..."),
                UploadState::Analyzing => follower_pb.set_message("AI analyzing data..."),
                UploadState::Idle | UploadState::Complete => break,
            }
        }
    });

    let result = simulator.process(file).await;
    progress.finish_and_clear();
    follower.abort();

    let data = result.with_context(|| format!("Failed to process {}", file.name))?;
    let snapshot = simulator.snapshot();

    if json {
        let output =
            serde_json::to_string_pretty(&snapshot).context("Failed to serialize analysis")?;
        println!("{output}");
        return Ok(());
    }

    println!("\n{}", render_summary(&data));
    ui::print_separator();
    show_trends(&snapshot.trends, formatter);
    Ok(())
}
