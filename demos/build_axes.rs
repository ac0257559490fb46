//! Builds the axes for a small two-series chart and prints the
//! persistable configs as JSON.
//!
//! Run with `cargo run --example build_axes`.

use chart_axes::core::parse_upload_date;
use chart_axes::{
    build_time_axis, build_y_axes, DataEntry, SeriesConfig, SeriesKind, XAxisConfig, YAxisSide,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = chart_axes::telemetry::init_default_tracing();

    // Unemployment rate (percent, left) against GDP (billions, right).
    let rows = [
        ("01/01/2019", 3.9, 21_000.0),
        ("01/07/2019", 3.7, 21_300.0),
        ("01/01/2020", 3.5, 21_700.0),
        ("01/07/2020", 10.2, 19_500.0),
        ("01/01/2021", 6.2, 22_000.0),
        ("01/07/2021", 5.4, 23_200.0),
        ("01/01/2022", 4.0, 24_400.0),
    ];

    let entries = rows
        .iter()
        .map(|(date, rate, gdp)| Ok(DataEntry::new(parse_upload_date(date)?, vec![*rate, *gdp])))
        .collect::<Result<Vec<_>, chart_axes::AxisError>>()?;

    let series = vec![
        SeriesConfig {
            series: 0,
            kind: SeriesKind::LineChart,
            side: YAxisSide::Left,
            color: Some("#cc2936".to_owned()),
            bar_width: None,
        },
        SeriesConfig {
            series: 1,
            kind: SeriesKind::LineChart,
            side: YAxisSide::Right,
            color: Some("#08415c".to_owned()),
            bar_width: None,
        },
    ];

    let dates: Vec<_> = entries.iter().map(|entry| entry.x).collect();
    let x_axis = build_time_axis(&dates, None)?;
    let y_axes = build_y_axes(&entries, &series, 480.0, None)?;

    println!(
        "x axis:\n{}\n",
        serde_json::to_string_pretty(&XAxisConfig::Time(x_axis.config))?
    );
    if let Some(left) = &y_axes.left {
        println!("left y axis:\n{}\n", serde_json::to_string_pretty(&left.config)?);
        for tick in left.config.ticks_config.ticks() {
            println!("  left tick {:>10} at {}", tick.label, tick.value);
        }
    }
    if let Some(right) = &y_axes.right {
        println!(
            "\nright y axis:\n{}",
            serde_json::to_string_pretty(&right.config)?
        );
    }
    println!("\ngridlines reconciled: {}", y_axes.converged);

    Ok(())
}
