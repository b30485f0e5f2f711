//! ASCII renderings of head movement.
//!
//! These are for reading results in a terminal: a per-stop chart of where
//! the head travels, and bars comparing total seek across policies.

use crate::core::geometry::Track;
use crate::scheduler::result::SimulationResult;

/// Marker for a serviced request.
const REQUEST_MARK: char = '●';
/// Marker for an edge waypoint.
const EDGE_MARK: char = '◆';
/// Marker for the starting head position.
const START_MARK: char = '▲';

/// Map a track to a column in `[0, width)`.
fn track_to_column(track: Track, disk_size: Track, width: usize) -> usize {
    if disk_size <= 1 || width <= 1 {
        return 0;
    }
    let last = (disk_size - 1) as f64;
    let col = (track.clamp(0, disk_size - 1) as f64 / last) * (width - 1) as f64;
    (col.round() as usize).min(width - 1)
}

/// Chart the head's path, one row per stop.
///
/// # Arguments
///
/// * `result` - Simulation to draw
/// * `disk_size` - Number of tracks, for scaling
/// * `width` - Chart width in characters (at least 2)
///
/// # Returns
///
/// A chart where each row shows the segment travelled to reach that stop,
/// ending in `●` for a request or `◆` for an edge waypoint.
pub fn head_movement_chart(result: &SimulationResult, disk_size: Track, width: usize) -> String {
    let width = width.max(2);
    let label_width = disk_size.saturating_sub(1).max(0).to_string().len().max(5);
    let mut lines = Vec::new();

    // Scale
    let last = disk_size.saturating_sub(1).max(0).to_string();
    let gap = width.saturating_sub(1 + last.len());
    lines.push(format!(
        "{:label_width$}  0{}{}",
        "track",
        " ".repeat(gap),
        last
    ));
    lines.push(format!("{}  {}", " ".repeat(label_width), "─".repeat(width)));

    // Start row
    let mut row = vec![' '; width];
    let mut prev = track_to_column(result.initial_position, disk_size, width);
    row[prev] = START_MARK;
    lines.push(format!(
        "{:>label_width$}  {}",
        result.initial_position,
        row.iter().collect::<String>()
    ));

    for (i, &track) in result.sequence.iter().enumerate() {
        let col = track_to_column(track, disk_size, width);
        let mut row = vec![' '; width];
        for cell in &mut row[prev.min(col)..=prev.max(col)] {
            *cell = '─';
        }
        row[col] = if result.waypoints.contains(&i) {
            EDGE_MARK
        } else {
            REQUEST_MARK
        };
        lines.push(format!(
            "{track:>label_width$}  {}",
            row.iter().collect::<String>()
        ));
        prev = col;
    }

    lines.join("\n")
}

/// Horizontal bar for a seek total relative to the largest one.
///
/// # Arguments
///
/// * `value` - Seek distance to draw
/// * `max` - Largest distance in the comparison
/// * `width` - Bar width in characters
pub fn seek_bar(value: u128, max: u128, width: usize) -> String {
    let pct = if max == 0 {
        0.0
    } else {
        value as f64 / max as f64
    };
    let filled = ((pct * width as f64) as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Table comparing total and average seek across results.
pub fn seek_comparison_bars(results: &[SimulationResult], max_width: usize) -> String {
    if results.is_empty() {
        return "(no results)".to_string();
    }

    let max_total = results.iter().map(|r| r.total_seek_time).max().unwrap_or(0);
    let max_label_len = results
        .iter()
        .map(|r| r.algorithm.as_str().len())
        .max()
        .unwrap_or(0);

    let lines: Vec<String> = results
        .iter()
        .map(|r| {
            format!(
                "│ {:max_label_len$} │ {:>7} {:>8.2} │ {}",
                r.algorithm.as_str(),
                r.total_seek_time,
                r.average_seek_time,
                seek_bar(r.total_seek_time, max_total, max_width)
            )
        })
        .collect();

    let border_len = max_label_len + 2;
    let header = format!("┌{}┬{}┐", "─".repeat(border_len), "─".repeat(18));
    let footer = format!("└{}┴{}┘", "─".repeat(border_len), "─".repeat(18));

    format!("{}\n{}\n{}", header, lines.join("\n"), footer)
}

/// Boxed text summary of one result.
pub fn result_summary(result: &SimulationResult) -> String {
    let sequence = result
        .sequence
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" → ");
    let metrics = result.metrics();

    let body = [
        format!("start:    {}", result.initial_position),
        format!("order:    {sequence}"),
        format!("total:    {}", result.total_seek_time),
        format!("average:  {:.2}", result.average_seek_time),
        format!("longest:  {}", metrics.longest_seek),
        format!("reversals: {}", metrics.direction_changes),
    ];

    let title = format!(" {} ", result.algorithm);
    let inner = body
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(title.chars().count())
        + 2;
    let left = (inner - title.chars().count()) / 2;
    let right = inner - title.chars().count() - left;

    let mut lines = vec![format!("┌{}{title}{}┐", "─".repeat(left), "─".repeat(right))];
    for line in &body {
        let pad = inner - 2 - line.chars().count();
        lines.push(format!("│ {line}{} │", " ".repeat(pad)));
    }
    lines.push(format!("└{}┘", "─".repeat(inner)));

    lines.join("\n")
}
