// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Rendering is split in two. [`render_app`] turns the [`AppState`] into a flat list of
//! [`RenderOp`]s without touching the terminal, which is what the tests check. Then
//! [`paint`] queues those ops as crossterm commands and flushes once.
//!
//! Screen layout, top to bottom:
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │ status line                                   │
//! │ bars (everything that is left over)           │
//! │ info panel (title, complexity, pros, cons,    │
//! │             code listing)                     │
//! │ key help                                      │
//! └───────────────────────────────────────────────┘
//! ```

use std::io::Write;

use crossterm::{cursor::MoveTo,
                queue,
                style::{Attribute, Color, Print, ResetColor, SetAttribute,
                        SetForegroundColor},
                terminal::{Clear, ClearType}};
use miette::IntoDiagnostic;

use crate::{AppState, CodeListing, CommonResult, Control, Element, RunPhase, Sequence,
            VALUE_RANGE, WindowSize, descriptor};

pub const MIN_COLS: u16 = 60;
pub const MIN_ROWS: u16 = 24;

/// Rows reserved for the code listing. The longest listing fits.
const LISTING_ROWS: u16 = 10;
/// Title + complexity + pros + cons + listing header + listing.
const INFO_PANEL_ROWS: u16 = 5 + LISTING_ROWS;
const STATUS_ROWS: u16 = 1;
const HELP_ROWS: u16 = 1;

const BAR_GLYPH: char = '█';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOp {
    ClearScreen,
    MoveTo { col: u16, row: u16 },
    SetFgColor(Color),
    SetAttribute(Attribute),
    ResetColor,
    PrintText(String),
}

pub type RenderOps = Vec<RenderOp>;

/// The color of a bar. The marks are independent flags, so when more than one is set
/// the most transient one wins.
#[must_use]
pub fn bar_color(element: &Element) -> Color {
    let marks = element.marks;
    if marks.swapping {
        Color::Red
    } else if marks.comparing {
        Color::Yellow
    } else if marks.sorted {
        Color::Green
    } else {
        Color::Cyan
    }
}

/// Height of a bar in cells, for a bar area `rows` tall. Never zero, so every element
/// stays visible.
#[must_use]
pub fn bar_height(value: u32, rows: u16) -> u16 {
    let scaled = u64::from(value) * u64::from(rows) / u64::from(VALUE_RANGE.end);
    u16::try_from(scaled).unwrap_or(rows).clamp(1, rows.max(1))
}

/// The smallest window that fits `bar_count` bars plus the info panel.
#[must_use]
pub fn min_window_size(bar_count: usize) -> WindowSize {
    WindowSize {
        cols: MIN_COLS.max(u16::try_from(bar_count).unwrap_or(u16::MAX)),
        rows: MIN_ROWS,
    }
}

#[must_use]
pub fn render_app(state: &AppState) -> RenderOps {
    let sequence = state.session.snapshot();
    let window_size = state.window_size;
    let min_size = min_window_size(sequence.len());

    let mut ops = vec![RenderOp::ClearScreen];
    if window_size.cols < min_size.cols || window_size.rows < min_size.rows {
        render_window_too_small(&mut ops, window_size, min_size);
        return ops;
    }

    let bar_rows = window_size.rows - STATUS_ROWS - INFO_PANEL_ROWS - HELP_ROWS;

    render_status_line(&mut ops, state, window_size.cols);
    render_bars(&mut ops, &sequence, STATUS_ROWS, bar_rows, window_size.cols);
    render_info_panel(&mut ops, state, STATUS_ROWS + bar_rows, window_size.cols);
    render_help_line(&mut ops, state, window_size.rows - 1, window_size.cols);
    ops
}

fn render_window_too_small(ops: &mut RenderOps, window_size: WindowSize, min: WindowSize) {
    let message = truncate(
        &format!(
            "Window size is too small. Minimum size is {} cols x {} rows",
            min.cols, min.rows
        ),
        window_size.cols,
    );
    let len = u16::try_from(message.chars().count()).unwrap_or(window_size.cols);
    ops.extend([
        RenderOp::ResetColor,
        RenderOp::MoveTo {
            col: window_size.cols.saturating_sub(len) / 2,
            row: window_size.rows / 2,
        },
        RenderOp::SetAttribute(Attribute::Bold),
        RenderOp::SetFgColor(Color::Red),
        RenderOp::PrintText(message),
        RenderOp::ResetColor,
    ]);
}

fn render_status_line(ops: &mut RenderOps, state: &AppState, cols: u16) {
    let session = &state.session;
    let phase = match session.phase() {
        RunPhase::Idle => "Idle",
        RunPhase::Running { .. } => "Running",
    };
    let speed = session.speed();
    let mut line = format!(
        " sortviz │ {} │ {phase} │ speed {} ({}ms) │ {} bars",
        descriptor(session.selected_algorithm()).title,
        speed.get(),
        speed.delay().as_millis(),
        session.bar_count(),
    );
    if let Some(notice) = &state.maybe_notice {
        line.push_str(" │ ");
        line.push_str(notice);
    }

    ops.extend([
        RenderOp::MoveTo { col: 0, row: 0 },
        RenderOp::SetAttribute(Attribute::Bold),
        RenderOp::PrintText(truncate(&line, cols)),
        RenderOp::ResetColor,
    ]);
}

/// Bars are bottom aligned in the rows `top..top + rows`, each `cols / n` cells wide,
/// and centered as a group.
fn render_bars(ops: &mut RenderOps, sequence: &Sequence, top: u16, rows: u16, cols: u16) {
    let Ok(count) = u16::try_from(sequence.len()) else {
        return;
    };
    if count == 0 || rows == 0 {
        return;
    }
    let bar_width = (cols / count).max(1);
    let left = cols.saturating_sub(bar_width * count) / 2;
    let glyphs = BAR_GLYPH.to_string().repeat(usize::from(bar_width));
    let bottom = top + rows - 1;

    for (col_index, element) in (0..count).zip(sequence.elements()) {
        let col = left + col_index * bar_width;
        ops.push(RenderOp::SetFgColor(bar_color(element)));
        for offset in 0..bar_height(element.value, rows) {
            ops.extend([
                RenderOp::MoveTo {
                    col,
                    row: bottom - offset,
                },
                RenderOp::PrintText(glyphs.clone()),
            ]);
        }
    }
    ops.push(RenderOp::ResetColor);
}

fn render_info_panel(ops: &mut RenderOps, state: &AppState, top: u16, cols: u16) {
    let it = descriptor(state.session.selected_algorithm());
    let complexity = &it.complexity;

    let header_lines = [
        (Color::Magenta, format!("{}: {}", it.title, it.description)),
        (
            Color::White,
            format!(
                "Best {}  Average {}  Worst {}  Space {}",
                complexity.best, complexity.average, complexity.worst, complexity.space
            ),
        ),
        (Color::Green, format!("Pros: {}", it.pros.join(" · "))),
        (Color::Red, format!("Cons: {}", it.cons.join(" · "))),
        (Color::Blue, listing_header(state.code_listing)),
    ];

    let mut row = top;
    for (color, text) in header_lines {
        ops.extend([
            RenderOp::MoveTo { col: 1, row },
            RenderOp::SetFgColor(color),
            RenderOp::PrintText(truncate(&text, cols.saturating_sub(1))),
        ]);
        row += 1;
    }

    ops.push(RenderOp::SetFgColor(Color::Grey));
    for line in it.listing(state.code_listing).iter().take(usize::from(LISTING_ROWS)) {
        ops.extend([
            RenderOp::MoveTo { col: 3, row },
            RenderOp::PrintText(truncate(line, cols.saturating_sub(3))),
        ]);
        row += 1;
    }
    ops.push(RenderOp::ResetColor);
}

fn listing_header(listing: CodeListing) -> String {
    format!("{listing} (c: next listing)")
}

/// Help entries, in display order.
const HELP_ENTRIES: [(&str, Control); 9] = [
    ("1-4/←→ algorithm", Control::AlgorithmSelector),
    ("⏎ start", Control::Start),
    ("x stop", Control::Stop),
    ("+/- speed", Control::Speed),
    ("[/] bars", Control::BarCount),
    ("s shuffle", Control::Shuffle),
    ("r reset", Control::Reset),
    ("c code", Control::CodeListing),
    ("q quit", Control::Exit),
];

fn render_help_line(ops: &mut RenderOps, state: &AppState, row: u16, cols: u16) {
    let controls = state.session.controls();
    ops.push(RenderOp::MoveTo { col: 1, row });

    let mut used: u16 = 1;
    for (label, control) in HELP_ENTRIES {
        let text = format!("{label}  ");
        let width = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        if used.saturating_add(width) > cols {
            break;
        }
        used += width;

        let attribute = if controls.is_enabled(control) {
            Attribute::Bold
        } else {
            Attribute::Dim
        };
        ops.extend([
            RenderOp::SetAttribute(attribute),
            RenderOp::PrintText(text),
            RenderOp::SetAttribute(Attribute::Reset),
        ]);
    }
}

/// Cuts `text` down to at most `cols` chars.
fn truncate(text: &str, cols: u16) -> String { text.chars().take(usize::from(cols)).collect() }

/// Queues every op and flushes once at the end.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn paint(ops: &[RenderOp], out: &mut impl Write) -> CommonResult<()> {
    for op in ops {
        let result = match op {
            RenderOp::ClearScreen => queue!(out, Clear(ClearType::All)),
            RenderOp::MoveTo { col, row } => queue!(out, MoveTo(*col, *row)),
            RenderOp::SetFgColor(color) => queue!(out, SetForegroundColor(*color)),
            RenderOp::SetAttribute(attribute) => queue!(out, SetAttribute(*attribute)),
            RenderOp::ResetColor => {
                queue!(out, ResetColor, SetAttribute(Attribute::Reset))
            }
            RenderOp::PrintText(text) => queue!(out, Print(text)),
        };
        result.into_diagnostic()?;
    }
    out.flush().into_diagnostic()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Marks, SessionOptions, new_engine_signal_channel};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn new_state(values: &[u32], window_size: WindowSize) -> AppState {
        let (sender, _receiver) = new_engine_signal_channel();
        let mut state = AppState::new(SessionOptions::default(), sender, window_size);
        state.session.load_values(values.iter().copied()).unwrap();
        state
    }

    fn printed_text(ops: &RenderOps) -> String {
        ops.iter()
            .filter_map(|op| match op {
                RenderOp::PrintText(text) => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test_case(310, 20, 20)]
    #[test_case(155, 20, 10)]
    #[test_case(10, 20, 1 ; "small values still get one cell")]
    #[test_case(0, 20, 1)]
    #[test_case(309, 8, 7)]
    fn test_bar_height(value: u32, rows: u16, expected: u16) {
        assert_eq!(bar_height(value, rows), expected);
    }

    #[test]
    fn test_bar_color_priority() {
        let mut element = Element::from(50);
        assert_eq!(bar_color(&element), Color::Cyan);
        element.marks = Marks {
            sorted: true,
            ..Marks::default()
        };
        assert_eq!(bar_color(&element), Color::Green);
        element.marks.comparing = true;
        assert_eq!(bar_color(&element), Color::Yellow);
        element.marks.swapping = true;
        assert_eq!(bar_color(&element), Color::Red);
    }

    #[test]
    fn test_too_small_window_shows_only_the_warning() {
        let state = new_state(&[10, 20, 30], WindowSize { cols: 100, rows: 10 });
        let ops = render_app(&state);
        let text = printed_text(&ops);
        assert_eq!(text, "Window size is too small. Minimum size is 60 cols x 24 rows");
        assert!(!text.contains(BAR_GLYPH));
    }

    #[test]
    fn test_window_must_be_as_wide_as_the_bar_count() {
        assert_eq!(min_window_size(60).cols, 60);
        assert_eq!(min_window_size(100).cols, 100);
        assert_eq!(min_window_size(10).cols, MIN_COLS);
    }

    #[test]
    fn test_full_render_has_every_section() {
        let state = new_state(&[310, 155, 10], WindowSize { cols: 120, rows: 30 });
        let ops = render_app(&state);
        let text = printed_text(&ops);

        assert!(text.contains("Bubble Sort │ Idle │ speed 51 (50ms) │ 60 bars"));
        assert!(text.contains("Best O(n)  Average O(n²)  Worst O(n²)  Space O(1)"));
        assert!(text.contains("Pros: Simple to implement · Best case O(n) when nearly sorted"));
        assert!(text.contains("Pseudocode (c: next listing)"));
        assert!(text.contains("repeat n-1 times"));
        assert!(text.contains("q quit"));

        // 30 - 1 status - 15 info - 1 help = 13 rows of bars: 13 + 6 + 1 cells.
        let bar_cells = ops
            .iter()
            .filter(|op| matches!(op, RenderOp::PrintText(it) if it.starts_with(BAR_GLYPH)))
            .count();
        assert_eq!(bar_cells, 13 + 6 + 1);
    }

    #[test]
    fn test_bars_are_bottom_aligned_and_share_the_width() {
        let state = new_state(&[310, 10], WindowSize { cols: 80, rows: 30 });
        let ops = render_app(&state);
        let bar_rows = 30 - STATUS_ROWS - INFO_PANEL_ROWS - HELP_ROWS;
        let bottom = STATUS_ROWS + bar_rows - 1;

        let glyph_moves = ops
            .windows(2)
            .filter_map(|pair| match pair {
                [RenderOp::MoveTo { col, row }, RenderOp::PrintText(it)]
                    if it.starts_with(BAR_GLYPH) =>
                {
                    Some((*col, *row, it.chars().count()))
                }
                _ => None,
            })
            .collect::<Vec<_>>();

        // Each bar is 40 cells wide, the first one is full height.
        assert!(glyph_moves.iter().all(|(_, _, width)| *width == 40));
        assert_eq!(glyph_moves.first(), Some(&(0, bottom, 40)));
        assert_eq!(glyph_moves.last(), Some(&(40, bottom, 40)));
        assert_eq!(glyph_moves.len(), usize::from(bar_rows) + 1);
    }

    #[tokio::test]
    async fn test_help_line_dims_disabled_controls() {
        let mut state = new_state(&[3, 2, 1], WindowSize { cols: 120, rows: 30 });
        state.session.start_run();
        let ops = render_app(&state);

        let attribute_before = |label: &str| {
            ops.windows(2).find_map(|pair| match pair {
                [RenderOp::SetAttribute(attribute), RenderOp::PrintText(it)]
                    if it.starts_with(label) =>
                {
                    Some(*attribute)
                }
                _ => None,
            })
        };
        assert_eq!(attribute_before("⏎ start"), Some(Attribute::Dim));
        assert_eq!(attribute_before("x stop"), Some(Attribute::Bold));
        assert_eq!(attribute_before("s shuffle"), Some(Attribute::Dim));
        assert_eq!(attribute_before("r reset"), Some(Attribute::Dim));
        assert_eq!(attribute_before("+/- speed"), Some(Attribute::Bold));
    }

    #[test]
    fn test_cycled_listing_is_rendered() {
        let mut state = new_state(&[1, 2, 3], WindowSize { cols: 80, rows: 30 });
        state.code_listing = CodeListing::Java;
        let text = printed_text(&render_app(&state));
        assert!(text.contains("Java (c: next listing)"));
        assert!(text.contains("void bubbleSort(int arr[]) {"));
    }

    #[test]
    fn test_paint_writes_ansi() {
        let ops = vec![
            RenderOp::MoveTo { col: 2, row: 3 },
            RenderOp::PrintText("hi".to_string()),
        ];
        let mut out = Vec::new();
        paint(&ops, &mut out).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\u{1b}[4;3H"));
        assert!(written.ends_with("hi"));
    }
}
