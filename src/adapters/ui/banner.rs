//! Startup banner: figlet "V-CAMPUS" swept left to right through the campus colors,
//! with the version in a box underneath.

use crossterm::QueueableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

type Rgb = (u8, u8, u8);

/// Ivy, brass, brick. Colors are spread evenly across the banner width.
const CAMPUS: [Rgb; 3] = [(0x2e, 0x7d, 0x32), (0xd4, 0xa0, 0x17), (0xa3, 0x31, 0x2a)];

/// Color at position `t` (clamped to [0, 1]) along a multi-stop palette.
fn sweep(stops: &[Rgb], t: f64) -> Rgb {
    let Some((&last, _)) = stops.split_last() else {
        return (0xff, 0xff, 0xff);
    };
    if stops.len() == 1 {
        return last;
    }
    let span = (stops.len() - 1) as f64;
    let pos = t.clamp(0.0, 1.0) * span;
    let seg = (pos.floor() as usize).min(stops.len() - 2);
    let local = pos - seg as f64;
    let (from, to) = (stops[seg], stops[seg + 1]);
    let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * local).round() as u8;
    (mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
}

/// Banner art lines; falls back to plain text if the font cannot render.
fn banner_lines(text: &str) -> Vec<String> {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(text).map(|fig| fig.to_string()))
        .map(|art| art.lines().map(str::to_string).collect())
        .unwrap_or_else(|| vec![text.to_string()])
}

/// `text` inside a single-line box.
fn boxed(text: &str) -> [String; 3] {
    let bar = "─".repeat(text.chars().count() + 2);
    [
        format!("┌{bar}┐"),
        format!("│ {text} │"),
        format!("└{bar}┘"),
    ]
}

fn fg((r, g, b): Rgb) -> SetForegroundColor {
    SetForegroundColor(Color::Rgb { r, g, b })
}

pub fn print_welcome() {
    let mut out = stdout();
    let art = banner_lines("V-CAMPUS");
    let width = art.iter().map(|l| l.chars().count()).max().unwrap_or(1);
    let denom = width.saturating_sub(1).max(1) as f64;

    for line in &art {
        for (col, ch) in line.chars().enumerate() {
            let _ = out.queue(fg(sweep(&CAMPUS, col as f64 / denom)));
            let _ = out.queue(Print(ch));
        }
        let _ = out.queue(ResetColor);
        let _ = out.queue(Print("\r\n"));
    }

    let caption = format!("Virtual University v{}", env!("CARGO_PKG_VERSION"));
    let _ = out.queue(fg(CAMPUS[1]));
    for line in boxed(&caption) {
        let _ = out.queue(Print(line));
        let _ = out.queue(Print("\r\n"));
    }
    let _ = out.queue(ResetColor);
    let _ = out.flush();
}
