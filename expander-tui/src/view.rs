//! Lays the list out into terminal lines.
//!
//! Each item is a title line followed by its body. The body reveals
//! `measured_size(body_height)` lines (or columns, for horizontal rows) and
//! its content is shifted by the row's parallax offset.

use std::ops::Range;

use expander::{ListAdapter, Orientation, Row};
use palette::{IntoColor, Oklch, Srgb};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub type Rgb = (u8, u8, u8);

pub const MUTED: Rgb = (150, 150, 160);
pub const ACCENT: Rgb = (255, 176, 64);
pub const BODY: Rgb = (210, 210, 215);
pub const HINT: Rgb = (110, 110, 120);

const EXPANDED_CHAR: char = '▼';
const COLLAPSED_CHAR: char = '▶';
const CURSOR_CHAR: char = '›';
const BODY_INDENT: &str = "    ";
const FOOTER: &str = "↑/↓ move  enter select  q quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Title { position: usize },
    Body { position: usize },
    Footer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub kind: LineKind,
    pub text: String,
    pub fg: Rgb,
    pub bold: bool,
}

/// What to draw, plus which rows ended up on screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct View {
    pub lines: Vec<Line>,
    pub rendered: Range<usize>,
}

impl View {
    /// Row whose title sits on screen line `y`.
    pub fn title_at(&self, y: u16) -> Option<usize> {
        match self.lines.get(usize::from(y))?.kind {
            LineKind::Title { position } => Some(position),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ViewParams {
    /// First row shown.
    pub scroll: usize,
    pub cursor: usize,
    pub width: u16,
    pub height: u16,
    pub body_height: u16,
}

/// Lines a row currently occupies: its title plus the revealed body.
pub fn row_height(row: &Row, body_height: u16) -> usize {
    let expandable = row.expandable();
    if !expandable.is_visible() {
        return 1;
    }
    match expandable.orientation() {
        Orientation::Vertical => 1 + usize::from(expandable.measured_size(body_height)),
        Orientation::Horizontal => 1 + usize::from(body_height),
    }
}

pub fn layout(adapter: &ListAdapter<String>, params: &ViewParams) -> View {
    let list_height = usize::from(params.height.saturating_sub(1));
    let width = usize::from(params.width);
    let mut lines = Vec::with_capacity(usize::from(params.height));
    let first = params.scroll.min(adapter.len());
    let mut last = first;

    for (position, (item, row)) in adapter
        .items()
        .iter()
        .zip(adapter.rows())
        .enumerate()
        .skip(first)
    {
        if lines.len() >= list_height {
            break;
        }
        lines.push(title_line(item, position, row, params.cursor == position, width));
        last = position + 1;

        for text in body_lines(item, position, adapter.len(), row, params) {
            if lines.len() >= list_height {
                break;
            }
            lines.push(Line {
                kind: LineKind::Body { position },
                text,
                fg: BODY,
                bold: false,
            });
        }
    }

    if params.height > 0 {
        while lines.len() < list_height {
            lines.push(Line {
                kind: LineKind::Footer,
                text: String::new(),
                fg: HINT,
                bold: false,
            });
        }
        lines.push(Line {
            kind: LineKind::Footer,
            text: truncate_to_width(FOOTER, width),
            fg: HINT,
            bold: false,
        });
    }

    View {
        lines,
        rendered: first..last,
    }
}

fn title_line(item: &str, position: usize, row: &Row, cursor: bool, width: usize) -> Line {
    let expandable = row.expandable();
    let marker = if expandable.is_expanded() {
        EXPANDED_CHAR
    } else {
        COLLAPSED_CHAR
    };
    let cursor = if cursor { CURSOR_CHAR } else { ' ' };
    Line {
        kind: LineKind::Title { position },
        text: truncate_to_width(&format!("{cursor}{marker} {item}"), width),
        fg: blend(MUTED, ACCENT, expandable.expansion()),
        bold: row.is_selected(),
    }
}

/// Revealed body lines after measuring and parallax.
fn body_lines(
    item: &str,
    position: usize,
    count: usize,
    row: &Row,
    params: &ViewParams,
) -> Vec<String> {
    let expandable = row.expandable();
    if !expandable.is_visible() || params.body_height == 0 {
        return Vec::new();
    }

    let content: Vec<String> = (0..usize::from(params.body_height))
        .map(|line| match line {
            0 => format!("{BODY_INDENT}{item}"),
            1 => format!("{BODY_INDENT}row {} of {}", position + 1, count),
            2 => format!(
                "{BODY_INDENT}{} {:.0}%",
                expandable.state(),
                expandable.expansion() * 100.0
            ),
            _ => String::new(),
        })
        .collect();

    match expandable.orientation() {
        Orientation::Vertical => {
            let visible = usize::from(expandable.measured_size(params.body_height));
            let shift =
                (-expandable.parallax_offset(params.body_height)).round().max(0.0) as usize;
            content
                .into_iter()
                .skip(shift)
                .take(visible)
                .map(|text| truncate_to_width(&text, usize::from(params.width)))
                .collect()
        }
        Orientation::Horizontal => {
            let visible = usize::from(expandable.measured_size(params.width));
            let shift = expandable.parallax_offset(params.width).round().max(0.0) as usize;
            content
                .into_iter()
                .map(|text| clip_columns(&format!("{}{}", " ".repeat(shift), text), visible))
                .collect()
        }
    }
}

/// Keep the first `columns` display columns, without an ellipsis.
fn clip_columns(s: &str, columns: usize) -> String {
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > columns {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut result = clip_columns(s, max_width - 1);
    result.push('…');
    result
}

/// Interpolate two colors in OKLCH space.
pub fn blend(from: Rgb, to: Rgb, t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let (from_l, from_c, from_h) = rgb_to_oklch(from);
    let (to_l, to_c, to_h) = rgb_to_oklch(to);

    let l = from_l + (to_l - from_l) * t;
    let c = from_c + (to_c - from_c) * t;

    // Shortest path around the hue circle
    let mut dh = to_h - from_h;
    if dh > 180.0 {
        dh -= 360.0;
    } else if dh < -180.0 {
        dh += 360.0;
    }
    let h = (from_h + dh * t).rem_euclid(360.0);

    let srgb: Srgb = Oklch::new(l, c, h).into_color();
    srgb.into_format::<u8>().into_components()
}

fn rgb_to_oklch((r, g, b): Rgb) -> (f32, f32, f32) {
    let srgb = Srgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
    );
    let oklch: Oklch = srgb.into_color();
    (oklch.l, oklch.chroma, oklch.hue.into_positive_degrees())
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use expander::{Easing, ExpandableConfig, InstantTweens};

    fn adapter(config: ExpandableConfig) -> ListAdapter<String> {
        ListAdapter::with_tweens(
            vec!["one".to_string(), "two".to_string(), "three".to_string()],
            config,
            InstantTweens,
        )
    }

    fn params(height: u16) -> ViewParams {
        ViewParams {
            scroll: 0,
            cursor: 0,
            width: 40,
            height,
            body_height: 3,
        }
    }

    #[test]
    fn test_collapsed_list_is_titles_only() {
        let adapter = adapter(ExpandableConfig::default());
        let view = layout(&adapter, &params(10));

        assert_eq!(view.lines.len(), 10);
        assert_eq!(view.lines[0].text, "›▶ one");
        assert_eq!(view.lines[1].text, " ▶ two");
        assert_eq!(view.lines[2].text, " ▶ three");
        assert_eq!(view.lines[9].kind, LineKind::Footer);
        assert_eq!(view.rendered, 0..3);
        assert_eq!(view.title_at(1), Some(1));
        assert_eq!(view.title_at(5), None);
    }

    #[test]
    fn test_expanded_row_reveals_body() {
        let mut adapter = adapter(ExpandableConfig::default());
        adapter.tap(0);
        adapter.tick(Instant::now());

        let view = layout(&adapter, &params(10));
        assert_eq!(view.lines[0].text, "›▼ one");
        assert!(view.lines[0].bold);
        assert_eq!(view.lines[0].fg, blend(MUTED, ACCENT, 1.0));
        assert_eq!(view.lines[1].text, "    one");
        assert_eq!(view.lines[2].text, "    row 1 of 3");
        assert_eq!(view.lines[3].text, "    expanded 100%");
        assert_eq!(view.title_at(4), Some(1));
        assert_eq!(row_height(adapter.row(0).unwrap(), 3), 4);
    }

    fn half_open(parallax: f32) -> View {
        let config = ExpandableConfig::default()
            .with_easing(Easing::Linear)
            .with_parallax(parallax);
        let mut adapter = ListAdapter::new(vec!["one".to_string()], config);
        let start = Instant::now();
        adapter.tap(0);
        adapter.tick(start);
        // A third of the way: one of three body lines revealed
        adapter.tick(start + Duration::from_millis(100));
        layout(&adapter, &params(6))
    }

    #[test]
    fn test_parallax_shows_trailing_lines_while_opening() {
        let view = half_open(1.0);
        assert_eq!(view.lines[0].text, "›▼ one");
        assert_eq!(view.lines[1].kind, LineKind::Body { position: 0 });
        assert!(view.lines[1].text.starts_with("    expanding"));
        assert_eq!(view.lines[2].kind, LineKind::Footer);
    }

    #[test]
    fn test_no_parallax_reveals_from_the_top() {
        let view = half_open(0.0);
        assert_eq!(view.lines[1].text, "    one");
        assert_eq!(view.lines[2].kind, LineKind::Footer);
    }

    #[test]
    fn test_short_terminal_limits_rendered_rows() {
        let mut adapter = adapter(ExpandableConfig::default());
        adapter.tap(0);
        adapter.tick(Instant::now());

        // Three list lines plus footer: the title and two body lines of row 0
        let view = layout(&adapter, &params(4));
        assert_eq!(view.lines.len(), 4);
        assert_eq!(view.rendered, 0..1);
        assert_eq!(view.lines[3].kind, LineKind::Footer);
    }

    #[test]
    fn test_scroll_skips_leading_rows() {
        let adapter = adapter(ExpandableConfig::default());
        let view = layout(
            &adapter,
            &ViewParams {
                scroll: 2,
                cursor: 2,
                ..params(5)
            },
        );
        assert_eq!(view.lines[0].text, "›▶ three");
        assert_eq!(view.rendered, 2..3);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn test_clip_columns_handles_wide_chars() {
        assert_eq!(clip_columns("日本語", 4), "日本");
        assert_eq!(clip_columns("abc", 0), "");
    }

    #[test]
    fn test_blend_endpoints() {
        let start = blend(MUTED, ACCENT, 0.0);
        let end = blend(MUTED, ACCENT, 1.0);
        for (got, want) in [(start.0, MUTED.0), (end.0, ACCENT.0), (end.2, ACCENT.2)] {
            assert!(got.abs_diff(want) <= 1, "{} vs {}", got, want);
        }
    }
}
