//! Line layout for the prompter canvas.
//!
//! The canvas draws text line by line, so the script is word-wrapped up front
//! using an estimated glyph width that keeps lines inside the reading column.

/// Average glyph advance relative to the font size.
pub const AVG_GLYPH_WIDTH_RATIO: f32 = 0.55;
/// Line height relative to the font size.
pub const LINE_HEIGHT_RATIO: f32 = 1.3;

/// Width of the reading column for a viewport and a margin percentage.
pub fn column_width(viewport_width: f32, text_margin: u32) -> f32 {
    let percent = text_margin.clamp(1, 100) as f32 / 100.0;
    (viewport_width.max(0.0) * percent).max(1.0)
}

/// How many glyphs fit on one line of the reading column.
pub fn chars_per_line(column_width: f32, font_size: u32) -> usize {
    let glyph = (font_size.max(1) as f32 * AVG_GLYPH_WIDTH_RATIO).max(1.0);
    ((column_width / glyph).floor() as usize).max(1)
}

pub fn line_height(font_size: u32) -> f32 {
    font_size.max(1) as f32 * LINE_HEIGHT_RATIO
}

/// Word-wrap `text` to at most `max_chars` glyphs per line.
///
/// Explicit line breaks are kept (including blank lines); words longer than a
/// full line are split.
pub fn wrap_script(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim_end_matches('\r');
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        let mut current_len = 0usize;
        for word in paragraph.split_whitespace() {
            let mut word_chars: Vec<char> = word.chars().collect();

            while word_chars.len() > max_chars {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let rest = word_chars.split_off(max_chars);
                lines.push(word_chars.into_iter().collect());
                word_chars = rest;
            }

            let word_len = word_chars.len();
            if word_len == 0 {
                continue;
            }
            let separator = usize::from(current_len > 0);
            if current_len + separator + word_len > max_chars {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.extend(word_chars);
            current_len += word_len;
        }

        if current_len > 0 {
            lines.push(current);
        }
    }

    lines
}
