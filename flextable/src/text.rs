use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Width and line count of a block of text.
pub fn measure(s: &str) -> (u16, u16) {
    let mut width = 0usize;
    let mut height = 0usize;
    for line in s.lines() {
        width = width.max(display_width(line));
        height += 1;
    }
    (clamp_u16(width), clamp_u16(height.max(1)))
}

/// Cut `s` to at most `max_width` columns, ending in `…` when something was cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target = max_width - 1;
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let w = char_width(ch);
        if width + w > target {
            break;
        }
        result.push(ch);
        width += w;
    }

    result.push('…');
    result
}

fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
