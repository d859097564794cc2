//! Duration display: `H:MM:SS` / `M:SS`, with an optional superscript
//! rendering for a smaller look in the chatbox.

/// How to render a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestampStyle {
    #[default]
    Normal,
    /// Superscript digits, with `'` standing in for the `:` divider.
    Superscript,
}

/// Render a duration in whole seconds.
///
/// Hours and their divider are omitted entirely under one hour; minutes are
/// zero-padded only when hours are shown.  Seconds are always two digits.
pub fn format_timestamp(total_secs: u64, style: TimestampStyle) -> String {
    let divider = match style {
        TimestampStyle::Normal => ':',
        TimestampStyle::Superscript => '\'',
    };

    let h = total_secs / 3600;
    let m = total_secs % 3600 / 60;
    let s = total_secs % 60;

    let plain = if h == 0 {
        format!("{}{}{:02}", m, divider, s)
    } else {
        format!("{}{}{:02}{}{:02}", h, divider, m, divider, s)
    };

    match style {
        TimestampStyle::Normal => plain,
        TimestampStyle::Superscript => to_superscript(&plain),
    }
}

/// Substitute every mapped character with its superscript form.  Unmapped
/// characters (including the `'` divider) pass through unchanged.
pub fn to_superscript(s: &str) -> String {
    s.chars()
        .map(|c| superscript_char(c).unwrap_or(c))
        .collect()
}

fn superscript_char(c: char) -> Option<char> {
    Some(match c {
        ' ' => ' ',
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        '+' => '⁺',
        '-' => '⁻',
        'a' => 'ᵃ',
        'b' => 'ᵇ',
        'c' => 'ᶜ',
        'd' => 'ᵈ',
        'e' => 'ᵉ',
        'f' => 'ᶠ',
        'g' => 'ᵍ',
        'h' => 'ʰ',
        'i' => 'ⁱ',
        'j' => 'ʲ',
        'k' => 'ᵏ',
        'l' => 'ˡ',
        'm' => 'ᵐ',
        'n' => 'ⁿ',
        'o' => 'ᵒ',
        'p' => 'ᵖ',
        // Unicode has no superscript q.
        'r' => 'ʳ',
        's' => 'ˢ',
        't' => 'ᵗ',
        'u' => 'ᵘ',
        'v' => 'ᵛ',
        'w' => 'ʷ',
        'x' => 'ˣ',
        'y' => 'ʸ',
        'z' => 'ᶻ',
        _ => return None,
    })
}
