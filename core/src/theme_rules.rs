// Shared by `build.rs` (via `#[path]`) and `theme.rs`; std only.

const COLOR_FORBIDDEN: &[char] = &[';', '"', '\'', '\\', '{', '}', '<', '>'];
const URL_FORBIDDEN: &[char] = &['"', '\'', '\\', '(', ')', '<', '>'];
const FONT_FORBIDDEN: &[char] = &[';', '"', '\'', '\\', '{', '}', '(', ')', '<', '>'];

pub(crate) fn check_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("name cannot be empty".to_string());
    }
    Ok(())
}

/// Colors are written into inline `style` declarations, so anything that
/// could close the declaration or open a new one is refused. Parentheses
/// are allowed only balanced, as in `rgb(...)`.
pub(crate) fn check_color(field: &str, value: &str) -> Result<(), String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(format!("{field} cannot be empty"));
    }
    if let Some(bad) = value
        .chars()
        .find(|ch| COLOR_FORBIDDEN.contains(ch) || ch.is_control())
    {
        return Err(format!("{field} contains forbidden character {bad:?}"));
    }
    let mut depth = 0usize;
    for ch in value.chars() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| format!("{field} has an unmatched ')'"))?;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(format!("{field} has an unmatched '('"));
    }
    Ok(())
}

/// Image sources end up inside `url("...")`. Blank means "no image".
pub(crate) fn check_image(field: &str, src: &str) -> Result<(), String> {
    let src = src.trim();
    if src.is_empty() {
        return Ok(());
    }
    if src.to_ascii_lowercase().starts_with("data:") {
        return Err(format!("{field} cannot be a data URL"));
    }
    if let Some(bad) = src
        .chars()
        .find(|ch| URL_FORBIDDEN.contains(ch) || ch.is_control())
    {
        return Err(format!("{field} contains forbidden character {bad:?}"));
    }
    Ok(())
}

/// Blank falls back to `sans-serif`.
pub(crate) fn check_font(value: &str) -> Result<(), String> {
    if let Some(bad) = value
        .chars()
        .find(|ch| FONT_FORBIDDEN.contains(ch) || ch.is_control())
    {
        return Err(format!("font_family contains forbidden character {bad:?}"));
    }
    Ok(())
}
