use console::Style;
use listkeeper::model::NoteColor;
use once_cell::sync::Lazy;

/// Palette hex values mapped to the nearest ANSI 256 colors, so swatches in
/// the list roughly match the web client's pastels.
pub static SWATCH_STYLES: Lazy<Vec<(NoteColor, Style)>> = Lazy::new(|| {
    vec![
        (NoteColor::Green, Style::new().color256(194)),
        (NoteColor::Red, Style::new().color256(224)),
        (NoteColor::Yellow, Style::new().color256(230)),
        (NoteColor::Blue, Style::new().color256(195)),
        (NoteColor::Purple, Style::new().color256(189)),
    ]
});

const SWATCH: &str = "■";

pub fn swatch(color: NoteColor) -> String {
    let style = SWATCH_STYLES
        .iter()
        .find(|(c, _)| *c == color)
        .map(|(_, s)| s.clone())
        .unwrap_or_else(Style::new);
    style.apply_to(SWATCH).to_string()
}
