use comfy_table::{Attribute, Cell, CellAlignment, Color};

/// Three-decimal rate in the conventional batting line style (".321"
/// territory, printed with the leading zero).
pub(super) fn format_rate3(v: f64) -> String {
    format!("{v:.3}")
}

pub(super) fn format_pct(v: f64) -> String {
    format!("{v:.1}%")
}

pub(super) fn format_f2(v: f64) -> String {
    format!("{v:.2}")
}

/// Innings pitched as a literal decimal, one place.
pub(super) fn format_ip(v: f64) -> String {
    format!("{v:.1}")
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let cell = Cell::new(text).set_alignment(CellAlignment::Center);
    if use_color {
        cell.add_attribute(Attribute::Bold).fg(Color::Cyan)
    } else {
        cell
    }
}

pub(super) fn name_cell(text: &str) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Left)
}

pub(super) fn right_cell(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}
