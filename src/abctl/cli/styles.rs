use console::Style;
use once_cell::sync::Lazy;

pub static HEADER_STYLE: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static BORDER_STYLE: Lazy<Style> = Lazy::new(|| Style::new().dim());
