use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub mod names {
    pub const BORDER: &str = "border";
    pub const HEADER: &str = "header";
    pub const NAME: &str = "name";
    pub const VALUE: &str = "value";
    pub const DETAIL: &str = "detail";
}

pub static STATZ_THEME: Lazy<HashMap<&'static str, Style>> = Lazy::new(|| {
    HashMap::from([
        (names::BORDER, Style::new().dim()),
        (names::HEADER, Style::new().bold()),
        (names::NAME, Style::new().cyan()),
        (names::VALUE, Style::new().yellow()),
        (names::DETAIL, Style::new().italic()),
    ])
});
