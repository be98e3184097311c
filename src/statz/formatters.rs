//! # Formatters
//!
//! Turn an attribute's value into its display string. Formatters are keyed by
//! attribute name; names without one render as the raw value.

use crate::model::AttributeType;
use std::collections::HashMap;

pub const DEFAULT_BAR_WIDTH: usize = 20;
const FILLED: char = '■';
const EMPTY: char = '□';

pub trait Formatter: Send + Sync {
    fn format(&self, value: f64, ty: &AttributeType) -> String;
}

impl<F> Formatter for F
where
    F: Fn(f64, &AttributeType) -> String + Send + Sync,
{
    fn format(&self, value: f64, ty: &AttributeType) -> String {
        self(value, ty)
    }
}

pub fn raw(value: f64) -> String {
    value.to_string()
}

/// Fixed-width fill bar followed by `value/max`, for bounded attributes.
///
/// Unbounded attributes (and a non-positive max) fall back to the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarFormatter {
    width: usize,
}

impl BarFormatter {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    fn filled_cells(&self, value: f64, max: f64) -> usize {
        let ratio = (value / max).clamp(0.0, 1.0);
        let cells = (self.width as f64 * ratio).round() as usize;
        cells.min(self.width)
    }
}

impl Default for BarFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_BAR_WIDTH)
    }
}

impl Formatter for BarFormatter {
    fn format(&self, value: f64, ty: &AttributeType) -> String {
        let max = match ty.max {
            Some(max) if max > 0.0 && value.is_finite() => max,
            _ => return raw(value),
        };

        let filled = self.filled_cells(value, max);
        let mut bar = String::with_capacity(self.width * FILLED.len_utf8() + 16);
        bar.extend(std::iter::repeat(FILLED).take(filled));
        bar.extend(std::iter::repeat(EMPTY).take(self.width - filled));

        format!("{} {}/{}", bar, raw(value), raw(max))
    }
}

#[derive(Default)]
pub struct FormatterRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the bar formatter to each of `names`.
    pub fn with_bars<I, N>(names: I, width: usize) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let mut registry = Self::new();
        for name in names {
            registry.register(name, BarFormatter::new(width));
        }
        registry
    }

    pub fn register(&mut self, name: impl Into<String>, formatter: impl Formatter + 'static) {
        self.formatters.insert(name.into(), Box::new(formatter));
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    pub fn render(&self, name: &str, value: f64, ty: &AttributeType) -> String {
        match self.formatters.get(name) {
            Some(formatter) => formatter.format(value, ty),
            None => raw(value),
        }
    }
}
