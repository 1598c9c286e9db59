use std::fmt::Display;

pub fn items_line(count: usize) -> String {
    format!("Items: {}", count)
}

pub fn processing_line(value: impl Display) -> String {
    format!("Processing: {}", value)
}
