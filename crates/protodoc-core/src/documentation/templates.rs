//! Markdown templates for documentation generation
//!
//! Copyright (c) 2025 Protodoc Team
//! Licensed under the Apache-2.0 license

use crate::model::{Enum, Message, ServiceMethod};

/// Markdown fragments shared by the renderer
pub struct Template;

impl Template {
    /// Generate header section
    pub fn header(title: &str, description: Option<&str>) -> String {
        let mut result = format!("# {}\n\n", title);

        if let Some(desc) = description.filter(|d| !d.is_empty()) {
            result.push_str(&format!("{}\n\n", desc));
        }

        result.push_str("---\n\n");
        result
    }

    /// Generate table of contents from `(title, level)` pairs
    pub fn table_of_contents(sections: &[(&str, usize)]) -> String {
        let mut result = String::from("## Table of Contents\n\n");

        for (title, level) in sections {
            let indent = "  ".repeat(level.saturating_sub(1));
            result.push_str(&format!("{}- [{}](#{})\n", indent, title, Self::anchor(title)));
        }

        result.push('\n');
        result
    }

    /// Heading anchor as generated by common markdown renderers
    pub fn anchor(title: &str) -> String {
        title
            .to_lowercase()
            .chars()
            .filter_map(|c| match c {
                ' ' => Some('-'),
                c if c.is_alphanumeric() || c == '-' || c == '_' => Some(c),
                _ => None,
            })
            .collect()
    }

    /// Generate a markdown table
    pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
        let mut result = format!("| {} |\n", headers.join(" | "));
        let rules: Vec<String> = headers.iter().map(|h| "-".repeat(h.len().max(3))).collect();
        result.push_str(&format!("| {} |\n", rules.join(" | ")));

        for row in rows {
            let cells: Vec<String> = row.iter().map(|c| Self::cell(c)).collect();
            result.push_str(&format!("| {} |\n", cells.join(" | ")));
        }

        result.push('\n');
        result
    }

    /// Escape text for use inside a table cell
    pub fn cell(text: &str) -> String {
        text.trim().replace('|', "\\|").replace('\n', " ")
    }

    /// Field table for a message
    pub fn message_fields(message: &Message) -> String {
        let rows: Vec<Vec<String>> = message
            .fields
            .iter()
            .map(|field| {
                let mut description = field.description.clone();
                if let Some(group) = &field.oneof {
                    if !description.is_empty() {
                        description.push(' ');
                    }
                    description.push_str(&format!("Oneof `{}`.", group));
                }
                vec![
                    field.name.clone(),
                    format!("`{}`", field.display_type()),
                    field.label.as_str().to_string(),
                    description,
                ]
            })
            .collect();

        Self::table(&["Field", "Type", "Label", "Description"], &rows)
    }

    /// Value table for an enum
    pub fn enum_values(enumeration: &Enum) -> String {
        let rows: Vec<Vec<String>> = enumeration
            .values
            .iter()
            .map(|v| vec![v.name.clone(), v.number.clone(), v.description.clone()])
            .collect();

        Self::table(&["Name", "Number", "Description"], &rows)
    }

    /// Method table for a service
    pub fn service_methods(methods: &[ServiceMethod]) -> String {
        let rows: Vec<Vec<String>> = methods
            .iter()
            .map(|m| {
                vec![
                    m.name.clone(),
                    Self::streamed(&m.request_full_type, m.request_streaming),
                    Self::streamed(&m.response_full_type, m.response_streaming),
                    m.description.clone(),
                ]
            })
            .collect();

        Self::table(&["Method", "Request", "Response", "Description"], &rows)
    }

    fn streamed(type_name: &str, streaming: bool) -> String {
        if streaming {
            format!("stream `{}`", type_name)
        } else {
            format!("`{}`", type_name)
        }
    }

    /// Generate a fenced JSON example
    pub fn json_example(label: &str, json: &str) -> String {
        format!("**{}:**\n\n```json\n{}\n```\n\n", label, json)
    }

    /// Generate footer section
    pub fn footer() -> String {
        "\n---\n\n*Generated by protodoc*\n".to_string()
    }
}
