// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use serde_json::{Map, Value};
use unicode_width::UnicodeWidthStr;

/// A column of a [`Table`] over rows of type `T`.
pub trait TableColumn<T> {
    fn name(&self) -> Cow<'_, str>;

    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn color(&self, _data: &T) -> Option<Color> {
        None
    }
}

/// How a table is laid out.
pub trait TableStyle {
    fn write<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result;
}

pub struct Table<'a, S, T, C> {
    style: S,
    columns: &'a [C],
    data: &'a [T],
}

impl<'a, S: TableStyle, T, C: TableColumn<T>> Table<'a, S, T, C> {
    pub fn new(style: S, columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            style,
            columns,
            data,
        }
    }
}

impl<S: TableStyle, T, C: TableColumn<T>> fmt::Display for Table<'_, S, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.style.write(f, self.columns, self.data)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

/// Aligned plain-text rows, one per line.
#[derive(Debug, Clone, Copy)]
pub struct TableStyleBasic {
    separator: &'static str,
    header: bool,
}

impl TableStyleBasic {
    pub fn new() -> Self {
        Self {
            separator: " ",
            header: false,
        }
    }

    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }
}

impl Default for TableStyleBasic {
    fn default() -> Self {
        Self::new()
    }
}

impl TableStyle for TableStyleBasic {
    fn write<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result {
        let names: Vec<_> = columns.iter().map(|col| col.name()).collect();
        let rows: Vec<Vec<_>> = data
            .iter()
            .map(|row| columns.iter().map(|col| col.format(row)).collect())
            .collect();

        let mut widths: Vec<usize> = match self.header {
            true => names.iter().map(|name| name.width()).collect(),
            false => vec![0; columns.len()],
        };
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.width());
            }
        }

        let last = columns.len().saturating_sub(1);
        let pad = |i: usize, cell: &str| -> String {
            let direction = columns[i].padding_direction();
            let fill = " ".repeat(widths[i].saturating_sub(cell.width()));
            match direction {
                // Last column does not need padding if it's left-aligned
                PaddingDirection::Left if i == last => cell.to_owned(),
                PaddingDirection::Left => format!("{cell}{fill}"),
                PaddingDirection::Right => format!("{fill}{cell}"),
            }
        };

        let mut first_line = true;
        if self.header {
            for (i, name) in names.iter().enumerate() {
                let sep = if i == 0 { "" } else { self.separator };
                write!(f, "{sep}{}", pad(i, name).as_str().bold())?;
            }
            first_line = false;
        }

        for (row, data) in rows.iter().zip(data) {
            if !first_line {
                writeln!(f)?;
            }
            first_line = false;

            for (i, (col, cell)) in columns.iter().zip(row).enumerate() {
                let sep = if i == 0 { "" } else { self.separator };
                let cell = pad(i, cell);
                match col.color(data) {
                    Some(color) => write!(f, "{sep}{}", cell.as_str().color(color))?,
                    None => write!(f, "{sep}{cell}")?,
                }
            }
        }
        Ok(())
    }
}

/// A pretty-printed JSON array with one object per row, keyed by column name.
#[derive(Debug, Default, Clone, Copy)]
pub struct TableStyleJson;

impl TableStyleJson {
    pub fn new() -> Self {
        Self
    }
}

impl TableStyle for TableStyleJson {
    fn write<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result {
        let keys: Vec<String> = columns.iter().map(|col| json_key(&col.name())).collect();
        let rows: Vec<Value> = data
            .iter()
            .map(|row| {
                let object: Map<String, Value> = keys
                    .iter()
                    .zip(columns)
                    .map(|(key, col)| (key.clone(), Value::from(col.format(row).into_owned())))
                    .collect();
                Value::Object(object)
            })
            .collect();

        let json = serde_json::to_string_pretty(&rows).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

fn json_key(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}
