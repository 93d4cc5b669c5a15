//! Ordered name-to-color catalog parsed from comma-separated rows.
//!
//! Each row is `group,name,hex,r,g,b`. Fields may be double-quoted, in which
//! case they can contain commas and `""` stands for a literal quote. Entries keep their load order, which
//! is the iteration order nearest-color matching scans in, so results never
//! depend on hash-map ordering.

use std::collections::HashMap;

use super::error::CatalogError;
use crate::color::Rgb;

/// One named reference color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Grouping column of the source row (informational)
    pub group: String,
    /// Color name, unique within a catalog
    pub name: String,
    /// Hex column of the source row, kept verbatim
    pub hex: String,
    /// Reference color from the r, g, b columns
    pub color: Rgb,
}

impl CatalogEntry {
    /// Create an entry, deriving the hex column from the color.
    pub fn new(group: impl Into<String>, name: impl Into<String>, color: Rgb) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            hex: color.to_hex(),
            color,
        }
    }
}

/// A static catalog of named colors.
///
/// Loaded once per run and shared read-only across every lookup.
///
/// # Duplicate names
///
/// A later row with an already-seen name replaces that entry's group, hex
/// and color but keeps the entry at the position where the name first
/// appeared (last-wins value, first-seen position).
///
/// # Example
///
/// ```
/// use dominant_colors::{ColorCatalog, Rgb};
///
/// let catalog = ColorCatalog::parse(
///     "group,Red,#FF0000,255,0,0\n\
///      group,Blue,#0000FF,0,0,255\n",
/// ).unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.get("Blue").map(|e| e.color), Some(Rgb::new(0, 0, 255)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorCatalog {
    entries: Vec<CatalogEntry>,
    // name -> position in `entries`
    index: HashMap<String, usize>,
}

impl ColorCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse catalog rows from text.
    ///
    /// Fields are trimmed and may be quoted. Blank lines and lines starting with `#` are
    /// skipped. The hex column is stored but not checked against r, g, b.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::MalformedRow`] if a row does not have 6 fields
    /// - [`CatalogError::UnterminatedQuote`] if a quoted field is not closed
    /// - [`CatalogError::EmptyName`] if the name field is empty
    /// - [`CatalogError::InvalidChannel`] if r, g or b is not an integer in
    ///   `0..=255`
    pub fn parse(text: &str) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();

        for (i, raw) in text.lines().enumerate() {
            let line = i + 1;
            let row = raw.trim();
            if row.is_empty() || row.starts_with('#') {
                continue;
            }

            let fields = split_row(row).ok_or(CatalogError::UnterminatedQuote { line })?;
            let [group, name, hex, r, g, b] = fields.as_slice() else {
                return Err(CatalogError::MalformedRow {
                    line,
                    fields: fields.len(),
                });
            };
            if name.is_empty() {
                return Err(CatalogError::EmptyName { line });
            }

            let color = Rgb::new(
                parse_channel(line, "r", r)?,
                parse_channel(line, "g", g)?,
                parse_channel(line, "b", b)?,
            );
            catalog.insert(CatalogEntry {
                group: group.clone(),
                name: name.clone(),
                hex: hex.clone(),
                color,
            });
        }

        Ok(catalog)
    }

    /// Build a catalog from entries, applying the duplicate-name policy.
    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let mut catalog = Self::new();
        for entry in entries {
            catalog.insert(entry);
        }
        catalog
    }

    /// Add an entry. An existing entry with the same name is overwritten in place.
    pub fn insert(&mut self, entry: CatalogEntry) {
        match self.index.get(&entry.name) {
            Some(&pos) => self.entries[pos] = entry,
            None => {
                self.index.insert(entry.name.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Number of distinct names.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by exact name.
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.index.get(name).map(|&pos| &self.entries[pos])
    }

    /// Entries in load order.
    #[inline]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Iterate entries in load order.
    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a ColorCatalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Split one row into trimmed fields, unquoting `"..."` fields.
///
/// Returns `None` when a quoted field runs to the end of the row.
fn split_row(row: &str) -> Option<Vec<String>> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut chars = row.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if quoted => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    quoted = false;
                }
            }
            // Opening quote, possibly after padding
            '"' if field.trim().is_empty() => {
                field.clear();
                quoted = true;
            }
            ',' if !quoted => {
                fields.push(field.trim().to_string());
                field.clear();
            }
            _ => field.push(c),
        }
    }

    if quoted {
        return None;
    }
    fields.push(field.trim().to_string());
    Some(fields)
}

fn parse_channel(line: usize, channel: &'static str, value: &str) -> Result<u8, CatalogError> {
    value
        .parse::<u8>()
        .map_err(|_| CatalogError::InvalidChannel {
            line,
            channel,
            value: value.to_string(),
        })
}
