use std::{collections::HashSet, io::BufRead};

use anyhow::{Context, Result};

/// Read one item per line, trimmed. Blank lines are skipped.
pub fn read_items<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut items = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read item on line {}", i + 1))?;
        let item = line.trim();
        if !item.is_empty() {
            items.push(item.to_string());
        }
    }
    Ok(items)
}

/// Drop every item whose label was already seen, keeping the first.
pub fn dedup(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(items.len());
    items.into_iter().filter(|item| seen.insert(item.clone())).collect()
}
