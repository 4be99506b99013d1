// Workspace items as reported by the provider.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub is_current: bool,
}

impl Item {
    pub fn new(name: impl Into<String>, is_current: bool) -> Self {
        Self { name: name.into(), is_current }
    }
}

/// Parse `terraform workspace list` output. The current workspace is prefixed with `*`;
/// blank lines are skipped.
pub fn parse_workspace_list(output: &str) -> Vec<Item> {
    output
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim_start();
            let (is_current, rest) = match trimmed.strip_prefix('*') {
                Some(rest) => (true, rest),
                None => (false, trimmed),
            };
            let name = rest.trim();
            if name.is_empty() {
                return None;
            }
            Some(Item::new(name, is_current))
        })
        .collect()
}

/// Index of the current item, or 0 when none is current (or the list is empty).
pub fn initial_cursor(items: &[Item]) -> usize {
    items.iter().position(|i| i.is_current).unwrap_or(0)
}
