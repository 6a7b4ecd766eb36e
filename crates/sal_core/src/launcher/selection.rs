//! Per-target selection flags.

use crate::targets::LaunchTarget;

/// Selected flag for each target, by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    flags: Vec<bool>,
}

impl Selection {
    /// Initial flags from each target's default.
    pub fn from_targets(targets: &[LaunchTarget]) -> Self {
        Self {
            flags: targets.iter().map(|t| t.default_enabled).collect(),
        }
    }

    /// Out-of-range indices read as unselected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    /// Flip one flag. Returns false if the index is out of range.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.flags.get_mut(index) {
            Some(flag) => {
                *flag = !*flag;
                true
            }
            None => false,
        }
    }

    pub fn set_all(&mut self, selected: bool) {
        self.flags.iter_mut().for_each(|flag| *flag = selected);
    }

    /// Indices of selected targets in list order.
    pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(i, &selected)| selected.then_some(i))
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets() -> Vec<LaunchTarget> {
        vec![
            LaunchTarget::new("A", "a").enabled(true),
            LaunchTarget::new("B", "b").enabled(false),
            LaunchTarget::new("C", "c").enabled(true),
        ]
    }

    #[test]
    fn starts_from_defaults() {
        let selection = Selection::from_targets(&targets());
        assert_eq!(selection.as_slice(), &[true, false, true]);
        assert_eq!(selection.selected_indices().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn toggle_out_of_range_is_rejected() {
        let mut selection = Selection::from_targets(&targets());
        assert!(!selection.toggle(3));
        assert_eq!(selection.as_slice(), &[true, false, true]);
        assert!(!selection.is_selected(99));
    }

    #[test]
    fn set_all_overrides_every_flag() {
        let mut selection = Selection::from_targets(&targets());
        selection.set_all(false);
        assert_eq!(selection.selected_indices().count(), 0);
        selection.set_all(true);
        assert_eq!(selection.selected_indices().count(), 3);
    }
}
