use serde::{Deserialize, Serialize};
use tracing::debug;

/// Top-level screens reachable from the bottom bar. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    Home,
    Stats,
    Profile,
}

impl Screen {
    pub const ALL: [Self; 3] = [Self::Home, Self::Stats, Self::Profile];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Stats => "Stats",
            Self::Profile => "Profile",
        }
    }
}

/// Bottom bar entry as drawn: only the selected entry shows its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub screen: Screen,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Navigation {
    selected: Screen,
}

impl Navigation {
    #[must_use]
    pub fn selected(self) -> Screen {
        self.selected
    }

    /// Returns `true` when the active screen changed.
    pub fn select(&mut self, screen: Screen) -> bool {
        if self.selected == screen {
            return false;
        }
        debug!(from = ?self.selected, to = ?screen, "screen selected");
        self.selected = screen;
        true
    }

    #[must_use]
    pub fn nav_items(self) -> [NavItem; 3] {
        Screen::ALL.map(|screen| NavItem {
            screen,
            label: screen.label(),
            selected: screen == self.selected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Navigation, Screen};

    #[test]
    fn starts_on_home() {
        assert_eq!(Navigation::default().selected(), Screen::Home);
    }

    #[test]
    fn exactly_one_item_is_selected() {
        let mut navigation = Navigation::default();
        for screen in Screen::ALL {
            navigation.select(screen);
            let selected: Vec<_> = navigation
                .nav_items()
                .into_iter()
                .filter(|item| item.selected)
                .collect();
            assert_eq!(selected.len(), 1);
            assert_eq!(selected[0].screen, screen);
        }
    }

    #[test]
    fn reselecting_is_not_a_change() {
        let mut navigation = Navigation::default();
        assert!(!navigation.select(Screen::Home));
        assert!(navigation.select(Screen::Stats));
    }
}
