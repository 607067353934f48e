//! Menu bar state and chrome geometry

use std::fmt;

/// Dropdown menus on the top bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Menu {
    File,
    Edit,
    Macros,
    Elements,
}

impl Menu {
    pub fn name(&self) -> &'static str {
        match self {
            Menu::File => "File",
            Menu::Edit => "Edit",
            Menu::Macros => "Macros",
            Menu::Elements => "Elements",
        }
    }

    /// Column where the menu's label and dropdown start
    pub fn column(&self) -> i32 {
        let item = ChromeItem::Menu(*self);
        CHROME
            .iter()
            .find(|entry| entry.item == item)
            .map_or(0, |entry| entry.start)
    }

    /// Fixed dropdown entries; the Elements dropdown lists canvas widgets instead
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            Menu::File => &FILE_OPTIONS,
            Menu::Edit => &EDIT_OPTIONS,
            Menu::Macros => &MACRO_OPTIONS,
            Menu::Elements => &[],
        }
    }
}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub const FILE_OPTIONS: [&str; 1] = ["Save"];
pub const EDIT_OPTIONS: [&str; 4] = ["Undo", "Redo", "Cut", "Paste"];
pub const MACRO_OPTIONS: [&str; 5] = ["Start/Stop", "Play Once", "Play Many", "Open Macro", "Save Macro"];

/// Columns of the File dropdown's Save row
pub const FILE_SAVE_COLUMNS: std::ops::RangeInclusive<i32> = 2..=20;

/// Something clickable on row 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeItem {
    Menu(Menu),
    DeleteControl,
    Help,
}

/// A label on the top bar
#[derive(Debug, Clone, Copy)]
pub struct ChromeEntry {
    pub item: ChromeItem,
    pub label: &'static str,
    pub start: i32,
}

impl ChromeEntry {
    /// Clickable columns: from `start` to `start + label length`, both inclusive
    pub fn contains(&self, mx: i32) -> bool {
        mx >= self.start && mx <= self.start + self.label.len() as i32
    }
}

pub const CHROME: [ChromeEntry; 6] = [
    ChromeEntry { item: ChromeItem::Menu(Menu::File), label: " File ", start: 2 },
    ChromeEntry { item: ChromeItem::Menu(Menu::Edit), label: " Edit ", start: 10 },
    ChromeEntry { item: ChromeItem::Menu(Menu::Macros), label: " Macros ", start: 18 },
    ChromeEntry { item: ChromeItem::Menu(Menu::Elements), label: " Elements ", start: 28 },
    ChromeEntry { item: ChromeItem::DeleteControl, label: " Delete Control ", start: 40 },
    ChromeEntry { item: ChromeItem::Help, label: " Help ", start: 58 },
];

/// The top-bar item under column `mx`, first match wins
pub fn chrome_item_at(mx: i32) -> Option<ChromeItem> {
    CHROME.iter().find(|entry| entry.contains(mx)).map(|entry| entry.item)
}

/// Which dropdown is open; at most one at a time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: Option<Menu>,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_menu(&self) -> Option<Menu> {
        self.open
    }

    pub fn is_open(&self, menu: Menu) -> bool {
        self.open == Some(menu)
    }

    /// Open `menu` if it was closed, close it if it was open; others close
    pub fn toggle(&mut self, menu: Menu) {
        self.open = if self.is_open(menu) { None } else { Some(menu) };
    }

    pub fn close(&mut self) {
        self.open = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chrome_ranges() {
        assert_eq!(chrome_item_at(2), Some(ChromeItem::Menu(Menu::File)));
        assert_eq!(chrome_item_at(8), Some(ChromeItem::Menu(Menu::File)));
        assert_eq!(chrome_item_at(9), None);
        assert_eq!(chrome_item_at(16), Some(ChromeItem::Menu(Menu::Edit)));
        assert_eq!(chrome_item_at(26), Some(ChromeItem::Menu(Menu::Macros)));
        assert_eq!(chrome_item_at(38), Some(ChromeItem::Menu(Menu::Elements)));
        assert_eq!(chrome_item_at(40), Some(ChromeItem::DeleteControl));
        assert_eq!(chrome_item_at(56), Some(ChromeItem::DeleteControl));
        assert_eq!(chrome_item_at(57), None);
        assert_eq!(chrome_item_at(64), Some(ChromeItem::Help));
        assert_eq!(chrome_item_at(65), None);
        assert_eq!(chrome_item_at(1), None);
    }

    #[test]
    fn test_menu_columns() {
        assert_eq!(Menu::File.column(), 2);
        assert_eq!(Menu::Edit.column(), 10);
        assert_eq!(Menu::Macros.column(), 18);
        assert_eq!(Menu::Elements.column(), 28);
    }

    #[test]
    fn test_toggle_is_exclusive() {
        let mut menus = MenuState::new();
        menus.toggle(Menu::File);
        assert!(menus.is_open(Menu::File));

        menus.toggle(Menu::Elements);
        assert!(menus.is_open(Menu::Elements));
        assert!(!menus.is_open(Menu::File));

        menus.toggle(Menu::Elements);
        assert_eq!(menus.open_menu(), None);
    }
}
