//! Hidden link browser unlocked by typing the secret phrase into the JSON
//! loader.

/// One entry in the link list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLink {
    /// Display title.
    pub title: &'static str,
    /// Address opened in the browser.
    pub url: &'static str,
}

/// Fixed link list.
pub const GAME_LINKS: &[GameLink] = &[
    GameLink {
        title: "Highway Traffic",
        url: "https://www.onlinegames.io/games/2022/unity/highway-traffic/index.html",
    },
    GameLink {
        title: "Block Blast",
        url: "https://cloud.onlinegames.io/games/2024/unity3/block-blast/index-og.html",
    },
    GameLink {
        title: "Jeep Racing",
        url: "https://www.onlinegames.io/games/2023/freezenova.com/jeep-racing/index.html",
    },
    GameLink {
        title: "time.is",
        url: "https://time.is",
    },
];

/// Highlight and open state of the link browser.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SecretBrowserState {
    /// Highlighted row in the list.
    pub highlighted: usize,
    /// Entry currently shown, `None` while browsing the list.
    pub opened: Option<usize>,
}

impl SecretBrowserState {
    /// Fresh state: first entry highlighted, nothing open.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            highlighted: 0,
            opened: None,
        }
    }

    /// Forget the highlight and the open entry.
    pub const fn reset(&mut self) {
        self.highlighted = 0;
        self.opened = None;
    }

    /// Highlight the next entry, wrapping.
    pub const fn select_next(&mut self) {
        self.highlighted = (self.highlighted + 1) % GAME_LINKS.len();
    }

    /// Highlight the previous entry, wrapping.
    pub const fn select_prev(&mut self) {
        self.highlighted = if self.highlighted == 0 {
            GAME_LINKS.len() - 1
        } else {
            self.highlighted - 1
        };
    }

    /// Open the highlighted entry and return it.
    pub fn open_highlighted(&mut self) -> Option<GameLink> {
        let link = GAME_LINKS.get(self.highlighted).copied()?;
        self.opened = Some(self.highlighted);
        Some(link)
    }

    /// Return from an open entry to the list.
    pub const fn back(&mut self) {
        self.opened = None;
    }

    /// The open entry, if any.
    #[must_use]
    pub fn opened_link(&self) -> Option<GameLink> {
        self.opened.and_then(|i| GAME_LINKS.get(i).copied())
    }
}
