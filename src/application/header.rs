//! Navigation header view model.
//!
//! Pure presentation: the header owns no state, renders from its props and
//! forwards clicks to the callbacks it was given.

use std::fmt;
use std::str::FromStr;

use crate::domain::{DomainError, Profile};

/// Application title shown at the left of the header.
pub const TITLE: &str = "Habit Pet";

/// A top-level page reachable from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Habits,
    Dailies,
    Todos,
    Rewards,
    Groups,
    Challenges,
    Pet,
}

impl View {
    /// Navigation order.
    pub const ALL: [View; 7] = [
        View::Habits,
        View::Dailies,
        View::Todos,
        View::Rewards,
        View::Groups,
        View::Challenges,
        View::Pet,
    ];

    /// Key passed to the navigation callback.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            View::Habits => "habits",
            View::Dailies => "dailies",
            View::Todos => "todos",
            View::Rewards => "rewards",
            View::Groups => "groups",
            View::Challenges => "challenges",
            View::Pet => "pet",
        }
    }

    /// Button caption.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            View::Habits => "Habits",
            View::Dailies => "Dailies",
            View::Todos => "To-Dos",
            View::Rewards => "Rewards",
            View::Groups => "Groups",
            View::Challenges => "Challenges",
            View::Pet => "Pet",
        }
    }

    /// The pet page has its own stat display, so the header drops the
    /// wallet there.
    #[must_use]
    pub const fn shows_currency(self) -> bool {
        !matches!(self, View::Pet)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for View {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|view| view.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::UnknownVariant {
                kind: "view",
                value: s.to_string(),
            })
    }
}

/// A clickable header button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderButton {
    Navigate(View),
    Logout,
}

impl HeaderButton {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            HeaderButton::Navigate(view) => view.label(),
            HeaderButton::Logout => "Logout",
        }
    }
}

/// Gold and gems as displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    pub gold: i32,
    pub gems: i32,
}

/// Rendered header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub title: &'static str,
    /// `None` on the pet view.
    pub currency: Option<Currency>,
    pub buttons: Vec<HeaderButton>,
}

impl fmt::Display for HeaderView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        if let Some(currency) = self.currency {
            writeln!(f, "Gold: {}  Gems: {}", currency.gold, currency.gems)?;
        }
        let labels: Vec<String> = self
            .buttons
            .iter()
            .map(|b| format!("[{}]", b.label()))
            .collect();
        write!(f, "{}", labels.join(" "))
    }
}

/// Header props: the signed-in user, the current view and the handlers
/// its buttons call.
pub struct Header<'a, N, L>
where
    N: FnMut(View),
    L: FnMut(),
{
    user: &'a Profile,
    current_view: View,
    on_navigate: N,
    on_logout: L,
}

impl<'a, N, L> Header<'a, N, L>
where
    N: FnMut(View),
    L: FnMut(),
{
    pub fn new(user: &'a Profile, current_view: View, on_navigate: N, on_logout: L) -> Self {
        Self {
            user,
            current_view,
            on_navigate,
            on_logout,
        }
    }

    #[must_use]
    pub fn render(&self) -> HeaderView {
        let currency = self.current_view.shows_currency().then_some(Currency {
            gold: self.user.gold,
            gems: self.user.gems,
        });
        let buttons = View::ALL
            .into_iter()
            .map(HeaderButton::Navigate)
            .chain(std::iter::once(HeaderButton::Logout))
            .collect();
        HeaderView {
            title: TITLE,
            currency,
            buttons,
        }
    }

    /// Forward a click to the matching callback.
    pub fn click(&mut self, button: HeaderButton) {
        match button {
            HeaderButton::Navigate(view) => (self.on_navigate)(view),
            HeaderButton::Logout => (self.on_logout)(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;

    fn alice() -> Profile {
        Profile {
            id: UserId::new("u1"),
            email: "alice@example.com".into(),
            username: "alice".into(),
            gold: 500,
            gems: 10,
        }
    }

    #[test]
    fn view_keys_parse_back() {
        for view in View::ALL {
            assert_eq!(view.key().parse::<View>().unwrap(), view);
        }
        assert!("shop".parse::<View>().is_err());
    }

    #[test]
    fn display_lists_title_wallet_and_buttons() {
        let user = alice();
        let header = Header::new(&user, View::Habits, |_| {}, || {});
        let text = header.render().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Habit Pet");
        assert_eq!(lines[1], "Gold: 500  Gems: 10");
        assert!(lines[2].starts_with("[Habits] [Dailies] [To-Dos]"));
        assert!(lines[2].ends_with("[Pet] [Logout]"));
    }
}
