use std::time::Duration;
use web_time::Instant;

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Route {
    #[default]
    #[strum(to_string = "Accueil")]
    Home,
    #[strum(to_string = "Connexion")]
    Login,
    #[strum(to_string = "Inscription")]
    Signup,
    #[strum(to_string = "Profil")]
    Profile,
    #[strum(to_string = "Relations")]
    Connections,
    #[strum(to_string = "Transactions")]
    Transactions,
}

/// A request from a page to show another page, possibly after a delay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub to: Route,
    pub delay: Duration,
    requested_at: Instant,
}

impl Navigation {
    pub fn now(to: Route) -> Self {
        Self::after(to, Duration::ZERO)
    }

    pub fn after(to: Route, delay: Duration) -> Self {
        Self {
            to,
            delay,
            requested_at: Instant::now(),
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.requested_at) >= self.delay
    }

    /// Time left before the navigation is due
    pub fn remaining(&self, now: Instant) -> Duration {
        self.delay
            .saturating_sub(now.saturating_duration_since(self.requested_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn immediate_navigation_is_due() {
        let nav = Navigation::now(Route::Profile);
        assert!(nav.is_due(Instant::now()));
        assert_eq!(nav.remaining(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn delayed_navigation_waits() {
        let nav = Navigation::after(Route::Home, Duration::from_secs(2));
        let start = nav.requested_at;

        assert!(!nav.is_due(start + Duration::from_millis(1_999)));
        assert!(nav.is_due(start + Duration::from_secs(2)));
        assert_eq!(
            nav.remaining(start + Duration::from_millis(500)),
            Duration::from_millis(1_500)
        );
    }
}
