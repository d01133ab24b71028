//! Navigation controller
//!
//! Screens never touch [`NavigationState`] directly. They hold a
//! [`Navigator`] and emit [`NavigationAction`]s, either immediately or after
//! a fixed delay. The [`NavigationController`] owns the state and applies
//! queued actions in order when the host pumps it.

use std::time::Duration;

use app_state::DelayedAction;
use tokio::sync::mpsc;

use crate::navigation::{NavigationAction, NavigationState, NavigationTab, Router, Screen};

/// Actions taken off the channel in one wakeup of `wait_and_pump`
const WAIT_BATCH: usize = 16;

/// Cloneable handle for emitting navigation actions
#[derive(Debug, Clone)]
pub struct Navigator {
    tx: mpsc::UnboundedSender<NavigationAction>,
}

impl Navigator {
    /// Create a navigator and the receiving end of its channel
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<NavigationAction>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Queue an action
    pub fn dispatch(&self, action: NavigationAction) {
        if self.tx.send(action).is_err() {
            tracing::debug!("navigation controller gone; action discarded");
        }
    }

    /// Push or present a screen
    pub fn navigate(&self, screen: Screen) {
        self.dispatch(NavigationAction::Navigate(screen));
    }

    /// Replace the visible screen
    pub fn replace(&self, screen: Screen) {
        self.dispatch(NavigationAction::Replace(screen));
    }

    /// Go back
    pub fn back(&self) {
        self.dispatch(NavigationAction::Back);
    }

    /// Switch tabs
    pub fn switch_tab(&self, tab: NavigationTab) {
        self.dispatch(NavigationAction::SwitchTab(tab));
    }

    /// Queue `action` after `delay`
    ///
    /// The action is dropped if the returned handle is dropped first.
    pub fn schedule(
        &self,
        label: &'static str,
        delay: Duration,
        action: NavigationAction,
    ) -> DelayedAction {
        DelayedAction::spawn(label, delay, self.tx.clone(), action)
    }
}

/// Owner of the navigation state
pub struct NavigationController {
    state: NavigationState,
    router: Router,
    navigator: Navigator,
    rx: mpsc::UnboundedReceiver<NavigationAction>,
}

impl NavigationController {
    /// Create a controller showing the splash screen
    pub fn new(initial_tab: NavigationTab) -> Self {
        let (navigator, rx) = Navigator::channel();
        Self {
            state: NavigationState::new(initial_tab),
            router: Router::new(),
            navigator,
            rx,
        }
    }

    /// Handle for screens
    pub fn navigator(&self) -> Navigator {
        self.navigator.clone()
    }

    /// Current state
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Visible screen
    pub fn current_screen(&self) -> &Screen {
        self.state.current_screen()
    }

    /// Apply one action now
    pub fn apply(&mut self, action: NavigationAction) {
        let from = self.state.current_screen().to_path();
        self.state.apply(action);
        tracing::debug!(from = %from, to = %self.state.current_screen().to_path(), "navigated");
    }

    /// Apply every queued action in order; returns how many were applied
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(action) = self.rx.try_recv() {
            self.apply(action);
            applied += 1;
        }
        applied
    }

    /// Wait for the next action, apply it, then apply anything else queued
    ///
    /// Returns how many actions were applied. The controller holds a sender
    /// of its own, so the channel never closes: with nothing queued and no
    /// timer running this waits forever. Bound it with
    /// [`tokio::time::timeout`] when that can happen.
    pub async fn wait_and_pump(&mut self) -> usize {
        let mut batch = Vec::with_capacity(WAIT_BATCH);
        self.rx.recv_many(&mut batch, WAIT_BATCH).await;
        let received = batch.len();
        for action in batch {
            self.apply(action);
        }
        received + self.pump()
    }

    /// Resolve a path and navigate to it
    pub fn open_path(&mut self, path: &str) -> Screen {
        let screen = self.router.match_path(path);
        self.apply(NavigationAction::Navigate(screen.clone()));
        screen
    }
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new(NavigationTab::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::AppStage;
    use crate::params::DetailsParams;

    #[test]
    fn test_pump_applies_in_order() {
        let mut controller = NavigationController::default();
        let navigator = controller.navigator();

        navigator.replace(Screen::Login);
        navigator.dispatch(NavigationAction::EnterApp);
        navigator.navigate(Screen::RouteDetails(DetailsParams::new("walking", "w3")));

        assert_eq!(controller.pump(), 3);
        assert_eq!(controller.state().stage(), AppStage::Main);
        assert_eq!(
            controller.current_screen(),
            &Screen::RouteDetails(DetailsParams::new("walking", "w3"))
        );
        assert_eq!(controller.pump(), 0);
    }

    #[test]
    fn test_open_path() {
        let mut controller = NavigationController::default();
        controller.apply(NavigationAction::EnterApp);

        let screen = controller.open_path("/history");
        assert_eq!(screen, Screen::History);
        assert_eq!(controller.state().active_tab(), NavigationTab::History);

        assert_eq!(controller.open_path("/bogus"), Screen::NotFound);
        assert_eq!(controller.current_screen(), &Screen::NotFound);
        controller.navigator().back();
        controller.pump();
        assert_eq!(controller.current_screen(), &Screen::History);
    }

    #[tokio::test(start_paused = true)]
    async fn test_scheduled_action() {
        let mut controller = NavigationController::default();
        let _timer = controller.navigator().schedule(
            "splash",
            Duration::from_millis(2500),
            NavigationAction::Replace(Screen::Login),
        );

        tokio::time::sleep(Duration::from_millis(2400)).await;
        assert_eq!(controller.pump(), 0);

        assert_eq!(controller.wait_and_pump().await, 1);
        assert_eq!(controller.current_screen(), &Screen::Login);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_schedule_never_applies() {
        let mut controller = NavigationController::default();
        let timer = controller.navigator().schedule(
            "splash",
            Duration::from_millis(2500),
            NavigationAction::Replace(Screen::Login),
        );
        drop(timer);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(controller.pump(), 0);
        assert_eq!(controller.current_screen(), &Screen::Splash);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_and_pump_blocks_while_idle() {
        let mut controller = NavigationController::default();
        let waited =
            tokio::time::timeout(Duration::from_secs(3600), controller.wait_and_pump()).await;
        assert!(waited.is_err());
        assert_eq!(controller.current_screen(), &Screen::Splash);
    }

    #[test]
    fn test_navigator_outlives_controller() {
        let controller = NavigationController::default();
        let navigator = controller.navigator();
        drop(controller);
        navigator.back();
    }
}
