//! Splash, login and register screens
//!
//! None of these validate anything. Login and register always succeed after
//! the configured delay.

use app_state::{AuthProvider, AuthRequest, DelayedAction};

use super::ScreenContext;
use crate::navigation::{NavigationAction, Screen};

/// Brand name shown on the splash and profile screens
pub const APP_NAME: &str = "RouteQuest";

/// Splash screen; moves to login on its own
#[derive(Debug)]
pub struct SplashScreen {
    timer: DelayedAction,
}

impl SplashScreen {
    /// Mount the splash and start its timer
    pub fn new(ctx: ScreenContext) -> Self {
        let timer = ctx.navigator.schedule(
            "splash",
            ctx.timing.splash_delay(),
            NavigationAction::Replace(Screen::Login),
        );
        Self { timer }
    }

    /// Brand name
    pub fn app_name(&self) -> &'static str {
        APP_NAME
    }

    /// Whether the advance to login is still pending
    pub fn is_pending(&self) -> bool {
        !self.timer.is_finished()
    }
}

/// Sign-in form
#[derive(Debug)]
pub struct LoginScreen {
    ctx: ScreenContext,
    email: String,
    password: String,
    pending: Option<DelayedAction>,
}

impl LoginScreen {
    /// Empty form
    pub fn new(ctx: ScreenContext) -> Self {
        Self {
            ctx,
            email: String::new(),
            password: String::new(),
            pending: None,
        }
    }

    /// Email field
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Edit the email field
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Edit the password field
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Whether a sign-in is in flight; the buttons are disabled meanwhile
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// "Sign In"
    pub fn submit(&mut self) {
        let request = AuthRequest::Login {
            email: self.email.clone(),
            password: self.password.clone(),
        };
        self.start(request);
    }

    /// A third-party sign-in button
    pub fn continue_with(&mut self, provider: AuthProvider) {
        self.start(AuthRequest::Provider(provider));
    }

    /// "Sign Up" link
    pub fn sign_up(&self) {
        self.ctx.navigator.navigate(Screen::Register);
    }

    /// Third-party buttons in display order
    pub fn providers(&self) -> [AuthProvider; 2] {
        [AuthProvider::Apple, AuthProvider::Email]
    }

    fn start(&mut self, request: AuthRequest) {
        if self.is_loading() {
            return;
        }
        self.ctx.auth.authenticate(&request);
        self.pending = Some(self.ctx.navigator.schedule(
            "login",
            self.ctx.timing.auth_delay(),
            NavigationAction::EnterApp,
        ));
    }
}

/// Account creation form
#[derive(Debug)]
pub struct RegisterScreen {
    ctx: ScreenContext,
    name: String,
    email: String,
    password: String,
    confirm_password: String,
    pending: Option<DelayedAction>,
}

impl RegisterScreen {
    /// Empty form
    pub fn new(ctx: ScreenContext) -> Self {
        Self {
            ctx,
            name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            pending: None,
        }
    }

    /// Edit the name field
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Edit the email field
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Edit the password field
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Edit the confirmation field
    pub fn set_confirm_password(&mut self, password: impl Into<String>) {
        self.confirm_password = password.into();
    }

    /// Whether registration is in flight
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// "Create Account"; mismatched passwords are accepted
    pub fn submit(&mut self) {
        if self.is_loading() {
            return;
        }
        self.ctx.auth.authenticate(&AuthRequest::Register {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
        });
        self.pending = Some(self.ctx.navigator.schedule(
            "register",
            self.ctx.timing.auth_delay(),
            NavigationAction::EnterApp,
        ));
    }

    /// Header back button
    pub fn go_back(&self) {
        self.ctx.navigator.back();
    }

    /// "Sign In" link
    pub fn sign_in(&self) {
        self.ctx.navigator.replace(Screen::Login);
    }
}

/// Fallback for unknown paths
#[derive(Debug)]
pub struct NotFoundScreen {
    ctx: ScreenContext,
}

impl NotFoundScreen {
    /// Message shown
    pub const MESSAGE: &'static str = "This screen doesn't exist.";

    /// Mount
    pub fn new(ctx: ScreenContext) -> Self {
        Self { ctx }
    }

    /// Leave the screen
    pub fn go_back(&self) {
        self.ctx.navigator.back();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::test_support::{context, drain};
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_splash_advances_after_delay() {
        let (ctx, mut rx) = context();
        let splash = SplashScreen::new(ctx);
        assert!(splash.is_pending());
        assert_eq!(splash.app_name(), "RouteQuest");

        tokio::time::sleep(Duration::from_millis(2499)).await;
        assert!(drain(&mut rx).is_empty());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(drain(&mut rx), vec![NavigationAction::Replace(Screen::Login)]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_enters_app_after_delay() {
        let (ctx, mut rx) = context();
        let mut login = LoginScreen::new(ctx);
        assert!(!login.is_loading());

        login.submit();
        assert!(login.is_loading());

        // a second press while loading is ignored
        login.continue_with(AuthProvider::Apple);

        tokio::time::sleep(Duration::from_millis(1499)).await;
        assert!(drain(&mut rx).is_empty());
        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(drain(&mut rx), vec![NavigationAction::EnterApp]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_unmount_cancels() {
        let (ctx, mut rx) = context();
        let mut login = LoginScreen::new(ctx);
        login.continue_with(AuthProvider::Email);
        drop(login);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_register_flow() {
        let (ctx, mut rx) = context();
        let mut register = RegisterScreen::new(ctx);
        register.set_name("Ada");
        register.set_password("one");
        register.set_confirm_password("two");

        register.go_back();
        register.sign_in();
        assert_eq!(
            drain(&mut rx),
            vec![NavigationAction::Back, NavigationAction::Replace(Screen::Login)]
        );

        register.submit();
        tokio::time::sleep(Duration::from_millis(1499)).await;
        assert!(drain(&mut rx).is_empty());
        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(drain(&mut rx), vec![NavigationAction::EnterApp]);
    }

    #[tokio::test]
    async fn test_login_links() {
        let (ctx, mut rx) = context();
        let login = LoginScreen::new(ctx);
        login.sign_up();
        assert_eq!(drain(&mut rx), vec![NavigationAction::Navigate(Screen::Register)]);
        assert_eq!(login.providers()[0].label(), "Continue with Apple");
    }
}
