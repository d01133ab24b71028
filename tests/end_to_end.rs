//! End-to-end flows through the app facade
//!
//! Every test runs with a paused clock so that the splash, sign-in and
//! selection delays elapse instantly and can be measured exactly.

use std::time::Duration;

use app_state::AppConfig;
use app_ui::{AppStage, NavigationAction, NavigationTab, Screen, TabBarButton};
use route_core::ModeId;
use route_planner::App;
use tokio::time::Instant;

/// Start the app and walk it through splash and login onto the search tab
async fn signed_in(config: AppConfig) -> App {
    let mut app = App::new(config).unwrap();
    app.settle().await;

    let login = app.current_mut().unwrap().as_login_mut().unwrap();
    login.set_email("sarah.johnson@example.com");
    login.set_password("secret");
    login.submit();
    app.settle().await;
    app
}

#[tokio::test(start_paused = true)]
async fn test_launch_and_sign_in_use_configured_delays() {
    let started = Instant::now();
    let mut app = App::new(AppConfig::default()).unwrap();
    assert_eq!(app.state().stage(), AppStage::Launch);

    assert_eq!(app.settle().await, 1);
    assert_eq!(started.elapsed(), Duration::from_millis(2500));
    assert_eq!(app.current_screen(), &Screen::Login);
    assert!(!app.state().can_go_back());

    let login = app.current_mut().unwrap().as_login_mut().unwrap();
    login.submit();
    assert!(login.is_loading());

    let submitted = Instant::now();
    app.settle().await;
    assert_eq!(submitted.elapsed(), Duration::from_millis(1500));
    assert_eq!(app.state().stage(), AppStage::Main);
    assert_eq!(app.state().active_tab(), NavigationTab::Search);
    assert!(app.current().unwrap().as_search().is_some());
}

#[tokio::test(start_paused = true)]
async fn test_initial_tab_from_config() {
    let app = signed_in(AppConfig::new().initial_tab("history")).await;
    assert_eq!(app.state().active_tab(), NavigationTab::History);
    assert!(app.current().unwrap().as_history().is_some());
}

#[tokio::test(start_paused = true)]
async fn test_register_then_sign_in_link() {
    let mut app = App::new(AppConfig::default()).unwrap();
    app.settle().await;

    app.current().unwrap().as_login().unwrap().sign_up();
    app.pump();
    assert_eq!(app.current_screen(), &Screen::Register);
    assert!(app.state().can_go_back());

    app.current().unwrap().as_register().unwrap().sign_in();
    app.pump();
    assert_eq!(app.current_screen(), &Screen::Login);
}

#[tokio::test(start_paused = true)]
async fn test_search_to_live_navigation() {
    let mut app = signed_in(AppConfig::default()).await;

    let search = app.current_mut().unwrap().as_search_mut().unwrap();
    assert_eq!(search.mode(), ModeId::Walking);
    let params = search.submit();
    assert_eq!(params.origin, "Current Location");
    assert_eq!(params.destination, "Unknown Destination");
    app.pump();

    let results = app.current_mut().unwrap().as_results_mut().unwrap();
    assert_eq!(results.routes().len(), 3);
    assert_eq!(results.header(), "Current Location → Unknown Destination");
    assert!(results.select("w2"));
    assert_eq!(results.selected(), Some("w2"));

    let selected = Instant::now();
    app.settle().await;
    assert_eq!(selected.elapsed(), Duration::from_millis(300));
    assert_eq!(
        app.current_screen().to_path(),
        "/route-details?mode=walking&routeId=w2"
    );

    let details = app.current().unwrap().as_details().unwrap();
    assert!(!details.is_not_found());
    assert_eq!(details.steps().len(), 5);
    assert!(details.start_navigation());
    app.pump();

    let map = app.current_mut().unwrap().as_map_mut().unwrap();
    assert_eq!(map.active_leg(), 0);
    assert_eq!(map.current_step().unwrap().instruction, "Start at Main Street");
    assert_eq!(map.step_label().as_deref(), Some("Step 1 of 5"));
    assert!(map.voice_guidance());
    assert!(map.next());
    assert_eq!(map.step_label().as_deref(), Some("Step 2 of 5"));

    // back out of the map, then the details, onto the results as they were left
    app.dispatch(NavigationAction::Back);
    assert!(app.current().unwrap().as_details().is_some());
    app.dispatch(NavigationAction::Back);
    let results = app.current().unwrap().as_results().unwrap();
    assert_eq!(results.selected(), Some("w2"));
    assert!(!results.has_pending_selection());
}

#[tokio::test(start_paused = true)]
async fn test_filters_commit_to_session() {
    let mut app = signed_in(AppConfig::default()).await;
    app.current().unwrap().as_search().unwrap().submit();
    app.pump();

    app.current().unwrap().as_results().unwrap().open_filters();
    app.pump();
    assert!(app.state().has_modals());

    let panel = app.current_mut().unwrap().as_filters_mut().unwrap();
    assert!(panel.toggle(0));
    panel.set_time_vs_distance(80);
    panel.apply();
    app.pump();

    assert!(!app.state().has_modals());
    assert!(app.current().unwrap().as_results().is_some());
    let filters = app.session().filters();
    assert!(filters.for_mode(ModeId::Walking)[0].value);
    assert_eq!(filters.time_vs_distance, 80);
}

#[tokio::test(start_paused = true)]
async fn test_filters_back_discards_draft() {
    let mut app = signed_in(AppConfig::default()).await;
    app.open_path("/filters?mode=cycling");

    let panel = app.current_mut().unwrap().as_filters_mut().unwrap();
    assert_eq!(panel.mode(), ModeId::Cycling);
    panel.toggle(0);
    panel.go_back();
    app.pump();

    assert!(app.current().unwrap().as_search().is_some());
    assert_eq!(app.session().filters(), Default::default());
}

#[tokio::test(start_paused = true)]
async fn test_tab_switch_keeps_each_stack() {
    let mut app = signed_in(AppConfig::default()).await;
    app.current().unwrap().as_search().unwrap().submit();
    app.pump();

    app.press(TabBarButton::Tab(NavigationTab::Favorites));
    let favorites = app.current().unwrap().as_favorites().unwrap();
    assert!(favorites.open("fav1"));
    app.pump();
    let results = app.current().unwrap().as_results().unwrap();
    assert_eq!(results.entry().map(|entry| entry.id.as_str()), Some("fav1"));

    app.press(TabBarButton::Tab(NavigationTab::Search));
    assert!(app.current().unwrap().as_results().is_some());
    assert_eq!(app.state().current_stack().depth(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_selection_dropped_after_tab_switch() {
    let mut app = signed_in(AppConfig::default()).await;
    app.current().unwrap().as_search().unwrap().submit();
    app.pump();
    assert!(app.current_mut().unwrap().as_results_mut().unwrap().select("w2"));

    app.press(TabBarButton::Tab(NavigationTab::Favorites));
    app.settle_within(Duration::from_secs(1)).await;

    assert_eq!(app.state().active_tab(), NavigationTab::Favorites);
    assert_eq!(app.state().current_stack().depth(), 1);
    assert!(app.current().unwrap().as_favorites().is_some());

    // the results tab was left untouched as well
    app.press(TabBarButton::Tab(NavigationTab::Search));
    assert_eq!(app.state().current_stack().depth(), 2);
    assert!(app.current().unwrap().as_results().is_some());
}

#[tokio::test(start_paused = true)]
async fn test_selection_keeps_open_filters() {
    let mut app = signed_in(AppConfig::default()).await;
    app.current().unwrap().as_search().unwrap().submit();
    app.pump();

    let results = app.current_mut().unwrap().as_results_mut().unwrap();
    assert!(results.select("w1"));
    results.open_filters();
    app.pump();
    assert!(app.current().unwrap().as_filters().is_some());

    app.settle_within(Duration::from_secs(1)).await;
    assert!(app.state().has_modals());
    assert!(app.current().unwrap().as_filters().is_some());
}

#[tokio::test(start_paused = true)]
async fn test_unknown_path_shows_not_found() {
    let mut app = signed_in(AppConfig::default()).await;
    assert_eq!(app.open_path("/nowhere"), Screen::NotFound);
    assert!(app.current().unwrap().as_not_found().is_some());

    app.current().unwrap().as_not_found().unwrap().go_back();
    app.pump();
    assert!(app.current().unwrap().as_search().is_some());
}

#[tokio::test(start_paused = true)]
async fn test_profile_settings_and_sign_out() {
    let mut app = signed_in(AppConfig::default()).await;
    app.press(TabBarButton::Tab(NavigationTab::Profile));

    let profile = app.current().unwrap().as_profile().unwrap();
    profile.toggle_units();
    profile.toggle_dark_mode();
    assert!(profile.uses_miles());
    assert!(app.session().preferences().theme.is_dark());

    app.current().unwrap().as_profile().unwrap().sign_out();
    app.pump();
    assert_eq!(app.state().stage(), AppStage::Auth);
    assert_eq!(app.current_screen(), &Screen::Login);

    // preferences outlive the signed-in session
    assert!(app.session().preferences().theme.is_dark());
}
