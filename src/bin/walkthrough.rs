//! Scripted tour of the app
//!
//! Signs in, plans a walking route, opens its details and steps through live
//! navigation, logging each screen on the way. Pass a JSON config file as the
//! first argument to change delays or the log filter.

use anyhow::{anyhow, Context, Result};
use app_state::AppConfig;
use app_ui::{ActiveScreen, NavigationTab, TabBarButton};
use route_planner::{telemetry, App};

#[tokio::main]
async fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config from {path}"))?;
            AppConfig::from_json_str(&json)?
        }
        None => AppConfig::default(),
    };
    telemetry::init_tracing(&config.log_filter);

    let mut app = App::new(config)?;
    show(&app);

    // splash -> login
    app.settle().await;
    show(&app);

    let login = screen(&mut app)?
        .as_login_mut()
        .ok_or_else(|| anyhow!("expected the login screen"))?;
    login.set_email("sarah.johnson@example.com");
    login.set_password("hunter2");
    login.submit();
    app.settle().await;
    show(&app);

    let search = screen(&mut app)?
        .as_search_mut()
        .ok_or_else(|| anyhow!("expected the search screen"))?;
    search.set_origin("Home");
    search.set_destination("Central Park");
    search.submit();
    app.pump();

    let results = screen(&mut app)?
        .as_results_mut()
        .ok_or_else(|| anyhow!("expected the results screen"))?;
    tracing::info!(header = %results.header(), count = %results.count_label(), "results");
    for card in results.cards() {
        tracing::info!(route = %card.route_id, duration = %card.duration, distance = %card.distance, "route card");
    }
    let first = results
        .routes()
        .first()
        .map(|route| route.id.clone())
        .ok_or_else(|| anyhow!("no routes listed"))?;
    if !results.select(&first) {
        return Err(anyhow!("route {first} could not be selected"));
    }
    app.settle().await;
    show(&app);

    let details = screen(&mut app)?
        .as_details()
        .ok_or_else(|| anyhow!("expected the details screen"))?;
    for step in details.steps() {
        tracing::info!(number = step.number, step = %step.instruction, distance = ?step.distance, "step");
    }
    details.start_navigation();
    app.pump();
    show(&app);

    let map = screen(&mut app)?
        .as_map_mut()
        .ok_or_else(|| anyhow!("expected the map screen"))?;
    loop {
        if let Some(label) = map.step_label() {
            let instruction = map.current_step().map(|step| step.instruction.as_str());
            tracing::info!(%label, instruction = ?instruction, "navigating");
        }
        if !map.next() {
            break;
        }
    }

    app.press(TabBarButton::Tab(NavigationTab::Profile));
    show(&app);
    Ok(())
}

fn screen(app: &mut App) -> Result<&mut ActiveScreen> {
    app.current_mut().ok_or_else(|| anyhow!("no screen mounted"))
}

fn show(app: &App) {
    tracing::info!(path = %app.current_screen().to_path(), "showing");
}
