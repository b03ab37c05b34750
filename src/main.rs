use anyhow::Result;
use dotenvy::dotenv;
use tracing::info;
use tracing_appender::rolling;

use hr_dashboard::api::ApiClient;
use hr_dashboard::{AdminPortal, Config};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::from_env();

    // Rolling daily log
    let file_appender = rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("Loading dashboard data...");

    let client = ApiClient::new(&config)?;
    let mut portal = AdminPortal::new(client, config.top_n);
    portal.load_all().await;

    render(&portal);
    Ok(())
}

fn render(portal: &AdminPortal) {
    let summary = &portal.summary;
    println!("== Team Summary ==");
    println!("employees:         {}", summary.total_employees);
    println!("today attendance:  {}", summary.today_attendance);
    println!("week hours:        {:.1}", summary.week_hours);
    println!("late today:        {}", summary.late_today);
    println!(
        "shift:             {}",
        if portal.shift.shift_ended { "wrapped up" } else { "active" }
    );

    let totals = portal.dashboard_totals();
    println!("\n== Labels ==");
    println!("total labels:      {}", totals.total_labels);
    println!("average rate:      ${:.2}", totals.average_rate);
    println!("total revenue:     ${:.2}", totals.total_revenue);

    println!("\n== Employee Performance ==");
    for stats in portal.employee_performance() {
        println!("{:<24} {:>8} labels  ${:>10.2}", stats.name, stats.labels, stats.revenue);
    }

    println!("\n== Status Distribution ==");
    for slice in portal.label_status_distribution() {
        println!("{:<12} {}", slice.label, slice.count);
    }

    println!("\n== Top Punctual ==");
    for row in portal.top_punctual_panel() {
        println!("{:<24} {:>6.1}%", row.name, row.punctuality_rate);
    }

    println!("\n== Top Hardworking ==");
    for row in portal.top_hardworking_panel() {
        println!("{:<24} {:>8.1}h", row.name, row.total_hours);
    }

    let goals = portal.goal_panel();
    println!("\n== Goals ==");
    println!(
        "active {} / completed {} / overdue {} / avg progress {:.1}%",
        goals.active_goals, goals.completed_goals, goals.overdue_goals, goals.average_progress
    );
    for (i, performer) in goals.top_performers.iter().take(3).enumerate() {
        println!(
            "#{} {:<22} {:>6.1}%  {:>8} labels  ${:>10.2}",
            i + 1,
            performer.name,
            performer.progress,
            performer.labels,
            performer.revenue
        );
    }
}
