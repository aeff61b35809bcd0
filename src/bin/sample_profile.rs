use std::{process::ExitCode, time::Duration};

use tokio::{select, time::Instant};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use trapezoidal_planner::{config::PlanConfig, plan, TrajectoryPlan};

/// Steps through the plan in real time, one JSON line per tick.
async fn sampling_loop(plan: &TrajectoryPlan, period: Duration) {
    let end = plan.max_duration();
    let mut interval = tokio::time::interval(period);
    let start = Instant::now();
    loop {
        interval.tick().await; // first tick ticks immediately

        let t = start.elapsed().as_secs_f64().min(end);
        match plan.sample(t).map(|s| serde_json::to_string(&s)) {
            Ok(Ok(line)) => println!("{line}"),
            Ok(Err(e)) => error!("couldn't serialize sample at t={t}: {e}"),
            Err(e) => error!("couldn't evaluate plan at t={t}: {e}"),
        }

        if t >= end {
            break;
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => match PlanConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                error!("{path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => PlanConfig::default(),
    };

    let plan = match config.axis_specs().and_then(|specs| plan(&specs)) {
        Ok(plan) => plan,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    for (i, profile) in plan.profiles().enumerate() {
        info!(
            "axis {i}: {:?} profile, {:.3}s (ramp {:.3}s, cruise {:.3}s, top speed {:.3})",
            profile.kind, profile.t, profile.ta, profile.tc, profile.vc
        );
    }

    select! {
        _ = sampling_loop(&plan, config.sample_period()) => {
            info!("reached the end of the plan after {:.3}s", plan.max_duration())
        }
        _ = tokio::signal::ctrl_c() => {
            info!("sampling loop received stop signal")
        }
    };
    ExitCode::SUCCESS
}
