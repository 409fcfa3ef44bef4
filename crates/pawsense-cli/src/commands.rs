//! Command implementations. Each returns the JSON document to print.

use std::sync::Arc;

use pawsense_core::errors::{PawsenseError, PawsenseResult};
use pawsense_core::models::ActivityRecord;
use pawsense_core::PawsenseConfig;
use pawsense_ingest::{load_log, save_log, RoutineSimulator};
use pawsense_observability::fields;
use pawsense_prediction::{ForecastRequest, ForecastService, PredictionEngine};
use pawsense_transitions::TransitionTableBuilder;
use serde_json::{json, Value};
use tracing::{info, Span};

use crate::{ChainArgs, LogArgs, NextArgs, SimulateArgs};

fn read_log(
    config: &PawsenseConfig,
    args: &LogArgs,
    span: &Span,
) -> PawsenseResult<Vec<ActivityRecord>> {
    let subject = args.subject.as_deref().or(config.ingest.subject.as_deref());
    span.record(fields::LOG_PATH, args.log.display().to_string().as_str());
    if let Some(subject) = subject {
        span.record(fields::SUBJECT, subject);
    }
    let log = load_log(&args.log, subject)?;
    span.record(fields::RECORDS, log.len());
    Ok(log)
}

fn service(config: &PawsenseConfig, args: &LogArgs, span: &Span) -> PawsenseResult<ForecastService> {
    let log = read_log(config, args, span)?;
    let engine = PredictionEngine::from_log(&log, config.prediction.clone())?;
    span.record(fields::EDGES, engine.snapshot()?.edge_count());
    Ok(ForecastService::new(Arc::new(engine)))
}

pub(crate) fn table(config: &PawsenseConfig, args: &LogArgs, span: &Span) -> anyhow::Result<Value> {
    let log = read_log(config, args, span)?;
    let table = TransitionTableBuilder::build(&log).map_err(PawsenseError::from)?;
    span.record(fields::EDGES, table.edge_count());
    info!("table built");
    Ok(serde_json::to_value(&table)?)
}

pub(crate) fn next(config: &PawsenseConfig, args: &NextArgs, span: &Span) -> anyhow::Result<Value> {
    span.record(fields::ACTIVITY, args.activity.as_str());
    let service = service(config, &args.log, span)?;
    let response = service.next(&ForecastRequest {
        current_activity: Some(args.activity.clone()),
        last_activity_time: args.at.clone(),
        ..ForecastRequest::default()
    })?;
    span.record(fields::NODES, response.predictions.len());
    info!("next answered");
    Ok(serde_json::to_value(&response)?)
}

/// Ranked top-N by default; `--all` prints the whole tree in DFS order.
pub(crate) fn chain(config: &PawsenseConfig, args: &ChainArgs, span: &Span) -> anyhow::Result<Value> {
    span.record(fields::ACTIVITY, args.activity.as_str());
    let service = service(config, &args.log, span)?;
    if let Ok(depth) = service.engine().resolve_depth(args.depth) {
        span.record(fields::DEPTH, depth);
    }
    let top_n = match (args.all, args.top) {
        (true, _) => None,
        (false, Some(n)) => Some(n),
        (false, None) => Some(i64::try_from(config.prediction.default_top_n).unwrap_or(i64::MAX)),
    };
    let response = service.chain(&ForecastRequest {
        current_activity: Some(args.activity.clone()),
        last_activity_time: Some(args.at.clone()),
        max_depth: args.depth,
        top_n,
    })?;
    span.record(fields::NODES, response.predictions.len());
    info!("chain answered");
    Ok(serde_json::to_value(&response)?)
}

pub(crate) fn simulate(
    config: &PawsenseConfig,
    args: &SimulateArgs,
    span: &Span,
) -> anyhow::Result<Value> {
    let mut sim = config.simulation.clone();
    if let Some(days) = args.days {
        sim.num_days = days;
    }
    if args.seed.is_some() {
        sim.seed = args.seed;
    }
    if let Some(subject) = &args.subject {
        sim.subject_name = subject.clone();
    }
    if let Some(start) = &args.start_date {
        sim.start_date = start.clone();
    }
    span.record(fields::LOG_PATH, args.out.display().to_string().as_str());
    span.record(fields::SUBJECT, sim.subject_name.as_str());

    let records = RoutineSimulator::new(&sim)
        .map_err(PawsenseError::from)?
        .generate();
    save_log(&args.out, &records).map_err(PawsenseError::from)?;
    span.record(fields::RECORDS, records.len());
    info!("log written");
    Ok(json!({
        "path": args.out.display().to_string(),
        "subject": sim.subject_name,
        "days": sim.num_days,
        "records": records.len(),
    }))
}
