mod support_server;

use std::sync::Arc;

use issue_loadtest::dispatch::{BatchDispatcher, JitterScheduler};
use issue_loadtest::domain::{BatchPlan, IssueOperation, OperationRequest};
use issue_loadtest::http::{EndpointConfig, HttpTransport, Transport};

use support_server::{
    DROPPED_ISSUE_ID, MISSING_ISSUE_ID, closed_base_url, spawn_issue_server_or_skip,
};

fn http_dispatcher(url: &str) -> Result<BatchDispatcher, String> {
    let endpoint = EndpointConfig::parse(url).map_err(|err| err.to_string())?;
    let transport = HttpTransport::new(endpoint).map_err(|err| err.to_string())?;
    let shared: Arc<dyn Transport> = Arc::new(transport);
    Ok(BatchDispatcher::new(shared))
}

fn runtime() -> Result<tokio::runtime::Runtime, String> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| format!("Failed to build runtime: {}", err))
}

#[test]
fn dropped_connection_only_fails_its_own_request() -> Result<(), String> {
    let Some((url, _server)) = spawn_issue_server_or_skip()? else {
        return Ok(());
    };
    let dispatcher = http_dispatcher(&url)?;
    let requests =
        OperationRequest::for_issues(IssueOperation::GetState, &[1, DROPPED_ISSUE_ID, 3]);

    let outcomes = runtime()?.block_on(dispatcher.dispatch(requests, None));

    let summary: Vec<(usize, bool, Option<u16>)> = outcomes
        .iter()
        .map(|outcome| (outcome.index, outcome.succeeded(), outcome.status_code()))
        .collect();
    if summary != vec![(0, true, Some(200)), (1, false, None), (2, true, Some(200))] {
        return Err(format!("Unexpected outcomes {:?}", outcomes));
    }
    let message = outcomes
        .get(1)
        .and_then(|outcome| outcome.error_message())
        .unwrap_or_default();
    if message.is_empty() {
        return Err("Failed outcome must carry a message".to_owned());
    }
    Ok(())
}

#[test]
fn paced_create_batch_against_http_server() -> Result<(), String> {
    let Some((url, _server)) = spawn_issue_server_or_skip()? else {
        return Ok(());
    };
    let dispatcher = http_dispatcher(&url)?;
    let plan = BatchPlan::new(3, 50, 50).map_err(|err| err.to_string())?;
    let mut scheduler = JitterScheduler::new(plan.delay());

    let started = std::time::Instant::now();
    let outcomes =
        runtime()?.block_on(dispatcher.dispatch(plan.requests(1), Some(&mut scheduler)));
    let elapsed = started.elapsed();

    if elapsed < std::time::Duration::from_millis(100) {
        return Err(format!("Expected two 50ms gaps, finished in {:?}", elapsed));
    }
    for (outcome, seq) in outcomes.iter().zip(1..) {
        let expected = format!("\"received\":{{\"text\":\"issue #1-{}\"}}", seq);
        if outcome.status_code() != Some(200)
            || !outcome.body().unwrap_or_default().contains(&expected)
        {
            return Err(format!("Unexpected outcome {:?}", outcome));
        }
    }
    if outcomes.len() != 3 {
        return Err(format!("Expected 3 outcomes, got {}", outcomes.len()));
    }
    Ok(())
}

#[test]
fn not_found_is_a_response_and_refusal_is_a_failure() -> Result<(), String> {
    let Some((url, _server)) = spawn_issue_server_or_skip()? else {
        return Ok(());
    };
    let runtime = runtime()?;

    let dispatcher = http_dispatcher(&url)?;
    let missing = OperationRequest::for_issues(IssueOperation::Cancel, &[MISSING_ISSUE_ID]);
    let outcomes = runtime.block_on(dispatcher.dispatch(missing, None));
    let first = outcomes.first().ok_or("Missing outcome")?;
    if first.status_code() != Some(404) || first.body() != Some("issue not found") {
        return Err(format!("Unexpected outcome {:?}", first));
    }

    let refused = http_dispatcher(&closed_base_url()?)?;
    let requests = OperationRequest::for_issues(IssueOperation::Cancel, &[1]);
    let outcomes = runtime.block_on(refused.dispatch(requests, None));
    let first = outcomes.first().ok_or("Missing outcome")?;
    if first.succeeded() {
        return Err(format!("Expected failure, got {:?}", first));
    }
    Ok(())
}
