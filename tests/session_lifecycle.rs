//! Integration Tests for the Engine Session Lifecycle
//!
//! These tests drive real child processes: small `sh` scripts standing
//! in for an AEI engine. They cover the full sequence (launch, board
//! setup, move request, wait loop, shutdown) plus the failure paths:
//! engine exit without a result, silent engine, broken pipe, and spawn
//! failure.

use std::path::PathBuf;
use std::time::Duration;

use aei_driver::{
    EngineConfig, EngineSession, Error, Position, SessionConfig, SessionState,
};

/// Engine config running a shell script as the stub engine
fn stub_engine(script: &str) -> EngineConfig {
    EngineConfig {
        command: PathBuf::from("sh"),
        args: vec!["-c".to_string(), script.to_string()],
        working_directory: None,
    }
}

/// Session timings tight enough for tests
fn fast_session() -> SessionConfig {
    SessionConfig {
        poll_interval_ms: 20,
        wait_deadline_secs: 10,
    }
}

/// Stub that answers `go` with a result line and honors `quit`
const ANSWERING_STUB: &str = r#"
while read line; do
  if [ "$line" = "go" ]; then echo "bestmove m a2a3"; fi
  if [ "$line" = "quit" ]; then exit 0; fi
done
"#;

#[tokio::test]
async fn test_bestmove_roundtrip() {
    let mut session = EngineSession::launch(&stub_engine(ANSWERING_STUB), fast_session()).unwrap();
    assert_eq!(session.state(), SessionState::Started);

    session.send_position(&Position::opening()).unwrap();
    session.request_move().unwrap();
    assert_eq!(session.state(), SessionState::AwaitingResult);

    let best = session.wait_for_bestmove(|_| {}).await.unwrap();
    assert_eq!(best.text, "bestmove m a2a3");
    assert_eq!(session.state(), SessionState::Finished);

    let process = session.shutdown().unwrap();
    assert!(process.is_terminated());
    assert!(process.exited_successfully());
    assert!(process.execution_duration().is_some());
}

#[tokio::test]
async fn test_diagnostic_lines_arrive_in_order_before_the_result() {
    let script = r#"
while read line; do
  if [ "$line" = "go" ]; then
    i=1
    while [ $i -le 50 ]; do
      echo "log line $i"
      i=$((i+1))
    done
    echo "bestmove m a2a3"
  fi
  if [ "$line" = "quit" ]; then exit 0; fi
done
"#;
    let mut session = EngineSession::launch(&stub_engine(script), fast_session()).unwrap();
    session.send_position(&Position::opening()).unwrap();
    session.request_move().unwrap();

    let mut observed = Vec::new();
    let best = session
        .wait_for_bestmove(|line| observed.push(line.text.clone()))
        .await
        .unwrap();

    // All 50 diagnostic lines surface, in emission order, then the result
    assert_eq!(observed.len(), 51);
    for (i, text) in observed.iter().take(50).enumerate() {
        assert_eq!(text, &format!("log line {}", i + 1));
    }
    assert_eq!(observed[50], "bestmove m a2a3");
    assert_eq!(best.text, "bestmove m a2a3");

    session.shutdown().unwrap();
}

#[tokio::test]
async fn test_substring_match_does_not_end_the_wait() {
    let script = r#"
while read line; do
  if [ "$line" = "go" ]; then
    echo "log considering bestmove a2a3"
    echo "bestmove m b2b3"
  fi
  if [ "$line" = "quit" ]; then exit 0; fi
done
"#;
    let mut session = EngineSession::launch(&stub_engine(script), fast_session()).unwrap();
    session.request_move().unwrap();

    let mut observed = Vec::new();
    let best = session
        .wait_for_bestmove(|line| observed.push(line.text.clone()))
        .await
        .unwrap();

    assert_eq!(best.text, "bestmove m b2b3");
    assert_eq!(observed[0], "log considering bestmove a2a3");

    session.shutdown().unwrap();
}

#[tokio::test]
async fn test_engine_exit_without_result_is_a_distinct_error() {
    let script = r#"
while read line; do
  if [ "$line" = "go" ]; then exit 3; fi
done
"#;
    let mut session = EngineSession::launch(&stub_engine(script), fast_session()).unwrap();
    session.send_position(&Position::opening()).unwrap();
    session.request_move().unwrap();

    let err = session.wait_for_bestmove(|_| {}).await.unwrap_err();
    assert!(matches!(err, Error::EngineExited { .. }));
    assert_eq!(session.state(), SessionState::Finished);

    let process = session.shutdown().unwrap();
    assert_eq!(process.exit_code, Some(3));
}

#[tokio::test]
async fn test_silent_engine_hits_the_deadline() {
    // Reads everything, answers nothing, exits on stdin EOF
    let script = "while read line; do :; done";
    let config = SessionConfig {
        poll_interval_ms: 20,
        wait_deadline_secs: 1,
    };

    let mut session = EngineSession::launch(&stub_engine(script), config).unwrap();
    session.request_move().unwrap();

    let err = session.wait_for_bestmove(|_| {}).await.unwrap_err();
    match err {
        Error::Timeout { waited, .. } => assert!(waited >= Duration::from_secs(1)),
        other => panic!("expected Timeout, got {:?}", other),
    }

    // Shutdown still reaps the stub: dropping stdin ends its read loop
    let process = session.shutdown().unwrap();
    assert!(process.is_terminated());
}

#[tokio::test]
async fn test_send_after_engine_exit_surfaces_broken_pipe() {
    let mut session = EngineSession::launch(&stub_engine("exit 0"), fast_session()).unwrap();

    // Give the stub time to exit so the pipe's read end is gone
    tokio::time::sleep(Duration::from_millis(300)).await;

    let mut result = Ok(());
    for _ in 0..5 {
        result = session.send("go");
        if result.is_err() {
            break;
        }
    }
    assert!(matches!(result, Err(Error::CommandSend { .. })));

    session.shutdown().unwrap();
}

#[tokio::test]
async fn test_missing_engine_binary_fails_to_launch() {
    let config = EngineConfig {
        command: PathBuf::from("/nonexistent/engine-binary"),
        args: vec!["aei".to_string()],
        working_directory: None,
    };

    let result = EngineSession::launch(&config, fast_session());
    assert!(matches!(result, Err(Error::SpawnFailed { .. })));
}

#[tokio::test]
async fn test_identical_setups_produce_identical_command_streams() {
    // Stub echoes every received command back, so the observer transcript
    // is a faithful record of what reached the engine's stdin
    let script = r#"
while read line; do
  echo "rx $line"
  if [ "$line" = "go" ]; then echo "bestmove m a2a3"; fi
  if [ "$line" = "quit" ]; then exit 0; fi
done
"#;

    let mut transcripts = Vec::new();
    for _ in 0..2 {
        let mut session =
            EngineSession::launch(&stub_engine(script), fast_session()).unwrap();
        session.send_position(&Position::opening()).unwrap();
        session.request_move().unwrap();

        let mut observed = Vec::new();
        session
            .wait_for_bestmove(|line| observed.push(line.text.clone()))
            .await
            .unwrap();
        session.shutdown().unwrap();

        transcripts.push(observed);
    }

    assert_eq!(transcripts[0], transcripts[1]);
    assert_eq!(transcripts[0][0], "rx position 1w");
    assert_eq!(transcripts[0][1], "rx setup");
    assert_eq!(transcripts[0][10], "rx end");
    assert_eq!(transcripts[0][11], "rx go");
}
