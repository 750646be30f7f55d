use std::future::Future;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread;

use reqwest::Url;

use super::*;
use crate::domain::{ForecastPoint, build_request};
use crate::error::{AppError, AppResult, RequestError, RequestErrorKind};

fn run_async_test<F>(future: F) -> AppResult<()>
where
    F: Future<Output = AppResult<()>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(future)
}

struct CapturedRequest {
    head: String,
    body: String,
}

/// Serves a single canned response and reports what the client sent.
fn spawn_one_shot_server(
    status_line: &'static str,
    body: &'static str,
) -> AppResult<(Url, mpsc::Receiver<CapturedRequest>)> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        if let Ok((stream, _)) = listener.accept() {
            serve(stream, status_line, body, &tx);
        }
    });
    let url = Url::parse(&format!("http://{}/predict", addr))
        .map_err(|err| AppError::validation(format!("bad test url: {}", err)))?;
    Ok((url, rx))
}

fn serve(
    mut stream: TcpStream,
    status_line: &str,
    body: &str,
    tx: &mpsc::Sender<CapturedRequest>,
) {
    let mut raw = Vec::new();
    let mut buffer = [0u8; 1024];
    let mut expected_total: Option<usize> = None;
    loop {
        let Ok(read) = stream.read(&mut buffer) else {
            return;
        };
        if read == 0 {
            break;
        }
        raw.extend_from_slice(buffer.get(..read).unwrap_or_default());
        if expected_total.is_none() {
            expected_total = header_end(&raw).map(|end| end.saturating_add(content_length(&raw)));
        }
        if let Some(total) = expected_total
            && raw.len() >= total
        {
            break;
        }
    }
    let text = String::from_utf8_lossy(&raw).into_owned();
    let (head, request_body) = text
        .split_once("\r\n\r\n")
        .map(|(head, body)| (head.to_owned(), body.to_owned()))
        .unwrap_or((text.clone(), String::new()));
    drop(tx.send(CapturedRequest {
        head,
        body: request_body,
    }));

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );
    drop(stream.write_all(response.as_bytes()));
    drop(stream.flush());
}

fn header_end(raw: &[u8]) -> Option<usize> {
    raw.windows(4)
        .position(|window| window == b"\r\n\r\n")
        .map(|pos| pos.saturating_add(4))
}

fn content_length(raw: &[u8]) -> usize {
    let text = String::from_utf8_lossy(raw);
    text.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}

#[test]
fn parse_body_reads_forecast_in_order() -> AppResult<()> {
    let body = br#"{"forecast":[{"month":3,"consumption":9.5},{"month":1,"consumption":2}]}"#;
    let points = parse_forecast_body(body)?;
    let expected = vec![
        ForecastPoint {
            month: 3,
            consumption: 9.5,
        },
        ForecastPoint {
            month: 1,
            consumption: 2.0,
        },
    ];
    if points != expected {
        return Err(AppError::validation(format!(
            "Unexpected points: {:?}",
            points
        )));
    }
    Ok(())
}

#[test]
fn parse_body_missing_forecast_is_empty() -> AppResult<()> {
    let points = parse_forecast_body(b"{}")?;
    if !points.is_empty() {
        return Err(AppError::validation("Expected empty forecast"));
    }
    let points = parse_forecast_body(br#"{"forecast":null,"model":"ridge"}"#)?;
    if !points.is_empty() {
        return Err(AppError::validation("Expected null forecast to be empty"));
    }
    Ok(())
}

#[test]
fn parse_body_rejects_malformed_shapes() -> AppResult<()> {
    let cases: [&[u8]; 6] = [
        b"not json",
        b"[]",
        b"null",
        br#"{"forecast":[{"month":1}]}"#,
        br#"{"forecast":[{"month":1,"consumption":"high"}]}"#,
        br#"{"forecast":{"month":1,"consumption":2.0}}"#,
    ];
    for body in cases {
        match parse_forecast_body(body) {
            Err(err) if err.kind() == RequestErrorKind::MalformedResponse => {}
            other => {
                return Err(AppError::validation(format!(
                    "Expected malformed error for {}, got {:?}",
                    String::from_utf8_lossy(body),
                    other
                )));
            }
        }
    }
    Ok(())
}

#[test]
fn render_json_uses_forecast_envelope() -> AppResult<()> {
    let json = render_forecast_json(&[ForecastPoint {
        month: 2,
        consumption: 1.25,
    }])?;
    let value: serde_json::Value = serde_json::from_str(&json)?;
    if value["forecast"][0]["month"] != 2 || value["forecast"][0]["consumption"] != 1.25 {
        return Err(AppError::validation(format!("Unexpected json: {}", json)));
    }
    Ok(())
}

#[test]
fn client_posts_months_as_json() -> AppResult<()> {
    run_async_test(async {
        let (url, rx) = spawn_one_shot_server(
            "200 OK",
            r#"{"forecast":[{"month":1,"consumption":120.5},{"month":2,"consumption":130.0}]}"#,
        )?;
        let client = HttpPredictionClient::new(url)?;
        let points = client.predict(&build_request(1, 2)).await?;
        if points.len() != 2 {
            return Err(AppError::validation("Expected two points"));
        }

        let captured = rx
            .recv()
            .map_err(|err| AppError::validation(format!("server did not report: {}", err)))?;
        if !captured.head.starts_with("POST /predict") {
            return Err(AppError::validation(format!(
                "Unexpected request line: {}",
                captured.head
            )));
        }
        if !captured
            .head
            .to_ascii_lowercase()
            .contains("content-type: application/json")
        {
            return Err(AppError::validation("Missing JSON content type"));
        }
        let sent: serde_json::Value = serde_json::from_str(&captured.body)?;
        if sent != serde_json::json!({ "months": [1, 2] }) {
            return Err(AppError::validation(format!(
                "Unexpected body: {}",
                captured.body
            )));
        }
        Ok(())
    })
}

#[test]
fn client_maps_error_status_to_transport_error() -> AppResult<()> {
    run_async_test(async {
        let (url, _rx) =
            spawn_one_shot_server("500 Internal Server Error", r#"{"detail":"boom"}"#)?;
        let client = HttpPredictionClient::new(url)?;
        match client.predict(&build_request(1, 1)).await {
            Err(RequestError::Status { status: 500 }) => Ok(()),
            other => Err(AppError::validation(format!(
                "Expected status error, got {:?}",
                other
            ))),
        }
    })
}

#[test]
fn client_maps_unparseable_body_to_malformed() -> AppResult<()> {
    run_async_test(async {
        let (url, _rx) = spawn_one_shot_server("200 OK", "<html>oops</html>")?;
        let client = HttpPredictionClient::new(url)?;
        match client.predict(&build_request(1, 1)).await {
            Err(err) if err.kind() == RequestErrorKind::MalformedResponse => Ok(()),
            other => Err(AppError::validation(format!(
                "Expected malformed error, got {:?}",
                other
            ))),
        }
    })
}

#[test]
fn client_reports_connection_failure_as_transport() -> AppResult<()> {
    run_async_test(async {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let addr = listener.local_addr()?;
        drop(listener);
        let url = Url::parse(&format!("http://{}/predict", addr))
            .map_err(|err| AppError::validation(format!("bad test url: {}", err)))?;
        let client = HttpPredictionClient::new(url)?;
        match client.predict(&build_request(1, 1)).await {
            Err(err) if err.kind() == RequestErrorKind::Transport => Ok(()),
            other => Err(AppError::validation(format!(
                "Expected transport error, got {:?}",
                other
            ))),
        }
    })
}
