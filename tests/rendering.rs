//! Wire-level rendering through the public API.

use std::io::Cursor;
use std::time::{Duration, Instant};

use mock_response::{MockResponse, ResponseError, ScriptedResponse, StreamResponse};

#[test]
fn throttle_takes_at_least_length_over_rate() {
    // 5 increments at 7260 B/s: 200ms per increment
    let length = 1452 * 5;
    let rate = 7_260;
    let mut response = MockResponse::new();
    response.set_body(vec![b'.'; length]).set_bytes_per_second(rate);

    let start = Instant::now();
    let mut out = Vec::new();
    response.render(&mut out).unwrap();
    let elapsed = start.elapsed();

    let expected = Duration::from_millis((length as u64 * 1000) / u64::from(rate));
    assert!(elapsed >= expected, "rendered in {:?}, expected at least {:?}", elapsed, expected);
    assert!(out.ends_with(&vec![b'.'; length]));
}

#[test]
fn unlimited_render_does_not_pause() {
    let mut response = MockResponse::new();
    response.set_body(vec![0u8; 1452 * 1000]);

    let start = Instant::now();
    response.render(&mut std::io::sink()).unwrap();

    assert!(start.elapsed() < Duration::from_secs(5));
}

#[test]
fn stream_second_render_always_fails() {
    let mut response = StreamResponse::new();
    response.set_body(Cursor::new(b"one shot".to_vec()), 8);

    let mut out = Vec::new();
    response.render(&mut out).unwrap();
    assert_eq!(out, b"HTTP/1.1 200 OK\r\nContent-Length: 8\r\n\r\none shot".to_vec());

    for _ in 0..3 {
        let err = response.render(&mut out).unwrap_err();
        assert!(matches!(err, ResponseError::StreamConsumed));
        assert_eq!(err.to_string(), "Stream already consumed");
    }
}

#[test]
fn declared_length_is_not_checked_against_stream() {
    let mut response = StreamResponse::new();
    response.set_body(&b"short"[..], 100);

    let mut out = Vec::new();
    response.render(&mut out).unwrap();

    assert_eq!(out, b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\nshort".to_vec());
}

#[test]
fn mixed_variants_share_one_contract() {
    let mut chunked = MockResponse::new();
    chunked.set_chunked_body_text("HELLOWORLD", 5);

    let mut responses: Vec<Box<dyn ScriptedResponse>> = vec![Box::new(chunked), Box::new(StreamResponse::new())];
    let mut rendered = Vec::new();
    for response in responses.iter_mut() {
        let mut out = Vec::new();
        response.render(&mut out).unwrap();
        rendered.push(String::from_utf8(out).unwrap());
    }

    assert_eq!(
        rendered,
        vec![
            "HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\n\r\n5\r\nHELLO\r\n5\r\nWORLD\r\n0\r\n\r\n".to_string(),
            "HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n".to_string(),
        ]
    );
}
