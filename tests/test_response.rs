use std::net::SocketAddr;

use reflector::http::parser::parse_request;
use reflector::http::response::generate;

fn peer() -> SocketAddr {
    "203.0.113.5:4444".parse().unwrap()
}

/// Content block of a CRLF-joined success response.
fn content_of(response: &str) -> &str {
    response
        .split_once("\r\n\r\n")
        .map(|(_, content)| content)
        .unwrap_or("")
}

/// Value of the Content-Length line in the header block.
fn content_length_of(response: &str) -> usize {
    response
        .lines()
        .find_map(|line| line.strip_prefix("Content-Length: "))
        .and_then(|v| v.trim_end().parse().ok())
        .unwrap()
}

#[test]
fn test_get_echoes_url_and_peer_address() {
    let msg = parse_request("GET /index.html HTTP/1.1\r\n\r\n").unwrap();
    let response = generate(&msg, peer());

    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(response.contains("/index.html 203.0.113.5:4444"));
    assert!(response.contains("Connection: keep-alive\r\n"));
}

#[test]
fn test_get_exact_response_shape() {
    let msg = parse_request("GET /index.html HTTP/1.1\r\n\r\n").unwrap();
    let response = generate(&msg, peer());

    let content =
        "<!DOCTYPE HTML>\n<html>\n<body>\n/index.html 203.0.113.5:4444\n</body>\n</html>";
    let expected = format!(
        "HTTP/1.1 200 OK\r\nConnection: keep-alive\r\nContent-Length: {}\r\n\r\n{}",
        content.len(),
        content
    );

    assert_eq!(response, expected);
}

#[test]
fn test_content_length_matches_content_bytes() {
    let msg = parse_request("GET /some/longer/path HTTP/1.1\r\n\r\n").unwrap();
    let response = generate(&msg, peer());

    assert_eq!(content_length_of(&response), content_of(&response).len());
}

#[test]
fn test_no_trailing_crlf_after_content() {
    let msg = parse_request("GET / HTTP/1.1\r\n\r\n").unwrap();
    let response = generate(&msg, peer());

    assert!(response.ends_with("</html>"));
}

#[test]
fn test_http10_response_carries_close() {
    let msg = parse_request("GET /x HTTP/1.0\r\n\r\n").unwrap();
    let response = generate(&msg, peer());

    assert!(response.starts_with("HTTP/1.0 200 OK\r\n"));
    assert!(response.contains("Connection: close\r\n"));
    assert!(!msg.keep_alive());
}

#[test]
fn test_explicit_close_echoed_back() {
    let msg = parse_request("GET / HTTP/1.1\r\nConnection: close\r\n\r\n").unwrap();
    let response = generate(&msg, peer());

    assert!(response.contains("Connection: close\r\n"));
}

#[test]
fn test_head_has_no_content_but_measured_content_length() {
    let head = parse_request("HEAD /y HTTP/1.1\r\n\r\n").unwrap();
    let get = parse_request("GET /y HTTP/1.1\r\n\r\n").unwrap();

    let head_response = generate(&head, peer());
    let get_response = generate(&get, peer());

    // Status line, header block, blank line, nothing else
    assert!(head_response.ends_with("\r\n"));
    assert_eq!(content_of(&head_response), "");

    // Content-Length still reflects what GET would have sent
    assert_eq!(
        content_length_of(&head_response),
        content_of(&get_response).len()
    );
}

#[test]
fn test_post_appends_body_to_echo_line() {
    let msg = parse_request("POST /submit HTTP/1.1\r\n\r\n\r\nhello=world").unwrap();
    let response = generate(&msg, peer());

    let content = content_of(&response);
    assert!(content.contains("/submit 203.0.113.5:4444\r\nhello=world"));
    assert_eq!(content_length_of(&response), content.len());
}

#[test]
fn test_post_without_body_echoes_empty_line() {
    let msg = parse_request("POST /submit HTTP/1.1\r\nHost: a\r\n\r\n").unwrap();
    let response = generate(&msg, peer());

    let content = content_of(&response);
    assert!(content.contains("/submit 203.0.113.5:4444\r\n\n</body>"));
}

#[test]
fn test_non_post_ignores_body() {
    let msg = parse_request("GET /a HTTP/1.1\r\n\r\nignored=yes").unwrap();
    let response = generate(&msg, peer());

    assert!(!response.contains("ignored=yes"));
}

#[test]
fn test_unknown_method_gets_space_joined_404_line() {
    let msg = parse_request("PATCH /z HTTP/1.1\r\n\r\n").unwrap();
    let response = generate(&msg, peer());

    // Deliberately space-joined, no CRLF anywhere
    assert_eq!(response, "HTTP/1.1 404 NOT FOUND");
}

#[test]
fn test_unknown_method_404_uses_request_version() {
    let msg = parse_request("DELETE /z HTTP/1.0\r\n\r\n").unwrap();
    let response = generate(&msg, peer());

    assert_eq!(response, "HTTP/1.0 404 NOT FOUND");
}

#[test]
fn test_generation_does_not_mutate_message() {
    let msg = parse_request("GET /same HTTP/1.1\r\n\r\n").unwrap();

    let first = generate(&msg, peer());
    let second = generate(&msg, peer());

    assert_eq!(first, second);
}
