use std::net::SocketAddr;

use crate::http::message::HttpMessage;

/// Builds the full response text for a parsed request.
///
/// Every recognized method is answered `200 OK` with an HTML page whose one
/// content line echoes the request target and the peer address
/// (`"<url> <ip>:<port>"`). A `POST` additionally appends CRLF and the
/// request body to that line. `HEAD` gets the status and header block only,
/// with `Content-Length` still describing the content that `GET` would have
/// carried.
///
/// Any other method is answered with the single space-joined line
/// `"<version> 404 NOT FOUND"`. The asymmetry with the CRLF-joined success
/// branches is intentional and part of the wire contract.
///
/// No trailing CRLF follows the content; the caller sends exactly these
/// bytes.
pub fn generate(msg: &HttpMessage, peer: SocketAddr) -> String {
    let status = format!("{} 200 OK", msg.request.version);

    let mut line = format!("{} {}", msg.request.url, peer);
    if msg.request.method == "POST" {
        line.push_str("\r\n");
        line.push_str(msg.body.as_deref().unwrap_or(""));
    }
    let content = format!("<!DOCTYPE HTML>\n<html>\n<body>\n{line}\n</body>\n</html>");

    let headers = format!(
        "Connection: {}\r\nContent-Length: {}",
        msg.connection(),
        content.len()
    );

    match msg.request.method.as_str() {
        "GET" | "POST" => [status, headers, String::new(), content].join("\r\n"),
        "HEAD" => [status, headers, String::new()].join("\r\n"),
        _ => [msg.request.version.as_str(), "404", "NOT FOUND"].join(" "),
    }
}
