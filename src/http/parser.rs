use std::collections::HashMap;

use crate::http::message::{CONNECTION_HEADER, HttpMessage, RequestLine, default_connection};

/// Ways a raw buffer can fail to be a request.
///
/// All of these close the connection without a response; none of them are
/// allowed to put partial bytes on the wire.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The buffer was empty
    Empty,
    /// The request line did not yield three tokens
    RequestLine,
    /// A header line had no space separating name from value
    HeaderLine,
    /// The header block was never terminated by a blank line
    MissingTerminator,
}

/// Parses one raw text request into an [`HttpMessage`].
///
/// The buffer is split on CRLF; line 0 must carry `METHOD URL VERSION`,
/// header lines are split on the first space (the name token keeps its
/// trailing colon), and the line after the blank terminator, if non-empty,
/// becomes the body. Duplicate header names are last-write-wins.
///
/// If the request carries no connection directive, one is synthesized from
/// the version before the message is returned (see
/// [`default_connection`]).
pub fn parse_request(raw: &str) -> Result<HttpMessage, ParseError> {
    if raw.is_empty() {
        return Err(ParseError::Empty);
    }

    let lines: Vec<&str> = raw.split("\r\n").collect();

    // Request line
    let mut tokens = lines[0].splitn(3, ' ');
    let method = tokens.next().ok_or(ParseError::RequestLine)?;
    let url = tokens.next().ok_or(ParseError::RequestLine)?;
    let version = tokens.next().ok_or(ParseError::RequestLine)?;

    let request = RequestLine {
        method: method.to_string(),
        url: url.to_string(),
        version: version.to_string(),
    };

    // Header block: any line of length <= 1 terminates it
    let mut headers = HashMap::new();
    let mut idx = 1;
    while idx < lines.len() && lines[idx].len() > 1 {
        let (name, value) = lines[idx].split_once(' ').ok_or(ParseError::HeaderLine)?;
        headers.insert(name.to_string(), value.to_string());
        idx += 1;
    }

    if idx == lines.len() {
        return Err(ParseError::MissingTerminator);
    }

    // Body: first non-empty line past the terminator. Only one line is
    // captured; anything after it is dropped.
    let body = lines[idx + 1..]
        .iter()
        .find(|line| !line.is_empty())
        .map(|line| (*line).to_string());

    headers
        .entry(CONNECTION_HEADER.to_string())
        .or_insert_with(|| default_connection(&request.version).to_string());

    Ok(HttpMessage { request, headers, body })
}
