use std::collections::HashMap;

/// Header key under which the connection directive is stored.
///
/// Header names keep the trailing colon exactly as they were split from the
/// wire, so lookups use `"Connection:"` rather than `"Connection"`.
pub const CONNECTION_HEADER: &str = "Connection:";

/// The three tokens of the request line.
///
/// Method and version are carried verbatim; nothing checks them against a
/// known set. An unrecognized method is answered with the 404 line, not
/// rejected at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// The method token (e.g. "GET")
    pub method: String,
    /// The request target, treated as an opaque token (e.g. "/index.html")
    pub url: String,
    /// The version token (e.g. "HTTP/1.1")
    pub version: String,
}

/// A parsed HTTP request.
///
/// Created fresh for each request cycle and discarded once the response has
/// been generated. After parsing, `headers` is guaranteed to contain a
/// [`CONNECTION_HEADER`] entry (default-filled from the version when the
/// request omitted it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpMessage {
    /// The parsed request line
    pub request: RequestLine,
    /// Header name token (with trailing colon) to value token, last-write-wins
    pub headers: HashMap<String, String>,
    /// At most one body line; further lines are dropped by design
    pub body: Option<String>,
}

impl HttpMessage {
    /// Retrieves a header value by its literal name token (colon included).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|v| v.as_str())
    }

    /// The effective connection directive for this request.
    ///
    /// The parser always default-fills the header, so the fallback only
    /// applies to hand-built messages.
    pub fn connection(&self) -> &str {
        self.header(CONNECTION_HEADER).unwrap_or("keep-alive")
    }

    /// Whether the socket should stay open after this request is answered.
    ///
    /// Only the literal value `"close"` tears the connection down; any other
    /// directive keeps it alive.
    pub fn keep_alive(&self) -> bool {
        self.connection() != "close"
    }
}

/// The connection directive a request gets when it does not carry one.
///
/// Exactly `HTTP/1.0` defaults to close; every other version token,
/// malformed ones included, defaults to keep-alive.
pub fn default_connection(version: &str) -> &'static str {
    if version == "HTTP/1.0" { "close" } else { "keep-alive" }
}
