//! Hosts file content rewriting.
//!
//! Pure text transforms; file access lives behind [`crate::platform::HostsEditor`].

/// Format one redirect entry.
pub fn redirect_line(redirect_ip: &str, site: &str) -> String {
    format!("{redirect_ip} {site}")
}

/// True if `line` mentions any blocked site.
///
/// Substring match against the whole line, so blocking `a.com` also drops a
/// line for `ba.com`.
pub fn mentions_blocked(line: &str, blocked: &[String]) -> bool {
    blocked.iter().any(|site| line.contains(site.as_str()))
}

/// Rewrite hosts content: drop every line mentioning a blocked site, then
/// optionally append one redirect entry per site in list order.
///
/// Surviving lines keep their original bytes, line endings included.
pub fn rewrite(
    content: &str,
    blocked: &[String],
    redirect_ip: &str,
    include_redirects: bool,
) -> String {
    let mut out = String::with_capacity(content.len());
    for line in content.split_inclusive('\n') {
        if !mentions_blocked(line, blocked) {
            out.push_str(line);
        }
    }
    if include_redirects && !blocked.is_empty() {
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        for site in blocked {
            out.push_str(&redirect_line(redirect_ip, site));
            out.push('\n');
        }
    }
    out
}

/// True if `content` has an exact `<redirect_ip> <site>` entry (whitespace-separated).
pub fn has_redirect(content: &str, redirect_ip: &str, site: &str) -> bool {
    content.lines().any(|line| {
        let line = line.split('#').next().unwrap_or("");
        let mut fields = line.split_whitespace();
        fields.next() == Some(redirect_ip) && fields.any(|f| f == site)
    })
}
