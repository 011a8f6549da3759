//! Standalone HTML document wrapper.

const DEFAULT_STYLE: &str = "\
body {
  margin: 0 auto;
  max-width: 650px;
  line-height: 1.6;
  font-size: 18px;
  color: #444;
  padding: 50px;
}
h1, h2, h3 {
  line-height: 1.2;
}
body > pre {
  background-color: #f8f8f8;
  padding: 18px;
  font-size: 85%;
  border-radius: 5px;
}
p > code {
  padding: 3px 5px;
  border-radius: 5px;
  background-color: #f4f4f4;
  font-size: 85%;
}
blockquote {
  margin: 0;
  border-left: 4px solid #dfe2e5;
  padding: 0 1rem;
}
blockquote > p {
  margin: 0;
  color: #888;
}";

const HEAD: &str = "<!DOCTYPE html>
<html>
<head>
  <meta charset=\"UTF-8\">
  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
  <title>Markdown preview</title>
  <style>
";

const BODY_OPEN: &str = "
  </style>
</head>
<body>
";

const TAIL: &str = "
</body>
</html>";

/// Wrap a rendered body fragment in a full HTML5 document.
///
/// The fragment is trimmed; the document carries no trailing newline.
pub fn wrap_document(body: &str) -> String {
    let body = body.trim();
    let mut out =
        String::with_capacity(HEAD.len() + DEFAULT_STYLE.len() + BODY_OPEN.len() + body.len() + TAIL.len());
    out.push_str(HEAD);
    out.push_str(DEFAULT_STYLE);
    out.push_str(BODY_OPEN);
    out.push_str(body);
    out.push_str(TAIL);
    out
}
