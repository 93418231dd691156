use ag_core::{ArticleLength, ArticleTone};
use ag_format::{screen_stylesheet, COPY_ACK_DURATION};

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Smart Article Writer</title>
<style>
body { font-family: system-ui, sans-serif; background: #0f172a; color: #e2e8f0; margin: 0; padding: 2rem; }
main { max-width: 42rem; margin: 0 auto; background: #1e293b; border-radius: 0.5rem; padding: 2rem; }
label { display: block; color: #d8b4fe; font-size: 0.875rem; margin: 1rem 0 0.25rem; }
input, select { width: 100%; padding: 0.6rem; background: #334155; color: #f1f5f9; border: 1px solid #475569; border-radius: 0.375rem; }
button { margin-top: 1.5rem; padding: 0.75rem 1rem; border: 0; border-radius: 0.375rem; background: #9333ea; color: white; cursor: pointer; }
button:disabled { opacity: 0.5; cursor: not-allowed; }
#error { display: none; margin-top: 1.5rem; padding: 1rem; border-radius: 0.375rem; background: #7f1d1d; }
#result { display: none; margin-top: 2rem; padding: 1.5rem; background: #334155; border-radius: 0.5rem; }
#result header { display: flex; justify-content: space-between; align-items: center; }
#copy.copied { background: #22c55e; }
{{SCREEN_STYLES}}
</style>
</head>
<body>
<main>
<h1>Smart Article Writer</h1>
<form id="form">
  <label for="topic">Article topic</label>
  <input id="topic" name="topic" required placeholder="e.g. The impact of AI on the future of work">
  <label for="keyword">Primary keyword (optional)</label>
  <input id="keyword" name="keyword" placeholder="e.g. Python programming">
  <label for="tone">Tone</label>
  <select id="tone" name="tone">{{TONE_OPTIONS}}</select>
  <label for="length">Length (approximate)</label>
  <select id="length" name="length">{{LENGTH_OPTIONS}}</select>
  <button id="submit" type="submit">Generate article</button>
</form>
<p id="loading" hidden>Generating the article, please wait...</p>
<div id="error" role="alert"></div>
<section id="result">
  <header><h2>Generated article</h2><button id="copy" type="button">Copy article</button></header>
  <div id="article"></div>
</section>
</main>
<script>
const ACK_MS = {{ACK_MS}};
const form = document.getElementById("form");
const submit = document.getElementById("submit");
const errorBox = document.getElementById("error");
const result = document.getElementById("result");
const copyButton = document.getElementById("copy");
let payload = null;

function showError(message) {
  errorBox.textContent = message;
  errorBox.style.display = "block";
}

form.addEventListener("submit", async (event) => {
  event.preventDefault();
  const topic = form.topic.value.trim();
  if (!topic) { alert("Please enter the article topic."); return; }
  submit.disabled = true;
  document.getElementById("loading").hidden = false;
  errorBox.style.display = "none";
  result.style.display = "none";
  try {
    const response = await fetch("/api/articles", {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify({ topic, keyword: form.keyword.value.trim(), tone: form.tone.value, length: form.length.value }),
    });
    const body = await response.json();
    if (!response.ok) { showError("Error generating article: " + body.error); return; }
    payload = body.clipboard;
    document.getElementById("article").innerHTML = body.screen_html;
    result.style.display = "block";
  } catch (err) {
    showError("An unknown error occurred while generating the article.");
  } finally {
    submit.disabled = false;
    document.getElementById("loading").hidden = true;
  }
});

function acknowledge() {
  copyButton.textContent = "Copied!";
  copyButton.classList.add("copied");
  copyButton.disabled = true;
  setTimeout(() => {
    copyButton.textContent = "Copy article";
    copyButton.classList.remove("copied");
    copyButton.disabled = false;
  }, ACK_MS);
}

copyButton.addEventListener("click", async () => {
  if (!payload) return;
  try {
    const item = new ClipboardItem({
      "text/plain": new Blob([payload.plain_text], { type: "text/plain" }),
      "text/html": new Blob([payload.html], { type: "text/html" }),
    });
    await navigator.clipboard.write([item]);
    acknowledge();
  } catch (err) {
    try {
      await navigator.clipboard.writeText(payload.plain_text);
      acknowledge();
      alert("Article copied as plain text only. Rich text copy is not supported here.");
    } catch (fallbackErr) {
      alert("Failed to copy the article to the clipboard.");
    }
  }
});
</script>
</body>
</html>
"#;

fn options<T: Copy>(values: &[T], value: impl Fn(T) -> String, label: impl Fn(T) -> String) -> String {
    values
        .iter()
        .map(|&v| format!("<option value=\"{}\">{}</option>", value(v), label(v)))
        .collect()
}

/// The single page form, with heading styles shared with the clipboard markup.
pub fn index_page() -> String {
    let tones = options(&ArticleTone::ALL, |t| t.label().to_lowercase(), |t| t.to_string());
    let lengths = options(&ArticleLength::ALL, |l| l.label().to_lowercase(), |l| l.to_string());

    TEMPLATE
        .replace("{{SCREEN_STYLES}}", &screen_stylesheet())
        .replace("{{TONE_OPTIONS}}", &tones)
        .replace("{{LENGTH_OPTIONS}}", &lengths)
        .replace("{{ACK_MS}}", &COPY_ACK_DURATION.as_millis().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_page_is_filled_in() {
        let page = index_page();
        assert!(!page.contains("{{"));
        assert!(page.contains("<option value=\"informative\">Informative</option>"));
        assert!(page.contains("<option value=\"long\">Long (~1000 words)</option>"));
        assert!(page.contains("const ACK_MS = 2500;"));
        assert!(page.contains(".heading.tier-1"));
    }
}
