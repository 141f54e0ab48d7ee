//! The `/ui` page: a form that posts to `/test` and renders the outcome inline.

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>LLM Test Service</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 40px; }
        .container { max-width: 800px; margin: 0 auto; }
        .form-group { margin-bottom: 15px; }
        label { display: block; margin-bottom: 5px; font-weight: bold; }
        input, select, textarea { width: 100%; padding: 8px; border: 1px solid #ddd; border-radius: 4px; }
        textarea { height: 100px; }
        button { background-color: #007bff; color: white; padding: 10px 20px; border: none; border-radius: 4px; cursor: pointer; }
        button:hover { background-color: #0056b3; }
        .result { margin-top: 20px; padding: 15px; background-color: #f8f9fa; border-radius: 4px; }
        .error { background-color: #f8d7da; color: #721c24; }
        .success { background-color: #d4edda; color: #155724; }
    </style>
</head>
<body>
    <div class="container">
        <h1>LLM Test Service</h1>
        <p>Form for exercising the LLM microservice</p>

        <form id="testForm">
            <div class="form-group">
                <label for="artifacts">Artifacts (one per line):</label>
                <textarea id="artifacts" placeholder="Requirements document&#10;Conceptual model&#10;Source code"></textarea>
            </div>

            <div class="form-group">
                <label for="platform">Platform:</label>
                <select id="platform">
"#;

const PAGE_MIDDLE: &str = r#"
                </select>
            </div>

            <div class="form-group">
                <label for="model">Model:</label>
                <select id="model">
"#;

const PAGE_TAIL: &str = r#"
                </select>
            </div>

            <div class="form-group">
                <label for="prompt">Prompt:</label>
                <textarea id="prompt" placeholder="Type your natural language prompt here..."></textarea>
            </div>

            <button type="submit">Test LLM</button>
        </form>

        <div id="result"></div>
    </div>

    <script>
        function escapeHtml(value) {
            const div = document.createElement('div');
            div.textContent = String(value);
            return div.innerHTML;
        }

        document.getElementById('testForm').addEventListener('submit', async function(e) {
            e.preventDefault();

            const artifacts = document.getElementById('artifacts').value.split('\n').filter(a => a.trim());
            const platform = document.getElementById('platform').value;
            const model = document.getElementById('model').value;
            const prompt = document.getElementById('prompt').value;

            const resultDiv = document.getElementById('result');
            resultDiv.className = 'result';
            resultDiv.innerHTML = '<p>Processing...</p>';

            try {
                const response = await fetch('/test', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({ artifacts, platform, model, prompt })
                });

                const data = await response.json();

                if (response.ok) {
                    resultDiv.className = 'result success';
                    resultDiv.innerHTML = `
                        <h3>Test Result</h3>
                        <p><strong>Test ID:</strong> ${escapeHtml(data.test_id)}</p>
                        <p><strong>Status:</strong> ${escapeHtml(data.status)}</p>
                        <p><strong>Duration:</strong> ${data.test_duration_ms.toFixed(2)}ms</p>
                        <h4>LLM Response:</h4>
                        <pre>${escapeHtml(data.llm_response.response_text)}</pre>
                        <h4>Metadata:</h4>
                        <pre>${escapeHtml(JSON.stringify(data.llm_response.metadata, null, 2))}</pre>
                    `;
                } else {
                    resultDiv.className = 'result error';
                    resultDiv.innerHTML = `<h3>Error</h3><p>${escapeHtml(data.detail)}</p>`;
                }
            } catch (error) {
                resultDiv.className = 'result error';
                resultDiv.innerHTML = `<h3>Error</h3><p>Communication error: ${escapeHtml(error.message)}</p>`;
            }
        });
    </script>
</body>
</html>
"#;

/// The option lists are spliced between fixed page fragments, so upstream
/// values are never scanned for placeholders.
pub fn render(platforms: &[String], models: &[String]) -> String {
    [
        PAGE_HEAD,
        options(platforms).as_str(),
        PAGE_MIDDLE,
        options(models).as_str(),
        PAGE_TAIL,
    ]
    .concat()
}

fn options(values: &[String]) -> String {
    values
        .iter()
        .map(|value| {
            let value = escape(value);
            format!("                    <option value=\"{value}\">{value}</option>")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
