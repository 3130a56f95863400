pub fn render_index(session_id: &str) -> String {
    INDEX_HTML.replace("{{SESSION_ID}}", &escape(session_id))
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>MoodWise</title>
  <style>
    :root {
      --bg: #f4f1fb;
      --ink: #2b2740;
      --accent: #6c5ce7;
      --error: #d63031;
      --success: #00b894;
      --card: #ffffff;
      --shadow: 0 18px 40px rgba(43, 39, 64, 0.12);
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      padding: 24px 16px 48px;
    }

    main {
      width: min(900px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 20px;
    }

    section {
      background: var(--card);
      border-radius: 18px;
      box-shadow: var(--shadow);
      padding: 24px;
    }

    h1, h2 { margin: 0 0 12px; }

    form { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 12px; }

    label { display: grid; gap: 4px; font-size: 0.9rem; }

    input, select, button { font: inherit; padding: 8px 10px; border-radius: 10px; border: 1px solid #cfc9e6; }

    button { background: var(--accent); color: white; border: none; cursor: pointer; }

    button:disabled { opacity: 0.6; cursor: progress; }

    .icon { font-size: 48px; }

    table { width: 100%; border-collapse: collapse; }

    td, th { padding: 8px; border-bottom: 1px solid #eee; text-align: left; vertical-align: top; }

    .notification {
      position: fixed;
      right: 20px;
      bottom: 20px;
      padding: 12px 16px;
      border-radius: 10px;
      background: white;
      box-shadow: var(--shadow);
      border-left: 4px solid var(--accent);
    }

    .notification.error { border-color: var(--error); }
    .notification.success { border-color: var(--success); }
  </style>
</head>
<body>
  <main>
    <section>
      <h1>MoodWise</h1>
      <p>Session <strong>{{SESSION_ID}}</strong></p>
      <form id="tokenForm">
        <label>Access token <input name="access_token" autocomplete="off" /></label>
        <button type="submit">Login</button>
        <button type="button" id="logoutBtn">Logout</button>
      </form>
    </section>

    <section>
      <h2>Your profile</h2>
      <form id="profileForm">
        <label>First name <input name="firstName" /></label>
        <label>Last name <input name="lastName" /></label>
        <label>Age <input name="age" /></label>
        <label>Gender <input name="gender" /></label>
        <label>Stress level
          <select name="stressLevel">
            <option value=""></option><option>none</option><option>mild</option>
            <option>moderate</option><option>high</option><option>severe</option>
          </select>
        </label>
        <label>Sleep quality
          <select name="sleepQuality">
            <option value=""></option><option>excellent</option><option>good</option>
            <option>fair</option><option>poor</option><option>very-poor</option>
          </select>
        </label>
        <label>Mental health history
          <select name="mentalHealthHistory">
            <option value=""></option><option>none</option><option>therapy</option>
            <option>medication</option><option>both</option><option>other</option>
            <option>prefer-not-to-say</option>
          </select>
        </label>
        <label>Primary concern
          <select name="primaryConcern">
            <option value=""></option><option>anxiety</option><option>depression</option>
            <option>stress</option><option>sleep</option><option>relationships</option>
            <option>work</option><option>trauma</option><option>other</option>
            <option>prefer-not-to-say</option>
          </select>
        </label>
        <button type="submit">Save profile</button>
      </form>
    </section>

    <section>
      <h2>Analyze a photo</h2>
      <form id="uploadForm">
        <label>Photo <input type="file" name="file" accept="image/*" /></label>
        <button type="submit" id="analyzeBtn">Analyze Emotion</button>
      </form>
      <div id="result"></div>
    </section>

    <section>
      <h2>History</h2>
      <button type="button" id="saveBtn">Save current analysis</button>
      <button type="button" id="syncBtn">Load server history</button>
      <table>
        <thead><tr><th>When</th><th>Emotion</th><th>File</th><th>Advice</th><th></th></tr></thead>
        <tbody id="historyBody"></tbody>
      </table>
      <p id="historyEmpty">No analyses yet.</p>
    </section>
  </main>

  <script>
    const esc = (value) => String(value ?? '').replace(/[&<>"]/g, (c) => ({
      '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;'
    })[c]);

    function notify(note) {
      const el = document.createElement('div');
      el.className = `notification ${note.level}`;
      el.textContent = note.message;
      document.body.appendChild(el);
      setTimeout(() => el.remove(), 3000);
    }

    async function call(url, options = {}) {
      const res = await fetch(url, options);
      if (res.status === 204) return null;
      const body = await res.json();
      if (!res.ok) {
        notify(body);
        throw body;
      }
      return body;
    }

    function renderResult(view) {
      const target = document.getElementById('result');
      if (!view) {
        target.innerHTML = '';
        return;
      }
      const cards = view.recommendations
        .map((rec) => `<li><strong>${esc(rec.title)}</strong>: ${esc(rec.description)}</li>`)
        .join('');
      const p = view.profile;
      target.innerHTML = `
        <div class="icon">${esc(view.icon)}</div>
        <h3>${esc(view.analysis.emotion)}</h3>
        <p>${esc(view.headline)} (${esc(view.confidenceLabel)})</p>
        <p>Analysis ${esc(view.analysisId)} at ${esc(view.analysis.timestamp)}</p>
        <p>${esc(p.name)} · ${esc(p.age)} · ${esc(p.gender)}</p>
        <p>${esc(p.stressLevel)} · ${esc(p.sleepQuality)} · ${esc(p.primaryConcern)} · ${esc(p.mentalHealthHistory)}</p>
        <ul>${cards}</ul>`;
    }

    function renderHistory(rows) {
      document.getElementById('historyEmpty').style.display = rows.length ? 'none' : 'block';
      document.getElementById('historyBody').innerHTML = rows.map((row) => `
        <tr>
          <td>${esc(row.timestamp)}</td>
          <td>${esc(row.icon)} ${esc(row.emotion)}</td>
          <td>${esc(row.fileName)}</td>
          <td>${esc(row.recommendation)}</td>
          <td>
            <button data-view="${row.index}">View</button>
            <button data-delete="${row.index}">Delete</button>
          </td>
        </tr>`).join('');
    }

    async function refresh() {
      const snapshot = await call('/api/session');
      renderResult(snapshot.result);
      renderHistory(snapshot.history);
    }

    document.getElementById('tokenForm').addEventListener('submit', async (e) => {
      e.preventDefault();
      const token = new FormData(e.target).get('access_token');
      await call('/api/auth/token', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ access_token: token })
      });
      notify({ level: 'success', message: 'Logged in' });
    });

    document.getElementById('logoutBtn').addEventListener('click', async () => {
      await call('/api/auth/token', { method: 'DELETE' });
      notify({ level: 'info', message: 'Logged out' });
    });

    document.getElementById('profileForm').addEventListener('submit', async (e) => {
      e.preventDefault();
      const profile = Object.fromEntries(new FormData(e.target).entries());
      notify(await call('/api/profile', {
        method: 'PUT',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(profile)
      }));
      refresh();
    });

    document.getElementById('uploadForm').addEventListener('submit', async (e) => {
      e.preventDefault();
      const button = document.getElementById('analyzeBtn');
      button.disabled = true;
      button.textContent = 'Analyzing...';
      try {
        const body = await call('/api/analyze', { method: 'POST', body: new FormData(e.target) });
        renderResult(body.result);
        renderHistory(body.history);
      } catch (err) {
        if (err && err.kind === 'unauthenticated') {
          document.querySelector('#tokenForm input').focus();
        }
      } finally {
        button.disabled = false;
        button.textContent = 'Analyze Emotion';
      }
    });

    document.getElementById('saveBtn').addEventListener('click', async () => {
      const body = await call('/api/history', { method: 'POST' });
      notify(body.notification);
      renderHistory(body.history);
    });

    document.getElementById('syncBtn').addEventListener('click', async () => {
      const body = await call('/api/history/sync', { method: 'POST' });
      notify(body.notification);
      renderHistory(body.history);
    });

    document.getElementById('historyBody').addEventListener('click', async (e) => {
      const view = e.target.dataset.view;
      const del = e.target.dataset.delete;
      if (view !== undefined) {
        renderResult(await call(`/api/history/${view}`));
      } else if (del !== undefined) {
        const confirmed = confirm('Are you sure you want to delete this history entry?');
        const body = await call(`/api/history/${del}?confirm=${confirmed}`, { method: 'DELETE' });
        notify(body.notification);
        renderHistory(body.history);
      }
    });

    refresh();
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_embeds_escaped_session_id() {
        let html = render_index("MW-2026-<1>");
        assert!(html.contains("MW-2026-&lt;1&gt;"));
        assert!(!html.contains("{{SESSION_ID}}"));
    }
}
