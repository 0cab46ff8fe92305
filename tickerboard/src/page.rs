//! The single HTML page served at `/` and `/my_dash_app`.
//!
//! The page holds the selection widget and two empty outputs. Every
//! selection change calls the figure and profile update routes and redraws
//! both outputs; chart drawing is left to Plotly.js.

use std::fmt::Write as _;

use crate::catalog::SymbolCatalog;
use crate::server::{FIGURE_ROUTE, PROFILES_ROUTE};

/// Plotly.js bundle loaded by the page.
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const STYLE: &str = r"
body { background: #000; color: #fff; font-family: Arial, Helvetica, sans-serif; margin: 0 2rem; }
.dropdown { width: 100%; min-height: 10rem; margin: 1rem 0; background: #111; color: #ff0; border: 2px solid #fff; font-size: 1rem; }
.dropdown option:checked { background: #ff0; color: #000; }
.graph { width: 100%; height: 480px; background: #fff; }
.stock-info { display: flex; flex-wrap: wrap; gap: 1rem; margin: 1rem 0; }
.card { flex: 1 1 22rem; border: 2px solid #fff; padding: 0 1rem 1rem; }
.card h3 { color: #ff0; }
.error { color: #f66; font-weight: bold; }
";

const SCRIPT: &str = r"
const select = document.getElementById('dropdown');
const info = document.getElementById('stock-info');
const graph = document.getElementById('graph');
const graphError = document.getElementById('graph-error');
let order = [];

Plotly.newPlot(graph, [], {});

function currentOrder() {
  const chosen = new Set(Array.from(select.selectedOptions, o => o.value));
  order = order.filter(s => chosen.has(s));
  for (const s of chosen) { if (!order.includes(s)) order.push(s); }
  return order;
}

async function load(route, symbols) {
  const resp = await fetch(route + '?symbols=' + encodeURIComponent(symbols.join(',')));
  if (!resp.ok) { throw new Error(await resp.text()); }
  return resp.json();
}

function showError(target, err) {
  const p = document.createElement('p');
  p.className = 'error';
  p.textContent = 'Error: ' + err.message;
  target.replaceChildren(p);
}

function card(c) {
  const div = document.createElement('div');
  div.className = 'card';
  const add = (tag, text) => { const el = document.createElement(tag); el.textContent = text; div.appendChild(el); };
  add('h3', c.heading);
  add('h4', c.title);
  for (const line of c.lines) add('p', line);
  add('p', c.summary_label);
  add('p', c.summary);
  return div;
}

select.addEventListener('change', async () => {
  const symbols = currentOrder().slice();
  const [fig, cards] = await Promise.allSettled([
    load('__FIGURE__', symbols),
    load('__PROFILES__', symbols),
  ]);
  if (fig.status === 'fulfilled') {
    graphError.textContent = '';
    Plotly.react(graph, fig.value.data, fig.value.layout);
  } else {
    Plotly.react(graph, [], {});
    graphError.textContent = 'Error: ' + fig.reason.message;
  }
  if (cards.status === 'fulfilled') {
    info.replaceChildren(...cards.value.map(card));
  } else {
    showError(info, cards.reason);
  }
});
";

/// Render the page with one `<option>` per catalog symbol.
#[must_use]
pub fn render(catalog: &SymbolCatalog) -> String {
    let mut options = String::new();
    for s in catalog.symbols() {
        // Symbols are restricted to ticker characters; no escaping needed.
        let _ = writeln!(options, r#"      <option value="{s}">{s}</option>"#);
    }
    let script = SCRIPT
        .replace("__FIGURE__", FIGURE_ROUTE)
        .replace("__PROFILES__", PROFILES_ROUTE);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>tickerboard</title>
  <style>{STYLE}</style>
  <script src="{PLOTLY_CDN}"></script>
</head>
<body>
  <div>
    <select id="dropdown" class="dropdown" multiple>
{options}    </select>
    <p id="graph-error" class="error"></p>
    <div id="graph" class="graph"></div>
    <div id="stock-info" class="stock-info"></div>
  </div>
  <script>{script}</script>
</body>
</html>
"#
    )
}
