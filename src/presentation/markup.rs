// HTML rendering of the shell frame and page layouts
use crate::domain::page::{
    Component, CostFunction, PageLayout, SelectorStyle, HOME_PATH, PLACEHOLDER_PATH, SETTINGS_PATH,
};
use std::fmt::Write;

const SIDEBAR_LINKS: [(&str, &str); 3] = [
    ("Home", HOME_PATH),
    ("Page 1", SETTINGS_PATH),
    ("Page 2", PLACEHOLDER_PATH),
];

const SIDEBAR_STYLE: &str = "position:fixed;top:0;left:0;bottom:0;width:16rem;padding:2rem 1rem;background-color:#f8f9fa";
const CONTENT_STYLE: &str = "margin-left:18rem;margin-right:2rem;padding:2rem 1rem";

const PAGE_HEAD: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>Live dashboard</title>
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css">
<link rel="stylesheet" href="https://codepen.io/chriddyp/pen/bWLwgP.css">
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
</head>
<body>
"##;

const CLIENT_SCRIPT: &str = r##"<script>
(function () {
  const content = document.getElementById("page-content");
  const scheme = location.protocol === "https:" ? "wss" : "ws";
  const socket = new WebSocket(scheme + "://" + location.host + "/_dash/session");

  function send(msg) {
    if (socket.readyState === WebSocket.OPEN) socket.send(JSON.stringify(msg));
  }

  function mountGraphs() {
    content.querySelectorAll(".dash-graph").forEach(function (el) {
      Plotly.newPlot(el, [], {margin: {l: 30, r: 10, b: 30, t: 10}});
    });
  }

  function bindSelectors() {
    content.querySelectorAll("[data-cost-function]").forEach(function (el) {
      el.addEventListener("change", function (e) {
        send({type: "select_cost_function", value: e.target.value});
      });
    });
  }

  function markActive(path) {
    document.querySelectorAll("a[data-nav]").forEach(function (a) {
      a.classList.toggle("active", a.getAttribute("href") === path);
    });
  }

  function navigate() {
    send({type: "navigate", path: location.pathname});
  }

  socket.addEventListener("open", navigate);
  socket.addEventListener("message", function (event) {
    const msg = JSON.parse(event.data);
    if (msg.type === "page") {
      content.innerHTML = msg.html;
      markActive(msg.path);
      mountGraphs();
      bindSelectors();
    } else if (msg.type === "figure") {
      const el = document.getElementById(msg.panel);
      if (el) Plotly.react(el, msg.figure.data, msg.figure.layout);
    } else if (msg.type === "error") {
      console.warn(msg.message);
    }
  });

  document.addEventListener("click", function (e) {
    const a = e.target.closest("a[data-nav]");
    if (!a) return;
    e.preventDefault();
    if (a.getAttribute("href") !== location.pathname) {
      history.pushState({}, "", a.getAttribute("href"));
      navigate();
    }
  });
  window.addEventListener("popstate", navigate);

  mountGraphs();
  bindSelectors();
})();
</script>
"##;

/// Full document: sidebar, content slot pre-filled with `layout`, client script.
pub fn render_shell_page(layout: &PageLayout) -> String {
    let mut html = String::from(PAGE_HEAD);
    render_sidebar(&mut html, &layout.path);
    let _ = write!(
        html,
        "<div id=\"page-content\" style=\"{}\">{}</div>\n",
        CONTENT_STYLE,
        render_layout(layout)
    );
    html.push_str(CLIENT_SCRIPT);
    html.push_str("</body>\n</html>\n");
    html
}

/// Markup for the content slot only.
pub fn render_layout(layout: &PageLayout) -> String {
    let mut html = String::from("<div>");
    for component in &layout.components {
        render_component(&mut html, component);
    }
    html.push_str("</div>");
    html
}

fn render_sidebar(html: &mut String, current: &str) {
    let _ = write!(
        html,
        "<div class=\"sidebar\" style=\"{}\"><h2 class=\"display-4\">Sidebar</h2><hr>\
         <p class=\"lead\">Live acquisition dashboard</p><nav class=\"nav nav-pills flex-column\">",
        SIDEBAR_STYLE
    );
    for (label, href) in SIDEBAR_LINKS {
        let active = if href == current { " active" } else { "" };
        let _ = write!(
            html,
            "<a class=\"nav-link{}\" href=\"{}\" data-nav>{}</a>",
            active, href, label
        );
    }
    html.push_str("</nav></div>\n");
}

fn render_component(html: &mut String, component: &Component) {
    // write! into a String cannot fail
    let _ = match component {
        Component::Heading { level, text, class } => match class {
            Some(class) => write!(
                html,
                "<h{level} class=\"{}\">{}</h{level}>",
                class,
                escape(text)
            ),
            None => write!(html, "<h{level}>{}</h{level}>", escape(text)),
        },
        Component::Paragraph { text } => write!(html, "<p>{}</p>", escape(text)),
        Component::Divider => write!(html, "<hr>"),
        Component::CostFunctionSelector {
            id,
            style,
            options,
            value,
        } => {
            render_selector(html, id, *style, options, *value);
            Ok(())
        }
        Component::LiveText { id } => write!(html, "<div id=\"{}\"></div>", id),
        Component::Panel { id, .. } => write!(
            html,
            "<div id=\"{}\" class=\"dash-graph\" data-live></div>",
            id
        ),
        Component::Graph { id } => write!(html, "<div id=\"{}\" class=\"dash-graph\"></div>", id),
        Component::Interval {
            id,
            interval_ms,
            n_intervals,
        } => write!(
            html,
            "<div id=\"{}\" hidden data-interval-ms=\"{}\" data-n-intervals=\"{}\"></div>",
            id, interval_ms, n_intervals
        ),
    };
}

fn render_selector(
    html: &mut String,
    id: &str,
    style: SelectorStyle,
    options: &[CostFunction],
    value: CostFunction,
) {
    match style {
        SelectorStyle::Radio => {
            let _ = write!(html, "<div id=\"{}\">", id);
            for option in options {
                let checked = if *option == value { " checked" } else { "" };
                let _ = write!(
                    html,
                    "<label><input type=\"radio\" name=\"{}\" value=\"{}\" data-cost-function{}> {}</label>",
                    id,
                    option.value(),
                    checked,
                    option.label()
                );
            }
            html.push_str("</div>");
        }
        SelectorStyle::Dropdown => {
            let _ = write!(html, "<select id=\"{}\" data-cost-function>", id);
            for option in options {
                let selected = if *option == value { " selected" } else { "" };
                let _ = write!(
                    html,
                    "<option value=\"{}\"{}>{}</option>",
                    option.value(),
                    selected,
                    option.label()
                );
            }
            html.push_str("</select>");
        }
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::router::PageRouter;

    #[test]
    fn test_home_markup_has_both_panels() {
        let html = render_layout(&PageRouter::default().render("/"));

        assert!(html.contains("id=\"live-update-graph\""));
        assert!(html.contains("id=\"live-update-acquisition-function\""));
        assert!(html.contains("data-interval-ms=\"1000\""));
        assert!(html.contains("type=\"radio\" name=\"cost-function\" value=\"Met\" data-cost-function checked"));
        assert!(html.contains("<h4>Acquisition function</h4>"));
    }

    #[test]
    fn test_settings_markup_uses_dropdown() {
        let html = render_layout(&PageRouter::default().render("/page-1"));

        assert!(html.contains("<select id=\"cost-function\" data-cost-function>"));
        assert!(html.contains("<option value=\"RMSSD\">RMSSD</option>"));
        assert!(!html.contains("data-interval-ms"));
    }

    #[test]
    fn test_not_found_escapes_path() {
        let html = render_layout(&PageRouter::default().render("/<script>"));

        assert!(html.contains("<h1 class=\"text-danger\">404: Not found</h1>"));
        assert!(html.contains("The pathname /&lt;script&gt; was not recognised..."));
        assert!(!html.contains("/<script>"));
    }

    #[test]
    fn test_shell_page_marks_active_link() {
        let html = render_shell_page(&PageRouter::default().render("/page-2"));

        assert!(html.contains("<a class=\"nav-link active\" href=\"/page-2\" data-nav>Page 2</a>"));
        assert!(html.contains("<a class=\"nav-link\" href=\"/\" data-nav>Home</a>"));
        assert!(html.contains("Oh cool, this is page 2!"));
        assert!(html.contains("/_dash/session"));
    }
}
