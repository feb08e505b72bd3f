//! Standalone HTML shells for the charts. Rendering libraries come from CDNs,
//! data and specs are inlined, so each file opens directly in a browser.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;

use crate::chart::choropleth::PlotlyFigure;
use crate::error::{Result, VizError};

pub const VEGA_CDN: &str = "https://cdn.jsdelivr.net/npm/vega@5";
pub const VEGA_LITE_CDN: &str = "https://cdn.jsdelivr.net/npm/vega-lite@5";
pub const VEGA_EMBED_CDN: &str = "https://cdn.jsdelivr.net/npm/vega-embed@6";
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Global the Plotly page assigns the `Plotly.newPlot` promise to.
pub const PLOT_READY_GLOBAL: &str = "petvizPlotReady";

/// Serialize for inline `<script>` use. `<`, `>` and `&` only occur inside
/// JSON strings, so unicode-escaping them keeps the payload valid JSON and JS
/// while making `</script>` or `<!--` in data harmless.
pub fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let raw = serde_json::to_string(value)?;
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    Ok(out)
}

pub fn escape_html(text: &str) -> String {
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

fn generated_stamp() -> String {
    format!(
        "<!-- generated by petviz {} on {} -->",
        env!("CARGO_PKG_VERSION"),
        chrono::Utc::now().format("%Y-%m-%d")
    )
}

/// Page rendering one Vega-Lite spec through vega-embed.
pub fn vega_page(title: &str, spec: &serde_json::Value) -> Result<String> {
    let spec_json = script_json(spec)?;
    Ok(format!(
        r##"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  {stamp}
  <title>{title}</title>
  <style>
    #vis.vega-embed {{
      width: 100%;
      display: flex;
    }}
    #vis.vega-embed details,
    #vis.vega-embed details summary {{
      position: relative;
    }}
  </style>
  <script type="text/javascript" src="{VEGA_CDN}"></script>
  <script type="text/javascript" src="{VEGA_LITE_CDN}"></script>
  <script type="text/javascript" src="{VEGA_EMBED_CDN}"></script>
</head>
<body>
  <div id="vis"></div>
  <script>
    (function(vegaEmbed) {{
      var spec = {spec_json};
      var embedOpt = {{"mode": "vega-lite"}};

      function showError(el, error) {{
        el.innerHTML = ('<div style="color:red;">'
                        + '<p>JavaScript Error: ' + error.message + '</p>'
                        + "<p>This usually means there's a typo in your chart specification. "
                        + "See the javascript console for the full traceback.</p>"
                        + '</div>');
        throw error;
      }}
      const el = document.getElementById('vis');
      vegaEmbed("#vis", spec, embedOpt)
        .catch(error => showError(el, error));
    }})(vegaEmbed);
  </script>
</body>
</html>
"##,
        stamp = generated_stamp(),
        title = escape_html(title),
    ))
}

/// Page drawing one Plotly figure into `div_id`. The draw promise is kept on
/// `window.petvizPlotReady` for scripts that need the finished plot.
pub fn plotly_page(div_id: &str, figure: &PlotlyFigure) -> Result<String> {
    let data = script_json(&figure.data)?;
    let layout = script_json(&figure.layout)?;
    let config = script_json(&figure.config)?;
    let div_id = escape_html(div_id);
    Ok(format!(
        r#"<html>
<head><meta charset="utf-8" />
{stamp}
</head>
<body>
    <div>
        <script type="text/javascript">window.PlotlyConfig = {{MathJaxConfig: 'local'}};</script>
        <script charset="utf-8" src="{PLOTLY_CDN}"></script>
        <div id="{div_id}" class="plotly-graph-div" style="height:{height}px; width:{width}px;"></div>
        <script type="text/javascript">
            window.PLOTLYENV = window.PLOTLYENV || {{}};
            if (document.getElementById("{div_id}")) {{
                window.{PLOT_READY_GLOBAL} = Plotly.newPlot("{div_id}", {data}, {layout}, {config});
            }}
        </script>
    </div>
</body>
</html>
"#,
        stamp = generated_stamp(),
        width = figure.width,
        height = figure.height,
    ))
}

/// Write through a uniquely named temp file in the target directory, then
/// persist it over `path`, so a failure never leaves a truncated page.
pub fn write_html(path: &Path, html: &str) -> Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&parent).map_err(|e| VizError::io(&parent, e))?;

    let mut tmp = NamedTempFile::new_in(&parent).map_err(|e| VizError::io(&parent, e))?;
    tmp.write_all(html.as_bytes())
        .map_err(|e| VizError::io(tmp.path(), e))?;
    tmp.flush().map_err(|e| VizError::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| VizError::io(path, e.error))?;

    tracing::info!(path = %path.display(), bytes = html.len(), "chart written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn script_json_neutralizes_markup() {
        let out = script_json(&json!({"name": "</script><!-- & >"})).unwrap();
        assert!(!out.contains("</script>"));
        assert!(!out.contains("<!--"));
        let back: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(back["name"], "</script><!-- & >");
    }

    #[test]
    fn escape_html_covers_attribute_quotes() {
        assert_eq!(escape_html(r#"a<b>"c"&'d'"#), "a&lt;b&gt;&quot;c&quot;&amp;&#39;d&#39;");
    }

    #[test]
    fn write_html_replaces_target_and_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("viz.html");
        fs::write(&target, "old").unwrap();
        // A stale temp name from an interrupted run must not get in the way.
        fs::create_dir(dir.path().join("viz.html.tmp")).unwrap();

        write_html(&target, "<html>new</html>").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "<html>new</html>");
        let mut names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["viz.html", "viz.html.tmp"]);
    }

    #[test]
    fn write_html_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("site").join("nested").join("viz.html");
        write_html(&target, "<html></html>").unwrap();
        assert!(target.exists());
    }

    #[test]
    fn vega_page_inlines_spec_and_cdn() {
        let page = vega_page("Pets & People", &json!({"mark": "bar"})).unwrap();
        assert!(page.contains(VEGA_EMBED_CDN));
        assert!(page.contains(r#"var spec = {"mark":"bar"};"#));
        assert!(page.contains("<title>Pets &amp; People</title>"));
    }
}
