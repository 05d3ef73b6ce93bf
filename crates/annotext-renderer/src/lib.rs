use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

const BASE_CSS: &str = include_str!("../assets/annotext.css");

#[derive(Debug, Clone, Copy)]
pub enum Theme {
    Auto,
    Light,
    Dark,
}

/// Presentation shell around an emitted comment fragment: theme-aware
/// stylesheet and full-page embedding for previews.
#[derive(Debug, Clone)]
pub struct Renderer {
    theme: Theme,
    custom_vars: BTreeMap<String, String>,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            custom_vars: BTreeMap::new(),
        }
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_vars.insert(key.into(), value.into());
        self
    }

    pub fn stylesheet(&self) -> String {
        let mut out = String::new();
        let (light_vars, dark_vars) = default_theme_vars();

        match self.theme {
            Theme::Auto => {
                out.push_str(&root_block(&light_vars, true));
                out.push_str("@media (prefers-color-scheme: dark) {\n");
                out.push_str(&indent_root_block(&dark_vars));
                out.push_str("}\n");
            }
            Theme::Light => {
                out.push_str(&root_block(&light_vars, true));
            }
            Theme::Dark => {
                out.push_str(&root_block(&dark_vars, true));
            }
        }

        if !self.custom_vars.is_empty() {
            out.push_str(&root_block(&self.custom_vars, false));
        }

        out.push_str(BASE_CSS);
        out
    }

    pub fn embed_html(&self, html: &str, with_inline_css: bool) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n");
        out.push_str("<html lang=\"en\">\n");
        out.push_str("<head>\n");
        out.push_str("  <meta charset=\"utf-8\" />\n");
        out.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n");
        if with_inline_css {
            out.push_str("  <style>\n");
            out.push_str(&self.stylesheet());
            out.push_str("\n  </style>\n");
        }
        out.push_str("</head>\n");
        out.push_str("<body>\n");
        out.push_str("<article class=\"Annotext\">\n");
        out.push_str(html);
        if !html.ends_with('\n') {
            out.push('\n');
        }
        out.push_str("</article>\n");
        out.push_str("</body>\n");
        out.push_str("</html>\n");
        out
    }

    pub fn generate_files(&self, out_dir: &Path) -> io::Result<()> {
        fs::create_dir_all(out_dir)?;
        fs::write(out_dir.join("annotext.css"), self.stylesheet())?;
        Ok(())
    }
}

fn default_theme_vars() -> (BTreeMap<String, String>, BTreeMap<String, String>) {
    let light = BTreeMap::from([
        ("--annotext-bg".to_string(), "#fbfbf8".to_string()),
        ("--annotext-fg".to_string(), "#1f2328".to_string()),
        ("--annotext-muted".to_string(), "#5f6b76".to_string()),
        ("--annotext-border".to_string(), "#d8dee4".to_string()),
        ("--annotext-high".to_string(), "#2f855a".to_string()),
        ("--annotext-high-bg".to_string(), "#e6f4ea".to_string()),
        ("--annotext-medium".to_string(), "#b7791f".to_string()),
        ("--annotext-medium-bg".to_string(), "#fcf3df".to_string()),
        ("--annotext-low".to_string(), "#c53030".to_string()),
        ("--annotext-low-bg".to_string(), "#fbe9e9".to_string()),
        ("--annotext-unknown".to_string(), "#5f6b76".to_string()),
        ("--annotext-unknown-bg".to_string(), "#eef0f2".to_string()),
    ]);

    let dark = BTreeMap::from([
        ("--annotext-bg".to_string(), "#0e1116".to_string()),
        ("--annotext-fg".to_string(), "#e6edf3".to_string()),
        ("--annotext-muted".to_string(), "#9aa4af".to_string()),
        ("--annotext-border".to_string(), "#2a313b".to_string()),
        ("--annotext-high".to_string(), "#48bb78".to_string()),
        ("--annotext-high-bg".to_string(), "#15281d".to_string()),
        ("--annotext-medium".to_string(), "#ecc94b".to_string()),
        ("--annotext-medium-bg".to_string(), "#2b2413".to_string()),
        ("--annotext-low".to_string(), "#f56565".to_string()),
        ("--annotext-low-bg".to_string(), "#2d1616".to_string()),
        ("--annotext-unknown".to_string(), "#9aa4af".to_string()),
        ("--annotext-unknown-bg".to_string(), "#1b212b".to_string()),
    ]);

    (light, dark)
}

fn format_vars(vars: &BTreeMap<String, String>) -> String {
    let mut out = String::new();
    for (key, value) in vars {
        out.push_str("  ");
        out.push_str(key);
        out.push_str(": ");
        out.push_str(value);
        out.push_str(";\n");
    }
    out
}

fn root_block(vars: &BTreeMap<String, String>, include_color_scheme: bool) -> String {
    let mut out = String::new();
    out.push_str(":root {\n");
    if include_color_scheme {
        out.push_str("  color-scheme: light dark;\n");
    }
    out.push_str(&format_vars(vars));
    out.push_str("}\n");
    out
}

fn indent_root_block(vars: &BTreeMap<String, String>) -> String {
    let mut out = String::new();
    out.push_str("  :root {\n");
    out.push_str("    color-scheme: light dark;\n");
    for (key, value) in vars {
        out.push_str("    ");
        out.push_str(key);
        out.push_str(": ");
        out.push_str(value);
        out.push_str(";\n");
    }
    out.push_str("  }\n");
    out
}
