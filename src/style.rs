//! Page theme and generated stylesheet.

/// Visual configuration for the rendered page. The defaults reproduce the
/// clinic styling: pink accents, light grey page, white cards.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub primary_color: String,
    pub background_color: String,
    pub card_shadow: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: "#E83E8C".to_string(),
            background_color: "#F0F2F6".to_string(),
            card_shadow: true,
        }
    }
}

impl Theme {
    /// Stylesheet text embedded inline into the page head. Generated from
    /// the theme fields so the page carries no external references.
    pub fn stylesheet(&self) -> String {
        let shadow = if self.card_shadow {
            "box-shadow: 0 4px 8px 0 rgba(0,0,0,0.1);"
        } else {
            ""
        };
        format!(
            r#"body {{
  background-color: {bg};
  font-family: "Source Sans Pro", "Segoe UI", system-ui, sans-serif;
  color: #262730;
  margin: 0;
  padding: 2rem 3rem;
}}

.header {{
  background-color: {primary};
  color: white;
  padding: 25px;
  border-radius: 10px;
  margin-bottom: 25px;
  display: flex;
  align-items: center;
  justify-content: flex-start;
}}

.header h1 {{
  font-size: 2.5em;
  margin: 0;
  padding-left: 20px;
}}

.columns {{
  display: flex;
  gap: 25px;
  align-items: flex-start;
}}

.col {{
  border-radius: 10px;
  padding: 20px;
  background-color: white;
  {shadow}
}}

.chart-col {{
  flex: 1;
}}

.detail-col {{
  flex: 1.2;
}}

h2 {{
  color: {primary};
  border-bottom: 2px solid {primary};
  padding-bottom: 5px;
  margin-top: 10px;
  margin-bottom: 20px;
}}

h5 {{
  margin: 10px 0 6px 0;
}}

hr {{
  border: none;
  border-top: 1px solid #e6e6e6;
  margin: 20px 0;
}}

.metric-grid {{
  display: grid;
  gap: 14px 20px;
}}

.metric-grid.cols-2 {{
  grid-template-columns: repeat(2, 1fr);
}}

.metric-grid.cols-3 {{
  grid-template-columns: repeat(3, 1fr);
}}

.metric-label {{
  font-size: 1.1em;
  color: #555;
}}

.metric-value {{
  font-size: 1.3em;
  font-weight: bold;
}}

.callout {{
  background-color: #e8f4fd;
  border-left: 4px solid #1c83e1;
  border-radius: 6px;
  padding: 14px 18px;
}}

.callout p {{
  margin: 6px 0;
}}

.disclaimer {{
  font-size: 0.8em;
  color: #888;
  font-style: italic;
  margin-top: 20px;
}}

.plot {{
  margin: 8px 0 6px 0;
}}

svg {{
  background: rgba(0,0,0,0);
}}
"#,
            bg = self.background_color,
            primary = self.primary_color,
            shadow = shadow,
        )
    }
}
