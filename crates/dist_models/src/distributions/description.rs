//! Structured help metadata for distributions.
//!
//! A [`Description`] carries the sections the host UI displays for a
//! distribution: overview, parameters, sample usage, distribution-function
//! usage and moment usage. It can be rendered as plain text (`Display`) or
//! as the HTML fragment used by tooltip-style help panes ([`Description::to_html`]).

use std::fmt;

use super::family::Mode;

/// Font used for symbols and call signatures in the HTML rendering.
const CONSOLE_FONT: &str = "Consolas";

/// Colour used for the distribution name in call signatures.
const FUNCTION_COLOUR: &str = "green";

/// One positional parameter of a distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParameterDoc {
    /// Conventional symbol (e.g. `μ`)
    pub symbol: &'static str,
    /// Meaning of the parameter
    pub meaning: &'static str,
    /// Domain restriction, if any (e.g. `>0`)
    pub constraint: Option<&'static str>,
}

impl ParameterDoc {
    /// Creates an unconstrained parameter entry.
    pub fn new(symbol: &'static str, meaning: &'static str) -> Self {
        Self {
            symbol,
            meaning,
            constraint: None,
        }
    }

    /// Attaches a domain restriction.
    pub fn with_constraint(mut self, constraint: &'static str) -> Self {
        self.constraint = Some(constraint);
        self
    }
}

/// One example invocation of a distribution in a given mode.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UsageDoc {
    /// Comma-separated positional arguments (e.g. `x,μ,σ`)
    pub args: &'static str,
    /// Mode selected by the trailing token
    pub mode: Mode,
    /// What the call returns
    pub text: &'static str,
}

impl UsageDoc {
    /// Creates a usage entry.
    pub fn new(args: &'static str, mode: Mode, text: &'static str) -> Self {
        Self { args, mode, text }
    }

    /// Call signature as typed by the user, e.g. `Norm(x,μ,σ,F)`.
    pub fn signature(&self, function: &str) -> String {
        format!("{}({},{})", function, self.args, self.mode.token())
    }
}

/// Help metadata for one distribution.
///
/// # Examples
/// ```
/// use dist_models::distributions::normal;
///
/// let help = normal::description();
/// let text = help.to_string();
/// assert!(text.starts_with("Normal Distribution"));
/// assert!(text.contains("Norm(x,μ,σ,F)"));
/// assert!(help.to_html().starts_with("<html><b>Normal Distribution</b>"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Description {
    /// Identifying name used in calls (e.g. `Norm`)
    pub function: &'static str,
    /// Display name
    pub name: &'static str,
    /// One-line overview
    pub summary: &'static str,
    /// Positional parameters
    pub parameters: Vec<ParameterDoc>,
    /// Sample-mode usage
    pub sample: Vec<UsageDoc>,
    /// Density, cumulative and quantile usage
    pub distribution_functions: Vec<UsageDoc>,
    /// Mean and variance usage
    pub moments: Vec<UsageDoc>,
}

impl Description {
    /// Usage sections paired with their headings, in display order.
    pub fn usage_sections(&self) -> [(&'static str, &[UsageDoc]); 3] {
        [
            ("Sample", self.sample.as_slice()),
            ("Distribution Functions", self.distribution_functions.as_slice()),
            ("Moments", self.moments.as_slice()),
        ]
    }

    /// Renders the HTML fragment shown in the host's help pane.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<html>");
        html.push_str(&format!("<b>{}</b><br>", escape_html(self.name)));
        html.push_str(&format!("{}<br><br>", escape_html(self.summary)));

        html.push_str("<i>Parameters</i><br>");
        for param in &self.parameters {
            html.push_str(&console_font(&escape_html(param.symbol)));
            html.push_str(": ");
            html.push_str(&escape_html(param.meaning));
            if let Some(constraint) = param.constraint {
                html.push_str(&format!(" ({})", console_font(&escape_html(constraint))));
            }
            html.push_str("<br>");
        }

        for (heading, usages) in self.usage_sections() {
            html.push_str(&format!("<br><i>{}</i><br>", heading));
            for usage in usages {
                let name = console_font_coloured(&format!("<b>{}</b>", self.function));
                let args = console_font(&format!(
                    "({},<b><i>{}</i></b>)",
                    escape_html(usage.args),
                    escape_html(usage.mode.token())
                ));
                html.push_str(&format!("{}{}: {}<br>", name, args, escape_html(usage.text)));
            }
        }

        html.push_str("</html>");
        html
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", self.summary)?;
        writeln!(f)?;
        writeln!(f, "Parameters")?;
        for param in &self.parameters {
            match param.constraint {
                Some(constraint) => {
                    writeln!(f, "  {}: {} ({})", param.symbol, param.meaning, constraint)?
                }
                None => writeln!(f, "  {}: {}", param.symbol, param.meaning)?,
            }
        }
        for (heading, usages) in self.usage_sections() {
            writeln!(f)?;
            writeln!(f, "{}", heading)?;
            for usage in usages {
                writeln!(f, "  {}: {}", usage.signature(self.function), usage.text)?;
            }
        }
        Ok(())
    }
}

fn console_font(text: &str) -> String {
    format!("<font face=\"{}\">{}</font>", CONSOLE_FONT, text)
}

fn console_font_coloured(text: &str) -> String {
    format!(
        "<font face=\"{}\" color=\"{}\">{}</font>",
        CONSOLE_FONT, FUNCTION_COLOUR, text
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
