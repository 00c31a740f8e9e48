//! Describe command implementation

use dist_models::distributions::DistributionKind;

use crate::Result;

/// Run the describe command
pub fn run(name: &str, html: bool) -> Result<()> {
    super::emit(&render(name, html)?)
}

fn render(name: &str, html: bool) -> Result<String> {
    let description = DistributionKind::from_name(name)?.description();
    Ok(if html {
        description.to_html()
    } else {
        description.to_string()
    })
}
