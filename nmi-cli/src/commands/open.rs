use anyhow::Result;
use clap::Args;
use nmi_core::registry::registry_urls;
use nmi_core::{InspectError, InspectorConfig, console};

#[derive(Args, Debug)]
pub struct OpenArgs {
    /// Package name to look up
    pub name: String,

    /// Print every registry URL instead of opening a browser
    #[arg(long = "print")]
    pub print: bool,
}

pub async fn run(args: OpenArgs, config: &InspectorConfig) -> Result<()> {
    let primary = config.primary_registry();
    let urls = registry_urls(args.name.trim(), primary.as_ref());

    let Some(first) = urls.first() else {
        console::warn(
            &InspectError::NoRegistry {
                name: args.name.clone(),
            }
            .to_string(),
        );
        return Ok(());
    };

    if args.print {
        for target in &urls {
            console::info(&format!("{}: {}", target.name, target.url));
        }
        return Ok(());
    }

    console::info(&format!("Opening {} on {}", args.name, first.name));
    if let Err(err) = ::open::that(&first.url) {
        console::error(&format!("could not open browser: {}", err));
        console::info(&first.url);
    }

    Ok(())
}
