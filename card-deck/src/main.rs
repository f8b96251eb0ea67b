use anyhow::Context;
use card_deck_rs::{generate_deck, CardDesign, CardRenderer, DeckOptions};
use clap::Parser;

/// card-deck: Render all 72 cards of a four-color shedding card game into ./uno_deck
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {}

fn main() -> anyhow::Result<()> {
    let _args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = DeckOptions::default();
    let mut renderer = CardRenderer::with_design(CardDesign::default());
    let report = generate_deck(&options, &mut renderer).with_context(|| {
        format!(
            "Failed to generate deck into {}",
            options.output_dir.display()
        )
    })?;

    println!(
        "Generated {} cards in '{}'",
        report.written.len(),
        options.output_dir.display()
    );
    Ok(())
}
