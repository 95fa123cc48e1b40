use anyhow::Context;

fn main() -> anyhow::Result<()> {
    roster_observability::init();

    let roster = roster_students::demo::run()?;

    let json = serde_json::to_string_pretty(&roster).context("failed to serialize roster")?;
    println!("{json}");

    Ok(())
}
