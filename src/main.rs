use phasecomp::settings;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let settings = settings::load_config()?;
    log::info!("{}", settings);

    let evaluation = settings.material.evaluate(
        &settings.wavelengths,
        settings.temperature,
        settings.reference_length,
    )?;

    if settings.json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else {
        println!("{}", evaluation);
    }
    Ok(())
}
